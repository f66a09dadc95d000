//! Miniature chart shapes for library cards and wizard options

use ds_core::PreviewType;
use egui::{pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui};

const BLUE_500: Color32 = Color32::from_rgb(59, 130, 246);
const BLUE_400: Color32 = Color32::from_rgb(96, 165, 250);
const BLUE_300: Color32 = Color32::from_rgb(147, 197, 253);
const NEUTRAL_200: Color32 = Color32::from_rgb(229, 231, 235);
const NEUTRAL_800: Color32 = Color32::from_rgb(31, 41, 55);

/// Draw the preview for `kind` into a box of the given height
pub fn widget_preview(ui: &mut Ui, kind: PreviewType, height: f32) {
    let width = ui.available_width().min(220.0);
    let (response, painter) = ui.allocate_painter(vec2(width, height), Sense::hover());
    let rect = response.rect.shrink(6.0);

    // Maps a point in a 100 x 60 design space into `rect`
    let at = |x: f32, y: f32| pos2(rect.left() + rect.width() * x / 100.0, rect.top() + rect.height() * y / 60.0);

    match kind {
        PreviewType::Number => {
            painter.text(
                rect.center() - vec2(0.0, 6.0),
                Align2::CENTER_CENTER,
                "1,284",
                FontId::proportional(22.0),
                BLUE_500,
            );
            painter.text(
                rect.center() + vec2(0.0, 14.0),
                Align2::CENTER_CENTER,
                "+12.5%",
                FontId::proportional(11.0),
                Color32::from_rgb(22, 163, 74),
            );
        }
        PreviewType::Bar => {
            let heights: [f32; 5] = [0.45, 0.75, 0.55, 0.9, 0.65];
            let slot = rect.width() / heights.len() as f32;
            for (i, h) in heights.iter().enumerate() {
                let left = rect.left() + slot * i as f32 + slot * 0.2;
                let bar = Rect::from_min_max(
                    pos2(left, rect.bottom() - rect.height() * *h),
                    pos2(left + slot * 0.6, rect.bottom()),
                );
                painter.rect_filled(bar, 2.0, BLUE_500);
            }
        }
        PreviewType::Line => {
            let points: Vec<Pos2> = [(0.0, 45.0), (20.0, 37.0), (40.0, 22.0), (60.0, 30.0), (80.0, 15.0), (100.0, 18.0)]
                .iter()
                .map(|(x, y)| at(*x, *y))
                .collect();
            painter.add(Shape::line(points.clone(), Stroke::new(2.0, BLUE_500)));
            for p in points {
                painter.circle_filled(p, 2.5, BLUE_500);
            }
        }
        PreviewType::Pie => {
            let center = rect.center();
            let radius = rect.height().min(rect.width()) / 2.0;
            painter.circle_filled(center, radius, BLUE_300);
            painter.add(wedge(center, radius, -90.0, 45.0, BLUE_500));
            painter.add(wedge(center, radius, 45.0, 180.0, BLUE_400));
        }
        PreviewType::Table => {
            let rows = 4;
            let row_h = rect.height() / rows as f32;
            for row in 0..rows {
                let y = rect.top() + row_h * row as f32;
                let fill = if row == 0 { BLUE_300 } else { NEUTRAL_200 };
                for col in 0..3 {
                    let x = rect.left() + rect.width() / 3.0 * col as f32;
                    let cell = Rect::from_min_size(pos2(x + 2.0, y + 2.0), vec2(rect.width() / 3.0 - 4.0, row_h - 4.0));
                    painter.rect_filled(cell, 1.0, fill);
                }
            }
        }
        PreviewType::Map => {
            painter.rect_filled(rect, 4.0, NEUTRAL_200);
            for (x, y, r) in [(25.0, 20.0, 5.0), (55.0, 35.0, 7.0), (78.0, 18.0, 4.0), (40.0, 48.0, 3.5)] {
                painter.circle_filled(at(x, y), r, BLUE_500.linear_multiply(0.8));
            }
        }
        PreviewType::Funnel => {
            let stages: [f32; 4] = [1.0, 0.75, 0.5, 0.3];
            let stage_h = rect.height() / stages.len() as f32;
            for (i, w) in stages.iter().enumerate() {
                let width = rect.width() * *w;
                let stage = Rect::from_center_size(
                    pos2(rect.center().x, rect.top() + stage_h * (i as f32 + 0.5)),
                    vec2(width, stage_h - 3.0),
                );
                painter.rect_filled(stage, 2.0, BLUE_500.linear_multiply(1.0 - i as f32 * 0.18));
            }
        }
        PreviewType::Gauge => {
            let center = at(50.0, 55.0);
            let radius = (rect.width() / 2.5).min(rect.height() - 6.0);
            painter.add(arc(center, radius, 180.0, 360.0, Stroke::new(7.0, NEUTRAL_200)));
            painter.add(arc(center, radius, 180.0, 300.0, Stroke::new(7.0, BLUE_500)));
            let needle = angle_point(center, radius * 0.8, 300.0);
            painter.line_segment([center, needle], Stroke::new(2.0, NEUTRAL_800));
            painter.circle_filled(center, 3.5, NEUTRAL_800);
        }
    }
}

fn angle_point(center: Pos2, radius: f32, degrees: f32) -> Pos2 {
    let rad = degrees.to_radians();
    pos2(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

fn arc_points(center: Pos2, radius: f32, from: f32, to: f32) -> Vec<Pos2> {
    let steps = 24;
    (0..=steps)
        .map(|i| angle_point(center, radius, from + (to - from) * i as f32 / steps as f32))
        .collect()
}

fn arc(center: Pos2, radius: f32, from: f32, to: f32, stroke: Stroke) -> Shape {
    Shape::line(arc_points(center, radius, from, to), stroke)
}

fn wedge(center: Pos2, radius: f32, from: f32, to: f32, fill: Color32) -> Shape {
    // Split into narrow fans so each polygon stays convex
    let points = arc_points(center, radius, from, to);
    let fans = points
        .windows(2)
        .map(|pair| Shape::convex_polygon(vec![center, pair[0], pair[1]], fill, Stroke::NONE))
        .collect();
    Shape::Vec(fans)
}
