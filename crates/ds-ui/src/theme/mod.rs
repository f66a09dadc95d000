use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Neutral Light".to_string(),
            dark_mode: false,
        }
    }
}

impl Theme {
    pub fn from_settings(settings: &ds_core::AppSettings) -> Self {
        if settings.dark_mode {
            Self {
                name: "Neutral Dark".to_string(),
                dark_mode: true,
            }
        } else {
            Self::default()
        }
    }
}

/// Apply the shell theme: neutral surfaces with a blue accent
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();

    let (mut visuals, bg_color, panel_bg, widget_bg, hover_color, border, text_color) = if theme.dark_mode {
        (
            Visuals::dark(),
            Color32::from_rgb(23, 23, 23),
            Color32::from_rgb(31, 31, 31),
            Color32::from_rgb(40, 40, 40),
            Color32::from_rgb(50, 50, 50),
            Color32::from_rgb(64, 64, 64),
            Color32::from_rgb(229, 229, 229),
        )
    } else {
        (
            Visuals::light(),
            Color32::from_rgb(250, 250, 250), // neutral-50
            Color32::WHITE,
            Color32::from_rgb(245, 245, 245), // neutral-100
            Color32::from_rgb(239, 246, 255), // blue-50
            Color32::from_rgb(229, 229, 229), // neutral-200
            Color32::from_rgb(23, 23, 23),    // neutral-900
        )
    };
    let accent = accent_color();

    visuals.window_fill = panel_bg;
    visuals.panel_fill = bg_color;
    visuals.extreme_bg_color = panel_bg;
    visuals.faint_bg_color = widget_bg;
    visuals.window_rounding = Rounding::same(16.0);
    visuals.window_stroke = Stroke::new(1.0, border);

    let rounding = Rounding::same(8.0);
    for widgets in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widgets.rounding = rounding;
        widgets.fg_stroke = Stroke::new(1.0, text_color);
    }

    visuals.widgets.noninteractive.bg_fill = panel_bg;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, border);

    visuals.widgets.inactive.bg_fill = widget_bg;
    visuals.widgets.inactive.weak_bg_fill = widget_bg;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, border);

    visuals.widgets.hovered.bg_fill = hover_color;
    visuals.widgets.hovered.weak_bg_fill = hover_color;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, accent.linear_multiply(0.5));

    visuals.widgets.active.bg_fill = hover_color;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent);

    // Selection and highlighting
    visuals.selection.bg_fill = accent.linear_multiply(0.25);
    visuals.selection.stroke = Stroke::new(1.0, accent);
    visuals.hyperlink_color = accent;

    visuals.window_shadow.extrusion = 24.0;
    visuals.popup_shadow.extrusion = 8.0;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.menu_margin = egui::Margin::same(6.0);
    style.spacing.indent = 16.0;

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Blue-600
pub fn accent_color() -> Color32 {
    Color32::from_rgb(37, 99, 235)
}

/// Secondary text (neutral-500)
pub fn muted_color() -> Color32 {
    Color32::from_rgb(115, 115, 115)
}

pub fn error_color() -> Color32 {
    Color32::from_rgb(220, 38, 38)
}

pub fn success_color() -> Color32 {
    Color32::from_rgb(22, 163, 74)
}

/// Parse a `#rrggbb` accent, falling back to the default accent
pub fn color_from_hex(hex: &str) -> Color32 {
    parse_hex(hex).unwrap_or_else(accent_color)
}

fn parse_hex(hex: &str) -> Option<Color32> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(color_from_hex("#dc2626"), Color32::from_rgb(0xdc, 0x26, 0x26));
        assert_eq!(color_from_hex(ds_core::wizard::DEFAULT_COLOR_ACCENT), accent_color());
        assert_eq!(color_from_hex("red"), accent_color());
        assert_eq!(color_from_hex("#12345"), accent_color());
    }
}
