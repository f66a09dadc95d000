//! Reporting period selectors and the placeholder chart series they drive

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date range dropdown entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRangePreset {
    Today,
    Week,
    #[default]
    Month,
    Year,
    Custom,
}

impl DateRangePreset {
    pub const ALL: [DateRangePreset; 5] = [
        DateRangePreset::Today,
        DateRangePreset::Week,
        DateRangePreset::Month,
        DateRangePreset::Year,
        DateRangePreset::Custom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DateRangePreset::Today => "Today",
            DateRangePreset::Week => "This Week",
            DateRangePreset::Month => "This Month",
            DateRangePreset::Year => "This Year",
            DateRangePreset::Custom => "Custom Range",
        }
    }
}

/// Aggregation cycle for the sales trend chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cycle {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl Cycle {
    pub const ALL: [Cycle; 4] = [Cycle::Daily, Cycle::Weekly, Cycle::Monthly, Cycle::Yearly];

    pub fn label(&self) -> &'static str {
        match self {
            Cycle::Daily => "Daily",
            Cycle::Weekly => "Weekly",
            Cycle::Monthly => "Monthly",
            Cycle::Yearly => "Yearly",
        }
    }
}

/// Inclusive custom date window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The range currently applied to every card and chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRangeSelection {
    pub preset: DateRangePreset,
    pub custom: Option<CustomRange>,
}

impl DateRangeSelection {
    pub fn new(preset: DateRangePreset) -> Self {
        Self { preset, custom: None }
    }

    /// Choose a preset. Picking "custom" here only opens the picker, so it
    /// leaves the selection alone and returns false.
    pub fn select_preset(&mut self, preset: DateRangePreset) -> bool {
        if preset == DateRangePreset::Custom {
            return false;
        }
        self.preset = preset;
        true
    }

    /// Apply a custom range from two `YYYY-MM-DD` inputs. Empty or unparsable
    /// input is ignored.
    pub fn apply_custom(&mut self, start: &str, end: &str) -> Option<CustomRange> {
        let parse = |s: &str| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok();
        let range = CustomRange {
            start: parse(start)?,
            end: parse(end)?,
        };
        self.preset = DateRangePreset::Custom;
        self.custom = Some(range);
        Some(range)
    }

    fn active_custom(&self) -> Option<CustomRange> {
        match self.preset {
            DateRangePreset::Custom => self.custom,
            _ => None,
        }
    }

    /// Dropdown button text, e.g. "Jan 5 - Feb 3, 2025"
    pub fn display_label(&self) -> String {
        match self.active_custom() {
            Some(range) => format!(
                "{} - {}",
                range.start.format("%b %-d"),
                range.end.format("%b %-d, %Y")
            ),
            None if self.preset == DateRangePreset::Custom => "Select Range".to_string(),
            None => self.preset.label().to_string(),
        }
    }

    /// Caption used on KPI cards, e.g. "Jan 5 - Feb 3"
    pub fn card_label(&self) -> String {
        match self.active_custom() {
            Some(range) => format!("{} - {}", range.start.format("%b %-d"), range.end.format("%b %-d")),
            None if self.preset == DateRangePreset::Custom => String::new(),
            None => self.preset.label().to_string(),
        }
    }
}

/// Illustrative sales trend points for the chart placeholder
pub fn sales_trend(cycle: Cycle) -> Vec<(String, f64)> {
    let labels = |names: &[&str]| names.iter().map(|n| n.to_string()).collect::<Vec<_>>();
    let (labels, values): (Vec<String>, Vec<f64>) = match cycle {
        Cycle::Daily => (
            labels(&["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]),
            vec![4.2, 5.1, 4.8, 6.3, 7.0, 3.1, 2.4],
        ),
        Cycle::Weekly => (
            (1..=4).map(|w| format!("W{}", w)).collect(),
            vec![28.5, 31.2, 26.9, 34.8],
        ),
        Cycle::Monthly => (
            labels(&["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]),
            vec![112.0, 98.0, 125.0, 131.0, 118.0, 142.0, 150.0, 139.0, 156.0, 161.0, 149.0, 172.0],
        ),
        Cycle::Yearly => (
            (2020..=2024).map(|y| y.to_string()).collect(),
            vec![1210.0, 1345.0, 1502.0, 1588.0, 1731.0],
        ),
    };
    labels.into_iter().zip(values).collect()
}

/// Illustrative activity counts for the "Top Activities" placeholder
pub fn top_activities() -> Vec<(&'static str, f64)> {
    vec![
        ("Client Visits", 48.0),
        ("Calls", 36.0),
        ("Demos", 22.0),
        ("Proposals", 15.0),
        ("Follow-ups", 11.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_labels() {
        let selection = DateRangeSelection::default();
        assert_eq!(selection.display_label(), "This Month");
        assert_eq!(selection.card_label(), "This Month");
    }

    #[test]
    fn test_custom_preset_only_opens_picker() {
        let mut selection = DateRangeSelection::new(DateRangePreset::Week);
        assert!(!selection.select_preset(DateRangePreset::Custom));
        assert_eq!(selection.preset, DateRangePreset::Week);
        assert!(selection.select_preset(DateRangePreset::Year));
        assert_eq!(selection.preset, DateRangePreset::Year);
    }

    #[test]
    fn test_apply_custom_range() {
        let mut selection = DateRangeSelection::default();
        assert!(selection.apply_custom("", "2025-02-03").is_none());
        assert!(selection.apply_custom("2025-13-01", "2025-02-03").is_none());
        assert_eq!(selection.preset, DateRangePreset::Month);

        let range = selection.apply_custom("2025-01-05", "2025-02-03").unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
        assert_eq!(selection.display_label(), "Jan 5 - Feb 3, 2025");
        assert_eq!(selection.card_label(), "Jan 5 - Feb 3");

        selection.select_preset(DateRangePreset::Today);
        assert_eq!(selection.card_label(), "Today");
    }

    #[test]
    fn test_series_lengths() {
        assert_eq!(sales_trend(Cycle::Daily).len(), 7);
        assert_eq!(sales_trend(Cycle::Weekly).len(), 4);
        assert_eq!(sales_trend(Cycle::Monthly).len(), 12);
        assert_eq!(sales_trend(Cycle::Yearly).len(), 5);
        assert_eq!(top_activities().len(), 5);
    }
}
