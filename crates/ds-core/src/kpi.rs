//! KPI card state: refresh simulation, "last updated" text and CSV export

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Direction of the period-over-period change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
        }
    }
}

/// Glyph shown in the card corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiIcon {
    Users,
    UserPlus,
    Refund,
    Clock,
}

/// Card-local value filter menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueFilter {
    #[default]
    AllValues,
    AboveAverage,
    BelowAverage,
}

impl ValueFilter {
    pub const ALL: [ValueFilter; 3] = [
        ValueFilter::AllValues,
        ValueFilter::AboveAverage,
        ValueFilter::BelowAverage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ValueFilter::AllValues => "All Values",
            ValueFilter::AboveAverage => "Above Average",
            ValueFilter::BelowAverage => "Below Average",
        }
    }
}

/// A headline metric tile
#[derive(Debug, Clone)]
pub struct KpiCard {
    pub title: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
    pub icon: KpiIcon,
    pub value_filter: ValueFilter,
    last_updated: DateTime<Utc>,
    refresh_started: Option<DateTime<Utc>>,
}

impl KpiCard {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        change: impl Into<String>,
        trend: Trend,
        icon: KpiIcon,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change: change.into(),
            trend,
            icon,
            value_filter: ValueFilter::default(),
            last_updated: now,
            refresh_started: None,
        }
    }

    /// The four cards on the top row of every dashboard
    pub fn defaults(now: DateTime<Utc>) -> Vec<KpiCard> {
        vec![
            KpiCard::new("Active Clients", "1,284", "+12.5%", Trend::Up, KpiIcon::Users, now),
            KpiCard::new("Newly Added Clients", "156", "+8.2%", Trend::Up, KpiIcon::UserPlus, now),
            KpiCard::new("Total Refunds", "$12,450", "-3.1%", Trend::Down, KpiIcon::Refund, now),
            KpiCard::new("Avg Resolve Time", "4.2h", "-15.3%", Trend::Down, KpiIcon::Clock, now),
        ]
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh_started.is_some()
    }

    /// Start a simulated refresh; ignored while one is in flight
    pub fn begin_refresh(&mut self, now: DateTime<Utc>) {
        if self.refresh_started.is_none() {
            debug!(card = %self.title, "refresh started");
            self.refresh_started = Some(now);
        }
    }

    /// Finish the refresh once `delay` has elapsed. Returns true on completion.
    pub fn poll_refresh(&mut self, now: DateTime<Utc>, delay: Duration) -> bool {
        match self.refresh_started {
            Some(started) if now - started >= delay => {
                self.refresh_started = None;
                self.last_updated = now;
                debug!(card = %self.title, "refresh finished");
                true
            }
            _ => false,
        }
    }

    /// Relative "Updated ..." caption
    pub fn time_ago(&self, now: DateTime<Utc>) -> String {
        let seconds = (now - self.last_updated).num_seconds().max(0);
        if seconds < 60 {
            return "Updated a few seconds ago".to_string();
        }
        let minutes = seconds / 60;
        if minutes < 60 {
            return format!("Updated {}", plural(minutes, "minute"));
        }
        let hours = minutes / 60;
        if hours < 24 {
            return format!("Updated {}", plural(hours, "hour"));
        }
        format!("Updated {}", plural(hours / 24, "day"))
    }

    /// Single-row CSV export of this card
    pub fn export_csv(&self) -> String {
        format!(
            "Metric,Value,Change,Trend\n{},{},{},{}",
            self.title,
            self.value,
            self.change,
            self.trend.as_str()
        )
    }

    /// Suggested export file name, e.g. `total-refunds.csv`
    pub fn export_file_name(&self) -> String {
        let slug = self
            .title
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        format!("{}.csv", slug)
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count > 1 {
        format!("{} {}s ago", count, unit)
    } else {
        format!("{} {} ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap()
    }

    fn card() -> KpiCard {
        KpiCard::new("Total Refunds", "$12,450", "-3.1%", Trend::Down, KpiIcon::Refund, at(0))
    }

    #[test]
    fn test_time_ago_buckets() {
        let card = card();
        assert_eq!(card.time_ago(at(5)), "Updated a few seconds ago");
        assert_eq!(card.time_ago(at(60)), "Updated 1 minute ago");
        assert_eq!(card.time_ago(at(150)), "Updated 2 minutes ago");
        assert_eq!(card.time_ago(at(3600)), "Updated 1 hour ago");
        assert_eq!(card.time_ago(at(5 * 3600)), "Updated 5 hours ago");
        assert_eq!(card.time_ago(at(24 * 3600)), "Updated 1 day ago");
        assert_eq!(card.time_ago(at(72 * 3600)), "Updated 3 days ago");
    }

    #[test]
    fn test_refresh_completes_after_delay() {
        let mut card = card();
        let delay = Duration::milliseconds(1000);

        card.begin_refresh(at(10));
        assert!(card.is_refreshing());
        assert!(!card.poll_refresh(at(10), delay));

        // A second click while refreshing does not restart the timer
        card.begin_refresh(at(11));
        assert!(card.poll_refresh(at(11), delay));
        assert!(!card.is_refreshing());
        assert_eq!(card.last_updated(), at(11));
        assert!(!card.poll_refresh(at(20), delay));
    }

    #[test]
    fn test_export() {
        let card = card();
        assert_eq!(
            card.export_csv(),
            "Metric,Value,Change,Trend\nTotal Refunds,$12,450,-3.1%,down"
        );
        assert_eq!(card.export_file_name(), "total-refunds.csv");
    }

    #[test]
    fn test_defaults() {
        let cards = KpiCard::defaults(at(0));
        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Active Clients", "Newly Added Clients", "Total Refunds", "Avg Resolve Time"]
        );
        assert_eq!(cards[3].trend, Trend::Down);
    }
}
