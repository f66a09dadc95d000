//! Application settings loaded from an optional JSON file

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::period::{Cycle, DateRangePreset};
use crate::ShellError;

/// Environment variable naming a settings file
pub const CONFIG_ENV: &str = "DASHBOARD_SHELL_CONFIG";

/// Settings file looked up in the working directory
pub const CONFIG_FILE: &str = "dashboard-shell.json";

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Use the dark palette
    pub dark_mode: bool,

    /// Open the filter side panel on start
    pub filter_panel_open: bool,

    /// Initial date range for cards and charts
    pub default_date_range: DateRangePreset,

    /// Initial aggregation cycle for the sales trend
    pub default_cycle: Cycle,

    /// Simulated KPI refresh latency
    pub kpi_refresh_delay_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            filter_panel_open: false,
            default_date_range: DateRangePreset::Month,
            default_cycle: Cycle::Monthly,
            kpi_refresh_delay_ms: 1000,
        }
    }
}

impl AppSettings {
    /// Parse settings from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, ShellError> {
        let text = std::fs::read_to_string(path).map_err(|source| ShellError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ShellError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the settings file: `$DASHBOARD_SHELL_CONFIG` first, then
    /// `dashboard-shell.json` in the working directory
    pub fn locate() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(CONFIG_FILE);
        local.exists().then_some(local)
    }

    /// Load settings, falling back to defaults when no file is found or the
    /// file is unusable
    pub fn load() -> Self {
        let Some(path) = Self::locate() else {
            return Self::default();
        };
        match Self::from_path(&path) {
            Ok(settings) => {
                info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Refresh delay; values past `i64::MAX` milliseconds saturate
    pub fn kpi_refresh_delay(&self) -> chrono::Duration {
        let ms = i64::try_from(self.kpi_refresh_delay_ms).unwrap_or(i64::MAX);
        chrono::Duration::milliseconds(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{ "dark_mode": true, "default_cycle": "weekly" }"#).unwrap();
        assert!(settings.dark_mode);
        assert_eq!(settings.default_cycle, Cycle::Weekly);
        assert_eq!(settings.default_date_range, DateRangePreset::Month);
        assert_eq!(settings.kpi_refresh_delay_ms, 1000);
    }

    #[test]
    fn test_from_path_reports_errors() {
        let dir = std::env::temp_dir().join(format!("ds-settings-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("missing.json");
        assert!(matches!(AppSettings::from_path(&missing), Err(ShellError::ConfigRead { .. })));

        let broken = dir.join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(AppSettings::from_path(&broken), Err(ShellError::ConfigParse { .. })));

        let good = dir.join("good.json");
        std::fs::write(&good, r#"{ "filter_panel_open": true, "kpi_refresh_delay_ms": 250 }"#).unwrap();
        let settings = AppSettings::from_path(&good).unwrap();
        assert!(settings.filter_panel_open);
        assert_eq!(settings.kpi_refresh_delay(), chrono::Duration::milliseconds(250));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_huge_refresh_delay_saturates() {
        let settings: AppSettings =
            serde_json::from_str(r#"{ "kpi_refresh_delay_ms": 9223372036854775808 }"#).unwrap();
        assert_eq!(settings.kpi_refresh_delay(), chrono::Duration::milliseconds(i64::MAX));

        let settings = AppSettings {
            kpi_refresh_delay_ms: u64::MAX,
            ..AppSettings::default()
        };
        let delay = settings.kpi_refresh_delay();
        assert!(delay > chrono::Duration::zero());

        // A pending refresh never completes instead of panicking or finishing at once
        let now = chrono::Utc::now();
        let mut state = crate::AppState::new(settings, now);
        state.kpis[0].begin_refresh(now);
        assert!(state.tick(now));
        assert!(state.tick(now + chrono::Duration::days(365)));
        assert!(state.kpis[0].is_refreshing());
    }
}
