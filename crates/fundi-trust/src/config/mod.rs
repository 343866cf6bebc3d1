use crate::trend::{ChartSizing, Viewport};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Distinguishes runtime behavior for different stages of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the dashboard tooling.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = DashboardConfig::default();
        let viewport = Viewport {
            width: env_or("CHART_WIDTH", defaults.viewport.width)?,
            height: env_or("CHART_HEIGHT", defaults.viewport.height)?,
            padding_x: env_or("CHART_PADDING_X", defaults.viewport.padding_x)?,
            padding_y: env_or("CHART_PADDING_Y", defaults.viewport.padding_y)?,
        };
        if !viewport.is_drawable() {
            return Err(ConfigError::InvalidViewport { viewport });
        }

        let dashboard = DashboardConfig {
            trend_window: env_or("DASHBOARD_TREND_WINDOW", defaults.trend_window)?,
            leaderboard_limit: env_or("DASHBOARD_LEADERBOARD_LIMIT", defaults.leaderboard_limit)?,
            viewport,
            sizing: ChartSizing {
                margin: env_or("CHART_MARGIN", defaults.sizing.margin)?,
                max_width: env_or("CHART_MAX_WIDTH", defaults.sizing.max_width)?,
            },
            mobile_breakpoint: env_or("MOBILE_BREAKPOINT", defaults.mobile_breakpoint)?,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            dashboard,
        })
    }
}

/// Display limits and chart geometry shared by every dashboard view.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Number of trailing work-trend points kept for display.
    pub trend_window: usize,
    /// Entries kept per leaderboard.
    pub leaderboard_limit: usize,
    pub viewport: Viewport,
    pub sizing: ChartSizing,
    pub mobile_breakpoint: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            trend_window: 14,
            leaderboard_limit: 5,
            viewport: Viewport::default(),
            sizing: ChartSizing::default(),
            mobile_breakpoint: 992.0,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
    InvalidViewport { viewport: Viewport },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a valid number (found '{value}')")
            }
            ConfigError::InvalidViewport { viewport } => write!(
                f,
                "chart padding ({} x {}) leaves no drawable area in a {} x {} viewport",
                viewport.padding_x, viewport.padding_y, viewport.width, viewport.height
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    const KEYS: [&str; 12] = [
        "APP_ENV",
        "APP_LOG_LEVEL",
        "DASHBOARD_TREND_WINDOW",
        "DASHBOARD_LEADERBOARD_LIMIT",
        "CHART_WIDTH",
        "CHART_HEIGHT",
        "CHART_PADDING_X",
        "CHART_PADDING_Y",
        "CHART_MAX_WIDTH",
        "CHART_MARGIN",
        "MOBILE_BREAKPOINT",
        "RUST_LOG",
    ];

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.dashboard, DashboardConfig::default());
        assert_eq!(config.dashboard.trend_window, 14);
        assert_eq!(config.dashboard.leaderboard_limit, 5);
    }

    #[test]
    fn overrides_dashboard_limits_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        env::set_var("DASHBOARD_TREND_WINDOW", " 7 ");
        env::set_var("CHART_WIDTH", "320");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.dashboard.trend_window, 7);
        assert_eq!(config.dashboard.viewport.width, 320.0);
        reset_env();
    }

    #[test]
    fn rejects_non_numeric_limits() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("DASHBOARD_LEADERBOARD_LIMIT", "five");
        let err = AppConfig::load().expect_err("limit must be numeric");
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                key: "DASHBOARD_LEADERBOARD_LIMIT",
                ..
            }
        ));
        reset_env();
    }

    #[test]
    fn rejects_padding_that_swallows_the_chart() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CHART_HEIGHT", "30");
        let err = AppConfig::load().expect_err("padding exceeds height");
        assert!(matches!(err, ConfigError::InvalidViewport { .. }));
        reset_env();
    }
}
