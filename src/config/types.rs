use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration for ratecheck
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Default rates file, used when --rates is not given
    #[serde(default)]
    pub rates: Option<PathBuf>,

    /// Telemetry settings
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Log level directive (tracing EnvFilter syntax)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// JSON log format
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
