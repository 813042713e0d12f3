use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use super::types::Config;

impl Config {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        Self::from_yaml(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .context("failed to parse YAML configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if EnvFilter::try_new(&self.telemetry.log_level).is_err() {
            anyhow::bail!(
                "invalid log level directive: {}",
                self.telemetry.log_level
            );
        }

        if let Some(ref rates) = self.rates {
            if rates.as_os_str().is_empty() {
                anyhow::bail!("rates path must not be empty");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let config = Config::from_yaml("{}").unwrap();
        assert!(config.rates.is_none());
        assert_eq!(config.telemetry.log_level, "info");
        assert!(!config.telemetry.json_logs);
    }

    #[test]
    fn test_full_config() {
        let yaml = r#"
rates: /var/lib/ratecheck/rates.txt
telemetry:
  log_level: debug
  json_logs: true
"#;

        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(
            config.rates.as_deref(),
            Some(std::path::Path::new("/var/lib/ratecheck/rates.txt"))
        );
        assert_eq!(config.telemetry.log_level, "debug");
        assert!(config.telemetry.json_logs);
    }

    #[test]
    fn test_invalid_log_level() {
        let yaml = r#"
telemetry:
  log_level: "=!nonsense=="
"#;

        assert!(Config::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_empty_rates_path() {
        let yaml = "rates: \"\"\n";
        assert!(Config::from_yaml(yaml).is_err());
    }
}
