use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::core::Goal;

/// Where the ledger lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON ledger file.
    pub ledger: PathBuf,
}

/// Settings for the HTTP surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the server listens on.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: default_bind(),
        }
    }
}

/// Application configuration shared by both frontends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub goal: Goal,
    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// Reads and validates configuration from a TOML file. A missing
    /// or invalid file is fatal and reported once, at startup.
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<AppConfig> {
        let file_content = fs::read_to_string(&filepath).with_context(|| {
            format!(
                "failed to read config file {}",
                filepath.as_ref().display()
            )
        })?;
        let config: AppConfig =
            toml::from_str(&file_content).with_context(|| "failed to parse config file")?;
        config.validate()?;
        return Ok(config);
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !self.goal.target.is_finite() || self.goal.target <= 0.0 {
            bail!(
                "goal target must be a positive amount, got {}",
                self.goal.target
            );
        }
        if self.goal.bar_width == 0 {
            bail!("progress bar width must be at least 1");
        }
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use crate::core::progress::DEFAULT_BAR_WIDTH;

    use std::fs;

    use tempfile::TempDir;

    fn read_config(content: &str) -> anyhow::Result<AppConfig> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("server.toml");
        fs::write(&path, content).unwrap();
        return AppConfig::read(&path);
    }

    #[test]
    fn reads_a_full_config() {
        let config = read_config(
            r#"
            [storage]
            ledger = "state/savings.json"

            [goal]
            name = "Porsche 911"
            target = 30000000.0
            currency = "₽"
            bar-width = 10

            [server]
            bind = "0.0.0.0:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.ledger.to_str(), Some("state/savings.json"));
        assert_eq!(config.goal.name, "Porsche 911");
        assert_eq!(config.goal.target, 30_000_000.0);
        assert_eq!(config.goal.bar_width, 10);
        assert_eq!(config.server.bind.port(), 9000);
    }

    #[test]
    fn optional_settings_have_defaults() {
        let config = read_config(
            r#"
            [storage]
            ledger = "savings.json"

            [goal]
            target = 500.0
            "#,
        )
        .unwrap();

        assert_eq!(config.goal.name, "Savings goal");
        assert_eq!(config.goal.currency, "₽");
        assert_eq!(config.goal.bar_width, DEFAULT_BAR_WIDTH);
        assert_eq!(config.server.bind.port(), 8080);
    }

    #[test]
    fn rejects_a_non_positive_target() {
        for target in ["0.0", "-100.0", "inf", "nan"] {
            let result = read_config(&format!(
                "[storage]\nledger = \"savings.json\"\n\n[goal]\ntarget = {}\n",
                target
            ));
            assert!(result.is_err(), "target {} should be rejected", target);
        }
    }

    #[test]
    fn rejects_a_zero_width_bar() {
        let result = read_config(
            r#"
            [storage]
            ledger = "savings.json"

            [goal]
            target = 500.0
            bar-width = 0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = AppConfig::read(dir.path().join("nowhere.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn shipped_sample_config_stays_valid() {
        let sample = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/server.toml");
        let config = AppConfig::read(sample).unwrap();
        assert!(config.goal.target > 0.0);
    }
}
