use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MeterError, Result};
use crate::models::PricingRecord;

/// Config filename looked up in the working directory.
const CONFIG_FILE: &str = "smeter.toml";

/// Runtime configuration resolved from a settings file.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path the settings were loaded from (or looked for).
    pub config_path: PathBuf,
    /// User settings loaded from smeter.toml.
    pub settings: UserSettings,
}

/// User-configurable settings from smeter.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Output configuration.
    pub output: OutputSettings,
    /// Estimate defaults applied when flags are omitted.
    pub defaults: DefaultsSettings,
    /// Sender pricing table, keyed by sender identity.
    pub senders: HashMap<String, PricingRecord>,
}

/// Output-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output format: "minified" (default) or "pretty".
    pub format: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: "minified".into(),
        }
    }
}

/// Defaults applied to an estimate when the caller omits a flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsSettings {
    /// Recipient count when --recipients is omitted.
    pub recipients: u32,
    /// Whether the carrier handles multi-part splitting.
    pub carrier_segmentation: bool,
    /// Sender looked up when no pricing flag is given.
    pub sender: Option<String>,
}

impl Default for DefaultsSettings {
    fn default() -> Self {
        Self {
            recipients: 1,
            carrier_segmentation: false,
            sender: None,
        }
    }
}

impl Config {
    /// Load settings from an explicit file path.
    ///
    /// A missing or malformed file is an error here: the caller asked for
    /// this exact file, and pricing silently falling back to defaults
    /// would misprice sends.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let config_path = path.into();
        let content = std::fs::read_to_string(&config_path)?;
        let settings = Self::parse_settings(&config_path, &content)?;
        Ok(Self {
            config_path,
            settings,
        })
    }

    /// Load settings from `smeter.toml` in the working directory.
    ///
    /// A missing file yields defaults; a present but malformed file is
    /// still an error.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| MeterError::Config(format!("cannot get cwd: {e}")))?;
        let config_path = cwd.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self {
                config_path,
                settings: UserSettings::default(),
            });
        }
        let content = std::fs::read_to_string(&config_path)?;
        let settings = Self::parse_settings(&config_path, &content)?;
        Ok(Self {
            config_path,
            settings,
        })
    }

    fn parse_settings(path: &Path, content: &str) -> Result<UserSettings> {
        toml::from_str(content)
            .map_err(|e| MeterError::Config(format!("{}: {e}", path.display())))
    }

    /// Look up a sender's pricing record in the configured table.
    pub fn sender_pricing(&self, name: &str) -> Result<PricingRecord> {
        self.settings
            .senders
            .get(name)
            .copied()
            .ok_or_else(|| MeterError::SenderNotFound { name: name.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[output]
format = "pretty"

[defaults]
recipients = 3
carrier_segmentation = true
sender = "promo"

[senders.promo]
sms_cost = 1.0
mms_cost = 4.0

[senders.alerts]
sms_cost = 0.5
mms_cost = 2.0
"#;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("smeter.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn default_settings() {
        let settings = UserSettings::default();
        assert_eq!(settings.output.format, "minified");
        assert_eq!(settings.defaults.recipients, 1);
        assert!(!settings.defaults.carrier_segmentation);
        assert!(settings.defaults.sender.is_none());
        assert!(settings.senders.is_empty());
    }

    #[test]
    fn load_reads_all_sections() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, SAMPLE);

        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.settings.output.format, "pretty");
        assert_eq!(cfg.settings.defaults.recipients, 3);
        assert!(cfg.settings.defaults.carrier_segmentation);
        assert_eq!(cfg.settings.defaults.sender.as_deref(), Some("promo"));
        assert_eq!(cfg.settings.senders.len(), 2);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = Config::load(tmp.path().join("nope.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "invalid toml {{{{");
        let result = Config::load(&path);
        assert!(matches!(result, Err(MeterError::Config(_))));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[senders.a]\nsms_cost = 1.0\nmms_cost = 2.0\n");

        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.settings.output.format, "minified");
        assert_eq!(cfg.settings.defaults.recipients, 1);
        assert_eq!(cfg.settings.senders.len(), 1);
    }

    #[test]
    fn sender_pricing_finds_record() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, SAMPLE);
        let cfg = Config::load(&path).unwrap();

        let p = cfg.sender_pricing("alerts").unwrap();
        assert_eq!(p, PricingRecord::new(0.5, 2.0));
    }

    #[test]
    fn sender_pricing_unknown_name_errors() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, SAMPLE);
        let cfg = Config::load(&path).unwrap();

        let err = cfg.sender_pricing("nobody").unwrap_err();
        assert!(matches!(err, MeterError::SenderNotFound { .. }));
        assert_eq!(err.to_string(), "sender not found: nobody");
    }
}
