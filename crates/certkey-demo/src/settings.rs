use std::path::Path;

use serde::Deserialize;

use crate::error::{DemoError, Result};

/// Demo configuration
///
/// Everything has a default; a TOML file only overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tag the demo key pair is generated or fetched under
    pub key_tag: String,
    /// RSA modulus size in bits
    pub key_bits: usize,
    /// The fixed sample payload both operations run on
    pub sample_message: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            key_tag: "certkey.demo.keypair".to_string(),
            key_bits: 2048,
            sample_message: "The quick brown fox jumps over the lazy dog.".to_string(),
        }
    }
}

impl Settings {
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(config_path.as_ref())
            .map_err(|e| DemoError::Config(format!("failed to read config file: {e}")))?;
        toml::from_str(&raw).map_err(|e| DemoError::Config(format!("invalid config: {e}")))
    }

    /// Load from `config_path` if present, defaults otherwise
    pub fn load_or_default(config_path: impl AsRef<Path>) -> Self {
        let path = config_path.as_ref();
        if path.exists() {
            match Self::load(path) {
                Ok(settings) => return settings,
                Err(e) => {
                    tracing::warn!("ignoring config at {}: {e}", path.display());
                }
            }
        }
        Self::default()
    }

    pub fn sample_message_bytes(&self) -> Vec<u8> {
        self.sample_message.clone().into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.key_bits, 2048);
        assert!(!settings.key_tag.is_empty());
        assert!(!settings.sample_message.is_empty());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let settings: Settings = toml::from_str(r#"key_bits = 3072"#).unwrap();
        assert_eq!(settings.key_bits, 3072);
        assert_eq!(settings.key_tag, Settings::default().key_tag);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::load_or_default("/nonexistent/certkey-demo.toml");
        assert_eq!(settings.key_bits, Settings::default().key_bits);
    }
}
