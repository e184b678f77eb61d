mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "explorateur.yaml";

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            provider: ProviderConfig::default(),
            excluded_domains: default_excluded_domains(),
            default_mode: default_mode(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load the explicit config file, or the default one if it exists, or built-in defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.model.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "provider.model",
                reason: "must not be empty".to_string(),
            });
        }

        if self.provider.api_key_env.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "provider.api_key_env",
                reason: "must name an environment variable".to_string(),
            });
        }

        if self.provider.timeout_sec == 0 {
            return Err(ConfigError::Invalid {
                field: "provider.timeout_sec",
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.excluded_domains.iter().any(|d| d.trim().is_empty()) {
            return Err(ConfigError::Invalid {
                field: "excluded_domains",
                reason: "entries must not be blank".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::research::ResultMode;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.provider.model, "gemini-2.5-flash");
        assert_eq!(config.excluded_domains, vec!["wikipedia".to_string()]);
        assert_eq!(config.default_mode, ResultMode::SourcesOnly);
    }

    #[test]
    fn test_load_partial_yaml_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "provider:\n  model: gemini-2.0-flash\nexcluded_domains: [wikipedia, fandom]\ndefault_mode: long"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.provider.model, "gemini-2.0-flash");
        assert_eq!(config.provider.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.provider.timeout_sec, 120);
        assert_eq!(config.excluded_domains.len(), 2);
        assert_eq!(config.default_mode, ResultMode::LongForm);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/explorateur.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_mode: [not, a, mode]").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.provider.timeout_sec = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "provider.timeout_sec",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_blank_excluded_domain() {
        let mut config = Config::default();
        config.excluded_domains.push("  ".to_string());
        assert!(config.validate().is_err());
    }
}
