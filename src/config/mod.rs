use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default language preference order for caption tracks.
///
/// Fixed configuration, not a CLI flag: Korean first, English fallback.
pub const DEFAULT_LANGUAGES: &[&str] = &["ko", "en"];

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Caption language preference order
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: Option<String>,
}

fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults.
    ///
    /// Loading never writes files; the tool's only output channel is
    /// the JSON line on stdout.
    pub async fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs_err::read_to_string(&path)
                    .context("Failed to read config file")?;

                let config: Config = serde_yaml::from_str(&content)
                    .context("Failed to parse config file")?;

                config.validate()?;
                Ok(config)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Get configuration file path
    fn config_path() -> Option<PathBuf> {
        // First try current directory for easy testing
        let local_config = PathBuf::from("config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir().map(|dir| dir.join("transcript-fetcher").join("config.yaml"))
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            anyhow::bail!("At least one caption language must be configured");
        }

        if self.http.timeout_secs == 0 {
            anyhow::bail!("HTTP timeout must be non-zero");
        }

        Ok(())
    }
}
