//! Process-wide configuration, resolved once at startup and injected
//! into the client. Sources, in order of precedence: environment
//! variables, then the optional global config file.

use std::path::PathBuf;

use miette::{Context as _, IntoDiagnostic as _};
use serde::{Deserialize, Serialize};

use crate::nvd;

/// Shape of `~/.nvdq/config.toml`. Every field is optional; a missing
/// file behaves like an empty one.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// NVD API credential; absent means the `apiKey` header is omitted.
    pub api_key: Option<String>,
    pub api_url: String,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".nvdq").join("config.toml"))
}

impl Config {
    pub fn load() -> miette::Result<Self> {
        let file = match config_path() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(&path)
                    .into_diagnostic()
                    .context("reading nvdq config.toml")?;

                toml::from_str::<FileConfig>(&contents)
                    .into_diagnostic()
                    .context("parsing nvdq config.toml")?
            }
            _ => FileConfig::default(),
        };

        Ok(Self::resolve(file))
    }

    fn resolve(file: FileConfig) -> Self {
        let api_key = std::env::var("NVD_API_KEY").ok().or(file.api_key);

        let api_url = std::env::var("NVDQ_API_URL")
            .ok()
            .or(file.api_url)
            .unwrap_or_else(|| nvd::DEFAULT_API_URL.to_string());

        Self { api_key, api_url }
    }
}
