use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: Option<String>,
    /// E.g. `https://example.com`, without the trailing slash.
    pub root_url: Option<String>,
    pub author: Option<String>,
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    #[serde(default = "default_contact_phone")]
    pub contact_phone: String,
    #[serde(default)]
    pub disallow_ai_training: bool,
    #[serde(default = "default_theme_color")]
    pub theme_color: String,
}

fn default_output() -> String {
    String::from("./output")
}

fn default_title() -> String {
    "Bharat Mortgages".to_owned()
}

fn default_description() -> Option<String> {
    Some(
        "Mortgage training by banking professionals. Get job-ready for Banks, HFCs, and NBFCs."
            .to_owned(),
    )
}

fn default_keywords() -> Vec<String> {
    ["mortgage", "home loans", "banking", "BFSI", "course"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_contact_email() -> String {
    "info@bharatmortgages.com".to_owned()
}

fn default_contact_phone() -> String {
    "+91-XXXXXXXXXX".to_owned()
}

fn default_theme_color() -> String {
    "#0b3d91".to_owned()
}

impl Default for SiteConfig {
    fn default() -> Self {
        toml::from_str("").expect("every field has a default")
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl SiteConfig {
    /// Reads `path`, falling back to defaults if it doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("{} not found, using default config", path.display());
                String::new()
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_owned(),
                    source,
                })
            }
        };
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Maps a public path (`/index.html`) into the output directory.
    pub fn subdirectory(&self, public_path: &str) -> PathBuf {
        Path::new(&self.output).join(public_path.trim_start_matches('/'))
    }
}
