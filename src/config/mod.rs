use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use brainz::shared::ProgramInfo;

mod file;
pub use file::{ConfigPathChoice, PATH_ENV_VAR};

#[derive(thiserror::Error, Debug)]
pub enum ConfigRetrievalError {
    #[error("could not read {}: {inner}", .path.to_string_lossy())]
    UnknownFs { path: PathBuf, inner: std::io::Error },
    #[error("could not deserialize {}: {inner}", .path.to_string_lossy())]
    DeserializationFailure { path: PathBuf, inner: toml::de::Error },
    #[error("lacking permission to read {}", .0.to_string_lossy())]
    PermissionDenied(PathBuf),
    #[error("no configuration file at {}", .0.to_string_lossy())]
    NotFound(PathBuf),
}
impl ConfigRetrievalError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::UnknownFs { path, .. } | Self::DeserializationFailure { path, .. } => path,
            Self::PermissionDenied(path) | Self::NotFound(path) => path,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramConfig {
    pub name: String,
    pub version: Option<String>,
    pub contact: String,
}
impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_owned(),
            version: Some(env!("CARGO_PKG_VERSION").to_owned()),
            contact: "contact not configured".to_owned(),
        }
    }
}
impl ProgramConfig {
    pub fn to_program_info(&self) -> ProgramInfo {
        ProgramInfo { name: self.name.clone(), version: self.version.clone(), contact: self.contact.clone() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LastFmConfig {
    pub api_key: Option<lastfm::ApiKey>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotifyConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}
impl SpotifyConfig {
    /// Both halves are needed; either alone is as good as nothing.
    pub fn credentials(&self) -> Option<spotify::Credentials> {
        match (&self.client_id, &self.client_secret) {
            (Some(client_id), Some(client_secret)) if !client_id.is_empty() && !client_secret.is_empty() => {
                Some(spotify::Credentials { client_id: client_id.clone(), client_secret: client_secret.clone() })
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
}
impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_seconds: 30 }
    }
}
impl HttpConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub program: ProgramConfig,
    pub lastfm: LastFmConfig,
    pub spotify: SpotifyConfig,
    pub http: HttpConfig,
}
impl Config {
    /// Read the configuration from wherever `path` points.
    /// Nothing at the automatic location just means nothing has been configured.
    pub async fn get(path: &ConfigPathChoice<'_>) -> Result<Self, ConfigRetrievalError> {
        match tokio::fs::read_to_string(path.as_path()).await {
            Ok(data) => Self::parse(&data).map_err(|inner| ConfigRetrievalError::DeserializationFailure { path: path.as_path().to_owned(), inner }),
            Err(error) => {
                use std::io::ErrorKind;
                let owned = path.as_path().to_owned();
                match error.kind() {
                    ErrorKind::NotFound if path.was_auto() => {
                        tracing::debug!(path = %path.to_string_lossy(), "no configuration file, using defaults");
                        Ok(Self::default())
                    }
                    ErrorKind::NotFound => Err(ConfigRetrievalError::NotFound(owned)),
                    ErrorKind::PermissionDenied => Err(ConfigRetrievalError::PermissionDenied(owned)),
                    _ => Err(ConfigRetrievalError::UnknownFs { path: owned, inner: error }),
                }
            }
        }
    }

    pub fn parse(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }
}
