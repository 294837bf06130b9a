//! Configuration manager for the users API.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::FromRef;
use serde::{Deserialize, Serialize};

use crate::AppState;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const DEFAULT_PORT: u16 = 3000;
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the storage connection string.
pub const MONGO_URI_VAR: &str = "MONGO_URI";
/// Environment variable overriding the listen port.
pub const PORT_VAR: &str = "PORT";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Instance name.
    #[serde(default)]
    pub name: String,
    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    version: String,
    #[serde(skip)]
    path: PathBuf,
    /// Related to MongoDB configuration.
    #[serde(skip_serializing)]
    pub mongo: Option<Mongo>,
}

/// MongoDB configuration.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Mongo {
    /// Connection string, e.g. `mongodb://localhost:27017/test`.
    pub address: String,
    /// Database name. Falls back to the one carried by the
    /// connection string, then to the default.
    pub database: Option<String>,
    /// Maximum pool connections.
    pub pool_size: Option<u32>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_owned(),
            port: DEFAULT_PORT,
            version: VERSION.to_owned(),
            path: PathBuf::default(),
            mongo: None,
        }
    }
}

impl FromRef<AppState> for Arc<Configuration> {
    fn from_ref(state: &AppState) -> Arc<Configuration> {
        Arc::clone(&state.config)
    }
}

impl Configuration {
    /// Set the configuration file path.
    pub fn path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    /// Reads the `config.yaml` file from the specified path or the default
    /// location, then applies environment overrides (`MONGO_URI`, `PORT`).
    pub fn read(self) -> Arc<Self> {
        let file_path = if self.path.is_file() {
            &self.path
        } else {
            &Path::new(DEFAULT_CONFIG_PATH).to_path_buf()
        };

        let mut config = match File::open(file_path) {
            Ok(file) => match serde_yaml::from_reader::<_, Configuration>(file)
            {
                Ok(config) => config,
                Err(err) => self.error(err),
            },
            Err(err) => self.error(err),
        };

        // set app version.
        config.version = VERSION.to_owned();

        // the storage connection string comes from the environment first.
        if let Ok(uri) = std::env::var(MONGO_URI_VAR) {
            let mongo = config.mongo.take().unwrap_or_default();
            config.mongo = Some(Mongo {
                address: uri,
                ..mongo
            });
        }

        if let Some(port) = std::env::var(PORT_VAR)
            .ok()
            .and_then(|port| port.parse::<u16>().ok())
        {
            config.port = port;
        }

        Arc::new(config)
    }

    /// Return a default configuration as fallback.
    fn error(&self, err: impl std::error::Error) -> Self {
        tracing::error!(error = %err, "`config.yaml` file not readable");
        Self::default()
    }
}
