//! Server settings loaded via OrthoConfig.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DATASET_PATH: &str = "fixtures/dataset.json";

/// Configuration values for the search server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SEARCH")]
pub struct ServerSettings {
    /// Socket address to listen on.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
    /// Path to the dataset document.
    pub dataset_path: Option<PathBuf>,
}

impl ServerSettings {
    /// Return the configured bind address.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the address does not parse.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_str();
        raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address '{raw}': {err}"),
            )
        })
    }

    /// Return the dataset location.
    pub fn dataset_path(&self) -> &Path {
        self.dataset_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_DATASET_PATH))
    }
}
