//! Server configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

use comi_ticket::QrOptions;

/// Environment variable that overrides [`ServerConfig::port`].
pub const PORT_ENV: &str = "PORT";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Side of generated ticket images, in pixels
    #[serde(default = "default_qr_width")]
    pub qr_width: u32,

    /// Quiet zone around ticket QR codes, in modules
    #[serde(default = "default_qr_margin")]
    pub qr_margin: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_qr_width() -> u32 {
    QrOptions::default().width
}

fn default_qr_margin() -> u32 {
    QrOptions::default().margin
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            qr_width: default_qr_width(),
            qr_margin: default_qr_margin(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, std::io::Error> {
        toml::from_str(content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Apply overrides from the process environment.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`. An unparsable `PORT` is ignored.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(PORT_ENV) {
            match raw.trim().parse::<u16>() {
                Ok(port) => self.port = port,
                Err(e) => warn!("Ignoring {}={:?}: {}", PORT_ENV, raw, e),
            }
        }
        self
    }

    /// Rendering options for ticket QR codes.
    pub fn qr_options(&self) -> QrOptions {
        QrOptions {
            width: self.qr_width,
            margin: self.qr_margin,
        }
    }
}
