//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// JSON file backing the key-value storage.
    pub storage_path: PathBuf,
    /// Initial store currency.
    pub currency: String,
}

impl Config {
    /// Reads `HOST`, `PORT`, `FURNISTORE_STORAGE_PATH` and
    /// `FURNISTORE_CURRENCY`, falling back to defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a set variable holds an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 3000,
        };
        let storage_path = lookup("FURNISTORE_STORAGE_PATH")
            .map_or_else(|| PathBuf::from("furnistore-storage.json"), PathBuf::from);
        let currency = lookup("FURNISTORE_CURRENCY").unwrap_or_else(|| "USD".to_string());
        if !is_currency_code(&currency) {
            return Err(AppError::Config(format!(
                "FURNISTORE_CURRENCY must be a three-letter code, got '{currency}'"
            )));
        }

        Ok(Self {
            host,
            port,
            storage_path,
            currency,
        })
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host` and `port` do not form an address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

/// Returns true for three uppercase ASCII letters, e.g. `EUR`.
#[must_use]
pub fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}
