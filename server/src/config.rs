// vantablack_server/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use vantablack::WriteMode;

/// Where the original site kept its catalogue, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "lib/data.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub data_file: PathBuf,
  pub write_mode: WriteMode,

  // Write a starter catalogue on startup when no data file exists yet
  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let data_file = PathBuf::from(get_env("DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string()));

    let serialize_writes = get_env("SERIALIZE_WRITES")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SERIALIZE_WRITES value: {}", e)))?;
    let write_mode = if serialize_writes {
      WriteMode::Serialized
    } else {
      WriteMode::Unsynchronized
    };

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    tracing::info!(
      data_file = %data_file.display(),
      write_mode = ?write_mode,
      "Application configuration loaded successfully."
    );

    Ok(Self {
      server_host,
      server_port,
      data_file,
      write_mode,
      seed_db,
    })
  }

  /// Configuration for a store at `data_file` with every other setting at its default.
  pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 8080,
      data_file: data_file.into(),
      write_mode: WriteMode::default(),
      seed_db: false,
    }
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
