//! Server configuration, deserialised from `config.toml` and `ROLODEX_*`
//! environment variables.

use std::path::{Path, PathBuf};

use axum::http::{HeaderValue, Method, header, header::InvalidHeaderValue};
use config::{ConfigError, builder::DefaultState};
use serde::Deserialize;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Front-end origins allowed by default: the local dev servers the contact
/// form is usually served from.
const DEFAULT_ORIGINS: [&str; 6] = [
  "http://localhost:3000",
  "http://localhost:3001",
  "http://localhost:5173",
  "http://localhost:4173",
  "http://127.0.0.1:5173",
  "http://127.0.0.1:3000",
];

/// Runtime server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:            String,
  pub port:            u16,
  pub store_path:      PathBuf,
  pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:            "127.0.0.1".to_string(),
      port:            3000,
      store_path:      PathBuf::from("rolodex.db"),
      allowed_origins: DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
    }
  }
}

impl ServerConfig {
  /// Layer the TOML file at `path` (if it exists) under `ROLODEX_*`
  /// environment variables.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::from_builder(
      config::Config::builder()
        .add_source(config::File::from(path).required(false)),
    )
  }

  fn from_builder(
    builder: config::ConfigBuilder<DefaultState>,
  ) -> Result<Self, ConfigError> {
    builder
      .add_source(
        config::Environment::with_prefix("ROLODEX")
          .try_parsing(true)
          .list_separator(",")
          .with_list_parse_key("allowed_origins"),
      )
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// The store path with a leading `~/` expanded to `$HOME`.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }

  /// A CORS policy admitting exactly `allowed_origins`, with credentials.
  pub fn cors_layer(&self) -> Result<CorsLayer, InvalidHeaderValue> {
    let origins = self
      .allowed_origins
      .iter()
      .map(|o| HeaderValue::from_str(o))
      .collect::<Result<Vec<_>, _>>()?;

    Ok(
      CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
          Method::GET,
          Method::POST,
          Method::PUT,
          Method::DELETE,
          Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
    )
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
