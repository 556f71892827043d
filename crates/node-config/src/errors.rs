// errors.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Falta el almacén requerido para TLS mutuo: {0}")]
  MissingStore(&'static str),
  #[error("Error de serialización: {0}")]
  SerializationError(#[from] serde_json::Error),
}
