// errors.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DependencyError {
  /// Una línea del recurso no es un hash válido.
  #[error("Entrada mal formada en la línea {line}: '{entry}' ({reason})")]
  MalformedResourceEntry { line: usize, entry: String, reason: String },
  #[error("Error de E/S leyendo {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}
