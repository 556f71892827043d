// Archivo: errors.rs
// Propósito: definir los errores del crate y el alias Result<T> usado por
// las APIs públicas. La ausencia de un proveedor de captura NO es un error:
// se resuelve con `NoopProvider` y un warning.
use std::path::PathBuf;
use thiserror::Error;

/// Errores de captura y persistencia de snapshots.
///
/// - `Io`: no se pudo crear un directorio o escribir/leer un fichero.
/// - `Serialization`: el snapshot no se pudo codificar o decodificar.
/// - `AmbiguousProvider`: hay más de un proveedor registrado y la política
///   pide fallar.
/// - `Config`: configuración de entorno inválida.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Error de entrada/salida sobre una ruta concreta. Nunca se reintenta.
    #[error("Error de E/S en {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Error de serialización/deserialización JSON.
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Varios proveedores registrados (nombres en orden de registro).
    #[error("Proveedor ambiguo: {} implementaciones registradas ({})", .0.len(), .0.join(", "))]
    AmbiguousProvider(Vec<String>),
    /// Valor de configuración inválido.
    #[error("Configuración inválida: {0}")]
    Config(String),
}

impl SnapshotError {
    /// Construye un `Io` asociando la ruta que falló.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnapshotError::Io { path: path.into(), source }
    }
}

/// Alias de resultado usado por las APIs del crate.
pub type Result<T> = std::result::Result<T, SnapshotError>;
