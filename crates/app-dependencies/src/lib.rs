//! Crate `app-dependencies` — dependencias externas de una app empaquetada
//!
//! Lee el recurso `META-INF/Cordapp-Dependencies` de un bundle (una línea por
//! hash de contenido), lo convierte en una lista de `SecureHash` y permite
//! añadir esos hashes como adjuntos a una transacción saliente.
//!
//! - Recurso ausente: lista vacía.
//! - Líneas en blanco: se ignoran.
//! - Línea mal formada: `DependencyError::MalformedResourceEntry` y ninguna
//!   lista parcial.
mod attachments;
mod errors;
mod hash;
mod loader;

pub use attachments::{with_external_dependencies, AttachmentSink};
pub use errors::DependencyError;
pub use hash::SecureHash;
pub use loader::{parse_dependencies, DependencyLoader, DEPENDENCIES_RESOURCE};
