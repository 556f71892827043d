//! Crate `node-config` — configuración TLS del nodo
//!
//! Objetos de valor inmutables consumidos por la capa de red: almacenes de
//! certificados (`CertificateStoreSupplier`), configuración TLS con almacenes
//! opcionales (`SslConfiguration`) y la variante mutua que exige ambos
//! (`MutualSslConfiguration`).
mod errors;
mod ssl;

pub use errors::ConfigError;
pub use ssl::{CertificateStoreSupplier, MutualSslConfiguration, SslConfiguration, SslOptions,
              DEFAULT_SSL_HANDSHAKE_TIMEOUT, DEFAULT_SSL_HANDSHAKE_TIMEOUT_MILLIS};
