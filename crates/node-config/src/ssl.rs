// ssl.rs
use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Al menos tres veces el timeout de conexión de las CRL (15 s).
pub const DEFAULT_SSL_HANDSHAKE_TIMEOUT_MILLIS: u64 = 60_000;
pub const DEFAULT_SSL_HANDSHAKE_TIMEOUT: Duration = Duration::from_millis(DEFAULT_SSL_HANDSHAKE_TIMEOUT_MILLIS);

/// Almacén de certificados en fichero junto con sus contraseñas.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateStoreSupplier {
  path: PathBuf,
  store_password: String,
  entry_password: String,
}

impl CertificateStoreSupplier {
  pub fn new(path: impl Into<PathBuf>, store_password: impl Into<String>, entry_password: impl Into<String>) -> Self {
    Self { path: path.into(), store_password: store_password.into(), entry_password: entry_password.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn store_password(&self) -> &str {
    &self.store_password
  }

  pub fn entry_password(&self) -> &str {
    &self.entry_password
  }
}

// Las contraseñas no salen en logs.
impl fmt::Debug for CertificateStoreSupplier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CertificateStoreSupplier")
     .field("path", &self.path)
     .field("store_password", &"***")
     .field("entry_password", &"***")
     .finish()
  }
}

/// Lectura común a todas las variantes de configuración TLS.
pub trait SslOptions {
  fn key_store(&self) -> Option<&CertificateStoreSupplier>;
  fn trust_store(&self) -> Option<&CertificateStoreSupplier>;
  fn use_open_ssl(&self) -> bool;
}

/// Configuración TLS con almacenes opcionales.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslConfiguration {
  #[serde(default)]
  key_store: Option<CertificateStoreSupplier>,
  #[serde(default)]
  trust_store: Option<CertificateStoreSupplier>,
  #[serde(default)]
  use_open_ssl: bool,
}

impl SslConfiguration {
  pub fn new(key_store: Option<CertificateStoreSupplier>,
             trust_store: Option<CertificateStoreSupplier>,
             use_open_ssl: bool)
             -> Self {
    Self { key_store, trust_store, use_open_ssl }
  }

  /// Configuración mutua; ambos almacenes son obligatorios.
  pub fn mutual(key_store: CertificateStoreSupplier, trust_store: CertificateStoreSupplier) -> MutualSslConfiguration {
    MutualSslConfiguration::new(key_store, trust_store, false)
  }

  pub fn from_json(text: &str) -> Result<Self, ConfigError> {
    Ok(serde_json::from_str(text)?)
  }
}

impl SslOptions for SslConfiguration {
  fn key_store(&self) -> Option<&CertificateStoreSupplier> {
    self.key_store.as_ref()
  }

  fn trust_store(&self) -> Option<&CertificateStoreSupplier> {
    self.trust_store.as_ref()
  }

  fn use_open_ssl(&self) -> bool {
    self.use_open_ssl
  }
}

/// Configuración TLS mutua: los dos almacenes están siempre presentes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutualSslConfiguration {
  key_store: CertificateStoreSupplier,
  trust_store: CertificateStoreSupplier,
  #[serde(default)]
  use_open_ssl: bool,
}

impl MutualSslConfiguration {
  pub fn new(key_store: CertificateStoreSupplier, trust_store: CertificateStoreSupplier, use_open_ssl: bool) -> Self {
    Self { key_store, trust_store, use_open_ssl }
  }

  pub fn with_open_ssl(mut self, use_open_ssl: bool) -> Self {
    self.use_open_ssl = use_open_ssl;
    self
  }

  pub fn key_store(&self) -> &CertificateStoreSupplier {
    &self.key_store
  }

  pub fn trust_store(&self) -> &CertificateStoreSupplier {
    &self.trust_store
  }

  pub fn from_json(text: &str) -> Result<Self, ConfigError> {
    Ok(serde_json::from_str(text)?)
  }
}

impl SslOptions for MutualSslConfiguration {
  fn key_store(&self) -> Option<&CertificateStoreSupplier> {
    Some(&self.key_store)
  }

  fn trust_store(&self) -> Option<&CertificateStoreSupplier> {
    Some(&self.trust_store)
  }

  fn use_open_ssl(&self) -> bool {
    self.use_open_ssl
  }
}

impl From<MutualSslConfiguration> for SslConfiguration {
  fn from(m: MutualSslConfiguration) -> Self {
    SslConfiguration::new(Some(m.key_store), Some(m.trust_store), m.use_open_ssl)
  }
}

impl TryFrom<SslConfiguration> for MutualSslConfiguration {
  type Error = ConfigError;

  fn try_from(c: SslConfiguration) -> Result<Self, Self::Error> {
    let key_store = c.key_store.ok_or(ConfigError::MissingStore("keyStore"))?;
    let trust_store = c.trust_store.ok_or(ConfigError::MissingStore("trustStore"))?;
    Ok(MutualSslConfiguration::new(key_store, trust_store, c.use_open_ssl))
  }
}
