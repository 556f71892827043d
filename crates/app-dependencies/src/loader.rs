// loader.rs
use crate::{DependencyError, SecureHash};
use once_cell::sync::OnceCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Ruta del recurso, relativa a la raíz del bundle.
pub const DEPENDENCIES_RESOURCE: &str = "META-INF/Cordapp-Dependencies";

/// Convierte el contenido del recurso en hashes. Falla entera ante la
/// primera línea mal formada.
pub fn parse_dependencies(text: &str) -> Result<Vec<SecureHash>, DependencyError> {
  text.lines()
      .enumerate()
      .filter(|(_, l)| !l.trim().is_empty())
      .map(|(i, l)| {
        let entry = l.trim();
        SecureHash::parse(entry).map_err(|reason| DependencyError::MalformedResourceEntry { line: i + 1,
                                                                                          entry: entry.to_string(),
                                                                                          reason })
      })
      .collect()
}

/// Cargador de dependencias de un bundle. El resultado se lee una vez y se
/// reutiliza.
#[derive(Debug)]
pub struct DependencyLoader {
  bundle_root: PathBuf,
  cached: OnceCell<Vec<SecureHash>>,
}

impl DependencyLoader {
  pub fn new(bundle_root: impl Into<PathBuf>) -> Self {
    Self { bundle_root: bundle_root.into(), cached: OnceCell::new() }
  }

  pub fn resource_path(&self) -> PathBuf {
    self.bundle_root.join(DEPENDENCIES_RESOURCE)
  }

  fn read(path: &Path) -> Result<Vec<SecureHash>, DependencyError> {
    match fs::read_to_string(path) {
      Ok(text) => parse_dependencies(&text),
      Err(e) if e.kind() == ErrorKind::NotFound => {
        log::debug!("sin recurso de dependencias en {}", path.display());
        Ok(Vec::new())
      }
      Err(source) => Err(DependencyError::Io { path: path.to_path_buf(), source }),
    }
  }

  /// Dependencias externas del bundle. Un error no queda cacheado.
  pub fn dependencies(&self) -> Result<&[SecureHash], DependencyError> {
    self.cached.get_or_try_init(|| Self::read(&self.resource_path())).map(Vec::as_slice)
  }
}
