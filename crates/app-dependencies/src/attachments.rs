// attachments.rs
use crate::{DependencyError, DependencyLoader, SecureHash};

/// Destino de adjuntos de una transacción saliente.
pub trait AttachmentSink {
  fn add_attachment(&mut self, id: SecureHash);
}

impl AttachmentSink for Vec<SecureHash> {
  fn add_attachment(&mut self, id: SecureHash) {
    self.push(id);
  }
}

/// Añade al builder todas las dependencias externas del bundle.
pub fn with_external_dependencies<B>(mut builder: B, loader: &DependencyLoader) -> Result<B, DependencyError>
  where B: AttachmentSink
{
  for id in loader.dependencies()? {
    builder.add_attachment(*id);
  }
  Ok(builder)
}
