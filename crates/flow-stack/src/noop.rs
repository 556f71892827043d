// Archivo: noop.rs
// Propósito: proveedor por defecto cuando no hay ninguna implementación
// registrada. No captura ni escribe nada; sólo avisa.
use crate::domain::{FlowType, Snapshot};
use crate::errors::Result;
use crate::provider::SnapshotProvider;
use std::path::{Path, PathBuf};

const UNSUPPORTED: &str = "los snapshots de pila de flows no están pensados para un despliegue de producción";

/// Proveedor no-op. Total: acepta cualquier entrada y nunca falla.
#[derive(Debug, Clone, Default)]
pub struct NoopProvider;

impl NoopProvider {
    pub fn new() -> Self {
        NoopProvider
    }
}

impl SnapshotProvider for NoopProvider {
    fn capture(&self, flow_type: &FlowType) -> Option<Snapshot> {
        log::warn!("{} (captura solicitada para {})", UNSUPPORTED, flow_type);
        None
    }

    fn persist(&self, flow_type: &FlowType, _base_dir: &Path, flow_id: &str) -> Result<Option<PathBuf>> {
        log::warn!("{} (persistencia solicitada para {} / {})", UNSUPPORTED, flow_type, flow_id);
        Ok(None)
    }
}
