// Archivo: service.rs
// Propósito: implementar `FlowStackInspector`, la capa que reciben los
// componentes que necesitan snapshots. El proveedor se inyecta; sólo
// `from_config` toca el descubrimiento global del proceso.
use crate::config::SnapshotConfig;
use crate::domain::{FlowType, Snapshot};
use crate::errors::Result;
use crate::provider::SnapshotProvider;
use crate::registry;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Servicio de inspección de pilas de flows.
///
/// Los fallos aquí nunca deben abortar el flow inspeccionado: `persist`
/// devuelve el error al llamador y `persist_or_log` lo registra y sigue.
#[derive(Clone)]
pub struct FlowStackInspector {
    provider: Arc<dyn SnapshotProvider>,
    base_dir: PathBuf,
}

impl FlowStackInspector {
    pub fn new(provider: Arc<dyn SnapshotProvider>, base_dir: impl Into<PathBuf>) -> Self {
        Self { provider, base_dir: base_dir.into() }
    }

    /// Construye el servicio con el proveedor del proceso y la política de
    /// ambigüedad de `config`.
    pub fn from_config(config: &SnapshotConfig) -> Result<Self> {
        let provider = registry::instance_with(config.ambiguity)?;
        Ok(Self::new(provider, config.base_dir.clone()))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn snapshot(&self, flow_type: &FlowType) -> Option<Snapshot> {
        self.provider.capture(flow_type)
    }

    pub fn persist(&self, flow_type: &FlowType, flow_id: &str) -> Result<Option<PathBuf>> {
        self.provider.persist(flow_type, &self.base_dir, flow_id)
    }

    /// Como `persist`, pero un error se registra y se descarta.
    pub fn persist_or_log(&self, flow_type: &FlowType, flow_id: &str) -> Option<PathBuf> {
        match self.persist(flow_type, flow_id) {
            Ok(path) => path,
            Err(e) => {
                log::error!("no se pudo persistir el snapshot de {} (flow {}): {}", flow_type, flow_id, e);
                None
            }
        }
    }
}
