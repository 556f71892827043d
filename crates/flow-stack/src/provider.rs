// Archivo: provider.rs
// Propósito: definir el contrato `SnapshotProvider` (capturar + persistir) y
// el seam `StackCapture` hacia el primitivo de captura de la plataforma.
//
// Devolver `None` / `Ok(None)` es parte del contrato: significa que no hay
// capacidad de captura instalada, no que haya fallado algo.
use crate::domain::{FlowType, Snapshot};
use crate::errors::Result;
use crate::persistence::SnapshotWriter;
use crate::redaction::Redactor;
use std::path::{Path, PathBuf};

/// Capacidad de capturar y persistir snapshots de la pila de un flow.
///
/// Sólo debe usarse en modo depuración o en pruebas; ningún camino de
/// producción debe esperar un resultado no vacío de `capture`.
pub trait SnapshotProvider: Send + Sync {
    /// Devuelve el snapshot (ya redactado) de la pila del flow, si hay
    /// capacidad de captura.
    fn capture(&self, flow_type: &FlowType) -> Option<Snapshot>;

    /// Captura y persiste el snapshot bajo
    /// `{base_dir}/flowStackSnapshots/YYYY-MM-DD/{flow_id}/`.
    /// Devuelve la ruta escrita, o `None` si no se escribió nada.
    fn persist(&self, flow_type: &FlowType, base_dir: &Path, flow_id: &str) -> Result<Option<PathBuf>>;
}

/// Primitivo externo que recorre la pila suspendida de un flow.
pub trait StackCapture: Send + Sync {
    fn capture_stack(&self, flow_type: &FlowType) -> Option<Vec<crate::domain::RawFrame>>;
}

/// Proveedor concreto: primitivo de captura → redacción → escritor.
pub struct CapturingProvider<C>
    where C: StackCapture
{
    capture: C,
    redactor: Redactor,
    writer: SnapshotWriter,
}

impl<C> CapturingProvider<C> where C: StackCapture
{
    pub fn new(capture: C, redactor: Redactor) -> Self {
        Self { capture,
               redactor,
               writer: SnapshotWriter::new() }
    }

    pub fn redactor(&self) -> &Redactor {
        &self.redactor
    }
}

impl<C> SnapshotProvider for CapturingProvider<C> where C: StackCapture
{
    fn capture(&self, flow_type: &FlowType) -> Option<Snapshot> {
        let raw = self.capture.capture_stack(flow_type)?;
        let snapshot = Snapshot::from_raw(Some(flow_type.clone()), raw);
        Some(self.redactor.redact(snapshot))
    }

    fn persist(&self, flow_type: &FlowType, base_dir: &Path, flow_id: &str) -> Result<Option<PathBuf>> {
        match self.capture(flow_type) {
            Some(snapshot) => self.writer.write(&snapshot, base_dir, flow_id).map(Some),
            None => {
                log::debug!("sin pila capturable para {} (flow {}); no se escribe nada", flow_type, flow_id);
                Ok(None)
            }
        }
    }
}
