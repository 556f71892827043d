// Archivo: stubs.rs
// Propósito: implementaciones en memoria del primitivo de captura para
// pruebas y demos. No recorren ninguna pila real.
use crate::domain::{FlowType, RawFrame};
use crate::provider::StackCapture;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Primitivo de captura con pilas preconfiguradas por tipo de flow.
#[derive(Debug, Default)]
pub struct StaticStackCapture {
    stacks: Mutex<HashMap<FlowType, Vec<RawFrame>>>,
    calls: AtomicUsize,
}

impl StaticStackCapture {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<FlowType, Vec<RawFrame>>> {
        self.stacks.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Fija la pila que devolverá `capture_stack` para `flow_type`.
    pub fn with_stack(self, flow_type: FlowType, frames: Vec<RawFrame>) -> Self {
        self.set_stack(flow_type, frames);
        self
    }

    pub fn set_stack(&self, flow_type: FlowType, frames: Vec<RawFrame>) {
        self.lock().insert(flow_type, frames);
    }

    /// Número de capturas solicitadas.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl StackCapture for StaticStackCapture {
    fn capture_stack(&self, flow_type: &FlowType) -> Option<Vec<RawFrame>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.lock().get(flow_type).cloned()
    }
}
