//! Crate `flow-stack` — snapshots de la pila de ejecución de un flow
//!
//! Este crate define el modelo de datos de un snapshot (`Snapshot`, `Frame`,
//! `StackValue`, `RedactionToken`), el contrato del proveedor de captura
//! (`SnapshotProvider`), el registro explícito para descubrir proveedores
//! (`ProviderRegistry`), el proveedor por defecto que no hace nada
//! (`NoopProvider`), la capa de redacción (`Redactor`) y el escritor que
//! persiste snapshots en disco (`SnapshotWriter`).
//!
//! Diseño resumido:
//! - Sólo para depuración y pruebas: sin un proveedor registrado todo es un
//!   no-op que emite un warning, nunca un error.
//! - Redacción por tipo: los valores cuyo tipo pertenece al namespace interno
//!   del host se reemplazan por un `RedactionToken`.
//! - Persistencia particionada:
//!   `{base_dir}/flowStackSnapshots/{YYYY-MM-DD}/{flow_id}/`.
//!
//! Ejemplo rápido:
//! ```rust
//! use flow_stack::{FlowStackInspector, FlowType, NoopProvider};
//! use std::sync::Arc;
//! let inspector = FlowStackInspector::new(Arc::new(NoopProvider::new()), "/tmp/node");
//! assert!(inspector.snapshot(&FlowType::named("demo::PaymentFlow")).is_none());
//! ```
pub mod config;
pub mod domain;
pub mod errors;
pub mod noop;
pub mod persistence;
pub mod provider;
pub mod redaction;
pub mod registry;
pub mod service;
pub mod stubs;

pub use config::SnapshotConfig;
pub use domain::*;
pub use errors::*;
pub use noop::NoopProvider;
pub use persistence::SnapshotWriter;
pub use provider::{CapturingProvider, SnapshotProvider, StackCapture};
pub use redaction::{NamespaceClassifier, Redactor, TypeClassifier, HOST_NAMESPACE};
pub use registry::{AmbiguityPolicy, LazyProvider, ProviderRegistry, Resolution};
pub use service::FlowStackInspector;
