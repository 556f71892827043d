// Archivo: redaction.rs
// Propósito: capa de redacción. Oculta los frames y valores que pertenecen a
// la maquinaria interna del host, decidiendo sólo por el tipo.
//
// Política:
// - Un frame cuyo punto de llamada está declarado en un tipo interno se
//   descarta entero.
// - En los frames que quedan, cada valor vivo de tipo interno (o del tipo
//   de la máquina de estados del flow) se sustituye por un `RedactionToken`.
// - Los frames sin punto de llamada se conservan.
use crate::config::SnapshotConfig;
use crate::domain::{Frame, RedactionToken, Snapshot, StackValue};
use std::sync::Arc;

/// Namespace interno del host (este mismo crate).
pub const HOST_NAMESPACE: &str = "flow_stack::";

/// Clasifica un nombre de tipo como interno (a ocultar) o de aplicación.
pub trait TypeClassifier: Send + Sync {
    fn is_internal(&self, type_name: &str) -> bool;
}

impl<F> TypeClassifier for F where F: Fn(&str) -> bool + Send + Sync
{
    fn is_internal(&self, type_name: &str) -> bool {
        self(type_name)
    }
}

/// Clasificador por lista de prefijos de namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceClassifier {
    prefixes: Vec<String>,
}

impl NamespaceClassifier {
    pub fn new<I, S>(prefixes: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { prefixes: prefixes.into_iter().map(Into::into).filter(|p: &String| !p.is_empty()).collect() }
    }

    /// Sólo el namespace del host.
    pub fn host() -> Self {
        Self::new([HOST_NAMESPACE])
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for NamespaceClassifier {
    fn default() -> Self {
        Self::host()
    }
}

impl TypeClassifier for NamespaceClassifier {
    fn is_internal(&self, type_name: &str) -> bool {
        self.prefixes.iter().any(|p| type_name.starts_with(p.as_str()))
    }
}

/// Reescribe snapshots ocultando los datos internos.
///
/// `redact` es idempotente: redactar un snapshot ya redactado lo deja igual.
#[derive(Clone)]
pub struct Redactor {
    classifier: Arc<dyn TypeClassifier>,
    state_machine_type: Option<String>,
}

impl Redactor {
    pub fn new(classifier: Arc<dyn TypeClassifier>) -> Self {
        Self { classifier, state_machine_type: None }
    }

    /// Redactor con los prefijos internos de la configuración.
    pub fn from_config(config: &SnapshotConfig) -> Self {
        Self::new(Arc::new(NamespaceClassifier::new(config.internal_prefixes.iter().cloned())))
    }

    /// Tipo del objeto máquina de estados del flow; sus valores siempre se
    /// redactan aunque el clasificador no lo marque como interno.
    pub fn with_state_machine_type(mut self, type_name: impl Into<String>) -> Self {
        self.state_machine_type = Some(type_name.into());
        self
    }

    fn is_hidden(&self, type_name: &str) -> bool {
        self.state_machine_type.as_deref() == Some(type_name) || self.classifier.is_internal(type_name)
    }

    /// Un frame se descarta cuando lo empujó código interno.
    pub fn keeps_frame(&self, frame: &Frame) -> bool {
        match &frame.call_site {
            Some(site) => !self.is_hidden(&site.declaring_type),
            None => true,
        }
    }

    pub fn redact_value(&self, value: StackValue) -> StackValue {
        match value {
            StackValue::Live { type_name, .. } if self.is_hidden(&type_name) => {
                StackValue::Redacted(RedactionToken::new(type_name))
            }
            other => other,
        }
    }

    pub fn redact_frame(&self, frame: Frame) -> Frame {
        let values = frame.values.into_iter().map(|v| self.redact_value(v)).collect();
        Frame::new(frame.call_site, values)
    }

    pub fn redact(&self, snapshot: Snapshot) -> Snapshot {
        let frames = snapshot.frames()
                             .iter()
                             .filter(|f| self.keeps_frame(f))
                             .cloned()
                             .map(|f| self.redact_frame(f))
                             .collect();
        snapshot.with_frames(frames)
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new(Arc::new(NamespaceClassifier::host()))
    }
}

impl std::fmt::Debug for Redactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Redactor")
         .field("state_machine_type", &self.state_machine_type)
         .finish_non_exhaustive()
    }
}
