// Archivo: domain.rs
// Propósito: tipos del modelo de datos de un snapshot de pila.
//
// Un `Snapshot` se crea en el momento de la captura y no se muta después.
// Los `Frame` van ordenados desde la llamada más externa, y el orden de
// `values` dentro de cada frame es significativo.
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Referencia al tipo de un flow (nombre totalmente cualificado).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowType(String);

impl FlowType {
    /// Tipo de flow a partir de un tipo Rust.
    pub fn of<T: ?Sized>() -> Self {
        FlowType(std::any::type_name::<T>().to_string())
    }

    /// Tipo de flow a partir de un nombre ya resuelto.
    pub fn named(name: impl Into<String>) -> Self {
        FlowType(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Punto de llamada que *empujó* un frame (no la ubicación del propio
/// código del frame).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSite {
    pub declaring_type: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl CallSite {
    pub fn new(declaring_type: impl Into<String>, method: impl Into<String>) -> Self {
        Self { declaring_type: declaring_type.into(),
               method: method.into(),
               file: None,
               line: None }
    }

    /// Añade fichero y línea de origen.
    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.declaring_type, self.method)?;
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, " ({}:{})", file, line),
            (Some(file), None) => write!(f, " ({})", file),
            _ => Ok(()),
        }
    }
}

/// Marca un valor omitido porque pertenece a la maquinaria interna del host.
///
/// Sólo conserva el nombre del tipo original, nunca el valor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactionToken {
    type_name: String,
}

impl RedactionToken {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self { type_name: type_name.into() }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// Un valor vivo en un frame en el momento de la captura.
///
/// Se serializa con la etiqueta `kind`; los datos de aplicación sólo
/// aparecen bajo `value`, así un token nunca se confunde con datos reales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StackValue {
    /// Variable local sin valor.
    Null,
    /// Valor presente junto con su tipo declarado.
    #[serde(rename_all = "camelCase")]
    Live { type_name: String, value: serde_json::Value },
    /// Valor redactado.
    Redacted(RedactionToken),
}

impl StackValue {
    pub fn live(type_name: impl Into<String>, value: serde_json::Value) -> Self {
        StackValue::Live { type_name: type_name.into(), value }
    }

    pub fn redacted(type_name: impl Into<String>) -> Self {
        StackValue::Redacted(RedactionToken::new(type_name))
    }

    /// Nombre del tipo del valor, si se conoce.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            StackValue::Null => None,
            StackValue::Live { type_name, .. } => Some(type_name),
            StackValue::Redacted(token) => Some(token.type_name()),
        }
    }

    pub fn is_redacted(&self) -> bool {
        matches!(self, StackValue::Redacted(_))
    }
}

impl From<Option<RawValue>> for StackValue {
    fn from(raw: Option<RawValue>) -> Self {
        match raw {
            Some(RawValue { type_name, value }) => StackValue::Live { type_name, value },
            None => StackValue::Null,
        }
    }
}

/// Un frame de la pila capturada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    #[serde(default)]
    pub call_site: Option<CallSite>,
    #[serde(default)]
    pub values: Vec<StackValue>,
}

impl Frame {
    pub fn new(call_site: Option<CallSite>, values: Vec<StackValue>) -> Self {
        Self { call_site, values }
    }
}

/// Snapshot de la pila de un flow en un instante dado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    timestamp: DateTime<Utc>,
    #[serde(default)]
    owning_type: Option<FlowType>,
    #[serde(default)]
    frames: Vec<Frame>,
}

impl Snapshot {
    /// Crea un snapshot fechado ahora.
    pub fn new(owning_type: Option<FlowType>, frames: Vec<Frame>) -> Self {
        Self::at(Utc::now(), owning_type, frames)
    }

    /// Crea un snapshot con un instante explícito.
    pub fn at(timestamp: DateTime<Utc>, owning_type: Option<FlowType>, frames: Vec<Frame>) -> Self {
        Self { timestamp, owning_type, frames }
    }

    /// Convierte la salida cruda del primitivo de captura. No redacta nada.
    pub fn from_raw(owning_type: Option<FlowType>, raw: Vec<RawFrame>) -> Self {
        let frames = raw.into_iter()
                        .map(|f| Frame::new(f.call_site, f.values.into_iter().map(StackValue::from).collect()))
                        .collect();
        Self::new(owning_type, frames)
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Fecha (UTC) de captura, usada para particionar en disco.
    pub fn capture_date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn owning_type(&self) -> Option<&FlowType> {
        self.owning_type.as_ref()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Reconstruye el snapshot con otros frames, conservando instante y tipo.
    pub(crate) fn with_frames(self, frames: Vec<Frame>) -> Self {
        Self { frames, ..self }
    }
}

/// Valor tal como lo entrega el primitivo de captura.
#[derive(Debug, Clone, PartialEq)]
pub struct RawValue {
    pub type_name: String,
    pub value: serde_json::Value,
}

impl RawValue {
    pub fn new(type_name: impl Into<String>, value: serde_json::Value) -> Self {
        Self { type_name: type_name.into(), value }
    }
}

/// Frame crudo: punto de llamada + valores vivos (`None` = local vacía).
#[derive(Debug, Clone, PartialEq)]
pub struct RawFrame {
    pub call_site: Option<CallSite>,
    pub values: Vec<Option<RawValue>>,
}

impl RawFrame {
    pub fn new(call_site: Option<CallSite>, values: Vec<Option<RawValue>>) -> Self {
        Self { call_site, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_raw_keeps_value_order_and_nulls() {
        let raw = vec![RawFrame::new(Some(CallSite::new("app::Pay", "call")),
                                     vec![Some(RawValue::new("u64", json!(1))), None, Some(RawValue::new("String", json!("x")))])];
        let snap = Snapshot::from_raw(Some(FlowType::named("app::Pay")), raw);
        let values = &snap.frames()[0].values;
        assert_eq!(values.len(), 3);
        assert_eq!(values[0], StackValue::live("u64", json!(1)));
        assert_eq!(values[1], StackValue::Null);
        assert_eq!(values[2].type_name(), Some("String"));
    }

    #[test]
    fn flow_type_of_uses_type_name() {
        struct LocalFlow;
        let t = FlowType::of::<LocalFlow>();
        assert!(t.name().ends_with("LocalFlow"));
    }
}
