use chrono::{TimeZone, Utc};
use flow_stack::{CallSite, FlowType, Frame, NamespaceClassifier, Redactor, Snapshot, StackValue, HOST_NAMESPACE};
use serde_json::json;
use std::sync::Arc;

const MACHINE: &str = "flow_stack::machine::FlowStateMachine";

fn sample() -> Snapshot {
  let frames = vec![
    // empujado por la maquinaria interna: se descarta entero
    Frame::new(Some(CallSite::new(MACHINE, "resume")), vec![StackValue::live("app::Order", json!({"id": 1}))]),
    Frame::new(Some(CallSite::new("app::PaymentFlow", "call").at("payment.rs", 42)),
               vec![StackValue::live("app::Order", json!({"id": 1})),
                    StackValue::live(format!("{}machine::Fiber", HOST_NAMESPACE), json!({"secret": true})),
                    StackValue::Null,
                    StackValue::live("u64", json!(99))]),
    Frame::new(None, vec![StackValue::live("flow_stack::services::Vault", json!("opaque"))]),
  ];
  Snapshot::at(Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap(), Some(FlowType::named("app::PaymentFlow")), frames)
}

#[test]
fn internal_frames_are_dropped() {
  let redacted = Redactor::default().redact(sample());
  assert_eq!(redacted.frames().len(), 2);
  assert_eq!(redacted.frames()[0].call_site.as_ref().unwrap().declaring_type, "app::PaymentFlow");
  // el frame sin punto de llamada se conserva
  assert!(redacted.frames()[1].call_site.is_none());
}

#[test]
fn internal_values_become_tokens_in_place() {
  let redacted = Redactor::default().redact(sample());
  let values = &redacted.frames()[0].values;
  assert_eq!(values.len(), 4);
  assert_eq!(values[0], StackValue::live("app::Order", json!({"id": 1})));
  assert_eq!(values[1], StackValue::redacted("flow_stack::machine::Fiber"));
  assert_eq!(values[2], StackValue::Null);
  assert_eq!(values[3], StackValue::live("u64", json!(99)));
  assert_eq!(redacted.frames()[1].values[0], StackValue::redacted("flow_stack::services::Vault"));
}

#[test]
fn redaction_keeps_timestamp_and_owner() {
  let original = sample();
  let redacted = Redactor::default().redact(original.clone());
  assert_eq!(redacted.timestamp(), original.timestamp());
  assert_eq!(redacted.owning_type(), original.owning_type());
}

#[test]
fn redaction_is_idempotent() {
  let r = Redactor::default().with_state_machine_type("app::StateMachine");
  let once = r.redact(sample());
  let twice = r.redact(once.clone());
  assert_eq!(once, twice);
}

#[test]
fn state_machine_type_is_always_redacted() {
  let r = Redactor::new(Arc::new(NamespaceClassifier::new(Vec::<String>::new()))).with_state_machine_type("app::Machine");
  let snap = Snapshot::new(None,
                           vec![Frame::new(Some(CallSite::new("app::Flow", "call")),
                                           vec![StackValue::live("app::Machine", json!({})),
                                                StackValue::live("flow_stack::Other", json!({}))])]);
  let out = r.redact(snap);
  assert_eq!(out.frames()[0].values[0], StackValue::redacted("app::Machine"));
  // sin prefijos internos nada más se oculta
  assert!(!out.frames()[0].values[1].is_redacted());
}

#[test]
fn decision_ignores_value_contents() {
  let r = Redactor::default();
  let looks_internal = StackValue::live("app::Note", json!({"kind": "redacted", "typeName": "flow_stack::X"}));
  assert_eq!(r.redact_value(looks_internal.clone()), looks_internal);
  let harmless_internal = StackValue::live("flow_stack::Counter", json!(0));
  assert!(r.redact_value(harmless_internal).is_redacted());
}

#[test]
fn injected_classifier_controls_policy() {
  let r = Redactor::new(Arc::new(|t: &str| t.starts_with("vendor::")));
  let frame = Frame::new(Some(CallSite::new("app::Flow", "call")),
                         vec![StackValue::live("vendor::Session", json!({})),
                              StackValue::live("flow_stack::Fiber", json!({}))]);
  let out = r.redact_frame(frame);
  assert!(out.values[0].is_redacted());
  assert!(!out.values[1].is_redacted());
  assert!(!r.keeps_frame(&Frame::new(Some(CallSite::new("vendor::Engine", "run")), vec![])));
}
