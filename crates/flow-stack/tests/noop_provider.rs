use flow_stack::{FlowStackInspector, FlowType, LazyProvider, NoopProvider, ProviderRegistry, SnapshotProvider};
use std::sync::Arc;

#[test]
fn noop_capture_returns_nothing() {
  let p = NoopProvider::new();
  for name in ["app::PaymentFlow", "", "flow_stack::Internal"] {
    assert!(p.capture(&FlowType::named(name)).is_none());
  }
}

#[test]
fn noop_persist_writes_nothing() {
  let dir = tempfile::tempdir().expect("tempdir");
  let p = NoopProvider::new();
  let res = p.persist(&FlowType::named("app::PaymentFlow"), dir.path(), "F-123").expect("persist");
  assert!(res.is_none());
  // el directorio base sigue vacío
  assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn empty_registry_falls_back_to_noop() {
  let dir = tempfile::tempdir().expect("tempdir");
  let lazy = LazyProvider::from_registry(Arc::new(ProviderRegistry::new()));
  let inspector = FlowStackInspector::new(lazy.get(), dir.path());
  let flow = FlowType::named("app::PaymentFlow");
  assert!(inspector.snapshot(&flow).is_none());
  assert!(inspector.persist(&flow, "F-1").expect("persist").is_none());
  assert!(!dir.path().join("flowStackSnapshots").exists());
}
