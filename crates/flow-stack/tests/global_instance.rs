// Un solo test: el registro global es estado del proceso.
use flow_stack::registry::{instance, instance_with, register_provider};
use flow_stack::stubs::StaticStackCapture;
use flow_stack::{AmbiguityPolicy, CallSite, CapturingProvider, FlowType, NoopProvider, RawFrame, Redactor, SnapshotProvider};
use std::sync::Arc;

#[test]
fn process_instance_resolves_once_to_the_single_registration() {
  let flow = FlowType::named("app::AuditFlow");
  let capture = StaticStackCapture::new().with_stack(flow.clone(),
                                                     vec![RawFrame::new(Some(CallSite::new("app::AuditFlow", "call")), vec![])]);
  assert!(register_provider("static", Arc::new(CapturingProvider::new(capture, Redactor::default()))));

  let providers: Vec<Arc<dyn SnapshotProvider>> = std::thread::scope(|s| {
    let handles: Vec<_> = (0..4).map(|_| s.spawn(instance)).collect();
    handles.into_iter().map(|h| h.join().expect("thread")).collect()
  });
  for p in &providers {
    assert!(Arc::ptr_eq(p, &providers[0]));
    assert!(p.capture(&flow).is_some());
  }

  // tras resolver, nuevos registros se ignoran
  assert!(!register_provider("late", Arc::new(NoopProvider::new())));
  let strict = instance_with(AmbiguityPolicy::Fail).expect("still a single provider");
  assert!(Arc::ptr_eq(&strict, &providers[0]));
}
