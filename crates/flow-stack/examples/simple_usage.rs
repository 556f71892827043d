use flow_stack::errors::SnapshotError;
use flow_stack::persistence::read_snapshot;
use flow_stack::stubs::StaticStackCapture;
use flow_stack::{CallSite, CapturingProvider, FlowStackInspector, FlowType, RawFrame, RawValue, Redactor};
use serde_json::json;
use std::sync::Arc;

struct TransferFlow;

fn main() -> Result<(), SnapshotError> {
    // Pila simulada: un frame interno y dos de la aplicación
    let flow = FlowType::of::<TransferFlow>();
    let frames = vec![RawFrame::new(Some(CallSite::new("flow_stack::machine::FlowStateMachine", "run")), vec![None]),
                      RawFrame::new(Some(CallSite::new(flow.name(), "call").at("transfer.rs", 31)),
                                    vec![Some(RawValue::new("u64", json!(250))),
                                         Some(RawValue::new("flow_stack::machine::FlowStateMachine", json!({})))]),
                      RawFrame::new(Some(CallSite::new(flow.name(), "notify")),
                                    vec![Some(RawValue::new("String", json!("alice")))])];
    let capture = StaticStackCapture::new().with_stack(flow.clone(), frames);
    let provider = CapturingProvider::new(capture, Redactor::default());

    let base_dir = std::env::temp_dir().join("flow-stack-demo");
    let inspector = FlowStackInspector::new(Arc::new(provider), &base_dir);

    if let Some(snapshot) = inspector.snapshot(&flow) {
        println!("captured {} frames for {}", snapshot.frames().len(), flow);
    }
    if let Some(path) = inspector.persist(&flow, "F-demo")? {
        println!("written to {}", path.display());
        let back = read_snapshot(&path)?;
        println!("read back {} frames\n", back.frames().len());
    }
    Ok(())
}
