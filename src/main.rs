use anyhow::Context;
use app_dependencies::DependencyLoader;
use flow_stack::registry::register_provider;
use flow_stack::stubs::StaticStackCapture;
use flow_stack::{CallSite, CapturingProvider, FlowStackInspector, FlowType, RawFrame, RawValue, Redactor, SnapshotConfig};
use node_config::{SslConfiguration, SslOptions};
use serde_json::json;
use std::io::{self, Write};
use std::sync::Arc;

const DEMO_FLOW: &str = "demo::PaymentFlow";

/// Pequeño menú interactivo para inspeccionar pilas de flows en un nodo de
/// depuración.
///
/// Opciones soportadas:
/// 1) Capturar snapshot de un tipo de flow
/// 2) Persistir snapshot en el directorio base
/// 3) Ver dependencias externas del bundle
/// 4) Ver configuración TLS
/// 5) Salir
///
/// Con `FLOW_SNAPSHOT_DEMO=1` se registra un proveedor con una pila simulada
/// para `demo::PaymentFlow`; sin él se usa el proveedor no-op.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SnapshotConfig::from_env().context("configuración de snapshots")?;
    if std::env::var("FLOW_SNAPSHOT_DEMO").map(|v| v == "1").unwrap_or(false) {
        register_provider("demo", Arc::new(demo_provider(&config)));
    }
    let inspector = FlowStackInspector::from_config(&config).context("descubrimiento del proveedor")?;
    log::info!("directorio base de snapshots: {}", inspector.base_dir().display());

    loop {
        println!("\n== Flow stack menu ==");
        println!("1) Capturar snapshot");
        println!("2) Persistir snapshot");
        println!("3) Ver dependencias externas");
        println!("4) Ver configuración TLS (JSON)");
        println!("5) Salir");
        let choice = prompt("Elige una opción: ")?;
        match choice.trim() {
            "1" => {
                let flow = read_flow_type()?;
                match inspector.snapshot(&flow) {
                    Some(snap) => {
                        for (i, frame) in snap.frames().iter().enumerate() {
                            let site = frame.call_site.as_ref().map(|c| c.to_string()).unwrap_or_else(|| "-".into());
                            println!("#{} {} ({} valores)", i, site, frame.values.len());
                        }
                    }
                    None => println!("Sin snapshot para {}", flow),
                }
            }
            "2" => {
                let flow = read_flow_type()?;
                let flow_id = prompt("Flow id: ")?;
                match inspector.persist(&flow, flow_id.trim()) {
                    Ok(Some(path)) => println!("Snapshot escrito en {}", path.display()),
                    Ok(None) => println!("No se escribió nada"),
                    Err(e) => eprintln!("Error persistiendo snapshot: {}", e),
                }
            }
            "3" => {
                let root = std::env::var("FLOW_SNAPSHOT_BUNDLE_DIR").unwrap_or_else(|_| ".".into());
                let loader = DependencyLoader::new(root);
                match loader.dependencies() {
                    Ok(deps) if deps.is_empty() => println!("Sin dependencias en {}", loader.resource_path().display()),
                    Ok(deps) => deps.iter().for_each(|d| println!("{}", d)),
                    Err(e) => eprintln!("Error leyendo dependencias: {}", e),
                }
            }
            "4" => {
                let text = prompt("Configuración TLS (JSON en una línea): ")?;
                match SslConfiguration::from_json(text.trim()) {
                    Ok(c) => println!("keyStore: {:?}\ntrustStore: {:?}\nuseOpenSsl: {}",
                                      c.key_store(),
                                      c.trust_store(),
                                      c.use_open_ssl()),
                    Err(e) => eprintln!("Configuración inválida: {}", e),
                }
            }
            "5" => {
                println!("Saliendo...");
                break;
            }
            other => println!("Opción inválida: {}", other),
        }
    }
    Ok(())
}

fn demo_provider(config: &SnapshotConfig) -> CapturingProvider<StaticStackCapture> {
    let flow = FlowType::named(DEMO_FLOW);
    let frames = vec![RawFrame::new(Some(CallSite::new("flow_stack::machine::FlowStateMachine", "run")), vec![None]),
                      RawFrame::new(Some(CallSite::new(DEMO_FLOW, "call").at("payment.rs", 18)),
                                    vec![Some(RawValue::new("demo::Amount", json!({"quantity": 100, "token": "GBP"}))),
                                         Some(RawValue::new("flow_stack::machine::FlowStateMachine", json!({})))])];
    let capture = StaticStackCapture::new().with_stack(flow, frames);
    CapturingProvider::new(capture, Redactor::from_config(config))
}

fn read_flow_type() -> io::Result<FlowType> {
    let name = prompt(&format!("Tipo de flow (enter para {}): ", DEMO_FLOW))?;
    let name = name.trim();
    Ok(FlowType::named(if name.is_empty() { DEMO_FLOW } else { name }))
}

fn prompt(msg: &str) -> io::Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s)
}
