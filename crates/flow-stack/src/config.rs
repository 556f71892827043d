// Archivo: config.rs
// Propósito: configuración de snapshots leída del entorno (con `.env`
// opcional vía dotenvy).
//
// Variables:
// - FLOW_SNAPSHOT_BASE_DIR: directorio base del nodo (por defecto ".").
// - FLOW_SNAPSHOT_STRICT_DISCOVERY: "1"/"true" para fallar ante varios
//   proveedores registrados.
// - FLOW_SNAPSHOT_INTERNAL_PREFIXES: prefijos internos separados por comas
//   (por defecto el namespace del host).
use crate::errors::{Result, SnapshotError};
use crate::redaction::HOST_NAMESPACE;
use crate::registry::AmbiguityPolicy;
use std::path::PathBuf;

pub const ENV_BASE_DIR: &str = "FLOW_SNAPSHOT_BASE_DIR";
pub const ENV_STRICT_DISCOVERY: &str = "FLOW_SNAPSHOT_STRICT_DISCOVERY";
pub const ENV_INTERNAL_PREFIXES: &str = "FLOW_SNAPSHOT_INTERNAL_PREFIXES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotConfig {
    pub base_dir: PathBuf,
    pub ambiguity: AmbiguityPolicy,
    pub internal_prefixes: Vec<String>,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self { base_dir: PathBuf::from("."),
               ambiguity: AmbiguityPolicy::FallbackToDefault,
               internal_prefixes: vec![HOST_NAMESPACE.to_string()] }
    }
}

impl SnapshotConfig {
    /// Lee la configuración de las variables de entorno.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lee la configuración con una función de búsqueda arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
        where F: Fn(&str) -> Option<String>
    {
        let mut cfg = Self::default();
        if let Some(dir) = lookup(ENV_BASE_DIR).filter(|d| !d.trim().is_empty()) {
            cfg.base_dir = PathBuf::from(dir.trim());
        }
        if let Some(flag) = lookup(ENV_STRICT_DISCOVERY) {
            cfg.ambiguity = match flag.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => AmbiguityPolicy::Fail,
                "" | "0" | "false" | "no" => AmbiguityPolicy::FallbackToDefault,
                other => {
                    return Err(SnapshotError::Config(format!("{}: valor no reconocido '{}'", ENV_STRICT_DISCOVERY, other)))
                }
            };
        }
        if let Some(list) = lookup(ENV_INTERNAL_PREFIXES) {
            let prefixes: Vec<String> = list.split(',')
                                            .map(str::trim)
                                            .filter(|p| !p.is_empty())
                                            .map(String::from)
                                            .collect();
            if !prefixes.is_empty() {
                cfg.internal_prefixes = prefixes;
            }
        }
        Ok(cfg)
    }
}
