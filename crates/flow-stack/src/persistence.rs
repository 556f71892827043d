// Archivo: persistence.rs
// Propósito: serializar snapshots a JSON legible y escribirlos en la ruta
// particionada `{base_dir}/flowStackSnapshots/{YYYY-MM-DD}/{flow_id}/`.
//
// No hay reintentos: un fallo de E/S se devuelve tal cual al llamador,
// que decide si es fatal.
use crate::domain::Snapshot;
use crate::errors::{Result, SnapshotError};
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

/// Nombre del directorio raíz bajo `base_dir`.
pub const SNAPSHOTS_DIR: &str = "flowStackSnapshots";

/// Directorio donde se guardan los snapshots de un flow en una fecha.
///
/// `flow_id` siempre cuelga de la partición de fecha: los separadores
/// iniciales se descartan, de modo que un id absoluto no reubica el fichero.
pub fn snapshot_dir(base_dir: &Path, capture_date: NaiveDate, flow_id: &str) -> PathBuf {
    base_dir.join(SNAPSHOTS_DIR)
            .join(capture_date.format("%Y-%m-%d").to_string())
            .join(relative_flow_id(flow_id))
}

fn relative_flow_id(flow_id: &str) -> &str {
    flow_id.trim_start_matches(['/', '\\'])
}

/// Un id que, ya relativo, sigue pudiendo salir de la partición (`..`,
/// prefijos de unidad) o que queda vacío se rechaza.
fn check_flow_id(flow_id: &str) -> std::io::Result<()> {
    let rel = Path::new(relative_flow_id(flow_id));
    let escapes = rel.components().any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes || rel.as_os_str().is_empty() {
        return Err(std::io::Error::new(ErrorKind::InvalidInput, format!("flow id no válido: {:?}", flow_id)));
    }
    Ok(())
}

/// Codifica un snapshot como JSON con indentación.
pub fn encode_snapshot(snapshot: &Snapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Decodifica un snapshot producido por `encode_snapshot`.
pub fn decode_snapshot(text: &str) -> Result<Snapshot> {
    Ok(serde_json::from_str(text)?)
}

/// Lee un snapshot persistido.
pub fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let text = fs::read_to_string(path).map_err(|e| SnapshotError::io(path, e))?;
    decode_snapshot(&text)
}

/// Escritor de snapshots en disco. Un fichero por llamada.
#[derive(Debug, Clone, Default)]
pub struct SnapshotWriter;

impl SnapshotWriter {
    pub fn new() -> Self {
        SnapshotWriter
    }

    fn file_name() -> String {
        format!("flowStackSnapshot-{}.json", Uuid::new_v4())
    }

    /// Escribe `snapshot` y devuelve la ruta del fichero creado.
    pub fn write(&self, snapshot: &Snapshot, base_dir: &Path, flow_id: &str) -> Result<PathBuf> {
        let dir = snapshot_dir(base_dir, snapshot.capture_date(), flow_id);
        check_flow_id(flow_id).map_err(|e| SnapshotError::io(&dir, e))?;
        fs::create_dir_all(&dir).map_err(|e| SnapshotError::io(&dir, e))?;

        let path = dir.join(Self::file_name());
        let data = encode_snapshot(snapshot)?;
        let mut f = OpenOptions::new().create_new(true)
                                      .write(true)
                                      .open(&path)
                                      .map_err(|e| SnapshotError::io(&path, e))?;
        f.write_all(data.as_bytes()).map_err(|e| SnapshotError::io(&path, e))?;
        log::debug!("snapshot de {} escrito en {}",
                    snapshot.owning_type().map(|t| t.name()).unwrap_or("<sin tipo>"),
                    path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_dir_layout() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let dir = snapshot_dir(Path::new("/tmp/node"), date, "F-123");
        assert_eq!(dir, PathBuf::from("/tmp/node/flowStackSnapshots/2024-01-05/F-123"));
    }

    #[test]
    fn rooted_flow_id_is_made_relative() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let dir = snapshot_dir(Path::new("/tmp/node"), date, "/var/flows/F-123");
        assert_eq!(dir, PathBuf::from("/tmp/node/flowStackSnapshots/2024-01-05/var/flows/F-123"));
    }

    #[test]
    fn escaping_flow_ids_are_rejected() {
        assert!(check_flow_id("F-123").is_ok());
        assert!(check_flow_id("/abs/F-123").is_ok());
        for id in ["../F-123", "a/../../b", "", "/"] {
            let err = check_flow_id(id).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "{:?}", id);
        }
    }
}
