use app_dependencies::{parse_dependencies, with_external_dependencies, DependencyError, DependencyLoader, SecureHash,
                       DEPENDENCIES_RESOURCE};

fn write_resource(root: &std::path::Path, text: &str) {
  let path = root.join(DEPENDENCIES_RESOURCE);
  std::fs::create_dir_all(path.parent().unwrap()).unwrap();
  std::fs::write(path, text).unwrap();
}

#[test]
fn blank_lines_are_ignored() {
  let h = SecureHash::sha256(b"contracts");
  let lines = ["".to_string(), h.to_string(), "".to_string()];
  let parsed = parse_dependencies(&lines.join("\n")).expect("parse");
  assert_eq!(parsed, vec![h]);
}

#[test]
fn malformed_entry_fails_without_partial_list() {
  let good = SecureHash::sha256(b"a").to_string();
  let text = format!("{}\nnot-a-hash\n{}\n", good, good);
  match parse_dependencies(&text) {
    Err(DependencyError::MalformedResourceEntry { line, entry, .. }) => {
      assert_eq!(line, 2);
      assert_eq!(entry, "not-a-hash");
    }
    other => panic!("expected malformed entry, got {:?}", other),
  }
}

#[test]
fn missing_resource_yields_empty_list() {
  let root = tempfile::tempdir().expect("tempdir");
  let loader = DependencyLoader::new(root.path());
  assert!(loader.dependencies().expect("load").is_empty());
}

#[test]
fn loader_reads_and_caches() {
  let root = tempfile::tempdir().expect("tempdir");
  let a = SecureHash::sha256(b"a");
  let b = SecureHash::sha256(b"b");
  write_resource(root.path(), &format!("{}\r\n\r\n{}\r\n", a, b));
  let loader = DependencyLoader::new(root.path());
  assert_eq!(loader.dependencies().unwrap(), &[a, b]);

  // el recurso cambia pero el loader ya tiene su lista
  write_resource(root.path(), "");
  assert_eq!(loader.dependencies().unwrap().len(), 2);
}

#[test]
fn malformed_resource_propagates_from_loader() {
  let root = tempfile::tempdir().expect("tempdir");
  write_resource(root.path(), "not-a-hash\n");
  let loader = DependencyLoader::new(root.path());
  assert!(matches!(loader.dependencies(), Err(DependencyError::MalformedResourceEntry { .. })));
  assert!(matches!(with_external_dependencies(Vec::<SecureHash>::new(), &loader), Err(DependencyError::MalformedResourceEntry { .. })));
}

#[test]
fn dependencies_become_attachments() {
  let root = tempfile::tempdir().expect("tempdir");
  let a = SecureHash::sha256(b"a");
  write_resource(root.path(), &format!("SHA-256:{}\n", a));
  let loader = DependencyLoader::new(root.path());
  let mut existing = vec![SecureHash::sha256(b"own")];
  existing = with_external_dependencies(existing, &loader).expect("attach");
  assert_eq!(existing.len(), 2);
  assert_eq!(existing[1], a);
}
