//! Integration tests for hierarchical cell composition via `deps`.

use std::path::{Path, PathBuf};

use spicewright_frontend::{FrontendError, load_file};

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

const INV: &str = r#"
cell:
  name: INV
  ports: [A, Z, VDD, VSS]
  components:
    - id: MN1
      type: primitive
      model: nmos
      connections: {D: Z, G: A, S: VSS, B: VSS}
      parameters: {W: "1e-6", L: "180e-9", model_name: nch}
"#;

const BUF: &str = r#"
cell:
  name: BUF
  ports: [A, Z, VDD, VSS]
  deps: [inv.yaml]
  components:
    - id: XINV1
      type: subckt
      model: INV
      connections: {A: A, Z: mid, VDD: VDD, VSS: VSS}
    - id: XINV2
      type: subckt
      model: INV
      connections: {A: mid, Z: Z, VDD: VDD, VSS: VSS}
"#;

#[test]
fn test_deps_come_before_top() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "inv.yaml", INV);
    let buf = write(dir.path(), "buf.yaml", BUF);

    let netlist = load_file(&buf).unwrap();
    let names: Vec<&str> = netlist.subckt_defs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["INV", "BUF"]);
    assert_eq!(netlist.top_cell.as_deref(), Some("BUF"));
}

#[test]
fn test_no_deps_single_def() {
    let dir = tempfile::tempdir().unwrap();
    let inv = write(dir.path(), "inv.yaml", INV);

    let netlist = load_file(&inv).unwrap();
    assert_eq!(netlist.subckt_defs.len(), 1);
    assert_eq!(netlist.top_cell.as_deref(), Some("INV"));
}

#[test]
fn test_diamond_dep_emitted_once() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "inv.yaml", INV);
    write(dir.path(), "buf.yaml", BUF);
    let top = write(
        dir.path(),
        "top.yaml",
        r#"
cell:
  name: TOP
  ports: [IN, OUT, VDD, VSS]
  deps: [inv.yaml, buf.yaml]
  components:
    - id: XBUF
      type: subckt
      model: BUF
      connections: {A: IN, Z: OUT, VDD: VDD, VSS: VSS}
"#,
    );

    let netlist = load_file(&top).unwrap();
    let names: Vec<&str> = netlist.subckt_defs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names.iter().filter(|n| **n == "INV").count(), 1);
    let pos = |n: &str| names.iter().position(|x| *x == n).unwrap();
    assert!(pos("INV") < pos("BUF"));
    assert!(pos("BUF") < pos("TOP"));
}

#[test]
fn test_wide_diamond_via_sibling_paths() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "leaf.yaml", INV);
    for (name, cell) in [("left.yaml", "LEFT"), ("right.yaml", "RIGHT")] {
        write(
            dir.path(),
            name,
            &format!(
                r#"
cell:
  name: {cell}
  ports: [A, Z, VDD, VSS]
  deps: [leaf.yaml]
  components:
    - id: X1
      type: subckt
      model: INV
      connections: {{A: A, Z: Z, VDD: VDD, VSS: VSS}}
"#
            ),
        );
    }
    let top = write(
        dir.path(),
        "top.yaml",
        r#"
cell:
  name: TOP
  ports: [A, Z, VDD, VSS]
  deps: [left.yaml, right.yaml]
  components:
    - id: XL
      type: subckt
      model: LEFT
      connections: {A: A, Z: Z, VDD: VDD, VSS: VSS}
"#,
    );

    let netlist = load_file(&top).unwrap();
    let names: Vec<&str> = netlist.subckt_defs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["INV", "LEFT", "RIGHT", "TOP"]);
}

#[test]
fn test_direct_self_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let cell = write(
        dir.path(),
        "a.yaml",
        r#"
cell:
  name: A
  ports: [X]
  deps: [a.yaml]
  components: []
"#,
    );
    assert!(matches!(
        load_file(&cell).unwrap_err(),
        FrontendError::CircularDependency { .. }
    ));
}

#[test]
fn test_two_hop_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(
        dir.path(),
        "a.yaml",
        r#"
cell:
  name: A
  ports: [X]
  deps: [b.yaml]
  components: []
"#,
    );
    write(
        dir.path(),
        "b.yaml",
        r#"
cell:
  name: B
  ports: [X]
  deps: [a.yaml]
  components: []
"#,
    );
    assert!(matches!(
        load_file(&a).unwrap_err(),
        FrontendError::CircularDependency { .. }
    ));
}

#[test]
fn test_missing_dep() {
    let dir = tempfile::tempdir().unwrap();
    let top = write(
        dir.path(),
        "top.yaml",
        r#"
cell:
  name: TOP
  ports: [X]
  deps: [does_not_exist.yaml]
  components: []
"#,
    );
    let err = load_file(&top).unwrap_err();
    match err {
        FrontendError::DependencyNotFound { declared, .. } => {
            assert_eq!(declared, "does_not_exist.yaml");
        }
        other => panic!("expected DependencyNotFound, got {other}"),
    }
}

#[test]
fn test_dep_resolved_relative_to_declaring_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("lib")).unwrap();
    write(&dir.path().join("lib"), "inv.yaml", INV);
    write(
        &dir.path().join("lib"),
        "buf.yaml",
        BUF, // declares inv.yaml relative to lib/
    );
    let top = write(
        dir.path(),
        "top.yaml",
        r#"
cell:
  name: TOP
  ports: [A, Z, VDD, VSS]
  deps: [lib/buf.yaml]
  components:
    - id: XBUF
      type: subckt
      model: BUF
      connections: {A: A, Z: Z, VDD: VDD, VSS: VSS}
"#,
    );

    let netlist = load_file(&top).unwrap();
    let names: Vec<&str> = netlist.subckt_defs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["INV", "BUF", "TOP"]);
}

#[test]
fn test_json_input() {
    let dir = tempfile::tempdir().unwrap();
    let cell = write(
        dir.path(),
        "inv.json",
        r#"{
  "cell": {
    "name": "INV",
    "ports": ["A", "Z", "VDD", "VSS"],
    "components": [
      {
        "id": "MN1",
        "type": "primitive",
        "model": "nmos",
        "connections": {"D": "Z", "G": "A", "S": "VSS", "B": "VSS"},
        "parameters": {"W": "1e-6", "L": "180e-9", "model_name": "nch"}
      }
    ]
  }
}"#,
    );
    let netlist = load_file(&cell).unwrap();
    assert_eq!(netlist.top_cell.as_deref(), Some("INV"));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let cell = write(dir.path(), "inv.toml", "cell = 1");
    assert!(matches!(
        load_file(&cell).unwrap_err(),
        FrontendError::UnsupportedExtension { .. }
    ));
}
