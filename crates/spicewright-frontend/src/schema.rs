//! On-disk cell description schema.
//!
//! These types mirror the YAML/JSON input format exactly. Validation that
//! the rest of the pipeline relies on (identifier syntax, per-cell id
//! uniqueness, primitive model membership) happens here, before any IR is
//! built.

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;
use spicewright_ir::PrimitiveKind;

use crate::error::{FrontendError, FrontendResult};

/// Top-level wrapper: every cell file has a single `cell:` document.
#[derive(Debug, Deserialize)]
pub struct CellFile {
    /// The cell description.
    pub cell: Cell,
}

/// One cell: interface, dependencies, and component declarations.
#[derive(Debug, Deserialize)]
pub struct Cell {
    /// Cell name; becomes the .subckt name.
    pub name: String,
    /// Ordered port interface.
    pub ports: Vec<String>,
    /// Cell-level parameters.
    #[serde(default)]
    pub parameters: IndexMap<String, ParamValue>,
    /// Technology include identifiers.
    #[serde(default)]
    pub includes: Vec<String>,
    /// Dependency file references, relative to this file's directory.
    /// Declaration order is traversal order.
    #[serde(default)]
    pub deps: Vec<String>,
    /// Component declarations in emission order.
    #[serde(default)]
    pub components: Vec<ComponentDecl>,
}

/// One declared component instance.
#[derive(Debug, Deserialize)]
pub struct ComponentDecl {
    /// Instance id, unique within the cell.
    pub id: String,
    /// Discriminator between the two component variants.
    #[serde(rename = "type")]
    pub kind: ComponentType,
    /// Primitive kind name or referenced subcircuit name.
    pub model: String,
    /// Port name → net name.
    pub connections: IndexMap<String, String>,
    /// Generic parameters.
    #[serde(default)]
    pub parameters: IndexMap<String, ParamValue>,
}

/// Component discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    /// An irreducible device.
    Primitive,
    /// A reference to another cell's definition.
    Subckt,
}

/// A scalar parameter value as written in the input file.
///
/// Values are normalized to text when the IR is built. Callers who care
/// about the exact spelling of numeric literals (e.g. `1e-6` vs its
/// decimal expansion) should quote them as strings in the input.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// String scalar, passed through verbatim.
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Float(x) => write!(f, "{x}"),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Cell {
    /// Check the structural rules the rest of the pipeline trusts.
    pub fn validate(&self) -> FrontendResult<()> {
        if self.ports.is_empty() {
            return Err(FrontendError::EmptyPortList {
                cell: self.name.clone(),
            });
        }
        let mut seen = rustc_hash::FxHashSet::default();
        for comp in &self.components {
            if !is_identifier(&comp.id) {
                return Err(FrontendError::InvalidIdentifier {
                    id: comp.id.clone(),
                });
            }
            if !seen.insert(comp.id.as_str()) {
                return Err(FrontendError::DuplicateComponentId {
                    cell: self.name.clone(),
                    id: comp.id.clone(),
                });
            }
            if comp.kind == ComponentType::Primitive
                && PrimitiveKind::parse(&comp.model).is_none()
            {
                return Err(FrontendError::UnknownPrimitiveModel {
                    id: comp.id.clone(),
                    model: comp.model.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Cell {
        serde_yaml_ng::from_str::<CellFile>(yaml).unwrap().cell
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

    #[test]
    fn test_valid_cell_passes() {
        let cell = parse(INV);
        cell.validate().unwrap();
        assert_eq!(cell.name, "INV");
        assert_eq!(cell.ports, vec!["A", "Z", "VDD", "VSS"]);
        assert_eq!(cell.components.len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let yaml = r#"
cell:
  name: BAD
  ports: [A]
  components:
    - id: M1
      type: primitive
      model: nmos
      connections: {D: a, G: b, S: c, B: c}
    - id: M1
      type: primitive
      model: pmos
      connections: {D: a, G: b, S: c, B: c}
"#;
        let err = parse(yaml).validate().unwrap_err();
        assert!(matches!(
            err,
            FrontendError::DuplicateComponentId { id, .. } if id == "M1"
        ));
    }

    #[test]
    fn test_unknown_primitive_model_rejected() {
        let yaml = r#"
cell:
  name: BAD
  ports: [A]
  components:
    - id: J1
      type: primitive
      model: jfet
      connections: {D: a, G: b, S: c}
"#;
        let err = parse(yaml).validate().unwrap_err();
        assert!(matches!(
            err,
            FrontendError::UnknownPrimitiveModel { model, .. } if model == "jfet"
        ));
    }

    #[test]
    fn test_bad_identifier_rejected() {
        let yaml = r#"
cell:
  name: BAD
  ports: [A]
  components:
    - id: "1M"
      type: primitive
      model: nmos
      connections: {D: a, G: b, S: c, B: c}
"#;
        let err = parse(yaml).validate().unwrap_err();
        assert!(matches!(err, FrontendError::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_subckt_model_not_restricted() {
        let yaml = r#"
cell:
  name: TOP
  ports: [A]
  components:
    - id: X1
      type: subckt
      model: ANY_CELL_NAME
      connections: {A: A}
"#;
        parse(yaml).validate().unwrap();
    }

    #[test]
    fn test_empty_ports_rejected() {
        let yaml = r#"
cell:
  name: BAD
  ports: []
  components: []
"#;
        assert!(matches!(
            parse(yaml).validate().unwrap_err(),
            FrontendError::EmptyPortList { .. }
        ));
    }

    #[test]
    fn test_param_value_display() {
        assert_eq!(ParamValue::Text("1e-6".into()).to_string(), "1e-6");
        assert_eq!(ParamValue::Int(10000).to_string(), "10000");
        assert_eq!(ParamValue::Bool(true).to_string(), "true");
    }
}
