//! Component instances: primitives and hierarchical subcircuit references.

use indexmap::IndexMap;

use crate::error::{IrError, IrResult};
use crate::primitives::{PrimitiveKind, PrimitiveSpec};

/// An instance of a primitive element (M, Q, R, C, L, V, I, D).
///
/// `parameters` holds only the generic remainder: the positional value and
/// the model name, where the kind's spec designates them, are extracted
/// into `value` and `model_name` at build time.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveComponent {
    /// Instance name as declared in the cell file.
    pub instance_name: String,
    /// Device kind, keying into the primitive registry.
    pub kind: PrimitiveKind,
    /// Port name → net name.
    pub connections: IndexMap<String, String>,
    /// Remaining generic parameters, in declaration order.
    pub parameters: IndexMap<String, String>,
    /// Device model card name, if the kind carries one.
    pub model_name: Option<String>,
    /// Positional value, if the kind carries one.
    pub value: Option<String>,
}

impl PrimitiveComponent {
    /// The emission spec for this component's kind.
    pub fn spec(&self) -> &'static PrimitiveSpec {
        self.kind.spec()
    }

    /// Net names in the canonical port order fixed by the kind's spec.
    ///
    /// Every required port must be connected; absence is an error, never a
    /// default.
    pub fn ordered_nets(&self) -> IrResult<Vec<&str>> {
        self.spec()
            .port_order
            .iter()
            .map(|port| {
                self.connections
                    .get(*port)
                    .map(String::as_str)
                    .ok_or_else(|| IrError::MissingPort {
                        instance: self.instance_name.clone(),
                        port: (*port).to_string(),
                    })
            })
            .collect()
    }
}

/// An instance of a hierarchical subcircuit (.subckt reference).
///
/// The referenced definition's port order is unknown locally; callers
/// resolve it against the enclosing [`crate::Netlist`] at generation time.
#[derive(Debug, Clone, PartialEq)]
pub struct SubcktInstance {
    /// Instance name as declared in the cell file.
    pub instance_name: String,
    /// Name of the referenced subcircuit definition.
    pub subckt_name: String,
    /// Port name → net name.
    pub port_map: IndexMap<String, String>,
    /// Generic parameters, in declaration order.
    pub parameters: IndexMap<String, String>,
}

impl SubcktInstance {
    /// Net names ordered by the referenced definition's port list.
    pub fn ordered_nets(&self, port_order: &[String]) -> IrResult<Vec<&str>> {
        port_order
            .iter()
            .map(|port| {
                self.port_map
                    .get(port)
                    .map(String::as_str)
                    .ok_or_else(|| IrError::MissingPort {
                        instance: self.instance_name.clone(),
                        port: port.clone(),
                    })
            })
            .collect()
    }
}

/// Either component variant, dispatched by the generator.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// A primitive element instance.
    Primitive(PrimitiveComponent),
    /// A subcircuit reference.
    Subckt(SubcktInstance),
}

impl Component {
    /// The declared instance name, common to both variants.
    pub fn instance_name(&self) -> &str {
        match self {
            Component::Primitive(p) => &p.instance_name,
            Component::Subckt(s) => &s.instance_name,
        }
    }
}
