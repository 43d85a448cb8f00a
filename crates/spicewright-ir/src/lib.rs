//! Spicewright Netlist Intermediate Representation
//!
//! This crate provides the core data structures for representing circuit
//! netlists in spicewright. It forms the foundation of the whole
//! generation stack.
//!
//! # Overview
//!
//! A [`Netlist`] holds subcircuit definitions ([`SubcktDef`]) in dependency
//! order: every definition referenced by an instance appears before the
//! definition that instantiates it, and the top cell comes last. Each
//! definition holds its components ([`Component`]) in declaration order,
//! which is also emission order.
//!
//! # Core Components
//!
//! - **Primitives**: [`PrimitiveKind`] for the closed set of device types
//!   and [`PrimitiveSpec`] for their canonical port order and emission rules
//! - **Components**: [`PrimitiveComponent`] for primitive elements,
//!   [`SubcktInstance`] for hierarchical references, unified as [`Component`]
//! - **Containers**: [`SubcktDef`] and [`Netlist`]
//! - **PDK records**: [`PdkInclude`] for technology library directives
//!
//! # Example: Building an Inverter
//!
//! ```rust
//! use indexmap::IndexMap;
//! use spicewright_ir::{Component, Netlist, PrimitiveComponent, PrimitiveKind, SubcktDef};
//!
//! let nmos = PrimitiveComponent {
//!     instance_name: "MN1".into(),
//!     kind: PrimitiveKind::Nmos,
//!     connections: IndexMap::from([
//!         ("D".to_string(), "Z".to_string()),
//!         ("G".to_string(), "A".to_string()),
//!         ("S".to_string(), "VSS".to_string()),
//!         ("B".to_string(), "VSS".to_string()),
//!     ]),
//!     parameters: IndexMap::new(),
//!     model_name: Some("nch".into()),
//!     value: None,
//! };
//!
//! // Nets come back in the canonical D G S B order.
//! assert_eq!(nmos.ordered_nets().unwrap(), vec!["Z", "A", "VSS", "VSS"]);
//!
//! let mut def = SubcktDef::new("INV", ["A", "Z", "VDD", "VSS"]);
//! def.components.push(Component::Primitive(nmos));
//! let netlist = Netlist::single(def);
//! assert_eq!(netlist.top_cell.as_deref(), Some("INV"));
//! ```

pub mod component;
pub mod error;
pub mod netlist;
pub mod primitives;

pub use component::{Component, PrimitiveComponent, SubcktInstance};
pub use error::{IrError, IrResult};
pub use netlist::{Netlist, PdkInclude, SubcktDef};
pub use primitives::{PrimitiveKind, PrimitiveSpec};
