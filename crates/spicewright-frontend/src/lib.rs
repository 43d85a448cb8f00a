//! Spicewright front end: cell file parsing and hierarchy resolution.
//!
//! This crate turns on-disk cell descriptions (YAML or JSON) into the
//! [`spicewright_ir::Netlist`] IR:
//!
//! - [`schema`] — the serde data model for cell files, plus the structural
//!   validation the rest of the pipeline trusts (identifier syntax, unique
//!   component ids, known primitive models)
//! - [`builder`] — conversion of a validated cell into a
//!   [`spicewright_ir::SubcktDef`], extracting the positional value and
//!   model name designated by the primitive registry
//! - [`loader`] — [`loader::load_file`], the hierarchical dependency
//!   resolver: depth-first traversal with a memo cache for diamond reuse
//!   and an in-progress set for cycle detection

pub mod builder;
pub mod error;
pub mod loader;
pub mod schema;

pub use builder::build_subckt_def;
pub use error::{FrontendError, FrontendResult};
pub use loader::load_file;
pub use schema::{Cell, CellFile, ComponentDecl, ComponentType, ParamValue};
