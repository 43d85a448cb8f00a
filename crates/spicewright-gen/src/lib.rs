//! SPICE netlist text generation.
//!
//! Every supported simulator dialect implements [`SpiceDialect`]; the
//! trait's provided methods form the shared rendering driver, so a
//! dialect only spells out what actually differs (parameter keywords,
//! include directives, line wrapping). Generation is deterministic:
//! the same netlist and dialect always produce byte-identical text.
//!
//! ```
//! use spicewright_gen::get_generator;
//! use spicewright_ir::{Netlist, SubcktDef};
//!
//! let netlist = Netlist::single(SubcktDef::new("INV", ["A", "Z"]));
//! let text = get_generator("spice3")?.generate(&netlist)?;
//! assert!(text.starts_with("* Generated by spicewright [spice3]"));
//! # Ok::<(), spicewright_gen::GenError>(())
//! ```

pub mod error;
pub mod generator;
pub mod hspice;
pub mod ngspice;
pub mod spice3;

pub use error::{GenError, GenResult};
pub use generator::{DIALECTS, SpiceDialect, get_generator};
pub use hspice::Hspice;
pub use ngspice::Ngspice;
pub use spice3::Spice3;
