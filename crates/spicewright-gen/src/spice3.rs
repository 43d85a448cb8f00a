//! Berkeley SPICE3 dialect.
//!
//! - No inline parameter support on `.subckt` lines; a visible comment
//!   warning lists the unsupported names.
//! - Instance parameters: space-separated `key=value` pairs.
//! - PDK libraries via a plain `.include` directive (no corner sections).

use indexmap::IndexMap;
use spicewright_ir::PdkInclude;

use crate::generator::{SpiceDialect, join_params};

/// The baseline SPICE3 generator.
#[derive(Debug)]
pub struct Spice3;

impl SpiceDialect for Spice3 {
    fn dialect_name(&self) -> &'static str {
        "spice3"
    }

    fn format_subckt_params(&self, params: &IndexMap<String, String>) -> String {
        let names = params.keys().cloned().collect::<Vec<_>>().join(", ");
        format!("$ WARNING: SPICE3 does not support inline subckt params ({names})")
    }

    fn format_instance_params(&self, params: &IndexMap<String, String>) -> String {
        join_params(params)
    }

    fn format_pdk_include(&self, include: &PdkInclude) -> String {
        // SPICE3 has no .lib corner sections; the corner is dropped.
        format!(".include \"{}\"", include.lib_file.display())
    }
}
