//! Ngspice dialect.
//!
//! - `.subckt` parameters use the lowercase `params:` keyword.
//! - Instance parameters are plain `key=value` pairs.
//! - The top cell's parameters are additionally emitted as a global
//!   `.param` directive after the banner, so defaults are visible to
//!   control decks that instantiate the top cell positionally.

use indexmap::IndexMap;
use spicewright_ir::Netlist;

use crate::generator::{SpiceDialect, banner, join_params};

/// The ngspice generator.
#[derive(Debug)]
pub struct Ngspice;

impl SpiceDialect for Ngspice {
    fn dialect_name(&self) -> &'static str {
        "ngspice"
    }

    fn format_subckt_params(&self, params: &IndexMap<String, String>) -> String {
        format!("params: {}", join_params(params))
    }

    fn format_instance_params(&self, params: &IndexMap<String, String>) -> String {
        join_params(params)
    }

    fn format_header(&self, netlist: &Netlist) -> String {
        let mut header = banner(self.dialect_name());
        let top = netlist.top_def().or_else(|| netlist.subckt_defs.last());
        if let Some(def) = top.filter(|d| !d.parameters.is_empty()) {
            header.push_str("\n.param ");
            header.push_str(&join_params(&def.parameters));
        }
        header
    }
}
