//! Netlist containers: subcircuit definitions and the top-level netlist.

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::component::Component;

/// A PDK library file plus the corner section to select, emitted before the
/// subcircuit blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdkInclude {
    /// Absolute path to the PDK library file.
    pub lib_file: PathBuf,
    /// Corner section name (e.g. "tt", "ff", "ss").
    pub corner: String,
}

/// A single .subckt block: its interface (ports) and contents (components).
#[derive(Debug, Clone, PartialEq)]
pub struct SubcktDef {
    /// Definition name, unique within a netlist.
    pub name: String,
    /// Ordered port list; order defines the .subckt interface line.
    pub ports: Vec<String>,
    /// Components in declaration order, which is emission order.
    pub components: Vec<Component>,
    /// Cell-level parameters, in declaration order.
    pub parameters: IndexMap<String, String>,
    /// Technology include identifiers declared by the cell.
    pub includes: Vec<String>,
}

impl SubcktDef {
    /// Create an empty definition with the given interface.
    pub fn new(
        name: impl Into<String>,
        ports: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            ports: ports.into_iter().map(Into::into).collect(),
            components: vec![],
            parameters: IndexMap::new(),
            includes: vec![],
        }
    }
}

/// Top-level container holding subcircuit definitions in dependency order:
/// every definition referenced by a later definition's instances appears
/// earlier, and the top cell comes last.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Netlist {
    /// Definitions, dependencies first.
    pub subckt_defs: Vec<SubcktDef>,
    /// Name of the designated top cell.
    pub top_cell: Option<String>,
    /// Injected PDK library records.
    pub pdk_includes: Vec<PdkInclude>,
}

impl Netlist {
    /// Wrap a single definition as a netlist with itself as top cell.
    pub fn single(def: SubcktDef) -> Self {
        Self {
            top_cell: Some(def.name.clone()),
            subckt_defs: vec![def],
            pdk_includes: vec![],
        }
    }

    /// Look up a definition by name (used for port-order resolution).
    pub fn get_subckt(&self, name: &str) -> Option<&SubcktDef> {
        self.subckt_defs.iter().find(|d| d.name == name)
    }

    /// The top cell's definition, if designated and present.
    pub fn top_def(&self) -> Option<&SubcktDef> {
        self.top_cell.as_deref().and_then(|n| self.get_subckt(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sets_top_cell() {
        let netlist = Netlist::single(SubcktDef::new("INV", ["A", "Z"]));
        assert_eq!(netlist.top_cell.as_deref(), Some("INV"));
        assert_eq!(netlist.subckt_defs.len(), 1);
        assert!(netlist.pdk_includes.is_empty());
    }

    #[test]
    fn test_get_subckt() {
        let mut netlist = Netlist::single(SubcktDef::new("INV", ["A", "Z"]));
        netlist.subckt_defs.push(SubcktDef::new("BUF", ["A", "Z"]));
        assert!(netlist.get_subckt("BUF").is_some());
        assert!(netlist.get_subckt("NAND2").is_none());
    }

    #[test]
    fn test_top_def_lookup() {
        let mut netlist = Netlist::default();
        netlist.subckt_defs.push(SubcktDef::new("INV", ["A", "Z"]));
        netlist.subckt_defs.push(SubcktDef::new("BUF", ["A", "Z"]));
        netlist.top_cell = Some("BUF".into());
        assert_eq!(netlist.top_def().map(|d| d.name.as_str()), Some("BUF"));
    }
}
