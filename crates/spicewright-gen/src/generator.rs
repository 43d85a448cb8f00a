//! The dialect rendering contract and the shared generation driver.
//!
//! `SpiceDialect::generate` is the template method: it walks the netlist
//! in its fixed orders (definition list order, component declaration
//! order, canonical port order) and delegates every piece of dialect-
//! specific text to overridable hooks. Output is a pure function of
//! (netlist, dialect): nothing here iterates an unordered container.

use indexmap::IndexMap;
use spicewright_ir::{Component, Netlist, PdkInclude, SubcktDef};
use tracing::debug;

use crate::error::{GenError, GenResult};

/// Render `params` as space-separated `key=value` pairs, in insertion order.
pub(crate) fn join_params(params: &IndexMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The comment banner naming the dialect.
pub(crate) fn banner(dialect: &str) -> String {
    format!("* Generated by spicewright [{dialect}]")
}

/// One output dialect: a set of rendering rules over the shared driver.
pub trait SpiceDialect: std::fmt::Debug {
    /// Registry name of this dialect.
    fn dialect_name(&self) -> &'static str;

    /// Inline parameter clause appended to a `.subckt` line.
    fn format_subckt_params(&self, params: &IndexMap<String, String>) -> String;

    /// Parameter clause appended to a component line.
    fn format_instance_params(&self, params: &IndexMap<String, String>) -> String;

    /// Leading banner; dialects may extend it with global directives.
    fn format_header(&self, _netlist: &Netlist) -> String {
        banner(self.dialect_name())
    }

    /// Directive selecting a PDK library file and corner.
    fn format_pdk_include(&self, include: &PdkInclude) -> String {
        format!(".lib \"{}\" {}", include.lib_file.display(), include.corner)
    }

    /// Directive for a cell-declared technology include.
    fn format_cell_include(&self, include: &str) -> String {
        format!(".include \"{include}\"")
    }

    /// The `.subckt` interface line, passed through [`Self::wrap_line`].
    fn format_subckt_header(&self, def: &SubcktDef) -> String {
        let mut line = format!(".subckt {}", def.name);
        for port in &def.ports {
            line.push(' ');
            line.push_str(port);
        }
        if !def.parameters.is_empty() {
            line.push(' ');
            line.push_str(&self.format_subckt_params(&def.parameters));
        }
        self.wrap_line(line)
    }

    /// The `.ends` line.
    fn format_subckt_footer(&self, def: &SubcktDef) -> String {
        format!(".ends {}", def.name)
    }

    /// Hook for dialects with a line-length budget. Default: unchanged.
    fn wrap_line(&self, line: String) -> String {
        line
    }

    /// One element line per component, in declaration order.
    fn format_component(&self, component: &Component, netlist: &Netlist) -> GenResult<String> {
        match component {
            Component::Primitive(prim) => {
                let spec = prim.spec();
                let mut parts = vec![format!("{}{}", spec.element_letter, prim.instance_name)];
                parts.extend(prim.ordered_nets()?.iter().map(ToString::to_string));
                if let Some(value) = &prim.value {
                    parts.push(value.clone());
                } else if let Some(model) = &prim.model_name {
                    parts.push(model.clone());
                }
                if !prim.parameters.is_empty() {
                    parts.push(self.format_instance_params(&prim.parameters));
                }
                Ok(parts.join(" "))
            }
            Component::Subckt(inst) => {
                // Port order comes from the referenced definition. External
                // subcircuits (PDK library cells) are not defined in the
                // netlist; for those the port map's insertion order is the
                // declared physical order.
                let nets: Vec<String> = match netlist.get_subckt(&inst.subckt_name) {
                    Some(def) => inst
                        .ordered_nets(&def.ports)?
                        .iter()
                        .map(ToString::to_string)
                        .collect(),
                    None if !inst.port_map.is_empty() => {
                        inst.port_map.values().cloned().collect()
                    }
                    None => {
                        return Err(GenError::UndefinedSubckt {
                            instance: inst.instance_name.clone(),
                            subckt: inst.subckt_name.clone(),
                        });
                    }
                };
                let mut parts = vec![format!("X{}", inst.instance_name)];
                parts.extend(nets);
                parts.push(inst.subckt_name.clone());
                if !inst.parameters.is_empty() {
                    parts.push(self.format_instance_params(&inst.parameters));
                }
                Ok(parts.join(" "))
            }
        }
    }

    /// Render the whole netlist. All-or-nothing: no partial text on error.
    fn generate(&self, netlist: &Netlist) -> GenResult<String> {
        debug!(
            dialect = self.dialect_name(),
            defs = netlist.subckt_defs.len(),
            "generating netlist"
        );
        let mut lines = vec![self.format_header(netlist)];

        let mut include_lines: Vec<String> = netlist
            .pdk_includes
            .iter()
            .map(|inc| self.format_pdk_include(inc))
            .collect();
        let mut seen: Vec<&str> = vec![];
        for def in &netlist.subckt_defs {
            for include in &def.includes {
                if !seen.contains(&include.as_str()) {
                    seen.push(include);
                    include_lines.push(self.format_cell_include(include));
                }
            }
        }
        if !include_lines.is_empty() {
            lines.push(String::new());
            lines.append(&mut include_lines);
        }

        for def in &netlist.subckt_defs {
            lines.push(String::new());
            lines.push(self.format_subckt_header(def));
            for component in &def.components {
                lines.push(self.format_component(component, netlist)?);
            }
            lines.push(self.format_subckt_footer(def));
        }

        let mut text = lines.join("\n");
        text.push('\n');
        Ok(text)
    }
}

/// Names of the registered dialects, in registry order.
pub const DIALECTS: [&str; 3] = ["hspice", "ngspice", "spice3"];

/// Instantiate the generator for a dialect name (case-insensitive).
pub fn get_generator(name: &str) -> GenResult<Box<dyn SpiceDialect>> {
    match name.to_ascii_lowercase().as_str() {
        "hspice" => Ok(Box::new(crate::hspice::Hspice)),
        "ngspice" => Ok(Box::new(crate::ngspice::Ngspice)),
        "spice3" => Ok(Box::new(crate::spice3::Spice3)),
        _ => Err(GenError::UnknownDialect {
            name: name.to_string(),
            valid: DIALECTS.iter().map(ToString::to_string).collect(),
        }),
    }
}
