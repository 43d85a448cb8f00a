//! The technology-mapping transform.
//!
//! Rewrites generic device references into technology-specific ones. The
//! transform is pure: the input netlist and configuration are never
//! mutated; every call builds a fresh netlist.

use indexmap::IndexMap;
use spicewright_ir::{Component, Netlist, PdkInclude, PrimitiveComponent, SubcktDef, SubcktInstance};
use tracing::debug;

use crate::config::{ModelEntry, PdkConfig};
use crate::error::PdkResult;

/// Map a netlist's logical device names onto a PDK.
///
/// For every primitive whose model name the PDK knows:
/// - `is_subckt` → replaced with a [`SubcktInstance`] of the physical cell
/// - otherwise → the model name is substituted in place
///
/// Unmapped model names pass through unchanged, so designs may mix
/// explicit and technology-mapped devices. Exactly one [`PdkInclude`] is
/// appended, selecting `corner` if given, else the PDK's default.
pub fn resolve(netlist: &Netlist, pdk: &PdkConfig, corner: Option<&str>) -> PdkResult<Netlist> {
    let effective_corner = corner.unwrap_or(&pdk.default_corner);
    debug!(pdk = %pdk.name, corner = effective_corner, "applying technology mapping");

    let subckt_defs = netlist
        .subckt_defs
        .iter()
        .map(|def| resolve_def(def, pdk))
        .collect::<PdkResult<Vec<_>>>()?;

    let mut pdk_includes = netlist.pdk_includes.clone();
    pdk_includes.push(PdkInclude {
        lib_file: pdk.lib_path(),
        corner: effective_corner.to_string(),
    });

    Ok(Netlist {
        subckt_defs,
        top_cell: netlist.top_cell.clone(),
        pdk_includes,
    })
}

fn resolve_def(def: &SubcktDef, pdk: &PdkConfig) -> PdkResult<SubcktDef> {
    let components = def
        .components
        .iter()
        .map(|comp| resolve_component(comp, pdk))
        .collect::<PdkResult<Vec<_>>>()?;
    Ok(SubcktDef {
        name: def.name.clone(),
        ports: def.ports.clone(),
        components,
        parameters: def.parameters.clone(),
        includes: def.includes.clone(),
    })
}

fn resolve_component(comp: &Component, pdk: &PdkConfig) -> PdkResult<Component> {
    let Component::Primitive(prim) = comp else {
        return Ok(comp.clone());
    };
    let Some(model_name) = prim.model_name.as_deref() else {
        return Ok(comp.clone());
    };
    let Some(entry) = pdk.resolve_model(model_name) else {
        // Unknown logical name: pass through unchanged.
        return Ok(comp.clone());
    };

    if entry.is_subckt {
        return Ok(Component::Subckt(wrap_as_subckt(prim, entry)?));
    }

    // Simple model-card rename; everything else is kept as-is.
    Ok(Component::Primitive(PrimitiveComponent {
        model_name: Some(entry.pdk_name.clone()),
        ..prim.clone()
    }))
}

/// Convert a primitive into an instance of the PDK's wrapper subcircuit.
///
/// Nets are taken in the primitive's canonical port order and paired
/// positionally with the PDK's declared port names (or the lowercased
/// canonical names when the PDK declares none). The insertion order of the
/// resulting port map is therefore the PDK's port declaration order, which
/// the generator relies on for external subcircuits.
fn wrap_as_subckt(prim: &PrimitiveComponent, entry: &ModelEntry) -> PdkResult<SubcktInstance> {
    let spec = prim.spec();
    let nets = prim.ordered_nets()?;

    let physical_ports: Vec<String> = match &entry.ports {
        Some(ports) => ports.clone(),
        None => spec.port_order.iter().map(|p| p.to_lowercase()).collect(),
    };

    let port_map: IndexMap<String, String> = physical_ports
        .into_iter()
        .zip(nets.iter().map(ToString::to_string))
        .collect();

    // Reinsert the extracted positional value so no information is lost.
    let mut parameters = prim.parameters.clone();
    if let (Some(value), Some(key)) = (&prim.value, spec.value_param) {
        parameters.insert(key.to_string(), value.clone());
    }

    Ok(SubcktInstance {
        instance_name: prim.instance_name.clone(),
        subckt_name: entry.pdk_name.clone(),
        port_map,
        parameters,
    })
}
