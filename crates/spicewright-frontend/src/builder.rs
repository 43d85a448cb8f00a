//! Conversion from validated cell descriptions into the IR.

use indexmap::IndexMap;
use spicewright_ir::{Component, PrimitiveComponent, PrimitiveKind, SubcktDef, SubcktInstance};

use crate::error::{FrontendError, FrontendResult};
use crate::schema::{Cell, ComponentDecl, ComponentType, ParamValue};

/// Convert a validated [`Cell`] into a [`SubcktDef`].
pub fn build_subckt_def(cell: &Cell) -> FrontendResult<SubcktDef> {
    let components = cell
        .components
        .iter()
        .map(build_component)
        .collect::<FrontendResult<Vec<_>>>()?;
    Ok(SubcktDef {
        name: cell.name.clone(),
        ports: cell.ports.clone(),
        components,
        parameters: stringify(&cell.parameters),
        includes: cell.includes.clone(),
    })
}

fn build_component(decl: &ComponentDecl) -> FrontendResult<Component> {
    match decl.kind {
        ComponentType::Primitive => build_primitive(decl).map(Component::Primitive),
        ComponentType::Subckt => Ok(Component::Subckt(SubcktInstance {
            instance_name: decl.id.clone(),
            subckt_name: decl.model.clone(),
            port_map: decl.connections.clone(),
            parameters: stringify(&decl.parameters),
        })),
    }
}

fn build_primitive(decl: &ComponentDecl) -> FrontendResult<PrimitiveComponent> {
    let kind =
        PrimitiveKind::parse(&decl.model).ok_or_else(|| FrontendError::UnknownPrimitiveModel {
            id: decl.id.clone(),
            model: decl.model.clone(),
        })?;
    let spec = kind.spec();

    // All declared parameters normalized to text, then the designated value
    // and model-name keys pulled out into their dedicated fields.
    let mut parameters = stringify(&decl.parameters);
    let value = spec.value_param.and_then(|key| parameters.shift_remove(key));
    let model_name = spec.model_param.and_then(|key| parameters.shift_remove(key));

    Ok(PrimitiveComponent {
        instance_name: decl.id.clone(),
        kind,
        connections: decl.connections.clone(),
        parameters,
        model_name,
        value,
    })
}

fn stringify(params: &IndexMap<String, ParamValue>) -> IndexMap<String, String> {
    params
        .iter()
        .map(|(k, v)| (k.clone(), v.to_string()))
        .collect()
}
