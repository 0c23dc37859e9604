//! Mesh geometry encoder.
//!
//! Writes a mesh as a `Model` node: transformed vertices, the polygon index
//! list in FBX terminator form, the normal layer and the layer table.

use tracing::debug;

use crate::geom::{MeshData, Topology};
use crate::util::{Error, Mat4, Result};

use super::super::constants::{
    GEOMETRY_VERSION, LAYER_ELEMENT_TYPES, LAYER_VERSION, MODEL_VERSION, NORMAL_LAYER_VERSION,
    NORMAL_MAPPING, NORMAL_REFERENCE,
};
use super::super::object::{ObjectId, ObjectRegistry};
use super::super::options::ExportOptions;
use super::super::property::PropertyNode;
use super::super::value::Value;

/// FBX `PolygonVertexIndex` list for a flat index buffer.
///
/// Indices are grouped into polygons, optionally reversed, and the last
/// index of each polygon is written as `-(index + 1)` to mark its end.
pub fn polygon_vertex_indices(indices: &[u32], topology: Topology, reverse: bool) -> Result<Vec<i64>> {
    let size = topology.polygon_size()?;
    if indices.len() % size != 0 {
        return Err(Error::InvalidIndexCount { count: indices.len(), polygon_size: size });
    }

    let mut out = Vec::with_capacity(indices.len());
    let mut poly = vec![0i64; size];
    for chunk in indices.chunks_exact(size) {
        for (dst, &src) in poly.iter_mut().zip(chunk) {
            *dst = src as i64;
        }
        if reverse {
            poly.reverse();
        }
        // terminator applies to whatever is last after reordering
        poly[size - 1] = -(poly[size - 1] + 1);
        out.extend_from_slice(&poly);
    }
    Ok(out)
}

/// `Model` node for a mesh, with positions and normals run through `transform`.
pub fn model_node(mesh: &MeshData, transform: Mat4, options: &ExportOptions) -> Result<PropertyNode> {
    let index_list = polygon_vertex_indices(&mesh.indices, mesh.topology, options.reverse_winding)?;
    if let Some(&index) = mesh.indices.iter().find(|&&i| i as usize >= mesh.vertices.len()) {
        return Err(Error::IndexOutOfRange { index, vertex_count: mesh.vertices.len() });
    }

    let vertices = Value::vec3s(mesh.vertices.iter().map(|&p| transform.transform_point3(p)))?;
    let normals = Value::vec3s(mesh.normals.iter().map(|&n| transform.transform_vector3(n)))?;

    // Importers reject the model when it carries its id, so only name and kind.
    let mut model = PropertyNode::new("Model")
        .with_value(format!("Model::{}", mesh.name))
        .with_value("Mesh");

    model.add_property_with("Version", MODEL_VERSION);
    model.add_property_with("Vertices", vertices);
    model.add_property_with("PolygonVertexIndex", Value::ints(index_list)?);
    model.add_property_with("GeometryVersion", GEOMETRY_VERSION);

    let layer_number = 0;
    let normal_layer = model.add_property_with("LayerElementNormal", layer_number);
    normal_layer.add_property_with("Version", NORMAL_LAYER_VERSION);
    normal_layer.add_property_with("Name", "");
    // ByVertex is rejected as an unsupported wedge mapping mode
    normal_layer.add_property_with("MappingInformationType", NORMAL_MAPPING);
    normal_layer.add_property_with("ReferenceInformationType", NORMAL_REFERENCE);
    normal_layer.add_property_with("Normals", normals);

    let layer = model.add_property_with("Layer", layer_number);
    layer.add_property_with("Version", LAYER_VERSION);
    for element_type in LAYER_ELEMENT_TYPES {
        let element = layer.add_property("LayerElement");
        element.add_property_with("Type", element_type);
        element.add_property_with("TypedIndex", 0);
    }

    Ok(model)
}

/// Encode a mesh and register it as a `Model` object.
///
/// Nothing is registered when encoding fails.
pub fn add_model(
    objects: &mut ObjectRegistry,
    mesh: &MeshData,
    transform: Mat4,
    options: &ExportOptions,
) -> Result<ObjectId> {
    let definition = model_node(mesh, transform, options)?;
    let object = objects.create_object("Model");
    object.definition = definition;
    debug!(
        id = %object.id,
        mesh = %mesh.name,
        vertices = mesh.vertices.len(),
        indices = mesh.indices.len(),
        "encoded mesh"
    );
    Ok(object.id)
}
