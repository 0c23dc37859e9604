//! Export session.
//!
//! [`FbxScene`] owns the id allocator, object registry and connection
//! registry of one export. Sessions share nothing, so independent exports
//! can run side by side.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::AnimObject;
use crate::geom::MeshData;
use crate::util::{Error, Mat4, Result};

use super::connection::{Connection, ConnectionRegistry, Endpoint};
use super::document::{connections_node, definitions_node, header_node, objects_node, Document};
use super::object::{ObjectId, ObjectRegistry};
use super::options::ExportOptions;
use super::schema::{add_anim_layer, add_model, build_curve_graph, CurveGraph};
use super::writer::LineSink;

/// Objects and connections of one export.
#[derive(Debug, Default)]
pub struct FbxScene {
    options: ExportOptions,
    objects: ObjectRegistry,
    connections: ConnectionRegistry,
    /// Registered models and their mesh names.
    models: Vec<(ObjectId, String)>,
    anim_layer: Option<ObjectId>,
}

impl FbxScene {
    pub fn new(options: ExportOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    pub fn objects(&self) -> &ObjectRegistry {
        &self.objects
    }

    pub fn connections(&self) -> &ConnectionRegistry {
        &self.connections
    }

    /// Encode a mesh as a model.
    pub fn add_mesh(&mut self, mesh: &MeshData, transform: Mat4) -> Result<ObjectId> {
        let id = add_model(&mut self.objects, mesh, transform, &self.options)?;
        self.models.push((id, mesh.name.clone()));
        Ok(id)
    }

    /// Mesh name of a registered model.
    pub fn model_name(&self, model: ObjectId) -> Result<&str> {
        self.models
            .iter()
            .find(|(id, _)| *id == model)
            .map(|(_, name)| name.as_str())
            .ok_or(Error::UnknownObject(model.get()))
    }

    /// The session's animation layer, created on first use.
    pub fn anim_layer(&mut self) -> ObjectId {
        match self.anim_layer {
            Some(id) => id,
            None => {
                let id = add_anim_layer(&mut self.objects, &self.options.anim_layer_name);
                self.anim_layer = Some(id);
                id
            }
        }
    }

    /// Attach recorded animation to a model.
    pub fn animate(&mut self, model: ObjectId, anim: &AnimObject) -> Result<CurveGraph> {
        if anim.is_empty() {
            return Err(Error::EmptyAnimation);
        }
        anim.validate()?;
        self.options.validate()?;
        let name = self.model_name(model)?.to_string();
        let layer = self.anim_layer();
        build_curve_graph(
            anim,
            model,
            &name,
            layer,
            &mut self.objects,
            &mut self.connections,
            &self.options,
        )
    }

    /// Parent a model under the scene root.
    pub fn connect_to_scene(&mut self, model: ObjectId) -> Result<()> {
        let name = self.model_name(model)?.to_string();
        let scene = Endpoint::label("Model", &self.options.scene_name);
        self.connect(Connection::object_object(Endpoint::label("Model", &name), scene))
    }

    /// Link a named material to a model.
    pub fn attach_material(&mut self, model: ObjectId, material: &str) -> Result<()> {
        let name = self.model_name(model)?.to_string();
        self.connect(Connection::object_object(
            Endpoint::label("Material", material),
            Endpoint::label("Model", &name),
        ))
    }

    /// Record an arbitrary connection.
    pub fn connect(&mut self, connection: Connection) -> Result<()> {
        self.connections.add(connection, &self.objects)
    }

    /// Assemble the document.
    pub fn to_document(&self) -> Document {
        let mut comments = self.options.comments.clone();
        if comments.is_empty() {
            comments.push(self.options.creator.clone());
        }
        Document {
            comments,
            roots: vec![
                header_node(&self.options.creator),
                objects_node(&self.objects),
                definitions_node(&self.objects),
                connections_node(&self.connections),
            ],
        }
    }

    /// Write the document to a line sink.
    pub fn write<S: LineSink + ?Sized>(&self, sink: &mut S) -> Result<usize> {
        let lines = self.to_document().write(sink)?;
        debug!(
            objects = self.objects.len(),
            connections = self.connections.len(),
            lines,
            "exported scene"
        );
        Ok(lines)
    }

    /// Write the document to a file.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.to_document().write_file(path)
    }
}

/// Export a single mesh, with optional animation and material.
///
/// The document always carries the animation layer, animated or not.
/// Everything is built before the first line reaches `sink`.
pub fn export_mesh<S: LineSink + ?Sized>(
    sink: &mut S,
    mesh: &MeshData,
    transform: Mat4,
    animation: Option<&AnimObject>,
    material: Option<&str>,
    options: &ExportOptions,
) -> Result<usize> {
    let mut scene = FbxScene::new(options.clone());
    let model = scene.add_mesh(mesh, transform)?;
    scene.anim_layer();
    if let Some(anim) = animation {
        scene.animate(model, anim)?;
    }
    scene.connect_to_scene(model)?;
    if let Some(material) = material {
        scene.attach_material(model, material)?;
    }
    scene.write(sink)
}

/// One mesh entry of a scene description file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshEntry {
    #[serde(flatten)]
    pub mesh: MeshData,
    /// Column-major transform; identity when absent.
    #[serde(default)]
    pub transform: Option<Mat4>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub animation: Option<AnimObject>,
}

/// JSON scene description consumed by the command line tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    pub meshes: Vec<MeshEntry>,
}

impl SceneDescription {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Build an export session from the description.
    pub fn build(&self, options: ExportOptions) -> Result<FbxScene> {
        let mut scene = FbxScene::new(options);
        for entry in &self.meshes {
            let model = scene.add_mesh(&entry.mesh, entry.transform.unwrap_or(Mat4::IDENTITY))?;
            if let Some(anim) = &entry.animation {
                scene.animate(model, anim)?;
            }
            scene.connect_to_scene(model)?;
            if let Some(material) = &entry.material {
                scene.attach_material(model, material)?;
            }
        }
        Ok(scene)
    }
}
