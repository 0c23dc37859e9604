//! # fbx-ascii
//!
//! Scene-graph serializer for the FBX 6.1 ASCII format.
//!
//! Meshes, recorded transform animation and the connections between them
//! are collected into an export session, turned into a property tree and
//! written line by line to any [`ascii::LineSink`].
//!
//! ## Modules
//!
//! - [`util`] - Errors and math helpers
//! - [`core`] - KTime encoding and animation samples
//! - [`geom`] - Mesh input data
//! - [`ascii`] - Property tree, registries, schema builders and writer
//!
//! ## Example
//!
//! ```ignore
//! use fbx_ascii::prelude::*;
//!
//! let mut scene = FbxScene::new(ExportOptions::default());
//! let model = scene.add_mesh(&MeshData::quad("card"), Mat4::IDENTITY)?;
//!
//! let mut anim = AnimObject::new();
//! anim.add_frame(Vec3::ZERO, Quat::IDENTITY, 0.0);
//! anim.add_frame(Vec3::ONE, Quat::IDENTITY, 1.0);
//! scene.animate(model, &anim)?;
//! scene.connect_to_scene(model)?;
//!
//! scene.write_file("card.fbx")?;
//! ```

pub mod util;
pub mod core;
pub mod geom;
pub mod ascii;

// Re-export commonly used types
pub use util::{Error, Result};
pub use ascii::{Document, ExportOptions, FbxScene};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{Error, Result, Mat4, Quat, Vec3};
    pub use crate::core::{AnimFrame, AnimObject, KTime, KTIME_SECOND};
    pub use crate::geom::{MeshData, Topology};
    pub use crate::ascii::{
        export_mesh, Document, ExportOptions, FbxScene, KeyTiming, LineSink, PropertyNode, Value,
    };
}
