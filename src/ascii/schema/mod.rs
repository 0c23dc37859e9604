//! Object builders.
//!
//! These turn host data into registered FBX objects:
//! - [`model`] - polygon meshes as `Model` nodes
//! - [`anim`] - animation layers and curve node / curve graphs

pub mod model;
pub mod anim;

pub use model::{add_model, model_node, polygon_vertex_indices};
pub use anim::{add_anim_layer, build_curve_graph, Channel, CurveGraph};
