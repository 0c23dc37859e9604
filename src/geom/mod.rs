//! Host-side geometry input.
//!
//! Meshes are handed to the exporter as plain arrays; the writer turns them
//! into FBX `Model` nodes (see [`crate::ascii::schema::model`]).

mod mesh;

pub use mesh::*;
