//! Mesh input data.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::{Error, Result, Vec3};

/// Primitive topology of a mesh's index buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topology {
    Triangles,
    Quads,
    Lines,
    LineStrip,
    Points,
}

impl Topology {
    /// Number of indices per polygon, for the topologies FBX polygons can express.
    pub fn polygon_size(self) -> Result<usize> {
        match self {
            Topology::Triangles => Ok(3),
            Topology::Quads => Ok(4),
            other => Err(Error::UnsupportedTopology(other.to_string())),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topology::Triangles => "Triangles",
            Topology::Quads => "Quads",
            Topology::Lines => "Lines",
            Topology::LineStrip => "LineStrip",
            Topology::Points => "Points",
        };
        f.write_str(name)
    }
}

/// Polygon mesh as supplied by the host application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub name: String,
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Vertex normals.
    pub normals: Vec<Vec3>,
    /// Flat polygon index buffer.
    pub indices: Vec<u32>,
    pub topology: Topology,
}

impl MeshData {
    /// Create a mesh from its parts.
    pub fn new(
        name: &str,
        vertices: Vec<Vec3>,
        normals: Vec<Vec3>,
        indices: Vec<u32>,
        topology: Topology,
    ) -> Self {
        Self {
            name: name.to_string(),
            vertices,
            normals,
            indices,
            topology,
        }
    }

    /// Unit quad in the XY plane facing +Z.
    pub fn quad(name: &str) -> Self {
        Self::new(
            name,
            vec![
                Vec3::new(-0.5, -0.5, 0.0),
                Vec3::new(0.5, -0.5, 0.0),
                Vec3::new(0.5, 0.5, 0.0),
                Vec3::new(-0.5, 0.5, 0.0),
            ],
            vec![Vec3::Z; 4],
            vec![0, 1, 2, 3],
            Topology::Quads,
        )
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of polygons, if the topology is supported.
    pub fn num_polygons(&self) -> Result<usize> {
        Ok(self.indices.len() / self.topology.polygon_size()?)
    }
}
