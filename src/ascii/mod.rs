//! FBX ASCII writer.
//!
//! Split the same way the document is: values and property nodes form the
//! tree, registries hold the objects and connections of one export, schema
//! builders fill them from host data and the writer walks the result.

pub mod constants;
mod value;
mod property;
mod object;
mod connection;
mod writer;
mod stream;
mod options;
mod document;
mod scene;

pub mod schema;

pub use value::{Run, Value};
pub use property::PropertyNode;
pub use object::{IdAllocator, ObjectId, ObjectRegistry, RegisteredObject, RESERVED_ID_FLOOR};
pub use connection::{Connection, ConnectionRegistry, Endpoint, Relation};
pub use writer::{write_node, FnSink, LineSink, TreeWriter};
pub use stream::WriteSink;
pub use options::{ExportOptions, KeyTiming};
pub use document::{connections_node, definitions_node, header_node, objects_node, Document};
pub use scene::{export_mesh, FbxScene, MeshEntry, SceneDescription};
