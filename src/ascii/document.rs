//! Whole-document assembly.
//!
//! A document is a block of attribution comments followed by the root
//! nodes `FBXHeaderExtension`, `Objects`, `Definitions` and `Connections`,
//! each followed by a blank line.

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::util::Result;

use super::connection::ConnectionRegistry;
use super::constants::{
    CURVE_NODE_TEMPLATE, DEFINITIONS_VERSION, FBX_HEADER_VERSION, FBX_VERSION, FBX_VERSION_MAJOR,
    FBX_VERSION_MINOR, FBX_VERSION_RELEASE,
};
use super::object::ObjectRegistry;
use super::property::PropertyNode;
use super::stream::WriteSink;
use super::writer::{LineSink, TreeWriter};

/// Complete, ready-to-write document.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    /// Attribution comments written before the first root.
    pub comments: Vec<String>,
    /// Root nodes in output order.
    pub roots: Vec<PropertyNode>,
}

impl Document {
    /// Write every line to `sink`. Returns the number of lines written.
    pub fn write<S: LineSink + ?Sized>(&self, sink: &mut S) -> Result<usize> {
        let mut writer = TreeWriter::new(sink);
        for comment in &self.comments {
            writer.comment(comment)?;
        }
        writer.blank_line()?;
        for root in &self.roots {
            writer.node(root, 0)?;
            writer.blank_line()?;
        }
        Ok(writer.lines_written())
    }

    /// All lines, without terminators.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        // writing into memory cannot fail
        let _ = self.write(&mut lines);
        lines
    }

    /// Write to a file.
    ///
    /// The document is complete before the file is created, so construction
    /// errors never leave a file behind; an I/O error midway can.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut sink = WriteSink::create(path)?;
        let lines = self.write(&mut sink)?;
        sink.flush()?;
        debug!(path = %path.display(), lines, bytes = sink.bytes_written(), "wrote document");
        Ok(())
    }

    /// Root node by name.
    pub fn root(&self, name: &str) -> Option<&PropertyNode> {
        self.roots.iter().find(|r| r.name() == name)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.to_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// `FBXHeaderExtension` root.
pub fn header_node(creator: &str) -> PropertyNode {
    let mut header = PropertyNode::new("FBXHeaderExtension");
    // some importers refuse files without this line
    header.add_comment(format!(
        "FBX {}.{}.{:02}  project file",
        FBX_VERSION_MAJOR, FBX_VERSION_MINOR, FBX_VERSION_RELEASE
    ));
    header.add_property_with("FBXHeaderVersion", FBX_HEADER_VERSION);
    header.add_property_with("FBXVersion", FBX_VERSION);
    header.add_property_with("Creator", creator);
    header
}

/// `Objects` root holding every registered definition in creation order.
pub fn objects_node(objects: &ObjectRegistry) -> PropertyNode {
    let mut root = PropertyNode::new("Objects");
    root.open_block();
    for object in objects.objects() {
        root.add_child(object.definition.clone());
    }
    root
}

/// `Definitions` root with per-type object counts.
pub fn definitions_node(objects: &ObjectRegistry) -> PropertyNode {
    let models = objects.count_of("Model");
    let mut defs = PropertyNode::new("Definitions");
    defs.add_property_with("Version", DEFINITIONS_VERSION);
    defs.add_property_with("Count", objects.len());
    defs.add_property_with("ObjectType", "Model")
        .add_property_with("Count", models);
    defs.add_property_with("ObjectType", "Geometry")
        .add_property_with("Count", models);

    for type_name in objects.type_names() {
        if type_name == "Model" {
            continue;
        }
        let object_type = defs.add_property_with("ObjectType", type_name);
        object_type.add_property_with("Count", objects.count_of(type_name));
        if type_name == "AnimationCurveNode" {
            object_type
                .add_property_with("PropertyTemplate", CURVE_NODE_TEMPLATE)
                .add_property("Properties70")
                .add_property("P")
                .add_value("d")
                .add_value("Compound")
                .add_value("")
                .add_value("");
        }
    }
    defs
}

/// `Connections` root, one `Connect` per connection in insertion order.
pub fn connections_node(connections: &ConnectionRegistry) -> PropertyNode {
    let mut root = PropertyNode::new("Connections");
    root.open_block();
    for connection in connections.connections() {
        root.add_child(connection.to_node());
    }
    root
}
