//! Connections between objects.
//!
//! A connection is a directed edge of the object graph, written as
//! `Connect: "OP", <from>, <to>, "<property>"`. Endpoints are written by
//! id, or as a `Type::name` label. Labels serve things that never become
//! objects, such as `Model::Scene`, and registered objects whose definition
//! line carries no id, such as models.

use std::fmt;

use tracing::trace;

use crate::util::{Error, Result};

use super::object::{ObjectId, ObjectRegistry};
use super::property::PropertyNode;
use super::value::Value;

/// Kind of edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    /// Object to object.
    ObjectObject,
    /// Object to a named property of another object.
    ObjectProperty,
}

impl Relation {
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::ObjectObject => "OO",
            Relation::ObjectProperty => "OP",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side of a connection.
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoint {
    pub type_name: String,
    pub name: String,
    /// Registered object, or `None` for a label-only endpoint.
    pub object: Option<ObjectId>,
    /// Write the `Type::name` label even though `object` is set.
    pub by_label: bool,
}

impl Endpoint {
    /// Endpoint backed by a registered object.
    pub fn object(type_name: &str, name: &str, id: ObjectId) -> Self {
        Self {
            type_name: type_name.to_string(),
            name: name.to_string(),
            object: Some(id),
            by_label: false,
        }
    }

    /// Registered object referenced by its `Type::name` label.
    ///
    /// The object must still exist in the session; only the written form
    /// changes.
    pub fn labeled_object(type_name: &str, name: &str, id: ObjectId) -> Self {
        Self { by_label: true, ..Self::object(type_name, name, id) }
    }

    /// Endpoint written as a `Type::name` label.
    pub fn label(type_name: &str, name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            name: name.to_string(),
            object: None,
            by_label: true,
        }
    }

    /// `Type::name`.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.type_name, self.name)
    }

    /// Value written on the `Connect` line.
    pub fn value(&self) -> Value {
        match self.object {
            Some(id) if !self.by_label => Value::int(id.get() as i64),
            _ => Value::String(self.qualified_name()),
        }
    }
}

/// Directed, labeled edge between two endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub from: Endpoint,
    pub to: Endpoint,
    pub relation: Relation,
    /// Target property for `OP` edges; empty for none.
    pub property: String,
}

impl Connection {
    /// Object to object edge.
    pub fn object_object(from: Endpoint, to: Endpoint) -> Self {
        Self { from, to, relation: Relation::ObjectObject, property: String::new() }
    }

    /// Object to property edge.
    pub fn object_property(from: Endpoint, to: Endpoint, property: &str) -> Self {
        Self {
            from,
            to,
            relation: Relation::ObjectProperty,
            property: property.to_string(),
        }
    }

    /// `Connect` node with a describing comment.
    pub fn to_node(&self) -> PropertyNode {
        let mut node = PropertyNode::new("Connect");
        node.add_comment(format!(
            "{}, {}",
            self.from.qualified_name(),
            self.to.qualified_name()
        ));
        node.add_value(self.relation.as_str())
            .add_value(self.from.value())
            .add_value(self.to.value());
        if !self.property.is_empty() {
            node.add_value(self.property.as_str());
        }
        node
    }
}

/// Ordered connections of one export.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    connections: Vec<Connection>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a connection; object endpoints must already be registered.
    pub fn add(&mut self, connection: Connection, objects: &ObjectRegistry) -> Result<()> {
        for id in [connection.from.object, connection.to.object].into_iter().flatten() {
            if !objects.contains(id) {
                return Err(Error::UnknownObject(id.get()));
            }
        }
        trace!(
            relation = %connection.relation,
            from = %connection.from.qualified_name(),
            to = %connection.to.qualified_name(),
            "connect"
        );
        self.connections.push(connection);
        Ok(())
    }

    /// Connections in insertion order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}
