//! Property tree nodes.
//!
//! Every line of an FBX ASCII document is a property: a name, a list of
//! values and optionally a `{ }` block of child properties. Nodes only ever
//! grow; nothing is removed once added.

use super::value::Value;

/// Named node of the document tree.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyNode {
    name: String,
    values: Vec<Value>,
    comments: Vec<String>,
    /// `None` means no brace block; `Some(empty)` writes an empty block.
    children: Option<Vec<PropertyNode>>,
}

impl PropertyNode {
    /// Create a node with no values and no block.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            values: Vec::new(),
            comments: Vec::new(),
            children: None,
        }
    }

    /// Builder form of [`add_value`](Self::add_value).
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Append a value.
    pub fn add_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.values.push(value.into());
        self
    }

    /// Append a comment line, written above the node.
    pub fn add_comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.comments.push(comment.into());
        self
    }

    /// Make sure the node writes a brace block, even with no children.
    pub fn open_block(&mut self) -> &mut Self {
        self.children.get_or_insert_with(Vec::new);
        self
    }

    /// Append an existing node as the last child.
    pub fn add_child(&mut self, child: PropertyNode) -> &mut PropertyNode {
        let children = self.children.get_or_insert_with(Vec::new);
        children.push(child);
        let last = children.len() - 1;
        &mut children[last]
    }

    /// Append an empty child property and return it.
    pub fn add_property(&mut self, name: &str) -> &mut PropertyNode {
        self.add_child(PropertyNode::new(name))
    }

    /// Append a child property carrying one value and return it.
    pub fn add_property_with(&mut self, name: &str, value: impl Into<Value>) -> &mut PropertyNode {
        self.add_child(PropertyNode::new(name).with_value(value))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Child nodes (empty when there is no block).
    pub fn children(&self) -> &[PropertyNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Whether the node writes a brace block.
    pub fn has_block(&self) -> bool {
        self.children.is_some()
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&PropertyNode> {
        self.children().iter().find(|c| c.name == name)
    }

    /// All children with the given name, in order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a PropertyNode> + 'a {
        self.children().iter().filter(move |c| c.name == name)
    }

    /// Values joined as they appear after `Name: `.
    pub fn values_text(&self) -> String {
        let texts: Vec<String> = self.values.iter().map(Value::text).collect();
        texts.join(super::constants::VALUE_SEPARATOR)
    }
}
