//! Tree writer.
//!
//! Walks a property tree pre-order and hands one line at a time to a
//! [`LineSink`]. Nodes at depth `d` are indented with `d` tabs:
//!
//! ```text
//! ; comment
//! Name: value, value
//! {
//! 	Child: 1
//! }
//! ```

use crate::util::Result;

use super::constants::{COMMENT_TAG, INDENT};
use super::property::PropertyNode;

/// Destination for written lines. Lines carry no terminator.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

impl LineSink for String {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.push_str(line);
        self.push('\n');
        Ok(())
    }
}

/// Adapts a closure into a [`LineSink`].
pub struct FnSink<F>(pub F);

impl<F: FnMut(&str) -> Result<()>> LineSink for FnSink<F> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (self.0)(line)
    }
}

/// Writes nodes and comments to a sink.
pub struct TreeWriter<'a, S: LineSink + ?Sized> {
    sink: &'a mut S,
    lines: usize,
}

impl<'a, S: LineSink + ?Sized> TreeWriter<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink, lines: 0 }
    }

    /// Lines written so far.
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    fn line(&mut self, line: &str) -> Result<()> {
        self.lines += 1;
        self.sink.write_line(line)
    }

    pub fn blank_line(&mut self) -> Result<()> {
        self.line("")
    }

    /// Top-level comment line.
    pub fn comment(&mut self, text: &str) -> Result<()> {
        self.line(&format!("{}{}", COMMENT_TAG, text))
    }

    /// Write a node and its subtree at the given depth.
    pub fn node(&mut self, node: &PropertyNode, depth: usize) -> Result<()> {
        let indent = INDENT.repeat(depth);
        for comment in node.comments() {
            self.line(&format!("{}{}{}", indent, COMMENT_TAG, comment))?;
        }
        self.line(&format!("{}{}: {}", indent, node.name(), node.values_text()))?;

        if node.has_block() {
            self.line(&format!("{}{{", indent))?;
            for child in node.children() {
                self.node(child, depth + 1)?;
            }
            self.line(&format!("{}}}", indent))?;
        }
        Ok(())
    }
}

/// Write one node at depth zero.
pub fn write_node<S: LineSink + ?Sized>(sink: &mut S, node: &PropertyNode) -> Result<()> {
    TreeWriter::new(sink).node(node, 0)
}
