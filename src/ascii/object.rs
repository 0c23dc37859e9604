//! Object registry.
//!
//! Every FBX object (model, curve node, curve, layer) gets a unique id from
//! the session's [`IdAllocator`] and is kept, with its definition node, in
//! creation order. That order is the order objects appear under `Objects`.

use std::fmt;

use tracing::trace;

use super::property::PropertyNode;

/// Ids at or below this value are reserved by the format.
pub const RESERVED_ID_FLOOR: u64 = 6000;

/// Unique identifier of a registered object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues strictly increasing ids above [`RESERVED_ID_FLOOR`].
///
/// Owned by one export session; there is no process-wide counter.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { last: RESERVED_ID_FLOOR }
    }

    /// Next unused id.
    pub fn alloc(&mut self) -> ObjectId {
        self.last += 1;
        ObjectId(self.last)
    }

    /// Most recently issued id, if any.
    pub fn last(&self) -> Option<ObjectId> {
        (self.last > RESERVED_ID_FLOOR).then_some(ObjectId(self.last))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Object created during an export.
#[derive(Clone, Debug)]
pub struct RegisteredObject {
    /// Assigned once, never reused.
    pub id: ObjectId,
    /// FBX object type (`Model`, `AnimationCurve`, ...).
    pub type_name: String,
    /// Node written under `Objects`.
    pub definition: PropertyNode,
}

/// Append-only arena of the objects of one export.
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    ids: IdAllocator,
    objects: Vec<RegisteredObject>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new object with an empty definition named after its type.
    pub fn create_object(&mut self, type_name: &str) -> &mut RegisteredObject {
        let id = self.ids.alloc();
        trace!(%id, type_name, "register object");
        self.objects.push(RegisteredObject {
            id,
            type_name: type_name.to_string(),
            definition: PropertyNode::new(type_name),
        });
        let last = self.objects.len() - 1;
        &mut self.objects[last]
    }

    fn index_of(&self, id: ObjectId) -> Option<usize> {
        // ids are issued contiguously, so the arena index follows from the id
        let first = self.objects.first()?.id.0;
        let index = usize::try_from(id.0.checked_sub(first)?).ok()?;
        (self.objects.get(index)?.id == id).then_some(index)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: ObjectId) -> Option<&RegisteredObject> {
        self.index_of(id).map(|i| &self.objects[i])
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut RegisteredObject> {
        self.index_of(id).map(move |i| &mut self.objects[i])
    }

    /// All objects in creation order.
    pub fn objects(&self) -> &[RegisteredObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of objects of one type.
    pub fn count_of(&self, type_name: &str) -> usize {
        self.objects.iter().filter(|o| o.type_name == type_name).count()
    }

    /// Distinct object types in first-seen order.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for object in &self.objects {
            if !names.contains(&object.type_name.as_str()) {
                names.push(&object.type_name);
            }
        }
        names
    }
}
