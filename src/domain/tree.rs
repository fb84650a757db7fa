use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value::Value;

/// Handle to a node inside a [`Document`].
///
/// Handles are plain indices into the document's arena. They never own the
/// node and become stale if used against a different document.
pub type NodeId = Index;

/// One element of the document tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Element tag
    type_name: String,
    /// Properties in insertion order, names unique
    properties: Vec<(String, Value)>,
    /// Index of parent node in the arena, None for the root
    parent: Option<NodeId>,
    /// Indices of child nodes in document order
    children: Vec<NodeId>,
}

impl Node {
    fn new(type_name: String, parent: Option<NodeId>) -> Self {
        Self {
            type_name,
            properties: Vec::new(),
            parent,
            children: Vec::new(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Arena-backed attributed tree with a single root.
///
/// The structure is fixed once the document is built: children are only
/// appended while loading, and navigation never adds, removes or reorders
/// nodes. Properties stay mutable for the lifetime of the document.
#[derive(Debug)]
pub struct Document {
    arena: Arena<Node>,
    root: NodeId,
}

impl Document {
    /// Create a document holding only a root node.
    pub fn new(root_type: impl Into<String>) -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(Node::new(root_type.into(), None));
        Self { arena, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the document.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn node(&self, id: NodeId) -> DomainResult<&Node> {
        self.arena.get(id).ok_or(DomainError::StaleHandle)
    }

    fn node_mut(&mut self, id: NodeId) -> DomainResult<&mut Node> {
        self.arena.get_mut(id).ok_or(DomainError::StaleHandle)
    }

    /// Append a new child under `parent`. Used while building a document.
    #[instrument(level = "trace", skip(self))]
    pub fn append_child(&mut self, parent: NodeId, type_name: &str) -> DomainResult<NodeId> {
        // validate before inserting so a stale parent leaves no orphan behind
        self.node(parent)?;
        let id = self
            .arena
            .insert(Node::new(type_name.to_string(), Some(parent)));
        self.node_mut(parent)?.children.push(id);
        Ok(id)
    }

    pub fn child_count(&self, id: NodeId) -> DomainResult<usize> {
        Ok(self.node(id)?.children.len())
    }

    pub fn child_at(&self, id: NodeId, index: usize) -> DomainResult<NodeId> {
        let children = &self.node(id)?.children;
        children
            .get(index)
            .copied()
            .ok_or(DomainError::IndexOutOfRange {
                index,
                count: children.len(),
            })
    }

    /// First child whose type name equals `name`, in child order.
    #[instrument(level = "trace", skip(self))]
    pub fn child_by_name(&self, id: NodeId, name: &str) -> DomainResult<NodeId> {
        self.node(id)?
            .children
            .iter()
            .copied()
            .find(|&child| {
                self.arena
                    .get(child)
                    .is_some_and(|node| node.type_name == name)
            })
            .ok_or_else(|| DomainError::NodeNotFound(name.to_string()))
    }

    /// First child carrying `property` with a value matching `expected`.
    #[instrument(level = "trace", skip(self))]
    pub fn child_by_property(
        &self,
        id: NodeId,
        property: &str,
        expected: &str,
    ) -> DomainResult<NodeId> {
        self.node(id)?
            .children
            .iter()
            .copied()
            .find(|&child| {
                self.property(child, property)
                    .is_ok_and(|value| value.matches(expected))
            })
            .ok_or_else(|| DomainError::NoMatchingChild {
                property: property.to_string(),
                value: expected.to_string(),
            })
    }

    /// Type names of the children, in order.
    pub fn child_names(&self, id: NodeId) -> DomainResult<Vec<&str>> {
        self.node(id)?
            .children
            .iter()
            .map(|&child| self.node(child).map(Node::type_name))
            .collect()
    }

    pub fn property_names(&self, id: NodeId) -> DomainResult<Vec<&str>> {
        Ok(self
            .node(id)?
            .properties
            .iter()
            .map(|(k, _)| k.as_str())
            .collect())
    }

    pub fn property(&self, id: NodeId, name: &str) -> DomainResult<&Value> {
        self.node(id)?
            .properties
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
            .ok_or_else(|| DomainError::PropertyNotFound(name.to_string()))
    }

    /// Create or overwrite a property, keeping its original position.
    ///
    /// Returns the previous value if there was one.
    #[instrument(level = "trace", skip(self, value))]
    pub fn set_property(
        &mut self,
        id: NodeId,
        name: &str,
        value: impl Into<Value>,
    ) -> DomainResult<Option<Value>> {
        let value = value.into();
        let node = self.node_mut(id)?;
        match node.properties.iter_mut().find(|(k, _)| k == name) {
            Some((_, existing)) => Ok(Some(std::mem::replace(existing, value))),
            None => {
                node.properties.push((name.to_string(), value));
                Ok(None)
            }
        }
    }

    /// Number of levels from the root to the deepest leaf.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self.root, 1)];
        while let Some((id, level)) = pending.pop() {
            if let Some(node) = self.arena.get(id) {
                deepest = deepest.max(level);
                pending.extend(node.children.iter().map(|&child| (child, level + 1)));
            }
        }
        deepest
    }

    /// Type names from the root down to `id`, for diagnostics.
    pub fn path_of(&self, id: NodeId) -> DomainResult<Vec<&str>> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(idx) = current {
            let node = self.node(idx)?;
            path.push(node.type_name());
            current = node.parent;
        }
        path.reverse();
        Ok(path)
    }
}
