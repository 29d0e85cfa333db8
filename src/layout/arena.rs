use super::component::Component;
use crate::error::LayoutError;
use ahash::AHashMap;
use itertools::Itertools;
use serde_json::{Map, Value};

pub type NodeId = usize;

/// Outcome of [`LayoutArena::set_field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldWrite {
    Written,
    /// No component has the requested name.
    UnknownElement,
    /// A `name` write would have given two components the same name.
    NameCollision(String),
}

#[derive(Debug, Clone)]
enum NodeBody {
    Component {
        component: Component,
        /// `Some` when the source object carried a `children` array.
        children: Option<Vec<NodeId>>,
    },
    /// Anything in the tree that is not an object, kept verbatim.
    Raw(Value),
}

#[derive(Debug, Clone)]
struct Node {
    body: NodeBody,
    parent: Option<NodeId>,
}

/// A layout tree flattened into a name-indexed registry.
///
/// Nodes are stored in pre-order. Lookups by component `name` go through a
/// hash index, and the nested `children` view is only rebuilt when the layout
/// is turned back into a tree. `parentId` attributes are plain lookup keys and
/// never own anything.
#[derive(Debug, Clone)]
pub struct LayoutArena {
    nodes: Vec<Node>,
    index: AHashMap<String, NodeId>,
}

impl LayoutArena {
    /// Loads a layout tree. The source value is never modified.
    ///
    /// Fails when two components share a `name`, since a binding target
    /// naming either of them would be ambiguous.
    pub fn from_tree(tree: &Value) -> Result<Self, LayoutError> {
        let mut arena = Self {
            nodes: Vec::new(),
            index: AHashMap::new(),
        };
        arena.insert(tree, None)?;
        Ok(arena)
    }

    fn insert(&mut self, value: &Value, parent: Option<NodeId>) -> Result<NodeId, LayoutError> {
        let id = self.nodes.len();
        let Value::Object(object) = value else {
            self.nodes.push(Node {
                body: NodeBody::Raw(value.clone()),
                parent,
            });
            return Ok(id);
        };

        let mut attributes = Map::with_capacity(object.len());
        let mut nested = None;
        for (key, field) in object {
            match (key.as_str(), field) {
                ("children", Value::Array(items)) => {
                    // Placeholder keeps the key's position for the rebuild.
                    attributes.insert(key.clone(), Value::Array(Vec::new()));
                    nested = Some(items);
                }
                _ => {
                    attributes.insert(key.clone(), field.clone());
                }
            }
        }

        let component = Component::from_attributes(attributes);
        if let Some(name) = component.name() {
            if self.index.insert(name.to_string(), id).is_some() {
                return Err(LayoutError::DuplicateComponentName(name.to_string()));
            }
        }
        self.nodes.push(Node {
            body: NodeBody::Component {
                component,
                children: None,
            },
            parent,
        });

        if let Some(items) = nested {
            let mut child_ids = Vec::with_capacity(items.len());
            for item in items {
                child_ids.push(self.insert(item, Some(id))?);
            }
            if let NodeBody::Component { children, .. } = &mut self.nodes[id].body {
                *children = Some(child_ids);
            }
        }
        Ok(id)
    }

    /// Number of named components.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn root(&self) -> Option<&Component> {
        self.component_at(0)
    }

    pub fn get(&self, name: &str) -> Option<&Component> {
        self.index.get(name).and_then(|id| self.component_at(*id))
    }

    /// Component names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components().filter_map(Component::name)
    }

    /// All reachable components in document order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.nodes.iter().filter_map(|node| match &node.body {
            NodeBody::Component { component, .. } => Some(component),
            NodeBody::Raw(_) => None,
        })
    }

    /// The logical parent: the component named by `parentId` when it resolves,
    /// the enclosing component in the tree otherwise.
    pub fn parent_of(&self, name: &str) -> Option<&Component> {
        let id = *self.index.get(name)?;
        let component = self.component_at(id)?;
        if let Some(parent) = component.parent_id().and_then(|p| self.get(p)) {
            return Some(parent);
        }
        self.nodes[id].parent.and_then(|p| self.component_at(p))
    }

    /// Logical children: nested components followed by components whose
    /// `parentId` names this one.
    pub fn children_of(&self, name: &str) -> Vec<&Component> {
        let Some(&id) = self.index.get(name) else {
            return Vec::new();
        };
        let nested = match &self.nodes[id].body {
            NodeBody::Component {
                children: Some(ids),
                ..
            } => ids.clone(),
            _ => Vec::new(),
        };
        let referencing = self.nodes.iter().enumerate().filter_map(|(i, node)| match &node.body {
            NodeBody::Component { component, .. } if component.parent_id() == Some(name) => Some(i),
            _ => None,
        });

        nested
            .into_iter()
            .chain(referencing)
            .unique()
            .filter_map(|i| self.component_at(i))
            .collect()
    }

    /// Writes `value` into `field` of the component called `element`.
    ///
    /// Writing `children` replaces the nested subtree with the raw value and
    /// drops the old descendants from the name index. Writing `name` re-keys
    /// the index; a rename onto a name another component already holds is
    /// refused and leaves the component untouched.
    pub fn set_field(&mut self, element: &str, field: &str, value: Value) -> FieldWrite {
        let Some(&id) = self.index.get(element) else {
            return FieldWrite::UnknownElement;
        };

        match field {
            "children" => {
                self.detach_descendants(id);
                if let NodeBody::Component {
                    component,
                    children,
                } = &mut self.nodes[id].body
                {
                    *children = None;
                    component.set_attribute(field, value);
                }
            }
            "name" => {
                let new_name = value.as_str().map(str::to_owned);
                if let Some(taken) = new_name.as_deref() {
                    if taken != element && self.index.contains_key(taken) {
                        return FieldWrite::NameCollision(taken.to_string());
                    }
                }
                if let NodeBody::Component { component, .. } = &mut self.nodes[id].body {
                    component.set_attribute(field, value);
                }
                self.index.remove(element);
                if let Some(new_name) = new_name {
                    self.index.insert(new_name, id);
                }
            }
            _ => {
                if let NodeBody::Component { component, .. } = &mut self.nodes[id].body {
                    component.set_attribute(field, value);
                }
            }
        }
        FieldWrite::Written
    }

    fn detach_descendants(&mut self, id: NodeId) {
        let child_ids = match &self.nodes[id].body {
            NodeBody::Component {
                children: Some(ids),
                ..
            } => ids.clone(),
            _ => return,
        };
        for child in child_ids {
            self.detach_descendants(child);
            let body = std::mem::replace(&mut self.nodes[child].body, NodeBody::Raw(Value::Null));
            if let NodeBody::Component { component, .. } = body {
                if let Some(name) = component.name() {
                    if self.index.get(name) == Some(&child) {
                        self.index.remove(name);
                    }
                }
            }
        }
    }

    fn component_at(&self, id: NodeId) -> Option<&Component> {
        match &self.nodes.get(id)?.body {
            NodeBody::Component { component, .. } => Some(component),
            NodeBody::Raw(_) => None,
        }
    }

    /// Rebuilds the nested tree without consuming the arena.
    pub fn to_tree(&self) -> Value {
        self.clone().into_tree()
    }

    /// Rebuilds the nested tree, moving every attribute out of the arena.
    pub fn into_tree(mut self) -> Value {
        if self.nodes.is_empty() {
            return Value::Null;
        }
        self.take(0)
    }

    fn take(&mut self, id: NodeId) -> Value {
        match std::mem::replace(&mut self.nodes[id].body, NodeBody::Raw(Value::Null)) {
            NodeBody::Raw(value) => value,
            NodeBody::Component {
                component,
                children,
            } => {
                let mut object = component.into_attributes();
                if let Some(ids) = children {
                    let nested = ids.into_iter().map(|child| self.take(child)).collect();
                    object.insert("children".to_string(), Value::Array(nested));
                }
                Value::Object(object)
            }
        }
    }
}
