//! Static schema for project model nodes.
//!
//! Every model type declares its externally visible fields (tags) together
//! with the kind of node each field holds. The resolver and the completion
//! engine only ever look at a node through this schema, so adding a field to
//! the model means adding one entry to the type's field table and one arm to
//! its `child` lookup.
//!
//! # Example
//!
//! ```
//! use whatunga::model::project::Project;
//! use whatunga::model::schema::{children, NodeKind, NodeRef};
//!
//! let project = Project::new("demo", "1.0");
//! let fields = children(NodeRef::Object(&project));
//! assert_eq!(fields.get("hosts"), Some(&NodeKind::Collection));
//! assert_eq!(fields.get("name"), Some(&NodeKind::Scalar));
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// The three shapes a node in the project model can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A nested record with named children
    Object,
    /// An ordered list of objects
    Collection,
    /// A leaf value
    Scalar,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Object => write!(f, "object"),
            NodeKind::Collection => write!(f, "collection"),
            NodeKind::Scalar => write!(f, "scalar"),
        }
    }
}

/// A declared field: the tag it is addressed by and the kind of its value.
pub type Field = (&'static str, NodeKind);

/// A record type of the project model.
pub trait ModelObject: fmt::Debug {
    /// Declared fields of this type, in declaration order.
    fn fields(&self) -> &'static [Field];

    /// Returns the child stored under `tag`, or `None` if no such tag is declared.
    fn child(&self, tag: &str) -> Option<NodeRef<'_>>;

    /// The `Name` attribute named indices are matched against.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Serializes this object the same way it is persisted.
    fn to_json(&self) -> Value;
}

/// An ordered list of model objects.
pub trait ModelCollection: fmt::Debug {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` if `index >= len()`.
    fn element(&self, index: usize) -> Option<&dyn ModelObject>;

    /// Serializes the whole collection.
    fn to_json(&self) -> Value;

    /// Returns true if the collection has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> ModelCollection for Vec<T>
where
    T: ModelObject + Serialize,
{
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn element(&self, index: usize) -> Option<&dyn ModelObject> {
        self.get(index).map(|element| element as &dyn ModelObject)
    }

    fn to_json(&self) -> Value {
        json_value(self)
    }
}

/// Iterates over the elements of a collection in order.
pub fn elements<'a>(
    collection: &'a dyn ModelCollection,
) -> impl Iterator<Item = &'a dyn ModelObject> + 'a {
    (0..collection.len()).filter_map(move |index| collection.element(index))
}

/// A leaf value of the project model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar<'a> {
    String(&'a str),
    Bool(bool),
    Int(i64),
    /// A plain list of strings, such as JVM options
    List(&'a [String]),
}

impl Scalar<'_> {
    pub fn to_json(&self) -> Value {
        match self {
            Scalar::String(s) => Value::from(*s),
            Scalar::Bool(b) => Value::from(*b),
            Scalar::Int(i) => Value::from(*i),
            Scalar::List(items) => Value::from(items.to_vec()),
        }
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => write!(f, "{}", s),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

/// A borrowed view of a node somewhere in the project model.
///
/// Objects and collections compare by identity (the same node of the same
/// document), scalars compare by value. An object may share its address with
/// its first field, so object identity also requires the same schema.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Object(&'a dyn ModelObject),
    Collection(&'a dyn ModelCollection),
    Scalar(Scalar<'a>),
}

impl<'a> NodeRef<'a> {
    /// Returns the kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Object(_) => NodeKind::Object,
            NodeRef::Collection(_) => NodeKind::Collection,
            NodeRef::Scalar(_) => NodeKind::Scalar,
        }
    }

    /// Looks up a direct child by tag. Only objects have children.
    pub fn child(&self, tag: &str) -> Option<NodeRef<'a>> {
        match self {
            NodeRef::Object(object) => object.child(tag),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&'a dyn ModelObject> {
        match self {
            NodeRef::Object(object) => Some(*object),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&'a dyn ModelCollection> {
        match self {
            NodeRef::Collection(collection) => Some(*collection),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<Scalar<'a>> {
        match self {
            NodeRef::Scalar(scalar) => Some(*scalar),
            _ => None,
        }
    }

    /// Serializes the node as it would appear in the project file.
    pub fn to_json(&self) -> Value {
        match self {
            NodeRef::Object(object) => object.to_json(),
            NodeRef::Collection(collection) => collection.to_json(),
            NodeRef::Scalar(scalar) => scalar.to_json(),
        }
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NodeRef::Object(a), NodeRef::Object(b)) => {
                std::ptr::addr_eq(*a, *b) && a.fields() == b.fields()
            }
            (NodeRef::Collection(a), NodeRef::Collection(b)) => std::ptr::addr_eq(*a, *b),
            (NodeRef::Scalar(a), NodeRef::Scalar(b)) => a == b,
            _ => false,
        }
    }
}

/// Lists the externally addressable children of `node` and their kinds.
///
/// Objects report their declared schema; collections and scalars have no
/// tagged children. The map keeps declaration order, which carries no meaning;
/// sort the keys where a stable presentation order is needed.
pub fn children(node: NodeRef<'_>) -> IndexMap<&'static str, NodeKind> {
    match node {
        NodeRef::Object(object) => object.fields().iter().copied().collect(),
        NodeRef::Collection(_) | NodeRef::Scalar(_) => IndexMap::new(),
    }
}

/// Serializes a model value, logging instead of failing.
pub(crate) fn json_value<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|err| {
        log::warn!("Failed to serialize model value: {}", err);
        Value::Null
    })
}
