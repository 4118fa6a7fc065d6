use crate::info::TypeToken;
use crate::{Dict, Node, NodeMut, Property, Record, Value};

/// Something a path operation can start from.
///
/// Derived records, `dyn Record`, [`Dict`] and [`Value`] are roots. A
/// `Value::Null` root is rejected as invalid, any other non-node value is
/// accepted but has no properties.
pub trait Root {
    /// Returns the runtime type of the root.
    fn root_type(&self) -> TypeToken;

    /// Borrows the root as a node.
    fn root_node(&self) -> Option<Node<'_>>;

    /// Mutably borrows the root as a node.
    fn root_node_mut(&mut self) -> Option<NodeMut<'_>>;

    /// Returns `true` for a null root.
    #[inline]
    fn is_null_root(&self) -> bool {
        false
    }
}

impl Root for dyn Record {
    #[inline]
    fn root_type(&self) -> TypeToken {
        TypeToken::Record(self.reflect_type_info())
    }

    #[inline]
    fn root_node(&self) -> Option<Node<'_>> {
        Some(Node::Record(self))
    }

    #[inline]
    fn root_node_mut(&mut self) -> Option<NodeMut<'_>> {
        Some(NodeMut::Record(self))
    }
}

impl Root for Dict {
    #[inline]
    fn root_type(&self) -> TypeToken {
        TypeToken::Dict
    }

    #[inline]
    fn root_node(&self) -> Option<Node<'_>> {
        Some(Node::Dict(self))
    }

    #[inline]
    fn root_node_mut(&mut self) -> Option<NodeMut<'_>> {
        Some(NodeMut::Dict(self))
    }
}

impl Root for Value {
    #[inline]
    fn root_type(&self) -> TypeToken {
        self.type_token()
    }

    #[inline]
    fn root_node(&self) -> Option<Node<'_>> {
        Property::as_node(self)
    }

    #[inline]
    fn root_node_mut(&mut self) -> Option<NodeMut<'_>> {
        Property::as_node_mut(self)
    }

    #[inline]
    fn is_null_root(&self) -> bool {
        self.is_null()
    }
}
