use crate::info::TypeToken;
use crate::{Dict, Node, NodeMut, Property, TypedProperty, Value};

/// A `Value` field is declared `Unknown` and accepts anything.
impl Property for Value {
    #[inline]
    fn to_value(&self) -> Value {
        self.clone()
    }

    #[inline]
    fn assign(&mut self, value: Value) -> Result<(), Value> {
        *self = value;
        Ok(())
    }

    #[inline]
    fn runtime_type(&self) -> TypeToken {
        self.type_token()
    }

    #[inline]
    fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn as_node(&self) -> Option<Node<'_>> {
        match self {
            Value::Record(record) => Some(Node::Record(&**record)),
            Value::Dict(dict) => Some(Node::Dict(dict)),
            _ => None,
        }
    }

    fn as_node_mut(&mut self) -> Option<NodeMut<'_>> {
        match self {
            Value::Record(record) => Some(NodeMut::Record(&mut **record)),
            Value::Dict(dict) => Some(NodeMut::Dict(dict)),
            _ => None,
        }
    }
}

impl TypedProperty for Value {
    #[inline]
    fn declared_type() -> TypeToken {
        TypeToken::Unknown
    }

    #[inline]
    fn from_value(value: Value) -> Result<Self, Value> {
        Ok(value)
    }
}

impl Property for Dict {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Dict(self.clone())
    }

    #[inline]
    fn assign(&mut self, value: Value) -> Result<(), Value> {
        *self = Self::from_value(value)?;
        Ok(())
    }

    #[inline]
    fn runtime_type(&self) -> TypeToken {
        TypeToken::Dict
    }

    #[inline]
    fn as_node(&self) -> Option<Node<'_>> {
        Some(Node::Dict(self))
    }

    #[inline]
    fn as_node_mut(&mut self) -> Option<NodeMut<'_>> {
        Some(NodeMut::Dict(self))
    }
}

impl TypedProperty for Dict {
    #[inline]
    fn declared_type() -> TypeToken {
        TypeToken::Dict
    }

    #[inline]
    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Dict(dict) => Ok(dict),
            other => Err(other),
        }
    }
}
