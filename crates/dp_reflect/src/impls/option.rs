use crate::impls::assign_from_value;
use crate::info::TypeToken;
use crate::{Node, NodeMut, Property, TypedProperty, Value};

/// `None` is the null of a record field.
impl<T: TypedProperty> Property for Option<T> {
    #[inline]
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, Property::to_value)
    }

    #[inline]
    fn assign(&mut self, value: Value) -> Result<(), Value> {
        assign_from_value(self, value)
    }

    #[inline]
    fn runtime_type(&self) -> TypeToken {
        T::declared_type()
    }

    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn as_node(&self) -> Option<Node<'_>> {
        self.as_ref().and_then(Property::as_node)
    }

    #[inline]
    fn as_node_mut(&mut self) -> Option<NodeMut<'_>> {
        self.as_mut().and_then(Property::as_node_mut)
    }
}

impl<T: TypedProperty> TypedProperty for Option<T> {
    #[inline]
    fn declared_type() -> TypeToken {
        T::declared_type()
    }

    #[inline]
    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}
