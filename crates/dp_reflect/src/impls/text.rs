use alloc::string::String;

use crate::impls::assign_from_value;
use crate::info::TypeToken;
use crate::{Property, TypedProperty, Value};

impl Property for String {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    #[inline]
    fn assign(&mut self, value: Value) -> Result<(), Value> {
        assign_from_value(self, value)
    }

    #[inline]
    fn runtime_type(&self) -> TypeToken {
        TypeToken::Text
    }
}

impl TypedProperty for String {
    #[inline]
    fn declared_type() -> TypeToken {
        TypeToken::Text
    }

    #[inline]
    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Text(text) => Ok(text),
            other => Err(other),
        }
    }
}

impl Property for bool {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    #[inline]
    fn assign(&mut self, value: Value) -> Result<(), Value> {
        assign_from_value(self, value)
    }

    #[inline]
    fn runtime_type(&self) -> TypeToken {
        TypeToken::Bool
    }
}

impl TypedProperty for bool {
    #[inline]
    fn declared_type() -> TypeToken {
        TypeToken::Bool
    }

    #[inline]
    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Bool(v) => Ok(v),
            other => Err(other),
        }
    }
}
