use alloc::vec::Vec;

use crate::impls::assign_from_value;
use crate::info::TypeToken;
use crate::{Property, TypedProperty, Value};

impl<T: TypedProperty> Property for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Property::to_value).collect())
    }

    #[inline]
    fn assign(&mut self, value: Value) -> Result<(), Value> {
        assign_from_value(self, value)
    }

    #[inline]
    fn runtime_type(&self) -> TypeToken {
        <Self as TypedProperty>::declared_type()
    }
}

/// `Vec<String>` is a text list, any other element type a generic list.
impl<T: TypedProperty> TypedProperty for Vec<T> {
    fn declared_type() -> TypeToken {
        match T::declared_type() {
            TypeToken::Text => TypeToken::TextList,
            _ => TypeToken::List,
        }
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        let Value::List(items) = value else {
            return Err(value);
        };

        let mut out = Vec::with_capacity(items.len());
        let mut rest = items.into_iter();
        while let Some(item) = rest.next() {
            match T::from_value(item) {
                Ok(converted) => out.push(converted),
                Err(item) => {
                    let mut restored: Vec<Value> = out.iter().map(Property::to_value).collect();
                    restored.push(item);
                    restored.extend(rest);
                    return Err(Value::List(restored));
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::info::TypeToken;
    use crate::{TypedProperty, Value};

    #[test]
    fn declared_types() {
        assert_eq!(Vec::<String>::declared_type(), TypeToken::TextList);
        assert_eq!(Vec::<Value>::declared_type(), TypeToken::List);
        assert_eq!(Vec::<i32>::declared_type(), TypeToken::List);
    }

    #[test]
    fn converts_every_element() {
        let value = Value::from(vec![1_i32, 2, 3]);
        assert_eq!(Vec::<i64>::from_value(value), Ok(vec![1_i64, 2, 3]));

        let mixed = Value::List(vec![Value::from("a"), Value::Int(1)]);
        assert_eq!(Vec::<String>::from_value(mixed.clone()), Err(mixed));
    }
}
