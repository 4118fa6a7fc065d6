use chrono::{NaiveDate, NaiveDateTime};

use crate::impls::assign_from_value;
use crate::info::TypeToken;
use crate::{Property, TypedProperty, Value};

macro_rules! impl_temporal_property {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Property for $ty {
                #[inline]
                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }

                #[inline]
                fn assign(&mut self, value: Value) -> Result<(), Value> {
                    assign_from_value(self, value)
                }

                #[inline]
                fn runtime_type(&self) -> TypeToken {
                    TypeToken::$variant
                }
            }

            impl TypedProperty for $ty {
                #[inline]
                fn declared_type() -> TypeToken {
                    TypeToken::$variant
                }

                #[inline]
                fn from_value(value: Value) -> Result<Self, Value> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

impl_temporal_property! {
    NaiveDate => Date,
    NaiveDateTime => DateTime,
}
