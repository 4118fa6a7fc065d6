use crate::impls::assign_from_value;
use crate::info::TypeToken;
use crate::{Property, TypedProperty, Value};

macro_rules! impl_integer_property {
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

                fn from_value(value: Value) -> Result<Self, Value> {
                    match value.as_i64().and_then(|n| <$ty>::try_from(n).ok()) {
                        Some(n) => Ok(n),
                        None => Err(value),
                    }
                }
            }
        )*
    };
}

macro_rules! impl_float_property {
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

                fn from_value(value: Value) -> Result<Self, Value> {
                    match value.as_f64() {
                        Some(n) => Ok(n as $ty),
                        None => Err(value),
                    }
                }
            }
        )*
    };
}

impl_integer_property! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
}

impl_float_property! {
    f32 => Float,
    f64 => Double,
}

#[cfg(test)]
mod tests {
    use crate::{Property, TypedProperty, Value};

    #[test]
    fn integers_are_range_checked() {
        assert_eq!(i16::from_value(Value::Long(-300)), Ok(-300));
        assert_eq!(i8::from_value(Value::Short(128)), Err(Value::Short(128)));
        assert_eq!(i64::from_value(Value::Float(7.0)), Ok(7));
        assert_eq!(i32::from_value(Value::Double(7.5)), Err(Value::Double(7.5)));
    }

    #[test]
    fn floats_accept_any_number() {
        assert_eq!(f64::from_value(Value::Int(3)), Ok(3.0));
        assert_eq!(f32::from_value(Value::Double(0.5)), Ok(0.5));
        assert_eq!(f64::from_value(Value::Bool(true)), Err(Value::Bool(true)));
    }

    #[test]
    fn assign_keeps_old_value_on_mismatch() {
        let mut n = 5_i32;
        assert_eq!(n.assign(Value::from("7")), Err(Value::from("7")));
        assert_eq!(n, 5);
        n.assign(Value::Long(9)).unwrap();
        assert_eq!(n.to_value(), Value::Int(9));
    }
}
