use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::info::TypeToken;
use crate::{Dict, Record};

/// Format used to render and parse date-times.
pub(crate) const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Format used to render and parse dates.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// An owned value read from, or written into, a tree.
///
/// Leaves are numbers, booleans, text, dates, date-times and lists; nodes are
/// dictionaries and records. `Null` stands for an absent optional field or an
/// explicit null stored in a dictionary.
///
/// `Display` renders the canonical text that [`parse`](crate::parse) reads
/// back.
///
/// # Examples
///
/// ```
/// use dp_reflect::{TypeToken, Value};
///
/// let value = Value::from(42);
/// assert_eq!(value, Value::Int(42));
/// assert_eq!(value.type_token(), TypeToken::Int);
/// assert_eq!(value.to_string(), "42");
///
/// let list = Value::from(vec!["a", "b"]);
/// assert_eq!(list.to_string(), "a,b");
/// ```
#[derive(Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    List(Vec<Value>),
    Dict(Dict),
    Record(Box<dyn Record>),
}

impl Value {
    /// Boxes a record into a value.
    #[inline]
    pub fn record<T: Record>(record: T) -> Self {
        Value::Record(Box::new(record))
    }

    /// Returns the runtime type of the value.
    ///
    /// `Null` has no type of its own and reports [`TypeToken::Unknown`].
    pub fn type_token(&self) -> TypeToken {
        match self {
            Value::Null => TypeToken::Unknown,
            Value::Bool(_) => TypeToken::Bool,
            Value::Byte(_) => TypeToken::Byte,
            Value::Short(_) => TypeToken::Short,
            Value::Int(_) => TypeToken::Int,
            Value::Long(_) => TypeToken::Long,
            Value::Float(_) => TypeToken::Float,
            Value::Double(_) => TypeToken::Double,
            Value::Text(_) => TypeToken::Text,
            Value::Date(_) => TypeToken::Date,
            Value::DateTime(_) => TypeToken::DateTime,
            Value::List(_) => TypeToken::List,
            Value::Dict(_) => TypeToken::Dict,
            Value::Record(record) => TypeToken::Record(record.reflect_type_info()),
        }
    }

    /// Returns the name of the runtime type, `"null"` for `Null`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            other => other.type_token().name(),
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for dictionaries and records.
    #[inline]
    pub const fn is_node(&self) -> bool {
        matches!(self, Value::Dict(_) | Value::Record(_))
    }

    /// Returns the value as an `i64` if it is an integer, or a float with no
    /// fractional part that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            Value::Float(v) => integral(v as f64),
            Value::Double(v) => integral(v),
            _ => None,
        }
    }

    /// Returns any numeric value as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    #[inline]
    pub fn as_dict_mut(&mut self) -> Option<&mut Dict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    #[inline]
    pub fn as_record(&self) -> Option<&dyn Record> {
        match self {
            Value::Record(record) => Some(&**record),
            _ => None,
        }
    }

    #[inline]
    pub fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        match self {
            Value::Record(record) => Some(&mut **record),
            _ => None,
        }
    }

    /// Downcasts a record value to `T`.
    #[inline]
    pub fn downcast_record<T: Record>(&self) -> Option<&T> {
        self.as_record()?.downcast_ref::<T>()
    }
}

fn integral(v: f64) -> Option<i64> {
    // `i64::MAX as f64` rounds up to 2^63, which is out of range.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if v.is_finite() && v >= -LIMIT && v < LIMIT {
        let truncated = v as i64;
        if truncated as f64 == v {
            return Some(truncated);
        }
    }
    None
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from_leaf {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from_leaf! {
    bool => Bool,
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    String => Text,
    NaiveDate => Date,
    NaiveDateTime => DateTime,
    Dict => Dict,
    Box<dyn Record> => Record,
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::Text(value.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// -----------------------------------------------------------------------------
// Formatting

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::Byte(v) => f.debug_tuple("Byte").field(v).finish(),
            Value::Short(v) => f.debug_tuple("Short").field(v).finish(),
            Value::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Value::Long(v) => f.debug_tuple("Long").field(v).finish(),
            Value::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Value::Double(v) => f.debug_tuple("Double").field(v).finish(),
            Value::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Value::Date(v) => f.debug_tuple("Date").field(v).finish(),
            Value::DateTime(v) => f.debug_tuple("DateTime").field(v).finish(),
            Value::List(v) => f.debug_list().entries(v).finish(),
            Value::Dict(v) => fmt::Debug::fmt(v, f),
            Value::Record(v) => fmt::Debug::fmt(&**v, f),
        }
    }
}

/// Canonical rendering: base-10 numbers, lowercase booleans, ISO-8601
/// temporals, comma-joined lists.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(v) => fmt::Display::fmt(v, f),
            Value::Byte(v) => fmt::Display::fmt(v, f),
            Value::Short(v) => fmt::Display::fmt(v, f),
            Value::Int(v) => fmt::Display::fmt(v, f),
            Value::Long(v) => fmt::Display::fmt(v, f),
            Value::Float(v) => fmt::Display::fmt(v, f),
            Value::Double(v) => fmt::Display::fmt(v, f),
            Value::Text(v) => f.write_str(v),
            Value::Date(v) => fmt::Display::fmt(&v.format(DATE_FORMAT), f),
            Value::DateTime(v) => fmt::Display::fmt(&v.format(DATE_TIME_FORMAT), f),
            Value::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                Ok(())
            }
            Value::Dict(dict) => {
                f.write_str("{")?;
                for (index, (key, value)) in dict.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Record(record) => fmt::Debug::fmt(&**record, f),
        }
    }
}
