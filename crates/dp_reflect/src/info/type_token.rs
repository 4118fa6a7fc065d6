use core::fmt;

use crate::info::RecordInfo;

/// A value's type, as far as path access needs to know it.
///
/// Tokens are produced two ways: statically, as the declared type of a
/// record field ([`TypedProperty::declared_type`]), and at runtime, from the
/// variant of a [`Value`] ([`Value::type_token`]).
///
/// # Examples
///
/// ```
/// use dp_reflect::{TypeToken, Value};
///
/// assert_eq!(Value::Int(3).type_token(), TypeToken::Int);
/// assert!(TypeToken::Long.is_numeric());
/// assert!(TypeToken::Unknown.is_assignable_from(&TypeToken::Text));
/// assert!(!TypeToken::Text.is_assignable_from(&TypeToken::Int));
/// ```
///
/// [`TypedProperty::declared_type`]: crate::TypedProperty::declared_type
/// [`Value`]: crate::Value
/// [`Value::type_token`]: crate::Value::type_token
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeToken {
    /// `i8`
    Byte,
    /// `i16`
    Short,
    /// `i32`
    Int,
    /// `i64`
    Long,
    /// `f32`
    Float,
    /// `f64`
    Double,
    /// `bool`
    Bool,
    /// `String`
    Text,
    /// `chrono::NaiveDate`
    Date,
    /// `chrono::NaiveDateTime`
    DateTime,
    /// A sequence whose elements are text, e.g. `Vec<String>`.
    TextList,
    /// A sequence of arbitrary values, e.g. `Vec<Value>`.
    List,
    /// [`Dict`](crate::Dict)
    Dict,
    /// A record type, identified by its descriptor.
    Record(&'static RecordInfo),
    /// Nothing is known statically; the field or slot holds a [`Value`](crate::Value).
    Unknown,
}

impl TypeToken {
    /// Returns `true` for the six numeric tokens.
    #[inline]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Byte | Self::Short | Self::Int | Self::Long | Self::Float | Self::Double
        )
    }

    /// Returns `true` for `Byte`, `Short`, `Int` and `Long`.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Byte | Self::Short | Self::Int | Self::Long)
    }

    /// Returns the descriptor of a record token.
    #[inline]
    pub const fn as_record(&self) -> Option<&'static RecordInfo> {
        match self {
            Self::Record(info) => Some(*info),
            _ => None,
        }
    }

    /// Directional supertype check: can a slot of type `self` hold a value of
    /// type `source` without conversion?
    ///
    /// This holds when the tokens are equal, when `self` is `Unknown`, or
    /// when a generic list receives a text list.
    pub fn is_assignable_from(&self, source: &TypeToken) -> bool {
        self == source
            || matches!(self, Self::Unknown)
            || matches!((self, source), (Self::List, Self::TextList))
    }

    /// Returns a short, human-readable name for messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Byte => "i8",
            Self::Short => "i16",
            Self::Int => "i32",
            Self::Long => "i64",
            Self::Float => "f32",
            Self::Double => "f64",
            Self::Bool => "bool",
            Self::Text => "String",
            Self::Date => "NaiveDate",
            Self::DateTime => "NaiveDateTime",
            Self::TextList => "Vec<String>",
            Self::List => "Vec<Value>",
            Self::Dict => "Dict",
            Self::Record(info) => info.type_path(),
            Self::Unknown => "Value",
        }
    }
}

impl fmt::Display for TypeToken {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Record(info) => {
                return f.debug_tuple("Record").field(&info.type_path()).finish();
            }
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Bool => "Bool",
            Self::Text => "Text",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::TextList => "TextList",
            Self::List => "List",
            Self::Dict => "Dict",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Directional compatibility between a source and a target type.
///
/// - an `Unknown` target accepts anything, and an `Unknown` source is
///   accepted by any target;
/// - any numeric source is compatible with any numeric target;
/// - otherwise the target must be [assignable from](TypeToken::is_assignable_from)
///   the source.
///
/// # Examples
///
/// ```
/// use dp_reflect::{TypeToken, compatible};
///
/// assert!(compatible(&TypeToken::Int, &TypeToken::Double));
/// assert!(compatible(&TypeToken::Text, &TypeToken::Unknown));
/// assert!(!compatible(&TypeToken::Bool, &TypeToken::Int));
/// ```
pub fn compatible(source: &TypeToken, target: &TypeToken) -> bool {
    if matches!(target, TypeToken::Unknown) || matches!(source, TypeToken::Unknown) {
        return true;
    }
    if source.is_numeric() && target.is_numeric() {
        return true;
    }
    target.is_assignable_from(source)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{TypeToken, compatible};

    const NUMERIC: [TypeToken; 6] = [
        TypeToken::Byte,
        TypeToken::Short,
        TypeToken::Int,
        TypeToken::Long,
        TypeToken::Float,
        TypeToken::Double,
    ];

    #[test]
    fn numeric_family_is_mutually_compatible() {
        for source in &NUMERIC {
            for target in &NUMERIC {
                assert!(compatible(source, target), "{source} -> {target}");
            }
        }
    }

    #[test]
    fn unknown_accepts_and_is_accepted() {
        for token in NUMERIC.iter().chain(&[TypeToken::Bool, TypeToken::Text, TypeToken::Dict]) {
            assert!(compatible(token, &TypeToken::Unknown));
            assert!(compatible(&TypeToken::Unknown, token));
        }
    }

    #[test]
    fn bool_and_text_only_match_themselves() {
        assert!(compatible(&TypeToken::Bool, &TypeToken::Bool));
        assert!(compatible(&TypeToken::Text, &TypeToken::Text));
        assert!(!compatible(&TypeToken::Bool, &TypeToken::Text));
        assert!(!compatible(&TypeToken::Text, &TypeToken::Int));
        assert!(!compatible(&TypeToken::Int, &TypeToken::Bool));
    }

    #[test]
    fn lists_are_directional() {
        assert!(compatible(&TypeToken::TextList, &TypeToken::List));
        assert!(!compatible(&TypeToken::List, &TypeToken::TextList));
    }

    #[test]
    fn names() {
        assert_eq!(TypeToken::Int.name(), "i32");
        assert_eq!(TypeToken::Unknown.to_string(), "Value");
        assert_eq!(TypeToken::TextList.to_string(), "Vec<String>");
    }
}
