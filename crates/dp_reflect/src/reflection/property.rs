use crate::info::TypeToken;
use crate::{Dict, Record, Value};

// -----------------------------------------------------------------------------
// Node

/// A borrowed node of a tree: something a path can step into.
#[derive(Clone, Copy)]
pub enum Node<'a> {
    Record(&'a dyn Record),
    Dict(&'a Dict),
}

/// A mutably borrowed node of a tree.
pub enum NodeMut<'a> {
    Record(&'a mut dyn Record),
    Dict(&'a mut Dict),
}

impl Node<'_> {
    /// Returns the runtime type of the node.
    pub fn type_token(&self) -> TypeToken {
        match self {
            Node::Record(record) => TypeToken::Record(record.reflect_type_info()),
            Node::Dict(_) => TypeToken::Dict,
        }
    }
}

impl NodeMut<'_> {
    /// Returns the runtime type of the node.
    pub fn type_token(&self) -> TypeToken {
        match self {
            NodeMut::Record(record) => TypeToken::Record(record.reflect_type_info()),
            NodeMut::Dict(_) => TypeToken::Dict,
        }
    }

    /// Reborrows as a shared node.
    pub fn as_node(&self) -> Node<'_> {
        match self {
            NodeMut::Record(record) => Node::Record(&**record),
            NodeMut::Dict(dict) => Node::Dict(dict),
        }
    }
}

// -----------------------------------------------------------------------------
// Property

/// A field type that can live behind a record property.
///
/// Implemented for the primitive leaves (`i8` .. `f64`, `bool`, `String`,
/// `NaiveDate`, `NaiveDateTime`), `Vec<T>`, `Option<T>`, [`Value`], [`Dict`]
/// and every derived record.
///
/// The trait is object safe; [`TypedProperty`] carries the static half.
pub trait Property: Send + Sync + 'static {
    /// Returns an owned copy of the current content.
    fn to_value(&self) -> Value;

    /// Replaces the content with `value`.
    ///
    /// On failure the untouched value is handed back.
    fn assign(&mut self, value: Value) -> Result<(), Value>;

    /// Returns the type of the current content.
    ///
    /// This is the declared type for every property except [`Value`], whose
    /// content decides.
    fn runtime_type(&self) -> TypeToken;

    /// Returns `true` if the property currently holds no value.
    #[inline]
    fn is_null(&self) -> bool {
        false
    }

    /// Borrows the content as a node, if it is a record or a dictionary.
    #[inline]
    fn as_node(&self) -> Option<Node<'_>> {
        None
    }

    /// Mutably borrows the content as a node, if it is a record or a dictionary.
    #[inline]
    fn as_node_mut(&mut self) -> Option<NodeMut<'_>> {
        None
    }
}

/// Static half of [`Property`]: the declared type and the conversion from a
/// [`Value`].
///
/// # Conversion rules
///
/// [`from_value`](TypedProperty::from_value) accepts a value when
///
/// - its variant matches the property type exactly;
/// - both are numeric, and the number fits: integers are range checked,
///   floats only convert into integers when integral;
/// - it is `Value::Null` and the property is an `Option<T>` or a [`Value`];
/// - it is a list and every element converts into the element type.
///
/// # Examples
///
/// ```
/// use dp_reflect::{TypedProperty, Value};
///
/// assert_eq!(i64::from_value(Value::Int(3)), Ok(3_i64));
/// assert_eq!(i8::from_value(Value::Int(300)), Err(Value::Int(300)));
/// assert_eq!(i32::from_value(Value::Double(2.0)), Ok(2));
/// assert_eq!(Option::<i32>::from_value(Value::Null), Ok(None));
/// assert!(String::from_value(Value::Bool(true)).is_err());
/// ```
pub trait TypedProperty: Property + Sized {
    /// Returns the declared type of a property of this Rust type.
    fn declared_type() -> TypeToken;

    /// Converts `value` into `Self`, handing it back on failure.
    fn from_value(value: Value) -> Result<Self, Value>;
}
