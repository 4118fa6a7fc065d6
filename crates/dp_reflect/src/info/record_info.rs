use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::Record;
use crate::info::TypeToken;

// -----------------------------------------------------------------------------
// FieldInfo

/// How a property is read or written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldAccess {
    /// Direct field access.
    Direct,
    /// Through an accessor method with this name, e.g. `get_count`.
    Method(&'static str),
}

/// Static description of one property of a record.
///
/// # Examples
///
/// ```
/// use dp_reflect::{TypeToken, Typed, derive::Record, info::FieldAccess};
///
/// #[derive(Record, Clone)]
/// struct Foo {
///     #[record(getter)]
///     count: i32,
///     label: String,
/// }
///
/// impl Foo {
///     fn get_count(&self) -> i32 { self.count }
/// }
///
/// let info = Foo::type_info();
/// let count = info.field("count").unwrap();
/// assert_eq!(count.declared_type(), TypeToken::Int);
/// assert_eq!(count.reader(), FieldAccess::Method("get_count"));
/// assert_eq!(info.field("label").unwrap().reader(), FieldAccess::Direct);
/// ```
#[derive(Clone, Copy)]
pub struct FieldInfo {
    name: &'static str,
    // Delayed so that self-referencing records can build their statics.
    declared_type: fn() -> TypeToken,
    reader: FieldAccess,
    writer: FieldAccess,
}

impl FieldInfo {
    /// Creates a directly accessed field.
    #[inline]
    pub const fn new(name: &'static str, declared_type: fn() -> TypeToken) -> Self {
        Self {
            name,
            declared_type,
            reader: FieldAccess::Direct,
            writer: FieldAccess::Direct,
        }
    }

    /// Declares the reader method.
    #[inline]
    pub const fn with_reader(mut self, method: &'static str) -> Self {
        self.reader = FieldAccess::Method(method);
        self
    }

    /// Declares the writer method.
    #[inline]
    pub const fn with_writer(mut self, method: &'static str) -> Self {
        self.writer = FieldAccess::Method(method);
        self
    }

    /// Returns the property name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared type of the property.
    #[inline]
    pub fn declared_type(&self) -> TypeToken {
        (self.declared_type)()
    }

    #[inline]
    pub const fn reader(&self) -> FieldAccess {
        self.reader
    }

    #[inline]
    pub const fn writer(&self) -> FieldAccess {
        self.writer
    }
}

impl fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("declared_type", &self.declared_type())
            .field("reader", &self.reader)
            .field("writer", &self.writer)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// RecordInfo

/// Static schema of a record type: its identity, its properties and how to
/// build a fresh instance.
///
/// Descriptors are `static` items generated by `#[derive(Record)]` and
/// compare equal exactly when they describe the same Rust type.
///
/// # Examples
///
/// ```
/// use dp_reflect::{Typed, derive::Record};
///
/// #[derive(Record, Clone, Default)]
/// #[record(default)]
/// struct Point { x: i32, y: i32 }
///
/// #[derive(Record, Clone)]
/// struct Opaque { id: i64 }
///
/// let info = Point::type_info();
/// assert_eq!(info.type_name(), "Point");
/// assert_eq!(info.field_len(), 2);
/// assert!(info.type_is::<Point>());
/// assert!(info.construct().is_some());
///
/// assert!(Opaque::type_info().construct().is_none());
/// ```
pub struct RecordInfo {
    type_path: &'static str,
    type_name: &'static str,
    type_id: TypeId,
    fields: &'static [FieldInfo],
    constructor: Option<fn() -> Box<dyn Record>>,
}

impl RecordInfo {
    /// Creates a descriptor for `T` without a constructor.
    #[inline]
    pub const fn new<T: Any>(
        type_path: &'static str,
        type_name: &'static str,
        fields: &'static [FieldInfo],
    ) -> Self {
        Self {
            type_path,
            type_name,
            type_id: TypeId::of::<T>(),
            fields,
            constructor: None,
        }
    }

    /// Registers the no-argument constructor used to autovivify null fields
    /// of this type.
    #[inline]
    pub const fn with_constructor(mut self, constructor: fn() -> Box<dyn Record>) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Returns the full path, e.g. `my_crate::model::State`.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the bare type name, e.g. `State`.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.type_id
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Returns all properties in declaration order.
    #[inline]
    pub const fn fields(&self) -> &'static [FieldInfo] {
        self.fields
    }

    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the property called `name`.
    pub fn field(&self, name: &str) -> Option<&'static FieldInfo> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns `true` if instances can be built without arguments.
    #[inline]
    pub const fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    /// Builds a fresh instance, if a constructor is registered.
    #[inline]
    pub fn construct(&self) -> Option<Box<dyn Record>> {
        self.constructor.map(|constructor| constructor())
    }
}

impl PartialEq for RecordInfo {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for RecordInfo {}

impl Hash for RecordInfo {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for RecordInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordInfo")
            .field("type_path", &self.type_path)
            .field("fields", &self.fields)
            .field("has_constructor", &self.has_constructor())
            .finish()
    }
}
