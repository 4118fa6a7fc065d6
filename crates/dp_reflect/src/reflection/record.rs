use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use crate::info::RecordInfo;
use crate::{Property, Value};

// -----------------------------------------------------------------------------
// Typed

/// Static access to a record type's descriptor.
///
/// Implemented by `#[derive(Record)]`; the descriptor lives in a `static`.
pub trait Typed: Record + Sized {
    /// Returns the descriptor of `Self`.
    fn type_info() -> &'static RecordInfo;
}

// -----------------------------------------------------------------------------
// Record

/// A struct with a fixed set of named, typed properties.
///
/// This is the introspection surface path access works against. It is
/// object safe, implemented by `#[derive(Record)]`, and all operations go
/// through `&dyn Record` / `&mut dyn Record`.
///
/// # Name resolution
///
/// A property is read through its reader method when one is declared with
/// `#[record(getter)]` (`get_` followed by the field name), otherwise the
/// field is read directly. Writes work the same
/// way with `#[record(setter)]` and `set_`. [`property`] and
/// [`property_mut`] always borrow the field itself; traversal uses them to
/// step into nested nodes.
///
/// # Examples
///
/// ```
/// use dp_reflect::{Record, Value, derive::Record};
///
/// #[derive(Record, Clone)]
/// struct Point { x: i32, y: i32 }
///
/// let mut point = Point { x: 1, y: 2 };
/// let record: &mut dyn Record = &mut point;
///
/// assert_eq!(record.read_property("x"), Some(Value::Int(1)));
/// assert!(record.read_property("z").is_none());
///
/// record.write_property("y", Value::Int(7)).unwrap().unwrap();
/// assert_eq!(point.y, 7);
/// ```
///
/// [`property`]: Record::property
/// [`property_mut`]: Record::property_mut
pub trait Record: Any + Send + Sync {
    /// Returns the descriptor of the underlying type.
    fn reflect_type_info(&self) -> &'static RecordInfo;

    /// Borrows the field behind property `name`.
    fn property(&self, name: &str) -> Option<&dyn Property>;

    /// Mutably borrows the field behind property `name`.
    fn property_mut(&mut self, name: &str) -> Option<&mut dyn Property>;

    /// Reads property `name`, through its reader method if one is declared.
    ///
    /// Returns `None` if there is no such property.
    fn read_property(&self, name: &str) -> Option<Value> {
        self.property(name).map(|property| property.to_value())
    }

    /// Writes property `name`, through its writer method if one is declared.
    ///
    /// Returns `None` if there is no such property and `Some(Err(value))`
    /// if `value` does not convert into the property's type.
    fn write_property(&mut self, name: &str, value: Value) -> Option<Result<(), Value>> {
        self.property_mut(name).map(|property| property.assign(value))
    }

    /// Clones the record into a new box.
    fn clone_record(&self) -> Box<dyn Record>;
}

impl dyn Record {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Record>(&self) -> bool {
        <dyn Any>::is::<T>(self)
    }

    /// Downcasts the record to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Record>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the record to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Record>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the record to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn downcast<T: Record>(self: Box<dyn Record>) -> Result<Box<T>, Box<dyn Record>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { <Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Downcasts the record to type `T`, unboxing and consuming the trait object.
    ///
    /// # Examples
    ///
    /// ```
    /// use dp_reflect::{Record, derive::Record};
    ///
    /// #[derive(Record, Clone)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let boxed: Box<dyn Record> = Box::new(Point { x: 3, y: 4 });
    /// let point = boxed.take::<Point>().unwrap();
    /// assert_eq!(point.x, 3);
    /// ```
    #[inline]
    pub fn take<T: Record>(self: Box<dyn Record>) -> Result<T, Box<dyn Record>> {
        self.downcast::<T>().map(|boxed| *boxed)
    }
}

impl Clone for Box<dyn Record> {
    #[inline]
    fn clone(&self) -> Self {
        self.clone_record()
    }
}

impl fmt::Debug for dyn Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.reflect_type_info();
        let mut debug = f.debug_struct(info.type_name());
        for field in info.fields() {
            if let Some(value) = self.read_property(field.name()) {
                debug.field(field.name(), &value);
            }
        }
        debug.finish()
    }
}

/// Two records are equal when they have the same type and every property
/// reads the same value.
impl PartialEq for dyn Record {
    fn eq(&self, other: &Self) -> bool {
        let info = self.reflect_type_info();
        info == other.reflect_type_info()
            && info.fields().iter().all(|field| {
                self.read_property(field.name()) == other.read_property(field.name())
            })
    }
}
