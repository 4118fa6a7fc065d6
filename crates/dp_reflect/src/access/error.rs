use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::format;
use core::error::Error as CoreError;
use core::fmt;

use thiserror::Error;

use crate::info::TypeToken;

/// Result alias for path operations.
pub type DotPathResult<T> = Result<T, DotPathError>;

/// Boxed underlying error.
type Source = Box<dyn CoreError + Send + Sync + 'static>;

// -----------------------------------------------------------------------------
// ErrorKind

/// Category of a [`DotPathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A required input was missing or blank, or the path had an empty segment.
    Invalid,
    /// A null was reached while more segments remained.
    NullInPath,
    /// A dictionary had no entry for a key on a read.
    MissingKey,
    /// A record has no property of the requested name.
    NoSuchProperty,
    /// A value or root was not compatible with its destination.
    TypeMismatch,
    /// Text could not be parsed into the requested type.
    ParseFailed,
    /// A missing intermediate could not be built.
    ConstructionFailed,
    /// Reading an intermediate segment failed.
    AccessFailed,
}

impl ErrorKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "Invalid",
            Self::NullInPath => "NullInPath",
            Self::MissingKey => "MissingKey",
            Self::NoSuchProperty => "NoSuchProperty",
            Self::TypeMismatch => "TypeMismatch",
            Self::ParseFailed => "ParseFailed",
            Self::ConstructionFailed => "ConstructionFailed",
            Self::AccessFailed => "AccessFailed",
        }
    }
}

impl fmt::Display for ErrorKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// -----------------------------------------------------------------------------
// DotPathError

/// The single error type of every path operation.
///
/// It carries a [kind](ErrorKind), a human-readable message and, for errors
/// raised on behalf of another failure, the underlying cause.
///
/// # Examples
///
/// ```
/// use dp_reflect::{Dict, ErrorKind, Value};
///
/// let dict = Dict::new();
/// let err = dp_reflect::get(&dict, "missing").unwrap_err();
///
/// assert_eq!(err.kind(), ErrorKind::MissingKey);
/// assert_eq!(err.to_string(), "Key not found in map: missing");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DotPathError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    #[source]
    source: Option<Source>,
}

impl DotPathError {
    /// Creates an error without a cause.
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attaches an underlying cause.
    #[inline]
    pub fn with_source(mut self, source: impl Into<Source>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Re-raises `self` under a new message, keeping its kind and chaining
    /// `self` as the cause.
    #[inline]
    pub fn context(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: self.kind,
            message: message.into(),
            source: Some(Box::new(self)),
        }
    }

    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Walks the cause chain and returns the innermost message.
    pub fn root_message(&self) -> alloc::string::String {
        let mut current: &(dyn CoreError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        format!("{current}")
    }

    // -------------------------------------------------------------------------
    // Constructors

    pub(crate) fn null_argument(name: &str) -> Self {
        Self::new(ErrorKind::Invalid, format!("{name} cannot be null"))
    }

    pub(crate) fn empty_argument(name: &str) -> Self {
        Self::new(ErrorKind::Invalid, format!("{name} cannot be empty"))
    }

    pub(crate) fn empty_segment() -> Self {
        Self::new(ErrorKind::Invalid, "Path segment cannot be empty")
    }

    pub(crate) fn null_in_path(segment: &str) -> Self {
        Self::new(
            ErrorKind::NullInPath,
            format!("Null while traversing: {segment}"),
        )
    }

    pub(crate) fn missing_key(key: &str) -> Self {
        Self::new(ErrorKind::MissingKey, format!("Key not found in map: {key}"))
    }

    pub(crate) fn no_such_property(name: &str, owner: &TypeToken) -> Self {
        Self::new(
            ErrorKind::NoSuchProperty,
            format!("Property '{name}' not found in class {owner}"),
        )
    }

    pub(crate) fn value_mismatch(found: &str, expected: &TypeToken) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!(
                "Type mismatch: value type {found} is not compatible with field type {expected}"
            ),
        )
    }

    pub(crate) fn root_mismatch(source: &TypeToken, target: &TypeToken) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("Source type {source} and target type {target} are incompatible"),
        )
    }

    pub(crate) fn copy_mismatch(source: &TypeToken, target: &TypeToken) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("Type mismatch: cannot copy from {source} to {target}"),
        )
    }

    pub(crate) fn parse_failed(text: &str, target: &TypeToken) -> Self {
        Self::new(
            ErrorKind::ParseFailed,
            format!("Failed to convert value '{text}' to type {target}"),
        )
    }

    pub(crate) fn unsupported_type(target: &TypeToken) -> Self {
        Self::new(ErrorKind::ParseFailed, format!("Unsupported type: {target}"))
    }

    pub(crate) fn construction_failed(segment: &str, target: &TypeToken) -> Self {
        Self::new(
            ErrorKind::ConstructionFailed,
            format!("Cannot create a default {target} for '{segment}'"),
        )
    }

    pub(crate) fn access_failed(segment: &str) -> Self {
        Self::new(
            ErrorKind::AccessFailed,
            format!("Error traversing path segment: {segment}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::error::Error;

    use super::{DotPathError, ErrorKind};

    #[test]
    fn context_keeps_kind_and_chains() {
        let inner = DotPathError::missing_key("level");
        let outer = inner.context("Failed to copy property: level");

        assert_eq!(outer.kind(), ErrorKind::MissingKey);
        assert_eq!(outer.to_string(), "Failed to copy property: level");
        assert_eq!(
            outer.source().map(|e| e.to_string()).as_deref(),
            Some("Key not found in map: level")
        );
        assert_eq!(outer.root_message(), "Key not found in map: level");
    }

    #[test]
    fn kind_display() {
        assert_eq!(ErrorKind::NullInPath.to_string(), "NullInPath");
        assert_eq!(
            DotPathError::empty_argument("path").to_string(),
            "path cannot be empty"
        );
    }
}
