//! Input checks shared by every operation.

use crate::Root;
use crate::access::{DotPathError, DotPathResult};

/// Requires a present, non-blank text argument called `name`.
pub fn require<'a>(value: Option<&'a str>, name: &str) -> DotPathResult<&'a str> {
    match value {
        None => Err(DotPathError::null_argument(name)),
        Some(text) if text.trim().is_empty() => Err(DotPathError::empty_argument(name)),
        Some(text) => Ok(text),
    }
}

/// Requires a non-null root called `name`.
pub fn require_root<R: Root + ?Sized>(root: &R, name: &str) -> DotPathResult<()> {
    if root.is_null_root() {
        Err(DotPathError::null_argument(name))
    } else {
        Ok(())
    }
}

/// Requires a non-blank path segment.
pub fn require_segment(segment: &str) -> DotPathResult<()> {
    if segment.trim().is_empty() {
        Err(DotPathError::empty_segment())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{require, require_root, require_segment};
    use crate::{Dict, ErrorKind, Value};

    #[test]
    fn text_arguments() {
        assert_eq!(require(Some("a"), "path").unwrap(), "a");
        assert_eq!(
            require(None, "value").unwrap_err().to_string(),
            "value cannot be null"
        );
        assert_eq!(
            require(Some(" \t"), "value").unwrap_err().to_string(),
            "value cannot be empty"
        );
    }

    #[test]
    fn roots() {
        assert!(require_root(&Dict::new(), "root").is_ok());
        assert!(require_root(&Value::Int(1), "root").is_ok());
        let err = require_root(&Value::Null, "source").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Invalid);
        assert_eq!(err.to_string(), "source cannot be null");
    }

    #[test]
    fn segments() {
        assert!(require_segment("x").is_ok());
        assert_eq!(require_segment(" ").unwrap_err().kind(), ErrorKind::Invalid);
    }
}
