//! Provide the parsed, reusable [`PropertyPath`].

use alloc::boxed::Box;
use core::fmt;
use core::str::FromStr;

use crate::access::{DotPathError, DotPathResult, validate};

/// Segment separator.
pub const SEPARATOR: char = '.';

/// A lexed dot path: a non-empty sequence of non-blank property names.
///
/// Parsing splits on every `.` without collapsing or trimming, so `a..b`,
/// `.a` and `a.` are all rejected. Parse once and reuse the path for any
/// number of operations.
///
/// # Examples
///
/// ```
/// use dp_reflect::{Dict, PropertyPath, Value};
///
/// let path = PropertyPath::parse("stats.level").unwrap();
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.last(), "level");
///
/// let mut a = Dict::new();
/// let mut b = Dict::new();
/// path.set(&mut a, 1).unwrap();
/// path.set(&mut b, 2).unwrap();
/// assert_eq!(path.get(&a).unwrap(), Value::Int(1));
/// assert_eq!(path.get(&b).unwrap(), Value::Int(2));
///
/// assert!(PropertyPath::parse("stats..level").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyPath(Box<[Box<str>]>);

impl PropertyPath {
    /// Splits `path` into segments.
    ///
    /// Fails with [`ErrorKind::Invalid`](crate::ErrorKind::Invalid) if the
    /// path is blank or any segment is blank.
    pub fn parse(path: &str) -> DotPathResult<Self> {
        validate::require(Some(path), "path")?;

        let segments = path
            .split(SEPARATOR)
            .map(|segment| {
                validate::require_segment(segment)?;
                Ok(Box::from(segment))
            })
            .collect::<DotPathResult<Box<[Box<str>]>>>()?;

        Ok(Self(segments))
    }

    /// Returns the number of segments, at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the segments in order.
    #[inline]
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.0.iter().map(|segment| &**segment)
    }

    /// Returns the final segment, the one read or written.
    #[inline]
    pub fn last(&self) -> &str {
        self.split_last().1
    }

    /// Splits into the segments walked through and the final one.
    #[inline]
    pub(crate) fn split_last(&self) -> (&[Box<str>], &str) {
        match self.0.split_last() {
            Some((last, intermediates)) => (intermediates, last),
            None => (&[], ""),
        }
    }
}

impl FromStr for PropertyPath {
    type Err = DotPathError;

    #[inline]
    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Self::parse(path)
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::PropertyPath;
    use crate::ErrorKind;

    #[test]
    fn splits_on_every_separator() {
        let path = PropertyPath::parse("a.b.c").unwrap();
        assert_eq!(path.segments().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(path.to_string(), "a.b.c");

        let single: PropertyPath = "count".parse().unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single.last(), "count");
    }

    #[test]
    fn segments_are_not_trimmed() {
        let path = PropertyPath::parse(" a.b ").unwrap();
        assert_eq!(path.segments().collect::<Vec<_>>(), [" a", "b "]);
    }

    #[test]
    fn rejects_blank_input_and_empty_segments() {
        for bad in ["", "   ", "a..b", ".a", "a.", "a. .b"] {
            let err = PropertyPath::parse(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Invalid, "{bad:?}");
        }
        assert_eq!(
            PropertyPath::parse("a..b").unwrap_err().to_string(),
            "Path segment cannot be empty"
        );
        assert_eq!(
            PropertyPath::parse(" ").unwrap_err().to_string(),
            "path cannot be empty"
        );
    }
}
