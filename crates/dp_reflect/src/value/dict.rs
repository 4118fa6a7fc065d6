use alloc::string::String;
use core::fmt;
use core::hash::BuildHasher;
use core::ops::{Deref, DerefMut};

use foldhash::fast::{FixedState, FoldHasher};
use hashbrown::HashMap;

use crate::Value;

// -----------------------------------------------------------------------------
// FixedHashState

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x95EE04C4F326B271);

/// Hash state with a fixed seed, so that iteration order only depends on
/// the inserted keys.
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FoldHasher<'static>;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// Dict

/// An open, string-keyed mapping of [`Value`]s.
///
/// Dictionaries are the schema-less nodes of a tree: any key may be read or
/// written, and writing through a missing key creates nested dictionaries.
///
/// The map API of [`hashbrown::HashMap`] is available through `Deref`.
///
/// # Examples
///
/// ```
/// use dp_reflect::{Dict, Value};
///
/// let mut dict = Dict::from([("level", Value::Int(5))]);
/// dict.insert("name".into(), Value::from("cave"));
///
/// assert_eq!(dict.get("level"), Some(&Value::Int(5)));
/// assert_eq!(dict.len(), 2);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Dict(HashMap<String, Value, FixedHashState>);

impl Dict {
    /// Creates an empty dictionary.
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(FixedHashState))
    }

    /// Unwraps the inner map.
    #[inline]
    pub fn into_inner(self) -> HashMap<String, Value, FixedHashState> {
        self.0
    }
}

impl Deref for Dict {
    type Target = HashMap<String, Value, FixedHashState>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Dict {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Debug for Dict {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Dict::new();
        dict.extend(iter);
        dict
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Dict {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.0.insert(key.into(), value.into());
        }
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Dict {
    #[inline]
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Dict {
    type Item = (String, Value);
    type IntoIter = hashbrown::hash_map::IntoIter<String, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use core::hash::{BuildHasher, Hash, Hasher};

    use super::{Dict, FixedHashState};
    use crate::Value;

    #[test]
    fn fixed_state_is_stable() {
        let hash = |text: &str| {
            let mut hasher = FixedHashState.build_hasher();
            text.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash("level"), hash("level"));
        assert_ne!(hash("level"), hash("name"));
    }

    #[test]
    fn collect_and_compare() {
        let a: Dict = [("x", 1), ("y", 2)].into_iter().collect();
        let b = Dict::from([("y", Value::Int(2)), ("x", Value::Int(1))]);
        assert_eq!(a, b);
        assert_ne!(a, Dict::new());
    }
}
