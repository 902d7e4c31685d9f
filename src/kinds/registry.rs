//! Injective native-integer → named-kind table.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::error::{Error, Result};

/// A value type wrapping one native enumeration integer.
///
/// Equality, ordering and hashing must follow the integer alone.
pub trait NativeKind: Copy + Eq + Ord + Hash + Debug {
    /// Wrap `value` without consulting any registry.
    fn from_raw_value(value: i32) -> Self;

    fn raw_value(self) -> i32;
}

/// Words kept whole when normalizing, even though their case pattern would split them.
const COMPOUND_WORDS: &[&str] = &["ObjC"];

fn compound_word_at(chars: &[char], at: usize) -> Option<&'static str> {
    COMPOUND_WORDS.iter().copied().find(|word| {
        let len = word.chars().count();
        at + len <= chars.len()
            && chars[at..at + len].iter().copied().eq(word.chars())
            && chars.get(at + len).is_none_or(|c| !c.is_lowercase())
    })
}

/// Convert a mixed-case enumerator token into an upper-snake-case name.
///
/// An underscore goes before an uppercase character that is not first and
/// whose previous character is lowercase or whose next character is
/// lowercase, so acronym runs stay together: `CXXMethod` → `CXX_METHOD`.
/// Compound words such as `ObjC` are emitted as one word.
pub fn normalize_kind_name(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let mut name = String::with_capacity(token.len() + 4);
    let mut prev_lower = false;
    let mut after_compound = false;
    let mut i = 0;

    while i < chars.len() {
        if let Some(word) = compound_word_at(&chars, i) {
            if i != 0 {
                name.push('_');
            }
            name.push_str(&word.to_uppercase());
            i += word.chars().count();
            prev_lower = false;
            after_compound = true;
            continue;
        }

        let c = chars[i];
        if c.is_uppercase() {
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if i != 0 && (prev_lower || next_lower || after_compound) {
                name.push('_');
            }
            name.push(c);
            prev_lower = false;
        } else {
            name.extend(c.to_uppercase());
            prev_lower = c.is_lowercase();
        }
        after_compound = false;
        i += 1;
    }

    name
}

/// Maps native integers to kind values and kind values to display names.
///
/// Iteration follows registration order.
#[derive(Debug, Clone)]
pub struct KindRegistry<K: NativeKind> {
    kinds: IndexMap<i32, K>,
    names: FxHashMap<K, SmolStr>,
}

impl<K: NativeKind> Default for KindRegistry<K> {
    fn default() -> Self {
        Self {
            kinds: IndexMap::new(),
            names: FxHashMap::default(),
        }
    }
}

impl<K: NativeKind> KindRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `value` under the normalized form of `token`.
    ///
    /// Fails with [`Error::DuplicateKind`] if `value` is already present.
    pub fn register(&mut self, value: i32, token: &str) -> Result<K> {
        if let Some(existing) = self.kinds.get(&value) {
            let existing = self.names.get(existing).map(SmolStr::to_string).unwrap_or_default();
            return Err(Error::DuplicateKind { value, existing });
        }
        let kind = K::from_raw_value(value);
        self.kinds.insert(value, kind);
        self.names.insert(kind, SmolStr::new(normalize_kind_name(token)));
        Ok(kind)
    }

    /// Fails with [`Error::UnknownKind`] if `value` was never registered.
    pub fn lookup(&self, value: i32) -> Result<K> {
        self.kinds.get(&value).copied().ok_or(Error::UnknownKind(value))
    }

    pub fn name(&self, kind: K) -> Result<&str> {
        self.names
            .get(&kind)
            .map(SmolStr::as_str)
            .ok_or(Error::UnknownKind(kind.raw_value()))
    }

    pub fn contains(&self, value: i32) -> bool {
        self.kinds.contains_key(&value)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// All registered kinds with their names, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &str)> + '_ {
        self.kinds
            .values()
            .map(|kind| (*kind, self.names.get(kind).map_or("", SmolStr::as_str)))
    }
}
