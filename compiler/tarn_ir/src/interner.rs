//! String interner for identifiers and string literals.
//!
//! Provides O(1) interning and lookup behind a single `RwLock`. Interned
//! strings are leaked so lookups can hand out `&'static str` without holding
//! the lock; a session interns each distinct spelling once.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

struct InternTable {
    map: FxHashMap<&'static str, u32>,
    /// Indexed by `Name`; slot 0 is the empty string.
    strings: Vec<&'static str>,
}

impl InternTable {
    fn with_empty() -> Self {
        let mut map = FxHashMap::default();
        map.insert("", 0);
        InternTable {
            map,
            strings: vec![""],
        }
    }

    fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).copied().map(Name::from_raw)
    }
}

/// The interner already holds `u32::MAX` distinct strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InternError;

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "more than {} distinct names in one session", u32::MAX)
    }
}

impl std::error::Error for InternError {}

/// String interner with interior mutability.
///
/// Interning takes `&self`, so one interner can be shared by the lexer,
/// parser, and interpreter of a session at the same time.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner containing only the empty string.
    pub fn new() -> Self {
        StringInterner {
            table: RwLock::new(InternTable::with_empty()),
        }
    }

    /// Intern `s`, failing only when the table is full.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        if let Some(name) = self.table.read().get(s) {
            return Ok(name);
        }

        let mut table = self.table.write();
        // Another thread may have added it between the two locks.
        if let Some(name) = table.get(s) {
            return Ok(name);
        }

        let index = u32::try_from(table.strings.len()).map_err(|_| InternError)?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        table.strings.push(leaked);
        table.map.insert(leaked, index);
        Ok(Name::from_raw(index))
    }

    /// # Panics
    /// Panics once the table is full; see [`try_intern`](Self::try_intern).
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the string for a Name.
    ///
    /// Names from a different interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table
            .read()
            .strings
            .get(name.index())
            .copied()
            .unwrap_or("")
    }

    /// Get the number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Check if the interner holds nothing but the empty string.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe shared interner handle.
#[derive(Clone, Default)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a new shared interner.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
