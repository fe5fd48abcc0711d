//! Identifier names.
//!
//! Grammar vocabulary lives in the shared [`SymbolTable`](crate::SymbolTable);
//! identifiers found while parsing are interned per tree instead, so a
//! long-lived parser does not accumulate every name it has ever seen.

use rustc_hash::FxHashMap;
use std::fmt;

/// Identifier interned in one tree's [`NameTable`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Name(u32);

impl Name {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

/// Spellings of the identifiers in one tree, dropped with it.
#[derive(Clone, Default)]
pub struct NameTable {
    names: Vec<Box<str>>,
    lookup: FxHashMap<Box<str>, Name>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text`, returning the existing name for a repeated spelling.
    ///
    /// # Panics
    /// Panics if the table exceeds `u32::MAX` names.
    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(&name) = self.lookup.get(text) {
            return name;
        }
        let raw = u32::try_from(self.names.len())
            .unwrap_or_else(|_| panic!("name table exceeded {} entries", u32::MAX));
        let name = Name(raw);
        self.names.push(text.into());
        self.lookup.insert(text.into(), name);
        name
    }

    pub fn get(&self, text: &str) -> Option<Name> {
        self.lookup.get(text).copied()
    }

    #[inline]
    pub fn text(&self, name: Name) -> &str {
        &self.names[name.index()]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Name, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(index, text)| (Name(u32::try_from(index).unwrap_or(u32::MAX)), &**text))
    }
}

impl fmt::Debug for NameTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names.iter()).finish()
    }
}
