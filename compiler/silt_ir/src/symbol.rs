//! Interned token kinds.
//!
//! A [`Symbol`] is a dense 32-bit handle into a [`SymbolTable`]. Two symbols
//! are equal exactly when their names are equal, so grammar dispatch is a
//! plain integer comparison. Names starting with `#` are abstract kinds that
//! can never be spelled in source; everything else is a punctuator or keyword
//! spelling.

// Arc is needed for SharedSymbols: one table is shared by the lexer config,
// the parser definition and every translation unit it produces.
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// Interned token kind.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Symbol(u32);

impl Symbol {
    /// Start of file. Emitted once, zero width.
    pub const SOF: Symbol = Symbol(0);
    /// End of file. Zero width, repeated forever once input is exhausted.
    pub const EOF: Symbol = Symbol(1);
    /// Identifier that is not a registered keyword.
    pub const NAME: Symbol = Symbol(2);
    pub const NUMBER: Symbol = Symbol(3);
    pub const STRING: Symbol = Symbol(4);
    pub const BOOLEAN: Symbol = Symbol(5);
    /// Unrecognized input or a substituted sentinel.
    pub const INVALID: Symbol = Symbol(6);

    /// Names of the predefined symbols, in index order.
    pub(crate) const PREDEFINED: [&'static str; 7] = [
        "#sof", "#eof", "#name", "#number", "#string", "#boolean", "#invalid",
    ];

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Symbol(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is one of the built-in abstract kinds.
    #[inline]
    pub const fn is_predefined(self) -> bool {
        (self.0 as usize) < Self::PREDEFINED.len()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Self::PREDEFINED.get(self.index()) {
            Some(name) => write!(f, "Symbol({name})"),
            None => write!(f, "Symbol({})", self.0),
        }
    }
}

/// Error when interning a symbol fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    #[error("symbol table exceeded capacity: {count} symbols, max is {}", u32::MAX)]
    Overflow { count: usize },
    #[error("symbol name must not be empty")]
    Empty,
}

struct TableInner {
    map: FxHashMap<&'static str, Symbol>,
    names: Vec<&'static str>,
}

/// Interner mapping symbol names to [`Symbol`] handles.
///
/// Reads take a shared lock, so a table may be consulted from several parses
/// at once; inserts double-check under the write lock.
pub struct SymbolTable {
    inner: RwLock<TableInner>,
}

impl SymbolTable {
    /// Create a table holding only the predefined symbols.
    pub fn new() -> Self {
        let mut map = FxHashMap::default();
        let mut names = Vec::with_capacity(64);
        for (index, name) in Symbol::PREDEFINED.iter().enumerate() {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "PREDEFINED has seven entries"
            )]
            let symbol = Symbol(index as u32);
            map.insert(*name, symbol);
            names.push(*name);
        }
        SymbolTable {
            inner: RwLock::new(TableInner { map, names }),
        }
    }

    /// Try to intern `name`, returning the existing symbol when present.
    pub fn try_intern(&self, name: &str) -> Result<Symbol, InternError> {
        if name.is_empty() {
            return Err(InternError::Empty);
        }

        if let Some(&symbol) = self.inner.read().map.get(name) {
            return Ok(symbol);
        }

        let mut guard = self.inner.write();
        if let Some(&symbol) = guard.map.get(name) {
            return Ok(symbol);
        }

        let raw = u32::try_from(guard.names.len()).map_err(|_| InternError::Overflow {
            count: guard.names.len(),
        })?;
        // Leaked so lookups can hand out `&'static str` without holding the lock.
        let leaked: &'static str = Box::leak(name.to_owned().into_boxed_str());
        guard.names.push(leaked);
        guard.map.insert(leaked, Symbol(raw));
        Ok(Symbol(raw))
    }

    /// Intern `name`.
    ///
    /// # Panics
    /// Panics on an empty name or when the table exceeds `u32::MAX` symbols.
    /// Use [`SymbolTable::try_intern`] for fallible interning.
    pub fn intern(&self, name: &str) -> Symbol {
        self.try_intern(name).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up a name without interning it.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.inner.read().map.get(name).copied()
    }

    /// The name a symbol was interned with, or `"#unknown"` for a foreign handle.
    pub fn name(&self, symbol: Symbol) -> &'static str {
        self.inner
            .read()
            .names
            .get(symbol.index())
            .copied()
            .unwrap_or("#unknown")
    }

    /// Human-facing description used in diagnostics: punctuators are quoted,
    /// abstract kinds lose their `#` marker.
    pub fn describe(&self, symbol: Symbol) -> String {
        let name = self.name(symbol);
        match name.strip_prefix('#') {
            Some(kind) => kind.to_owned(),
            None => format!("'{name}'"),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolTable")
            .field("len", &self.len())
            .finish()
    }
}

/// Shared handle to a [`SymbolTable`].
#[derive(Clone, Debug, Default)]
pub struct SharedSymbols(Arc<SymbolTable>);

impl SharedSymbols {
    pub fn new() -> Self {
        SharedSymbols(Arc::new(SymbolTable::new()))
    }
}

impl std::ops::Deref for SharedSymbols {
    type Target = SymbolTable;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
