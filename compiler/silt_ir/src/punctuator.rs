//! Punctuators: symbols with a fixed source spelling.
//!
//! The set keeps its entries ordered by descending spelling length so a
//! greedy scan meets `>>=` before `>>` before `>`. The order is recomputed on
//! every insertion; grammars register a small vocabulary once at startup.

use crate::Symbol;
use rustc_hash::FxHashMap;

/// A registered punctuator spelling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Punctuator {
    pub symbol: Symbol,
    pub text: Box<str>,
    /// Match the spelling regardless of letter case.
    pub ignore_case: bool,
    /// Length of `text` in chars, cached for ordering.
    pub char_len: usize,
}

impl Punctuator {
    /// Whether `input` starts with this spelling.
    pub fn is_prefix_of(&self, input: &str) -> bool {
        if self.ignore_case {
            input
                .get(..self.text.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(&self.text))
        } else {
            input.starts_with(&*self.text)
        }
    }

    /// Whether `word` is exactly this spelling.
    pub fn is_spelled(&self, word: &str) -> bool {
        if self.ignore_case {
            word.eq_ignore_ascii_case(&self.text)
        } else {
            word == &*self.text
        }
    }
}

/// Longest-first ordered set of punctuators.
#[derive(Clone, Debug, Default)]
pub struct PunctuatorSet {
    entries: Vec<Punctuator>,
    by_symbol: FxHashMap<Symbol, usize>,
}

impl PunctuatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `symbol` with spelling `text`. Returns `false` when the symbol
    /// was already registered, in which case nothing changes.
    pub fn insert(&mut self, symbol: Symbol, text: &str, ignore_case: bool) -> bool {
        if text.is_empty() || self.by_symbol.contains_key(&symbol) {
            return false;
        }
        self.entries.push(Punctuator {
            symbol,
            text: text.into(),
            ignore_case,
            char_len: text.chars().count(),
        });
        // Stable sort: equal lengths keep registration order.
        self.entries.sort_by(|a, b| b.char_len.cmp(&a.char_len));
        self.by_symbol = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.symbol, index))
            .collect();
        true
    }

    pub fn is_punctuator(&self, symbol: Symbol) -> bool {
        self.by_symbol.contains_key(&symbol)
    }

    pub fn get(&self, symbol: Symbol) -> Option<&Punctuator> {
        self.by_symbol.get(&symbol).map(|&index| &self.entries[index])
    }

    /// Entries from longest to shortest spelling.
    pub fn iter(&self) -> impl Iterator<Item = &Punctuator> {
        self.entries.iter()
    }

    /// Find the punctuator spelled exactly `word`. Exact-case entries win
    /// over case-insensitive ones.
    pub fn find_spelling(&self, word: &str) -> Option<Symbol> {
        self.entries
            .iter()
            .find(|entry| !entry.ignore_case && entry.is_spelled(word))
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|entry| entry.ignore_case && entry.is_spelled(word))
            })
            .map(|entry| entry.symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
