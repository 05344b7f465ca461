//! Class-name interning.
//!
//! Class names are case-insensitive in the target language, so the interner
//! folds ASCII case before lookup. A `Symbol` is a cheap handle; comparing two
//! symbols is an integer comparison.

use std::collections::HashMap;

/// Handle to an interned, case-folded name.
///
/// Symbols are ordered by insertion order, not lexicographically.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Symbol(u32);

impl Symbol {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Case-insensitive name interner.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    map: HashMap<String, Symbol>,
    /// First spelling seen for each symbol.
    strings: Vec<String>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a name, returning the existing symbol for any case variant.
    pub fn intern(&mut self, name: &str) -> Symbol {
        let key = fold(name);
        if let Some(&sym) = self.map.get(&key) {
            return sym;
        }

        let sym = Symbol(self.strings.len() as u32);
        self.strings.push(name.to_owned());
        self.map.insert(key, sym);
        sym
    }

    /// Look a name up without interning it.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.map.get(&fold(name)).copied()
    }

    /// Resolve a symbol to the spelling it was first interned with.
    ///
    /// # Panics
    /// Panics if the symbol was not created by this interner.
    #[inline]
    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.strings[sym.0 as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.strings
            .iter()
            .enumerate()
            .map(|(i, s)| (Symbol(i as u32), s.as_str()))
    }
}

/// Leading namespace separators are not part of the identity.
fn fold(name: &str) -> String {
    name.trim_start_matches('\\').to_ascii_lowercase()
}
