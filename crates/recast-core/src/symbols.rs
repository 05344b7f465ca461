//! Symbol universe: which classes exist and how they relate.

use indexmap::{IndexMap, IndexSet};

use crate::interner::{Interner, Symbol};

/// Read-only view over the classes known to the analysis.
pub trait SymbolUniverse {
    /// Whether a class, interface or trait with this name is declared.
    fn exists(&self, class: &str) -> bool;

    /// Reflexive, transitive is-a check over `extends`/`implements`.
    fn is_subclass_of(&self, class: &str, ancestor: &str) -> bool;

    /// Is-a in either direction.
    fn are_related(&self, a: &str, b: &str) -> bool {
        self.is_subclass_of(a, b) || self.is_subclass_of(b, a)
    }
}

impl<T: SymbolUniverse + ?Sized> SymbolUniverse for &T {
    fn exists(&self, class: &str) -> bool {
        (*self).exists(class)
    }

    fn is_subclass_of(&self, class: &str, ancestor: &str) -> bool {
        (*self).is_subclass_of(class, ancestor)
    }
}

/// In-memory class hierarchy.
///
/// Names are case-insensitive. Parents may be referenced before they are
/// declared; only declared classes `exist`.
#[derive(Debug, Clone, Default)]
pub struct ClassHierarchy {
    interner: Interner,
    /// Declared class -> direct parents and interfaces, in declaration order.
    parents: IndexMap<Symbol, Vec<Symbol>>,
}

impl ClassHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a class with its direct supertypes.
    pub fn declare(&mut self, class: &str, supertypes: &[&str]) {
        let sym = self.interner.intern(class);
        let supers: Vec<Symbol> = supertypes
            .iter()
            .map(|name| self.interner.intern(name))
            .collect();
        let entry = self.parents.entry(sym).or_default();
        for parent in supers {
            if !entry.contains(&parent) {
                entry.push(parent);
            }
        }
    }

    /// Builder form of `declare`.
    pub fn with_class(mut self, class: &str, supertypes: &[&str]) -> Self {
        self.declare(class, supertypes);
        self
    }

    /// Declared class names, in declaration order.
    pub fn classes(&self) -> impl Iterator<Item = &str> + '_ {
        self.parents.keys().map(|&sym| self.interner.resolve(sym))
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    fn reaches(&self, from: Symbol, target: Symbol) -> bool {
        let mut visited = IndexSet::new();
        let mut stack = vec![from];
        while let Some(sym) = stack.pop() {
            if sym == target {
                return true;
            }
            if !visited.insert(sym) {
                continue;
            }
            if let Some(parents) = self.parents.get(&sym) {
                stack.extend(parents.iter().copied());
            }
        }
        false
    }
}

impl SymbolUniverse for ClassHierarchy {
    fn exists(&self, class: &str) -> bool {
        self.interner
            .get(class)
            .is_some_and(|sym| self.parents.contains_key(&sym))
    }

    fn is_subclass_of(&self, class: &str, ancestor: &str) -> bool {
        let (Some(from), Some(target)) = (self.interner.get(class), self.interner.get(ancestor))
        else {
            return false;
        };
        self.reaches(from, target)
    }
}
