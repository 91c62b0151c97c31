//! Symbol types for automata transitions.

use indexmap::IndexMap;
use std::fmt;

/// A 1-based column index handed out by the [`SymbolRegistry`].
pub type SymbolId = u32;

/// A transition label: either an alphabet character or epsilon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Literal(char),
    Epsilon,
}

impl Symbol {
    /// Check if a symbol is an epsilon transition.
    #[inline]
    pub fn is_epsilon(self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    /// The character of a literal symbol.
    pub fn literal(self) -> Option<char> {
        match self {
            Symbol::Literal(c) => Some(c),
            Symbol::Epsilon => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Literal(c) => write!(f, "{c}"),
            Symbol::Epsilon => f.write_str("ε"),
        }
    }
}

/// Assigns stable column indices to symbols in first-seen order.
///
/// Literals get `1, 2, ...`; epsilon is registered once, after construction,
/// and gets one past the largest literal index.
#[derive(Debug, Clone, Default)]
pub struct SymbolRegistry {
    /// Symbol -> column index, in registration order
    ids: IndexMap<Symbol, SymbolId>,
}

impl SymbolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index of `symbol`, allocating the next one on first use.
    pub fn register(&mut self, symbol: Symbol) -> SymbolId {
        let next = self.ids.len() as SymbolId + 1;
        *self.ids.entry(symbol).or_insert(next)
    }

    /// Get the index of `symbol` if it has been registered.
    pub fn index_of(&self, symbol: Symbol) -> Option<SymbolId> {
        self.ids.get(&symbol).copied()
    }

    /// Distinct literal characters in discovery order.
    pub fn literals(&self) -> impl Iterator<Item = char> + '_ {
        self.ids.keys().filter_map(|s| s.literal())
    }

    /// Get the number of distinct literal symbols.
    pub fn literal_count(&self) -> usize {
        self.ids.keys().filter(|s| !s.is_epsilon()).count()
    }

    /// All registered symbols ordered by index: literals first, epsilon last.
    pub fn columns(&self) -> impl Iterator<Item = (SymbolId, Symbol)> + '_ {
        self.ids.iter().map(|(&symbol, &id)| (id, symbol))
    }

    /// Get the number of registered symbols, epsilon included.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if no symbol has been registered.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
