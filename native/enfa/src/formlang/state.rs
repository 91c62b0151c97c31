//! States of the ε-NFA and sets of state ids.

use crate::formlang::symbol::Symbol;
use fixedbitset::FixedBitSet;
use indexmap::IndexMap;
use std::fmt;

/// A state identifier, assigned sequentially from 0 in creation order.
pub type StateId = u32;

/// One automaton state.
///
/// Edges are stored as ids into the owning automaton's state vector, grouped
/// by symbol in the order the symbol was first used from this state.
/// Destinations keep insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// Sequential id, also the index in the automaton's state vector
    id: StateId,
    /// Entry state of the finished automaton
    pub(crate) is_initial: bool,
    /// Exit state of the finished automaton
    pub(crate) is_final: bool,
    /// Symbol -> destinations, in insertion order
    transitions: IndexMap<Symbol, Vec<StateId>>,
}

impl State {
    pub(crate) fn new(id: StateId) -> Self {
        Self {
            id,
            is_initial: false,
            is_final: false,
            transitions: IndexMap::new(),
        }
    }

    /// Get the state id.
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Check if this is the initial state.
    pub fn is_initial(&self) -> bool {
        self.is_initial
    }

    /// Check if this is the final state.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub(crate) fn push_transition(&mut self, symbol: Symbol, destination: StateId) {
        self.transitions.entry(symbol).or_default().push(destination);
    }

    /// Destinations on `symbol`, empty when there is no such edge.
    pub fn targets(&self, symbol: Symbol) -> &[StateId] {
        self.transitions.get(&symbol).map_or(&[], Vec::as_slice)
    }

    /// Per-symbol destination lists in insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = (Symbol, &[StateId])> + '_ {
        self.transitions
            .iter()
            .map(|(&symbol, dests)| (symbol, dests.as_slice()))
    }
}

/// A set of states implemented using a fixed-size bit set.
#[derive(Clone, PartialEq, Eq)]
pub struct StateSet {
    bits: FixedBitSet,
}

impl StateSet {
    /// Create a new empty state set with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// Insert a state, returning `true` if it was not already present.
    pub fn insert(&mut self, state: StateId) -> bool {
        let idx = state as usize;
        if idx >= self.bits.len() {
            self.bits.grow(idx + 1);
        }
        !self.bits.put(idx)
    }

    /// Check if the set contains a state.
    pub fn contains(&self, state: StateId) -> bool {
        let idx = state as usize;
        idx < self.bits.len() && self.bits.contains(idx)
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// Get the number of states in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Iterate over all states in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.bits.ones().map(|i| i as StateId)
    }

    /// Get the states as a sorted vec.
    pub fn to_vec(&self) -> Vec<StateId> {
        self.iter().collect()
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_keeps_duplicate_edges_in_order() {
        let mut state = State::new(0);
        state.push_transition(Symbol::Epsilon, 3);
        state.push_transition(Symbol::Literal('a'), 1);
        state.push_transition(Symbol::Epsilon, 2);
        state.push_transition(Symbol::Epsilon, 3);

        assert_eq!(state.targets(Symbol::Epsilon), &[3, 2, 3]);
        assert_eq!(state.targets(Symbol::Literal('a')), &[1]);
        assert!(state.targets(Symbol::Literal('b')).is_empty());

        let order: Vec<Symbol> = state.transitions().map(|(s, _)| s).collect();
        assert_eq!(order, vec![Symbol::Epsilon, Symbol::Literal('a')]);
        assert!(!state.is_initial() && !state.is_final());
    }

    #[test]
    fn test_state_set_basic() {
        let mut set = StateSet::with_capacity(4);
        assert!(set.is_empty());

        assert!(set.insert(3));
        assert!(set.insert(7));
        assert!(!set.insert(3));
        assert_eq!(set.len(), 2);
        assert!(set.contains(7));
        assert!(!set.contains(5));
        assert!(!set.contains(100));
        assert_eq!(set.to_vec(), vec![3, 7]);
    }
}
