//! Epsilon Non-deterministic Finite Automaton (ε-NFA) container.

use crate::formlang::state::{State, StateId, StateSet};
use crate::formlang::symbol::{Symbol, SymbolRegistry};

/// An ε-NFA built by Thompson's construction.
///
/// The automaton owns every state; edges refer to states by id, and a state's
/// id is its index in `states`.
#[derive(Debug, Clone, Default)]
pub struct EpsilonNFA {
    /// All states, indexed by id
    states: Vec<State>,
    /// Table columns for every symbol used
    symbols: SymbolRegistry,
}

impl EpsilonNFA {
    /// Create a new empty epsilon-NFA.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a state with the next sequential id.
    pub(crate) fn add_state(&mut self) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(State::new(id));
        id
    }

    /// Add a transition from source to destination on the given symbol.
    pub(crate) fn add_transition(&mut self, source: StateId, symbol: Symbol, destination: StateId) {
        debug_assert!((destination as usize) < self.states.len());
        self.states[source as usize].push_transition(symbol, destination);
    }

    /// Add an epsilon transition from source to destination.
    pub(crate) fn add_epsilon_transition(&mut self, source: StateId, destination: StateId) {
        self.add_transition(source, Symbol::Epsilon, destination);
    }

    pub(crate) fn state_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id as usize]
    }

    pub(crate) fn symbols_mut(&mut self) -> &mut SymbolRegistry {
        &mut self.symbols
    }

    /// Get all states in id order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Get a state by id.
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id as usize)
    }

    /// Get the number of states.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Get the symbol registry.
    pub fn symbols(&self) -> &SymbolRegistry {
        &self.symbols
    }

    /// The state flagged initial, if construction has finished.
    pub fn initial_state(&self) -> Option<StateId> {
        self.states.iter().find(|s| s.is_initial()).map(State::id)
    }

    /// The state flagged final, if construction has finished.
    pub fn final_state(&self) -> Option<StateId> {
        self.states.iter().find(|s| s.is_final()).map(State::id)
    }

    /// Get all transitions as `(source, symbol, destination)` in state order.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Symbol, StateId)> + '_ {
        self.states.iter().flat_map(|state| {
            state
                .transitions()
                .flat_map(move |(sym, dests)| dests.iter().map(move |&dst| (state.id(), sym, dst)))
        })
    }

    /// States reachable from `start` over edges of any symbol, `start` included.
    pub fn reachable_from(&self, start: StateId) -> StateSet {
        let mut seen = StateSet::with_capacity(self.states.len());
        if self.state(start).is_none() {
            return seen;
        }
        let mut stack = vec![start];

        while let Some(s) = stack.pop() {
            if !seen.insert(s) {
                continue;
            }
            for (_, dests) in self.states[s as usize].transitions() {
                stack.extend(dests.iter().filter(|&&d| !seen.contains(d)));
            }
        }

        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon_nfa_basic() {
        let mut nfa = EpsilonNFA::new();
        let s0 = nfa.add_state();
        let s1 = nfa.add_state();
        let s2 = nfa.add_state();

        // 0 -a-> 1 -ε-> 2
        nfa.add_transition(s0, Symbol::Literal('a'), s1);
        nfa.add_epsilon_transition(s1, s2);

        assert_eq!((s0, s1, s2), (0, 1, 2));
        assert_eq!(nfa.num_states(), 3);
        assert_eq!(nfa.initial_state(), None);
        assert_eq!(nfa.final_state(), None);
        assert_eq!(
            nfa.transitions().collect::<Vec<_>>(),
            vec![(0, Symbol::Literal('a'), 1), (1, Symbol::Epsilon, 2)]
        );
    }

    #[test]
    fn test_reachable_from() {
        let mut nfa = EpsilonNFA::new();
        for _ in 0..5 {
            nfa.add_state();
        }
        // 0 -> 1 -> 2 -> 1, 3 -> 4
        nfa.add_epsilon_transition(0, 1);
        nfa.add_transition(1, Symbol::Literal('b'), 2);
        nfa.add_epsilon_transition(2, 1);
        nfa.add_epsilon_transition(3, 4);

        assert_eq!(nfa.reachable_from(0).to_vec(), vec![0, 1, 2]);
        assert_eq!(nfa.reachable_from(3).to_vec(), vec![3, 4]);
        assert_eq!(nfa.reachable_from(4).to_vec(), vec![4]);
        assert!(nfa.reachable_from(9).is_empty());
    }
}
