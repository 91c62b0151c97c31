//! Text views of an automaton and its transition table.

use crate::formlang::epsilon_nfa::EpsilonNFA;
use crate::formlang::postfix::Token;
use crate::formlang::state::StateId;
use crate::formlang::symbol::Symbol;
use crate::formlang::table::{TransitionTable, join_ids};
use std::fmt;

/// Labels used when printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Column and edge label for epsilon.
    pub epsilon: String,
    /// Text of an absent table cell.
    pub placeholder: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            epsilon: "ε".to_string(),
            placeholder: "-".to_string(),
        }
    }
}

impl Labels {
    fn symbol(&self, symbol: Symbol) -> String {
        match symbol {
            Symbol::Epsilon => self.epsilon.clone(),
            literal => literal.to_string(),
        }
    }
}

/// Re-render a postfix token sequence as text.
pub fn format_postfix(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.as_char()).collect()
}

/// One line per state: id, flags, then `symbol->destinations` groups.
pub struct AdjacencyListing<'a> {
    nfa: &'a EpsilonNFA,
    labels: &'a Labels,
}

impl<'a> AdjacencyListing<'a> {
    pub fn new(nfa: &'a EpsilonNFA, labels: &'a Labels) -> Self {
        Self { nfa, labels }
    }
}

impl fmt::Display for AdjacencyListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in self.nfa.states() {
            write!(f, "{}", state.id())?;
            if state.is_initial() {
                f.write_str(" (initial)")?;
            }
            if state.is_final() {
                f.write_str(" (final)")?;
            }
            for (symbol, dests) in state.transitions() {
                write!(f, "  {}->{}", self.labels.symbol(symbol), join_ids(dests))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Boundary states and input alphabet of an automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub initial: Option<StateId>,
    pub final_state: Option<StateId>,
    /// Distinct literal symbols in discovery order.
    pub literals: Vec<char>,
}

impl Summary {
    pub fn of(nfa: &EpsilonNFA) -> Self {
        Self {
            initial: nfa.initial_state(),
            final_state: nfa.final_state(),
            literals: nfa.symbols().literals().collect(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn id(state: Option<StateId>) -> String {
            state.map_or_else(|| "none".to_string(), |s| s.to_string())
        }

        writeln!(f, "Initial state: {}", id(self.initial))?;
        writeln!(f, "Final state: {}", id(self.final_state))?;
        writeln!(f, "Number of input characters: {}", self.literals.len())?;
        let literals: Vec<String> = self.literals.iter().map(char::to_string).collect();
        writeln!(f, "Input characters: {}", literals.join(", "))
    }
}

/// Tab-separated transition table with a `states` header.
pub struct TableView<'a> {
    table: &'a TransitionTable,
    labels: &'a Labels,
}

impl<'a> TableView<'a> {
    pub fn new(table: &'a TransitionTable, labels: &'a Labels) -> Self {
        Self { table, labels }
    }
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("states")?;
        for &symbol in self.table.columns() {
            write!(f, "\t{}", self.labels.symbol(symbol))?;
        }
        writeln!(f)?;

        for (state, row) in self.table.rows().iter().enumerate() {
            write!(f, "{state}")?;
            for cell in row {
                match cell {
                    Some(dests) => write!(f, "\t{}", join_ids(dests))?,
                    None => write!(f, "\t{}", self.labels.placeholder)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
