//! Dense transition table export.

use crate::formlang::epsilon_nfa::EpsilonNFA;
use crate::formlang::state::StateId;
use crate::formlang::symbol::Symbol;
use log::debug;

/// One row per state (ascending id), one column per registered symbol
/// (literals in discovery order, epsilon last).
///
/// A cell is `None` when the state has no edge on the column's symbol,
/// otherwise the destination ids in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    /// Column symbols, literals first and epsilon last
    columns: Vec<Symbol>,
    /// One row per state, one cell per column
    rows: Vec<Vec<Option<Vec<StateId>>>>,
}

impl TransitionTable {
    /// Get the column symbols.
    pub fn columns(&self) -> &[Symbol] {
        &self.columns
    }

    /// Rows indexed by state id.
    pub fn rows(&self) -> &[Vec<Option<Vec<StateId>>>] {
        &self.rows
    }

    /// Get the number of rows (one per state).
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Destinations of `state` in `column` (0-based), `None` when absent or
    /// out of range.
    pub fn cell(&self, state: StateId, column: usize) -> Option<&[StateId]> {
        self.rows
            .get(state as usize)?
            .get(column)?
            .as_deref()
    }

    /// The cell as decimal ids joined with `,`.
    pub fn cell_text(&self, state: StateId, column: usize) -> Option<String> {
        self.cell(state, column).map(join_ids)
    }
}

pub(crate) fn join_ids(ids: &[StateId]) -> String {
    ids.iter()
        .map(StateId::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Flatten the automaton into a [`TransitionTable`].
///
/// Dimensions come from the real state count and the registry size.
pub fn export_table(nfa: &EpsilonNFA) -> TransitionTable {
    let columns: Vec<Symbol> = nfa.symbols().columns().map(|(_, symbol)| symbol).collect();

    let rows = nfa
        .states()
        .iter()
        .map(|state| {
            columns
                .iter()
                .map(|&symbol| {
                    let targets = state.targets(symbol);
                    (!targets.is_empty()).then(|| targets.to_vec())
                })
                .collect()
        })
        .collect::<Vec<_>>();

    debug!("exported {}x{} transition table", rows.len(), columns.len());
    TransitionTable { columns, rows }
}
