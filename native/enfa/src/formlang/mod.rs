//! Regular expression to ε-NFA compilation.
//!
//! This module provides:
//! - Infix to postfix conversion with explicit `.` concatenation
//! - A symbol registry assigning table columns in discovery order
//! - Thompson's construction of an ε-NFA from postfix tokens
//! - Export of the automaton into a dense transition table

mod epsilon_nfa;
mod postfix;
mod render;
mod state;
mod symbol;
mod table;
mod thompson;

pub use epsilon_nfa::EpsilonNFA;
pub use postfix::{Token, convert_to_postfix};
pub use render::{AdjacencyListing, Labels, Summary, TableView, format_postfix};
pub use state::{State, StateId, StateSet};
pub use symbol::{Symbol, SymbolId, SymbolRegistry};
pub use table::{TransitionTable, export_table};
pub use thompson::{Fragment, ThompsonBuilder, build_automaton};
