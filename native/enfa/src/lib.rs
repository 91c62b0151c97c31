pub mod error;
pub mod formlang;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{Result, SyntaxError};
pub use formlang::{
    EpsilonNFA, Fragment, State, StateId, Symbol, SymbolId, SymbolRegistry, Token,
    TransitionTable, build_automaton, convert_to_postfix, export_table,
};

/// Convert `pattern` to postfix and build its ε-NFA.
pub fn compile(pattern: &str) -> Result<EpsilonNFA> {
    let postfix = convert_to_postfix(pattern)?;
    build_automaton(&postfix)
}

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn regex_enfa(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python_bindings::enfa(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile() {
        let nfa = compile("(a|b)*.a.b.b").unwrap();
        assert_eq!(nfa.num_states(), 14);
        assert_eq!(nfa.initial_state(), Some(6));
        assert_eq!(nfa.final_state(), Some(13));
    }

    #[test]
    fn test_compile_errors() {
        assert_eq!(
            compile("*").unwrap_err(),
            SyntaxError::OperatorUnderflow {
                operator: '*',
                needed: 1,
                available: 0
            }
        );
        assert_eq!(compile("()").unwrap_err(), SyntaxError::EmptyPattern);
        assert_eq!(
            compile("ab").unwrap_err(),
            SyntaxError::MissingOperator { fragments: 2 }
        );
        assert_eq!(
            compile("a|").unwrap_err(),
            SyntaxError::OperatorUnderflow {
                operator: '|',
                needed: 2,
                available: 1
            }
        );
    }
}
