//! PyO3 bindings for the regex compiler.
//!
//! Exposes postfix conversion and a read-only `EpsilonNFA` wrapper to Python.

use crate::error::SyntaxError;
use crate::formlang::{EpsilonNFA, StateId, Symbol, convert_to_postfix, export_table, format_postfix};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

impl From<SyntaxError> for PyErr {
    fn from(err: SyntaxError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Convert an infix pattern to its postfix text.
#[pyfunction(name = "convert_to_postfix")]
fn py_convert_to_postfix(pattern: &str) -> PyResult<String> {
    Ok(format_postfix(&convert_to_postfix(pattern)?))
}

/// An ε-NFA compiled from a regular expression.
#[pyclass(name = "EpsilonNFA", module = "regex_enfa", frozen)]
pub struct PyEpsilonNFA {
    nfa: EpsilonNFA,
}

#[pymethods]
impl PyEpsilonNFA {
    /// Compile an infix pattern; raises `ValueError` when it is malformed.
    #[staticmethod]
    fn compile(pattern: &str) -> PyResult<Self> {
        Ok(Self {
            nfa: crate::compile(pattern)?,
        })
    }

    #[getter]
    fn num_states(&self) -> usize {
        self.nfa.num_states()
    }

    #[getter]
    fn initial_state(&self) -> Option<StateId> {
        self.nfa.initial_state()
    }

    #[getter]
    fn final_state(&self) -> Option<StateId> {
        self.nfa.final_state()
    }

    /// Table columns in order; epsilon is `None`.
    #[getter]
    fn symbols(&self) -> Vec<Option<char>> {
        self.nfa
            .symbols()
            .columns()
            .map(|(_, symbol)| symbol.literal())
            .collect()
    }

    /// All edges as `(source, symbol, destination)`; epsilon edges carry `None`.
    fn transitions(&self) -> Vec<(StateId, Option<char>, StateId)> {
        self.nfa
            .transitions()
            .map(|(src, sym, dst)| (src, sym.literal(), dst))
            .collect()
    }

    /// The dense transition table; absent cells are `None`.
    fn table(&self) -> Vec<Vec<Option<Vec<StateId>>>> {
        export_table(&self.nfa).rows().to_vec()
    }

    fn __repr__(&self) -> String {
        let epsilon_edges = self
            .nfa
            .transitions()
            .filter(|&(_, sym, _)| sym == Symbol::Epsilon)
            .count();
        format!(
            "EpsilonNFA(states={}, epsilon_edges={})",
            self.nfa.num_states(),
            epsilon_edges
        )
    }
}

/// Register the module contents.
pub fn enfa(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEpsilonNFA>()?;
    m.add_function(wrap_pyfunction!(py_convert_to_postfix, m)?)?;
    Ok(())
}
