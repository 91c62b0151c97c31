//! Errors raised while compiling a regular expression.

use thiserror::Error;

/// A malformed regular expression.
///
/// Every variant aborts the compilation of the current pattern; automata
/// returned by earlier calls are never touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// An unmatched `(` or `)` at the given character offset.
    #[error("unbalanced grouping at position {position}")]
    UnbalancedGrouping { position: usize },

    /// An operator found fewer fragments on the construction stack than it consumes.
    #[error("operator '{operator}' needs {needed} operand(s) but only {available} available")]
    OperatorUnderflow {
        operator: char,
        needed: usize,
        available: usize,
    },

    /// Empty or whitespace-only input, or a pattern that builds no fragment at all.
    #[error("empty pattern")]
    EmptyPattern,

    /// A character outside the alphabet and the operator set.
    #[error("unsupported symbol {symbol:?} at position {position}")]
    UnsupportedSymbol { symbol: char, position: usize },

    /// Several fragments were left over; concatenation must be written as `.`.
    #[error("{fragments} fragments left after construction (missing '.' or '|'?)")]
    MissingOperator { fragments: usize },
}

pub type Result<T, E = SyntaxError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SyntaxError::OperatorUnderflow {
            operator: '*',
            needed: 1,
            available: 0,
        };
        assert_eq!(
            err.to_string(),
            "operator '*' needs 1 operand(s) but only 0 available"
        );
        assert_eq!(
            SyntaxError::UnsupportedSymbol {
                symbol: '1',
                position: 3
            }
            .to_string(),
            "unsupported symbol '1' at position 3"
        );
    }
}
