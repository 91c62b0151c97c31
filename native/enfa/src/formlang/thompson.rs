//! Thompson's construction over a postfix token stream.

use crate::error::{Result, SyntaxError};
use crate::formlang::epsilon_nfa::EpsilonNFA;
use crate::formlang::postfix::Token;
use crate::formlang::state::StateId;
use crate::formlang::symbol::Symbol;
use log::{debug, trace};

/// A sub-automaton with one entry and one exit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fragment {
    pub entry: StateId,
    pub exit: StateId,
}

/// Stack machine applying one construction rule per token.
///
/// States are appended to the automaton as rules create them, so ids follow
/// creation order. Finished with [`ThompsonBuilder::finish`] once exactly one
/// fragment remains.
#[derive(Debug, Default)]
pub struct ThompsonBuilder {
    nfa: EpsilonNFA,
    stack: Vec<Fragment>,
}

impl ThompsonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fragments currently on the stack, bottom first.
    pub fn stack(&self) -> &[Fragment] {
        &self.stack
    }

    /// The automaton built so far.
    pub fn automaton(&self) -> &EpsilonNFA {
        &self.nfa
    }

    /// Apply the rule for `token` and return the fragment it pushed.
    pub fn step(&mut self, token: Token) -> Result<Fragment> {
        if self.stack.len() < token.arity() {
            return Err(self.underflow(token));
        }

        let fragment = match token {
            Token::Literal(c) => self.literal(c),
            Token::Concat => {
                let (a, b) = self.pop_pair(token)?;
                self.nfa.add_epsilon_transition(a.exit, b.entry);
                Fragment {
                    entry: a.entry,
                    exit: b.exit,
                }
            }
            Token::Union => {
                let (a, b) = self.pop_pair(token)?;
                let entry = self.nfa.add_state();
                let exit = self.nfa.add_state();
                self.nfa.add_epsilon_transition(entry, a.entry);
                self.nfa.add_epsilon_transition(entry, b.entry);
                self.nfa.add_epsilon_transition(a.exit, exit);
                self.nfa.add_epsilon_transition(b.exit, exit);
                Fragment { entry, exit }
            }
            Token::Star => self.repeat(token, true)?,
            Token::Plus => self.repeat(token, false)?,
        };

        trace!(
            "'{}' -> fragment {}..{} (stack depth {})",
            token.as_char(),
            fragment.entry,
            fragment.exit,
            self.stack.len() + 1
        );
        self.stack.push(fragment);
        Ok(fragment)
    }

    /// Flag the boundary states of the last fragment and register epsilon.
    pub fn finish(mut self) -> Result<EpsilonNFA> {
        let fragment = match self.stack.as_slice() {
            [] => return Err(SyntaxError::EmptyPattern),
            [fragment] => *fragment,
            rest => {
                return Err(SyntaxError::MissingOperator {
                    fragments: rest.len(),
                });
            }
        };

        // Every rule creates its exit state last, so the closing fragment's
        // exit is the newest state.
        debug_assert_eq!(fragment.exit as usize + 1, self.nfa.num_states());

        self.nfa.state_mut(fragment.exit).is_final = true;
        self.nfa.state_mut(fragment.entry).is_initial = true;
        self.nfa.symbols_mut().register(Symbol::Epsilon);

        debug!(
            "built ε-NFA with {} states, initial {}, final {}",
            self.nfa.num_states(),
            fragment.entry,
            fragment.exit
        );
        Ok(self.nfa)
    }

    fn literal(&mut self, c: char) -> Fragment {
        let entry = self.nfa.add_state();
        let exit = self.nfa.add_state();
        self.nfa.add_transition(entry, Symbol::Literal(c), exit);
        self.nfa.symbols_mut().register(Symbol::Literal(c));
        Fragment { entry, exit }
    }

    /// `*` when `allow_empty`, `+` otherwise.
    fn repeat(&mut self, token: Token, allow_empty: bool) -> Result<Fragment> {
        let inner = self.pop(token)?;
        let entry = self.nfa.add_state();
        let exit = self.nfa.add_state();
        self.nfa.add_epsilon_transition(entry, inner.entry);
        self.nfa.add_epsilon_transition(inner.exit, inner.entry);
        self.nfa.add_epsilon_transition(inner.exit, exit);
        if allow_empty {
            self.nfa.add_epsilon_transition(entry, exit);
        }
        Ok(Fragment { entry, exit })
    }

    fn underflow(&self, token: Token) -> SyntaxError {
        SyntaxError::OperatorUnderflow {
            operator: token.as_char(),
            needed: token.arity(),
            available: self.stack.len(),
        }
    }

    fn pop(&mut self, token: Token) -> Result<Fragment> {
        self.stack.pop().ok_or_else(|| self.underflow(token))
    }

    /// Pop the right operand, then the left one; returns `(left, right)`.
    fn pop_pair(&mut self, token: Token) -> Result<(Fragment, Fragment)> {
        let right = self.pop(token)?;
        let left = self.pop(token)?;
        Ok((left, right))
    }
}

/// Build an ε-NFA from a postfix token sequence.
pub fn build_automaton(postfix: &[Token]) -> Result<EpsilonNFA> {
    let mut builder = ThompsonBuilder::new();
    for &token in postfix {
        builder.step(token)?;
    }
    builder.finish()
}
