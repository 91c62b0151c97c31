//! Infix to postfix conversion (shunting-yard).

use crate::error::{Result, SyntaxError};
use log::debug;

/// One element of a postfix regular expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Literal(char),
    /// `.`
    Concat,
    /// `|`
    Union,
    /// `*`, zero or more.
    Star,
    /// `+`, one or more.
    Plus,
}

impl Token {
    /// Map an operator character to its token.
    pub fn operator(c: char) -> Option<Token> {
        match c {
            '.' => Some(Token::Concat),
            '|' => Some(Token::Union),
            '*' => Some(Token::Star),
            '+' => Some(Token::Plus),
            _ => None,
        }
    }

    /// Binding strength; higher binds tighter. Literals have none.
    pub fn precedence(self) -> u8 {
        match self {
            Token::Star | Token::Plus => 3,
            Token::Concat => 2,
            Token::Union => 1,
            Token::Literal(_) => 0,
        }
    }

    /// Unary operators written after their operand.
    pub fn is_postfix(self) -> bool {
        matches!(self, Token::Star | Token::Plus)
    }

    /// Number of fragments the token consumes when building the automaton.
    pub fn arity(self) -> usize {
        match self {
            Token::Literal(_) => 0,
            Token::Star | Token::Plus => 1,
            Token::Concat | Token::Union => 2,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Token::Literal(c) => c,
            Token::Concat => '.',
            Token::Union => '|',
            Token::Star => '*',
            Token::Plus => '+',
        }
    }
}

/// Entries of the operator stack.
enum Pending {
    /// An open `(` and where it was seen.
    Group(usize),
    Operator(Token),
}

/// Rewrite an infix expression into postfix order.
///
/// Alphabet symbols are ASCII letters. `*` and `+` bind tightest and go
/// straight to the output; `.` and `|` are left-associative. Leading and
/// trailing whitespace is ignored.
pub fn convert_to_postfix(pattern: &str) -> Result<Vec<Token>> {
    let leading = pattern.chars().take_while(|c| c.is_whitespace()).count();
    let trailing = pattern.chars().rev().take_while(|c| c.is_whitespace()).count();
    let total = pattern.chars().count();
    if leading == total {
        return Err(SyntaxError::EmptyPattern);
    }

    let mut output = Vec::with_capacity(total);
    let mut stack: Vec<Pending> = Vec::new();

    for (position, c) in pattern
        .chars()
        .enumerate()
        .skip(leading)
        .take(total - leading - trailing)
    {
        match c {
            '(' => stack.push(Pending::Group(position)),
            ')' => loop {
                match stack.pop() {
                    Some(Pending::Group(_)) => break,
                    Some(Pending::Operator(op)) => output.push(op),
                    None => return Err(SyntaxError::UnbalancedGrouping { position }),
                }
            },
            c if c.is_ascii_alphabetic() => output.push(Token::Literal(c)),
            c => match Token::operator(c) {
                Some(op) if op.is_postfix() => output.push(op),
                Some(op) => {
                    while let Some(&Pending::Operator(top)) = stack.last() {
                        if top.precedence() < op.precedence() {
                            break;
                        }
                        output.push(top);
                        stack.pop();
                    }
                    stack.push(Pending::Operator(op));
                }
                None => return Err(SyntaxError::UnsupportedSymbol { symbol: c, position }),
            },
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(op),
            Pending::Group(position) => return Err(SyntaxError::UnbalancedGrouping { position }),
        }
    }

    debug!("postfix of {:?} has {} tokens", pattern.trim(), output.len());
    Ok(output)
}
