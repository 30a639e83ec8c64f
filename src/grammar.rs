//! Scanner turning a command-line token into `XdY` expressions.
//!
//! Every `d` in the token produces one expression. The count is read from
//! the start of the current word (the text after the last space) and the
//! side count from right after the `d`. A `d` at the very start of the
//! token, or right after a space, stands for a single die.

use crate::error::ParseError;
use crate::types::DiceExpr;
use log::trace;
use winnow::Parser;
use winnow::Result as WNResultBase;
use winnow::ascii::{digit1, space0};
use winnow::combinator::preceded;
use winnow::error::{ContextError, ErrMode};

pub type WNResult<O, E = ContextError> = WNResultBase<O, ErrMode<E>>;

// ==========================================
// Entry points
// ==========================================

/// Parse every expression in `token`, in order of appearance.
pub fn parse_token(token: &str) -> Vec<Result<DiceExpr, ParseError>> {
    scan(token).collect()
}

/// Lazily scan `token`, yielding one result per `d` as it is reached.
pub fn scan(token: &str) -> DiceScanner<'_> {
    DiceScanner {
        token,
        pos: 0,
        boundary: 0,
    }
}

// ==========================================
// Number parsing
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Number {
    Value(u32),
    Missing,
    Overflow,
}

fn leading_digits<'a>(input: &mut &'a str) -> WNResult<&'a str> {
    preceded(space0, digit1).parse_next(input)
}

// Longest run of digits at the start of `text`, after optional blanks.
// Anything following the digits is ignored.
fn leading_number(text: &str) -> Number {
    let mut input = text;
    match leading_digits(&mut input) {
        Ok(digits) => match digits.parse::<u32>() {
            Ok(n) => Number::Value(n),
            Err(_) => Number::Overflow,
        },
        Err(_) => Number::Missing,
    }
}

// ==========================================
// Scanner
// ==========================================

#[derive(Debug, Clone)]
pub struct DiceScanner<'a> {
    token: &'a str,
    pos: usize,
    // index of the last space seen, 0 before any
    boundary: usize,
}

impl<'a> DiceScanner<'a> {
    pub fn token(&self) -> &'a str {
        self.token
    }

    fn resolve(&self, at: usize) -> Result<DiceExpr, ParseError> {
        let bytes = self.token.as_bytes();
        let count = if at == 0 {
            1
        } else if bytes[at - 1] == b' ' {
            self.count_before_space(at)?
        } else {
            self.count(leading_number(&self.token[self.boundary..at]))?
        };
        let sides = self.sides(leading_number(&self.token[at + 1..]))?;
        let expr = DiceExpr::new(count, sides);
        trace!("`{}` at {at}: {expr}", self.token);
        Ok(expr)
    }

    // `d` right after a space is a single die, unless the word before the
    // space is a bare count as in "3 d8".
    fn count_before_space(&self, at: usize) -> Result<u32, ParseError> {
        let before = self.token[..at].trim_end_matches(' ');
        let word = before.rsplit(' ').next().unwrap_or_default();
        if !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit()) {
            self.count(leading_number(word))
        } else {
            Ok(1)
        }
    }

    fn count(&self, number: Number) -> Result<u32, ParseError> {
        let token = self.token.to_string();
        match number {
            Number::Value(0) => Err(ParseError::ZeroCount { token }),
            Number::Value(n) => Ok(n),
            Number::Missing => Err(ParseError::MissingCount { token }),
            Number::Overflow => Err(ParseError::Overflow { token }),
        }
    }

    fn sides(&self, number: Number) -> Result<u32, ParseError> {
        let token = self.token.to_string();
        match number {
            Number::Value(0) => Err(ParseError::ZeroSides { token }),
            Number::Value(n) => Ok(n),
            Number::Missing => Err(ParseError::MissingSides { token }),
            Number::Overflow => Err(ParseError::Overflow { token }),
        }
    }
}

impl Iterator for DiceScanner<'_> {
    type Item = Result<DiceExpr, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.token.as_bytes();
        while self.pos < bytes.len() {
            let at = self.pos;
            self.pos += 1;
            match bytes[at] {
                b'd' => return Some(self.resolve(at)),
                b' ' => self.boundary = at,
                _ => {}
            }
        }
        None
    }
}
