use crate::types::DiceExpr;
use thiserror::Error;

// ==========================================
// Parse errors, one per emitted expression
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no dice count before 'd' in `{token}`")]
    MissingCount { token: String },

    #[error("no side count after 'd' in `{token}`")]
    MissingSides { token: String },

    #[error("dice count must be at least 1 in `{token}`")]
    ZeroCount { token: String },

    #[error("side count must be at least 1 in `{token}`")]
    ZeroSides { token: String },

    #[error("number too large in `{token}`")]
    Overflow { token: String },
}

impl ParseError {
    /// The command-line token the error was found in.
    pub fn token(&self) -> &str {
        match self {
            ParseError::MissingCount { token }
            | ParseError::MissingSides { token }
            | ParseError::ZeroCount { token }
            | ParseError::ZeroSides { token }
            | ParseError::Overflow { token } => token,
        }
    }
}

// ==========================================
// Roll errors
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("cannot roll {0}, count and sides must be at least 1")]
    Empty(DiceExpr),

    #[error("cannot roll {count} dice, the limit is {limit}")]
    TooManyDice { count: u32, limit: u32 },

    #[error("cannot roll {sides}-sided dice, the limit is {limit}")]
    TooManySides { sides: u32, limit: u32 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid dice expression: {0}")]
    Parse(#[from] ParseError),

    #[error("dice rolling error: {0}")]
    Roll(#[from] RollError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
