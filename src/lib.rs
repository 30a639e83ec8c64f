//! Command-line dice roller for `XdY` expressions.
//!
//! Expressions are scanned out of command-line tokens, rolled with a single
//! seeded generator, and summarised with a total and optionally the
//! average, median and mode of the faces.

pub mod cli;
pub mod config;
pub mod error;
pub mod glyph;
pub mod grammar;
pub mod present;
pub mod roller;
pub mod run;
pub mod stats;
pub mod types;

pub use config::Config;
pub use error::{Error, ParseError, RollError};
pub use grammar::parse_token;
pub use roller::{RollOutcome, Roller};
pub use run::{RunReport, run};
pub use stats::{Median, Mode, RollSummary, summarize};
pub use types::{DiceExpr, Histogram};
