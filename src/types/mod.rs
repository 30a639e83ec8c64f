pub mod dice;
pub mod histogram;

pub use dice::DiceExpr;
pub use histogram::Histogram;
