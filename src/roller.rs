use crate::config::Limits;
use crate::error::RollError;
use crate::types::{DiceExpr, Histogram};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The dice of one expression after rolling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    pub expr: DiceExpr,
    /// Every face in the order it was rolled.
    pub rolls: Vec<u32>,
    pub histogram: Histogram,
}

impl RollOutcome {
    /// Assemble an outcome from known faces instead of random ones.
    pub fn from_rolls(sides: u32, rolls: Vec<u32>) -> Self {
        let histogram = Histogram::from_faces(sides, rolls.iter().copied());
        RollOutcome {
            expr: DiceExpr::new(rolls.len() as u32, sides),
            rolls,
            histogram,
        }
    }
}

/// Owns the random generator shared by every expression of a run.
pub struct Roller<R = StdRng> {
    rng: R,
}

impl Roller<StdRng> {
    pub fn from_entropy() -> Self {
        debug!("seeding dice from OS entropy");
        Roller::new(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        debug!("seeding dice with {seed}");
        Roller::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded generator when a seed is given, OS entropy otherwise.
    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Roller::seeded(seed),
            None => Roller::from_entropy(),
        }
    }
}

impl<R: Rng> Roller<R> {
    pub fn new(rng: R) -> Self {
        Roller { rng }
    }

    /// Roll `expr.count` dice uniformly over `1..=expr.sides`.
    pub fn roll(&mut self, expr: DiceExpr, limits: &Limits) -> Result<RollOutcome, RollError> {
        if expr.count == 0 || expr.sides == 0 {
            return Err(RollError::Empty(expr));
        }
        if expr.count > limits.max_dice {
            return Err(RollError::TooManyDice {
                count: expr.count,
                limit: limits.max_dice,
            });
        }
        if expr.sides > limits.max_sides {
            return Err(RollError::TooManySides {
                sides: expr.sides,
                limit: limits.max_sides,
            });
        }

        let mut histogram = Histogram::new(expr.sides);
        let mut rolls = Vec::with_capacity(expr.count as usize);
        for _ in 0..expr.count {
            let face = self.rng.random_range(1..=expr.sides);
            histogram.record(face);
            rolls.push(face);
        }
        debug!("rolled {expr}: total {}", histogram.total());

        Ok(RollOutcome {
            expr,
            rolls,
            histogram,
        })
    }
}
