use std::fmt;

/// One `XdY` expression: roll `count` dice with `sides` sides each.
///
/// Values produced by the parser always have `count >= 1` and `sides >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiceExpr {
    pub count: u32,
    pub sides: u32,
}

impl DiceExpr {
    pub fn new(count: u32, sides: u32) -> Self {
        DiceExpr { count, sides }
    }

    /// A single die, as written `dY`.
    pub fn single(sides: u32) -> Self {
        DiceExpr { count: 1, sides }
    }
}

impl fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}
