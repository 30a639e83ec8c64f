//! Aggregate statistics over one rolled expression.

use crate::config::StatsSelection;
use crate::types::Histogram;
use std::fmt;

// ==========================================
// Result types
// ==========================================

/// Median of the ordered rolls.
///
/// An odd number of dice has a single middle face; an even number averages
/// the two middle faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Median {
    Middle(u32),
    Between(f64),
}

impl fmt::Display for Median {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Median::Middle(face) => write!(f, "{face}"),
            Median::Between(value) => write!(f, "{value:.6}"),
        }
    }
}

/// Most frequent faces, ascending, with how often they came up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    pub faces: Vec<u32>,
    pub frequency: u32,
}

impl Mode {
    pub fn is_tie(&self) -> bool {
        self.faces.len() > 1
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut faces = self.faces.iter();
        if let Some(first) = faces.next() {
            write!(f, "{first}")?;
            for face in faces {
                write!(f, ", {face}")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RollSummary {
    pub total: u64,
    pub average: Option<f64>,
    pub median: Option<Median>,
    pub mode: Option<Mode>,
}

// ==========================================
// Computation
// ==========================================

pub fn summarize(histogram: &Histogram, stats: &StatsSelection) -> RollSummary {
    RollSummary {
        total: histogram.total(),
        average: stats.average.then(|| average(histogram)).flatten(),
        median: stats.median.then(|| median(&histogram.ordered())).flatten(),
        mode: stats.mode.then(|| mode(histogram)).flatten(),
    }
}

pub fn average(histogram: &Histogram) -> Option<f64> {
    let count = histogram.count();
    if count == 0 {
        return None;
    }
    Some(histogram.total() as f64 / count as f64)
}

/// Median of a non-decreasing list of faces.
pub fn median(ordered: &[u32]) -> Option<Median> {
    let len = ordered.len();
    if len == 0 {
        return None;
    }
    if len % 2 == 0 {
        let low = ordered[len / 2 - 1];
        let high = ordered[len / 2];
        Some(Median::Between((f64::from(low) + f64::from(high)) / 2.0))
    } else {
        Some(Median::Middle(ordered[len / 2]))
    }
}

/// Every face sharing the highest frequency over `1..=sides`.
pub fn mode(histogram: &Histogram) -> Option<Mode> {
    let (frequency, faces) = histogram.most_common();
    if faces.is_empty() {
        return None;
    }
    Some(Mode { faces, frequency })
}
