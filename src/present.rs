//! Text output for rolled expressions.
//!
//! Plain runs print one result line per expression plus the requested
//! statistics. Verbose runs add how each value was reached, very verbose
//! runs add every die.

use crate::config::{Config, Verbosity};
use crate::glyph::render_face;
use crate::roller::RollOutcome;
use crate::stats::RollSummary;
use crate::types::DiceExpr;
use std::io::{self, Write};

pub struct Presenter<'c, W> {
    out: W,
    config: &'c Config,
}

impl<'c, W: Write> Presenter<'c, W> {
    pub fn new(out: W, config: &'c Config) -> Self {
        Presenter { out, config }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn verbosity(&self) -> Verbosity {
        self.config.verbosity
    }

    pub fn announce_verbosity(&mut self) -> io::Result<()> {
        match self.verbosity() {
            Verbosity::VeryVerbose => writeln!(self.out, "Using very verbose mode"),
            Verbosity::Verbose => writeln!(self.out, "Using verbose mode"),
            Verbosity::Quiet => Ok(()),
        }
    }

    pub fn expression(&mut self, expr: &DiceExpr) -> io::Result<()> {
        if self.verbosity().verbose() {
            writeln!(self.out)?;
            writeln!(self.out, "Number of dice: {}", expr.count)?;
            writeln!(self.out, "Size of dice: {}", expr.sides)?;
        }
        Ok(())
    }

    pub fn outcome(&mut self, outcome: &RollOutcome, summary: &RollSummary) -> io::Result<()> {
        self.dice(outcome)?;
        self.total(outcome, summary)?;

        if let Some(average) = summary.average {
            writeln!(self.out, "Average roll: {average:.6}")?;
        }

        if let Some(median) = &summary.median {
            self.median_trace(outcome)?;
            writeln!(self.out, "Median roll: {median}")?;
        }

        if let Some(mode) = &summary.mode {
            if self.verbosity().verbose() {
                writeln!(self.out, "Mode calculation:")?;
                for (face, n) in outcome.histogram.leader_changes() {
                    writeln!(
                        self.out,
                        "\tNew most common result: {face} appearing {n} times"
                    )?;
                }
            }
            if mode.is_tie() {
                writeln!(self.out, "Mode results: {mode}")?;
            } else {
                writeln!(self.out, "Mode result: {mode}")?;
            }
        }
        Ok(())
    }

    // ==========================================
    // Traces
    // ==========================================

    fn dice(&mut self, outcome: &RollOutcome) -> io::Result<()> {
        let very_verbose = self.verbosity().very_verbose();
        if very_verbose {
            writeln!(self.out, "Results:")?;
        }
        for (i, face) in outcome.rolls.iter().enumerate() {
            let number = i + 1;
            if self.config.pretty {
                writeln!(self.out, "Die number {number}:")?;
                let drawing = render_face(outcome.expr.sides, *face);
                write!(self.out, "{drawing}")?;
                if !drawing.ends_with('\n') {
                    writeln!(self.out)?;
                }
                writeln!(self.out)?;
            } else if very_verbose {
                writeln!(self.out, "\tDice number {number} result: {face}")?;
            }
        }
        Ok(())
    }

    fn total(&mut self, outcome: &RollOutcome, summary: &RollSummary) -> io::Result<()> {
        if self.verbosity().verbose() {
            writeln!(self.out, "Total calculation:")?;
        }
        if self.verbosity().very_verbose() {
            let mut running = 0u64;
            for (face, n) in outcome.histogram.rolled() {
                running += u64::from(face) * u64::from(n);
                writeln!(
                    self.out,
                    "\t{n} dice rolled a {face}. New total: {running}"
                )?;
            }
        }
        writeln!(
            self.out,
            "Result from rolling {}: {}",
            outcome.expr, summary.total
        )
    }

    fn median_trace(&mut self, outcome: &RollOutcome) -> io::Result<()> {
        if self.verbosity().verbose() {
            writeln!(self.out, "Median calculation:")?;
        }
        if self.verbosity().very_verbose() {
            for (face, n) in outcome.histogram.rolled() {
                writeln!(self.out, "\t{n} dice rolled a {face}")?;
            }
            let ordered = outcome
                .histogram
                .ordered()
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(self.out, "\tOrdered list of results: [{ordered}]")?;
        }
        Ok(())
    }
}
