use crate::config::Config;
use crate::error::{Error, ParseError, Result};
use crate::grammar::scan;
use crate::present::Presenter;
use crate::roller::Roller;
use crate::stats::summarize;
use crate::types::DiceExpr;
use log::{debug, warn};
use rand::Rng;
use std::io::Write;

/// What happened to the expressions of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub rolled: usize,
    pub rejected: usize,
}

impl RunReport {
    pub fn success(&self) -> bool {
        self.rejected == 0
    }
}

/// Roll every expression found in `tokens`, printing results to `out` as
/// they are computed and rejected expressions to `err`.
///
/// A rejected expression does not stop the run; only a failure to write
/// output does.
pub fn run<T, R, W, E>(
    config: &Config,
    tokens: &[T],
    roller: &mut Roller<R>,
    out: W,
    mut err: E,
) -> Result<RunReport>
where
    T: AsRef<str>,
    R: Rng,
    W: Write,
    E: Write,
{
    let mut presenter = Presenter::new(out, config);
    presenter.announce_verbosity()?;

    let mut report = RunReport::default();
    for token in tokens {
        let token: &str = token.as_ref();
        for parsed in scan(token) {
            match roll_one(parsed, config, roller, &mut presenter) {
                Ok(()) => report.rolled += 1,
                Err(Error::Parse(e)) => {
                    warn!("rejected expression: {e}");
                    writeln!(err, "error: {e}")?;
                    report.rejected += 1;
                }
                Err(Error::Roll(e)) => {
                    warn!("rejected expression in `{token}`: {e}");
                    writeln!(err, "error: {e} in `{token}`")?;
                    report.rejected += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
    debug!(
        "{} expression(s) rolled, {} rejected",
        report.rolled, report.rejected
    );
    Ok(report)
}

fn roll_one<R, W>(
    parsed: std::result::Result<DiceExpr, ParseError>,
    config: &Config,
    roller: &mut Roller<R>,
    presenter: &mut Presenter<'_, W>,
) -> Result<()>
where
    R: Rng,
    W: Write,
{
    let expr = parsed?;
    presenter.expression(&expr)?;
    let outcome = roller.roll(expr, &config.limits)?;
    let summary = summarize(&outcome.histogram, &config.stats);
    presenter.outcome(&outcome, &summary)?;
    Ok(())
}
