use crate::cli::Cli;

pub const DEFAULT_MAX_DICE: u32 = 1_000_000;
pub const DEFAULT_MAX_SIDES: u32 = 1_000_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    #[default]
    Quiet,
    Verbose,
    VeryVerbose,
}

impl Verbosity {
    pub fn verbose(self) -> bool {
        self >= Verbosity::Verbose
    }

    pub fn very_verbose(self) -> bool {
        self == Verbosity::VeryVerbose
    }
}

/// Which statistics are computed besides the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSelection {
    pub average: bool,
    pub median: bool,
    pub mode: bool,
}

impl StatsSelection {
    pub fn all() -> Self {
        StatsSelection {
            average: true,
            median: true,
            mode: true,
        }
    }
}

/// Upper bounds protecting against expressions that would allocate
/// unreasonable amounts of memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_dice: u32,
    pub max_sides: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_dice: DEFAULT_MAX_DICE,
            max_sides: DEFAULT_MAX_SIDES,
        }
    }
}

/// Settings for a whole run, fixed before the first expression is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub verbosity: Verbosity,
    pub stats: StatsSelection,
    pub pretty: bool,
    pub limits: Limits,
    pub seed: Option<u64>,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        let verbosity = if cli.very_verbose {
            Verbosity::VeryVerbose
        } else if cli.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Quiet
        };

        Config {
            verbosity,
            stats: StatsSelection {
                average: cli.average,
                median: cli.median,
                mode: cli.mode,
            },
            pretty: cli.pretty,
            limits: Limits {
                max_dice: cli.max_dice,
                max_sides: cli.max_sides,
            },
            seed: cli.seed,
        }
    }
}
