use crate::config::{DEFAULT_MAX_DICE, DEFAULT_MAX_SIDES};
use clap::Parser;

/// Roll X Y-sided dice and print the result.
///
/// Several XdY expressions can be given; each one is rolled in turn.
#[derive(Debug, Parser)]
#[command(name = "xdy", disable_version_flag = true)]
pub struct Cli {
    /// Dice expressions such as 2d6 or d20
    #[arg(value_name = "XdY")]
    pub expressions: Vec<String>,

    /// Print more information about processes
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the most information (implies -v)
    #[arg(short = 'V', long)]
    pub very_verbose: bool,

    /// Print the average roll
    #[arg(short, long)]
    pub average: bool,

    /// Print the median roll
    #[arg(short, long)]
    pub median: bool,

    /// Print the mode roll
    #[arg(short = 'M', long)]
    pub mode: bool,

    /// Draw each die instead of printing its number
    #[arg(short, long)]
    pub pretty: bool,

    /// Seed the dice for a reproducible run
    #[arg(short, long, value_name = "N")]
    pub seed: Option<u64>,

    /// Largest number of dice a single expression may roll
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DICE)]
    pub max_dice: u32,

    /// Largest number of sides a die may have
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_SIDES)]
    pub max_sides: u32,
}
