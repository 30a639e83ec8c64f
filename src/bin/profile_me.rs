// src/bin/profile_me.rs
use std::hint::black_box;
use xdy::config::{Limits, StatsSelection};
use xdy::{Roller, parse_token, summarize};

fn main() {
    // Enough dice that rolling and sorting dominate
    let token = "1000d20 250d6 d100";
    let limits = Limits::default();
    let stats = StatsSelection::all();
    let mut roller = Roller::seeded(7);

    println!("Starting profile loop...");

    // Run long enough for a few seconds of samples
    for _ in 0..20_000 {
        for expr in parse_token(black_box(token)).into_iter().flatten() {
            if let Ok(outcome) = roller.roll(expr, &limits) {
                black_box(summarize(&outcome.histogram, &stats));
            }
        }
    }

    println!("Done.");
}
