//! Command-line front end for [`crocad`].
//!
//! ```bash
//! # A 16-row ball pattern
//! crocad ball --row-count 16
//!
//! # A donut, 6 stitch lengths across the hole, 14 overall
//! crocad donut --inner-diameter 6 --outer-diameter 14
//!
//! # Raw per-round stitch counts, unsnapped
//! crocad --accurate --counts-only torus -i 6 -o 14
//! ```

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

use crocad::{pattern, shape, text, util};

/// Generate crochet patterns for simple 3D shapes worked in the round.
#[derive(Parser, Debug)]
#[command(name = "crocad", author, version, about, long_about = None)]
struct Cli {
    /// Print extra information; repeat for debug output
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Generate an exact pattern, which may not produce such an even
    /// end-product
    #[arg(short, long, global = true)]
    accurate: bool,

    /// Print the per-round stitch counts instead of written instructions
    #[arg(long, global = true)]
    counts_only: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a pattern for a ball (sphere)
    #[command(alias = "sphere")]
    Ball {
        /// Number of rows in the pattern; defines the size of the ball
        #[arg(short, long, default_value_t = 16)]
        row_count: usize,
    },
    /// Generate a pattern for a donut (torus)
    #[command(alias = "torus")]
    Donut {
        /// Diameter of the donut hole, in stitch lengths
        #[arg(short, long, default_value_t = 6)]
        inner_diameter: u32,
        /// Overall diameter of the donut, in stitch lengths
        #[arg(short, long, default_value_t = 14)]
        outer_diameter: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (title, circumferences) = match cli.command {
        Command::Ball { row_count } => (
            format!("Ball ({row_count} rows)"),
            shape::sphere_circumferences(row_count)?,
        ),
        Command::Donut {
            inner_diameter,
            outer_diameter,
        } => (
            format!("Donut (inner diameter: {inner_diameter}, outer diameter: {outer_diameter})"),
            shape::torus_circumferences(inner_diameter, outer_diameter)?,
        ),
    };

    let (step, min) = if cli.accurate { (1, 1) } else { (6, 6) };
    let counts = util::round_to_nearest_slice(&circumferences, step, min)?;

    if cli.counts_only {
        println!("{}", counts.iter().join(" "));
        return Ok(());
    }

    let groups = pattern::rows(&counts)?;
    print!("{}", text::pattern_text(&title, &groups));
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
