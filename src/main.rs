use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use crate::constants::{keys, DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_WIDTH};
use crate::plot::PlotConfig;

mod charts;
mod constants;
mod error;
mod plot;
mod stats;
mod types;

#[derive(Parser)]
#[command(name = "stats_plot")]
#[command(about = "Plot training loss against kimg from a stats.jsonl file", long_about = None)]
struct Cli {
    /// JSON Lines stats file written by the training run
    input: PathBuf,

    /// Key whose mean is plotted for records carrying Loss/loss
    #[arg(short = 'k', long, default_value = keys::LOSS)]
    loss_key: String,

    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,
}

impl From<Cli> for PlotConfig {
    fn from(cli: Cli) -> Self {
        Self {
            loss_key: cli.loss_key,
            output: cli.output,
            size: (cli.width, cli.height),
            ..Self::new(cli.input)
        }
    }
}

fn main() {
    let config = PlotConfig::from(Cli::parse());

    println!(
        "{}",
        format!(
            "Reading {} (loss key '{}')",
            config.input.display(),
            config.loss_key
        )
        .dimmed()
    );

    let outcome = plot::plot(&config);
    plot::report(&outcome);
}
