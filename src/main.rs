mod cli;

use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::Context;
use clap::Parser;
use radials::logging::{init_logging, level_from_flags};
use radials::plot::{legend, write_charts, PlotConfig};
use radials::prompt::Prompter;
use radials::sampling::ComparisonReport;
use radials::{ComparisonSet, QuantumState};
use tracing::info;

use crate::cli::Cli;

const WELCOME: &str =
    "Welcome to the Quantum Radial Function Plotter. We hope you enjoy using the program! :)";
const FAREWELL: &str = "\nThank you for using the Quantum Radial Function Plotter. \
                        We hope you had fun and learned something today :)";

fn main() {
    if let Err(error) = run() {
        eprintln!("radials error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(
        level_from_flags(cli.verbose, cli.quiet),
        cli.verbose > 0 || cli.quiet,
    )?;

    let config = cli.sampling_config();
    config.validate()?;

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let set = if cli.interactive() {
        prompter.say(WELCOME)?;
        if !cli.skip_intro {
            prompter.explore_concepts()?;
        }
        prompter.acquire_comparison()?
    } else {
        let states = cli
            .states
            .iter()
            .map(|s| s.parse::<QuantumState>())
            .collect::<Result<Vec<_>, _>>()?;
        ComparisonSet::new(states)?
    };

    let series = set.evaluate(&config)?;
    prompter.say("\n--- Radial Functions ---")?;
    for s in &series {
        let mode = s
            .density_mode()
            .map(|m| format!("{:.3} A ({:.2} a0)", m.r, m.r / s.bohr_radius))
            .unwrap_or_else(|| "n/a".to_string());
        prompter.say(&format!(
            "{} ({}): most probable distance {}, probability within range {:.4}",
            s.state.label(),
            s.state,
            mode,
            s.enclosed_probability()
        ))?;
    }

    if !cli.no_plot {
        let written = write_charts(&series, &cli.output_dir, &PlotConfig::default())?;
        for line in legend(&series) {
            prompter.say(&format!("  {line}"))?;
        }
        for path in written {
            prompter.say(&format!("Chart saved to {}", path.display()))?;
        }
    }

    if let Some(path) = &cli.json {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &ComparisonReport::new(config, &series))?;
        info!(path = %path.display(), "series written as JSON");
    }

    if cli.interactive() {
        prompter.show_further_reading()?;
        prompter.say(FAREWELL)?;
    }
    Ok(())
}
