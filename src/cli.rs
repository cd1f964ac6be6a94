//! Command line arguments for the `radials` binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use radials::{SamplingConfig, BOHR_RADIUS_ANGSTROM};

#[derive(Parser, Debug)]
#[command(
    name = "radials",
    version,
    about = "Compare hydrogen radial wavefunctions and radial probability densities",
    long_about = "Evaluate R_nl(r) and P(r) = r^2 |R_nl(r)|^2 for up to three (n, l) states\n\
                  and plot them side by side. Without STATE arguments the quantum numbers\n\
                  are asked for interactively."
)]
pub struct Cli {
    /// States to compare, as orbital labels (2p, 3d) or n,l pairs (2,1). At most three.
    #[arg(value_name = "STATE")]
    pub states: Vec<String>,

    /// Number of evenly spaced distance samples.
    #[arg(long, default_value_t = 1000)]
    pub samples: usize,

    /// Largest sampled distance, in Bohr radii.
    #[arg(long, default_value_t = 50.0)]
    pub range: f64,

    /// Bohr radius in the output distance unit (angstroms by default).
    #[arg(long = "bohr-radius", default_value_t = BOHR_RADIUS_ANGSTROM)]
    pub bohr_radius: f64,

    /// Directory that receives the SVG charts.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "plots")]
    pub output_dir: PathBuf,

    /// Skip writing the charts.
    #[arg(long = "no-plot")]
    pub no_plot: bool,

    /// Also write the evaluated series as JSON.
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Go straight to quantum-number input in interactive mode.
    #[arg(long = "skip-intro")]
    pub skip_intro: bool,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors on stderr.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn sampling_config(&self) -> SamplingConfig {
        SamplingConfig {
            sample_count: self.samples,
            range_in_bohr: self.range,
            bohr_radius: self.bohr_radius,
        }
    }

    pub fn interactive(&self) -> bool {
        self.states.is_empty()
    }
}
