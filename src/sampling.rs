//! Distance grids and batch evaluation of comparison sets.

use serde::Serialize;
use tracing::debug;

use crate::error::{RadialError, Result};
use crate::physics::{
    probability_from_wavefunction, QuantumState, RadialEvaluator, BOHR_RADIUS_ANGSTROM,
};

/// Most states that can be compared side by side.
pub const MAX_COMPARISON_STATES: usize = 3;

/// Sampling parameters for one evaluation session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingConfig {
    /// Number of grid points, endpoints included.
    pub sample_count: usize,
    /// Upper end of the grid in multiples of the Bohr radius.
    pub range_in_bohr: f64,
    /// Length unit; distances come out in the same unit (angstroms by default).
    pub bohr_radius: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            sample_count: 1000,
            range_in_bohr: 50.0,
            bohr_radius: BOHR_RADIUS_ANGSTROM,
        }
    }
}

impl SamplingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sample_count < 2 {
            return Err(RadialError::InvalidConfig {
                field: "sample_count",
                reason: format!("need at least 2 samples, got {}", self.sample_count),
            });
        }
        if !self.range_in_bohr.is_finite() || self.range_in_bohr <= 0.0 {
            return Err(RadialError::InvalidConfig {
                field: "range_in_bohr",
                reason: format!("must be a positive number, got {}", self.range_in_bohr),
            });
        }
        if !self.bohr_radius.is_finite() || self.bohr_radius <= 0.0 {
            return Err(RadialError::InvalidConfig {
                field: "bohr_radius",
                reason: format!("must be a positive number, got {}", self.bohr_radius),
            });
        }
        Ok(())
    }

    /// Largest sampled distance, in the length unit.
    pub fn r_max(&self) -> f64 {
        self.range_in_bohr * self.bohr_radius
    }

    /// Evenly spaced distances over `[0, r_max]`.
    pub fn radial_grid(&self) -> Vec<f64> {
        build_radial_grid(self.r_max(), self.sample_count)
    }
}

/// `steps` evenly spaced points from 0 to `max_radius` inclusive.
pub fn build_radial_grid(max_radius: f64, steps: usize) -> Vec<f64> {
    let count = steps.max(2);
    let denom = (count - 1) as f64;
    (0..count)
        .map(|i| {
            if i == count - 1 {
                max_radius
            } else {
                max_radius * (i as f64) / denom
            }
        })
        .collect()
}

/// One evaluated point: distance, wavefunction and probability density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadialSample {
    pub r: f64,
    pub wavefunction: f64,
    pub density: f64,
}

impl RadialSample {
    pub fn evaluate(r: f64, evaluator: &RadialEvaluator) -> Self {
        let wavefunction = evaluator.wavefunction(r);
        RadialSample {
            r,
            wavefunction,
            density: probability_from_wavefunction(r, wavefunction),
        }
    }
}

/// Samples of one state over a shared grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSeries {
    pub state: QuantumState,
    pub bohr_radius: f64,
    pub samples: Vec<RadialSample>,
}

impl SampleSeries {
    pub fn evaluate(state: QuantumState, config: &SamplingConfig) -> Result<Self> {
        config.validate()?;
        let evaluator = RadialEvaluator::new(state, config.bohr_radius);
        let samples = config
            .radial_grid()
            .into_iter()
            .map(|r| RadialSample::evaluate(r, &evaluator))
            .collect();
        Ok(SampleSeries {
            state,
            bohr_radius: config.bohr_radius,
            samples,
        })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn distances(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.r).collect()
    }

    pub fn wavefunction(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.wavefunction).collect()
    }

    pub fn density(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.density).collect()
    }

    /// Sample with the largest probability density (first one on ties).
    pub fn density_mode(&self) -> Option<RadialSample> {
        self.samples.iter().copied().fold(None, |best, s| match best {
            Some(b) if b.density >= s.density => Some(b),
            _ => Some(s),
        })
    }

    /// Trapezoid estimate of the integral of P over the sampled range.
    pub fn enclosed_probability(&self) -> f64 {
        self.samples
            .windows(2)
            .map(|w| 0.5 * (w[1].r - w[0].r) * (w[0].density + w[1].density))
            .sum()
    }
}

/// Up to three states to evaluate side by side, duplicates allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonSet {
    states: Vec<QuantumState>,
}

impl ComparisonSet {
    pub fn new(states: Vec<QuantumState>) -> Result<Self> {
        if states.is_empty() {
            return Err(RadialError::EmptyComparison);
        }
        if states.len() > MAX_COMPARISON_STATES {
            return Err(RadialError::TooManyStates {
                count: states.len(),
                max: MAX_COMPARISON_STATES,
            });
        }
        Ok(ComparisonSet { states })
    }

    pub fn states(&self) -> &[QuantumState] {
        &self.states
    }

    /// One series per state, in input order.
    pub fn evaluate(&self, config: &SamplingConfig) -> Result<Vec<SampleSeries>> {
        config.validate()?;
        self.states
            .iter()
            .map(|&state| {
                debug!(%state, samples = config.sample_count, "evaluating series");
                SampleSeries::evaluate(state, config)
            })
            .collect()
    }
}

/// Column-oriented view of a series for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesReport {
    pub n: u32,
    pub l: u32,
    pub label: String,
    pub r: Vec<f64>,
    pub r_bohr: Vec<f64>,
    pub wavefunction: Vec<f64>,
    pub density: Vec<f64>,
    pub density_mode_r: Option<f64>,
    pub enclosed_probability: f64,
}

impl From<&SampleSeries> for SeriesReport {
    fn from(series: &SampleSeries) -> Self {
        let r = series.distances();
        SeriesReport {
            n: series.state.n(),
            l: series.state.l(),
            label: series.state.label(),
            r_bohr: r.iter().map(|r| r / series.bohr_radius).collect(),
            r,
            wavefunction: series.wavefunction(),
            density: series.density(),
            density_mode_r: series.density_mode().map(|s| s.r),
            enclosed_probability: series.enclosed_probability(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub config: SamplingConfig,
    pub series: Vec<SeriesReport>,
}

impl ComparisonReport {
    pub fn new(config: SamplingConfig, series: &[SampleSeries]) -> Self {
        ComparisonReport {
            config,
            series: series.iter().map(SeriesReport::from).collect(),
        }
    }
}
