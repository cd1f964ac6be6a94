//! Hydrogen radial wavefunctions and radial probability densities.
//!
//! [`physics`] holds the closed-form evaluators, [`sampling`] evaluates them
//! over a distance grid for up to three states, and the remaining modules are
//! the front ends: terminal prompts, SVG charts and an HTTP view.

pub mod concepts;
pub mod error;
pub mod logging;
pub mod physics;
pub mod plot;
pub mod prompt;
pub mod sampling;
pub mod web;

pub use error::{RadialError, Result};
pub use physics::{
    radial_probability_density, radial_wavefunction, QuantumState, RadialEvaluator,
    BOHR_RADIUS_ANGSTROM, MAX_PRINCIPAL,
};
pub use sampling::{ComparisonSet, RadialSample, SampleSeries, SamplingConfig};
