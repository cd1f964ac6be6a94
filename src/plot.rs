//! Comparative line charts of the radial functions, written as SVG with `plotters`.

use std::fs;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::error::{RadialError, Result};
use crate::sampling::SampleSeries;

/// Curve colours in input order.
pub const PALETTE: [(&str, RGBColor); 3] = [
    ("blue", RGBColor(31, 119, 180)),
    ("orange", RGBColor(255, 127, 14)),
    ("green", RGBColor(44, 160, 44)),
];

pub const X_AXIS_LABEL: &str = "Radial Distance (Bohr radius)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Wavefunction,
    Density,
}

impl Quantity {
    pub fn file_name(self) -> &'static str {
        match self {
            Quantity::Wavefunction => "wavefunction.svg",
            Quantity::Density => "probability_density.svg",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Quantity::Wavefunction => "Comparison of Radial Wavefunctions",
            Quantity::Density => "Comparison of Radial Probability Densities",
        }
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            Quantity::Wavefunction => "Radial Wavefunction",
            Quantity::Density => "Radial Probability Density",
        }
    }

    fn values(self, series: &SampleSeries) -> Vec<f64> {
        match self {
            Quantity::Wavefunction => series.wavefunction(),
            Quantity::Density => series.density(),
        }
    }
}

/// Figure size and font sizes shared by both charts.
#[derive(Debug, Clone, Copy)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    pub caption_size: f64,
    pub label_size: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            width: 900,
            height: 560,
            caption_size: 26.0,
            label_size: 16.0,
        }
    }
}

fn plot_err<E: std::fmt::Display>(err: E) -> RadialError {
    RadialError::Plot(err.to_string())
}

fn value_range(series: &[SampleSeries], quantity: Quantity) -> (f64, f64) {
    let (lo, hi) = series
        .iter()
        .flat_map(|s| quantity.values(s))
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if hi - lo <= f64::EPSILON {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = 0.05 * (hi - lo);
    (lo - pad, hi + pad)
}

/// Legend entry for one series, e.g. "Radial Wavefunction (n=2, l=1)".
pub fn series_label(series: &SampleSeries, quantity: Quantity) -> String {
    format!("{} ({})", quantity.axis_label(), series.state)
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &[SampleSeries],
    quantity: Quantity,
    config: &PlotConfig,
) -> Result<()> {
    root.fill(&WHITE).map_err(plot_err)?;

    let x_max = series
        .iter()
        .filter_map(|s| s.samples.last().map(|last| last.r / s.bohr_radius))
        .fold(0.0_f64, f64::max);
    let x_max = if x_max > 0.0 { x_max } else { 1.0 };
    let (y_min, y_max) = value_range(series, quantity);

    let mut chart = ChartBuilder::on(root)
        .caption(quantity.title(), ("sans-serif", config.caption_size))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(quantity.axis_label())
        .label_style(("sans-serif", config.label_size))
        .y_label_formatter(&|v| format!("{v:.3}"))
        .draw()
        .map_err(plot_err)?;

    for (s, (_, color)) in series.iter().zip(PALETTE.iter().cycle()) {
        let color = *color;
        let points: Vec<(f64, f64)> = s
            .samples
            .iter()
            .zip(quantity.values(s))
            .map(|(sample, v)| (sample.r / s.bohr_radius, v))
            .collect();
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(plot_err)?
            .label(series_label(s, quantity))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    if !series.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .label_font(("sans-serif", config.label_size))
            .draw()
            .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)?;
    Ok(())
}

/// Render one chart to an SVG document, one curve per series; x is in Bohr radii.
pub fn render_chart(series: &[SampleSeries], quantity: Quantity, config: &PlotConfig) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width, config.height)).into_drawing_area();
        draw_chart(&root, series, quantity, config)?;
    }
    Ok(svg)
}

/// "blue: 2p (n=2, l=1)" style lines matching the curve colours.
pub fn legend(series: &[SampleSeries]) -> Vec<String> {
    series
        .iter()
        .zip(PALETTE.iter().cycle())
        .map(|(s, (name, _))| format!("{name}: {} ({})", s.state.label(), s.state))
        .collect()
}

/// Write the wavefunction and density charts into `dir`.
pub fn write_charts(series: &[SampleSeries], dir: &Path, config: &PlotConfig) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(2);
    for quantity in [Quantity::Wavefunction, Quantity::Density] {
        let path = dir.join(quantity.file_name());
        fs::write(&path, render_chart(series, quantity, config)?)?;
        info!(path = %path.display(), title = quantity.title(), "chart written");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::QuantumState;
    use crate::sampling::{ComparisonSet, SamplingConfig};

    fn series(states: &[(i64, i64)]) -> Vec<SampleSeries> {
        let states = states
            .iter()
            .map(|&(n, l)| QuantumState::new(n, l).unwrap())
            .collect();
        ComparisonSet::new(states)
            .unwrap()
            .evaluate(&SamplingConfig::default())
            .unwrap()
    }

    #[test]
    fn test_chart_has_title_axes_and_legend() {
        let s = series(&[(2, 0), (2, 1)]);
        for quantity in [Quantity::Wavefunction, Quantity::Density] {
            let svg = render_chart(&s, quantity, &PlotConfig::default()).unwrap();
            assert!(svg.contains("<svg"));
            assert!(svg.contains(quantity.title()));
            assert!(svg.contains(X_AXIS_LABEL));
            assert!(svg.contains(quantity.axis_label()));
            assert!(svg.contains(&format!("{} (n=2, l=0)", quantity.axis_label())));
            assert!(svg.contains(&format!("{} (n=2, l=1)", quantity.axis_label())));
            assert!(svg.matches("<polyline").count() >= 2);
        }
    }

    #[test]
    fn test_empty_chart_still_renders_axes() {
        let svg = render_chart(&[], Quantity::Density, &PlotConfig::default()).unwrap();
        assert!(svg.contains(Quantity::Density.title()));
        assert!(svg.contains(X_AXIS_LABEL));
    }

    #[test]
    fn test_series_label_names_the_state() {
        let s = series(&[(3, 2)]);
        assert_eq!(
            series_label(&s[0], Quantity::Wavefunction),
            "Radial Wavefunction (n=3, l=2)"
        );
    }

    #[test]
    fn test_legend_follows_input_order() {
        let s = series(&[(3, 2), (1, 0), (3, 2)]);
        assert_eq!(
            legend(&s),
            vec![
                "blue: 3d (n=3, l=2)".to_string(),
                "orange: 1s (n=1, l=0)".to_string(),
                "green: 3d (n=3, l=2)".to_string(),
            ]
        );
    }

    #[test]
    fn test_write_charts_creates_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("plots");
        let s = series(&[(2, 0)]);
        let config = PlotConfig {
            width: 320,
            height: 200,
            ..PlotConfig::default()
        };
        let written = write_charts(&s, &out, &config).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0], out.join("wavefunction.svg"));
        assert_eq!(written[1], out.join("probability_density.svg"));
        for path in &written {
            let svg = fs::read_to_string(path).unwrap();
            assert!(svg.contains("width=\"320\""));
        }
    }
}
