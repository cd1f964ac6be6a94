//! HTTP view of the comparison: JSON series plus a page that plots them.

use axum::{
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::concepts::{concept_table, ConceptEntry};
use crate::error::RadialError;
use crate::physics::QuantumState;
use crate::sampling::{ComparisonReport, ComparisonSet, SamplingConfig};

/// Upper bound on grid points per request.
pub const MAX_WEB_SAMPLES: usize = 20_000;

#[derive(Debug, Default, Deserialize)]
pub struct SeriesQuery {
    pub n: Option<i64>,
    pub l: Option<i64>,
    pub n2: Option<i64>,
    pub l2: Option<i64>,
    pub n3: Option<i64>,
    pub l3: Option<i64>,
    pub count: Option<usize>,
    pub range: Option<f64>,
}

impl SeriesQuery {
    fn comparison(&self) -> Result<ComparisonSet, RadialError> {
        let mut states = vec![QuantumState::new(
            self.n.unwrap_or(1),
            self.l.unwrap_or(0),
        )?];
        for (n, l) in [(self.n2, self.l2), (self.n3, self.l3)] {
            if let Some(n) = n {
                states.push(QuantumState::new(n, l.unwrap_or(0))?);
            }
        }
        ComparisonSet::new(states)
    }

    fn config(&self) -> SamplingConfig {
        let defaults = SamplingConfig::default();
        SamplingConfig {
            sample_count: self
                .count
                .unwrap_or(defaults.sample_count)
                .min(MAX_WEB_SAMPLES),
            range_in_bohr: self.range.unwrap_or(defaults.range_in_bohr),
            ..defaults
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<RadialError> for ApiError {
    fn from(err: RadialError) -> Self {
        let status = match err {
            RadialError::Io(_) | RadialError::Plot(_) | RadialError::Json(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        };
        ApiError {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub async fn series(Query(q): Query<SeriesQuery>) -> Result<Json<ComparisonReport>, ApiError> {
    let set = q.comparison().map_err(|err| {
        warn!(%err, "rejected series request");
        ApiError::from(err)
    })?;
    let config = q.config();
    config.validate()?;

    let report = tokio::task::spawn_blocking(move || {
        set.evaluate(&config)
            .map(|series| ComparisonReport::new(config, &series))
    })
    .await
    .map_err(|err| ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: format!("evaluation task failed: {err}"),
    })??;

    info!(states = report.series.len(), samples = config.sample_count, "served series");
    Ok(Json(report))
}

async fn concepts() -> Json<Vec<ConceptEntry>> {
    Json(concept_table())
}

async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/series", get(series))
        .route("/concepts", get(concepts))
}

const INDEX_HTML: &str = r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>Hydrogen Radial Functions</title>
    <style>
      body { font-family: "Segoe UI", sans-serif; margin: 16px; background: #fafafa; color: #222; }
      form { margin-bottom: 12px; }
      input { width: 3em; }
      #charts { display: flex; gap: 16px; flex-wrap: wrap; }
      canvas { background: #fff; border: 1px solid #ccc; }
      #error { color: #b00020; }
    </style>
  </head>
  <body>
    <h1>Hydrogen Radial Wavefunctions</h1>
    <form id="form">
      set 1: n <input name="n" value="2" /> l <input name="l" value="0" />
      set 2: n <input name="n2" value="2" /> l <input name="l2" value="1" />
      set 3: n <input name="n3" /> l <input name="l3" />
      <button type="submit">Plot</button>
    </form>
    <div id="error"></div>
    <div id="charts">
      <div><h3>Comparison of Radial Wavefunctions</h3><canvas id="psi" width="560" height="360"></canvas></div>
      <div><h3>Comparison of Radial Probability Densities</h3><canvas id="prob" width="560" height="360"></canvas></div>
    </div>
    <script>
      const colors = ["#1f77b4", "#ff7f0e", "#2ca02c"];
      function draw(canvas, series, key) {
        const ctx = canvas.getContext("2d");
        const w = canvas.width, h = canvas.height, m = 36;
        ctx.clearRect(0, 0, w, h);
        let lo = 0, hi = 0, xmax = 1;
        for (const s of series) {
          for (const v of s[key]) { lo = Math.min(lo, v); hi = Math.max(hi, v); }
          xmax = Math.max(xmax, s.r_bohr[s.r_bohr.length - 1]);
        }
        if (hi - lo < 1e-12) { lo -= 1; hi += 1; }
        const px = x => m + x / xmax * (w - 2 * m);
        const py = y => h - m - (y - lo) / (hi - lo) * (h - 2 * m);
        ctx.strokeStyle = "#333";
        ctx.beginPath(); ctx.moveTo(m, m); ctx.lineTo(m, h - m);
        ctx.moveTo(m, py(0)); ctx.lineTo(w - m, py(0)); ctx.stroke();
        ctx.fillStyle = "#333";
        ctx.fillText("Radial Distance (Bohr radius)", w / 2 - 70, h - 8);
        series.forEach((s, i) => {
          ctx.strokeStyle = colors[i % colors.length];
          ctx.lineWidth = 2;
          ctx.beginPath();
          s.r_bohr.forEach((x, j) => j ? ctx.lineTo(px(x), py(s[key][j])) : ctx.moveTo(px(x), py(s[key][j])));
          ctx.stroke();
          ctx.fillStyle = colors[i % colors.length];
          ctx.fillText(`n=${s.n}, l=${s.l} (${s.label})`, w - m - 120, m + 14 * i);
        });
      }
      async function plot() {
        const params = new URLSearchParams();
        for (const [k, v] of new FormData(document.getElementById("form"))) {
          if (v.trim() !== "") params.set(k, v.trim());
        }
        const res = await fetch(`/series?${params}`);
        const body = await res.json();
        document.getElementById("error").textContent = res.ok ? "" : body.error;
        if (!res.ok) return;
        draw(document.getElementById("psi"), body.series, "wavefunction");
        draw(document.getElementById("prob"), body.series, "density");
      }
      document.getElementById("form").addEventListener("submit", e => { e.preventDefault(); plot(); });
      plot();
    </script>
  </body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::MAX_PRINCIPAL;

    #[tokio::test]
    async fn test_series_defaults_to_ground_state() {
        let Json(report) = series(Query(SeriesQuery::default())).await.unwrap();
        assert_eq!(report.series.len(), 1);
        assert_eq!((report.series[0].n, report.series[0].l), (1, 0));
        assert_eq!(report.series[0].r.len(), 1000);
    }

    #[tokio::test]
    async fn test_series_keeps_order_and_duplicates() {
        let q = SeriesQuery {
            n: Some(2),
            l: Some(1),
            n2: Some(1),
            n3: Some(2),
            l3: Some(1),
            count: Some(50),
            ..SeriesQuery::default()
        };
        let Json(report) = series(Query(q)).await.unwrap();
        let labels: Vec<&str> = report.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["2p", "1s", "2p"]);
        assert_eq!(report.series[0].r.len(), 50);
    }

    #[tokio::test]
    async fn test_invalid_state_is_bad_request() {
        let q = SeriesQuery {
            n: Some(2),
            l: Some(2),
            ..SeriesQuery::default()
        };
        let err = series(Query(q)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.message.contains("l must be smaller than n"));
    }

    #[tokio::test]
    async fn test_principal_beyond_supported_range_is_rejected() {
        for n in [MAX_PRINCIPAL + 1, 20_000_000, 5_000_000_000] {
            let q = SeriesQuery {
                n: Some(n),
                l: Some(0),
                ..SeriesQuery::default()
            };
            let err = series(Query(q)).await.unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
            assert!(err.message.contains("n must not exceed"));
        }
        let q = SeriesQuery {
            n: Some(2),
            n2: Some(3_000_000_000),
            l2: Some(2_999_999_999),
            ..SeriesQuery::default()
        };
        assert_eq!(series(Query(q)).await.unwrap_err().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_range_is_bad_request() {
        let q = SeriesQuery {
            range: Some(0.0),
            ..SeriesQuery::default()
        };
        let err = series(Query(q)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_sample_count_is_capped() {
        let q = SeriesQuery {
            count: Some(1_000_000),
            ..SeriesQuery::default()
        };
        assert_eq!(q.config().sample_count, MAX_WEB_SAMPLES);
    }

    #[tokio::test]
    async fn test_concepts_table_is_served() {
        let Json(table) = concepts().await;
        assert_eq!(table.len(), 4);
        assert_eq!(table[0].key, 'A');
    }
}
