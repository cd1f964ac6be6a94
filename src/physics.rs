//! Radial part of the hydrogen eigenfunctions: R_nl(r), r^2 |R_nl|^2 and the
//! quantum-number checks that guard them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::error::{RadialError, Result, Violation};

/// Bohr radius in angstroms, the default length unit for distances.
pub const BOHR_RADIUS_ANGSTROM: f64 = 0.529;

/// Largest supported principal quantum number. Evaluation cost grows
/// linearly with n, and results are verified finite up to this bound.
pub const MAX_PRINCIPAL: i64 = 500;

/// Spectroscopic letters indexed by l (j is skipped by convention).
const ORBITAL_LETTERS: &str = "spdfghiklmnoqrtuv";

static LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+)\s*([A-Za-z])\s*$").expect("valid label regex"));
static PAIR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(-?\d+)\s*(?:,|\s)\s*(-?\d+)\s*$").expect("valid pair regex")
});

/// Validated quantum numbers (n, l)
/// n: Principal quantum number (1, 2, 3, ...)
/// l: Azimuthal quantum number (0 to n-1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QuantumState {
    n: u32,
    l: u32,
}

impl QuantumState {
    /// Checks both constraints and reports every one that fails.
    pub fn new(n: i64, l: i64) -> Result<Self> {
        let mut violations = Vec::new();
        if n <= 0 {
            violations.push(Violation::PrincipalNotPositive);
        }
        if n > MAX_PRINCIPAL {
            violations.push(Violation::PrincipalTooLarge { max: MAX_PRINCIPAL });
        }
        if l < 0 {
            violations.push(Violation::AzimuthalNegative);
        }
        if l >= n {
            violations.push(Violation::AzimuthalNotBelowPrincipal);
        }
        if !violations.is_empty() {
            return Err(RadialError::InvalidQuantumNumbers { n, l, violations });
        }

        // 1 <= n <= MAX_PRINCIPAL and 0 <= l < n, so both fit in u32
        Ok(QuantumState {
            n: n as u32,
            l: l as u32,
        })
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn l(&self) -> u32 {
        self.l
    }

    /// Degree of the Laguerre polynomial, also the number of radial nodes.
    pub fn radial_nodes(&self) -> u32 {
        self.n - self.l - 1
    }

    /// Spectroscopic label such as `2p`, falling back to `n(l=..)` past the table.
    pub fn label(&self) -> String {
        match ORBITAL_LETTERS.chars().nth(self.l as usize) {
            Some(letter) => format!("{}{}", self.n, letter),
            None => format!("{}(l={})", self.n, self.l),
        }
    }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}, l={}", self.n, self.l)
    }
}

impl std::str::FromStr for QuantumState {
    type Err = RadialError;

    /// Accepts `2p` style labels or `n,l` / `n l` pairs.
    fn from_str(s: &str) -> Result<Self> {
        if let Some(caps) = LABEL_RE.captures(s) {
            let n = parse_quantum_number(&caps[1])?;
            let letter = caps[2].to_ascii_lowercase();
            let l = ORBITAL_LETTERS
                .find(letter.as_str())
                .ok_or_else(|| RadialError::MalformedInput {
                    input: s.to_string(),
                })?;
            return QuantumState::new(n, l as i64);
        }
        if let Some(caps) = PAIR_RE.captures(s) {
            let n = parse_quantum_number(&caps[1])?;
            let l = parse_quantum_number(&caps[2])?;
            return QuantumState::new(n, l);
        }
        Err(RadialError::MalformedInput {
            input: s.to_string(),
        })
    }
}

/// Parse one integer quantum number typed by a user.
pub fn parse_quantum_number(text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| RadialError::MalformedInput {
            input: text.trim().to_string(),
        })
}

/// ln(k!) as a sum of logarithms; stays finite where k! itself would overflow.
pub fn ln_factorial(k: u32) -> f64 {
    (2..=k).map(|i| f64::from(i).ln()).sum()
}

fn ln_normalization(state: QuantumState, a0: f64) -> f64 {
    let n_f = f64::from(state.n);
    0.5 * (3.0 * (2.0 / (n_f * a0)).ln() + ln_factorial(state.n - state.l - 1)
        - (2.0 * n_f).ln()
        - ln_factorial(state.n + state.l))
}

/// Normalization constant:
/// sqrt((2 / (n a0))^3 * (n-l-1)! / (2n (n+l)!))
pub fn normalization(state: QuantumState, a0: f64) -> f64 {
    ln_normalization(state, a0).exp()
}

/// Generalized Laguerre polynomial L^alpha_k(x) by three-term recurrence
pub fn laguerre_polynomial(x: f64, k: u32, alpha: u32) -> f64 {
    if k == 0 {
        return 1.0;
    }

    let alpha_f = f64::from(alpha);
    let mut l0 = 1.0;
    let mut l1 = 1.0 + alpha_f - x;

    for i in 2..=k {
        let i_f = f64::from(i);
        let l_new = ((2.0 * i_f - 1.0 + alpha_f - x) * l1 - (i_f - 1.0 + alpha_f) * l0) / i_f;
        l0 = l1;
        l1 = l_new;
    }

    l1
}

/// R_nl and P for one state, with the normalization computed once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialEvaluator {
    state: QuantumState,
    a0: f64,
    ln_norm: f64,
}

impl RadialEvaluator {
    pub fn new(state: QuantumState, a0: f64) -> Self {
        RadialEvaluator {
            state,
            a0,
            ln_norm: ln_normalization(state, a0),
        }
    }

    pub fn state(&self) -> QuantumState {
        self.state
    }

    pub fn normalization(&self) -> f64 {
        self.ln_norm.exp()
    }

    /// R_nl(r), r in the same unit as `a0`.
    ///
    /// The normalization, the rho^l power and the exp(-rho/2) envelope are
    /// combined in the log domain before the polynomial is applied, so large n
    /// does not overflow through the factorials.
    pub fn wavefunction(&self, r: f64) -> f64 {
        debug_assert!(r >= 0.0, "radial distance must be non-negative, got {r}");

        let QuantumState { n, l } = self.state;
        let rho = 2.0 * r / (f64::from(n) * self.a0);
        let poly = laguerre_polynomial(rho, self.state.radial_nodes(), 2 * l + 1);

        let ln_envelope = if l == 0 {
            // rho^0 = 1, including at r = 0
            self.ln_norm - rho / 2.0
        } else if rho == 0.0 {
            return 0.0;
        } else {
            self.ln_norm + f64::from(l) * rho.ln() - rho / 2.0
        };

        ln_envelope.exp() * poly
    }

    /// P(r) = r^2 |R_nl(r)|^2
    pub fn density(&self, r: f64) -> f64 {
        probability_from_wavefunction(r, self.wavefunction(r))
    }
}

/// Radial wavefunction R_nl(r) for hydrogen, r in the same unit as `a0`.
pub fn radial_wavefunction(r: f64, state: QuantumState, a0: f64) -> f64 {
    RadialEvaluator::new(state, a0).wavefunction(r)
}

/// Radial probability density P(r) = r^2 |R_nl(r)|^2
pub fn radial_probability_density(r: f64, state: QuantumState, a0: f64) -> f64 {
    probability_from_wavefunction(r, radial_wavefunction(r, state, a0))
}

/// P from an already evaluated R at the same r.
pub fn probability_from_wavefunction(r: f64, wavefunction: f64) -> f64 {
    r * r * wavefunction.abs().powi(2)
}

/// Element-wise R_nl over a distance sequence.
pub fn radial_wavefunction_grid(rs: &[f64], state: QuantumState, a0: f64) -> Vec<f64> {
    let evaluator = RadialEvaluator::new(state, a0);
    rs.iter().map(|&r| evaluator.wavefunction(r)).collect()
}

/// Element-wise P over a distance sequence.
pub fn radial_probability_density_grid(rs: &[f64], state: QuantumState, a0: f64) -> Vec<f64> {
    let evaluator = RadialEvaluator::new(state, a0);
    rs.iter().map(|&r| evaluator.density(r)).collect()
}
