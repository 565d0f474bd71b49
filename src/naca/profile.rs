//! Surface profile generation.
//!
//! Both families share the classic thickness envelope and differ only in
//! their camber line. The generators are pure functions: same parameters,
//! same profile, no shared state between calls.

use serde::{Deserialize, Serialize};

use crate::naca::designation::{CamberLine, Designation};
use crate::naca::error::FoilResult;
use crate::naca::stations;

/// A closed airfoil section boundary.
///
/// `x` and `y` are parallel sequences of length `2 * stations`. Indices
/// `0..stations` hold the upper surface from the leading edge to the
/// trailing edge; indices `stations..` hold the lower surface at the same
/// stations in reverse order. Walking the sequence end to end therefore
/// traces one continuous loop around the section, ready for polyline
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirfoilProfile {
    /// Chordwise coordinates (fraction of chord).
    pub x: Vec<f64>,
    /// Offsets from the chord line (fraction of chord).
    pub y: Vec<f64>,
}

impl AirfoilProfile {
    /// Number of boundary points (`2 * stations`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` if the profile holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Number of chordwise stations per surface.
    #[must_use]
    pub fn stations(&self) -> usize {
        self.x.len() / 2
    }

    /// Iterates over the boundary points in loop order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Upper surface points, leading edge to trailing edge.
    #[must_use]
    pub fn upper(&self) -> (&[f64], &[f64]) {
        let s = self.stations();
        (&self.x[..s], &self.y[..s])
    }

    /// Lower surface points, trailing edge back to the leading edge.
    #[must_use]
    pub fn lower(&self) -> (&[f64], &[f64]) {
        let s = self.stations();
        (&self.x[s..], &self.y[s..])
    }
}

/// Half-thickness of the symmetric envelope at station `x`:
///
/// `yt = (t/0.2)(0.2969√x − 0.1260x − 0.3516x² + 0.2843x³ − 0.1015x⁴)`
///
/// added above and subtracted below the camber line.
fn thickness_envelope(t: f64, x: f64) -> f64 {
    let x2 = x * x;
    let x3 = x2 * x;
    let x4 = x3 * x;
    (t / 0.2) * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x2 + 0.2843 * x3 - 0.1015 * x4)
}

/// 4-digit camber line at station `x`.
///
/// Two parabolic arcs meeting at the maximum-camber station `p`:
///
/// - `x < p`: `yc = (m/p²)(2px − x²)`
/// - `x ≥ p`: `yc = (m/(1−p)²)((1−2p) + 2px − x²)`
///
/// A symmetric section (`m = 0`) stays on the chord line regardless of
/// `p`, so `p = 0` never divides by zero.
fn camber_four_digit(m: f64, p: f64, x: f64) -> f64 {
    if m == 0.0 {
        0.0
    } else if x < p {
        (m / (p * p)) * (2.0 * p * x - x * x)
    } else {
        (m / ((1.0 - p) * (1.0 - p))) * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x)
    }
}

/// 5-digit camber line at station `x`.
///
/// Cubic forward of the breakpoint `m`, linear run-out behind it:
///
/// - `x ≤ m`: `yc = (k1/6)(x³ − 3mx² + m²(3−m)x)`
/// - `x > m`: `yc = (k1/6)m³(1 − x)`
fn camber_five_digit(m: f64, k1: f64, x: f64) -> f64 {
    if x > m {
        (k1 / 6.0) * m * m * m * (1.0 - x)
    } else {
        (k1 / 6.0) * (x * x * x - 3.0 * m * x * x + m * m * (3.0 - m) * x)
    }
}

/// Fills the closed boundary loop for a camber line and thickness.
///
/// Station `i` lands at index `i` (upper surface) and at the mirrored
/// index `2·stations − 1 − i` (lower surface), closing the loop through
/// the trailing edge.
fn surface_loop(
    camber: impl Fn(f64) -> f64,
    t: f64,
    station_count: usize,
) -> FoilResult<AirfoilProfile> {
    let chord = stations::taper_sequence(station_count)?;
    let count = 2 * station_count;
    let mut xs = vec![0.0; count];
    let mut ys = vec![0.0; count];

    for (i, &x) in chord.iter().enumerate() {
        let j = count - 1 - i;
        let yc = camber(x);
        let yt = thickness_envelope(t, x);
        xs[i] = x;
        ys[i] = yc + yt;
        xs[j] = x;
        ys[j] = yc - yt;
    }

    Ok(AirfoilProfile { x: xs, y: ys })
}

/// Generates a 4-digit family profile.
///
/// `m` is the maximum camber, `p` its chordwise station and `t` the
/// maximum thickness, all as fractions of chord.
///
/// # Errors
///
/// Returns [`crate::naca::FoilError::TooFewStations`] if `station_count`
/// is below [`stations::MIN_STATIONS`].
pub fn four_digit(m: f64, p: f64, t: f64, station_count: usize) -> FoilResult<AirfoilProfile> {
    surface_loop(|x| camber_four_digit(m, p, x), t, station_count)
}

/// Generates a 5-digit family profile.
///
/// `m` is the camber-line breakpoint, `t` the maximum thickness and `k1`
/// the design-lift constant from the camber table.
///
/// # Errors
///
/// Returns [`crate::naca::FoilError::TooFewStations`] if `station_count`
/// is below [`stations::MIN_STATIONS`].
pub fn five_digit(m: f64, t: f64, k1: f64, station_count: usize) -> FoilResult<AirfoilProfile> {
    surface_loop(|x| camber_five_digit(m, k1, x), t, station_count)
}

/// Generates the profile for a parsed designation.
///
/// Dispatches to the generator matching the designation's camber-line
/// family.
///
/// # Errors
///
/// Returns [`crate::naca::FoilError::TooFewStations`] if `station_count`
/// is below [`stations::MIN_STATIONS`].
pub fn generate(designation: &Designation, station_count: usize) -> FoilResult<AirfoilProfile> {
    let params = &designation.parameters;
    match params.camber {
        CamberLine::FourDigit {
            max_camber,
            position,
        } => four_digit(max_camber, position, params.thickness, station_count),
        CamberLine::FiveDigit { max_camber, k1, .. } => {
            five_digit(max_camber, params.thickness, k1, station_count)
        }
    }
}
