//! Chordwise station sampling.
//!
//! Surface curvature is concentrated at the leading edge, so stations are
//! not spaced evenly along the chord. The sampler uses a geometric taper:
//! successive values of a multiplier `k` (starting at 1, scaled by
//! `2^(1/(count-1))` each step) are mapped through `(k - 1)²`, which pins
//! the first station to 0, the last to 1, and packs the remainder towards
//! the leading edge.

use crate::naca::error::{FoilError, FoilResult};

/// Smallest station count that still yields a usable closed loop.
pub const MIN_STATIONS: usize = 5;

/// Generates `count` chordwise stations in `[0, 1]`.
///
/// The returned sequence is strictly increasing, starts at exactly 0 and
/// ends at 1 (to within floating-point rounding of the taper ratio).
///
/// # Errors
///
/// Returns [`FoilError::TooFewStations`] if `count` is below
/// [`MIN_STATIONS`].
#[allow(clippy::cast_precision_loss)] // station counts are far below 2^52
pub fn taper_sequence(count: usize) -> FoilResult<Vec<f64>> {
    if count < MIN_STATIONS {
        return Err(FoilError::TooFewStations {
            requested: count,
            minimum: MIN_STATIONS,
        });
    }

    let ratio = 2.0_f64.powf(1.0 / (count - 1) as f64);
    let mut k = 1.0_f64;
    let mut stations = Vec::with_capacity(count);
    for _ in 0..count {
        stations.push((k - 1.0) * (k - 1.0));
        k *= ratio;
    }
    Ok(stations)
}
