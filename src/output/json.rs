//! JSON profile document.
//!
//! Serialises a profile for downstream tooling:
//!
//! ```json
//! {
//!   "name": "NACA-X-4-2412",
//!   "stations": 20,
//!   "x": [0.0, ...],
//!   "y": [0.0, ...]
//! }
//! ```
//!
//! Coordinates keep the loop order of the profile itself.

use std::io;

use serde::Serialize;

use crate::naca::AirfoilProfile;

/// Serialised profile document.
#[derive(Debug, Serialize)]
struct ProfileDocument<'a> {
    /// Designation the profile was generated from.
    name: &'a str,
    /// Chordwise stations per surface.
    stations: usize,
    /// Chordwise coordinates in loop order.
    x: &'a [f64],
    /// Chord-line offsets in loop order.
    y: &'a [f64],
}

/// Writes the profile as a pretty-printed JSON document named `name`.
///
/// # Errors
///
/// Returns any I/O error raised by the sink or by serialisation.
pub fn write<W: io::Write>(out: &mut W, profile: &AirfoilProfile, name: &str) -> io::Result<()> {
    let document = ProfileDocument {
        name,
        stations: profile.stations(),
        x: &profile.x,
        y: &profile.y,
    };
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)?;
    Ok(())
}
