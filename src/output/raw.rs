//! Two-column coordinate listing.
//!
//! One `x y` pair per line, eight decimal places, full loop order (upper
//! surface leading edge to trailing edge, then lower surface back).

use std::io;

use crate::naca::AirfoilProfile;

/// Writes the profile as a plain coordinate listing.
///
/// # Errors
///
/// Returns any I/O error raised by the sink.
pub fn write<W: io::Write>(out: &mut W, profile: &AirfoilProfile) -> io::Result<()> {
    for (x, y) in profile.points() {
        writeln!(out, "{x:.8} {y:.8}")?;
    }
    Ok(())
}
