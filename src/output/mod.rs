//! Profile emitters.
//!
//! A generated [`AirfoilProfile`](crate::naca::AirfoilProfile) is handed
//! to one of three writers:
//!
//! - [`raw`] — two-column coordinate listing, one point per line
//! - [`ac3d`] — AC3D object file with the section as a closed polyline
//! - [`json`] — JSON document for downstream tooling
//!
//! All writers take any [`std::io::Write`] sink and emit the full loop in
//! one pass.

pub mod ac3d;
pub mod json;
pub mod raw;

use std::fmt;
use std::io;

use crate::naca::AirfoilProfile;

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Two-column coordinate listing.
    #[default]
    Raw,
    /// AC3D polyline object.
    Ac3d,
    /// JSON profile document.
    Json,
}

impl OutputFormat {
    /// Parses a format name from a string.
    ///
    /// Accepts: "raw"/"r", "ac3d"/"a", "json"/"j" (case-insensitive).
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "r" | "raw" => Some(Self::Raw),
            "a" | "ac3d" => Some(Self::Ac3d),
            "j" | "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => write!(f, "raw"),
            Self::Ac3d => write!(f, "ac3d"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Writes `profile` to `out` in the selected format.
///
/// `name` labels the profile in formats that carry one (AC3D, JSON).
///
/// # Errors
///
/// Returns any I/O error raised by the sink.
pub fn write_profile<W: io::Write>(
    out: &mut W,
    format: OutputFormat,
    profile: &AirfoilProfile,
    name: &str,
) -> io::Result<()> {
    match format {
        OutputFormat::Raw => raw::write(out, profile),
        OutputFormat::Ac3d => ac3d::write(out, profile, name),
        OutputFormat::Json => json::write(out, profile, name),
    }
}
