//! AC3D object emitter.
//!
//! Emits the section as a single closed polyline in an AC3D (`AC3Db`)
//! document:
//!
//! ```text
//! AC3Db
//! MATERIAL "white" ...
//! OBJECT world
//! kids 1
//! OBJECT polyline
//! name "<designation>"
//! crease 89.0
//! numvert <2·stations − 1>
//! <x> 0.0 <y>          // one line per vertex
//! numsurf 1
//! SURF 0x31
//! mat 0
//! refs <2·stations − 1>
//! <index> 0.0 0.0      // one line per vertex reference
//! kids 0
//! ```
//!
//! The loop's final point duplicates the leading-edge vertex it started
//! from, so the emitter drops it and closes the surface through the first
//! vertex instead. Vertex count is `2·stations − 1` throughout.

use std::io;

use crate::naca::AirfoilProfile;

/// Writes the profile as an AC3D polyline object named `name`.
///
/// # Errors
///
/// Returns any I/O error raised by the sink.
pub fn write<W: io::Write>(out: &mut W, profile: &AirfoilProfile, name: &str) -> io::Result<()> {
    let count = profile.len().saturating_sub(1);

    writeln!(out, "AC3Db")?;
    writeln!(
        out,
        "MATERIAL \"white\" rgb 0.788 0.788 0.788  amb 0.788 0.788 0.788  emis 0 0 0  spec 1 1 1  shi 65  trans 0"
    )?;
    writeln!(out, "OBJECT world")?;
    writeln!(out, "kids 1")?;
    writeln!(out, "OBJECT polyline")?;
    writeln!(out, "name \"{name}\"")?;
    writeln!(out, "crease 89.0")?;
    writeln!(out, "numvert {count}")?;
    for (x, y) in profile.points().take(count) {
        writeln!(out, "{x:.8} 0.0 {y:.8}")?;
    }
    writeln!(out, "numsurf 1")?;
    writeln!(out, "SURF 0x31")?;
    writeln!(out, "mat 0")?;
    writeln!(out, "refs {count}")?;
    for i in 0..count {
        writeln!(out, "{i} 0.0 0.0")?;
    }
    writeln!(out, "kids 0")?;
    Ok(())
}
