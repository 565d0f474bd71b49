//! NACA airfoil designation parsing and profile generation.
//!
//! A designation string in datcom form (`NACA-<variant>-<family>-<digits>`)
//! is parsed into family-specific shape parameters, which drive one of two
//! closed-form generators:
//!
//! - **4-digit** (`NACA-X-4-2412`): parabolic camber line from the first
//!   two digits, thickness from the last two.
//! - **5-digit** (`NACA-X-5-23012`): cubic camber line with a tabulated
//!   design-lift constant.
//!
//! The 1-series, 6-series and supercritical families are accepted and
//! degrade to symmetric 4-digit sections; unknown family codes degrade to
//! a flat plate. Degradations are diagnosed through `tracing`, not
//! reported as errors.
//!
//! # Example
//!
//! ```
//! use naca_foil::naca::{profile, Designation};
//!
//! let foil = Designation::parse("NACA-X-4-2412").unwrap();
//! let section = profile::generate(&foil, 20).unwrap();
//! assert_eq!(section.len(), 40);
//! ```

pub mod designation;
pub mod error;
pub mod profile;
pub mod stations;

pub use designation::{CamberLine, Designation, Family, ShapeParameters};
pub use error::{FoilError, FoilResult};
pub use profile::AirfoilProfile;

/// Parses a designation and generates its profile in one call.
///
/// # Errors
///
/// Fails if the designation cannot be parsed (see [`Designation::parse`])
/// or if `station_count` is below [`stations::MIN_STATIONS`].
pub fn generate(name: &str, station_count: usize) -> FoilResult<AirfoilProfile> {
    let foil = Designation::parse(name)?;
    profile::generate(&foil, station_count)
}
