//! naca-foil: NACA airfoil profile generation.
//!
//! This library turns a textual airfoil designation into a 2-D coordinate
//! profile of the section's boundary, ready for plotting or polyline
//! construction.
//!
//! # Architecture
//!
//! A designation in datcom form (`NACA-<variant>-<family>-<digits>`) is
//! parsed into shape parameters, evaluated through the closed-form camber
//! and thickness equations of the selected family, and emitted in one of
//! three formats:
//!
//! - **Parsing**: family code and digit groups at fixed offsets, with the
//!   1-digit/6-series/supercritical families degrading to symmetric
//!   4-digit sections
//! - **Generation**: 4-digit and 5-digit camber lines over a shared
//!   thickness envelope, sampled at leading-edge-clustered stations
//! - **Output**: plain coordinate listing, AC3D polyline object, or JSON
//!
//! # Modules
//!
//! - [`naca`] — designation parsing and profile generation
//! - [`output`] — coordinate listing, AC3D and JSON emitters
//! - [`config`] — configuration loading and validation
//! - [`error`] — configuration error types
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

pub mod config;
pub mod error;
pub mod naca;
pub mod output;
