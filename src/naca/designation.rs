//! Datcom designation parsing.
//!
//! Airfoils are named in datcom form: the literal `NACA`, a hyphen, a
//! single variant character, a hyphen, the family code, a hyphen and the
//! family-specific digit group:
//!
//! ```text
//! N A C A - <variant> - <family> - <digits...>
//! 0 1 2 3 4     5     6     7    8  9 ...
//! ```
//!
//! The family code selects how the digit group is read:
//!
//! | code | family        | digit group                                     |
//! |------|---------------|-------------------------------------------------|
//! | `1`  | 1-series      | ignored; seeded symmetric 16% section           |
//! | `4`  | 4-digit       | camber, camber station, two-digit thickness     |
//! | `5`  | 5-digit       | design lift, camber station, reflex, thickness  |
//! | `6`  | 6-series      | thickness only, located past optional `-`/`A`   |
//! | `S`  | supercritical | ignored; seeded symmetric 16% section           |
//!
//! The 1-series, 6-series and supercritical families have no camber line
//! of their own here; they degrade to the 4-digit equations with a
//! symmetric camber line. Unknown family codes degrade further to a flat
//! plate. Both degradations are diagnosed through `tracing`, never
//! reported as errors.

use tracing::{debug, trace, warn};

use crate::naca::error::{FoilError, FoilResult};

/// Character offset of the family code.
const FAMILY_OFFSET: usize = 7;

/// Character offset where the family digit group begins.
const DIGITS_OFFSET: usize = 9;

/// Seed shape parameters, used by families that carry no camber digits of
/// their own (1-series, 6-series, supercritical). Derived from packing the
/// legacy digit group `16` through truncating integer arithmetic, which
/// leaves a symmetric section: m = 0, p = 0, t = 0.16.
const SEED_CAMBER: f64 = 0.0;
const SEED_CAMBER_POSITION: f64 = 0.0;
const SEED_THICKNESS: f64 = 0.16;

/// Airfoil family, read from the designation's family code character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// 1-series (`1`). Degrades to a seeded symmetric 4-digit section.
    Series1,
    /// 4-digit (`4`).
    FourDigit,
    /// 5-digit (`5`).
    FiveDigit,
    /// 6-series (`6`). Thickness is honoured, the laminar-flow camber
    /// line is not; degrades to a symmetric 4-digit section.
    Series6,
    /// Supercritical (`S`). Degrades to a seeded symmetric 4-digit section.
    Supercritical,
    /// Any other code. Degrades to a flat plate.
    Unknown(char),
}

impl Family {
    /// Maps a family code character to its family.
    #[must_use]
    pub const fn from_code(code: char) -> Self {
        match code {
            '1' => Self::Series1,
            '4' => Self::FourDigit,
            '5' => Self::FiveDigit,
            '6' => Self::Series6,
            'S' => Self::Supercritical,
            other => Self::Unknown(other),
        }
    }

    /// Returns the family code character.
    #[must_use]
    pub const fn code(&self) -> char {
        match self {
            Self::Series1 => '1',
            Self::FourDigit => '4',
            Self::FiveDigit => '5',
            Self::Series6 => '6',
            Self::Supercritical => 'S',
            Self::Unknown(other) => *other,
        }
    }
}

/// Camber-line parameters, keyed by the family of defining equations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CamberLine {
    /// 4-digit polynomial camber line.
    FourDigit {
        /// Maximum camber `m` (fraction of chord).
        max_camber: f64,
        /// Chordwise station `p` of the maximum camber (fraction of chord).
        position: f64,
    },
    /// 5-digit camber line.
    FiveDigit {
        /// Camber-line breakpoint `m` (fraction of chord).
        max_camber: f64,
        /// Design-lift scaling constant.
        k1: f64,
        /// Reflex flag from the third digit. Carried for completeness;
        /// the generator does not alter the camber line for reflexed
        /// sections.
        reflex: bool,
    },
}

/// Shape parameters extracted from a designation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParameters {
    /// Camber-line parameters.
    pub camber: CamberLine,
    /// Maximum thickness `t` (fraction of chord).
    pub thickness: f64,
}

impl ShapeParameters {
    /// The seeded symmetric 16% section.
    const fn seed() -> Self {
        Self {
            camber: CamberLine::FourDigit {
                max_camber: SEED_CAMBER,
                position: SEED_CAMBER_POSITION,
            },
            thickness: SEED_THICKNESS,
        }
    }

    /// A flat plate on the chord line.
    const fn flat_plate() -> Self {
        Self {
            camber: CamberLine::FourDigit {
                max_camber: 0.0,
                position: SEED_CAMBER_POSITION,
            },
            thickness: 0.0,
        }
    }
}

/// A parsed airfoil designation.
#[derive(Debug, Clone, PartialEq)]
pub struct Designation {
    /// The designation string as given.
    pub name: String,
    /// Family selected by the code character.
    pub family: Family,
    /// Shape parameters derived from the digit group.
    pub parameters: ShapeParameters,
}

impl Designation {
    /// Parses a datcom designation string.
    ///
    /// # Errors
    ///
    /// - [`FoilError::NotNaca`] if the string does not start with `NACA`.
    ///   This is the benign "not for us" signal; the caller decides what
    ///   to do with the input.
    /// - [`FoilError::Truncated`] if the string ends before a required
    ///   character offset.
    /// - [`FoilError::MalformedDigit`] if a digit position holds a
    ///   non-digit character.
    pub fn parse(name: &str) -> FoilResult<Self> {
        if !name.starts_with("NACA") {
            return Err(FoilError::not_naca(name));
        }

        let family = Family::from_code(char::from(byte_at(name, FAMILY_OFFSET)?));
        let parameters = match family {
            Family::Series1 | Family::Supercritical => {
                debug!(code = %family.code(), "seeded symmetric section");
                ShapeParameters::seed()
            }
            Family::FourDigit => parse_four_digit(name)?,
            Family::FiveDigit => parse_five_digit(name)?,
            Family::Series6 => parse_six_series(name)?,
            Family::Unknown(code) => {
                warn!(%name, %code, "unknown airfoil family, degrading to a flat plate");
                ShapeParameters::flat_plate()
            }
        };

        debug!(%name, ?parameters, "parsed designation");
        Ok(Self {
            name: name.to_owned(),
            family,
            parameters,
        })
    }
}

/// Reads the byte at `offset`, or fails with a truncation error.
fn byte_at(name: &str, offset: usize) -> FoilResult<u8> {
    name.as_bytes()
        .get(offset)
        .copied()
        .ok_or_else(|| FoilError::truncated(name, offset + 1))
}

/// Reads a single decimal digit at `offset`.
fn digit_at(name: &str, offset: usize) -> FoilResult<u32> {
    let byte = byte_at(name, offset)?;
    char::from(byte)
        .to_digit(10)
        .ok_or_else(|| FoilError::malformed_digit(name, offset, char::from(byte)))
}

/// Reads a two-digit decimal group starting at `offset`.
fn two_digits_at(name: &str, offset: usize) -> FoilResult<u32> {
    Ok(digit_at(name, offset)? * 10 + digit_at(name, offset + 1)?)
}

/// Reads `MPTT`: camber /100, camber station /10, thickness /100.
fn parse_four_digit(name: &str) -> FoilResult<ShapeParameters> {
    let max_camber = f64::from(digit_at(name, DIGITS_OFFSET)?) / 100.0;
    let position = f64::from(digit_at(name, DIGITS_OFFSET + 1)?) / 10.0;
    let thickness = f64::from(two_digits_at(name, DIGITS_OFFSET + 2)?) / 100.0;
    debug!(m = max_camber, p = position, t = thickness, "four-digit parameters");
    Ok(ShapeParameters {
        camber: CamberLine::FourDigit {
            max_camber,
            position,
        },
        thickness,
    })
}

/// Camber-line constants for the 5-digit family.
///
/// Maps the camber-station digit to the camber breakpoint `m` and the
/// design-lift constant `k1`:
///
/// | digit | m      | k1    |
/// |-------|--------|-------|
/// | 1     | 0.0580 | 361.4 |
/// | 2     | 0.1260 | 51.65 |
/// | 3     | 0.2025 | 15.65 |
/// | 4     | 0.2900 | 6.643 |
/// | 5     | 0.3910 | 3.230 |
const fn camber_constants(digit: u32) -> Option<(f64, f64)> {
    match digit {
        1 => Some((0.0580, 361.4)),
        2 => Some((0.1260, 51.65)),
        3 => Some((0.2025, 15.65)),
        4 => Some((0.2900, 6.643)),
        5 => Some((0.3910, 3.230)),
        _ => None,
    }
}

/// Reads `LPQTT`: design lift, camber station, reflex flag, thickness.
fn parse_five_digit(name: &str) -> FoilResult<ShapeParameters> {
    let lift_digit = digit_at(name, DIGITS_OFFSET)?;
    trace!(
        digit = lift_digit,
        coefficient = f64::from(lift_digit) * 0.15,
        "design lift"
    );

    // Thickness first, so a bad camber-station digit can zero it below.
    let mut thickness = f64::from(two_digits_at(name, DIGITS_OFFSET + 3)?) / 100.0;
    trace!(t = thickness, "five-digit thickness");

    let station_digit = digit_at(name, DIGITS_OFFSET + 1)?;
    trace!(
        p = f64::from(station_digit) / 20.0,
        "maximum camber station"
    );
    let (max_camber, k1) = match camber_constants(station_digit) {
        Some(pair) => pair,
        None => {
            warn!(%name, digit = station_digit, "bad camber station digit");
            thickness = 0.0;
            (0.0, 0.0)
        }
    };

    let reflex = digit_at(name, DIGITS_OFFSET + 2)? != 0;
    trace!(reflex, "camber line reflex flag");

    debug!(m = max_camber, k1, t = thickness, "five-digit parameters");
    Ok(ShapeParameters {
        camber: CamberLine::FiveDigit {
            max_camber,
            k1,
            reflex,
        },
        thickness,
    })
}

/// Locates and reads the 6-series two-digit thickness group.
///
/// The group sits past the leading series/camber digits, which may be
/// split off by a `-` or an `A` (`NACA-V-6-631-012`, `NACA-W-6-64210.68`,
/// `NACA-W-6-64-210.68` all resolve). Camber stays symmetric.
fn parse_six_series(name: &str) -> FoilResult<ShapeParameters> {
    let mut i = DIGITS_OFFSET + 2;
    if matches!(byte_at(name, i)?, b'-' | b'A') {
        i += 1;
    }
    i += 1;
    if matches!(byte_at(name, i)?, b'-' | b'A') {
        i += 2;
    }
    let thickness = f64::from(two_digits_at(name, i)?) / 100.0;
    trace!(t = thickness, offset = i, "six-series thickness");
    debug!(
        m = SEED_CAMBER,
        p = SEED_CAMBER_POSITION,
        t = thickness,
        "six-series parameters"
    );
    Ok(ShapeParameters {
        camber: CamberLine::FourDigit {
            max_camber: SEED_CAMBER,
            position: SEED_CAMBER_POSITION,
        },
        thickness,
    })
}
