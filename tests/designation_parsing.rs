//! End-to-end designation handling across the airfoil families.

use naca_foil::naca::{self, profile, CamberLine, Designation, Family, FoilError};

#[test]
fn non_naca_strings_are_reported_without_generation() {
    for name in ["CLARK-Y", "naca-x-4-2412", "", "NAC"] {
        let err = Designation::parse(name).unwrap_err();
        assert!(matches!(err, FoilError::NotNaca { .. }), "input: {name:?}");
    }
}

#[test]
fn truncated_designations_fail_cleanly() {
    for name in ["NACA", "NACA-X", "NACA-X-4", "NACA-X-4-24"] {
        let err = naca::generate(name, 20).unwrap_err();
        assert!(
            matches!(err, FoilError::Truncated { .. }),
            "input: {name:?} gave {err}"
        );
    }
}

#[test]
fn malformed_digit_groups_fail_cleanly() {
    let err = naca::generate("NACA-X-4-24xx", 20).unwrap_err();
    assert!(matches!(err, FoilError::MalformedDigit { .. }));

    let err = naca::generate("NACA-X-5-2301!", 20).unwrap_err();
    assert!(matches!(err, FoilError::MalformedDigit { .. }));
}

#[test]
fn four_digit_designation_drives_the_generator() {
    let foil = Designation::parse("NACA-X-4-2412").unwrap();
    assert_eq!(foil.family, Family::FourDigit);

    let section = profile::generate(&foil, 20).unwrap();
    assert_eq!(section.len(), 40);
    // Cambered: the upper surface reaches higher than the lower surface dips.
    let top = section.y.iter().cloned().fold(f64::MIN, f64::max);
    let bottom = section.y.iter().cloned().fold(f64::MAX, f64::min);
    assert!(top > -bottom);
}

#[test]
fn five_digit_designation_uses_the_camber_table() {
    let foil = Designation::parse("NACA-X-5-23012").unwrap();
    let CamberLine::FiveDigit { max_camber, k1, .. } = foil.parameters.camber else {
        panic!("expected a five-digit camber line");
    };
    assert!((max_camber - 0.2025).abs() < 1e-12);
    assert!((k1 - 15.65).abs() < 1e-12);

    let section = profile::generate(&foil, 20).unwrap();
    assert_eq!(section.len(), 40);
}

#[test]
fn five_digit_bad_camber_station_degrades_to_a_flat_plate() {
    let section = naca::generate("NACA-X-5-29012", 20).unwrap();
    assert!(section.y.iter().all(|&y| y == 0.0));
}

#[test]
fn series1_degrades_to_a_symmetric_16_percent_section() {
    let section = naca::generate("NACA-X-1-16009", 20).unwrap();
    let count = section.len();
    let mut max_gap = 0.0_f64;
    for i in 0..section.stations() {
        let j = count - 1 - i;
        // Symmetric about the chord line.
        assert!((section.y[i] + section.y[j]).abs() < 1e-15);
        max_gap = max_gap.max(section.y[i] - section.y[j]);
    }
    assert!((max_gap - 0.16).abs() < 0.01);
}

#[test]
fn six_series_honours_thickness_only() {
    let section = naca::generate("NACA-V-6-631-012", 20).unwrap();
    let count = section.len();
    for i in 0..section.stations() {
        let j = count - 1 - i;
        assert!((section.y[i] + section.y[j]).abs() < 1e-15);
    }

    // Same thickness, different spellings of the separator.
    let spaced = naca::generate("NACA-W-6-64-210.68", 20).unwrap();
    let packed = naca::generate("NACA-W-6-64210.68", 20).unwrap();
    assert_eq!(spaced, packed);
}

#[test]
fn supercritical_matches_the_series1_fallback() {
    let s = naca::generate("NACA-X-S-1234", 20).unwrap();
    let one = naca::generate("NACA-X-1-16009", 20).unwrap();
    assert_eq!(s, one);
}

#[test]
fn unknown_family_degrades_to_a_flat_plate() {
    let foil = Designation::parse("NACA-X-7-2412").unwrap();
    assert_eq!(foil.family, Family::Unknown('7'));

    let section = profile::generate(&foil, 20).unwrap();
    assert!(section.y.iter().all(|&y| y == 0.0));
}

#[test]
fn reflex_flag_does_not_change_the_section() {
    let plain = naca::generate("NACA-X-5-23012", 20).unwrap();
    let reflexed = naca::generate("NACA-X-5-23112", 20).unwrap();
    assert_eq!(plain, reflexed);
}
