//! Generator properties checked against an independent evaluation of the
//! published section equations.

use naca_foil::naca::{profile, stations, Designation};

/// Straight-line evaluation of the 4-digit equations, kept deliberately
/// separate from the library's generator.
fn reference_four_digit(m: f64, p: f64, t: f64, x: f64) -> (f64, f64) {
    let yc = if m == 0.0 {
        0.0
    } else if x < p {
        m / (p * p) * (2.0 * p * x - x * x)
    } else {
        m / ((1.0 - p) * (1.0 - p)) * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x)
    };
    let yt = t / 0.2
        * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
            - 0.1015 * x.powi(4));
    (yc, yt)
}

/// Straight-line evaluation of the 5-digit camber line.
fn reference_five_digit_camber(m: f64, k1: f64, x: f64) -> f64 {
    if x > m {
        k1 / 6.0 * m.powi(3) * (1.0 - x)
    } else {
        k1 / 6.0 * (x.powi(3) - 3.0 * m * x.powi(2) + m * m * (3.0 - m) * x)
    }
}

#[test]
fn sampler_spans_the_chord_for_all_valid_counts() {
    for count in [5, 6, 10, 20, 50, 200] {
        let seq = stations::taper_sequence(count).unwrap();
        assert_eq!(seq.len(), count);
        assert!(seq[0].abs() < f64::EPSILON);
        assert!((seq[count - 1] - 1.0).abs() < 1e-12);
        for pair in seq.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}

#[test]
fn flat_plate_stays_on_the_chord_line() {
    let section = profile::four_digit(0.0, 0.4, 0.0, 20).unwrap();
    assert!(section.y.iter().all(|&y| y == 0.0));
    // x still spans the chord both ways.
    assert!((section.x[19] - 1.0).abs() < 1e-12);
    assert!((section.x[20] - 1.0).abs() < 1e-12);
}

#[test]
fn naca_2412_matches_the_reference_equations() {
    let station_count = 20;
    let section = profile::four_digit(0.02, 0.4, 0.12, station_count).unwrap();
    let chord = stations::taper_sequence(station_count).unwrap();

    for (i, &x) in chord.iter().enumerate() {
        let j = 2 * station_count - 1 - i;
        let (yc, yt) = reference_four_digit(0.02, 0.4, 0.12, x);
        assert!(
            (section.y[i] - (yc + yt)).abs() < 1e-12,
            "upper surface mismatch at station {i}"
        );
        assert!(
            (section.y[j] - (yc - yt)).abs() < 1e-12,
            "lower surface mismatch at station {i}"
        );
        assert!((section.x[i] - x).abs() < f64::EPSILON);
        assert!((section.x[j] - x).abs() < f64::EPSILON);
    }
}

#[test]
fn naca_2412_peaks_near_third_chord() {
    let station_count = 20;
    let section = profile::four_digit(0.02, 0.4, 0.12, station_count).unwrap();

    let mut best_gap = 0.0;
    let mut best_x = 0.0;
    for i in 0..station_count {
        let j = 2 * station_count - 1 - i;
        let gap = section.y[i] - section.y[j];
        if gap > best_gap {
            best_gap = gap;
            best_x = section.x[i];
        }
    }

    // The thickness envelope peaks around 30% chord at the full design
    // thickness of the section.
    assert!(
        (0.2..=0.45).contains(&best_x),
        "thickest station at x = {best_x}"
    );
    assert!(
        (best_gap - 0.12).abs() < 0.005,
        "maximum thickness {best_gap} should be close to 0.12"
    );
}

#[test]
fn symmetric_sections_mirror_about_the_chord() {
    for t in [0.06, 0.12, 0.24] {
        let section = profile::four_digit(0.0, 0.0, t, 30).unwrap();
        let count = section.len();
        for i in 0..section.stations() {
            let j = count - 1 - i;
            assert!((section.y[i] + section.y[j]).abs() < 1e-15);
        }
    }
}

#[test]
fn surfaces_never_cross_between_the_chord_ends() {
    let station_count = 20;
    let section = profile::four_digit(0.02, 0.4, 0.12, station_count).unwrap();
    for i in 1..station_count {
        let j = 2 * station_count - 1 - i;
        assert!(
            section.y[i] > section.y[j],
            "upper surface must stay above the lower at station {i}"
        );
    }
}

#[test]
fn naca_23012_matches_the_reference_camber_line() {
    let station_count = 20;
    let (m, k1, t) = (0.2025, 15.65, 0.12);
    let section = profile::five_digit(m, t, k1, station_count).unwrap();
    let chord = stations::taper_sequence(station_count).unwrap();

    for (i, &x) in chord.iter().enumerate() {
        let j = 2 * station_count - 1 - i;
        let yc = reference_five_digit_camber(m, k1, x);
        let (_, yt) = reference_four_digit(0.0, 0.0, t, x);
        assert!((section.y[i] - (yc + yt)).abs() < 1e-12);
        assert!((section.y[j] - (yc - yt)).abs() < 1e-12);
    }
}

#[test]
fn minimum_station_count_builds_a_sound_loop() {
    let section = profile::four_digit(0.02, 0.4, 0.12, 5).unwrap();
    assert_eq!(section.len(), 10);
    assert!(section.points().all(|(x, y)| x.is_finite() && y.is_finite()));
    // Forward then reversed second half walks one continuous loop.
    for i in 0..5 {
        assert!((section.x[i] - section.x[9 - i]).abs() < f64::EPSILON);
    }
}

#[test]
fn generation_is_deterministic() {
    let foil = Designation::parse("NACA-X-5-23012").unwrap();
    let a = profile::generate(&foil, 40).unwrap();
    let b = profile::generate(&foil, 40).unwrap();
    assert_eq!(a, b);
}
