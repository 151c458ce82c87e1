use super::*;
use crate::division::model::DivisionConfig;
use crate::foundation::core::{EdgePolicy, TargetRange};

const EPS: f64 = 1e-9;

fn division(cfg: DivisionConfig) -> Division {
    let n = cfg.local_fragments.len();
    Division::new(&cfg, TargetRange::new(0, n).unwrap())
}

fn halves() -> Division {
    division(DivisionConfig::default().local_fragments(vec![0.5, 0.5]))
}

#[test]
fn sub_window_midpoints_peak() {
    let d = halves();
    assert!((compute_intensity(0.25, &d, 0) - 1.0).abs() < EPS);
    assert!((compute_intensity(0.75, &d, 1) - 1.0).abs() < EPS);
}

#[test]
fn quarter_of_a_sub_window_follows_sine() {
    let d = halves();
    let expected = (std::f64::consts::FRAC_PI_4).sin();
    assert!((compute_intensity(0.125, &d, 0) - expected).abs() < EPS);
    assert!((compute_intensity(0.625, &d, 1) - expected).abs() < EPS);
}

#[test]
fn inactive_sub_windows_are_exactly_zero() {
    let d = halves();
    assert_eq!(compute_intensity(0.25, &d, 1), 0.0);
    assert_eq!(compute_intensity(0.75, &d, 0), 0.0);
    assert_eq!(compute_intensity(0.5, &d, 1), 0.0);
}

#[test]
fn first_sub_window_is_active_from_its_start_inclusive() {
    let d = halves();
    assert_eq!(compute_intensity(0.0, &d, 0), 0.0);
    let d = division(
        DivisionConfig::default()
            .local_fragments(vec![0.5, 0.5])
            .edges(EdgePolicy::both(true)),
    );
    assert!((compute_intensity(0.0, &d, 0) - 1.0).abs() < EPS);
}

#[test]
fn front_peak_decays_from_max() {
    let d = division(
        DivisionConfig::default()
            .local_fragments(vec![0.5, 0.5])
            .edges(EdgePolicy {
                front_from_peak: true,
                back_to_peak: false,
            }),
    );
    let a = compute_intensity(0.1, &d, 0);
    let b = compute_intensity(0.25, &d, 0);
    let c = compute_intensity(0.4, &d, 0);
    assert!(a > b && b > c);
    assert!((b - std::f64::consts::FRAC_PI_4.cos()).abs() < EPS);
    assert!(compute_intensity(0.5, &d, 0) < 1e-12);
    // back edge unaffected
    assert!((compute_intensity(0.75, &d, 1) - 1.0).abs() < EPS);
}

#[test]
fn back_peak_rises_to_max() {
    let d = division(
        DivisionConfig::default()
            .local_fragments(vec![0.5, 0.5])
            .edges(EdgePolicy {
                front_from_peak: false,
                back_to_peak: true,
            }),
    );
    let a = compute_intensity(0.6, &d, 1);
    let b = compute_intensity(0.8, &d, 1);
    let c = compute_intensity(1.0, &d, 1);
    assert!(a < b && b < c);
    assert!((c - 1.0).abs() < EPS);
}

#[test]
fn interior_sub_windows_always_hump() {
    let d = division(
        DivisionConfig::default()
            .even_split(3)
            .edges(EdgePolicy::both(true)),
    );
    assert_eq!(WindowShape::for_index(&d, 0), WindowShape::Decay);
    assert_eq!(WindowShape::for_index(&d, 1), WindowShape::Hump);
    assert_eq!(WindowShape::for_index(&d, 2), WindowShape::Rise);
    assert!((compute_intensity(0.5, &d, 1) - 1.0).abs() < 1e-6);
}

#[test]
fn single_sub_window_takes_front_branch() {
    let d = division(DivisionConfig::default().edges(EdgePolicy::both(true)));
    assert_eq!(WindowShape::for_index(&d, 0), WindowShape::Decay);
    assert!((compute_intensity(0.0, &d, 0) - 1.0).abs() < EPS);
    assert!(compute_intensity(1.0, &d, 0) < 1e-12);
}

#[test]
fn max_value_scales_output() {
    let d = division(
        DivisionConfig::default()
            .local_fragments(vec![0.5, 0.5])
            .max_value(0.4),
    );
    assert!((compute_intensity(0.25, &d, 0) - 0.4).abs() < EPS);
}

#[test]
fn start_offset_shifts_window() {
    let d = division(
        DivisionConfig::default()
            .global_fragment(0.5)
            .start_fragment(0.5),
    );
    assert_eq!(compute_intensity(0.4, &d, 0), 0.0);
    assert!(compute_intensity(0.5, &d, 0) < 1e-12);
    assert!((compute_intensity(0.75, &d, 0) - 1.0).abs() < EPS);
}

#[test]
fn out_of_domain_inputs_yield_zero() {
    let d = halves();
    for f in [-0.1, 1.1, f64::NAN, f64::INFINITY] {
        assert_eq!(compute_intensity(f, &d, 0), 0.0);
    }
    assert_eq!(compute_intensity(0.25, &d, 2), 0.0);
}

#[test]
fn degenerate_fragments_yield_zero() {
    let empty = division(DivisionConfig::default().local_fragments(Vec::new()));
    assert_eq!(compute_intensity(0.5, &empty, 0), 0.0);

    let zero = division(DivisionConfig::default().local_fragments(vec![0.0, 0.5]));
    assert_eq!(compute_intensity(0.0, &zero, 0), 0.0);
    assert_eq!(compute_intensity(0.1, &zero, 0), 0.0);

    let nan = division(DivisionConfig::default().local_fragments(vec![f64::NAN, 0.5]));
    for f in [0.0, 0.3, 0.6, 1.0] {
        let v = compute_intensity(f, &nan, 1);
        assert!(v.is_finite());
        assert_eq!(v, 0.0);
    }
}

#[test]
fn output_is_bounded_by_max_value() {
    let configs = [
        DivisionConfig::default().even_split(4).max_value(0.7),
        DivisionConfig::default()
            .local_fragments(vec![0.1, 0.6, 0.3])
            .edges(EdgePolicy::both(true))
            .max_value(0.9),
        DivisionConfig::default()
            .global_fragment(0.3)
            .start_fragment(0.2)
            .local_fragments(vec![0.5, 0.5]),
        DivisionConfig::default()
            .global_fragment(0.25)
            .local_fragments(vec![0.5, 0.5])
            .edges(EdgePolicy::both(true)),
    ];
    for cfg in configs {
        let d = division(cfg);
        for step in 0..=400 {
            let f = f64::from(step) / 400.0;
            for i in 0..d.sub_window_count() {
                let v = compute_intensity(f, &d, i);
                assert!(v >= 0.0);
                assert!(v <= d.max_value() + EPS);
            }
        }
    }
}

fn active_count(f: f64, d: &Division) -> usize {
    (0..d.sub_window_count())
        .filter(|&i| compute_intensity(f, d, i) != 0.0)
        .count()
}

#[test]
fn at_most_one_sub_window_is_active() {
    let d = division(DivisionConfig::default().local_fragments(vec![0.2, 0.3, 0.5]));
    for step in 0..=1000 {
        let f = f64::from(step) / 1000.0;
        let active = active_count(f, &d);
        assert!(active <= 1, "fraction {f} has {active} active sub-windows");
    }
}

#[test]
fn neighbours_never_overlap_at_shared_boundaries() {
    let configs = [
        DivisionConfig::default().local_fragments(vec![0.3, 0.3, 0.3, 0.1]),
        DivisionConfig::default().local_fragments(vec![0.1, 0.2, 0.3, 0.4]),
        DivisionConfig::default()
            .global_fragment(0.7)
            .start_fragment(0.1)
            .local_fragments(vec![0.15, 0.35, 0.2, 0.3]),
        DivisionConfig::default()
            .even_split(7)
            .edges(EdgePolicy::both(true)),
    ];
    for cfg in configs {
        let d = division(cfg);
        for k in 1..d.sub_window_count() {
            let at = sub_window_bounds(&d, k).unwrap().start;
            let bits = at.to_bits();
            for n in 0..=64u64 {
                for f in [f64::from_bits(bits + n), f64::from_bits(bits - n)] {
                    let active = active_count(f, &d);
                    assert!(
                        active <= 1,
                        "{:?} at {f}: {active} active sub-windows",
                        d.local_fragments()
                    );
                }
            }
        }
    }
}

#[test]
fn hump_is_continuous_at_boundaries() {
    let d = halves();
    let before = compute_intensity(0.5 - 1e-9, &d, 0);
    let after = compute_intensity(0.5 + 1e-9, &d, 1);
    assert!(before < 1e-6);
    assert!(after < 1e-6);
    let inside = compute_intensity(0.25 - 1e-9, &d, 0);
    assert!((inside - compute_intensity(0.25, &d, 0)).abs() < 1e-6);
}

#[test]
fn bounds_chain_end_to_end() {
    let d = division(
        DivisionConfig::default()
            .global_fragment(0.5)
            .start_fragment(0.25)
            .local_fragments(vec![0.5, 0.5]),
    );
    let b0 = sub_window_bounds(&d, 0).unwrap();
    let b1 = sub_window_bounds(&d, 1).unwrap();
    assert!((b0.start - 0.25).abs() < EPS);
    assert!((b0.end - 0.5).abs() < EPS);
    assert!((b1.start - b0.end).abs() < EPS);
    assert!((b1.end - 0.75).abs() < EPS);
    assert!(sub_window_bounds(&d, 2).is_none());
}

#[test]
fn sample_reports_active_index() {
    let d = halves();
    let s = sample_division(0.75, &d);
    assert_eq!(s.values.len(), 2);
    assert_eq!(s.active_index(), Some(1));
    assert_eq!(sample_division(0.0, &d).active_index(), None);
}
