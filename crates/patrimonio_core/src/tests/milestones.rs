//! Tests for the milestone estimator.

use crate::milestone::{MONTHS_CAP, months_to_target};

/// Starting at the target costs zero months, whatever the parameters.
#[test]
fn test_at_target_is_zero_months() {
    for &(contribution, rate) in &[(0.0, 0.0), (600.0, 7.0), (3_000.0, 15.0)] {
        assert_eq!(
            months_to_target(100_000.0, 100_000.0, contribution, rate, MONTHS_CAP),
            0
        );
    }
}

/// Higher targets never take fewer months.
#[test]
fn test_monotone_in_target() {
    let targets = [50_000.0, 100_000.0, 400_000.0, 1_000_000.0];
    let mut last = 0;
    for target in targets {
        let months = months_to_target(27_050.0, target, 600.0, 7.0, MONTHS_CAP);
        assert!(
            months >= last,
            "target {target} took {months} months, less than a lower target's {last}"
        );
        last = months;
    }
}

/// Larger contributions never slow the crossing down.
#[test]
fn test_anti_monotone_in_contribution() {
    let contributions = [100.0, 600.0, 1_500.0, 3_000.0];
    let mut last = u32::MAX;
    for contribution in contributions {
        let months = months_to_target(27_050.0, 400_000.0, contribution, 7.0, MONTHS_CAP);
        assert!(
            months <= last,
            "contribution {contribution} took {months} months, more than a smaller contribution's {last}"
        );
        last = months;
    }
}

/// An unreachable target comes back as the cap sentinel, not an estimate.
#[test]
fn test_sentinel_for_unreachable_target() {
    let months = months_to_target(1_000.0, 1_000_000.0, 0.0, 0.0, MONTHS_CAP);
    assert_eq!(months, MONTHS_CAP);

    // Shrinking balance with no contribution can never cross.
    let months = months_to_target(1_000.0, 2_000.0, 0.0, -5.0, MONTHS_CAP);
    assert_eq!(months, MONTHS_CAP);
}

/// The estimator agrees with the projection engine: after the reported
/// number of months the projected value has crossed the target.
#[test]
fn test_agrees_with_projection() {
    let initial = 27_050.0;
    let contribution = 600.0;
    let rate = 7.0;
    let target = 50_000.0;

    let months = months_to_target(initial, target, contribution, rate, MONTHS_CAP) as usize;
    assert!(months > 3 && months < MONTHS_CAP as usize);

    let series = crate::projection::project(initial, contribution, rate, 30);
    // The estimator runs unrounded; per-step cent rounding can shift the
    // crossing by a month at most.
    assert!(series.values[months + 1] >= target);
    assert!(series.values[months - 3] < target);
}
