//! Pure step-snapping and display-rounding arithmetic.
//!
//! Shared by both slider widgets: raw track percentages are quantized to the
//! nearest step multiple in percent space, and committed values are rounded to
//! two decimal places before they reach the host.

/// Snap a raw track percentage to the nearest multiple of `step_percent`.
///
/// Rounding is half-away-from-zero. The result is an exact multiple of
/// `step_percent`; when the step grid does not line up with the track ends the
/// nearest multiple can overshoot them, so callers clamp to `[0, 100]`.
pub fn snap_to_step(raw_percent: f64, step_percent: f64) -> f64 {
    (raw_percent / step_percent).round() * step_percent
}

/// Round a value to two decimal places for display/output.
///
/// The added epsilon counters binary representation error before rounding.
pub fn round_display(num: f64) -> f64 {
    ((num + f64::EPSILON) * 100.0).round() / 100.0
}

/// Tolerance comparison for snapped percentages.
///
/// A step that does not evenly divide the track leaves multiples that miss the
/// extremes by float dust; those must still count as the extreme.
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_nearest_multiple() {
        assert!((snap_to_step(12.4, 5.0) - 10.0).abs() < 1e-9);
        assert!((snap_to_step(13.0, 5.0) - 15.0).abs() < 1e-9);
        assert!((snap_to_step(70.0, 1.0) - 70.0).abs() < 1e-9);
    }

    #[test]
    fn snaps_halfway_up() {
        assert!((snap_to_step(12.5, 5.0) - 15.0).abs() < 1e-9);
        assert!((snap_to_step(0.5, 1.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn snap_can_overshoot_track_end() {
        // 100 is not a multiple of 40; the nearest one is past the end.
        assert!((snap_to_step(100.0, 40.0) - 120.0).abs() < 1e-9);
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert!((round_display(33.333_333) - 33.33).abs() < 1e-9);
        assert!((round_display(66.666_666) - 66.67).abs() < 1e-9);
    }

    #[test]
    fn round_is_exact_on_clean_values() {
        assert_eq!(round_display(64.0), 64.0);
        assert_eq!(round_display(0.0), 0.0);
    }

    #[test]
    fn round_absorbs_float_dust() {
        assert_eq!(round_display(65.000_000_000_000_01), 65.0);
    }

    #[test]
    fn approx_eq_tolerates_dust_only() {
        assert!(approx_eq(99.999_999_999_999_99, 100.0));
        assert!(!approx_eq(99.0, 100.0));
    }
}
