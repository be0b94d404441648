//! Easing curves.
//!
//! All functions use the classic `(t, b, c, d)` signature: elapsed time,
//! start value, total change and duration. Output runs from `b` at `t = 0`
//! to `b + c` at `t = d`. A zero or negative duration yields `b + c`.

/// Quartic ease-in-out: accelerates over the first half of the duration and
/// decelerates over the second half.
pub fn ease_in_out_quart(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if d <= 0.0 {
        return b + c;
    }
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t * t + b;
    }
    let t = t - 2.0;
    -c / 2.0 * (t * t * t * t - 2.0) + b
}

/// Linear interpolation with the same signature.
pub fn linear(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if d <= 0.0 {
        return b + c;
    }
    c * t / d + b
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_endpoints() {
        assert!((ease_in_out_quart(0.0, 0.0, 75.0, 3000.0) - 0.0).abs() < EPSILON);
        assert!((ease_in_out_quart(3000.0, 0.0, 75.0, 3000.0) - 75.0).abs() < EPSILON);
        assert!((ease_in_out_quart(0.0, 10.0, 5.0, 2.0) - 10.0).abs() < EPSILON);
        assert!((ease_in_out_quart(2.0, 10.0, 5.0, 2.0) - 15.0).abs() < EPSILON);
    }

    #[test]
    fn test_midpoint_is_half_way() {
        assert!((ease_in_out_quart(1500.0, 0.0, 100.0, 3000.0) - 50.0).abs() < EPSILON);
    }

    #[test]
    fn test_monotonic_non_decreasing() {
        for &c in &[0.0, 1.0, 42.0, 100.0] {
            let d = 3000.0;
            let mut previous = ease_in_out_quart(0.0, 0.0, c, d);
            for step in 1..=300 {
                let t = d * step as f64 / 300.0;
                let value = ease_in_out_quart(t, 0.0, c, d);
                assert!(
                    value + EPSILON >= previous,
                    "c={c}: value {value} at t={t} fell below {previous}"
                );
                previous = value;
            }
        }
    }

    #[test]
    fn test_slow_start_and_finish() {
        // Quartic curve stays well under linear early on and above it late.
        let d = 1000.0;
        assert!(ease_in_out_quart(100.0, 0.0, 100.0, d) < linear(100.0, 0.0, 100.0, d));
        assert!(ease_in_out_quart(900.0, 0.0, 100.0, d) > linear(900.0, 0.0, 100.0, d));
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        assert_eq!(ease_in_out_quart(0.0, 0.0, 75.0, 0.0), 75.0);
        assert_eq!(ease_in_out_quart(0.0, 10.0, 5.0, -1.0), 15.0);
        assert_eq!(linear(0.0, 0.0, 75.0, 0.0), 75.0);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(ease_in_out_quart(10.0, 0.0, f64::NAN, 100.0).is_nan());
    }
}
