//! Statistical primitives behind the trade-count calculation.
//!
//! - Break-even win rate implied by a reward:risk ratio
//! - Bonferroni-adjusted significance level
//! - Standard normal quantile (percent-point function) via `statrs`
//!
//! None of these validate their inputs. Out-of-domain values flow through as
//! NaN or infinities rather than errors.

use statrs::distribution::{ContinuousCDF, Normal};

// ─── Break-even and significance ─────────────────────────────────────

/// Win rate at which expected value is exactly zero: `1 / (1 + rr)`.
///
/// A 1:6 setup (risk 1 to make 6) breaks even at 1/7 ≈ 14.29% winners.
pub fn break_even_win_rate(reward_risk: f64) -> f64 {
    1.0 / (1.0 + reward_risk)
}

/// Per-comparison significance level after Bonferroni correction.
///
/// `(1 - confidence) / tuned_params`. A zero parameter count divides by zero
/// and yields an infinite (or NaN) alpha.
pub fn bonferroni_alpha(confidence: f64, tuned_params: u32) -> f64 {
    (1.0 - confidence) / f64::from(tuned_params)
}

// ─── Normal quantile ─────────────────────────────────────────────────

fn standard_normal() -> Normal {
    Normal::new(0.0, 1.0).expect("unit normal parameters are valid")
}

/// Inverse CDF of the standard normal: the `z` with `P(Z <= z) = prob`.
///
/// `prob` outside `[0, 1]` (or NaN) yields NaN. The endpoints map to the
/// matching infinities.
pub fn normal_quantile(prob: f64) -> f64 {
    if !(0.0..=1.0).contains(&prob) {
        return f64::NAN;
    }
    if prob == 0.0 {
        return f64::NEG_INFINITY;
    }
    if prob == 1.0 {
        return f64::INFINITY;
    }
    standard_normal().inverse_cdf(prob)
}

/// One-sided critical value for an (already adjusted) significance level.
pub fn critical_z(alpha_adjusted: f64) -> f64 {
    normal_quantile(1.0 - alpha_adjusted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rel_close(actual: f64, expected: f64, tol: f64) {
        let rel = ((actual - expected) / expected).abs();
        assert!(rel < tol, "{actual} vs {expected}: relative error {rel}");
    }

    // ─── break-even ──────────────────────────────────────────────

    #[test]
    fn break_even_one_to_six() {
        assert!((break_even_win_rate(6.0) - 1.0 / 7.0).abs() < 1e-15);
    }

    #[test]
    fn break_even_even_money() {
        assert!((break_even_win_rate(1.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn break_even_falls_as_reward_grows() {
        assert!(break_even_win_rate(3.0) > break_even_win_rate(4.0));
    }

    // ─── Bonferroni ──────────────────────────────────────────────

    #[test]
    fn bonferroni_single_param_is_plain_alpha() {
        assert!((bonferroni_alpha(0.99, 1) - 0.01).abs() < 1e-12);
    }

    #[test]
    fn bonferroni_splits_alpha() {
        assert!((bonferroni_alpha(0.99, 2) - 0.005).abs() < 1e-12);
        assert!((bonferroni_alpha(0.95, 5) - 0.01).abs() < 1e-12);
    }

    #[test]
    fn bonferroni_zero_params_is_not_finite() {
        assert!(!bonferroni_alpha(0.99, 0).is_finite());
    }

    // ─── normal quantile ─────────────────────────────────────────

    #[test]
    fn quantile_known_values() {
        // Reference values from the standard normal percent-point function.
        assert_rel_close(normal_quantile(0.90), 1.2815515655446004, 1e-9);
        assert_rel_close(normal_quantile(0.95), 1.6448536269514722, 1e-9);
        assert_rel_close(normal_quantile(0.975), 1.959963984540054, 1e-9);
        assert_rel_close(normal_quantile(0.99), 2.3263478740408408, 1e-9);
        assert_rel_close(normal_quantile(0.995), 2.5758293035489004, 1e-9);
        assert_rel_close(normal_quantile(0.999), 3.090232306167813, 1e-9);
    }

    #[test]
    fn quantile_median_is_zero() {
        assert!(normal_quantile(0.5).abs() < 1e-12);
    }

    #[test]
    fn quantile_is_antisymmetric() {
        for &p in &[0.6, 0.9, 0.99, 0.9999] {
            let hi = normal_quantile(p);
            let lo = normal_quantile(1.0 - p);
            assert!((hi + lo).abs() < 1e-9, "p={p}: {hi} + {lo} != 0");
        }
    }

    #[test]
    fn quantile_endpoints_are_infinite() {
        assert_eq!(normal_quantile(1.0), f64::INFINITY);
        assert_eq!(normal_quantile(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn quantile_out_of_range_is_nan() {
        assert!(normal_quantile(1.5).is_nan());
        assert!(normal_quantile(-0.1).is_nan());
        assert!(normal_quantile(f64::NAN).is_nan());
    }

    #[test]
    fn critical_z_for_one_percent() {
        assert_rel_close(critical_z(0.01), 2.3263478740408408, 1e-9);
    }
}
