// Utility functions for ranking-service

/// Base-10 log of `count / pivot`, reading missing or non-positive counts as 1
///
/// Keeps the result finite for every input; low counts produce negative values.
pub fn log_ratio(count: Option<i64>, pivot: f64) -> f64 {
    let count = count.filter(|c| *c > 0).unwrap_or(1) as f64;
    (count / pivot).log10()
}

/// Linear decay from `peak` at age zero to 0 at `window`, never negative
pub fn linear_decay(age: f64, window: f64, peak: f64) -> f64 {
    (peak - (age / window) * peak).max(0.0)
}

/// `min(value / divisor, cap)`, with 0 for zero, missing or non-finite values
///
/// Negative values also give 0 rather than the negative ramp the raw formula
/// would produce, so a corrupt duration never lowers a video's score.
pub fn capped_ramp(value: Option<f64>, divisor: f64, cap: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => (v / divisor).min(cap),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_ratio() {
        assert!((log_ratio(Some(1000), 100.0) - 1.0).abs() < 1e-12);
        assert!(log_ratio(Some(100), 100.0).abs() < 1e-12);
        assert!((log_ratio(Some(10), 100.0) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_log_ratio_treats_missing_zero_negative_as_one() {
        let expected = (1.0_f64 / 100.0).log10();
        assert_eq!(log_ratio(None, 100.0), expected);
        assert_eq!(log_ratio(Some(0), 100.0), expected);
        assert_eq!(log_ratio(Some(-50), 100.0), expected);
    }

    #[test]
    fn test_linear_decay() {
        assert!((linear_decay(0.0, 30.0, 0.2) - 0.2).abs() < 1e-12);
        assert!((linear_decay(15.0, 30.0, 0.2) - 0.1).abs() < 1e-12);
        assert_eq!(linear_decay(30.0, 30.0, 0.2), 0.0);
        assert_eq!(linear_decay(365.0, 30.0, 0.2), 0.0);
    }

    #[test]
    fn test_capped_ramp() {
        assert!((capped_ramp(Some(30.0), 600.0, 0.1) - 0.05).abs() < 1e-12);
        assert_eq!(capped_ramp(Some(300.0), 600.0, 0.1), 0.1);
        assert_eq!(capped_ramp(Some(0.0), 600.0, 0.1), 0.0);
        assert_eq!(capped_ramp(Some(-30.0), 600.0, 0.1), 0.0);
        assert_eq!(capped_ramp(Some(f64::NAN), 600.0, 0.1), 0.0);
        assert_eq!(capped_ramp(None, 600.0, 0.1), 0.0);
    }
}
