//! CLI output formatting.

use std::time::Duration;

/// Format an approximation to the 16 decimal places the reference constant
/// is known to.
#[must_use]
pub fn format_approximation(value: f64) -> String {
    format!("{value:.16}")
}

/// Absolute error of an approximation versus π.
#[must_use]
pub fn absolute_error(value: f64) -> f64 {
    (value - std::f64::consts::PI).abs()
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_approximation_16_places() {
        let s = format_approximation(std::f64::consts::PI);
        assert!(s.starts_with("3.14159265358979"));
        assert_eq!(s.len(), "3.".len() + 16);
    }

    #[test]
    fn absolute_error_of_pi_is_zero() {
        assert_eq!(absolute_error(std::f64::consts::PI), 0.0);
        assert!((absolute_error(3.0) - 0.141_592_653_589_793).abs() < 1e-12);
    }

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert!(s.contains("ms"));
    }

    #[test]
    fn format_duration_seconds() {
        let s = format_duration(Duration::from_secs_f64(3.14));
        assert!(s.contains('s'));
    }

    #[test]
    fn format_duration_minutes() {
        let s = format_duration(Duration::from_secs(90));
        assert!(s.contains('m'));
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
    }
}
