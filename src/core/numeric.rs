//! Integer percent arithmetic.
//!
//! Multipliers are carried as whole percents (`140` means ×1.4) so every
//! "multiply then round up" step is exact.

/// Multiply `value` by `percent / 100`, rounding toward positive infinity.
///
/// ```
/// use quiz_battle::core::ceil_percent;
///
/// assert_eq!(ceil_percent(6, 140), 9);   // 8.4 -> 9
/// assert_eq!(ceil_percent(10, 130), 13);
/// assert_eq!(ceil_percent(0, 240), 0);
/// assert_eq!(ceil_percent(-5, 150), -7); // -7.5 -> -7
/// ```
#[must_use]
pub fn ceil_percent(value: i64, percent: i64) -> i64 {
    let product = value.saturating_mul(percent);
    if product >= 0 {
        product.saturating_add(99) / 100
    } else {
        product / 100
    }
}

/// Divide rounding up, for non-negative numerators and positive divisors.
#[must_use]
pub fn ceil_div(numerator: i64, divisor: i64) -> i64 {
    if divisor <= 0 {
        return numerator;
    }
    (numerator.max(0) + divisor - 1) / divisor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceil_percent_exact() {
        assert_eq!(ceil_percent(10, 100), 10);
        assert_eq!(ceil_percent(10, 150), 15);
    }

    #[test]
    fn test_ceil_percent_rounds_up() {
        assert_eq!(ceil_percent(5, 130), 7); // 6.5
        assert_eq!(ceil_percent(3, 140), 5); // 4.2
        assert_eq!(ceil_percent(1, 101), 2);
    }

    #[test]
    fn test_ceil_div() {
        assert_eq!(ceil_div(100, 100), 1);
        assert_eq!(ceil_div(101, 100), 2);
        assert_eq!(ceil_div(0, 100), 0);
        assert_eq!(ceil_div(7, 0), 7);
    }
}
