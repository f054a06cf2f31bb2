//! Display helpers

/// Format an amount as whole currency with thousands separators
///
/// The fractional part is truncated toward zero, so 89334.9 renders as
/// `$89,334`. Negative amounts render as `-$1,234`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${value}");
    }

    let whole = value.trunc();
    let digits = format!("{:.0}", whole.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Years for a cost to double at a constant growth rate
///
/// Returns `None` when the rate is not positive (the cost never doubles).
pub fn doubling_time_years(annual_growth_rate: f64) -> Option<f64> {
    if annual_growth_rate > 0.0 && annual_growth_rate.is_finite() {
        Some(std::f64::consts::LN_2 / annual_growth_rate.ln_1p())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.99), "$999");
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(89_334.2357), "$89,334");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(-1234.9), "-$1,234");
        assert_eq!(format_currency(-0.5), "$0");
    }

    #[test]
    fn test_doubling_time() {
        // ~17.7 years at 4%
        let years = doubling_time_years(0.04).expect("positive rate");
        assert_abs_diff_eq!(years, 17.67, epsilon = 0.01);

        assert_abs_diff_eq!(doubling_time_years(1.0).expect("positive rate"), 1.0, epsilon = 1e-12);
        assert_eq!(doubling_time_years(0.0), None);
        assert_eq!(doubling_time_years(-0.02), None);
    }
}
