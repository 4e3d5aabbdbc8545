//! Compact number rendering for simulator directives.
//!
//! The simulator and the downstream tooling both key model directories and
//! settings on the "general" decimal format: six significant digits, trailing
//! zeros removed, scientific notation only for very small or very large
//! magnitudes. [`fmt_g`] reproduces that rendering exactly so that generated
//! names such as `mq-10.119` stay stable across tools.

const SIGNIFICANT_DIGITS: i32 = 6;

/// Renders `value` in the general compact decimal format (`%g`).
pub fn fmt_g(value: f64) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".into() } else { "-inf".into() };
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0".into() } else { "0".into() };
    }

    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-4..SIGNIFICANT_DIGITS).contains(&exponent) {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::fmt_g;

    #[test]
    fn integers_drop_the_decimal_point() {
        assert_eq!(fmt_g(1000.0), "1000");
        assert_eq!(fmt_g(1.0), "1");
        assert_eq!(fmt_g(0.0), "0");
    }

    #[test]
    fn fractions_keep_six_significant_digits() {
        assert_eq!(fmt_g(10.119008264462810), "10.119");
        assert_eq!(fmt_g(25.099800796022265), "25.0998");
        assert_eq!(fmt_g(1.0 / 3.0), "0.333333");
        assert_eq!(fmt_g(0.7777777777777778), "0.777778");
        assert_eq!(fmt_g(35.15393738579578), "35.1539");
    }

    #[test]
    fn extreme_magnitudes_switch_to_scientific() {
        assert_eq!(fmt_g(1.0e6), "1e+06");
        assert_eq!(fmt_g(1234567.0), "1.23457e+06");
        assert_eq!(fmt_g(0.00001), "1e-05");
        assert_eq!(fmt_g(0.0001), "0.0001");
        assert_eq!(fmt_g(-2.5e-7), "-2.5e-07");
    }

    #[test]
    fn rounding_can_promote_the_exponent() {
        assert_eq!(fmt_g(999999.5), "1e+06");
        assert_eq!(fmt_g(0.0023), "0.0023");
    }
}
