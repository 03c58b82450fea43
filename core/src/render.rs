//! Textual rendering of classified values.
//!
//! Values print as their shortest round-trip decimal. Magnitudes with a
//! decimal exponent in `-4..16` use positional notation with at least one
//! fractional digit (`5.0`, `0.0001`); everything else uses a mantissa with a
//! signed, two-digit-minimum exponent (`1e+16`, `1.5e-05`). Non-finite values
//! print as `nan`, `inf` and `-inf`.

/// Largest decimal-point position still rendered positionally.
const MAX_POSITIONAL_DECPT: i32 = 16;

/// Smallest decimal-point position still rendered positionally.
const MIN_POSITIONAL_DECPT: i32 = -3;

pub fn render_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}inf");
    }

    // `{:e}` yields the shortest round-trip digits as `d[.ddd]e<exp>`.
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value:?}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{value:?}");
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    // Position of the decimal point relative to the first digit.
    let decpt = exponent + 1;

    let body = if (MIN_POSITIONAL_DECPT..=MAX_POSITIONAL_DECPT).contains(&decpt) {
        positional(&digits, decpt)
    } else {
        exponential(&digits, exponent)
    };
    format!("{sign}{body}")
}

fn positional(digits: &str, decpt: i32) -> String {
    let len = digits.len() as i32;
    if decpt <= 0 {
        format!("0.{}{digits}", "0".repeat((-decpt) as usize))
    } else if decpt >= len {
        format!("{digits}{}.0", "0".repeat((decpt - len) as usize))
    } else {
        let (int, frac) = digits.split_at(decpt as usize);
        format!("{int}.{frac}")
    }
}

fn exponential(digits: &str, exponent: i32) -> String {
    let (lead, rest) = digits.split_at(1);
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    let exp = exponent.unsigned_abs();
    if rest.is_empty() {
        format!("{lead}e{exp_sign}{exp:02}")
    } else {
        format!("{lead}.{rest}e{exp_sign}{exp:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn integral_values_keep_a_fraction() {
        assert_eq!(render_value(5.0), "5.0");
        assert_eq!(render_value(1000.0), "1000.0");
        assert_eq!(render_value(0.0), "0.0");
        assert_eq!(render_value(-0.0), "-0.0");
        assert_eq!(render_value(1e15), "1000000000000000.0");
    }

    #[test]
    fn fractions() {
        assert_eq!(render_value(-3.5), "-3.5");
        assert_eq!(render_value(0.1), "0.1");
        assert_eq!(render_value(123.456), "123.456");
        assert_eq!(render_value(0.0001), "0.0001");
        assert_eq!(render_value(0.00012), "0.00012");
    }

    #[test]
    fn large_magnitudes_use_exponent() {
        assert_eq!(render_value(1e16), "1e+16");
        assert_eq!(render_value(1.5e16), "1.5e+16");
        assert_eq!(render_value(-2e22), "-2e+22");
        assert_eq!(render_value(f64::MAX), "1.7976931348623157e+308");
    }

    #[test]
    fn small_magnitudes_use_exponent() {
        assert_eq!(render_value(1e-5), "1e-05");
        assert_eq!(render_value(-1.25e-7), "-1.25e-07");
        assert_eq!(render_value(5e-324), "5e-324");
    }

    #[test]
    fn non_finite() {
        assert_eq!(render_value(f64::NAN), "nan");
        assert_eq!(render_value(f64::INFINITY), "inf");
        assert_eq!(render_value(f64::NEG_INFINITY), "-inf");
    }
}
