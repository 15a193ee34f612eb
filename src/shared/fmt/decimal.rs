//! Decimal formatting utilities for human-readable display.
//!
//! Handles `rust_decimal::Decimal` values with subscript notation for very small
//! prices, automatic decimal-place detection, percentages and
//! abbreviated suffixes (K/M/B/T) for volumes and market caps.

use rust_decimal::prelude::*;

enum DecimalFormat {
    Standard(u32),
    Subscript { zeros: u32, significant: String },
}

#[inline]
fn count_digits_u128(n: u128) -> u32 {
    if n == 0 {
        return 1;
    }
    n.ilog10() + 1
}

fn get_decimal_format(value: &Decimal) -> DecimalFormat {
    if value.is_zero() {
        return DecimalFormat::Standard(2);
    }

    let abs_value = value.abs();
    if abs_value >= Decimal::ONE_HUNDRED {
        return DecimalFormat::Standard(0);
    }
    if abs_value >= Decimal::ONE {
        return DecimalFormat::Standard(2);
    }

    let mantissa = abs_value.mantissa().unsigned_abs();
    let mantissa_digits = count_digits_u128(mantissa);
    let leading_zeros = abs_value.scale().saturating_sub(mantissa_digits);

    if leading_zeros <= 5 {
        return DecimalFormat::Standard((leading_zeros + 3).min(8));
    }

    // Keep at most four significant digits, then drop trailing zeros.
    let keep = mantissa_digits.min(4);
    let mut sig = mantissa / 10u128.pow(mantissa_digits - keep);
    while sig > 0 && sig % 10 == 0 {
        sig /= 10;
    }

    DecimalFormat::Subscript {
        zeros: leading_zeros,
        significant: sig.to_string(),
    }
}

/// Format a `Decimal` for display, handling subscript notation for very small values.
pub fn display(value: &Decimal) -> String {
    match get_decimal_format(value) {
        DecimalFormat::Standard(decimals) => {
            let rounded = value.round_dp(decimals);
            super::num::display_formatted_string(rounded.to_string())
        }
        DecimalFormat::Subscript { zeros, significant } => {
            let sign = if value.is_sign_negative() { "-" } else { "" };
            format!("{sign}0.0({zeros}){significant}")
        }
    }
}

/// Format a USD price: cents for prices of one dollar or more, adaptive
/// precision below that.
pub fn price(value: &Decimal) -> String {
    if value.abs() >= Decimal::ONE {
        super::num::display_formatted_string(value.round_dp(2).to_string())
    } else {
        display(value)
    }
}

/// Format a percentage change with two decimals. Only losses carry a sign.
pub fn percent(value: &Decimal) -> String {
    let rounded = value.round_dp(2);
    if rounded.is_zero() {
        return format!("{:.2}%", Decimal::ZERO);
    }
    format!("{:.2}%", rounded)
}

/// Abbreviate a `Decimal` with K/M/B/T suffixes.
pub fn abbr_number(amount: &Decimal, digits: Option<usize>, show_sign: Option<bool>) -> String {
    let digits = digits.unwrap_or(2);
    let show_sign = show_sign.unwrap_or(true);
    let sign = if show_sign && amount < &Decimal::ZERO {
        "-"
    } else {
        ""
    };
    let abs_amount = amount.abs();

    let units = [
        (Decimal::from(1_000_000_000_000u64), "T"),
        (Decimal::from(1_000_000_000u64), "B"),
        (Decimal::from(1_000_000u64), "M"),
        (Decimal::ONE_THOUSAND, "K"),
    ];

    for (unit, suffix) in units {
        if abs_amount >= unit {
            return format!("{sign}{:.digits$}{suffix}", abs_amount / unit);
        }
    }
    format!("{sign}{:.digits$}", abs_amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_display_zero() {
        assert_eq!(display(&Decimal::ZERO), "0");
    }

    #[test]
    fn test_display_large_values_no_decimals() {
        assert_eq!(display(&dec("100.99")), "101");
        assert_eq!(display(&dec("1234.56")), "1,235");
    }

    #[test]
    fn test_display_small_values_standard() {
        assert_eq!(display(&dec("0.12")), "0.12");
        assert_eq!(display(&dec("0.00123")), "0.00123");
        assert_eq!(display(&dec("0.0000123")), "0.0000123");
    }

    #[test]
    fn test_display_very_small_values_subscript() {
        assert_eq!(display(&dec("0.0000001")), "0.0(6)1");
        assert_eq!(display(&dec("0.00000012345")), "0.0(6)1234");
        assert_eq!(display(&dec("0.0000001200")), "0.0(6)12");
        assert_eq!(display(&dec("-0.0000001")), "-0.0(6)1");
    }

    #[test]
    fn test_price_keeps_cents_for_large_values() {
        assert_eq!(price(&dec("67123.456")), "67,123.46");
        assert_eq!(price(&dec("3050")), "3,050");
        assert_eq!(price(&dec("1.5")), "1.5");
    }

    #[test]
    fn test_price_small_values() {
        assert_eq!(price(&dec("0.5213")), "0.521");
        assert_eq!(price(&dec("0.00000001234")), "0.0(7)1234");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(&dec("2.5")), "2.50%");
        assert_eq!(percent(&dec("-1.234")), "-1.23%");
        assert_eq!(percent(&Decimal::ZERO), "0.00%");
        assert_eq!(percent(&dec("-0.001")), "0.00%");
    }

    #[test]
    fn test_abbr_number() {
        assert_eq!(abbr_number(&dec("999"), None, None), "999.00");
        assert_eq!(abbr_number(&dec("1500"), None, None), "1.50K");
        assert_eq!(abbr_number(&dec("1200000000"), Some(1), None), "1.2B");
        assert_eq!(abbr_number(&dec("2500000000000"), None, None), "2.50T");
    }

    #[test]
    fn test_abbr_number_negative() {
        assert_eq!(abbr_number(&dec("-1500000"), None, None), "-1.50M");
        assert_eq!(abbr_number(&dec("-1500000"), None, Some(false)), "1.50M");
    }
}
