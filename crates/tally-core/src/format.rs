//! Number formatting for insight messages

/// Render an amount with thousands separators and at most two fractional
/// digits, dropping trailing fractional zeros: `12000.0` -> `$12,000`,
/// `1234.5` -> `$1,234.5`.
pub fn format_amount(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return format!("{}{}", symbol, value);
    }

    // Beyond this the cent count no longer fits a u64
    let (digits, fraction) = if value.abs() < u64::MAX as f64 / 100.0 {
        let cents = (value.abs() * 100.0).round() as u64;
        ((cents / 100).to_string(), cents % 100)
    } else {
        (format!("{:.0}", value.abs()), 0)
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && (digits != "0" || fraction > 0) {
        "-"
    } else {
        ""
    };
    let mut out = format!("{}{}{}", sign, symbol, grouped);
    if fraction > 0 {
        let frac = format!("{:02}", fraction);
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// `ratio * 100` as a whole percentage. Halves round up.
pub fn round_percent(ratio: f64) -> i64 {
    (ratio * 100.0 + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(0.0, "$"), "$0");
        assert_eq!(format_amount(999.0, "$"), "$999");
        assert_eq!(format_amount(1000.0, "$"), "$1,000");
        assert_eq!(format_amount(12000.0, "$"), "$12,000");
        assert_eq!(format_amount(1234567.0, "$"), "$1,234,567");
    }

    #[test]
    fn test_format_amount_fraction() {
        assert_eq!(format_amount(1234.5, "$"), "$1,234.5");
        assert_eq!(format_amount(10.25, "$"), "$10.25");
        assert_eq!(format_amount(10.999, "$"), "$11");
        assert_eq!(format_amount(-42.1, "€"), "-€42.1");
    }

    #[test]
    fn test_format_amount_huge_values() {
        assert_eq!(format_amount(1e20, "$"), "$100,000,000,000,000,000,000");
        assert_eq!(format_amount(-1e20, "$"), "-$100,000,000,000,000,000,000");
        assert_eq!(
            format_amount(100_000_000_000_000.0, "$"),
            "$100,000,000,000,000"
        );
    }

    #[test]
    fn test_round_percent() {
        assert_eq!(round_percent(0.333), 33);
        assert_eq!(round_percent(0.7), 70);
        assert_eq!(round_percent(1.0), 100);
        assert_eq!(round_percent(0.125), 13);
    }
}
