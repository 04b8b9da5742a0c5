//! Number formatting for tables, cards and chart axes.

/// Thousands separated by commas, fixed number of decimals
/// (`1234.567` with 2 decimals is `1,234.57`).
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let decimals = usize::from(decimals.min(4));
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Short form for chart axes and tooltips: `1.2K`, `3.4M`, `5.6B`.
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1_000_000_000.0 {
        (value / 1_000_000_000.0, "B")
    } else if abs >= 1_000_000.0 {
        (value / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        (value / 1_000.0, "K")
    } else {
        return format_number_int(value);
    };
    let text = format!("{:.1}", scaled);
    format!("{}{}", text.trim_end_matches(".0"), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1,234.56");
        assert_eq!(format_money(1234567.89), "1,234,567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1,234.56");
        assert_eq!(format_money(-123.0), "-123.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1,234.567");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(1_000.0), "1K");
        assert_eq!(format_compact(1_240.0), "1.2K");
        assert_eq!(format_compact(3_400_000.0), "3.4M");
        assert_eq!(format_compact(-2_000_000_000.0), "-2B");
    }
}
