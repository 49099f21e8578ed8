//! Number formatting for chart labels and tooltips (en-US style, USD)

/// Groups the integer part in thousands with `,`, rounding to `decimals` places.
/// `1234.567` with 2 decimals becomes `"1,234.57"`.
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    if value < 0.0 && result.chars().any(|c| c != '0' && c != ',') {
        result.insert(0, '-');
    }
    match decimal_part {
        Some(d) => format!("{}.{}", result, d),
        None => result,
    }
}

/// Whole dollars: 45000.0 -> "$45,000"
pub fn format_usd(value: f64) -> String {
    let amount = format_number_with_decimals(value, 0);
    match amount.strip_prefix('-') {
        Some(positive) => format!("-${}", positive),
        None => format!("${}", amount),
    }
}

/// Axis tick in thousands: 12000.0 -> "$12k", 1500.0 -> "$1.5k"
pub fn format_usd_thousands(value: f64) -> String {
    let thousands = value / 1000.0;
    if thousands.fract() == 0.0 {
        format!("${}k", thousands as i64)
    } else {
        let text = format!("{:.1}", thousands);
        format!("${}k", text.trim_end_matches('0').trim_end_matches('.'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(1234567.0, 0), "1,234,567");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-1500.5, 1), "-1,500.5");
        assert_eq!(format_number_with_decimals(-0.2, 0), "0");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(45000.0), "$45,000");
        assert_eq!(format_usd(100000.4), "$100,000");
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(-2500.0), "-$2,500");
    }

    #[test]
    fn test_format_usd_thousands() {
        assert_eq!(format_usd_thousands(12000.0), "$12k");
        assert_eq!(format_usd_thousands(1500.0), "$1.5k");
        assert_eq!(format_usd_thousands(0.0), "$0k");
    }
}
