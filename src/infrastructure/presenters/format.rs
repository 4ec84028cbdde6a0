//! Display rounding. Values are rounded to cents only here, never in the engine.

/// `$1,234.56`, with a leading minus for negatives.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${}", group_thousands(&fixed))
}

/// Signed percentage with two decimals: `+16.67%`, `-8.33%`.
pub fn format_percentage(value: f64) -> String {
    format!("{value:+.2}%")
}

pub fn format_number(value: f64) -> String {
    format!("{value:.2}")
}

/// `2` -> `2:1`, `1.5` -> `1.5:1`.
pub fn format_ratio(ratio: f64) -> String {
    format!("{ratio}:1")
}

fn group_thousands(fixed: &str) -> String {
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed, ""));
    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3 + frac_part.len() + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(5000.0), "$5,000.00");
        assert_eq!(format_currency(416.6666), "$416.67");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-12.5), "-$12.50");
        assert_eq!(format_currency(-0.001), "$0.00");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_percentage_is_signed() {
        assert_eq!(format_percentage(16.6666), "+16.67%");
        assert_eq!(format_percentage(-8.3333), "-8.33%");
    }

    #[test]
    fn test_number_and_ratio() {
        assert_eq!(format_number(41.666666), "41.67");
        assert_eq!(format_ratio(2.0), "2:1");
        assert_eq!(format_ratio(1.5), "1.5:1");
    }
}
