//! Display formatting for numeric company fields.
//!
//! Non-numeric values pass through unchanged: a dataset placeholder like
//! "n/a" is rendered verbatim, never formatted and never an error.

use crate::domain::company::Numeric;

/// Thousands-grouped count, e.g. `12345` -> `"12,345"`.
pub fn format_count(value: &Numeric) -> String {
    match value {
        Numeric::Number(n) => group_thousands(*n),
        Numeric::Text(s) => s.clone(),
        Numeric::Other(v) => v.to_string(),
    }
}

/// Abbreviated currency: `$2.5B`, `$45.0M`, `$1.0K`, `$999`.
pub fn format_currency(value: &Numeric) -> String {
    match value {
        Numeric::Number(n) => format_currency_f64(*n),
        Numeric::Text(s) => s.clone(),
        Numeric::Other(v) => v.to_string(),
    }
}

/// Verbatim rendering for fields with no grouping convention (founded year).
pub fn format_plain(value: &Numeric) -> String {
    match value {
        Numeric::Number(n) => format!("{}", n),
        Numeric::Text(s) => s.clone(),
        Numeric::Other(v) => v.to_string(),
    }
}

// Option-level helpers for rendering: a missing field shows as an em dash.

pub fn format_count_field(value: Option<&Numeric>) -> String {
    value.map(format_count).unwrap_or_else(|| "—".to_string())
}

pub fn format_currency_field(value: Option<&Numeric>) -> String {
    value.map(format_currency).unwrap_or_else(|| "—".to_string())
}

pub fn format_plain_field(value: Option<&Numeric>) -> String {
    value.map(format_plain).unwrap_or_else(|| "—".to_string())
}

fn format_currency_f64(n: f64) -> String {
    if n >= 1_000_000_000.0 {
        format!("${:.1}B", n / 1_000_000_000.0)
    } else if n >= 1_000_000.0 {
        format!("${:.1}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("${:.1}K", n / 1_000.0)
    } else {
        format!("${}", n)
    }
}

/// Inserts `,` every three digits of the integer part; the fractional part,
/// if any, is carried through untouched.
fn group_thousands(n: f64) -> String {
    let raw = format!("{}", n);
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().rev().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match frac_part {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn count_groups_thousands() {
        assert_eq!(format_count(&Numeric::Number(12345.0)), "12,345");
        assert_eq!(format_count(&Numeric::Number(1000000.0)), "1,000,000");
        assert_eq!(format_count(&Numeric::Number(999.0)), "999");
        assert_eq!(format_count(&Numeric::Number(0.0)), "0");
        assert_eq!(format_count(&Numeric::Number(-12345.0)), "-12,345");
        assert_eq!(format_count(&Numeric::Number(1234.5)), "1,234.5");
    }

    #[test]
    fn count_passes_non_numbers_through() {
        assert_eq!(format_count(&Numeric::Text("n/a".to_string())), "n/a");
        assert_eq!(format_count(&Numeric::Other(json!(null))), "null");
    }

    #[test]
    fn currency_boundaries() {
        assert_eq!(format_currency(&Numeric::Number(999.0)), "$999");
        assert_eq!(format_currency(&Numeric::Number(1000.0)), "$1.0K");
        assert_eq!(format_currency(&Numeric::Number(1_000_000.0)), "$1.0M");
        assert_eq!(format_currency(&Numeric::Number(2_500_000_000.0)), "$2.5B");
    }

    #[test]
    fn currency_rounds_to_one_decimal() {
        assert_eq!(format_currency(&Numeric::Number(45_270_000.0)), "$45.3M");
        assert_eq!(format_currency(&Numeric::Number(999_949.0)), "$999.9K");
    }

    #[test]
    fn currency_passes_non_numbers_through() {
        assert_eq!(
            format_currency(&Numeric::Text("undisclosed".to_string())),
            "undisclosed"
        );
    }

    #[test]
    fn field_helpers_render_missing_as_dash() {
        assert_eq!(format_count_field(None), "—");
        assert_eq!(format_currency_field(None), "—");
        assert_eq!(
            format_plain_field(Some(&Numeric::Number(1947.0))),
            "1947"
        );
    }
}
