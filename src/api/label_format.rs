use chrono::NaiveDate;

/// Placeholder shown for missing metrics.
pub const MISSING_VALUE: &str = "—";

pub(super) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Price with two decimals and thousands grouping: `42,000.50`.
pub(super) fn format_price(value: f64) -> String {
    format_grouped(value, 2, 2)
}

/// Fraction rendered as percent with two decimals: `0.0123` -> `1.23%`.
pub(super) fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(value) if value.is_finite() => format!("{}%", format_grouped(value * 100.0, 2, 2)),
        _ => MISSING_VALUE.to_owned(),
    }
}

/// Multiplier with up to three decimals: `1.5x`.
pub(super) fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(value) if value.is_finite() => format!("{}x", format_grouped(value, 0, 3)),
        _ => MISSING_VALUE.to_owned(),
    }
}

pub(super) fn format_score(value: Option<f64>) -> String {
    match value {
        Some(value) if value.is_finite() => format_grouped(value, 1, 1),
        _ => MISSING_VALUE.to_owned(),
    }
}

fn format_grouped(value: f64, min_decimals: usize, max_decimals: usize) -> String {
    if !value.is_finite() {
        return MISSING_VALUE.to_owned();
    }
    let text = format!("{:.max_decimals$}", value.abs());
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (text.as_str(), ""),
    };

    let mut fraction = fraction.to_owned();
    while fraction.len() > min_decimals && fraction.ends_with('0') {
        fraction.pop();
    }

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (position, digit) in integer.chars().enumerate() {
        if position > 0 && (integer.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = integer.chars().all(|c| c == '0') && fraction.chars().all(|c| c == '0');
    let mut out = String::new();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{format_percent, format_price, format_ratio, format_score};

    #[test]
    fn price_uses_grouping_and_two_decimals() {
        assert_eq!(format_price(42_000.5), "42,000.50");
        assert_eq!(format_price(1_234_567.891), "1,234,567.89");
        assert_eq!(format_price(999.999), "1,000.00");
        assert_eq!(format_price(-12.3), "-12.30");
        assert_eq!(format_price(-0.001), "0.00");
        assert_eq!(format_price(f64::NAN), "—");
    }

    #[test]
    fn percent_scales_fraction() {
        assert_eq!(format_percent(Some(0.0123)), "1.23%");
        assert_eq!(format_percent(Some(-0.05)), "-5.00%");
        assert_eq!(format_percent(None), "—");
    }

    #[test]
    fn ratio_trims_trailing_zeros() {
        assert_eq!(format_ratio(Some(1.5)), "1.5x");
        assert_eq!(format_ratio(Some(2.0)), "2x");
        assert_eq!(format_ratio(Some(1.23456)), "1.235x");
        assert_eq!(format_ratio(None), "—");
    }

    #[test]
    fn score_has_one_decimal() {
        assert_eq!(format_score(Some(61.27)), "61.3");
        assert_eq!(format_score(Some(70.0)), "70.0");
        assert_eq!(format_score(None), "—");
    }
}
