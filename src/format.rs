use chrono::NaiveDate;
use rust_decimal::Decimal;

fn format_with_commas(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$1,234.50`, with a leading minus for negatives.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let abs = rounded.abs();
    let whole = abs.trunc();
    let cents = ((abs - whole) * Decimal::ONE_HUNDRED).trunc();
    let whole: u64 = whole.try_into().unwrap_or(0);
    let cents: u64 = cents.try_into().unwrap_or(0);
    format!("{}${}.{:02}", sign, format_with_commas(whole), cents)
}

/// Grouped number with at most two decimals, trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let scaled = (value.abs() * 100.0).round() as u64;
    let whole = scaled / 100;
    let frac = scaled % 100;
    let mut out = format!("{}{}", sign, format_with_commas(whole));
    if frac != 0 {
        let frac = format!("{:02}", frac);
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// Y-axis tick label.
pub fn axis_label(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.1}M", (value / 100_000.0).round() / 10.0)
    } else if value >= 1_000.0 {
        format!("${}K", (value / 1_000.0).round())
    } else {
        format!("${}", value)
    }
}

/// Label above a bar or in the centre of a donut.
pub fn short_money(value: f64) -> String {
    if value >= 1_000.0 {
        format!("${}K", (value / 1_000.0).round())
    } else {
        format!("${}", format_number(value))
    }
}

pub fn percent(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    format!("{:.*}%", decimals, (value * factor).round() / factor)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_commas() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1000), "1,000");
        assert_eq!(format_with_commas(1234567), "1,234,567");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::from_str("1234.5").unwrap()), "$1,234.50");
        assert_eq!(format_money(Decimal::from_str("-42.129").unwrap()), "-$42.13");
        assert_eq!(format_money(Decimal::ZERO), "$0.00");
        assert_eq!(format_money(Decimal::from_str("-0.001").unwrap()), "$0.00");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1500.0), "1,500");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(650.25), "650.25");
        assert_eq!(format_number(-3.1), "-3.1");
    }

    #[test]
    fn test_axis_labels() {
        assert_eq!(axis_label(0.0), "$0");
        assert_eq!(axis_label(200.0), "$200");
        assert_eq!(axis_label(2500.0), "$3K");
        assert_eq!(axis_label(1_250_000.0), "$1.3M");
    }

    #[test]
    fn test_short_money() {
        assert_eq!(short_money(800.0), "$800");
        assert_eq!(short_money(12_400.0), "$12K");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(12.345, 1), "12.3%");
        assert_eq!(percent(75.0, 0), "75%");
    }

    #[test]
    fn test_dates() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(format_date(date), "Mar 4, 2025");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "");
    }
}
