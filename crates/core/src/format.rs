//! Display formatting shared by every widget.

/// Two decimal places, the way every fare/distance/speed value is shown.
pub fn fixed2(value: f64) -> String {
    format!("{value:.2}")
}

pub fn currency(value: f64) -> String {
    format!("${value:.2}")
}

pub fn miles(value: f64) -> String {
    format!("{value:.2} mi")
}

/// Integer with `,` thousands separators.
pub fn thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

/// en-US style number: grouped integer part, at most three fraction digits,
/// trailing fraction zeros dropped.
pub fn locale_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = format!("{:.3}", value.abs());
    let (integer, fraction) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let sign = if value < 0.0 && (integer != "0" || !fraction.is_empty()) {
        "-"
    } else {
        ""
    };

    if fraction.is_empty() {
        format!("{sign}{}", group_digits(integer))
    } else {
        format!("{sign}{}.{fraction}", group_digits(integer))
    }
}

/// Grouped integer part with exactly two fraction digits: `1820.5 -> 1,820.50`.
pub fn grouped_fixed2(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = format!("{:.2}", value.abs());
    let (integer, fraction) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), "00"));
    let sign = if value < 0.0 && rendered != "0.00" { "-" } else { "" };
    format!("{sign}{}.{fraction}", group_digits(integer))
}

/// Rounds to the nearest whole number and groups it.
pub fn rounded_thousands(value: f64) -> String {
    locale_number(value.round())
}

/// `0 -> 12:00 AM`, `13 -> 1:00 PM`.
pub fn hour_12(hour: u8) -> String {
    let suffix = if hour % 24 < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        other => other,
    };
    format!("{hour12}:00 {suffix}")
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_from_the_right() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(12_345_678), "12,345,678");
    }

    #[test]
    fn locale_number_matches_browser_output() {
        assert_eq!(locale_number(1_234_567.0), "1,234,567");
        assert_eq!(locale_number(12.5), "12.5");
        assert_eq!(locale_number(12.35), "12.35");
        assert_eq!(locale_number(1_500.125_6), "1,500.126");
        assert_eq!(locale_number(-3_000.0), "-3,000");
        assert_eq!(locale_number(-0.0001), "0");
    }

    #[test]
    fn fixed_point_helpers_round_to_two_places() {
        assert_eq!(fixed2(13.456_7), "13.46");
        assert_eq!(currency(9.0), "$9.00");
        assert_eq!(miles(3.2), "3.20 mi");
    }

    #[test]
    fn grouped_fixed2_keeps_two_places() {
        assert_eq!(grouped_fixed2(19.0), "19.00");
        assert_eq!(grouped_fixed2(3.1), "3.10");
        assert_eq!(grouped_fixed2(18.999), "19.00");
        assert_eq!(grouped_fixed2(1_820.5), "1,820.50");
        assert_eq!(grouped_fixed2(-0.001), "0.00");
    }

    #[test]
    fn peak_hour_renders_in_twelve_hour_clock() {
        assert_eq!(hour_12(0), "12:00 AM");
        assert_eq!(hour_12(9), "9:00 AM");
        assert_eq!(hour_12(12), "12:00 PM");
        assert_eq!(hour_12(18), "6:00 PM");
    }

    #[test]
    fn rounded_thousands_drops_fraction() {
        assert_eq!(rounded_thousands(48_211.6), "48,212");
    }
}
