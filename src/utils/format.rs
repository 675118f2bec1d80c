/// Fixed two-decimal number with en-US thousands grouping, e.g. `1247.89` -> `"1,247.89"`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    // Ties round away from zero, as Intl.NumberFormat does. `{:.2}` would round them to even.
    let cents = (value.abs() * 100.0).round();
    let digits = format!("{:03.0}", cents);
    let (int_part, frac_part) = digits.split_at(digits.len() - 2);
    let sign = if value < 0.0 { "-" } else { "" };

    format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_and_pads() {
        assert_eq!(format_number(1247.89), "1,247.89");
        assert_eq!(format_number(892456.32), "892,456.32");
        assert_eq!(format_number(23.45), "23.45");
        assert_eq!(format_number(30.0), "30.00");
        assert_eq!(format_number(0.0), "0.00");
        assert_eq!(format_number(1_000_000.5), "1,000,000.50");
        assert_eq!(format_number(999.999), "1,000.00");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format_number(0.125), "0.13");
        assert_eq!(format_number(1.625), "1.63");
        assert_eq!(format_number(1000.125), "1,000.13");
        assert_eq!(format_number(892456.125), "892,456.13");
        assert_eq!(format_number(-1.625), "-1.63");
        assert_eq!(format_number(0.004), "0.00");
        assert_eq!(format_number(0.05), "0.05");
    }

    #[test]
    fn same_value_same_string() {
        let v = 1300.123_456;
        assert_eq!(format_number(v), format_number(v));
        assert_eq!(format_number(v), "1,300.12");
    }

    #[test]
    fn negatives_and_non_finite() {
        assert_eq!(format_number(-1234.5), "-1,234.50");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY), "-∞");
    }
}
