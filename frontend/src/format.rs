fn format_with_commas(digits: &str) -> String {
    let s = digits.chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// `-₹ 1,234.50` style label for an amount.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    // -0.001 rounds to 0.00 and should not carry a sign
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{} {}.{}", sign, symbol, format_with_commas(whole), cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(1234567.5, "₹"), "₹ 1,234,567.50");
        assert_eq!(format_currency(999.0, "₹"), "₹ 999.00");
        assert_eq!(format_currency(1000.0, "$"), "$ 1,000.00");
    }

    #[test]
    fn keeps_sign_for_negative_balance() {
        assert_eq!(format_currency(-150.0, "₹"), "-₹ 150.00");
        assert_eq!(format_currency(-0.001, "₹"), "₹ 0.00");
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(format_currency(0.1 + 0.2, "₹"), "₹ 0.30");
        assert_eq!(format_currency(0.0, "₹"), "₹ 0.00");
    }
}
