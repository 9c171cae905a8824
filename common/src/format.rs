//! 表示用フォーマット

/// 価格をグアテマラ・ケツァル表記にする（例: `Q25,000.00`）
///
/// NaNなど表示できない値は "-"
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "-".to_string();
    }

    let cents = (price.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}Q{}.{:02}", sign, whole, cents % 100)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
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
    fn test_format_price() {
        assert_eq!(format_price(25000.0), "Q25,000.00");
        assert_eq!(format_price(0.0), "Q0.00");
        assert_eq!(format_price(999.999), "Q1,000.00");
        assert_eq!(format_price(1234567.5), "Q1,234,567.50");
        assert_eq!(format_price(12.3), "Q12.30");
    }

    #[test]
    fn test_format_price_negative_and_nan() {
        assert_eq!(format_price(-5.0), "-Q5.00");
        assert_eq!(format_price(f64::NAN), "-");
    }
}
