//! Price formatting for the skip widget

/// Two decimals, no thousands separator: `240` -> `"240.00"`
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Amount in pounds: `240` -> `"£240.00"`
pub fn format_price(value: f64) -> String {
    format!("£{}", format_amount(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(240.0), "£240.00");
        assert_eq!(format_price(333.6), "£333.60");
        assert_eq!(format_price(1234.567), "£1234.57");
        assert_eq!(format_price(0.0), "£0.00");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(200.0 * 1.2), "240.00");
        assert_eq!(format_amount(12.346), "12.35");
    }
}
