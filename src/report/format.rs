//! Money formatting helpers shared by the table, summary and CSV output

/// Whole amount with thousands separators, e.g. `NT$391,000`
pub fn format_money(currency: &str, amount: u64) -> String {
    format!("{}{}", currency, group_thousands(amount))
}

/// Unit price without separators, e.g. `NT$97`
pub fn format_unit_price(currency: &str, price: u32) -> String {
    format!("{}{}", currency, price)
}

/// Two-decimal average, e.g. `NT$56.67`
pub fn format_average(currency: &str, value: f64) -> String {
    format!("{}{:.2}", currency, value)
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
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
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(391_000), "391,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_money_formats() {
        assert_eq!(format_money("NT$", 100_000), "NT$100,000");
        assert_eq!(format_unit_price("NT$", 97), "NT$97");
        assert_eq!(format_average("NT$", 238_000.0 / 350.0 / 12.0), "NT$56.67");
        assert_eq!(format_average("$", 0.0), "$0.00");
    }
}
