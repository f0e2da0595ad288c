//! Display formatting for price cards

/// Rupee amount with Indian digit grouping: 1234567 -> "₹12,34,567".
/// The amount is rounded to whole rupees.
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{}₹{}", sign, group_indian(&digits))
}

/// Last three digits, then groups of two
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// "+1.3%" for gains (and zero), "-3.6%" for losses
pub fn format_percent_change(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{:.1}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// "₹/ton" -> "ton"
pub fn unit_basis(unit: &str) -> &str {
    unit.split_once('/').map(|(_, basis)| basis).unwrap_or(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(950.0), "₹950");
        assert_eq!(format_inr(23500.0), "₹23,500");
        assert_eq!(format_inr(98800.4), "₹98,800");
        assert_eq!(format_inr(123456.0), "₹1,23,456");
        assert_eq!(format_inr(1234567.0), "₹12,34,567");
        assert_eq!(format_inr(-4200.0), "-₹4,200");
    }

    #[test]
    fn test_format_percent_change() {
        assert_eq!(format_percent_change(1.2931), "+1.3%");
        assert_eq!(format_percent_change(0.0), "+0.0%");
        assert_eq!(format_percent_change(-3.631), "-3.6%");
    }

    #[test]
    fn test_unit_basis() {
        assert_eq!(unit_basis("₹/ton"), "ton");
        assert_eq!(unit_basis("quintal"), "quintal");
    }
}
