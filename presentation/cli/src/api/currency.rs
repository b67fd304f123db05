/// Formats `amount` as `<currency> <amount>` with comma thousands
/// separators and up to two fraction digits, e.g. `MWK 1,234.5`.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let fraction = fraction.trim_end_matches('0');
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    if fraction.is_empty() {
        format!("{} {}{}", currency, sign, grouped)
    } else {
        format!("{} {}{}.{}", currency, sign, grouped, fraction)
    }
}
