/// Whole-shilling amount with thousands separators, e.g. `KSh 12,345`.
pub fn format_currency(amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("KSh {sign}{grouped}")
}

/// Explicitly signed number rounded half away from zero; zero renders without a sign.
pub fn format_signed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals.min(15) as i32);
    let rounded = (value * factor).round() / factor;

    if rounded == 0.0 || !rounded.is_finite() {
        format!("{:.*}", decimals, 0.0)
    } else if rounded > 0.0 {
        format!("+{:.*}", decimals, rounded)
    } else {
        format!("{:.*}", decimals, rounded)
    }
}
