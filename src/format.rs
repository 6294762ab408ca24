//! Number formatting shared by histogram labels and the presenter.

/// Round `value` to the nearest integer and group its digits with commas.
///
/// Non-finite values format as `"0"`.
///
/// ```rust
/// use price_dashboard::format::format_grouped;
/// assert_eq!(format_grouped(1234567.4), "1,234,567");
/// assert_eq!(format_grouped(-2500.0), "-2,500");
/// ```
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        grouped.push('-');
    }
    grouped.chars().rev().collect()
}
