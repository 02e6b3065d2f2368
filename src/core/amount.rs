/// Monetary amounts. Stored and accumulated at full precision;
/// rounding happens only when an amount is formatted for display.
pub type Amount = f64;

/// Interprets free text as a contribution.
///
/// Accepts decimal numbers with either `.` or `,` as the decimal
/// separator. Returns `None` for anything that is not a finite,
/// strictly positive number, so the caller can route the text
/// elsewhere instead of treating it as an error.
pub fn parse_contribution(text: &str) -> Option<Amount> {
    let normalized = text.trim().replace(',', ".");
    match normalized.parse::<Amount>() {
        Ok(value) if value.is_finite() && value > 0.0 => Some(value),
        _ => None,
    }
}

/// Formats an amount for display: rounded to whole units,
/// thousands grouped with spaces (`1234567` -> `"1 234 567"`).
pub fn format_amount(amount: Amount) -> String {
    // {:.0} alone rounds ties to even; round() first keeps them
    // away from zero
    let digits = format!("{:.0}", amount.round());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    return grouped;
}
