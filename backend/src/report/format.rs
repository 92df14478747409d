//! Number formatting for text reports

/// Group the integer digits of `value` in thousands, with `decimals` places.
///
/// ```
/// use cleanup_cost_core::report::format::thousands;
/// assert_eq!(thousands(1234567.891, 2), "1,234,567.89");
/// assert_eq!(thousands(-950.0, 0), "-950");
/// ```
pub fn thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    // "-0.00" reads as zero
    if value < 0.0 && grouped.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Dollar amount with cents, e.g. `$1,234.56` or `-$12.00`
pub fn money(value: f64) -> String {
    let body = thousands(value, 2);
    match body.strip_prefix('-') {
        Some(abs) => format!("-${}", abs),
        None => format!("${}", body),
    }
}

/// Integer count with thousands separators
pub fn count(value: u64) -> String {
    thousands(value as f64, 0)
}
