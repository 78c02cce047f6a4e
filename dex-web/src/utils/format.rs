//! # Formatting utilities
//!
//! Number and address formatting for the exchange panel and log output.
//!
//! ## Functions
//!
//! - [`format_number`] - Format numbers with comma separators
//! - [`format_ccd`] - Format a CCD amount with 4 decimal places
//! - [`truncate_address`] - Shorten an account address for display

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Arguments
///
/// * `value` - The number to format
/// * `decimals` - Number of decimal places to show
///
/// # Examples
///
/// ```rust
/// use dex_web::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let parts: Vec<&str> = formatted.split('.').collect();

    let integer_part = parts[0];
    let decimal_part = if parts.len() > 1 { parts[1] } else { "" };

    // Add commas to integer part
    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    let integer_with_commas: String = result.chars().rev().collect();

    if decimal_part.is_empty() {
        integer_with_commas
    } else {
        format!("{}.{}", integer_with_commas, decimal_part)
    }
}

/// Format a CCD amount with 4 decimal places and the currency suffix.
///
/// # Examples
///
/// ```rust
/// use dex_web::utils::format::format_ccd;
///
/// assert_eq!(format_ccd(0.1), "0.1000 CCD");
/// ```
pub fn format_ccd(amount: f64) -> String {
    format!("{} CCD", format_number(amount, 4))
}

/// Shorten an account address to its first and last 4 characters.
/// Counts chars rather than bytes so arbitrary input cannot split a
/// multi-byte character.
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 8 {
        return address.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
