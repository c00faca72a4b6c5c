//! Shared formatting utilities.
//!
//! Prices are shown as `€ ` followed by the amount with `.` as the thousands
//! separator and `,` before any fractional part, e.g. `€ 1.234.567,5`.
//! [`parse_price`] accepts that format back, along with plain numbers.

const CURRENCY: &str = "€";

/// Formats a price for display.
///
/// Non-finite values render as `€ -`.
///
/// # Example
///
/// ```rust
/// use adboard::ui::helpers::format_price;
///
/// assert_eq!(format_price(1234567.0), "€ 1.234.567");
/// assert_eq!(format_price(9.5), "€ 9,5");
/// ```
#[must_use]
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return format!("{CURRENCY} -");
    }

    let raw = format!("{}", price.abs());
    let (whole, fraction) = raw.split_once('.').map_or((raw.as_str(), None), |(w, f)| (w, Some(f)));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if price < 0.0 { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{CURRENCY} {sign}{grouped},{fraction}"),
        None => format!("{CURRENCY} {sign}{grouped}"),
    }
}

/// Parses a price typed by the user.
///
/// Accepts `€ 1.500`, `1.500,25`, `1500` and `1500.25`. A single `.` followed
/// by other than three digits is read as a decimal point.
///
/// # Example
///
/// ```rust
/// use adboard::ui::helpers::parse_price;
///
/// assert_eq!(parse_price("€ 1.500"), Some(1500.0));
/// assert_eq!(parse_price("abc"), None);
/// ```
#[must_use]
pub fn parse_price(input: &str) -> Option<f64> {
    let cleaned: String = input
        .trim()
        .trim_start_matches(CURRENCY)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else if is_grouped(&cleaned) {
        cleaned.replace('.', "")
    } else {
        cleaned
    };

    normalized.parse::<f64>().ok().filter(|p| p.is_finite())
}

/// `1.500` and `1.234.567` are grouped; `1.5` and `1500.25` are not.
fn is_grouped(value: &str) -> bool {
    let mut groups = value.split('.');
    let Some(head) = groups.next() else {
        return false;
    };
    let tail: Vec<&str> = groups.collect();

    !tail.is_empty()
        && !head.is_empty()
        && head.len() <= 3
        && tail.iter().all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()))
}
