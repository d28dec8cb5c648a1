// src/domain/format.rs

const NAIRA: char = '₦';
const MILLION: u64 = 1_000_000;

/// Renders a naira amount for display.
///
/// Amounts of a million or more collapse to one decimal place of millions
/// (`₦3.5M`, rounded half-up); anything smaller keeps every digit with comma
/// grouping (`₦150,000`).
///
/// Ties round up exactly, so `1_150_000` is `₦1.2M`. Binary floating point
/// would print `₦1.1M` there.
pub fn format_price(amount: u64) -> String {
    if amount >= MILLION {
        // Tenths of a million, rounded on the remainder so nothing overflows.
        const TENTH: u64 = MILLION / 10;
        let tenths = amount / TENTH + u64::from(amount % TENTH >= TENTH / 2);
        return format!("{NAIRA}{}.{}M", tenths / 10, tenths % 10);
    }
    format!("{NAIRA}{}", group_thousands(amount))
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
