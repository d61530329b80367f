//! Display formatting for computed text content.
//!
//! Counters are floored to integers and grouped with thousands separators;
//! monetary values always carry two decimal places.

/// Floor a count-up value and group digits with `,` separators.
pub fn format_counter(value: f64) -> String {
    let n = value.max(0.0).floor() as u64;
    format_grouped(n)
}

/// Group an integer's digits in threes with `,` separators.
pub fn format_grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a monetary amount with a `$` prefix and exactly two decimals.
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Format a list price as authored: whole amounts drop the decimals.
pub fn format_price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${amount:.0}")
    } else {
        format_money(amount)
    }
}

/// Format a fractional discount as a whole percentage, e.g. `0.2 -> "20%"`.
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

/// Discounted price: `price * (1 - discount)` when a discount is present.
pub fn discounted_price(price: f64, discount: Option<f64>) -> f64 {
    match discount {
        Some(d) => price * (1.0 - d),
        None => price,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/format.rs"]
mod tests;
