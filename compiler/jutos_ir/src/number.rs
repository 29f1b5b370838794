//! Canonical text form of numbers.
//!
//! Shared by the parser (numeric record keys) and the evaluator (printing,
//! string concatenation, record indexing) so both agree on one spelling.

/// Render `value` the way programs see it: integral values without a
/// fractional part, `NaN`, `Infinity` and `-Infinity` spelled out, and
/// negative zero as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        // `Display` for f64 already omits `.0` and never uses exponents
        value.to_string()
    }
}
