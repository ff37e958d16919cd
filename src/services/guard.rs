/// Entry guard for metric fields: accepts any prefix of a non-negative
/// decimal literal, including the empty string and trailing-dot states
/// like "12." that are mid-typing but still renderable. Signs, exponents,
/// and second dots never get in, so the later parse step only has to deal
/// with digits and at most one dot.
pub fn is_valid_numeric_input(text: &str) -> bool {
    let mut seen_dot = false;
    text.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    })
}

/// Deferred full-number parse of a guarded field. Digit-free text ("" or
/// a bare ".") is unset, which is distinct from an explicit zero.
pub fn parse_field(text: &str) -> Option<f64> {
    if !text.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<f64>().ok()
}
