//! Raw-input normalization applied before salary validation.

/// Canonicalize free-typed numeric input.
///
/// Blank or whitespace-only input becomes the empty string; otherwise every
/// character that is not an ASCII digit is stripped, preserving digit order.
/// Idempotent, so re-applying it to an already-normalized value is a no-op.
pub fn normalize_number_input(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    raw.chars().filter(char::is_ascii_digit).collect()
}
