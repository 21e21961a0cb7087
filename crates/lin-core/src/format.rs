use regex::Regex;
use std::sync::LazyLock;

static NON_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]").unwrap());

/// Lenient integer parse: strip every non-digit character, then parse.
/// Returns `default` when no digits are left ("", "abc"). A digit run too
/// long for u32 saturates at `u32::MAX`. A leading minus is stripped with
/// the rest, so the result is never negative.
pub fn to_int(raw: &str, default: u32) -> u32 {
    let digits = NON_DIGIT.replace_all(raw, "");
    if digits.is_empty() {
        return default;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Render `n` with comma thousands separators: 17885 → "17,885".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let lead = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a count for a narrative line, grouped or plain.
pub fn render_count(n: u64, grouped: bool) -> String {
    if grouped {
        group_thousands(n)
    } else {
        n.to_string()
    }
}

/// Round a non-negative product to the nearest integer count (half away from zero).
pub fn round_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}
