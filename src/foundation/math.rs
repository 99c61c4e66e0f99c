/// Returns `v` when finite, otherwise `fallback`.
#[inline]
pub(crate) fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

/// Formats a number the way a browser stringifies it into a style value:
/// integral values carry no fraction and negative zero prints as `0`.
pub(crate) fn css_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_owned();
    }
    format!("{v}")
}
