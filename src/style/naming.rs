//! Conversions between CSS property names and script-style keys.

const VENDOR_PREFIXES: [&str; 4] = ["webkit", "moz", "ms", "o"];

/// Join words split on `-`, `_`, whitespace or `.` in lower camel case.
///
/// The first word is kept as-is; following words get an uppercase first letter.
pub fn camelize(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for (i, word) in source
        .split(|c: char| c == '-' || c == '_' || c == '.' || c.is_whitespace())
        .enumerate()
    {
        if i == 0 {
            out.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// CSS property name to style key: `-webkit-transition` -> `webkitTransition`,
/// `z-index` -> `zIndex`.
pub fn style_key(css_name: &str) -> String {
    camelize(css_name.strip_prefix('-').unwrap_or(css_name))
}

/// Style key to CSS property name: `webkitTransition` -> `-webkit-transition`,
/// `zIndex` -> `z-index`.
pub fn css_name(style_key: &str) -> String {
    let mut out = String::with_capacity(style_key.len() + 4);
    let vendor = VENDOR_PREFIXES.iter().any(|p| {
        style_key
            .strip_prefix(p)
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| c.is_ascii_uppercase())
    });
    if vendor {
        out.push('-');
    }
    for c in style_key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Normalize either spelling to the lowercase CSS property name.
pub fn normalize_property(name: &str) -> String {
    let name = name.trim();
    if name.chars().any(|c| c.is_ascii_uppercase()) {
        css_name(name)
    } else {
        name.to_owned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/naming.rs"]
mod tests;
