use std::collections::BTreeMap;

use crate::style::{naming::normalize_property, target::StyleTarget};

/// In-memory [`StyleTarget`]: an inline style declaration over fixed layout
/// metrics and stylesheet-computed values.
///
/// Inline values shadow computed ones. Every write is also appended to a log,
/// so callers can check the order in which properties were applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineStyle {
    width: f64,
    height: f64,
    computed: BTreeMap<String, String>,
    inline: Vec<(String, String)>,
    writes: Vec<(String, String)>,
}

impl InlineStyle {
    /// Element with the given layout box and no styles.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Add a stylesheet-computed value (builder style).
    pub fn with_computed(mut self, property: &str, value: impl Into<String>) -> Self {
        self.computed
            .insert(normalize_property(property), value.into());
        self
    }

    /// Inline value of `property`, if set.
    pub fn inline(&self, property: &str) -> Option<&str> {
        let key = normalize_property(property);
        self.inline
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Inline declarations in first-write order.
    pub fn declarations(&self) -> &[(String, String)] {
        &self.inline
    }

    /// Every write in call order, including overwrites.
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }

    /// Inline declarations serialized like a `style` attribute.
    pub fn css_text(&self) -> String {
        self.inline
            .iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl StyleTarget for InlineStyle {
    fn computed_style(&self, property: &str) -> Option<String> {
        let key = normalize_property(property);
        self.inline
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.clone())
            .or_else(|| self.computed.get(&key).cloned())
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_style(&mut self, property: &str, value: &str) {
        let key = normalize_property(property);
        self.writes.push((key.clone(), value.to_owned()));
        match self.inline.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value.to_owned(),
            None => self.inline.push((key, value.to_owned())),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/inline.rs"]
mod tests;
