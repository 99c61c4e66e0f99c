use std::{fmt, time::Duration};

use crate::{
    animation::{descriptor::secs_to_duration, ease::Ease},
    foundation::math::css_number,
};

/// Style properties the preset compiler reads, animates or sets up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Property {
    /// `transform`
    Transform,
    /// `transform-origin`
    TransformOrigin,
    /// `opacity`
    Opacity,
    /// `z-index`
    ZIndex,
    /// `mask-position-x`
    MaskPositionX,
    /// `backface-visibility`
    BackfaceVisibility,
    /// `mask-image`
    MaskImage,
    /// `mask-size`
    MaskSize,
}

impl Property {
    /// Standard CSS property name.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::TransformOrigin => "transform-origin",
            Self::Opacity => "opacity",
            Self::ZIndex => "z-index",
            Self::MaskPositionX => "mask-position-x",
            Self::BackfaceVisibility => "backface-visibility",
            Self::MaskImage => "mask-image",
            Self::MaskSize => "mask-size",
        }
    }

    /// `-webkit-` alias for properties older mobile WebKit only honors prefixed.
    pub fn webkit_name(self) -> Option<&'static str> {
        match self {
            Self::Transform => Some("-webkit-transform"),
            Self::TransformOrigin => Some("-webkit-transform-origin"),
            Self::MaskPositionX => Some("-webkit-mask-position-x"),
            Self::BackfaceVisibility => Some("-webkit-backface-visibility"),
            Self::MaskImage => Some("-webkit-mask-image"),
            Self::MaskSize => Some("-webkit-mask-size"),
            Self::Opacity | Self::ZIndex => None,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// Start or end value of a channel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ChannelValue {
    /// Plain number (`opacity`, `z-index`).
    Number(f64),
    /// CSS text such as a transform list or a length.
    Css(String),
}

impl ChannelValue {
    /// Build a CSS text value.
    pub fn css(text: impl Into<String>) -> Self {
        Self::Css(text.into())
    }

    /// The numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Css(_) => None,
        }
    }

    /// The CSS text, if this is a text value.
    pub fn as_css(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Css(s) => Some(s),
        }
    }
}

impl fmt::Display for ChannelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => f.write_str(&css_number(*v)),
            Self::Css(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ChannelValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ChannelValue {
    fn from(value: &str) -> Self {
        Self::Css(value.to_owned())
    }
}

impl From<String> for ChannelValue {
    fn from(value: String) -> Self {
        Self::Css(value)
    }
}

/// One animated property with its start and end value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertyChannel {
    /// Animated property.
    pub property: Property,
    /// Value at progress 0.
    pub from: ChannelValue,
    /// Value at progress 1.
    pub to: ChannelValue,
}

/// Channels keyed by property, in first-insertion order.
///
/// A property appears at most once; [`ChannelMap::upsert`] on an existing
/// property rewrites its values in place.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ChannelMap {
    channels: Vec<PropertyChannel>,
}

impl ChannelMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a channel, or overwrite `from`/`to` of the existing one for `property`.
    pub fn upsert(
        &mut self,
        property: Property,
        from: impl Into<ChannelValue>,
        to: impl Into<ChannelValue>,
    ) {
        let (from, to) = (from.into(), to.into());
        match self.channels.iter_mut().find(|c| c.property == property) {
            Some(existing) => {
                existing.from = from;
                existing.to = to;
            }
            None => self.channels.push(PropertyChannel { property, from, to }),
        }
    }

    /// Channel for `property`, if present.
    pub fn get(&self, property: Property) -> Option<&PropertyChannel> {
        self.channels.iter().find(|c| c.property == property)
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// `true` when no channel has been inserted.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Channels in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, PropertyChannel> {
        self.channels.iter()
    }

    /// Animated properties in insertion order.
    pub fn properties(&self) -> Vec<Property> {
        self.channels.iter().map(|c| c.property).collect()
    }
}

impl<'a> IntoIterator for &'a ChannelMap {
    type Item = &'a PropertyChannel;
    type IntoIter = std::slice::Iter<'a, PropertyChannel>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A non-animatable style write applied once before the tween starts.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetupEffect {
    /// Property to write.
    pub property: Property,
    /// CSS value to write.
    pub value: String,
}

impl SetupEffect {
    /// Build a setup write.
    pub fn new(property: Property, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// Ordered channels plus timing, ready for a tween engine.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolationPlan {
    /// Animated channels in deterministic order.
    pub channels: ChannelMap,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Timing function.
    pub ease: Ease,
}

impl InterpolationPlan {
    /// Duration as a [`Duration`], saturating when out of range.
    pub fn duration(&self) -> Duration {
        secs_to_duration(self.duration_secs)
    }

    /// Property names in channel order, as handed to a tween constructor.
    pub fn property_names(&self) -> Vec<&'static str> {
        self.channels.iter().map(|c| c.property.css_name()).collect()
    }

    /// Start values in channel order.
    pub fn from_values(&self) -> Vec<ChannelValue> {
        self.channels.iter().map(|c| c.from.clone()).collect()
    }

    /// End values in channel order.
    pub fn to_values(&self) -> Vec<ChannelValue> {
        self.channels.iter().map(|c| c.to.clone()).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/channel.rs"]
mod tests;
