/// Style access to the element being animated.
///
/// Property names are CSS names (`z-index`, `-webkit-mask-size`). The compiler
/// only reads through this trait; the driver also writes setup properties.
pub trait StyleTarget {
    /// Current computed value of `property`, if the host can resolve it.
    fn computed_style(&self, property: &str) -> Option<String>;

    /// Layout width in CSS pixels.
    fn width(&self) -> f64;

    /// Layout height in CSS pixels.
    fn height(&self) -> f64;

    /// Write an inline style property.
    fn set_style(&mut self, property: &str, value: &str);
}

/// Current stacking level, clamped to the CSS `<integer>` range; `auto`,
/// missing or unparseable values count as `0`.
pub(crate) fn current_z_index<T: StyleTarget + ?Sized>(target: &T) -> i32 {
    target
        .computed_style("z-index")
        .and_then(|v| v.trim().parse::<i64>().ok())
        .map_or(0, |z| z.clamp(i32::MIN.into(), i32::MAX.into()) as i32)
}
