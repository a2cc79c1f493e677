//! CSS `transition` and `animation` shorthand formatting.
//!
//! [`Transition`] and [`Animation`] are small builders whose `Display`
//! output is a ready-to-use shorthand value.
//!
//! # Output compatibility
//!
//! The shorthand layout is fixed: the timing function slot is always
//! emitted, even when empty. A descriptor without a timing function
//! therefore renders a double space between the duration and the delay
//! (`"10s  0s"`). Stored themes and stylesheets generated by earlier
//! releases depend on this exact text, so it is kept as is.
//!
//! # Example
//!
//! ```rust
//! use themevars::{Animation, IterationCount, TimingFunction, Transition};
//!
//! let fade = Transition::new(0.3).timing(TimingFunction::EaseInOut);
//! assert_eq!(fade.to_string(), "0.3s ease-in-out 0s");
//!
//! let spin = Animation::new()
//!     .name("spin")
//!     .duration(2.0)
//!     .iteration_count(IterationCount::Infinite);
//! assert_eq!(spin.to_string(), "infinite normal none running spin 2s  0s");
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Renders a number the way a browser's `Number#toString` does: integral
/// numbers lose their fraction, `-0` prints as `0`, and magnitudes outside
/// `[1e-6, 1e21)` use exponent notation (`1e+21`, `1.5e-7`).
pub fn css_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{value:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{mantissa}e+{power}")
            }
            _ => exp,
        };
    }
    format!("{value}")
}

/// CSS easing keywords accepted by transitions and animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimingFunction {
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    Linear,
    StepStart,
    StepEnd,
    CubicBezier,
    Step,
    Frames,
}

impl TimingFunction {
    /// Returns the CSS keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::Linear => "linear",
            Self::StepStart => "step-start",
            Self::StepEnd => "step-end",
            Self::CubicBezier => "cubic-bezier",
            Self::Step => "step",
            Self::Frames => "frames",
        }
    }
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `animation-direction` keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationDirection {
    #[default]
    Normal,
    Reverse,
    Alternate,
    AlternateReverse,
}

impl fmt::Display for AnimationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Reverse => "reverse",
            Self::Alternate => "alternate",
            Self::AlternateReverse => "alternate-reverse",
        })
    }
}

/// `animation-fill-mode` keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillMode {
    #[default]
    None,
    Forwards,
    Backwards,
    Both,
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Forwards => "forwards",
            Self::Backwards => "backwards",
            Self::Both => "both",
        })
    }
}

/// `animation-play-state` keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayState {
    #[default]
    Running,
    Paused,
}

impl fmt::Display for PlayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Running => "running",
            Self::Paused => "paused",
        })
    }
}

/// `animation-iteration-count` value.
///
/// A count of zero renders as `infinite`, the same as an unset count.
/// Serializes as a number or the string `"infinite"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IterationCount {
    Count(u32),
    #[default]
    Infinite,
}

impl fmt::Display for IterationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) if *n > 0 => write!(f, "{n}"),
            _ => f.write_str("infinite"),
        }
    }
}

impl From<u32> for IterationCount {
    fn from(n: u32) -> Self {
        Self::Count(n)
    }
}

impl Serialize for IterationCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Count(n) => serializer.serialize_u32(*n),
            Self::Infinite => serializer.serialize_str("infinite"),
        }
    }
}

impl<'de> Deserialize<'de> for IterationCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IterationCountVisitor)
    }
}

struct IterationCountVisitor;

impl Visitor<'_> for IterationCountVisitor {
    type Value = IterationCount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer or \"infinite\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        u32::try_from(v)
            .map(IterationCount::Count)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u32::try_from(v)
            .map(IterationCount::Count)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v == "infinite" {
            Ok(IterationCount::Infinite)
        } else {
            Err(E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }
}

/// Writes `{timing}{(v1,v2,...)}`; the parenthesized list only appears for
/// `cubic-bezier` with at least one value.
fn write_timing(
    f: &mut fmt::Formatter<'_>,
    timing: Option<TimingFunction>,
    values: &[f64],
) -> fmt::Result {
    let Some(timing) = timing else {
        return Ok(());
    };
    f.write_str(timing.as_str())?;
    if timing == TimingFunction::CubicBezier && !values.is_empty() {
        let joined: Vec<String> = values.iter().map(|v| css_number(*v)).collect();
        write!(f, "({})", joined.join(","))?;
    }
    Ok(())
}

/// Seconds with the falsy fallback: `None`, `0` and `NaN` use `default`.
fn seconds_or(value: Option<f64>, default: &str) -> String {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => css_number(v),
        _ => default.to_string(),
    }
}

/// A `transition` shorthand value: `{duration}s {timing} {delay}s`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    /// Duration in seconds.
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing_func: Option<TimingFunction>,
    /// Control points, only used with [`TimingFunction::CubicBezier`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timing_func_val: Vec<f64>,
    /// Delay in seconds, `0` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
}

impl Transition {
    /// Creates a transition lasting `duration` seconds.
    pub fn new(duration: impl Into<f64>) -> Self {
        Self {
            duration: duration.into(),
            ..Self::default()
        }
    }

    /// Sets the timing function.
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing_func = Some(timing);
        self
    }

    /// Sets the `cubic-bezier` control points.
    pub fn timing_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<f64>,
    {
        self.timing_func_val = values.into_iter().map(Into::into).collect();
        self
    }

    /// Shorthand for a `cubic-bezier(x1,y1,x2,y2)` timing function.
    pub fn cubic_bezier(self, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        self.timing(TimingFunction::CubicBezier)
            .timing_values([x1, y1, x2, y2])
    }

    /// Sets the delay in seconds.
    pub fn delay(mut self, delay: impl Into<f64>) -> Self {
        self.delay = Some(delay.into());
        self
    }

    /// Returns the shorthand string.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s ", css_number(self.duration))?;
        write_timing(f, self.timing_func, &self.timing_func_val)?;
        write!(f, " {}s", seconds_or(self.delay, "0"))
    }
}

/// An `animation` shorthand value.
///
/// Renders, space separated:
/// `{iteration-count} {direction} {fill-mode} {play-state} {name} {duration}s {timing} {delay}s`
/// with the defaults `infinite`, `normal`, `none`, `running`, `""`, `1` and
/// `0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<AnimationDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_mode: Option<FillMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iteration_count: Option<IterationCount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_state: Option<PlayState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing_func: Option<TimingFunction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timing_func_val: Vec<f64>,
}

impl Animation {
    /// Creates an animation with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delay in seconds.
    pub fn delay(mut self, delay: impl Into<f64>) -> Self {
        self.delay = Some(delay.into());
        self
    }

    /// Sets the direction.
    pub fn direction(mut self, direction: AnimationDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Sets the duration in seconds.
    pub fn duration(mut self, duration: impl Into<f64>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Sets the fill mode.
    pub fn fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = Some(fill_mode);
        self
    }

    /// Sets the iteration count.
    pub fn iteration_count(mut self, count: impl Into<IterationCount>) -> Self {
        self.iteration_count = Some(count.into());
        self
    }

    /// Sets the `@keyframes` name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the play state.
    pub fn play_state(mut self, play_state: PlayState) -> Self {
        self.play_state = Some(play_state);
        self
    }

    /// Sets the timing function.
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing_func = Some(timing);
        self
    }

    /// Sets the `cubic-bezier` control points.
    pub fn timing_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<f64>,
    {
        self.timing_func_val = values.into_iter().map(Into::into).collect();
        self
    }

    /// Shorthand for a `cubic-bezier(x1,y1,x2,y2)` timing function.
    pub fn cubic_bezier(self, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        self.timing(TimingFunction::CubicBezier)
            .timing_values([x1, y1, x2, y2])
    }

    /// Returns the shorthand string.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}s ",
            self.iteration_count.unwrap_or_default(),
            self.direction.unwrap_or_default(),
            self.fill_mode.unwrap_or_default(),
            self.play_state.unwrap_or_default(),
            self.name.as_deref().unwrap_or_default(),
            seconds_or(self.duration, "1"),
        )?;
        write_timing(f, self.timing_func, &self.timing_func_val)?;
        write!(f, " {}s", seconds_or(self.delay, "0"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_number_exponent_range() {
        assert_eq!(css_number(1e21), "1e+21");
        assert_eq!(css_number(-2.5e22), "-2.5e+22");
        assert_eq!(css_number(1e-7), "1e-7");
        assert_eq!(css_number(1.5e-7), "1.5e-7");
        assert_eq!(css_number(1e-6), "0.000001");
        assert_eq!(css_number(123_456_789_012_345_680_000.0), "123456789012345680000");
    }

    #[test]
    fn test_css_number() {
        assert_eq!(css_number(10.0), "10");
        assert_eq!(css_number(0.5), "0.5");
        assert_eq!(css_number(-0.0), "0");
        assert_eq!(css_number(-1.25), "-1.25");
        assert_eq!(css_number(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_transition_default_delay() {
        let t = Transition::new(10).timing(TimingFunction::Ease);
        assert_eq!(t.to_css(), "10s ease 0s");
    }

    #[test]
    fn test_transition_cubic_bezier() {
        let t = Transition::new(2)
            .timing(TimingFunction::CubicBezier)
            .timing_values([1, 0, 1, 0])
            .delay(0.5);
        assert_eq!(t.to_css(), "2s cubic-bezier(1,0,1,0) 0.5s");
    }

    #[test]
    fn test_transition_cubic_bezier_helper() {
        let t = Transition::new(1).cubic_bezier(0.25, 0.1, 0.25, 1.0);
        assert_eq!(t.to_css(), "1s cubic-bezier(0.25,0.1,0.25,1) 0s");
    }

    #[test]
    fn test_transition_cubic_bezier_without_values() {
        let t = Transition::new(1).timing(TimingFunction::CubicBezier);
        assert_eq!(t.to_css(), "1s cubic-bezier 0s");
    }

    #[test]
    fn test_transition_values_ignored_for_other_timing() {
        let t = Transition::new(1)
            .timing(TimingFunction::Linear)
            .timing_values([1, 2, 3, 4]);
        assert_eq!(t.to_css(), "1s linear 0s");
    }

    #[test]
    fn test_transition_without_timing_keeps_double_space() {
        let t = Transition::new(3).delay(1);
        assert_eq!(t.to_css(), "3s  1s");
    }

    #[test]
    fn test_animation_example() {
        let a = Animation::new()
            .iteration_count(IterationCount::Infinite)
            .name("Teste")
            .direction(AnimationDirection::Normal)
            .duration(2);
        assert_eq!(a.to_css(), "infinite normal none running Teste 2s  0s");
    }

    #[test]
    fn test_animation_all_defaults() {
        assert_eq!(Animation::new().to_css(), "infinite normal none running  1s  0s");
    }

    #[test]
    fn test_animation_all_fields() {
        let a = Animation::new()
            .iteration_count(3u32)
            .direction(AnimationDirection::AlternateReverse)
            .fill_mode(FillMode::Both)
            .play_state(PlayState::Paused)
            .name("pulse")
            .duration(0.75)
            .cubic_bezier(0.1, 0.7, 1.0, 0.1)
            .delay(0.2);
        assert_eq!(
            a.to_css(),
            "3 alternate-reverse both paused pulse 0.75s cubic-bezier(0.1,0.7,1,0.1) 0.2s"
        );
    }

    #[test]
    fn test_animation_zero_values_fall_back() {
        let a = Animation::new().iteration_count(0u32).duration(0).delay(0);
        assert_eq!(a.to_css(), "infinite normal none running  1s  0s");
    }

    #[test]
    fn test_timing_function_serde_keywords() {
        let json = serde_json::to_string(&TimingFunction::EaseInOut).unwrap();
        assert_eq!(json, "\"ease-in-out\"");
        let parsed: TimingFunction = serde_json::from_str("\"step-start\"").unwrap();
        assert_eq!(parsed, TimingFunction::StepStart);
    }

    #[test]
    fn test_transition_deserializes_camel_case() {
        let t: Transition = serde_json::from_str(
            r#"{"duration":2,"timingFunc":"cubic-bezier","timingFuncVal":[1,0,1,0],"delay":0.5}"#,
        )
        .unwrap();
        assert_eq!(t.to_css(), "2s cubic-bezier(1,0,1,0) 0.5s");
    }

    #[test]
    fn test_iteration_count_serde() {
        let a: Animation =
            serde_json::from_str(r#"{"iterationCount":"infinite","name":"spin"}"#).unwrap();
        assert_eq!(a.iteration_count, Some(IterationCount::Infinite));

        let a: Animation = serde_json::from_str(r#"{"iterationCount":4}"#).unwrap();
        assert_eq!(a.iteration_count, Some(IterationCount::Count(4)));

        let json = serde_json::to_string(&IterationCount::Infinite).unwrap();
        assert_eq!(json, "\"infinite\"");
    }
}
