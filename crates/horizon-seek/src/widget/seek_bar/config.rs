//! Seek bar configuration and its validation.
//!
//! [`SeekBarConfig`] is plain data with a `Default` and `with_*` builders.
//! It is never rejected: [`SeekBarConfig::validated`] corrects invalid values
//! and reports each correction as a [`ConfigAdjustment`].

use std::fmt;
use std::time::Duration;

use horizon_seek_core::logging::targets;
use horizon_seek_render::Color;

use super::label::LabelConfig;
use super::theme;
use crate::widget::Orientation;
use crate::widget::animation::AnimationConfig;

/// Smallest width an empty range is widened to, relative to its magnitude.
const MIN_RELATIVE_WIDTH: f64 = 1e-9;

/// Tie-break rule used when a value lies exactly halfway between two steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapRounding {
    /// Round to the step with an even index (banker's rounding).
    #[default]
    HalfToEven,
    /// Round toward the maximum.
    HalfUp,
    /// Round toward the minimum.
    HalfDown,
}

/// Colors used by the painter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeekBarColors {
    /// Unfilled track.
    pub track: Color,
    /// Filled portion while revealed.
    pub fill: Color,
    /// Filled portion while collapsed.
    pub fill_idle: Color,
    /// Thumb.
    pub thumb: Color,
    /// Background of the chapter under the thumb while dragging.
    pub chapter_highlight: Color,
    /// Sweeping segment shown while loading.
    pub loading: Color,
    /// Label pill background.
    pub label_background: Color,
    /// Label text.
    pub label_text: Color,
}

impl Default for SeekBarColors {
    fn default() -> Self {
        Self {
            track: theme::track_color(),
            fill: theme::fill_color(),
            fill_idle: theme::fill_idle_color(),
            thumb: theme::thumb_color(),
            chapter_highlight: theme::chapter_highlight_color(),
            loading: theme::loading_color(),
            label_background: theme::label_background_color(),
            label_text: theme::label_text_color(),
        }
    }
}

/// Size class of the bar, following the player's orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// Thin track spanning the whole bounds, always opaque (portrait player).
    #[default]
    Compact,
    /// Thicker track inset from both ends. The whole bar fades with its
    /// visibility (landscape player).
    Large,
}

impl LayoutMode {
    /// Default track thickness for this layout.
    pub fn track_thickness(self) -> f32 {
        match self {
            Self::Compact => theme::TRACK_THICKNESS_DP,
            Self::Large => theme::TRACK_THICKNESS_LARGE_DP,
        }
    }

    /// Margin kept clear at both ends of the drag axis.
    pub fn end_margin(self) -> f32 {
        match self {
            Self::Compact => 0.0,
            Self::Large => theme::LARGE_END_MARGIN_DP,
        }
    }

    /// Whether the whole bar fades out with its visibility.
    pub fn fades_whole_bar(self) -> bool {
        matches!(self, Self::Large)
    }
}

/// When the bar collapses after inactivity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityConfig {
    /// Idle time before collapsing; `None` keeps the bar revealed.
    pub auto_hide_after: Option<Duration>,
    /// Length of the collapse/reveal animation.
    pub fade: Duration,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            auto_hide_after: None,
            fade: theme::VISIBILITY_FADE,
        }
    }
}

impl VisibilityConfig {
    /// Collapse after the player's default idle delay.
    pub fn auto_hide() -> Self {
        Self {
            auto_hide_after: Some(theme::AUTO_HIDE_DELAY),
            ..Self::default()
        }
    }
}

/// Complete configuration of a seek bar.
///
/// Lengths are in density-independent pixels.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SeekBarConfig {
    /// Lower bound of the value range.
    pub minimum: f64,
    /// Upper bound of the value range.
    pub maximum: f64,
    /// Step size; 0 means continuous.
    pub step: f64,
    /// Tie-break rule for stepped values.
    pub snap_rounding: SnapRounding,
    /// Drag axis.
    pub orientation: Orientation,
    /// Size class: end margins and whole-bar fading.
    pub layout: LayoutMode,
    /// Track thickness.
    pub track_thickness: f32,
    /// Radius of the visible thumb; also the inset at both track ends.
    pub thumb_radius: f32,
    /// Radius of the thumb's touch target.
    pub thumb_touch_radius: f32,
    /// Touchable band beyond the leading edge of the bounds.
    pub touch_extension: f32,
    /// Movement along the drag axis before a press becomes a drag.
    pub drag_threshold: f32,
    /// Thumb scale while pressed.
    pub pressed_thumb_scale: f32,
    /// Gap between chapter segments.
    pub chapter_gap: f32,
    /// Thickness multiplier for the chapter under the thumb while dragging.
    pub active_chapter_scale: f32,
    /// Colors.
    pub colors: SeekBarColors,
    /// Value label.
    pub label: LabelConfig,
    /// Value transitions.
    pub animation: AnimationConfig,
    /// Auto-hide behavior.
    pub visibility: VisibilityConfig,
}

impl Default for SeekBarConfig {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 1.0,
            step: 0.0,
            snap_rounding: SnapRounding::default(),
            orientation: Orientation::Horizontal,
            layout: LayoutMode::Compact,
            track_thickness: theme::TRACK_THICKNESS_DP,
            thumb_radius: theme::THUMB_RADIUS_DP,
            thumb_touch_radius: theme::THUMB_TOUCH_RADIUS_DP,
            touch_extension: theme::TOUCH_EXTENSION_DP,
            drag_threshold: theme::DRAG_THRESHOLD_DP,
            pressed_thumb_scale: theme::PRESSED_THUMB_SCALE,
            chapter_gap: theme::CHAPTER_GAP_DP,
            active_chapter_scale: theme::ACTIVE_CHAPTER_SCALE,
            colors: SeekBarColors::default(),
            label: LabelConfig::default(),
            animation: AnimationConfig::default(),
            visibility: VisibilityConfig::default(),
        }
    }
}

impl SeekBarConfig {
    /// Configuration of a media timeline over `duration_secs` seconds.
    ///
    /// Shows a time label while dragging and collapses after inactivity.
    pub fn media(duration_secs: f64) -> Self {
        Self {
            maximum: duration_secs,
            label: LabelConfig::time_while_dragging(),
            visibility: VisibilityConfig::auto_hide(),
            ..Self::default()
        }
    }

    /// Set the value range.
    pub fn with_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    /// Set the step size (0 = continuous).
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set the tie-break rule.
    pub fn with_snap_rounding(mut self, rounding: SnapRounding) -> Self {
        self.snap_rounding = rounding;
        self
    }

    /// Set the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the layout mode, along with its default track thickness.
    ///
    /// Call [`with_track_thickness`](Self::with_track_thickness) afterwards to
    /// override the thickness.
    pub fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self.track_thickness = layout.track_thickness();
        self
    }

    /// Set the track thickness.
    pub fn with_track_thickness(mut self, thickness: f32) -> Self {
        self.track_thickness = thickness;
        self
    }

    /// Set the thumb radius.
    pub fn with_thumb_radius(mut self, radius: f32) -> Self {
        self.thumb_radius = radius;
        self
    }

    /// Set the thumb touch radius.
    pub fn with_thumb_touch_radius(mut self, radius: f32) -> Self {
        self.thumb_touch_radius = radius;
        self
    }

    /// Set the touch extension.
    pub fn with_touch_extension(mut self, extension: f32) -> Self {
        self.touch_extension = extension;
        self
    }

    /// Set the drag threshold.
    pub fn with_drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold;
        self
    }

    /// Set the colors.
    pub fn with_colors(mut self, colors: SeekBarColors) -> Self {
        self.colors = colors;
        self
    }

    /// Set the label configuration.
    pub fn with_label(mut self, label: LabelConfig) -> Self {
        self.label = label;
        self
    }

    /// Set the animation configuration.
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Set the visibility configuration.
    pub fn with_visibility(mut self, visibility: VisibilityConfig) -> Self {
        self.visibility = visibility;
        self
    }

    /// Width of the value range.
    #[inline]
    pub fn range(&self) -> f64 {
        self.maximum - self.minimum
    }

    /// Whether another configuration maps values differently.
    pub fn value_domain_differs(&self, other: &SeekBarConfig) -> bool {
        self.minimum != other.minimum
            || self.maximum != other.maximum
            || self.step != other.step
            || self.snap_rounding != other.snap_rounding
    }

    /// Correct invalid fields, returning the fixed configuration and what changed.
    ///
    /// Every correction is logged at `warn`.
    pub fn validated(mut self) -> (Self, Vec<ConfigAdjustment>) {
        let mut adjustments = Vec::new();

        if !self.minimum.is_finite() || !self.maximum.is_finite() {
            adjustments.push(ConfigAdjustment::RangeReset {
                minimum: self.minimum,
                maximum: self.maximum,
            });
            let defaults = Self::default();
            self.minimum = defaults.minimum;
            self.maximum = defaults.maximum;
        } else if self.minimum > self.maximum {
            adjustments.push(ConfigAdjustment::RangeSwapped {
                minimum: self.minimum,
                maximum: self.maximum,
            });
            std::mem::swap(&mut self.minimum, &mut self.maximum);
        } else if self.minimum == self.maximum {
            let value = self.minimum;
            self.maximum = value + (value.abs() * MIN_RELATIVE_WIDTH).max(1.0);
            adjustments.push(ConfigAdjustment::RangeWidened {
                value,
                maximum: self.maximum,
            });
        }

        // Finite bounds can still have a width the mapper cannot use.
        if !(self.range().is_finite() && self.maximum > self.minimum) {
            adjustments.push(ConfigAdjustment::RangeOverflow {
                minimum: self.minimum,
                maximum: self.maximum,
            });
            let defaults = Self::default();
            self.minimum = defaults.minimum;
            self.maximum = defaults.maximum;
        }

        let range = self.range();
        if !self.step.is_finite() || self.step < 0.0 {
            adjustments.push(ConfigAdjustment::StepReset { step: self.step });
            self.step = 0.0;
        } else if self.step > range {
            adjustments.push(ConfigAdjustment::StepClamped {
                step: self.step,
                range,
            });
            self.step = range;
        }

        let defaults = Self::default();
        let dimensions: [(&'static str, &mut f32, f32); 8] = [
            ("track_thickness", &mut self.track_thickness, defaults.track_thickness),
            ("thumb_radius", &mut self.thumb_radius, defaults.thumb_radius),
            ("thumb_touch_radius", &mut self.thumb_touch_radius, defaults.thumb_touch_radius),
            ("touch_extension", &mut self.touch_extension, defaults.touch_extension),
            ("drag_threshold", &mut self.drag_threshold, defaults.drag_threshold),
            ("pressed_thumb_scale", &mut self.pressed_thumb_scale, defaults.pressed_thumb_scale),
            ("chapter_gap", &mut self.chapter_gap, defaults.chapter_gap),
            ("active_chapter_scale", &mut self.active_chapter_scale, defaults.active_chapter_scale),
        ];
        for (field, value, replacement) in dimensions {
            if !value.is_finite() || *value < 0.0 {
                adjustments.push(ConfigAdjustment::DimensionReset {
                    field,
                    value: *value,
                    replacement,
                });
                *value = replacement;
            }
        }

        for adjustment in &adjustments {
            tracing::warn!(target: targets::CONFIG, %adjustment, "corrected seek bar configuration");
        }

        (self, adjustments)
    }
}

/// A correction applied to an invalid configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigAdjustment {
    /// Minimum was above maximum; the bounds were swapped.
    RangeSwapped { minimum: f64, maximum: f64 },
    /// Minimum equaled maximum; the maximum was moved up by at least one.
    RangeWidened { value: f64, maximum: f64 },
    /// A bound was not finite; the default range was used.
    RangeReset { minimum: f64, maximum: f64 },
    /// The width of the range overflowed or vanished; the default range was used.
    RangeOverflow { minimum: f64, maximum: f64 },
    /// Step was negative or not finite; the bar became continuous.
    StepReset { step: f64 },
    /// Step exceeded the range; it was clamped to the range.
    StepClamped { step: f64, range: f64 },
    /// A length or scale was negative or not finite.
    DimensionReset {
        field: &'static str,
        value: f32,
        replacement: f32,
    },
}

impl fmt::Display for ConfigAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RangeSwapped { minimum, maximum } => {
                write!(f, "minimum {minimum} above maximum {maximum}, swapped")
            }
            Self::RangeWidened { value, maximum } => {
                write!(f, "empty range at {value}, widened to {value}..{maximum}")
            }
            Self::RangeOverflow { minimum, maximum } => {
                write!(f, "range {minimum}..{maximum} has no usable width, reset to default")
            }
            Self::RangeReset { minimum, maximum } => {
                write!(f, "non-finite range {minimum}..{maximum}, reset to default")
            }
            Self::StepReset { step } => write!(f, "invalid step {step}, using continuous"),
            Self::StepClamped { step, range } => {
                write!(f, "step {step} larger than range {range}, clamped")
            }
            Self::DimensionReset {
                field,
                value,
                replacement,
            } => write!(f, "invalid {field} {value}, using {replacement}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::seek_bar::value_mapper::ValueMapper;

    #[test]
    fn test_default_is_valid() {
        let (config, adjustments) = SeekBarConfig::default().validated();
        assert!(adjustments.is_empty());
        assert_eq!(config.minimum, 0.0);
        assert_eq!(config.maximum, 1.0);
        assert_eq!(config.drag_threshold, 8.0);
        assert_eq!(config.snap_rounding, SnapRounding::HalfToEven);
    }

    #[test]
    fn test_reversed_range_is_swapped() {
        let (config, adjustments) = SeekBarConfig::default().with_range(10.0, 5.0).validated();
        assert_eq!((config.minimum, config.maximum), (5.0, 10.0));
        assert_eq!(
            adjustments,
            vec![ConfigAdjustment::RangeSwapped {
                minimum: 10.0,
                maximum: 5.0
            }]
        );
    }

    #[test]
    fn test_empty_range_is_widened() {
        let (config, adjustments) = SeekBarConfig::default().with_range(3.0, 3.0).validated();
        assert_eq!((config.minimum, config.maximum), (3.0, 4.0));
        assert_eq!(
            adjustments,
            vec![ConfigAdjustment::RangeWidened {
                value: 3.0,
                maximum: 4.0
            }]
        );
    }

    #[test]
    fn test_empty_range_is_widened_at_large_magnitude() {
        let (config, adjustments) = SeekBarConfig::default().with_range(1e17, 1e17).validated();
        assert_eq!(config.minimum, 1e17);
        assert!(config.maximum > config.minimum);
        assert!(matches!(adjustments[..], [ConfigAdjustment::RangeWidened { .. }]));

        let mapper = ValueMapper::from_config(&config);
        assert!(mapper.position_to_value(1.0) > mapper.position_to_value(0.0));
    }

    #[test]
    fn test_overflowing_width_is_reset() {
        let (config, adjustments) = SeekBarConfig::default().with_range(-1e308, 1e308).validated();
        assert_eq!((config.minimum, config.maximum), (0.0, 1.0));
        assert_eq!(
            adjustments,
            vec![ConfigAdjustment::RangeOverflow {
                minimum: -1e308,
                maximum: 1e308
            }]
        );

        let mapper = ValueMapper::from_config(&config);
        assert_eq!(mapper.position_to_value(mapper.value_to_position(0.5)), 0.5);
    }

    #[test]
    fn test_empty_range_at_f64_max_is_reset() {
        let (config, adjustments) = SeekBarConfig::default()
            .with_range(f64::MAX, f64::MAX)
            .validated();
        assert_eq!((config.minimum, config.maximum), (0.0, 1.0));
        assert!(matches!(
            adjustments[..],
            [
                ConfigAdjustment::RangeWidened { .. },
                ConfigAdjustment::RangeOverflow { .. }
            ]
        ));
    }

    #[test]
    fn test_non_finite_range_is_reset() {
        let (config, adjustments) = SeekBarConfig::default()
            .with_range(f64::NAN, 10.0)
            .validated();
        assert_eq!((config.minimum, config.maximum), (0.0, 1.0));
        assert!(matches!(adjustments[0], ConfigAdjustment::RangeReset { .. }));
    }

    #[test]
    fn test_layout_sets_thickness() {
        let config = SeekBarConfig::default().with_layout(LayoutMode::Large);
        assert_eq!(config.track_thickness, theme::TRACK_THICKNESS_LARGE_DP);
        assert_eq!(config.layout.end_margin(), theme::LARGE_END_MARGIN_DP);
        assert!(config.layout.fades_whole_bar());

        let config = config.with_track_thickness(6.0);
        assert_eq!(config.track_thickness, 6.0);
        assert_eq!(config.layout, LayoutMode::Large);
        assert!(!LayoutMode::Compact.fades_whole_bar());
    }

    #[test]
    fn test_step_corrections() {
        let (config, adjustments) = SeekBarConfig::default().with_step(-1.0).validated();
        assert_eq!(config.step, 0.0);
        assert_eq!(adjustments, vec![ConfigAdjustment::StepReset { step: -1.0 }]);

        let (config, adjustments) = SeekBarConfig::default()
            .with_range(0.0, 10.0)
            .with_step(25.0)
            .validated();
        assert_eq!(config.step, 10.0);
        assert_eq!(adjustments.len(), 1);

        let (config, _) = SeekBarConfig::default().with_step(f64::NAN).validated();
        assert_eq!(config.step, 0.0);
    }

    #[test]
    fn test_invalid_dimensions_are_replaced() {
        let (config, adjustments) = SeekBarConfig::default()
            .with_thumb_radius(-2.0)
            .with_drag_threshold(f32::INFINITY)
            .validated();
        assert_eq!(config.thumb_radius, theme::THUMB_RADIUS_DP);
        assert_eq!(config.drag_threshold, theme::DRAG_THRESHOLD_DP);
        assert_eq!(adjustments.len(), 2);
    }

    #[test]
    fn test_zero_dimensions_are_allowed() {
        let (config, adjustments) = SeekBarConfig::default()
            .with_thumb_radius(0.0)
            .with_drag_threshold(0.0)
            .validated();
        assert!(adjustments.is_empty());
        assert_eq!(config.thumb_radius, 0.0);
    }

    #[test]
    fn test_adjustment_display() {
        let text = ConfigAdjustment::RangeSwapped {
            minimum: 10.0,
            maximum: 5.0,
        }
        .to_string();
        assert_eq!(text, "minimum 10 above maximum 5, swapped");
    }

    #[test]
    fn test_media_preset() {
        let config = SeekBarConfig::media(120.0);
        assert_eq!(config.maximum, 120.0);
        assert!(config.visibility.auto_hide_after.is_some());
    }
}
