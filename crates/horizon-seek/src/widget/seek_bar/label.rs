//! Value label shown above the thumb.

use std::fmt;
use std::sync::Arc;

use super::time_format::format_time;

/// When the label is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelVisibility {
    /// Never.
    #[default]
    Never,
    /// Only while the thumb is being dragged.
    WhileDragging,
    /// Whenever the bar is revealed.
    Always,
}

/// Turns a value into label text.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelFormatter {
    /// Fixed number of decimals.
    Number {
        /// Digits after the decimal point.
        decimals: u8,
    },
    /// Value in seconds, as `m:ss` or `h:mm:ss`.
    Time,
    /// Caller-provided formatting.
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl LabelFormatter {
    /// Wrap a formatting closure.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        LabelFormatter::Custom(Arc::new(f))
    }

    /// Format a value.
    pub fn format(&self, value: f64) -> String {
        match self {
            LabelFormatter::Number { decimals } => {
                format!("{value:.prec$}", prec = usize::from(*decimals))
            }
            LabelFormatter::Time => format_time(value),
            LabelFormatter::Custom(f) => f(value),
        }
    }
}

impl Default for LabelFormatter {
    fn default() -> Self {
        LabelFormatter::Number { decimals: 2 }
    }
}

impl fmt::Debug for LabelFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelFormatter::Number { decimals } => {
                f.debug_struct("Number").field("decimals", decimals).finish()
            }
            LabelFormatter::Time => f.write_str("Time"),
            LabelFormatter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Label settings.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabelConfig {
    /// When to draw the label.
    pub visibility: LabelVisibility,
    /// How to format it.
    pub formatter: LabelFormatter,
}

impl LabelConfig {
    /// A time label shown while dragging, as on a media timeline.
    pub fn time_while_dragging() -> Self {
        Self {
            visibility: LabelVisibility::WhileDragging,
            formatter: LabelFormatter::Time,
        }
    }

    /// Set when the label is drawn.
    pub fn with_visibility(mut self, visibility: LabelVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set the formatter.
    pub fn with_formatter(mut self, formatter: LabelFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Whether the label is drawn in the given interaction state.
    pub fn is_shown(&self, dragging: bool) -> bool {
        match self.visibility {
            LabelVisibility::Never => false,
            LabelVisibility::WhileDragging => dragging,
            LabelVisibility::Always => true,
        }
    }

    /// Label text for a value, with the chapter title appended when given.
    pub fn text(&self, value: f64, chapter: Option<&str>) -> String {
        let mut text = self.formatter.format(value);
        if let Some(title) = chapter.filter(|t| !t.is_empty()) {
            text.push_str("  ");
            text.push_str(title);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_formatter() {
        assert_eq!(LabelFormatter::default().format(0.5), "0.50");
        assert_eq!(LabelFormatter::Number { decimals: 0 }.format(41.6), "42");
    }

    #[test]
    fn test_custom_formatter() {
        let f = LabelFormatter::custom(|v| format!("{}%", (v * 100.0).round()));
        assert_eq!(f.format(0.25), "25%");
        assert_eq!(format!("{f:?}"), "Custom(..)");
    }

    #[test]
    fn test_visibility_rules() {
        let label = LabelConfig::time_while_dragging();
        assert!(!label.is_shown(false));
        assert!(label.is_shown(true));
        assert!(!LabelConfig::default().is_shown(true));
        assert!(LabelConfig::default()
            .with_visibility(LabelVisibility::Always)
            .is_shown(false));
    }

    #[test]
    fn test_text_with_chapter() {
        let label = LabelConfig::time_while_dragging();
        assert_eq!(label.text(65.0, Some("Intro")), "1:05  Intro");
        assert_eq!(label.text(65.0, Some("")), "1:05");
        assert_eq!(label.text(65.0, None), "1:05");
    }
}
