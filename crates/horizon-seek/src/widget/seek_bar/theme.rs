//! Default visual parameters of the seek bar.
//!
//! Lengths are in density-independent pixels (dp) and get scaled by the
//! [`GraphicsContext`](horizon_seek_render::GraphicsContext) DPI scale.

use std::time::Duration;

use horizon_seek_render::Color;

/// Movement along the drag axis before a press becomes a drag.
pub const DRAG_THRESHOLD_DP: f32 = 8.0;
/// Radius of the visible thumb.
pub const THUMB_RADIUS_DP: f32 = 6.0;
/// Radius of the thumb's touch target (48 dp diameter).
pub const THUMB_TOUCH_RADIUS_DP: f32 = 24.0;
/// Extra touchable band beyond the leading edge of the bar.
pub const TOUCH_EXTENSION_DP: f32 = 64.0;
/// Track thickness on a compact (portrait) layout.
pub const TRACK_THICKNESS_DP: f32 = 2.5;
/// Track thickness on a large (landscape) layout.
pub const TRACK_THICKNESS_LARGE_DP: f32 = 4.5;
/// Margin at both ends of the bar on a large (landscape) layout.
pub const LARGE_END_MARGIN_DP: f32 = 48.0;
/// A fading large bar at or below this opacity is not drawn.
pub const HIDDEN_OPACITY: f32 = 0.01;
/// Gap between chapter segments.
pub const CHAPTER_GAP_DP: f32 = 3.0;
/// Thickness multiplier of the chapter under the thumb while dragging.
pub const ACTIVE_CHAPTER_SCALE: f32 = 1.75;
/// Thumb scale while pressed or dragging.
pub const PRESSED_THUMB_SCALE: f32 = 1.5;
/// Collapsed thumb radius is the track thickness divided by this.
pub const COLLAPSED_THUMB_DIVISOR: f32 = 1.5;

/// Idle time before the bar collapses.
pub const AUTO_HIDE_DELAY: Duration = Duration::from_millis(2500);
/// Length of the collapse/reveal fade.
pub const VISIBILITY_FADE: Duration = Duration::from_millis(250);

/// Loading sweeps per second.
pub const LOADING_CYCLES_PER_SECOND: f32 = 1.2;
/// Loading sweep length as a fraction of the track.
pub const LOADING_SEGMENT_FRACTION: f32 = 0.44;
/// Minimum loading sweep length.
pub const LOADING_SEGMENT_MIN_DP: f32 = 56.0;

/// Vertical padding inside the value label pill.
pub const LABEL_PADDING_V_DP: f32 = 8.0;
/// Horizontal padding inside the value label pill.
pub const LABEL_PADDING_H_DP: f32 = 16.0;
/// Gap between the label pill and the thumb.
pub const LABEL_GAP_DP: f32 = 8.0;

/// Unplayed track.
pub fn track_color() -> Color {
    Color::from_rgb8(60, 60, 60)
}

/// Played portion while the bar is revealed.
pub fn fill_color() -> Color {
    Color::from_rgb8(255, 0, 0)
}

/// Played portion while the bar is collapsed.
pub fn fill_idle_color() -> Color {
    Color::from_rgb8(200, 200, 200)
}

/// Thumb.
pub fn thumb_color() -> Color {
    Color::from_rgb8(255, 0, 0)
}

/// Highlight behind the chapter under the thumb.
pub fn chapter_highlight_color() -> Color {
    Color::from_rgba8(255, 255, 255, 60)
}

/// Sweeping loading segment.
pub fn loading_color() -> Color {
    Color::from_rgba8(255, 255, 255, 160)
}

/// Label pill background.
pub fn label_background_color() -> Color {
    Color::from_rgba8(0, 0, 0, 180)
}

/// Label text.
pub fn label_text_color() -> Color {
    Color::WHITE
}
