//! Drawing of a seek bar.
//!
//! [`paint`] is a pure function of its [`PaintInput`]: it reads resolved
//! geometry and current animated values and issues draw calls, nothing else.
//! Painting the same input twice produces the same draw calls.
//!
//! Draw order, back to front:
//!
//! A large bar paints all of this at its visibility as a whole-bar opacity.
//!
//! 1. Track segments (one per chapter, separated by the chapter gap)
//! 2. Fill segments up to the fill position, or the loading sweep
//! 3. Thumb
//! 4. Value label pill and text

use horizon_seek_core::logging::{PerfSpan, span_names, targets};
use horizon_seek_render::{Color, Point, Rect, Renderer, RoundedRect, Size, TextStyle};

use super::chapter::{self, Chapter};
use super::config::SeekBarConfig;
use super::geometry::SeekGeometry;
use super::theme;
use super::value_mapper::ValueMapper;
use crate::widget::Orientation;

/// Everything one paint pass reads.
#[derive(Debug, Clone, Copy)]
pub struct PaintInput<'a> {
    /// Resolved layout.
    pub geometry: &'a SeekGeometry,
    /// Validated configuration.
    pub config: &'a SeekBarConfig,
    /// Value mapping, for chapter boundaries.
    pub mapper: &'a ValueMapper,
    /// Display density.
    pub dpi_scale: f32,
    /// Normalized thumb position.
    pub thumb_position: f32,
    /// Normalized fill end.
    pub fill_position: f32,
    /// Thumb radius multiplier.
    pub press_scale: f32,
    /// 0 collapsed to 1 revealed.
    pub visibility: f32,
    /// Whether the loading sweep replaces fill and thumb.
    pub loading: bool,
    /// Loading sweep phase in [0, 1).
    pub loading_phase: f32,
    /// Whether the thumb is being dragged.
    pub dragging: bool,
    /// Sorted chapters.
    pub chapters: &'a [Chapter],
    /// Chapter under the thumb.
    pub active_chapter: Option<usize>,
    /// Label text and style, when the label is shown.
    pub label: Option<(&'a str, &'a TextStyle)>,
}

/// Paint a seek bar.
///
/// On a [`LayoutMode::Large`](super::config::LayoutMode::Large) bar the whole
/// bar is drawn at its visibility as opacity, and nothing is drawn once it has
/// faded out, unless the loading sweep is showing.
pub fn paint<R: Renderer + ?Sized>(renderer: &mut R, input: &PaintInput<'_>) {
    let _span = PerfSpan::new(span_names::PAINT);

    if !input.config.layout.fades_whole_bar() {
        paint_bar(renderer, input);
        return;
    }

    let opacity = input.visibility.clamp(0.0, 1.0);
    if !input.loading && opacity <= theme::HIDDEN_OPACITY {
        tracing::trace!(target: targets::PAINT, opacity, "faded out, nothing painted");
        return;
    }

    renderer.save();
    renderer.set_opacity(renderer.opacity() * opacity);
    paint_bar(renderer, input);
    renderer.restore();
}

fn paint_bar<R: Renderer + ?Sized>(renderer: &mut R, input: &PaintInput<'_>) {
    let geometry = input.geometry;
    let colors = &input.config.colors;
    let spans = chapter::spans(input.chapters, input.mapper);
    let gap = chapter_gap(input, spans.len());

    let thickness_of = |index: usize| {
        let active = input.dragging && !input.loading && input.active_chapter == Some(index);
        if active {
            geometry.track_thickness() * input.config.active_chapter_scale
        } else {
            geometry.track_thickness()
        }
    };

    for (index, &(from, to)) in spans.iter().enumerate() {
        let (from, to) = inset(from, to, gap, index, spans.len());
        let active = input.dragging && !input.loading && input.active_chapter == Some(index);
        let color = if active {
            colors.chapter_highlight
        } else {
            colors.track
        };
        fill_segment(renderer, geometry, from, to, thickness_of(index), color);
    }

    if input.loading {
        paint_loading(renderer, input);
        return;
    }

    let fill_color = colors.fill_idle.lerp(colors.fill, input.visibility);
    let fill_end = input.fill_position.clamp(0.0, 1.0);
    for (index, &(from, to)) in spans.iter().enumerate() {
        let (from, to) = inset(from, to, gap, index, spans.len());
        let to = to.min(fill_end);
        if to > from {
            fill_segment(renderer, geometry, from, to, thickness_of(index), fill_color);
        }
    }

    let thumb_center = geometry.thumb_center(input.thumb_position);
    let radius = thumb_radius(input);
    if radius > 0.0 {
        renderer.fill_circle(thumb_center, radius, colors.thumb);
    }

    if let Some((text, style)) = input.label {
        paint_label(renderer, input, thumb_center, radius, text, style);
    }

    tracing::trace!(
        target: targets::PAINT,
        thumb = input.thumb_position,
        fill = input.fill_position,
        segments = spans.len(),
        "painted"
    );
}

/// Drawn thumb radius: the press-scaled radius when revealed, shrinking
/// toward a fraction of the track thickness as the bar collapses.
fn thumb_radius(input: &PaintInput<'_>) -> f32 {
    let full = input.geometry.thumb_radius() * input.press_scale.max(0.0);
    let collapsed = input.geometry.track_thickness() / theme::COLLAPSED_THUMB_DIVISOR;
    let t = input.visibility.clamp(0.0, 1.0);
    collapsed * (1.0 - t) + full * t
}

/// Chapter gap as a normalized length; no gap without chapter boundaries.
fn chapter_gap(input: &PaintInput<'_>, segments: usize) -> f32 {
    if segments < 2 {
        return 0.0;
    }
    input.config.chapter_gap * input.dpi_scale / input.geometry.usable_length()
}

/// Shrink a span by half the gap on each inner side.
fn inset(from: f32, to: f32, gap: f32, index: usize, count: usize) -> (f32, f32) {
    let half = gap / 2.0;
    let from = if index == 0 { from } else { from + half };
    let to = if index + 1 == count { to } else { to - half };
    (from, to)
}

fn fill_segment<R: Renderer + ?Sized>(
    renderer: &mut R,
    geometry: &SeekGeometry,
    from: f32,
    to: f32,
    thickness: f32,
    color: Color,
) {
    if to <= from || thickness <= 0.0 {
        return;
    }
    let rect = geometry.segment_rect(from, to, thickness);
    renderer.fill_rounded_rect(RoundedRect::pill(rect), color);
}

/// A highlight segment sweeping from before the start to past the end.
fn paint_loading<R: Renderer + ?Sized>(renderer: &mut R, input: &PaintInput<'_>) {
    let geometry = input.geometry;
    let usable = geometry.usable_length();
    let segment = (usable * theme::LOADING_SEGMENT_FRACTION)
        .max(theme::LOADING_SEGMENT_MIN_DP * input.dpi_scale)
        .min(usable)
        / usable;

    let head = input.loading_phase.clamp(0.0, 1.0) * (1.0 + segment);
    let from = (head - segment).max(0.0);
    let to = head.min(1.0);
    fill_segment(
        renderer,
        geometry,
        from,
        to,
        geometry.track_thickness(),
        input.config.colors.loading,
    );
}

fn paint_label<R: Renderer + ?Sized>(
    renderer: &mut R,
    input: &PaintInput<'_>,
    thumb_center: Point,
    thumb_radius: f32,
    text: &str,
    style: &TextStyle,
) {
    let dp = input.dpi_scale;
    let pad_h = theme::LABEL_PADDING_H_DP * dp;
    let pad_v = theme::LABEL_PADDING_V_DP * dp;
    let gap = theme::LABEL_GAP_DP * dp;

    let text_size = renderer.measure_text(text, style);
    let size = Size::new(text_size.width + 2.0 * pad_h, text_size.height + 2.0 * pad_v);
    let bounds = input.geometry.bounds();

    let pill = match input.geometry.orientation() {
        Orientation::Horizontal => {
            let x = clamp_span(thumb_center.x - size.width / 2.0, size.width, bounds.left(), bounds.right());
            let y = thumb_center.y - thumb_radius - gap - size.height;
            Rect::new(x, y, size.width, size.height)
        }
        Orientation::Vertical => {
            let x = thumb_center.x - thumb_radius - gap - size.width;
            let y = clamp_span(thumb_center.y - size.height / 2.0, size.height, bounds.top(), bounds.bottom());
            Rect::new(x, y, size.width, size.height)
        }
    };

    renderer.fill_rounded_rect(RoundedRect::pill(pill), input.config.colors.label_background);
    renderer.draw_text(text, Point::new(pill.left() + pad_h, pill.top() + pad_v), style);
}

/// Keep `[start, start + len]` inside `[lo, hi]` when it fits.
fn clamp_span(start: f32, len: f32, lo: f32, hi: f32) -> f32 {
    if len >= hi - lo {
        return start;
    }
    start.clamp(lo, hi - len)
}
