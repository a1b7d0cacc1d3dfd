//! Layout of the track and thumb inside the control's bounds.
//!
//! [`SeekGeometry`] is derived fresh for every layout pass from the bounds,
//! the configuration and the display density. It is never cached by the
//! control, so a resize simply produces a different geometry.

use horizon_seek_render::{Point, Rect};

use super::config::SeekBarConfig;
use crate::error::{GeometryError, GeometryResult};
use crate::widget::Orientation;

/// Resolved pixel layout of a seek bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekGeometry {
    bounds: Rect,
    orientation: Orientation,
    /// Axis coordinate of position 0 (x for horizontal, y for vertical).
    origin: f32,
    /// Travel of the thumb center along the axis.
    usable_length: f32,
    /// Coordinate of the track's center line across the axis.
    cross_center: f32,
    thumb_radius: f32,
    track_thickness: f32,
}

impl SeekGeometry {
    /// Resolve the layout for `bounds`.
    ///
    /// The layout's end margin is first removed from both ends of the drag
    /// axis. The thumb center then travels from `thumb_radius` inside one end
    /// of the remaining area to `thumb_radius` inside the other. Horizontal
    /// bars grow to the right; vertical bars put position 0 at the bottom.
    ///
    /// # Errors
    ///
    /// [`GeometryError::Degenerate`] when the area left after the margins has
    /// no area or the usable length is not positive.
    pub fn resolve(bounds: Rect, config: &SeekBarConfig, dpi_scale: f32) -> GeometryResult<Self> {
        let dpi = if dpi_scale.is_finite() && dpi_scale > 0.0 {
            dpi_scale
        } else {
            1.0
        };
        let thumb_radius = config.thumb_radius.max(0.0) * dpi;
        let track_thickness = config.track_thickness.max(0.0) * dpi;
        let margin = config.layout.end_margin() * dpi;
        let bounds = match config.orientation {
            Orientation::Horizontal => Rect::new(
                bounds.left() + margin,
                bounds.top(),
                bounds.width() - 2.0 * margin,
                bounds.height(),
            ),
            Orientation::Vertical => Rect::new(
                bounds.left(),
                bounds.top() + margin,
                bounds.width(),
                bounds.height() - 2.0 * margin,
            ),
        };

        let length = match config.orientation {
            Orientation::Horizontal => bounds.width(),
            Orientation::Vertical => bounds.height(),
        };
        let usable_length = length - 2.0 * thumb_radius;

        if bounds.is_empty() || !(usable_length.is_finite() && usable_length > 0.0) {
            return Err(GeometryError::Degenerate {
                width: bounds.width(),
                height: bounds.height(),
                usable_length,
            });
        }

        let (origin, cross_center) = match config.orientation {
            Orientation::Horizontal => (bounds.left() + thumb_radius, bounds.center().y),
            Orientation::Vertical => (bounds.bottom() - thumb_radius, bounds.center().x),
        };

        Ok(Self {
            bounds,
            orientation: config.orientation,
            origin,
            usable_length,
            cross_center,
            thumb_radius,
            track_thickness,
        })
    }

    /// The bar's own area: the resolved bounds minus the end margins.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Drag axis.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Length the thumb center can travel.
    #[inline]
    pub fn usable_length(&self) -> f32 {
        self.usable_length
    }

    /// Scaled thumb radius.
    #[inline]
    pub fn thumb_radius(&self) -> f32 {
        self.thumb_radius
    }

    /// Scaled track thickness.
    #[inline]
    pub fn track_thickness(&self) -> f32 {
        self.track_thickness
    }

    /// Axis coordinate for a position. Horizontal grows right, vertical grows up.
    #[inline]
    fn axis_at(&self, position: f32) -> f32 {
        let offset = position.clamp(0.0, 1.0) * self.usable_length;
        match self.orientation {
            Orientation::Horizontal => self.origin + offset,
            Orientation::Vertical => self.origin - offset,
        }
    }

    /// Center of the thumb at a normalized position (clamped to [0, 1]).
    pub fn thumb_center(&self, position: f32) -> Point {
        let axis = self.axis_at(position);
        match self.orientation {
            Orientation::Horizontal => Point::new(axis, self.cross_center),
            Orientation::Vertical => Point::new(self.cross_center, axis),
        }
    }

    /// Normalized position under a point, clamped to [0, 1].
    pub fn position_at(&self, point: Point) -> f32 {
        let offset = match self.orientation {
            Orientation::Horizontal => point.x - self.origin,
            Orientation::Vertical => self.origin - point.y,
        };
        let position = offset / self.usable_length;
        if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        }
    }

    /// Distance between two points measured along the drag axis only.
    pub fn axis_distance(&self, a: Point, b: Point) -> f32 {
        match self.orientation {
            Orientation::Horizontal => (a.x - b.x).abs(),
            Orientation::Vertical => (a.y - b.y).abs(),
        }
    }

    /// The full track.
    pub fn track_rect(&self) -> Rect {
        self.fill_rect(0.0, 1.0)
    }

    /// Part of the track between two positions (in either order), at the
    /// configured thickness.
    pub fn fill_rect(&self, from: f32, to: f32) -> Rect {
        self.segment_rect(from, to, self.track_thickness)
    }

    /// Part of the track between two positions with an explicit thickness.
    pub fn segment_rect(&self, from: f32, to: f32, thickness: f32) -> Rect {
        let a = self.axis_at(from);
        let b = self.axis_at(to);
        let (lo, hi) = (a.min(b), a.max(b));
        let half = thickness / 2.0;
        match self.orientation {
            Orientation::Horizontal => {
                Rect::new(lo, self.cross_center - half, hi - lo, thickness)
            }
            Orientation::Vertical => {
                Rect::new(self.cross_center - half, lo, thickness, hi - lo)
            }
        }
    }

    /// Whether a point lies in the touchable area.
    ///
    /// The area is the bounds (edges included) extended by `extension` pixels
    /// beyond the leading edge: above a horizontal bar, left of a vertical one.
    pub fn contains_interactive(&self, point: Point, extension: f32) -> bool {
        let b = self.bounds;
        let extension = extension.max(0.0);
        let (left, top) = match self.orientation {
            Orientation::Horizontal => (b.left(), b.top() - extension),
            Orientation::Vertical => (b.left() - extension, b.top()),
        };
        point.x >= left && point.x <= b.right() && point.y >= top && point.y <= b.bottom()
    }

    /// Whether a point falls on the thumb's touch target.
    pub fn hits_thumb(&self, point: Point, position: f32, touch_radius: f32) -> bool {
        self.thumb_center(position).distance(point) <= touch_radius.max(self.thumb_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::seek_bar::config::LayoutMode;
    use crate::widget::seek_bar::theme;

    fn horizontal(width: f32, thumb_radius: f32) -> SeekGeometry {
        let config = SeekBarConfig::default().with_thumb_radius(thumb_radius);
        SeekGeometry::resolve(Rect::new(0.0, 0.0, width, 20.0), &config, 1.0).unwrap()
    }

    #[test]
    fn test_horizontal_layout() {
        let g = horizontal(120.0, 10.0);
        assert_eq!(g.usable_length(), 100.0);
        assert_eq!(g.thumb_center(0.0), Point::new(10.0, 10.0));
        assert_eq!(g.thumb_center(1.0), Point::new(110.0, 10.0));
        assert_eq!(g.position_at(Point::new(60.0, 0.0)), 0.5);
        assert_eq!(g.position_at(Point::new(-40.0, 0.0)), 0.0);
        assert_eq!(g.position_at(Point::new(400.0, 0.0)), 1.0);
    }

    #[test]
    fn test_vertical_zero_at_bottom() {
        let config = SeekBarConfig::default()
            .with_orientation(Orientation::Vertical)
            .with_thumb_radius(0.0);
        let g = SeekGeometry::resolve(Rect::new(0.0, 0.0, 20.0, 100.0), &config, 1.0).unwrap();
        assert_eq!(g.thumb_center(0.0), Point::new(10.0, 100.0));
        assert_eq!(g.thumb_center(1.0), Point::new(10.0, 0.0));
        assert_eq!(g.position_at(Point::new(10.0, 25.0)), 0.75);
    }

    #[test]
    fn test_dpi_scales_dimensions() {
        let config = SeekBarConfig::default()
            .with_thumb_radius(6.0)
            .with_track_thickness(2.0);
        let g = SeekGeometry::resolve(Rect::new(0.0, 0.0, 200.0, 40.0), &config, 2.0).unwrap();
        assert_eq!(g.thumb_radius(), 12.0);
        assert_eq!(g.track_thickness(), 4.0);
        assert_eq!(g.usable_length(), 176.0);
        assert_eq!(g.track_rect(), Rect::new(12.0, 18.0, 176.0, 4.0));
    }

    #[test]
    fn test_degenerate_bounds() {
        let config = SeekBarConfig::default();
        for bounds in [
            Rect::new(0.0, 0.0, 0.0, 10.0),
            Rect::new(0.0, 0.0, 100.0, 0.0),
            Rect::new(0.0, 0.0, -5.0, 10.0),
            Rect::new(0.0, 0.0, f32::NAN, 10.0),
            // Narrower than two thumb radii
            Rect::new(0.0, 0.0, 12.0, 10.0),
        ] {
            assert!(matches!(
                SeekGeometry::resolve(bounds, &config, 1.0),
                Err(GeometryError::Degenerate { .. })
            ));
        }
    }

    #[test]
    fn test_large_layout_insets_both_ends() {
        let config = SeekBarConfig::default()
            .with_layout(LayoutMode::Large)
            .with_thumb_radius(0.0);
        let g = SeekGeometry::resolve(Rect::new(0.0, 0.0, 300.0, 20.0), &config, 2.0).unwrap();
        assert_eq!(g.bounds(), Rect::new(96.0, 0.0, 108.0, 20.0));
        assert_eq!(g.usable_length(), 108.0);
        assert_eq!(g.track_thickness(), theme::TRACK_THICKNESS_LARGE_DP * 2.0);
        assert_eq!(g.thumb_center(0.0), Point::new(96.0, 10.0));
        assert_eq!(g.position_at(Point::new(50.0, 10.0)), 0.0);

        let vertical = config.clone().with_orientation(Orientation::Vertical);
        let g = SeekGeometry::resolve(Rect::new(0.0, 0.0, 20.0, 200.0), &vertical, 1.0).unwrap();
        assert_eq!(g.thumb_center(0.0), Point::new(10.0, 152.0));
        assert_eq!(g.thumb_center(1.0), Point::new(10.0, 48.0));

        // Too short once the margins are taken out.
        assert!(matches!(
            SeekGeometry::resolve(Rect::new(0.0, 0.0, 96.0, 20.0), &config, 1.0),
            Err(GeometryError::Degenerate { .. })
        ));
    }

    #[test]
    fn test_fill_rect_orders_positions() {
        let g = horizontal(100.0, 0.0);
        assert_eq!(g.fill_rect(0.75, 0.25), g.fill_rect(0.25, 0.75));
        assert_eq!(g.fill_rect(0.0, 0.5).width(), 50.0);
    }

    #[test]
    fn test_interactive_area_extends_above() {
        let g = SeekGeometry::resolve(
            Rect::new(0.0, 100.0, 100.0, 20.0),
            &SeekBarConfig::default(),
            1.0,
        )
        .unwrap();
        assert!(g.contains_interactive(Point::new(50.0, 50.0), 64.0));
        assert!(!g.contains_interactive(Point::new(50.0, 30.0), 64.0));
        assert!(!g.contains_interactive(Point::new(50.0, 125.0), 64.0));
        assert!(g.contains_interactive(Point::new(100.0, 120.0), 0.0));
    }

    #[test]
    fn test_thumb_hit_uses_touch_radius() {
        let g = horizontal(200.0, 6.0);
        let center = g.thumb_center(0.5);
        assert!(g.hits_thumb(center.offset(20.0, 0.0), 0.5, 24.0));
        assert!(!g.hits_thumb(center.offset(30.0, 0.0), 0.5, 24.0));
    }

    #[test]
    fn test_axis_distance_ignores_cross_axis() {
        let g = horizontal(100.0, 0.0);
        assert_eq!(g.axis_distance(Point::new(0.0, 0.0), Point::new(3.0, 50.0)), 3.0);
    }
}
