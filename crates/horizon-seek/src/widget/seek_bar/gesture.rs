//! Pointer gesture state machine.
//!
//! Turns a stream of [`PointerEvent`]s into seek transitions:
//!
//! ```text
//! Idle --down inside--> Pressed --move >= threshold--> Dragging
//!                          |                              |
//!                          +--up--> Committed(Tap)        +--move--> LiveUpdate
//!                          +--cancel--> Cancelled         +--up--> Committed(Drag)
//!                                                         +--cancel--> Cancelled
//! ```
//!
//! `Committed` and `Cancelled` end the gesture and return the machine to
//! `Idle`. The machine never touches the committed value itself; it reports
//! what happened and the control applies it.

use horizon_seek_core::logging::targets;
use horizon_seek_render::Point;

use super::event::{PointerEvent, PointerId, PointerPhase};
use super::geometry::SeekGeometry;
use super::value_mapper::ValueMapper;

/// Everything the machine needs to know about the control for one event.
#[derive(Debug, Clone, Copy)]
pub struct GestureContext<'a> {
    /// Current layout.
    pub geometry: &'a SeekGeometry,
    /// Position/value mapping.
    pub mapper: &'a ValueMapper,
    /// The control's committed value.
    pub committed_value: f64,
    /// Normalized position of the thumb as currently drawn.
    pub thumb_position: f32,
    /// Drag threshold in pixels.
    pub drag_threshold: f32,
    /// Touch extension in pixels.
    pub touch_extension: f32,
    /// Thumb touch radius in pixels.
    pub thumb_touch_radius: f32,
}

impl GestureContext<'_> {
    fn value_at(&self, point: Point) -> f64 {
        self.mapper
            .position_to_value(f64::from(self.geometry.position_at(point)))
    }
}

/// State of the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No pointer is interacting with the control.
    #[default]
    Idle,
    /// A pointer is down but has not moved far enough to drag.
    Pressed {
        /// Pointer that owns the gesture.
        pointer: PointerId,
        /// Where the press started.
        origin: Point,
        /// Last known pointer position.
        last: Point,
        /// Committed value when the press started.
        start_value: f64,
        /// Whether the press landed on the thumb's touch target.
        grabbed_thumb: bool,
    },
    /// The pointer is dragging the thumb.
    Dragging {
        /// Pointer that owns the gesture.
        pointer: PointerId,
        /// Where the press started.
        origin: Point,
        /// Last known pointer position.
        last: Point,
        /// Committed value when the press started.
        start_value: f64,
        /// Whether the press landed on the thumb's touch target.
        grabbed_thumb: bool,
        /// Value under the pointer, not yet committed.
        live_value: f64,
    },
}

impl GestureState {
    /// Pointer owning the gesture, if any.
    pub fn pointer(&self) -> Option<PointerId> {
        match *self {
            GestureState::Idle => None,
            GestureState::Pressed { pointer, .. } | GestureState::Dragging { pointer, .. } => {
                Some(pointer)
            }
        }
    }

    /// Last pointer position, if a gesture is active.
    pub fn last_position(&self) -> Option<Point> {
        match *self {
            GestureState::Idle => None,
            GestureState::Pressed { last, .. } | GestureState::Dragging { last, .. } => Some(last),
        }
    }

    /// Value the gesture would restore on cancel.
    pub fn start_value(&self) -> Option<f64> {
        match *self {
            GestureState::Idle => None,
            GestureState::Pressed { start_value, .. }
            | GestureState::Dragging { start_value, .. } => Some(start_value),
        }
    }
}

/// How a committed gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKind {
    /// Released before passing the drag threshold.
    Tap,
    /// Released after dragging.
    Drag,
}

/// Outcome of feeding one event to the machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureTransition {
    /// The event does not belong to this control or is out of sequence.
    Ignored,
    /// The event belongs to the active gesture but changes nothing.
    Consumed,
    /// A press started.
    Pressed {
        /// Whether the press landed on the thumb.
        grabbed_thumb: bool,
    },
    /// The press became a drag.
    DragStarted {
        /// Live value at the start of the drag.
        value: f64,
    },
    /// The live value changed during a drag.
    LiveUpdate {
        /// New live value.
        value: f64,
    },
    /// The gesture ended with a new value.
    Committed {
        /// Value to commit.
        value: f64,
        /// Tap or drag.
        kind: CommitKind,
    },
    /// The gesture was aborted.
    Cancelled {
        /// Value held before the gesture started.
        restored_value: f64,
    },
}

impl GestureTransition {
    /// Whether the event was used by the control.
    pub fn is_handled(&self) -> bool {
        !matches!(self, GestureTransition::Ignored)
    }
}

/// Pointer gesture state machine for one control.
#[derive(Debug, Clone, Default)]
pub struct GestureMachine {
    state: GestureState,
}

impl GestureMachine {
    /// Create an idle machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Whether a pointer is pressed or dragging.
    #[inline]
    pub fn is_active(&self) -> bool {
        !matches!(self.state, GestureState::Idle)
    }

    /// Whether the thumb is being dragged.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Live value while dragging.
    pub fn live_value(&self) -> Option<f64> {
        match self.state {
            GestureState::Dragging { live_value, .. } => Some(live_value),
            _ => None,
        }
    }

    /// Abort the active gesture. Returns `Ignored` when idle.
    pub fn cancel(&mut self) -> GestureTransition {
        match std::mem::take(&mut self.state).start_value() {
            Some(restored_value) => {
                tracing::debug!(target: targets::GESTURE, restored_value, "gesture cancelled");
                GestureTransition::Cancelled { restored_value }
            }
            None => GestureTransition::Ignored,
        }
    }

    /// Feed one pointer event.
    pub fn handle(&mut self, event: &PointerEvent, ctx: &GestureContext<'_>) -> GestureTransition {
        let point = event.position.resolve(ctx.geometry);

        if let Some(owner) = self.state.pointer() {
            if owner != event.pointer {
                tracing::debug!(
                    target: targets::GESTURE,
                    owner = owner.0,
                    pointer = event.pointer.0,
                    "event from another pointer ignored"
                );
                return GestureTransition::Ignored;
            }
        }

        let transition = match (event.phase, self.state) {
            (PointerPhase::Down, GestureState::Idle) => self.press(event.pointer, point, ctx),
            (PointerPhase::Down, _) => {
                tracing::debug!(target: targets::GESTURE, "second down while active ignored");
                GestureTransition::Ignored
            }
            (_, GestureState::Idle) => {
                tracing::trace!(target: targets::GESTURE, phase = ?event.phase, "event while idle ignored");
                GestureTransition::Ignored
            }
            (PointerPhase::Move, state) => self.moved(state, point, ctx),
            (PointerPhase::Up, state) => self.release(state, point, ctx),
            (PointerPhase::Cancel, _) => self.cancel(),
        };

        tracing::trace!(target: targets::GESTURE, ?transition, "pointer event handled");
        transition
    }

    fn press(&mut self, pointer: PointerId, point: Point, ctx: &GestureContext<'_>) -> GestureTransition {
        if !ctx.geometry.contains_interactive(point, ctx.touch_extension) {
            tracing::trace!(target: targets::GESTURE, x = point.x, y = point.y, "down outside interactive area");
            return GestureTransition::Ignored;
        }

        let grabbed_thumb = ctx
            .geometry
            .hits_thumb(point, ctx.thumb_position, ctx.thumb_touch_radius);

        self.state = GestureState::Pressed {
            pointer,
            origin: point,
            last: point,
            start_value: ctx.committed_value,
            grabbed_thumb,
        };
        tracing::debug!(target: targets::GESTURE, grabbed_thumb, "pressed");
        GestureTransition::Pressed { grabbed_thumb }
    }

    fn moved(&mut self, state: GestureState, point: Point, ctx: &GestureContext<'_>) -> GestureTransition {
        match state {
            GestureState::Pressed {
                pointer,
                origin,
                start_value,
                grabbed_thumb,
                ..
            } => {
                // A grabbed thumb follows the pointer from the first move.
                let threshold = if grabbed_thumb { 0.0 } else { ctx.drag_threshold };
                if ctx.geometry.axis_distance(origin, point) < threshold {
                    self.state = GestureState::Pressed {
                        pointer,
                        origin,
                        last: point,
                        start_value,
                        grabbed_thumb,
                    };
                    return GestureTransition::Consumed;
                }

                let value = ctx.value_at(point);
                self.state = GestureState::Dragging {
                    pointer,
                    origin,
                    last: point,
                    start_value,
                    grabbed_thumb,
                    live_value: value,
                };
                tracing::debug!(target: targets::GESTURE, value, "drag started");
                GestureTransition::DragStarted { value }
            }
            GestureState::Dragging {
                pointer,
                origin,
                start_value,
                grabbed_thumb,
                live_value,
                ..
            } => {
                let value = ctx.value_at(point);
                self.state = GestureState::Dragging {
                    pointer,
                    origin,
                    last: point,
                    start_value,
                    grabbed_thumb,
                    live_value: value,
                };
                if value != live_value {
                    GestureTransition::LiveUpdate { value }
                } else {
                    GestureTransition::Consumed
                }
            }
            GestureState::Idle => GestureTransition::Ignored,
        }
    }

    fn release(&mut self, state: GestureState, point: Point, ctx: &GestureContext<'_>) -> GestureTransition {
        let kind = match state {
            GestureState::Pressed { .. } => CommitKind::Tap,
            GestureState::Dragging { .. } => CommitKind::Drag,
            GestureState::Idle => return GestureTransition::Ignored,
        };
        self.state = GestureState::Idle;

        let value = ctx.value_at(point);
        tracing::debug!(target: targets::GESTURE, value, ?kind, "gesture committed");
        GestureTransition::Committed { value, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::seek_bar::config::SeekBarConfig;
    use horizon_seek_render::Rect;

    const P1: PointerId = PointerId(1);
    const P2: PointerId = PointerId(2);

    struct Fixture {
        geometry: SeekGeometry,
        mapper: ValueMapper,
        committed: f64,
        thumb_position: f32,
    }

    impl Fixture {
        /// 0..100 in whole steps over a 100 px wide bar with no thumb inset.
        fn new(committed: f64) -> Self {
            let config = SeekBarConfig::default()
                .with_range(0.0, 100.0)
                .with_step(1.0)
                .with_thumb_radius(0.0);
            Self {
                geometry: SeekGeometry::resolve(Rect::new(0.0, 0.0, 100.0, 20.0), &config, 1.0)
                    .unwrap(),
                mapper: ValueMapper::from_config(&config),
                committed,
                thumb_position: (committed / 100.0) as f32,
            }
        }

        /// Thumb drawn somewhere other than the committed value, mid-animation.
        fn with_thumb_at(mut self, position: f32) -> Self {
            self.thumb_position = position;
            self
        }

        fn ctx(&self) -> GestureContext<'_> {
            GestureContext {
                geometry: &self.geometry,
                mapper: &self.mapper,
                committed_value: self.committed,
                thumb_position: self.thumb_position,
                drag_threshold: 8.0,
                touch_extension: 64.0,
                thumb_touch_radius: 24.0,
            }
        }
    }

    fn at(x: f32) -> Point {
        Point::new(x, 10.0)
    }

    #[test]
    fn test_tap_commits_up_position() {
        let f = Fixture::new(0.0);
        let mut m = GestureMachine::new();

        let t = m.handle(&PointerEvent::down(P1, at(70.0)), &f.ctx());
        assert_eq!(t, GestureTransition::Pressed { grabbed_thumb: false });
        assert!(m.is_active());

        let t = m.handle(&PointerEvent::up(P1, at(72.0)), &f.ctx());
        assert_eq!(
            t,
            GestureTransition::Committed {
                value: 72.0,
                kind: CommitKind::Tap
            }
        );
        assert!(!m.is_active());
    }

    #[test]
    fn test_drag_threshold_on_axis() {
        let f = Fixture::new(0.0);
        let mut m = GestureMachine::new();
        m.handle(&PointerEvent::down(P1, at(50.0)), &f.ctx());

        // Cross-axis movement never starts a drag.
        let t = m.handle(&PointerEvent::moved(P1, Point::new(52.0, -40.0)), &f.ctx());
        assert_eq!(t, GestureTransition::Consumed);
        assert!(!m.is_dragging());

        // Exactly the threshold starts it.
        let t = m.handle(&PointerEvent::moved(P1, at(58.0)), &f.ctx());
        assert_eq!(t, GestureTransition::DragStarted { value: 58.0 });
        assert_eq!(m.live_value(), Some(58.0));
    }

    #[test]
    fn test_drag_updates_and_commits() {
        let f = Fixture::new(0.0);
        let mut m = GestureMachine::new();
        m.handle(&PointerEvent::down(P1, at(50.0)), &f.ctx());
        m.handle(&PointerEvent::moved(P1, at(60.0)), &f.ctx());

        let t = m.handle(&PointerEvent::moved(P1, at(80.0)), &f.ctx());
        assert_eq!(t, GestureTransition::LiveUpdate { value: 80.0 });

        // Same value again is not an update.
        let t = m.handle(&PointerEvent::moved(P1, Point::new(80.0, 15.0)), &f.ctx());
        assert_eq!(t, GestureTransition::Consumed);

        let t = m.handle(&PointerEvent::up(P1, at(90.0)), &f.ctx());
        assert_eq!(
            t,
            GestureTransition::Committed {
                value: 90.0,
                kind: CommitKind::Drag
            }
        );
        assert_eq!(m.state(), &GestureState::Idle);
    }

    #[test]
    fn test_grabbed_thumb_drags_without_threshold() {
        let f = Fixture::new(40.0);
        let mut m = GestureMachine::new();
        let t = m.handle(&PointerEvent::down(P1, at(45.0)), &f.ctx());
        assert_eq!(t, GestureTransition::Pressed { grabbed_thumb: true });

        let t = m.handle(&PointerEvent::moved(P1, at(47.0)), &f.ctx());
        assert_eq!(t, GestureTransition::DragStarted { value: 47.0 });
    }

    #[test]
    fn test_thumb_grab_follows_drawn_thumb() {
        // Committed at 90 while the thumb is still animating near 10.
        let f = Fixture::new(90.0).with_thumb_at(0.1);
        let mut m = GestureMachine::new();
        let t = m.handle(&PointerEvent::down(P1, at(12.0)), &f.ctx());
        assert_eq!(t, GestureTransition::Pressed { grabbed_thumb: true });
        m.cancel();

        let t = m.handle(&PointerEvent::down(P1, at(88.0)), &f.ctx());
        assert_eq!(t, GestureTransition::Pressed { grabbed_thumb: false });
    }

    #[test]
    fn test_cancel_restores_start_value() {
        let f = Fixture::new(30.0);
        let mut m = GestureMachine::new();
        m.handle(&PointerEvent::down(P1, at(80.0)), &f.ctx());
        m.handle(&PointerEvent::moved(P1, at(95.0)), &f.ctx());

        let t = m.handle(&PointerEvent::cancel(P1), &f.ctx());
        assert_eq!(t, GestureTransition::Cancelled { restored_value: 30.0 });
        assert!(!m.is_active());
        assert_eq!(m.cancel(), GestureTransition::Ignored);
    }

    #[test]
    fn test_down_outside_area_ignored() {
        let f = Fixture::new(0.0);
        let mut m = GestureMachine::new();
        // Below the bounds
        let t = m.handle(&PointerEvent::down(P1, Point::new(50.0, 40.0)), &f.ctx());
        assert_eq!(t, GestureTransition::Ignored);
        // Inside the extension above
        let t = m.handle(&PointerEvent::down(P1, Point::new(50.0, -50.0)), &f.ctx());
        assert!(t.is_handled());
    }

    #[test]
    fn test_malformed_sequences_ignored() {
        let f = Fixture::new(0.0);
        let mut m = GestureMachine::new();

        assert_eq!(m.handle(&PointerEvent::moved(P1, at(10.0)), &f.ctx()), GestureTransition::Ignored);
        assert_eq!(m.handle(&PointerEvent::up(P1, at(10.0)), &f.ctx()), GestureTransition::Ignored);
        assert_eq!(m.handle(&PointerEvent::cancel(P1), &f.ctx()), GestureTransition::Ignored);

        m.handle(&PointerEvent::down(P1, at(10.0)), &f.ctx());
        let before = *m.state();
        assert_eq!(m.handle(&PointerEvent::down(P1, at(90.0)), &f.ctx()), GestureTransition::Ignored);
        assert_eq!(m.handle(&PointerEvent::down(P2, at(90.0)), &f.ctx()), GestureTransition::Ignored);
        assert_eq!(m.handle(&PointerEvent::up(P2, at(90.0)), &f.ctx()), GestureTransition::Ignored);
        assert_eq!(*m.state(), before);
    }

    #[test]
    fn test_normalized_positions() {
        let f = Fixture::new(0.0);
        let mut m = GestureMachine::new();
        m.handle(&PointerEvent::normalized(P1, PointerPhase::Down, 0.2), &f.ctx());
        let t = m.handle(&PointerEvent::normalized(P1, PointerPhase::Up, 0.25), &f.ctx());
        assert_eq!(
            t,
            GestureTransition::Committed {
                value: 25.0,
                kind: CommitKind::Tap
            }
        );
    }
}
