//! Seek bar control.
//!
//! This module provides [`SeekBar`], a natively painted slider for scrubbing
//! through a bounded value such as a playback position.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use std::time::Duration;
//!
//! use horizon_seek::render::{GraphicsConfig, GraphicsContext, Point, Rect, RecordingRenderer};
//! use horizon_seek::widget::seek_bar::{PointerEvent, PointerId, SeekBar, SeekBarConfig};
//!
//! let context = GraphicsContext::init(GraphicsConfig::default()).unwrap();
//! let mut bar = SeekBar::new(&context, SeekBarConfig::default().with_range(0.0, 100.0));
//!
//! let committed = Arc::new(AtomicU64::new(0));
//! let sink = committed.clone();
//! bar.value_committed.connect(move |&value| {
//!     sink.store(value.to_bits(), Ordering::SeqCst);
//! });
//!
//! let bounds = Rect::new(0.0, 0.0, 212.0, 24.0);
//! bar.handle_pointer(&PointerEvent::down(PointerId(1), Point::new(106.0, 12.0)), bounds);
//! bar.handle_pointer(&PointerEvent::up(PointerId(1), Point::new(106.0, 12.0)), bounds);
//! assert_eq!(f64::from_bits(committed.load(Ordering::SeqCst)), 50.0);
//!
//! bar.tick(Duration::from_millis(16));
//! let mut surface = RecordingRenderer::new();
//! bar.render(&mut surface, bounds).unwrap();
//! assert!(!surface.is_empty());
//! ```

pub mod chapter;
pub mod config;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod label;
pub mod painter;
pub mod theme;
pub mod time_format;
pub mod value_mapper;
pub mod visuals;

pub use chapter::Chapter;
pub use config::{
    ConfigAdjustment, LayoutMode, SeekBarColors, SeekBarConfig, SnapRounding, VisibilityConfig,
};
pub use event::{PointerEvent, PointerId, PointerPhase, PointerPosition};
pub use geometry::SeekGeometry;
pub use gesture::{CommitKind, GestureContext, GestureMachine, GestureState, GestureTransition};
pub use label::{LabelConfig, LabelFormatter, LabelVisibility};
pub use painter::{PaintInput, paint};
pub use time_format::format_time;
pub use value_mapper::ValueMapper;
pub use visuals::{SeekVisuals, VisualsTick};

use std::time::Duration;

use horizon_seek_core::Signal;
use horizon_seek_core::logging::{PerfSpan, span_names, targets};
use horizon_seek_render::{GraphicsContext, Point, Rect, Renderer, TextStyle};

use crate::error::GeometryResult;
use crate::host::HostAdapter;

/// Interaction state of a seek bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlState {
    /// Committed value, always within the range and on the step grid.
    pub value: f64,
    /// A pointer is down on the control.
    pub pressed: bool,
    /// The thumb is being dragged.
    pub dragging: bool,
    /// Last pointer position seen by the active gesture.
    pub last_pointer: Option<Point>,
}

/// What one [`SeekBar::drive_frame`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    /// Pointer events drained from the host.
    pub events: usize,
    /// Events the control used.
    pub handled: usize,
    /// Whether an animation is still running.
    pub animating: bool,
    /// Whether the control was painted.
    pub rendered: bool,
}

/// A seek bar (scrubber) control.
///
/// The control owns its committed value, the gesture in progress and the
/// animated visuals. The host feeds it pointer events, advances time with
/// [`tick`](Self::tick) and paints it with [`render`](Self::render).
///
/// # Signals
///
/// - `live_value_changed(f64)`: the value under the finger changed during a drag
/// - `value_committed(f64)`: a tap or drag ended on a value
/// - `gesture_started(f64)`: a press turned into a drag
/// - `gesture_cancelled(f64)`: a gesture was aborted; carries the restored value
///
/// Listeners run after the control's state has been updated.
pub struct SeekBar {
    /// Shared graphics handle.
    context: GraphicsContext,

    /// Validated configuration.
    config: SeekBarConfig,

    /// Corrections applied to the last configuration.
    adjustments: Vec<ConfigAdjustment>,

    /// Value mapping for `config`.
    mapper: ValueMapper,

    /// Interaction state.
    state: ControlState,

    /// Pointer gesture in progress.
    gesture: GestureMachine,

    /// Animated visuals.
    visuals: SeekVisuals,

    /// Sorted chapters.
    chapters: Vec<Chapter>,

    /// Indeterminate mode.
    loading: bool,

    /// Label text style derived from the context.
    label_style: TextStyle,

    /// Signal emitted when the live value changes during a drag.
    pub live_value_changed: Signal<f64>,

    /// Signal emitted when a gesture commits a value.
    pub value_committed: Signal<f64>,

    /// Signal emitted when a drag starts.
    pub gesture_started: Signal<f64>,

    /// Signal emitted when a gesture is cancelled.
    pub gesture_cancelled: Signal<f64>,
}

static_assertions::assert_impl_all!(SeekBar: Send, Sync);

impl SeekBar {
    /// Create a seek bar at the minimum of its range.
    ///
    /// The configuration is validated; see [`config_adjustments`](Self::config_adjustments).
    pub fn new(context: &GraphicsContext, config: SeekBarConfig) -> Self {
        let (config, adjustments) = config.validated();
        let mapper = ValueMapper::from_config(&config);
        let value = mapper.minimum();
        let label_style = context.label_style(config.colors.label_text);

        tracing::debug!(
            target: targets::SEEK_BAR,
            context = context.id(),
            minimum = config.minimum,
            maximum = config.maximum,
            step = config.step,
            "seek bar created"
        );

        Self {
            context: context.clone(),
            config,
            adjustments,
            mapper,
            state: ControlState {
                value,
                ..ControlState::default()
            },
            gesture: GestureMachine::new(),
            visuals: SeekVisuals::new(0.0),
            chapters: Vec::new(),
            loading: false,
            label_style,
            live_value_changed: Signal::new(),
            value_committed: Signal::new(),
            gesture_started: Signal::new(),
            gesture_cancelled: Signal::new(),
        }
    }

    /// Set the initial value using builder pattern. Does not animate.
    pub fn with_value(mut self, value: f64) -> Self {
        self.state.value = self.mapper.snap(value);
        let position = self.position_of(self.state.value);
        self.visuals.reset(position);
        self
    }

    /// Replace the configuration. Returns whether it had to be corrected.
    ///
    /// When the range, step or rounding change, the committed value is
    /// re-clamped and re-snapped and every visual settles at its new position.
    /// A gesture in progress is cancelled if the value domain, the
    /// orientation or the layout mode changes.
    pub fn set_config(&mut self, config: SeekBarConfig) -> bool {
        let (config, adjustments) = config.validated();
        let domain_changed = self.config.value_domain_differs(&config);
        let layout_changed =
            self.config.orientation != config.orientation || self.config.layout != config.layout;

        if (domain_changed || layout_changed) && self.gesture.is_active() {
            self.cancel_gesture();
        }

        self.config = config;
        self.adjustments = adjustments;
        self.label_style = self.context.label_style(self.config.colors.label_text);

        if domain_changed {
            self.mapper = ValueMapper::from_config(&self.config);
            self.state.value = self.mapper.snap(self.state.value);
            let position = self.position_of(self.state.value);
            self.visuals.reset(position);
            tracing::debug!(
                target: targets::SEEK_BAR,
                value = self.state.value,
                "value domain changed"
            );
        }

        !self.adjustments.is_empty()
    }

    /// Current configuration, after validation.
    #[inline]
    pub fn config(&self) -> &SeekBarConfig {
        &self.config
    }

    /// Whether the last configuration had to be corrected.
    #[inline]
    pub fn config_was_adjusted(&self) -> bool {
        !self.adjustments.is_empty()
    }

    /// Corrections applied to the last configuration.
    #[inline]
    pub fn config_adjustments(&self) -> &[ConfigAdjustment] {
        &self.adjustments
    }

    /// The graphics context this control paints with.
    #[inline]
    pub fn context(&self) -> &GraphicsContext {
        &self.context
    }

    // =========================================================================
    // Value
    // =========================================================================

    /// Committed value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.state.value
    }

    /// The value being shown: the live value while dragging, otherwise the committed one.
    pub fn display_value(&self) -> f64 {
        self.gesture.live_value().unwrap_or(self.state.value)
    }

    /// Set the value programmatically.
    ///
    /// The value is clamped and snapped, the thumb animates to it and any
    /// gesture in progress is dropped. No listener is notified.
    pub fn set_value(&mut self, value: f64) {
        if self.gesture.is_active() {
            self.gesture.cancel();
            self.end_press();
        }
        self.state.value = self.mapper.snap(value);
        let position = self.position_of(self.state.value);
        self.visuals.animate_to(position, &self.config.animation);
        tracing::trace!(target: targets::SEEK_BAR, value = self.state.value, "value set");
    }

    /// Interaction state.
    #[inline]
    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Whether the thumb is being dragged.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    /// Animated visuals.
    #[inline]
    pub fn visuals(&self) -> &SeekVisuals {
        &self.visuals
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Feed one pointer event. Returns whether the control used it.
    ///
    /// Events are ignored while loading and while `bounds` is degenerate.
    pub fn handle_pointer(&mut self, event: &PointerEvent, bounds: Rect) -> bool {
        if self.loading {
            tracing::trace!(target: targets::GESTURE, "pointer ignored while loading");
            return false;
        }

        let geometry = match SeekGeometry::resolve(bounds, &self.config, self.context.dpi_scale()) {
            Ok(geometry) => geometry,
            Err(err) => {
                tracing::debug!(target: targets::GESTURE, %err, "pointer ignored");
                return false;
            }
        };

        let dpi = self.context.dpi_scale();
        let ctx = GestureContext {
            geometry: &geometry,
            mapper: &self.mapper,
            committed_value: self.state.value,
            thumb_position: self.visuals.thumb_position(),
            drag_threshold: self.config.drag_threshold * dpi,
            touch_extension: self.config.touch_extension * dpi,
            thumb_touch_radius: self.config.thumb_touch_radius * dpi,
        };

        let transition = self.gesture.handle(event, &ctx);
        self.apply(transition);
        transition.is_handled()
    }

    /// Abort the gesture in progress, restoring the previous value.
    ///
    /// Does nothing when no gesture is active.
    pub fn cancel_gesture(&mut self) {
        let transition = self.gesture.cancel();
        self.apply(transition);
    }

    fn apply(&mut self, transition: GestureTransition) {
        self.state.last_pointer = self.gesture.state().last_position();

        match transition {
            GestureTransition::Ignored | GestureTransition::Consumed => {}
            GestureTransition::Pressed { .. } => {
                self.state.pressed = true;
                self.visuals.set_pressed(
                    true,
                    self.config.pressed_thumb_scale,
                    &self.config.animation,
                );
                self.visuals.reveal(self.config.visibility.fade);
            }
            GestureTransition::DragStarted { value } => {
                self.state.dragging = true;
                self.visuals.follow(self.position_of(value));
                self.gesture_started.emit(value);
                self.live_value_changed.emit(value);
            }
            GestureTransition::LiveUpdate { value } => {
                self.visuals.follow(self.position_of(value));
                self.live_value_changed.emit(value);
            }
            GestureTransition::Committed { value, kind } => {
                let value = self.mapper.snap(value);
                self.state.value = value;
                self.end_press();
                let position = self.position_of(value);
                match kind {
                    CommitKind::Drag => self.visuals.follow(position),
                    CommitKind::Tap => self.visuals.animate_to(position, &self.config.animation),
                }
                tracing::debug!(target: targets::SEEK_BAR, value, ?kind, "value committed");
                self.value_committed.emit(value);
            }
            GestureTransition::Cancelled { restored_value } => {
                self.state.value = restored_value;
                self.end_press();
                let position = self.position_of(restored_value);
                self.visuals.animate_to(position, &self.config.animation);
                self.gesture_cancelled.emit(restored_value);
            }
        }
    }

    fn end_press(&mut self) {
        self.state.pressed = false;
        self.state.dragging = false;
        self.state.last_pointer = None;
        self.visuals
            .set_pressed(false, self.config.pressed_thumb_scale, &self.config.animation);
    }

    // =========================================================================
    // Time and painting
    // =========================================================================

    /// Advance animations by `dt`. Returns whether another frame is needed.
    ///
    /// Any `dt`, including zero, is accepted.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let input = VisualsTick {
            auto_hide_after: self.config.visibility.auto_hide_after,
            fade: self.config.visibility.fade,
            hold: self.gesture.is_active(),
            loading: self.loading,
        };
        self.visuals.tick(dt, &input)
    }

    /// Paint the control into `bounds`.
    ///
    /// Painting does not change the control; repeated calls with the same
    /// state issue the same draw calls. Nothing is drawn when the graphics
    /// context has been shut down.
    ///
    /// # Errors
    ///
    /// [`GeometryError::Degenerate`](crate::GeometryError::Degenerate) when
    /// `bounds` cannot host the bar. No draw call is issued in that case.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R, bounds: Rect) -> GeometryResult<()> {
        if let Err(err) = self.context.ensure_active() {
            tracing::debug!(target: targets::PAINT, %err, "render skipped");
            return Ok(());
        }

        let geometry = SeekGeometry::resolve(bounds, &self.config, self.context.dpi_scale())
            .inspect_err(|err| {
                tracing::debug!(target: targets::PAINT, %err, "bounds not renderable");
            })?;

        let display_value = self.display_value();
        let active_chapter = chapter::index_at(&self.chapters, &self.mapper, display_value);
        let label_text = (!self.loading && self.config.label.is_shown(self.state.dragging))
            .then(|| {
                let title = active_chapter
                    .filter(|_| self.state.dragging)
                    .map(|i| self.chapters[i].title.as_str());
                self.config.label.text(display_value, title)
            });

        let input = PaintInput {
            geometry: &geometry,
            config: &self.config,
            mapper: &self.mapper,
            dpi_scale: self.context.dpi_scale(),
            thumb_position: self.visuals.thumb_position(),
            fill_position: self.visuals.fill_position(),
            press_scale: self.visuals.press_scale(),
            visibility: self.visuals.visibility(),
            loading: self.loading,
            loading_phase: self.visuals.loading_phase(),
            dragging: self.state.dragging,
            chapters: &self.chapters,
            active_chapter,
            label: label_text.as_deref().map(|text| (text, &self.label_style)),
        };
        paint(renderer, &input);
        Ok(())
    }

    /// Run one host frame: drain pending pointer events, advance time by `dt`
    /// and paint onto the host's surface.
    ///
    /// Requests a repaint when input was used or an animation is running.
    pub fn drive_frame<H: HostAdapter>(&mut self, host: &mut H, dt: Duration) -> FrameOutcome {
        let _span = PerfSpan::new(span_names::FRAME);
        let mut outcome = FrameOutcome::default();

        let bounds = host.bounds();
        while let Some(event) = host.next_pointer_event() {
            outcome.events += 1;
            if self.handle_pointer(&event, bounds) {
                outcome.handled += 1;
            }
        }

        outcome.animating = self.tick(dt);
        outcome.rendered = self.render(host.surface(), bounds).is_ok();

        if outcome.animating || outcome.handled > 0 {
            host.request_repaint();
        }
        tracing::trace!(target: targets::HOST, ?outcome, "frame driven");
        outcome
    }

    // =========================================================================
    // Chapters, loading and visibility
    // =========================================================================

    /// Replace the chapters.
    ///
    /// Chapters are sorted by start and those with a non-finite start are
    /// dropped. Starts outside the range are kept as given and clamped when
    /// drawn or looked up, so a temporary range change does not move them.
    pub fn set_chapters(&mut self, chapters: Vec<Chapter>) {
        self.chapters = chapter::prepare(chapters);
        tracing::debug!(target: targets::SEEK_BAR, count = self.chapters.len(), "chapters set");
    }

    /// Sorted chapters, with starts as the host supplied them.
    #[inline]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// The chapter containing `value`.
    pub fn chapter_at(&self, value: f64) -> Option<&Chapter> {
        chapter::index_at(&self.chapters, &self.mapper, value).map(|i| &self.chapters[i])
    }

    /// Enter or leave indeterminate mode. Entering cancels any gesture.
    pub fn set_loading(&mut self, loading: bool) {
        if loading == self.loading {
            return;
        }
        if loading {
            self.cancel_gesture();
        }
        self.loading = loading;
        tracing::debug!(target: targets::SEEK_BAR, loading, "loading changed");
    }

    /// Whether the control is in indeterminate mode.
    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fade the bar in and restart the auto-hide timer.
    pub fn reveal(&mut self) {
        self.visuals.reveal(self.config.visibility.fade);
    }

    /// Hide the bar immediately. Ignored during a gesture.
    pub fn collapse(&mut self) {
        if self.gesture.is_active() {
            return;
        }
        self.visuals.collapse();
    }

    fn position_of(&self, value: f64) -> f32 {
        self.mapper.value_to_position(value) as f32
    }
}

impl std::fmt::Debug for SeekBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeekBar")
            .field("value", &self.state.value)
            .field("range", &(self.config.minimum, self.config.maximum))
            .field("gesture", self.gesture.state())
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}
