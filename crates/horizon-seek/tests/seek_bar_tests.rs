//! Integration tests for the seek bar control.
//!
//! These run headless: a recording renderer and a scripted host stand in for
//! the embedding application.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use horizon_seek::GeometryError;
use horizon_seek::host::HostAdapter;
use horizon_seek::render::{
    DrawCommand, GraphicsConfig, GraphicsContext, Point, Rect, RecordingRenderer,
};
use horizon_seek::widget::Orientation;
use horizon_seek::widget::animation::AnimationConfig;
use horizon_seek::widget::seek_bar::{
    Chapter, ConfigAdjustment, LabelConfig, LabelFormatter, LabelVisibility, LayoutMode,
    PointerEvent, PointerId, PointerPhase, SeekBar, SeekBarConfig, VisibilityConfig,
};

const FRAME: Duration = Duration::from_millis(16);
const P: PointerId = PointerId(3);

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn context() -> GraphicsContext {
    GraphicsContext::init(GraphicsConfig::default()).unwrap()
}

fn percent_config() -> SeekBarConfig {
    SeekBarConfig::default()
        .with_range(0.0, 100.0)
        .with_step(1.0)
        .with_thumb_radius(0.0)
}

fn recorded(bar: &SeekBar, bounds: Rect) -> Vec<DrawCommand> {
    let mut surface = RecordingRenderer::new();
    bar.render(&mut surface, bounds).unwrap();
    surface.take_commands()
}

fn collect(signal: &horizon_seek::Signal<f64>) -> Arc<Mutex<Vec<f64>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    signal.connect(move |&v| sink.lock().push(v));
    seen
}

/// Host that replays a script of pointer events.
struct ScriptedHost {
    bounds: Rect,
    events: VecDeque<PointerEvent>,
    surface: RecordingRenderer,
    repaints: usize,
}

impl ScriptedHost {
    fn new(bounds: Rect, events: impl IntoIterator<Item = PointerEvent>) -> Self {
        Self {
            bounds,
            events: events.into_iter().collect(),
            surface: RecordingRenderer::new(),
            repaints: 0,
        }
    }
}

impl HostAdapter for ScriptedHost {
    type Surface = RecordingRenderer;

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn next_pointer_event(&mut self) -> Option<PointerEvent> {
        self.events.pop_front()
    }

    fn surface(&mut self) -> &mut RecordingRenderer {
        &mut self.surface
    }

    fn request_repaint(&mut self) {
        self.repaints += 1;
    }
}

#[test]
fn test_drag_sequence_notifications() {
    init_logging();
    let mut bar = SeekBar::new(&context(), percent_config());
    let live = collect(&bar.live_value_changed);
    let committed = collect(&bar.value_committed);
    let started = collect(&bar.gesture_started);

    let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
    let y = 10.0;
    bar.handle_pointer(&PointerEvent::down(P, Point::new(40.0, y)), bounds);
    for x in [44.0, 50.0, 50.2, 61.0] {
        bar.handle_pointer(&PointerEvent::moved(P, Point::new(x, y)), bounds);
    }
    bar.handle_pointer(&PointerEvent::up(P, Point::new(61.0, y)), bounds);

    assert_eq!(*started.lock(), vec![50.0]);
    // 50.2 snaps to 50 and is not reported again.
    assert_eq!(*live.lock(), vec![50.0, 61.0]);
    assert_eq!(*committed.lock(), vec![61.0]);
    assert_eq!(bar.value(), 61.0);
}

#[test]
fn test_reversed_range_is_corrected() {
    let bar = SeekBar::new(&context(), SeekBarConfig::default().with_range(10.0, 5.0));
    assert!(bar.config_was_adjusted());
    assert!(bar.config().minimum <= bar.config().maximum);
    assert_eq!(
        bar.config_adjustments(),
        &[ConfigAdjustment::RangeSwapped {
            minimum: 10.0,
            maximum: 5.0
        }]
    );
}

#[test]
fn test_repeated_renders_are_identical() {
    let mut bar = SeekBar::new(
        &context(),
        SeekBarConfig::media(600.0).with_label(
            LabelConfig::time_while_dragging().with_visibility(LabelVisibility::Always),
        ),
    );
    bar.set_chapters(vec![Chapter::new(0.0, "Cold open"), Chapter::new(240.0, "Act one")]);
    bar.set_value(300.0);
    bar.tick(Duration::from_millis(50));

    let bounds = Rect::new(0.0, 200.0, 400.0, 48.0);
    let first = recorded(&bar, bounds);
    let second = recorded(&bar, bounds);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_degenerate_bounds_draw_nothing() {
    let bar = SeekBar::new(&context(), SeekBarConfig::default());
    for bounds in [
        Rect::new(0.0, 0.0, 0.0, 0.0),
        Rect::new(0.0, 0.0, -10.0, 20.0),
        Rect::new(0.0, 0.0, 10.0, 20.0),
    ] {
        let mut surface = RecordingRenderer::new();
        let result = bar.render(&mut surface, bounds);
        assert!(matches!(result, Err(GeometryError::Degenerate { .. })));
        assert!(surface.is_empty());
    }
}

#[test]
fn test_vertical_bar_grows_upward() {
    let mut bar = SeekBar::new(
        &context(),
        percent_config().with_orientation(Orientation::Vertical),
    );
    let bounds = Rect::new(0.0, 0.0, 20.0, 100.0);
    bar.handle_pointer(&PointerEvent::down(P, Point::new(10.0, 25.0)), bounds);
    bar.handle_pointer(&PointerEvent::up(P, Point::new(10.0, 25.0)), bounds);
    assert_eq!(bar.value(), 75.0);
}

#[test]
fn test_dpi_scales_drag_threshold() {
    let context = GraphicsContext::init(GraphicsConfig::default().with_dpi_scale(2.0)).unwrap();
    let mut bar = SeekBar::new(&context, percent_config());
    let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);

    bar.handle_pointer(&PointerEvent::down(P, Point::new(50.0, 20.0)), bounds);
    // 10 px is past 8 dp at 1x but not at 2x.
    bar.handle_pointer(&PointerEvent::moved(P, Point::new(60.0, 20.0)), bounds);
    assert!(!bar.is_dragging());
    bar.handle_pointer(&PointerEvent::moved(P, Point::new(66.0, 20.0)), bounds);
    assert!(bar.is_dragging());
}

#[test]
fn test_tap_animates_to_value() {
    let mut bar = SeekBar::new(&context(), percent_config());
    let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
    bar.handle_pointer(&PointerEvent::down(P, Point::new(80.0, 10.0)), bounds);
    bar.handle_pointer(&PointerEvent::up(P, Point::new(80.0, 10.0)), bounds);

    assert_eq!(bar.value(), 80.0);
    assert!(bar.visuals().thumb_position() < 0.8);
    assert!(bar.tick(FRAME));
    while bar.tick(FRAME) {}
    assert_eq!(bar.visuals().thumb_position(), 0.8);
}

#[test]
fn test_normalized_input() {
    let mut bar = SeekBar::new(&context(), percent_config());
    let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
    bar.handle_pointer(&PointerEvent::normalized(P, PointerPhase::Down, 0.1), bounds);
    bar.handle_pointer(&PointerEvent::normalized(P, PointerPhase::Move, 0.5), bounds);
    bar.handle_pointer(&PointerEvent::normalized(P, PointerPhase::Up, 0.5), bounds);
    assert_eq!(bar.value(), 50.0);
}

#[test]
fn test_chapters_are_sorted_and_found() {
    let mut bar = SeekBar::new(&context(), SeekBarConfig::media(100.0));
    bar.set_chapters(vec![
        Chapter::new(70.0, "Credits"),
        Chapter::new(0.0, "Intro"),
        Chapter::new(30.0, "Main"),
        Chapter::new(500.0, "Past the end"),
    ]);

    let titles: Vec<&str> = bar.chapters().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Intro", "Main", "Credits", "Past the end"]);
    assert_eq!(bar.chapters()[3].start, 500.0);
    assert_eq!(bar.chapter_at(100.0).map(|c| c.title.as_str()), Some("Past the end"));
    assert_eq!(bar.chapter_at(45.0).map(|c| c.title.as_str()), Some("Main"));
    assert_eq!(bar.chapter_at(0.0).map(|c| c.title.as_str()), Some("Intro"));
}

#[test]
fn test_loading_mode() {
    let mut bar = SeekBar::new(&context(), percent_config());
    let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
    bar.set_value(50.0);
    bar.set_loading(true);
    assert!(bar.is_loading());

    assert!(!bar.handle_pointer(&PointerEvent::down(P, Point::new(10.0, 10.0)), bounds));
    bar.tick(Duration::from_millis(100));
    let commands = recorded(&bar, bounds);
    let loading = bar.config().colors.loading;
    assert!(commands.iter().any(|c| c.color() == loading));
    assert!(!commands.iter().any(|c| matches!(c, DrawCommand::FillEllipse { .. })));

    bar.set_loading(false);
    assert!(bar.handle_pointer(&PointerEvent::down(P, Point::new(10.0, 10.0)), bounds));
}

#[test]
fn test_auto_hide_and_reveal() {
    let mut bar = SeekBar::new(
        &context(),
        percent_config().with_visibility(VisibilityConfig {
            auto_hide_after: Some(Duration::from_millis(500)),
            fade: Duration::from_millis(100),
        }),
    );
    let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);

    for _ in 0..60 {
        bar.tick(FRAME);
    }
    assert_eq!(bar.visuals().visibility(), 0.0);

    // A press reveals the bar and holds it open.
    bar.handle_pointer(&PointerEvent::down(P, Point::new(50.0, 10.0)), bounds);
    for _ in 0..100 {
        bar.tick(FRAME);
    }
    assert_eq!(bar.visuals().visibility(), 1.0);

    bar.handle_pointer(&PointerEvent::up(P, Point::new(50.0, 10.0)), bounds);
    bar.collapse();
    assert_eq!(bar.visuals().visibility(), 0.0);
    bar.reveal();
    while bar.visuals().visibility() < 1.0 {
        bar.tick(FRAME);
    }
}

#[test]
fn test_large_layout_fades_out_and_skips_margins() {
    let mut bar = SeekBar::new(
        &context(),
        percent_config()
            .with_layout(LayoutMode::Large)
            .with_visibility(VisibilityConfig {
                auto_hide_after: Some(Duration::from_millis(200)),
                fade: Duration::from_millis(100),
            }),
    );
    let bounds = Rect::new(0.0, 0.0, 196.0, 20.0);
    assert!(!recorded(&bar, bounds).is_empty());

    for _ in 0..40 {
        bar.tick(FRAME);
    }
    assert_eq!(bar.visuals().visibility(), 0.0);
    assert!(recorded(&bar, bounds).is_empty());

    // The 48 dp end margins are not part of the bar.
    assert!(!bar.handle_pointer(&PointerEvent::down(P, Point::new(20.0, 10.0)), bounds));

    // Pressing the bar itself reveals it again; the usable span is 48..148.
    assert!(bar.handle_pointer(&PointerEvent::down(P, Point::new(98.0, 10.0)), bounds));
    bar.handle_pointer(&PointerEvent::up(P, Point::new(98.0, 10.0)), bounds);
    assert_eq!(bar.value(), 50.0);
    bar.tick(Duration::from_millis(50));
    let commands = recorded(&bar, bounds);
    assert!(!commands.is_empty());
    let track = bar.config().colors.track;
    assert!(commands[0].color().a < track.a);
}

#[test]
fn test_custom_label_formatter() {
    let mut bar = SeekBar::new(
        &context(),
        percent_config().with_label(
            LabelConfig::default()
                .with_visibility(LabelVisibility::Always)
                .with_formatter(LabelFormatter::custom(|v| format!("{v:.0}%"))),
        ),
    );
    bar.set_value(42.0);
    let text = recorded(&bar, Rect::new(0.0, 100.0, 100.0, 20.0))
        .into_iter()
        .find_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        });
    assert_eq!(text.as_deref(), Some("42%"));
}

#[test]
fn test_panicking_listener_does_not_break_commit() {
    let mut bar = SeekBar::new(&context(), percent_config());
    let after = Arc::new(AtomicUsize::new(0));
    bar.value_committed.connect(|_| panic!("listener failure"));
    let a = after.clone();
    bar.value_committed.connect(move |_| {
        a.fetch_add(1, Ordering::SeqCst);
    });

    let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
    bar.handle_pointer(&PointerEvent::down(P, Point::new(30.0, 10.0)), bounds);
    bar.handle_pointer(&PointerEvent::up(P, Point::new(30.0, 10.0)), bounds);

    assert_eq!(bar.value(), 30.0);
    assert_eq!(after.load(Ordering::SeqCst), 1);
}

#[test]
fn test_scoped_listener_disconnects() {
    let mut bar = SeekBar::new(&context(), percent_config());
    let count = Arc::new(AtomicUsize::new(0));
    let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
    {
        let c = count.clone();
        let _guard = bar.value_committed.connect_scoped(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        bar.handle_pointer(&PointerEvent::down(P, Point::new(30.0, 10.0)), bounds);
        bar.handle_pointer(&PointerEvent::up(P, Point::new(30.0, 10.0)), bounds);
    }
    bar.handle_pointer(&PointerEvent::down(P, Point::new(60.0, 10.0)), bounds);
    bar.handle_pointer(&PointerEvent::up(P, Point::new(60.0, 10.0)), bounds);
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(bar.value(), 60.0);
}

#[test]
fn test_drive_frame_with_host() {
    init_logging();
    let mut bar = SeekBar::new(
        &context(),
        percent_config().with_animation(AnimationConfig::disabled()),
    );
    let committed = collect(&bar.value_committed);
    let mut host = ScriptedHost::new(
        Rect::new(0.0, 0.0, 100.0, 20.0),
        [
            PointerEvent::down(P, Point::new(20.0, 10.0)),
            PointerEvent::moved(P, Point::new(45.0, 10.0)),
            PointerEvent::up(P, Point::new(45.0, 10.0)),
            // Outside the bar and its touch extension.
            PointerEvent::down(P, Point::new(50.0, 300.0)),
        ],
    );

    let outcome = bar.drive_frame(&mut host, FRAME);
    assert_eq!(outcome.events, 4);
    assert_eq!(outcome.handled, 3);
    assert!(outcome.rendered);
    assert_eq!(host.repaints, 1);
    assert!(!host.surface.is_empty());
    assert_eq!(*committed.lock(), vec![45.0]);

    // Nothing pending and nothing moving: no repaint requested.
    let outcome = bar.drive_frame(&mut host, FRAME);
    assert_eq!(outcome.events, 0);
    assert!(!outcome.animating);
    assert_eq!(host.repaints, 1);
}

#[test]
fn test_shut_down_context_skips_painting() {
    let context = context();
    let bar = SeekBar::new(&context, SeekBarConfig::default());
    context.shutdown();
    let mut surface = RecordingRenderer::new();
    assert!(bar.render(&mut surface, Rect::new(0.0, 0.0, 200.0, 20.0)).is_ok());
    assert!(surface.is_empty());
}
