//! End-to-end scenarios for the design view: a host wiring its own
//! services, swapping contexts and manipulators across frames.

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use designview::config::{merge_config, ConfigFile, DesignViewSettings};
use designview::context::{ContextObserver, EditContext, ValidationSignals};
use designview::input::{PointerState, StandardSchemes};
use designview::layout::{Camera, ClipCamera, ViewSlot};
use designview::manipulator::Manipulator;
use designview::model::{CursorHint, FrameTime, Point, SlotId, ViewMode};
use designview::preview::preview_text;
use designview::timing::ManualSource;
use designview::{DesignView, Editor, HostServices};
use ratatui::layout::Rect;
use std::cell::RefCell;
use std::rc::Rc;

// ===== Test Helpers =====

struct Host {
    view: DesignView,
    pointer: PointerState,
    time: ManualSource,
}

fn host(settings: &DesignViewSettings) -> Host {
    let pointer = PointerState::new();
    let time = ManualSource::new(1_000_000);
    let services = HostServices {
        cameras: Box::new(|_: SlotId| -> Box<dyn Camera> { Box::new(ClipCamera::default()) }),
        pointer: Box::new(pointer.clone()),
        control_schemes: Box::new(StandardSchemes),
        timestamps: Box::new(time.clone()),
    };
    let mut view = DesignView::new(settings, services);
    view.resize(Rect::new(0, 0, 120, 40));
    Host {
        view,
        pointer,
        time,
    }
}

struct Scene {
    validation: Rc<ValidationSignals>,
}

impl Scene {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            validation: Rc::new(ValidationSignals::new()),
        })
    }
}

impl EditContext for Scene {
    fn validation(&self) -> Option<Rc<ValidationSignals>> {
        Some(Rc::clone(&self.validation))
    }
}

fn total_invalidations(view: &DesignView) -> u64 {
    view.layout().slots().map(ViewSlot::invalidation_count).sum()
}

/// Translate gizmo that is hit within a radius of the view centre.
struct TranslateGizmo {
    radius: i32,
}

impl Manipulator for TranslateGizmo {
    fn pick(&mut self, view: &ViewSlot, point: Point) -> bool {
        let cx = i32::from(view.area().width) / 2;
        let cy = i32::from(view.area().height) / 2;
        (point.x - cx).abs() <= self.radius && (point.y - cy).abs() <= self.radius
    }
}

#[derive(Default)]
struct Transitions {
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl ContextObserver for Transitions {
    fn context_changing(&mut self, _old: Option<&Rc<dyn EditContext>>) {
        self.log.borrow_mut().push("changing");
    }

    fn context_changed(&mut self, _new: Option<&Rc<dyn EditContext>>) {
        self.log.borrow_mut().push("changed");
    }
}

// ===== Scenarios =====

#[test]
fn configured_view_starts_in_configured_layout() {
    let file = ConfigFile {
        view_mode: Some(ViewMode::DualVertical),
        active_slot: Some(SlotId::BottomRight),
        back_color: Some("#112233".to_string()),
        ..ConfigFile::default()
    };
    let config = merge_config(Some(file)).expect("valid config");

    let h = host(&config.view);

    assert_eq!(h.view.view_mode(), ViewMode::DualVertical);
    assert_eq!(h.view.active_slot(), SlotId::BottomRight);
    let visible: Vec<SlotId> = h.view.layout().views().map(ViewSlot::id).collect();
    assert_eq!(visible, vec![SlotId::BottomLeft, SlotId::BottomRight]);
    assert!(preview_text(&h.view.layout()).contains("bottom-right *"));
}

#[test]
fn document_swap_rewires_redraws() {
    let mut h = host(&DesignViewSettings::default());
    let log = Rc::new(RefCell::new(Vec::new()));
    h.view.add_context_observer(Box::new(Transitions {
        log: Rc::clone(&log),
    }));

    let first = Scene::new();
    let second = Scene::new();
    h.view.set_context(Some(Rc::clone(&first) as Rc<dyn EditContext>));
    h.view.set_context(Some(Rc::clone(&second) as Rc<dyn EditContext>));

    let before = total_invalidations(&h.view);
    first.validation.end();
    assert_eq!(total_invalidations(&h.view), before);

    second.validation.end();
    assert_eq!(total_invalidations(&h.view), before + 4);

    h.view.set_context(None);
    second.validation.cancel();
    assert_eq!(total_invalidations(&h.view), before + 4);
    assert_eq!(
        *log.borrow(),
        vec!["changing", "changed", "changing", "changed", "changing", "changed"]
    );
}

#[test]
fn gizmo_under_pointer_shows_drag_cursor() {
    let mut h = host(&DesignViewSettings::default());
    h.view.set_view_mode(ViewMode::Single);

    h.pointer.observe(&MouseEvent {
        kind: MouseEventKind::Moved,
        column: 60,
        row: 20,
        modifiers: KeyModifiers::NONE,
    });
    let gizmo: Rc<RefCell<dyn Manipulator>> = Rc::new(RefCell::new(TranslateGizmo { radius: 2 }));
    assert_eq!(h.view.set_manipulator(Some(&gizmo)), CursorHint::Drag);

    h.pointer.observe(&MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 5,
        row: 5,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(h.view.set_manipulator(Some(&gizmo)), CursorHint::Default);

    drop(gizmo);
    assert!(h.view.manipulator().is_none());
}

#[test]
fn frames_accumulate_from_host_clock() {
    #[derive(Default)]
    struct Timeline(Vec<FrameTime>);

    impl Editor for Timeline {
        fn tick(&mut self, _view: &mut DesignView, frame: FrameTime) {
            self.0.push(frame);
        }
    }

    let mut h = host(&DesignViewSettings::default());
    let mut timeline = Timeline::default();

    for _ in 0..3 {
        h.time.advance_secs(0.25);
        h.view.tick(&mut timeline);
    }
    // a frame with no elapsed time
    h.view.tick(&mut timeline);

    let totals: Vec<f64> = timeline.0.iter().map(|f| f.total_time).collect();
    assert_eq!(totals, vec![0.25, 0.5, 0.75, 0.75]);
    assert_eq!(timeline.0[3].delta_time, 0.0);
}

#[test]
fn mode_cycle_keeps_focus_on_a_visible_pane() {
    let mut h = host(&DesignViewSettings::default());
    h.view.set_active_slot(SlotId::TopRight);

    for mode in [
        ViewMode::DualHorizontal,
        ViewMode::DualVertical,
        ViewMode::Single,
        ViewMode::Quad,
    ] {
        h.view.set_view_mode(mode);
        let layout = h.view.layout();
        assert!(
            layout.active_view().is_visible(),
            "{mode}: active {} hidden",
            layout.active()
        );
    }
}
