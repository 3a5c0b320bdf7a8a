//! The design view: quad-pane editing surface controller.
//!
//! [`DesignView`] owns the view grid, the frame clock and the context and
//! manipulator bindings. The host shell drives it from a single UI thread:
//! it calls [`DesignView::tick`] once per frame and the setters in response
//! to commands. Every setter runs synchronously and may invalidate views.
//!
//! ```
//! use designview::config::DesignViewSettings;
//! use designview::design_view::{DesignView, Editor};
//! use designview::model::{FrameTime, ViewMode};
//! use ratatui::layout::Rect;
//!
//! struct Noop;
//! impl Editor for Noop {
//!     fn tick(&mut self, _view: &mut DesignView, _frame: FrameTime) {}
//! }
//!
//! let mut view = DesignView::headless(&DesignViewSettings::default());
//! view.resize(Rect::new(0, 0, 120, 40));
//! view.set_view_mode(ViewMode::DualVertical);
//! assert_eq!(view.layout().views().count(), 2);
//! view.tick(&mut Noop);
//! ```

use crate::config::DesignViewSettings;
use crate::context::{ContextBinding, ContextObserver, EditContext, Handler, ObserverId};
use crate::input::{
    ControlScheme, ControlSchemeFactory, InputScheme, PointerSource, PointerState,
    StandardSchemes,
};
use crate::layout::{Camera, ClipCamera, QuadLayout};
use crate::manipulator::{Manipulator, ManipulatorBinding, PickFilter};
use crate::model::{
    ControlSchemeKind, CursorHint, FrameTime, LayoutParameters, Point, SlotId, SnapSettings,
    ViewMode,
};
use crate::timing::{FrameClock, MonotonicSource, TimestampSource};
use ratatui::layout::Rect;
use ratatui::style::Color;
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, info};

/// Concrete editor driven by the design view.
pub trait Editor {
    /// Advance update and rendering by one frame.
    fn tick(&mut self, view: &mut DesignView, frame: FrameTime);
}

/// Capabilities the host plugs into a design view.
pub struct HostServices {
    /// Builds the camera of each slot (called once per slot).
    pub cameras: Box<dyn FnMut(SlotId) -> Box<dyn Camera>>,
    /// Host-global pointer position.
    pub pointer: Box<dyn PointerSource>,
    /// Builds control schemes on selection.
    pub control_schemes: Box<dyn ControlSchemeFactory>,
    /// Monotonic time source for the frame clock.
    pub timestamps: Box<dyn TimestampSource>,
}

impl HostServices {
    /// Services for a host without a renderer: clip-plane cameras, a fresh
    /// pointer tracker, standard control schemes and the system clock.
    pub fn headless() -> Self {
        Self {
            cameras: Box::new(|_: SlotId| -> Box<dyn Camera> { Box::new(ClipCamera::default()) }),
            pointer: Box::new(PointerState::new()),
            control_schemes: Box::new(StandardSchemes),
            timestamps: Box::new(MonotonicSource::new()),
        }
    }
}

/// Quad-pane design view controller.
pub struct DesignView {
    layout: Rc<RefCell<QuadLayout>>,
    deferred_invalidate: Rc<Cell<bool>>,
    view_mode: ViewMode,
    splitter_thickness: u16,
    clock: FrameClock,
    context: ContextBinding,
    manipulator: ManipulatorBinding,
    pick_filter: Option<Rc<dyn PickFilter>>,
    pointer: Box<dyn PointerSource>,
    input: InputScheme,
    snap: SnapSettings,
    back_color: Color,
    camera_far_z: f32,
}

impl DesignView {
    /// Build a design view and apply `settings` to it.
    pub fn new(settings: &DesignViewSettings, services: HostServices) -> Self {
        let HostServices {
            cameras,
            pointer,
            control_schemes,
            timestamps,
        } = services;

        let layout = Rc::new(RefCell::new(QuadLayout::new(cameras)));
        let deferred_invalidate = Rc::new(Cell::new(false));
        let refresh = validation_refresh(Rc::downgrade(&layout), Rc::clone(&deferred_invalidate));

        let mut view = Self {
            layout,
            deferred_invalidate,
            view_mode: settings.view_mode,
            splitter_thickness: settings.splitter_thickness,
            clock: FrameClock::new(timestamps),
            context: ContextBinding::new(refresh),
            manipulator: ManipulatorBinding::new(),
            pick_filter: None,
            pointer,
            input: InputScheme::new(control_schemes, settings.control_scheme),
            snap: settings.snap,
            back_color: settings.back_color,
            camera_far_z: settings.camera_far_z,
        };

        view.layout_mut().set_active(settings.active_slot);
        view.set_back_color(settings.back_color);
        view.set_camera_far_z(settings.camera_far_z);
        view.set_view_mode(settings.view_mode);
        view
    }

    /// Build a design view on [`HostServices::headless`].
    pub fn headless(settings: &DesignViewSettings) -> Self {
        Self::new(settings, HostServices::headless())
    }

    // ===== Layout =====

    /// Borrow the view grid.
    ///
    /// Validation signals raised while this borrow is alive are queued and
    /// applied when the current (or next) tick finishes.
    pub fn layout(&self) -> Ref<'_, QuadLayout> {
        self.layout.borrow()
    }

    /// Mutably borrow the view grid.
    ///
    /// Takes `&mut self` so a live [`layout`](Self::layout) guard cannot
    /// coexist with it:
    ///
    /// ```compile_fail
    /// use designview::config::DesignViewSettings;
    /// use designview::design_view::DesignView;
    ///
    /// let mut view = DesignView::headless(&DesignViewSettings::default());
    /// let shared = view.layout();
    /// let exclusive = view.layout_mut();
    /// drop((shared, exclusive));
    /// ```
    pub fn layout_mut(&mut self) -> RefMut<'_, QuadLayout> {
        self.layout.borrow_mut()
    }

    /// Give the grid its pixel area (host window resized).
    pub fn resize(&mut self, area: Rect) {
        self.layout_mut().resize(area);
    }

    /// Current grid split.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Switch the grid split.
    ///
    /// The dual modes pick which half of the grid to show from the active
    /// slot; if that hides the active slot, focus moves to a visible mirror.
    /// The grid is refreshed before this returns.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> LayoutParameters {
        let mut layout = self.layout.borrow_mut();
        let params = LayoutParameters::for_mode(mode, layout.active(), self.splitter_thickness);
        self.view_mode = mode;
        layout.apply(params);
        debug!(%mode, active = %layout.active(), ?params, "View mode applied");
        params
    }

    /// Divider thickness in cells; zero in single mode.
    pub fn splitter_thickness(&self) -> u16 {
        self.splitter_thickness
    }

    /// Slot that has focus.
    pub fn active_slot(&self) -> SlotId {
        self.layout().active()
    }

    /// Focus `slot`. Returns `false` if it was already active.
    pub fn set_active_slot(&mut self, slot: SlotId) -> bool {
        self.layout_mut().set_active(slot)
    }

    /// Focus the visible pane under a grid point (click-to-focus).
    pub fn focus_at(&mut self, point: Point) -> Option<SlotId> {
        let mut layout = self.layout_mut();
        let slot = layout.slot_at(point)?;
        layout.set_active(slot);
        Some(slot)
    }

    /// Cursor hint of the active view.
    pub fn cursor(&self) -> CursorHint {
        self.layout().active_view().cursor()
    }

    // ===== Context =====

    /// The active edit context, if any and still alive.
    pub fn context(&self) -> Option<Rc<dyn EditContext>> {
        self.context.context()
    }

    /// Swap the active edit context.
    ///
    /// Views redraw whenever the new context's validation is cancelled or
    /// ends. Call with `None` before destroying the current context.
    pub fn set_context(&mut self, context: Option<Rc<dyn EditContext>>) {
        self.context.set_context(context);
    }

    /// Register an observer of edit-context switches.
    pub fn add_context_observer(&mut self, observer: Box<dyn ContextObserver>) -> ObserverId {
        self.context.add_observer(observer)
    }

    /// Unregister an observer, handing it back if it was registered.
    pub fn remove_context_observer(
        &mut self,
        id: ObserverId,
    ) -> Option<Box<dyn ContextObserver>> {
        self.context.remove_observer(id)
    }

    // ===== Manipulator =====

    /// The active manipulator, if it is still alive.
    pub fn manipulator(&self) -> Option<Rc<RefCell<dyn Manipulator>>> {
        self.manipulator.manipulator()
    }

    /// Swap the active manipulator.
    ///
    /// A new manipulator is picked once at the pointer position inside the
    /// active view; a hit shows the drag cursor. All views are invalidated
    /// afterwards.
    pub fn set_manipulator(
        &mut self,
        manipulator: Option<&Rc<RefCell<dyn Manipulator>>>,
    ) -> CursorHint {
        let screen = self.pointer.screen_position();
        let cursor = {
            let mut layout = self.layout.borrow_mut();
            self.manipulator
                .set(manipulator, layout.active_view_mut(), screen)
        };
        self.invalidate_views();
        cursor
    }

    /// Filter hosts consult when picking, if any.
    pub fn pick_filter(&self) -> Option<Rc<dyn PickFilter>> {
        self.pick_filter.clone()
    }

    /// Replace the filter hosts consult when picking.
    pub fn set_pick_filter(&mut self, filter: Option<Rc<dyn PickFilter>>) {
        self.pick_filter = filter;
    }

    // ===== Views =====

    /// Request a redraw of every visible view. Returns how many were touched.
    pub fn invalidate_views(&mut self) -> usize {
        self.deferred_invalidate.set(false);
        self.layout_mut().invalidate_visible()
    }

    /// Background color shared by every view.
    pub fn back_color(&self) -> Color {
        self.back_color
    }

    /// Set the background of all four views, hidden ones included.
    pub fn set_back_color(&mut self, color: Color) {
        self.back_color = color;
        for slot in self.layout.borrow_mut().slots_mut() {
            slot.set_back_color(color);
        }
    }

    /// Far clip distance pushed to every camera.
    pub fn camera_far_z(&self) -> f32 {
        self.camera_far_z
    }

    /// Set the far clip distance of all four cameras, hidden ones included.
    pub fn set_camera_far_z(&mut self, far_z: f32) {
        self.camera_far_z = far_z;
        for slot in self.layout.borrow_mut().slots_mut() {
            slot.camera_mut().set_far_z(far_z);
        }
    }

    // ===== Input & snapping =====

    /// Selected camera control scheme.
    pub fn control_scheme(&self) -> ControlSchemeKind {
        self.input.kind()
    }

    /// Replace the active control scheme with a fresh instance of `kind`.
    pub fn set_control_scheme(&mut self, kind: ControlSchemeKind) {
        self.input.select(kind);
    }

    /// The live control scheme instance.
    pub fn active_control_scheme(&self) -> &dyn ControlScheme {
        self.input.active()
    }

    /// Snapping settings for manipulators.
    pub fn snap(&self) -> &SnapSettings {
        &self.snap
    }

    /// Mutable snapping settings.
    pub fn snap_mut(&mut self) -> &mut SnapSettings {
        &mut self.snap
    }

    /// Rotation snap increment in degrees.
    pub fn snap_angle(&self) -> f32 {
        self.snap.snap_angle()
    }

    /// Set the rotation snap step in degrees.
    pub fn set_snap_angle(&mut self, degrees: f32) {
        self.snap.set_snap_angle(degrees);
    }

    // ===== Frame loop =====

    /// Read the frame clock.
    ///
    /// Each read consumes elapsed time; read once per frame.
    pub fn frame_time(&mut self) -> FrameTime {
        self.clock.now()
    }

    /// Compute the frame time and advance `editor` by one tick.
    pub fn tick<E: Editor + ?Sized>(&mut self, editor: &mut E) {
        let frame = self.frame_time();
        self.tick_with(editor, frame);
    }

    /// Advance `editor` by an explicit frame time.
    pub fn tick_with<E: Editor + ?Sized>(&mut self, editor: &mut E, frame: FrameTime) {
        editor.tick(self, frame);
        if self.deferred_invalidate.get() {
            info!("Applying invalidation queued during tick");
            self.invalidate_views();
        }
    }
}

/// Validation handler: redraw visible views, or queue the redraw if the grid
/// is borrowed when the signal fires.
fn validation_refresh(layout: Weak<RefCell<QuadLayout>>, deferred: Rc<Cell<bool>>) -> Handler {
    Rc::new(move || {
        let Some(grid) = layout.upgrade() else {
            return;
        };
        match grid.try_borrow_mut() {
            Ok(mut grid) => {
                grid.invalidate_visible();
            }
            Err(_) => {
                debug!("View grid busy; queueing invalidation");
                deferred.set(true);
            }
        };
    })
}

impl fmt::Debug for DesignView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesignView")
            .field("view_mode", &self.view_mode)
            .field("layout", &self.layout)
            .field("context", &self.context)
            .field("manipulator", &self.manipulator)
            .field("input", &self.input)
            .field("snap", &self.snap)
            .field("back_color", &self.back_color)
            .field("camera_far_z", &self.camera_far_z)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "design_view_tests.rs"]
mod tests;
