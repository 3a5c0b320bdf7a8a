//! The 2x2 splittable grid container.

use super::slot::{Camera, ViewSlot};
use crate::model::{LayoutParameters, Point, SlotId};
use ratatui::layout::Rect;
use tracing::{debug, trace};

/// Grid container holding the four view slots.
///
/// # Layout rules
///
/// - Each axis is split at its ratio after subtracting the divider, which
///   only takes space when that axis is enabled.
/// - With both axes disabled (single mode) the active slot takes the whole
///   area and the other three collapse.
/// - Once the grid has a usable size, a hidden active slot is moved to its
///   visible mirror so input always lands on a visible pane.
#[derive(Debug)]
pub struct QuadLayout {
    area: Rect,
    params: LayoutParameters,
    active: SlotId,
    slots: [ViewSlot; 4],
    refreshes: u64,
    needs_refresh: bool,
}

impl QuadLayout {
    /// Build a grid with a camera per slot. The area starts empty.
    pub fn new(mut camera_for: impl FnMut(SlotId) -> Box<dyn Camera>) -> Self {
        Self {
            area: Rect::default(),
            params: LayoutParameters::default(),
            active: SlotId::TopLeft,
            slots: SlotId::ALL.map(|id| ViewSlot::new(id, camera_for(id))),
            refreshes: 0,
            needs_refresh: false,
        }
    }

    /// Area the grid currently fills.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Give the grid a new pixel area and re-derive slot extents.
    pub fn resize(&mut self, area: Rect) {
        if self.area == area {
            return;
        }
        self.area = area;
        self.arrange();
        self.refresh();
    }

    /// Parameters last applied.
    pub fn params(&self) -> LayoutParameters {
        self.params
    }

    /// Apply new split parameters and refresh the grid immediately.
    pub fn apply(&mut self, params: LayoutParameters) {
        self.params = params;
        self.arrange();
        self.refresh();
    }

    /// Force a visual refresh of the container.
    pub fn refresh(&mut self) {
        self.refreshes += 1;
        self.needs_refresh = true;
        trace!(refreshes = self.refreshes, "Grid refresh requested");
    }

    /// Clear and return the pending-refresh flag.
    pub fn take_refresh(&mut self) -> bool {
        std::mem::take(&mut self.needs_refresh)
    }

    /// Total refreshes since construction.
    pub fn refresh_count(&self) -> u64 {
        self.refreshes
    }

    /// Slot that has focus.
    pub fn active(&self) -> SlotId {
        self.active
    }

    /// Mark `slot` as the focused pane.
    ///
    /// Returns `false` if it already was. In single mode the newly active
    /// slot takes over the full area.
    pub fn set_active(&mut self, slot: SlotId) -> bool {
        if self.active == slot {
            return false;
        }
        self.active = slot;
        self.arrange();
        debug!(slot = %self.active, "Active view changed");
        true
    }

    /// View that has focus.
    pub fn active_view(&self) -> &ViewSlot {
        &self.slots[self.active.index()]
    }

    /// Mutable access to the focused view.
    pub fn active_view_mut(&mut self) -> &mut ViewSlot {
        &mut self.slots[self.active.index()]
    }

    /// View at `id`, visible or not.
    pub fn slot(&self, id: SlotId) -> &ViewSlot {
        &self.slots[id.index()]
    }

    /// Mutable access to the view at `id`.
    pub fn slot_mut(&mut self, id: SlotId) -> &mut ViewSlot {
        &mut self.slots[id.index()]
    }

    /// All four slots, hidden ones included.
    pub fn slots(&self) -> impl Iterator<Item = &ViewSlot> {
        self.slots.iter()
    }

    /// All four views, mutably.
    pub fn slots_mut(&mut self) -> impl Iterator<Item = &mut ViewSlot> {
        self.slots.iter_mut()
    }

    /// Slots with a non-degenerate extent.
    pub fn views(&self) -> impl Iterator<Item = &ViewSlot> {
        self.slots.iter().filter(|slot| slot.is_visible())
    }

    /// Visible views, mutably.
    pub fn views_mut(&mut self) -> impl Iterator<Item = &mut ViewSlot> {
        self.slots.iter_mut().filter(|slot| slot.is_visible())
    }

    /// Invalidate every visible slot. Returns how many were touched.
    pub fn invalidate_visible(&mut self) -> usize {
        let mut touched = 0;
        for view in self.views_mut() {
            view.invalidate();
            touched += 1;
        }
        trace!(touched, "Invalidated visible views");
        touched
    }

    /// Visible slot under a grid point, if any.
    pub fn slot_at(&self, point: Point) -> Option<SlotId> {
        self.views()
            .find(|view| view.contains(point))
            .map(ViewSlot::id)
    }

    fn arrange(&mut self) {
        let areas = slot_areas(self.area, &self.params, self.active);
        for (slot, area) in self.slots.iter_mut().zip(areas) {
            slot.set_area(area);
        }

        if !is_usable(self.area) || self.active_view().is_visible() {
            return;
        }
        let fallback = [
            self.active.column_mirror(),
            self.active.row_mirror(),
            self.active.column_mirror().row_mirror(),
        ]
        .into_iter()
        .find(|id| self.slot(*id).is_visible());

        if let Some(slot) = fallback {
            debug!(from = %self.active, to = %slot, "Active view was hidden; moved focus");
            self.active = slot;
        }
    }
}

fn is_usable(area: Rect) -> bool {
    area.width > 1 && area.height > 1
}

/// Split `len` at `ratio`, reserving `gap` pixels for the divider.
fn split_axis(len: u16, ratio: f32, gap: u16) -> (u16, u16) {
    let gap = gap.min(len);
    let avail = len - gap;
    let first = (f32::from(avail) * ratio.clamp(0.0, 1.0)).round() as u16;
    let first = first.min(avail);
    (first, avail - first)
}

/// Pixel extents of the four slots, in [`SlotId::ALL`] order.
pub fn slot_areas(area: Rect, params: &LayoutParameters, active: SlotId) -> [Rect; 4] {
    if !params.enable_x && !params.enable_y {
        let mut areas = [Rect::new(area.x, area.y, 0, 0); 4];
        areas[active.index()] = area;
        return areas;
    }

    let gap_x = if params.enable_x { params.splitter_thickness } else { 0 };
    let gap_y = if params.enable_y { params.splitter_thickness } else { 0 };
    let (left, right) = split_axis(area.width, params.split_x, gap_x);
    let (top, bottom) = split_axis(area.height, params.split_y, gap_y);

    let right_x = area.x.saturating_add(area.width - right);
    let bottom_y = area.y.saturating_add(area.height - bottom);

    [
        Rect::new(area.x, area.y, left, top),
        Rect::new(right_x, area.y, right, top),
        Rect::new(area.x, bottom_y, left, bottom),
        Rect::new(right_x, bottom_y, right, bottom),
    ]
}

#[cfg(test)]
#[path = "quad_tests.rs"]
mod tests;
