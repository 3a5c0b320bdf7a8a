//! Tests for the quad grid container.

use super::*;
use crate::layout::ClipCamera;
use crate::model::{ViewMode, DEFAULT_SPLITTER_THICKNESS};
use proptest::prelude::*;

// ===== Test Helpers =====

fn grid() -> QuadLayout {
    QuadLayout::new(|_| Box::new(ClipCamera::default()))
}

fn sized_grid(width: u16, height: u16) -> QuadLayout {
    let mut layout = grid();
    layout.resize(Rect::new(0, 0, width, height));
    layout
}

fn params(mode: ViewMode, active: SlotId) -> LayoutParameters {
    LayoutParameters::for_mode(mode, active, DEFAULT_SPLITTER_THICKNESS)
}

fn visible_ids(layout: &QuadLayout) -> Vec<SlotId> {
    layout.views().map(ViewSlot::id).collect()
}

// ===== Geometry =====

#[test]
fn quad_splits_around_divider() {
    let areas = slot_areas(
        Rect::new(0, 0, 100, 50),
        &params(ViewMode::Quad, SlotId::TopLeft),
        SlotId::TopLeft,
    );
    assert_eq!(areas[0], Rect::new(0, 0, 46, 21));
    assert_eq!(areas[1], Rect::new(54, 0, 46, 21));
    assert_eq!(areas[2], Rect::new(0, 29, 46, 21));
    assert_eq!(areas[3], Rect::new(54, 29, 46, 21));
}

#[test]
fn grid_offset_is_carried_into_slot_areas() {
    let areas = slot_areas(
        Rect::new(10, 5, 100, 50),
        &params(ViewMode::Quad, SlotId::TopLeft),
        SlotId::TopLeft,
    );
    assert_eq!(areas[3], Rect::new(64, 34, 46, 21));
}

#[test]
fn dual_horizontal_top_active_keeps_left_column() {
    let areas = slot_areas(
        Rect::new(0, 0, 100, 50),
        &params(ViewMode::DualHorizontal, SlotId::TopLeft),
        SlotId::TopLeft,
    );
    assert_eq!(areas[0], Rect::new(0, 0, 100, 21));
    assert_eq!(areas[2], Rect::new(0, 29, 100, 21));
    assert_eq!(areas[1].width, 0);
    assert_eq!(areas[3].width, 0);
}

#[test]
fn dual_vertical_right_active_keeps_bottom_row() {
    let areas = slot_areas(
        Rect::new(0, 0, 100, 50),
        &params(ViewMode::DualVertical, SlotId::BottomRight),
        SlotId::BottomRight,
    );
    assert_eq!(areas[0].height, 0);
    assert_eq!(areas[1].height, 0);
    assert_eq!(areas[2], Rect::new(0, 0, 46, 50));
    assert_eq!(areas[3], Rect::new(54, 0, 46, 50));
}

#[test]
fn single_gives_whole_area_to_active_slot() {
    let area = Rect::new(0, 0, 80, 24);
    let areas = slot_areas(area, &params(ViewMode::Single, SlotId::BottomLeft), SlotId::BottomLeft);
    assert_eq!(areas[SlotId::BottomLeft.index()], area);
    for id in [SlotId::TopLeft, SlotId::TopRight, SlotId::BottomRight] {
        assert_eq!(areas[id.index()].area(), 0);
    }
}

#[test]
fn divider_wider_than_area_collapses_everything() {
    let areas = slot_areas(
        Rect::new(0, 0, 4, 4),
        &params(ViewMode::Quad, SlotId::TopLeft),
        SlotId::TopLeft,
    );
    assert!(areas.iter().all(|a| a.width == 0 && a.height == 0));
}

// ===== Visibility =====

#[test]
fn unsized_grid_has_no_visible_views() {
    let mut layout = grid();
    layout.apply(params(ViewMode::Quad, SlotId::TopLeft));
    assert_eq!(layout.views().count(), 0);
    assert_eq!(layout.slots().count(), 4);
}

#[test]
fn views_filters_collapsed_slots() {
    let mut layout = sized_grid(100, 50);
    layout.apply(params(ViewMode::DualVertical, SlotId::TopLeft));
    assert_eq!(visible_ids(&layout), vec![SlotId::TopLeft, SlotId::TopRight]);

    layout.apply(params(ViewMode::Quad, SlotId::TopLeft));
    assert_eq!(visible_ids(&layout), SlotId::ALL.to_vec());
}

#[test]
fn invalidate_visible_skips_degenerate_slots() {
    let mut layout = sized_grid(100, 50);
    layout.apply(params(ViewMode::DualHorizontal, SlotId::TopLeft));

    assert_eq!(layout.invalidate_visible(), 2);
    assert_eq!(layout.invalidate_visible(), 2);

    assert_eq!(layout.slot(SlotId::TopLeft).invalidation_count(), 2);
    assert_eq!(layout.slot(SlotId::BottomLeft).invalidation_count(), 2);
    assert_eq!(layout.slot(SlotId::TopRight).invalidation_count(), 0);
    assert_eq!(layout.slot(SlotId::BottomRight).invalidation_count(), 0);
}

// ===== Active slot =====

#[test]
fn hidden_active_slot_moves_to_column_mirror() {
    let mut layout = sized_grid(100, 50);
    layout.set_active(SlotId::TopRight);
    layout.apply(params(ViewMode::DualHorizontal, SlotId::TopRight));
    assert_eq!(layout.active(), SlotId::TopLeft);
    assert!(layout.active_view().is_visible());
}

#[test]
fn hidden_active_slot_moves_to_row_mirror() {
    let mut layout = sized_grid(100, 50);
    layout.set_active(SlotId::BottomLeft);
    layout.apply(params(ViewMode::DualVertical, SlotId::BottomLeft));
    assert_eq!(layout.active(), SlotId::TopLeft);
}

#[test]
fn active_slot_is_kept_while_grid_is_unsized() {
    let mut layout = grid();
    layout.set_active(SlotId::TopRight);
    layout.apply(params(ViewMode::DualHorizontal, SlotId::TopRight));
    assert_eq!(layout.active(), SlotId::TopRight);
}

#[test]
fn set_active_in_single_mode_moves_full_area() {
    let mut layout = sized_grid(60, 30);
    layout.apply(params(ViewMode::Single, SlotId::TopLeft));
    assert_eq!(visible_ids(&layout), vec![SlotId::TopLeft]);

    assert!(layout.set_active(SlotId::BottomRight));
    assert_eq!(visible_ids(&layout), vec![SlotId::BottomRight]);
    assert!(!layout.set_active(SlotId::BottomRight));
}

#[test]
fn slot_at_hit_tests_visible_views() {
    let layout = sized_grid(100, 50);
    assert_eq!(layout.slot_at(Point::new(70, 40)), Some(SlotId::BottomRight));
    // divider gap
    assert_eq!(layout.slot_at(Point::new(50, 10)), None);
    assert_eq!(layout.slot_at(Point::new(-3, 10)), None);
}

// ===== Refresh =====

#[test]
fn apply_forces_refresh() {
    let mut layout = grid();
    let before = layout.refresh_count();
    layout.apply(params(ViewMode::Single, SlotId::TopLeft));
    assert_eq!(layout.refresh_count(), before + 1);
    assert!(layout.take_refresh());
    assert!(!layout.take_refresh());
}

#[test]
fn resize_to_same_area_is_a_no_op() {
    let mut layout = sized_grid(40, 40);
    let before = layout.refresh_count();
    layout.resize(Rect::new(0, 0, 40, 40));
    assert_eq!(layout.refresh_count(), before);
}

#[test]
fn grid_at_far_edge_of_coordinate_space_does_not_overflow() {
    let mut layout = grid();
    layout.apply(params(ViewMode::DualHorizontal, SlotId::TopLeft));
    let area = Rect {
        x: 65000,
        y: 65000,
        width: 1000,
        height: 40,
    };

    layout.resize(area);

    let left_column = layout.slot(SlotId::TopLeft).area();
    assert_eq!((left_column.x, left_column.y, left_column.width), (65000, 65000, 1000));
    assert!(!layout.slot(SlotId::TopRight).is_visible());
    assert!(layout.active_view().is_visible());
}

// ===== Properties =====

fn arb_mode() -> impl Strategy<Value = ViewMode> {
    prop_oneof![
        Just(ViewMode::Single),
        Just(ViewMode::DualHorizontal),
        Just(ViewMode::DualVertical),
        Just(ViewMode::Quad),
    ]
}

fn arb_slot() -> impl Strategy<Value = SlotId> {
    prop_oneof![
        Just(SlotId::TopLeft),
        Just(SlotId::TopRight),
        Just(SlotId::BottomLeft),
        Just(SlotId::BottomRight),
    ]
}

proptest! {
    #[test]
    fn slots_never_overlap_and_stay_in_bounds(
        mode in arb_mode(),
        active in arb_slot(),
        width in 0u16..400,
        height in 0u16..400,
    ) {
        let area = Rect::new(3, 7, width, height);
        let areas = slot_areas(area, &params(mode, active), active);
        for (i, a) in areas.iter().enumerate() {
            prop_assert!(a.area() == 0 || area.union(*a) == area, "slot {} out of bounds: {:?}", i, a);
            for b in areas.iter().skip(i + 1) {
                prop_assert!(!a.intersects(*b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn sized_grid_always_has_a_visible_active_view(
        mode in arb_mode(),
        active in arb_slot(),
        width in 20u16..400,
        height in 20u16..400,
    ) {
        let mut layout = sized_grid(width, height);
        layout.set_active(active);
        layout.apply(params(mode, layout.active()));
        prop_assert!(layout.active_view().is_visible());
    }

    #[test]
    fn visible_view_count_matches_mode(
        mode in arb_mode(),
        active in arb_slot(),
        width in 20u16..400,
        height in 20u16..400,
    ) {
        let mut layout = sized_grid(width, height);
        layout.set_active(active);
        layout.apply(params(mode, layout.active()));
        let expected = match mode {
            ViewMode::Single => 1,
            ViewMode::DualHorizontal | ViewMode::DualVertical => 2,
            ViewMode::Quad => 4,
        };
        prop_assert_eq!(layout.views().count(), expected);
    }
}
