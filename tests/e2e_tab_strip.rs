// TabDeck - tests/e2e_tab_strip.rs
//
// End-to-end tests for the strip: layout -> drop resolution -> tab
// management, preview placement and timing, settings notification
// delivery, and session persistence on the real filesystem.

use egui::{Pos2, Rect, Vec2};
use tabdeck::app::session::{self, SessionData};
use tabdeck::app::settings::{SettingChange, SettingsStore};
use tabdeck::app::tabs::TabStrip;
use tabdeck::core::layout::{resolve_drop_index, tab_rects, TabSizing};
use tabdeck::core::model::DockEdge;
use tabdeck::core::preview::{preview_position, PreviewController};

// =============================================================================
// Helpers
// =============================================================================

fn sizing() -> TabSizing {
    TabSizing {
        min_width: 40.0,
        max_width: 250.0,
        tab_height: 28.0,
    }
}

fn strip_with(n: usize) -> TabStrip {
    let mut strip = TabStrip::new();
    for i in 0..n {
        strip.add_tab(format!("Tab {i}"));
    }
    strip
}

// =============================================================================
// Drag gesture: layout feeds the resolver, the resolver feeds move_tab
// =============================================================================

/// A full reorder: rectangles computed from the strip, a pointer past the
/// midpoint of the last tab, and the resulting move.
#[test]
fn e2e_drag_reorder_flow() {
    let mut strip = strip_with(3);
    let strip_rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(300.0, 28.0));
    let rects = tab_rects(strip_rect, &strip.pinned_flags(), DockEdge::Top, &sizing());
    assert_eq!(rects.len(), 3);

    // 300 wide / 3 tabs = 100 each. Pointer at x=280 is past the midpoint
    // of tab 2 (250), resolving to the append slot.
    let drop = resolve_drop_index(Pos2::new(280.0, 14.0), &rects, DockEdge::Top);
    assert_eq!(drop, 3);

    let moved_id = strip.tabs()[0].id;
    strip.move_tab(0, drop);
    assert_eq!(strip.tabs()[2].id, moved_id);
}

/// Dragging over the pinned prefix clamps the landing slot to the boundary.
#[test]
fn e2e_drag_cannot_cross_pinned_prefix() {
    let mut strip = strip_with(4);
    strip.set_pinned(0, true);

    let strip_rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 28.0));
    let rects = tab_rects(strip_rect, &strip.pinned_flags(), DockEdge::Top, &sizing());

    // Pointer over the pinned tab's leading half resolves to index 0...
    let drop = resolve_drop_index(Pos2::new(10.0, 14.0), &rects, DockEdge::Top);
    assert_eq!(drop, 0);

    // ...but the move lands at the boundary, keeping the prefix intact.
    let new_index = strip.move_tab(3, drop).unwrap();
    assert_eq!(new_index, 1);
    assert!(strip.tabs()[0].pinned);
    assert!(!strip.tabs()[1].pinned);
}

/// The distilled scenario: tabs at [0,50), [50,100), [100,150).
#[test]
fn e2e_drop_index_midpoint_boundaries() {
    let rects: Vec<Rect> = (0..3)
        .map(|i| Rect::from_min_size(Pos2::new(i as f32 * 50.0, 0.0), Vec2::new(50.0, 28.0)))
        .collect();

    assert_eq!(
        resolve_drop_index(Pos2::new(120.0, 10.0), &rects, DockEdge::Top),
        2
    );
    assert_eq!(
        resolve_drop_index(Pos2::new(130.0, 10.0), &rects, DockEdge::Top),
        3
    );
    assert_eq!(resolve_drop_index(Pos2::new(120.0, 10.0), &[], DockEdge::Top), 0);
}

/// Vertical strips resolve along y and lay tabs out as a stack.
#[test]
fn e2e_vertical_strip_layout_and_drop() {
    let strip = strip_with(3);
    let strip_rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(160.0, 600.0));
    let rects = tab_rects(strip_rect, &strip.pinned_flags(), DockEdge::Left, &sizing());

    assert_eq!(rects[2].top(), 56.0);
    // Pointer below every tab appends.
    assert_eq!(
        resolve_drop_index(Pos2::new(80.0, 500.0), &rects, DockEdge::Left),
        3
    );
}

// =============================================================================
// Preview placement and timing
// =============================================================================

/// A 200x100 preview anchored near the right edge of a 1024-wide screen is
/// shifted inward to x = 824, never resized.
#[test]
fn e2e_preview_clamped_to_screen() {
    let screen = Rect::from_min_size(Pos2::ZERO, Vec2::new(1024.0, 768.0));
    let tab = Rect::from_min_size(Pos2::new(990.0, 0.0), Vec2::new(34.0, 28.0));

    let pos = preview_position(tab, Vec2::new(200.0, 100.0), screen, DockEdge::Top);
    assert_eq!(pos.x, 824.0);
    assert_eq!(pos.y, 28.0);
}

/// Hidden -> Pending -> Shown -> Hidden, driven by explicit times.
#[test]
fn e2e_preview_state_machine_round_trip() {
    let mut preview = PreviewController::new(250);

    preview.hover(Some(1), 100.0);
    assert_eq!(preview.poll(100.1), None, "delay not yet elapsed");
    assert_eq!(preview.poll(100.3), Some(1), "shown after the delay");

    // Retarget while shown is immediate.
    preview.hover(Some(2), 100.4);
    assert_eq!(preview.poll(100.4), Some(2));

    // Drag start hides immediately; the next hover waits out a fresh delay.
    preview.cancel();
    preview.hover(Some(2), 101.0);
    assert_eq!(preview.poll(101.1), None);
    assert_eq!(preview.poll(101.3), Some(2));
}

// =============================================================================
// Settings notifications
// =============================================================================

/// Subscribers see changes in subscription order, once per actual change,
/// and a setter writing the current value stays silent.
#[test]
fn e2e_settings_notification_delivery() {
    let mut store = SettingsStore::default();
    let strip_rx = store.subscribe();
    let console_rx = store.subscribe();

    store.set_thumbnails_enabled(true);
    store.set_thumbnails_enabled(true); // no-op
    store.set_edge(DockEdge::Bottom);

    let strip_changes: Vec<SettingChange> = strip_rx.try_iter().collect();
    let console_changes: Vec<SettingChange> = console_rx.try_iter().collect();

    let expected = vec![
        SettingChange::ThumbnailsEnabled(true),
        SettingChange::Edge(DockEdge::Bottom),
    ];
    assert_eq!(strip_changes, expected);
    assert_eq!(console_changes, expected);
}

// =============================================================================
// Session persistence
// =============================================================================

#[test]
fn e2e_session_round_trip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = session::session_path(dir.path());

    let mut strip = strip_with(3);
    strip.set_pinned(0, true);
    strip.activate(2);

    let data = SessionData::capture(&strip, DockEdge::Right);
    session::save(&data, &path).unwrap();

    let loaded = session::load(&path).expect("session should load");
    let restored = loaded.restore();
    assert_eq!(restored.len(), 3);
    assert!(restored.tabs()[0].pinned);
    assert_eq!(restored.active_index(), Some(2));
    assert_eq!(loaded.edge, DockEdge::Right);
}

#[test]
fn e2e_corrupt_session_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = session::session_path(dir.path());
    std::fs::write(&path, "{not json").unwrap();
    assert!(session::load(&path).is_none());

    // Version mismatch is discarded the same way.
    std::fs::write(&path, r#"{"version": 999, "tabs": [], "active": null}"#).unwrap();
    assert!(session::load(&path).is_none());
}
