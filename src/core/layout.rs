// TabDeck - core/layout.rs
//
// Tab strip geometry: per-tab rectangles, drop-index resolution, and drop
// indicator placement. Pure arithmetic over egui math types; the panels
// feed in the strip rectangle and paint whatever comes back.

use crate::core::model::DockEdge;
use egui::{Pos2, Rect, Vec2};

/// Settings-driven sizing inputs for the strip.
#[derive(Debug, Clone, Copy)]
pub struct TabSizing {
    /// Minimum tab width; also the fixed width of a pinned tab.
    pub min_width: f32,

    /// Maximum tab width.
    pub max_width: f32,

    /// Tab height (cross axis on a horizontal strip, per-tab extent on a
    /// vertical one).
    pub tab_height: f32,
}

/// Compute on-screen rectangles for every tab handle.
///
/// Horizontal strips: pinned tabs (a contiguous prefix of `pinned`) take
/// `min_width` each; the remaining strip width is divided evenly among the
/// unpinned tabs and clamped to `[min_width, max_width]`.
///
/// Vertical strips stack fixed-height tabs spanning the strip's width.
pub fn tab_rects(strip: Rect, pinned: &[bool], edge: DockEdge, sizing: &TabSizing) -> Vec<Rect> {
    let count = pinned.len();
    if count == 0 {
        return Vec::new();
    }

    let mut rects = Vec::with_capacity(count);

    if edge.is_horizontal() {
        let pinned_count = pinned.iter().filter(|&&p| p).count();
        let unpinned_count = count - pinned_count;
        let free_width = (strip.width() - pinned_count as f32 * sizing.min_width).max(0.0);
        let unpinned_width = (free_width / unpinned_count.max(1) as f32)
            .clamp(sizing.min_width, sizing.max_width);

        let mut x = strip.left();
        for &is_pinned in pinned {
            let width = if is_pinned {
                sizing.min_width
            } else {
                unpinned_width
            };
            rects.push(Rect::from_min_size(
                Pos2::new(x, strip.top()),
                Vec2::new(width, strip.height()),
            ));
            x += width;
        }
    } else {
        let mut y = strip.top();
        for _ in pinned {
            rects.push(Rect::from_min_size(
                Pos2::new(strip.left(), y),
                Vec2::new(strip.width(), sizing.tab_height),
            ));
            y += sizing.tab_height;
        }
    }

    rects
}

/// Resolve a pointer position during a drag into an insertion index.
///
/// Inside a tab's rectangle the index is that tab's, incremented by one when
/// the pointer is past the rectangle's midpoint along the strip's primary
/// axis. Outside every rectangle: 0 before the first tab's leading edge,
/// otherwise the tab count (append). Zero tabs resolve to 0.
pub fn resolve_drop_index(pointer: Pos2, tab_rects: &[Rect], edge: DockEdge) -> usize {
    if tab_rects.is_empty() {
        return 0;
    }

    let horizontal = edge.is_horizontal();

    for (index, rect) in tab_rects.iter().enumerate() {
        if rect.contains(pointer) {
            let past_midpoint = if horizontal {
                pointer.x > rect.center().x
            } else {
                pointer.y > rect.center().y
            };
            return if past_midpoint { index + 1 } else { index };
        }
    }

    let leading_edge = if horizontal {
        tab_rects[0].left()
    } else {
        tab_rects[0].top()
    };
    let before_first = if horizontal {
        pointer.x < leading_edge
    } else {
        pointer.y < leading_edge
    };

    if before_first {
        0
    } else {
        tab_rects.len()
    }
}

/// The line segment where the drop indicator is painted for `drop_index`.
///
/// The indicator sits on the leading edge of the target tab, or on the
/// trailing edge of the last tab for an append, and spans the strip's cross
/// axis. With no tabs it sits on the strip's own leading edge.
pub fn drop_indicator_line(
    drop_index: usize,
    tab_rects: &[Rect],
    strip: Rect,
    edge: DockEdge,
) -> (Pos2, Pos2) {
    let horizontal = edge.is_horizontal();

    let offset = if tab_rects.is_empty() {
        if horizontal {
            strip.left()
        } else {
            strip.top()
        }
    } else if drop_index >= tab_rects.len() {
        let last = tab_rects[tab_rects.len() - 1];
        if horizontal {
            last.right()
        } else {
            last.bottom()
        }
    } else {
        let target = tab_rects[drop_index];
        if horizontal {
            target.left()
        } else {
            target.top()
        }
    };

    if horizontal {
        (
            Pos2::new(offset, strip.top()),
            Pos2::new(offset, strip.bottom()),
        )
    } else {
        (
            Pos2::new(strip.left(), offset),
            Pos2::new(strip.right(), offset),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizing() -> TabSizing {
        TabSizing {
            min_width: 40.0,
            max_width: 250.0,
            tab_height: 28.0,
        }
    }

    fn strip(width: f32, height: f32) -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(width, height))
    }

    /// Three 50-wide tabs at [0,50), [50,100), [100,150).
    fn three_tabs() -> Vec<Rect> {
        (0..3)
            .map(|i| {
                Rect::from_min_size(Pos2::new(i as f32 * 50.0, 0.0), Vec2::new(50.0, 28.0))
            })
            .collect()
    }

    #[test]
    fn drop_index_before_and_past_midpoint() {
        let rects = three_tabs();
        // Tab 2 spans 100..150, midpoint 125.
        assert_eq!(
            resolve_drop_index(Pos2::new(120.0, 14.0), &rects, DockEdge::Top),
            2
        );
        assert_eq!(
            resolve_drop_index(Pos2::new(130.0, 14.0), &rects, DockEdge::Top),
            3
        );
    }

    #[test]
    fn drop_index_empty_sequence_is_zero() {
        assert_eq!(
            resolve_drop_index(Pos2::new(500.0, 14.0), &[], DockEdge::Top),
            0
        );
    }

    #[test]
    fn drop_index_outside_all_tabs() {
        let rects = three_tabs();
        // Before the first tab's leading edge.
        assert_eq!(
            resolve_drop_index(Pos2::new(-20.0, 14.0), &rects, DockEdge::Top),
            0
        );
        // Past the last tab's trailing edge.
        assert_eq!(
            resolve_drop_index(Pos2::new(400.0, 14.0), &rects, DockEdge::Top),
            3
        );
    }

    #[test]
    fn drop_index_vertical_strip_compares_y() {
        let rects: Vec<Rect> = (0..2)
            .map(|i| {
                Rect::from_min_size(Pos2::new(0.0, i as f32 * 30.0), Vec2::new(120.0, 30.0))
            })
            .collect();
        // Tab 1 spans y 30..60, midpoint 45.
        assert_eq!(
            resolve_drop_index(Pos2::new(60.0, 40.0), &rects, DockEdge::Left),
            1
        );
        assert_eq!(
            resolve_drop_index(Pos2::new(60.0, 50.0), &rects, DockEdge::Left),
            2
        );
    }

    #[test]
    fn horizontal_layout_divides_width_evenly() {
        let rects = tab_rects(strip(500.0, 28.0), &[false, false], DockEdge::Top, &sizing());
        assert_eq!(rects.len(), 2);
        // 500 / 2 = 250 each, exactly the max width.
        assert_eq!(rects[0].width(), 250.0);
        assert_eq!(rects[1].left(), 250.0);
    }

    #[test]
    fn pinned_tabs_keep_minimum_width() {
        let rects = tab_rects(
            strip(520.0, 28.0),
            &[true, false, false],
            DockEdge::Top,
            &sizing(),
        );
        assert_eq!(rects[0].width(), 40.0);
        // Remaining 480 split across 2 unpinned tabs = 240 each.
        assert_eq!(rects[1].width(), 240.0);
        assert_eq!(rects[2].width(), 240.0);
    }

    #[test]
    fn crowded_strip_clamps_to_minimum_width() {
        let flags = vec![false; 20];
        let rects = tab_rects(strip(300.0, 28.0), &flags, DockEdge::Top, &sizing());
        // 300 / 20 = 15, below min_width; every tab is clamped up to 40.
        assert!(rects.iter().all(|r| r.width() == 40.0));
    }

    #[test]
    fn vertical_layout_stacks_fixed_heights() {
        let rects = tab_rects(
            strip(120.0, 600.0),
            &[false, false, false],
            DockEdge::Left,
            &sizing(),
        );
        assert_eq!(rects[1].top(), 28.0);
        assert_eq!(rects[2].top(), 56.0);
        assert!(rects.iter().all(|r| r.width() == 120.0));
    }

    #[test]
    fn indicator_sits_on_leading_edge_or_append_edge() {
        let rects = three_tabs();
        let s = strip(300.0, 28.0);

        let (a, b) = drop_indicator_line(1, &rects, s, DockEdge::Top);
        assert_eq!(a.x, 50.0);
        assert_eq!((a.y, b.y), (0.0, 28.0));

        let (a, _) = drop_indicator_line(3, &rects, s, DockEdge::Top);
        assert_eq!(a.x, 150.0);

        let (a, _) = drop_indicator_line(0, &[], s, DockEdge::Top);
        assert_eq!(a.x, 0.0);
    }
}
