// TabDeck - core/preview.rs
//
// Tab preview popup: placement arithmetic and the show/hide state machine.
//
// Placement is a pure function; the controller takes the current time as an
// explicit argument so the delay behaviour is deterministic under test.

use crate::core::model::DockEdge;
use egui::{Pos2, Rect, Vec2};

/// Top-left position for a preview popup anchored to a hovered tab.
///
/// The popup opens adjacent to the tab on the side opposite the dock edge,
/// centred on the tab's midpoint along the strip's primary axis. It is then
/// clamped so neither edge leaves `screen` — shifted inward, never resized.
pub fn preview_position(
    tab_rect: Rect,
    preview_size: Vec2,
    screen: Rect,
    edge: DockEdge,
) -> Pos2 {
    let mut position = match edge {
        DockEdge::Top => Pos2::new(
            tab_rect.center().x - preview_size.x / 2.0,
            tab_rect.bottom(),
        ),
        DockEdge::Bottom => Pos2::new(
            tab_rect.center().x - preview_size.x / 2.0,
            tab_rect.top() - preview_size.y,
        ),
        DockEdge::Left => Pos2::new(
            tab_rect.right(),
            tab_rect.center().y - preview_size.y / 2.0,
        ),
        DockEdge::Right => Pos2::new(
            tab_rect.left() - preview_size.x,
            tab_rect.center().y - preview_size.y / 2.0,
        ),
    };

    // Near-edge clamp first, then far-edge; a popup larger than the screen
    // ends up flush with the near edge.
    if position.x + preview_size.x > screen.right() {
        position.x = screen.right() - preview_size.x;
    }
    if position.y + preview_size.y > screen.bottom() {
        position.y = screen.bottom() - preview_size.y;
    }
    position.x = position.x.max(screen.left());
    position.y = position.y.max(screen.top());

    position
}

// =============================================================================
// Show/hide state machine
// =============================================================================

/// Visibility phase: Hidden, waiting out the hover delay, or Shown.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Hidden,
    Pending { target: usize, deadline: f64 },
    Shown { target: usize },
}

/// Drives preview visibility from hover reports and frame times.
///
/// Hidden -> (hover held past the delay) -> Shown -> (hover leave, drag
/// start, or window deactivate) -> Hidden. While shown, hovering a different
/// tab retargets the popup immediately; the delay applies only from the
/// hidden state. A pending show is abandoned when the hover target changes.
#[derive(Debug)]
pub struct PreviewController {
    phase: Phase,
    /// Hover-to-show delay in seconds.
    delay: f64,
}

impl PreviewController {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            phase: Phase::Hidden,
            delay: delay_ms as f64 / 1000.0,
        }
    }

    /// Update the hover-to-show delay (settings change).
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay = delay_ms as f64 / 1000.0;
    }

    /// Report the hovered tab index (None when the pointer is over no tab)
    /// at time `now` (seconds).
    pub fn hover(&mut self, target: Option<usize>, now: f64) {
        match (target, self.phase) {
            (None, _) => self.phase = Phase::Hidden,
            (Some(t), Phase::Shown { .. }) => self.phase = Phase::Shown { target: t },
            (Some(t), Phase::Pending { target, .. }) if target == t => {}
            (Some(t), _) => {
                self.phase = Phase::Pending {
                    target: t,
                    deadline: now + self.delay,
                }
            }
        }
    }

    /// Advance the delay timer; promotes Pending to Shown once the deadline
    /// passes. Returns the tab index to display, if any.
    pub fn poll(&mut self, now: f64) -> Option<usize> {
        if let Phase::Pending { target, deadline } = self.phase {
            if now >= deadline {
                self.phase = Phase::Shown { target };
            }
        }
        self.shown()
    }

    /// The tab index currently shown, if any.
    pub fn shown(&self) -> Option<usize> {
        match self.phase {
            Phase::Shown { target } => Some(target),
            _ => None,
        }
    }

    /// True while a delayed show is waiting; the caller should keep
    /// repainting so the deadline is observed promptly.
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    /// Hide immediately: pointer left the strip, a drag started, a context
    /// menu opened, or the window lost focus.
    pub fn cancel(&mut self) {
        self.phase = Phase::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_1024() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(1024.0, 768.0))
    }

    #[test]
    fn preview_clamps_to_screen_far_edge() {
        // Tab near the right edge: naive centring would overflow the screen.
        let tab = Rect::from_min_size(Pos2::new(950.0, 0.0), Vec2::new(50.0, 28.0));
        let pos = preview_position(tab, Vec2::new(200.0, 100.0), screen_1024(), DockEdge::Top);
        assert_eq!(pos.x, 1024.0 - 200.0);
        assert_eq!(pos.y, 28.0);
    }

    #[test]
    fn preview_clamps_to_screen_near_edge() {
        let tab = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(50.0, 28.0));
        let pos = preview_position(tab, Vec2::new(200.0, 100.0), screen_1024(), DockEdge::Top);
        // Centring on x=25 would go negative; shifted inward to the left edge.
        assert_eq!(pos.x, 0.0);
    }

    #[test]
    fn preview_opens_opposite_the_dock_edge() {
        let size = Vec2::new(200.0, 100.0);
        let screen = screen_1024();

        let top_tab = Rect::from_min_size(Pos2::new(400.0, 0.0), Vec2::new(50.0, 28.0));
        assert_eq!(
            preview_position(top_tab, size, screen, DockEdge::Top).y,
            28.0
        );

        let bottom_tab = Rect::from_min_size(Pos2::new(400.0, 740.0), Vec2::new(50.0, 28.0));
        assert_eq!(
            preview_position(bottom_tab, size, screen, DockEdge::Bottom).y,
            640.0
        );

        let left_tab = Rect::from_min_size(Pos2::new(0.0, 300.0), Vec2::new(120.0, 28.0));
        assert_eq!(
            preview_position(left_tab, size, screen, DockEdge::Left).x,
            120.0
        );

        let right_tab = Rect::from_min_size(Pos2::new(904.0, 300.0), Vec2::new(120.0, 28.0));
        assert_eq!(
            preview_position(right_tab, size, screen, DockEdge::Right).x,
            704.0
        );
    }

    #[test]
    fn controller_shows_after_delay() {
        let mut ctl = PreviewController::new(250);
        ctl.hover(Some(2), 10.0);
        assert_eq!(ctl.poll(10.1), None);
        assert!(ctl.is_pending());
        assert_eq!(ctl.poll(10.25), Some(2));
        assert_eq!(ctl.shown(), Some(2));
    }

    #[test]
    fn controller_retargets_immediately_while_shown() {
        let mut ctl = PreviewController::new(250);
        ctl.hover(Some(0), 0.0);
        ctl.poll(1.0);
        assert_eq!(ctl.shown(), Some(0));

        // No new delay when moving to a neighbouring tab.
        ctl.hover(Some(1), 1.0);
        assert_eq!(ctl.shown(), Some(1));
    }

    #[test]
    fn hover_change_restarts_a_pending_delay() {
        let mut ctl = PreviewController::new(250);
        ctl.hover(Some(0), 0.0);
        // Switch target before the deadline: deadline restarts for the new tab.
        ctl.hover(Some(1), 0.2);
        assert_eq!(ctl.poll(0.3), None);
        assert_eq!(ctl.poll(0.45), Some(1));
    }

    #[test]
    fn leave_and_cancel_hide_immediately() {
        let mut ctl = PreviewController::new(250);
        ctl.hover(Some(0), 0.0);
        ctl.poll(1.0);
        ctl.hover(None, 1.1);
        assert_eq!(ctl.shown(), None);

        ctl.hover(Some(0), 2.0);
        ctl.cancel(); // drag start / focus loss
        assert_eq!(ctl.poll(3.0), None);
    }

    #[test]
    fn zero_delay_shows_on_next_poll() {
        let mut ctl = PreviewController::new(0);
        ctl.hover(Some(4), 5.0);
        assert_eq!(ctl.poll(5.0), Some(4));
    }
}
