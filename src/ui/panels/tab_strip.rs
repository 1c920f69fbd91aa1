// TabDeck - ui/panels/tab_strip.rs
//
// The tab strip panel: paints tab handles, routes clicks and wheel
// gestures, drives drag-to-reorder and drag-out-to-detach, and reports
// hover to the preview controller.
//
// All mutations are collected as `StripAction`s during the paint loop and
// applied afterwards, so the tab slice stays immutably borrowed while
// responses are gathered.

use crate::app::state::{AppState, TabDrag};
use crate::core::layout::{self, TabSizing};
use crate::core::model::DockEdge;
use crate::core::preview::PreviewController;
use crate::ui::theme;
use crate::util::constants::{
    DEFAULT_TAB_HEIGHT, DETACH_DRAG_MARGIN, DROP_INDICATOR_WIDTH, NEW_TAB_BUTTON_WIDTH,
    TAB_CLOSE_BUTTON_MIN_WIDTH, TAB_CLOSE_BUTTON_SIZE,
};
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

enum StripAction {
    Activate(usize),
    Close(usize),
    CloseOthers(usize),
    Detach(usize),
    Clone(usize),
    SetPinned(usize, bool),
    NewTab,
    MoveTab { from: usize, drop_index: usize },
    SetThumbnails(bool),
    SetWheelSwitching(bool),
}

/// Render the strip and return the per-tab rectangles (the preview panel
/// anchors to them).
pub fn render(
    ui: &mut egui::Ui,
    state: &mut AppState,
    preview: &mut PreviewController,
) -> Vec<Rect> {
    let options = state.settings.options().clone();
    let edge = options.edge;
    let sizing = TabSizing {
        min_width: options.min_tab_width,
        max_width: options.max_tab_width,
        tab_height: DEFAULT_TAB_HEIGHT,
    };

    // The strip occupies the available rect minus the new-tab button at the
    // end of the primary axis.
    let full = ui.available_rect_before_wrap();
    let (strip_rect, button_rect) = if edge.is_horizontal() {
        (
            Rect::from_min_max(
                full.min,
                Pos2::new(full.max.x - NEW_TAB_BUTTON_WIDTH, full.max.y),
            ),
            Rect::from_min_max(
                Pos2::new(full.max.x - NEW_TAB_BUTTON_WIDTH, full.min.y),
                full.max,
            ),
        )
    } else {
        (
            Rect::from_min_max(
                full.min,
                Pos2::new(full.max.x, full.max.y - NEW_TAB_BUTTON_WIDTH),
            ),
            Rect::from_min_max(
                Pos2::new(full.min.x, full.max.y - NEW_TAB_BUTTON_WIDTH),
                full.max,
            ),
        )
    };

    let pinned_flags = state.strip.pinned_flags();
    let rects = layout::tab_rects(strip_rect, &pinned_flags, edge, &sizing);

    let tab_count = state.strip.len();
    let active_index = state.strip.active_index();
    let dragging_from = state.drag.map(|d| d.from);

    let mut actions: Vec<StripAction> = Vec::new();
    let mut hovered_tab: Option<usize> = None;
    let mut pointer_over_close = false;
    let mut context_menu_open = false;

    for (index, rect) in rects.iter().enumerate() {
        let tab = &state.strip.tabs()[index];
        let is_active = active_index == Some(index);
        let tab_id = ui.id().with(("tab", tab.id));

        let response = ui.interact(*rect, tab_id, Sense::click_and_drag());

        // Handle fill.
        let fill = if is_active {
            theme::TAB_ACTIVE_BG
        } else if response.hovered() {
            theme::TAB_HOVER_BG
        } else {
            theme::TAB_INACTIVE_BG
        };
        let fill = if dragging_from == Some(index) {
            fill.gamma_multiply(0.6)
        } else {
            fill
        };
        ui.painter().rect_filled(rect.shrink(1.0), 2.0, fill);

        // Close button region (or a lock glyph on pinned tabs).
        let control_rect = Rect::from_center_size(
            Pos2::new(
                rect.right() - TAB_CLOSE_BUTTON_SIZE / 2.0 - 4.0,
                rect.center().y,
            ),
            Vec2::splat(TAB_CLOSE_BUTTON_SIZE),
        );
        let show_close = options.close_button_enabled
            && !tab.pinned
            && (is_active || rect.width() >= TAB_CLOSE_BUTTON_MIN_WIDTH);

        // Title, clipped to the handle and leaving room for the control.
        let title_clip = Rect::from_min_max(
            Pos2::new(rect.left() + 6.0, rect.top()),
            Pos2::new(
                if show_close || tab.pinned {
                    control_rect.left() - 2.0
                } else {
                    rect.right() - 4.0
                },
                rect.bottom(),
            ),
        );
        let text_colour = if is_active {
            theme::TAB_TEXT
        } else {
            theme::TAB_TEXT_INACTIVE
        };
        ui.painter().with_clip_rect(title_clip).text(
            Pos2::new(title_clip.left(), rect.center().y),
            Align2::LEFT_CENTER,
            &tab.title,
            FontId::proportional(13.0),
            text_colour,
        );

        if tab.pinned {
            ui.painter().text(
                control_rect.center(),
                Align2::CENTER_CENTER,
                "\u{1F512}",
                FontId::proportional(11.0),
                text_colour,
            );
        } else if show_close {
            let close_response =
                ui.interact(control_rect, tab_id.with("close"), Sense::click());
            let close_colour = if close_response.hovered() {
                Color32::from_rgb(248, 113, 113)
            } else {
                text_colour
            };
            ui.painter().text(
                control_rect.center(),
                Align2::CENTER_CENTER,
                "\u{2716}",
                FontId::proportional(11.0),
                close_colour,
            );
            if close_response.hovered() {
                pointer_over_close = true;
            }
            if close_response.clicked() {
                actions.push(StripAction::Close(index));
            }
        }

        // Activation and middle-click close.
        if response.clicked() {
            actions.push(StripAction::Activate(index));
        }
        if response.middle_clicked() && !tab.pinned {
            actions.push(StripAction::Close(index));
        }

        // Drag start: pinned tabs never drag, and a lone tab has nowhere
        // to go within the strip.
        if response.drag_started() && !tab.pinned && tab_count > 1 {
            actions.push(StripAction::Activate(index));
            state.drag = Some(TabDrag {
                from: index,
                detaching: false,
            });
        }

        if response.hovered() {
            hovered_tab = Some(index);
        }

        let unpinned_others = state
            .strip
            .tabs()
            .iter()
            .enumerate()
            .filter(|(i, t)| *i != index && !t.pinned)
            .count();

        response.context_menu(|ui| {
            context_menu_open = true;
            if ui.button("New Tab").clicked() {
                actions.push(StripAction::NewTab);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Clone Tab").clicked() {
                actions.push(StripAction::Clone(index));
                ui.close_menu();
            }
            let pin_label = if tab.pinned { "Unpin Tab" } else { "Pin Tab" };
            if ui.button(pin_label).clicked() {
                actions.push(StripAction::SetPinned(index, !tab.pinned));
                ui.close_menu();
            }
            if ui
                .add_enabled(tab_count > 1, egui::Button::new("Detach Tab"))
                .clicked()
            {
                actions.push(StripAction::Detach(index));
                ui.close_menu();
            }
            ui.separator();
            if ui
                .add_enabled(!tab.pinned, egui::Button::new("Close Tab"))
                .clicked()
            {
                actions.push(StripAction::Close(index));
                ui.close_menu();
            }
            if ui
                .add_enabled(unpinned_others > 0, egui::Button::new("Close Other Tabs"))
                .clicked()
            {
                actions.push(StripAction::CloseOthers(index));
                ui.close_menu();
            }
            ui.separator();
            let mut thumbnails = options.thumbnails_enabled;
            if ui
                .checkbox(&mut thumbnails, "Show Thumbnails in Tabs")
                .changed()
            {
                actions.push(StripAction::SetThumbnails(thumbnails));
            }
            let mut wheel = options.wheel_switches_tabs;
            if ui
                .checkbox(&mut wheel, "Switch Tabs Using the Mouse Wheel")
                .changed()
            {
                actions.push(StripAction::SetWheelSwitching(wheel));
            }
        });
    }

    // New-tab button.
    if ui
        .put(
            button_rect.shrink(3.0),
            egui::Button::new(egui::RichText::new("+").size(14.0)),
        )
        .on_hover_text("New Tab")
        .clicked()
    {
        actions.push(StripAction::NewTab);
    }

    // Drag tracking: indicator while inside the strip, detach once the
    // pointer leaves it by more than the margin.
    if let Some(mut drag) = state.drag {
        let pointer = ui.input(|i| i.pointer.interact_pos());
        if let Some(pointer) = pointer {
            drag.detaching = !strip_rect.expand(DETACH_DRAG_MARGIN).contains(pointer);
            state.drag = Some(drag);

            if !drag.detaching {
                let drop_index = layout::resolve_drop_index(pointer, &rects, edge);
                let (a, b) = layout::drop_indicator_line(drop_index, &rects, strip_rect, edge);
                ui.painter().line_segment(
                    [a, b],
                    Stroke::new(DROP_INDICATOR_WIDTH, theme::DROP_INDICATOR),
                );
            }

            if ui.input(|i| i.pointer.any_released()) {
                state.drag = None;
                if drag.detaching {
                    actions.push(StripAction::Detach(drag.from));
                } else {
                    let drop_index = layout::resolve_drop_index(pointer, &rects, edge);
                    actions.push(StripAction::MoveTab {
                        from: drag.from,
                        drop_index,
                    });
                }
            }
        } else {
            state.drag = None;
        }
    }

    // Preview hover reporting. Suppressed while dragging, over a close
    // button, or while a context menu is open.
    let now = ui.input(|i| i.time);
    if !options.previews_enabled || state.drag.is_some() || context_menu_open {
        preview.cancel();
    } else if pointer_over_close {
        preview.hover(None, now);
    } else {
        preview.hover(hovered_tab, now);
    }

    // Wheel switching over the strip.
    if options.wheel_switches_tabs && ui.rect_contains_pointer(strip_rect) {
        let scroll = ui.input(|i| i.raw_scroll_delta);
        let delta = if scroll.y != 0.0 { scroll.y } else { scroll.x };
        if delta > 0.0 {
            state.strip.activate_adjacent(-1);
        } else if delta < 0.0 {
            state.strip.activate_adjacent(1);
        }
    }

    apply_actions(state, preview, actions);

    rects
}

fn apply_actions(state: &mut AppState, preview: &mut PreviewController, actions: Vec<StripAction>) {
    for action in actions {
        match action {
            StripAction::Activate(index) => state.strip.activate(index),
            StripAction::Close(index) => {
                if let Some(tab) = state.strip.close_tab(index) {
                    state.status_message = format!("Closed \"{}\".", tab.title);
                }
                preview.cancel();
            }
            StripAction::CloseOthers(index) => {
                let closed = state.strip.close_other_tabs(index);
                state.status_message = format!("Closed {closed} tab(s).");
                preview.cancel();
            }
            StripAction::Detach(index) => {
                // The demo shell has no second window to rehome into; the
                // tab is removed and reported. An embedding application
                // would take the returned Tab and move it elsewhere.
                if let Some(tab) = state.strip.detach_tab(index) {
                    state.status_message = format!("Detached \"{}\".", tab.title);
                }
                preview.cancel();
            }
            StripAction::Clone(index) => {
                state.strip.clone_tab(index);
            }
            StripAction::SetPinned(index, pinned) => {
                state.strip.set_pinned(index, pinned);
            }
            StripAction::NewTab => {
                state.strip.add_tab("New Tab");
            }
            StripAction::MoveTab { from, drop_index } => {
                state.strip.move_tab(from, drop_index);
            }
            StripAction::SetThumbnails(value) => {
                state.settings.set_thumbnails_enabled(value);
            }
            StripAction::SetWheelSwitching(value) => {
                state.settings.set_wheel_switches_tabs(value);
            }
        }
    }
}
