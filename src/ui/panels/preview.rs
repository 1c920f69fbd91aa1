// TabDeck - ui/panels/preview.rs
//
// Floating tab preview popup: title plus a thumbnail placeholder when
// thumbnails are enabled. Anchoring and clamping come from core::preview;
// this module only draws at the computed position.

use crate::app::state::AppState;
use crate::core::preview::{self, PreviewController};
use crate::ui::theme;
use crate::util::constants::{PREVIEW_THUMBNAIL_HEIGHT, PREVIEW_TITLE_HEIGHT, PREVIEW_WIDTH};
use egui::{Rect, Vec2};

/// Render the preview popup for the tab the controller reports, if any.
/// `tab_rects` are the strip rectangles from the current frame.
pub fn render(
    ctx: &egui::Context,
    state: &mut AppState,
    preview: &mut PreviewController,
    tab_rects: &[Rect],
) {
    let Some(index) = preview.shown() else {
        return;
    };
    // The strip may have changed under a stale hover; drop the popup.
    let (Some(tab), Some(&tab_rect)) = (state.strip.tabs().get(index), tab_rects.get(index))
    else {
        preview.cancel();
        return;
    };

    let options = state.settings.options();
    let thumbnails = options.thumbnails_enabled;
    let edge = options.edge;

    let size = Vec2::new(
        PREVIEW_WIDTH,
        PREVIEW_TITLE_HEIGHT + if thumbnails { PREVIEW_THUMBNAIL_HEIGHT } else { 0.0 },
    );
    let position = preview::preview_position(tab_rect, size, ctx.screen_rect(), edge);

    egui::Area::new(egui::Id::new("tab_preview"))
        .order(egui::Order::Tooltip)
        .fixed_pos(position)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(size.x - 16.0);
                ui.label(egui::RichText::new(&tab.title).strong());
                if thumbnails {
                    let (rect, _) = ui.allocate_exact_size(
                        Vec2::new(ui.available_width(), PREVIEW_THUMBNAIL_HEIGHT - 16.0),
                        egui::Sense::hover(),
                    );
                    ui.painter()
                        .rect_filled(rect, 2.0, theme::THUMBNAIL_PLACEHOLDER);
                }
            });
        });
}
