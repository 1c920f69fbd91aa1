// TabDeck - ui/panels/console.rs
//
// Diagnostics console panel: filter controls plus a virtual-scrolled
// message list.
//
// Uses egui's `ScrollArea::show_rows`, which renders only the rows visible
// in the viewport, so cost stays flat regardless of log size. Row clicks
// and context-menu actions are collected during the row loop and applied
// afterwards so the mutable borrow of state never overlaps the immutable
// borrow of the message slice.

use crate::app::state::{AppState, ConsoleRow};
use crate::core::filter::MessageScope;
use crate::core::model::{Message, MessageCategory};
use crate::ui::theme;
use crate::util::constants::CONSOLE_ROW_HEIGHT;
use egui::text::{LayoutJob, TextFormat};

/// The console line for one message: "[time] Category - source:line".
/// Also used verbatim for clipboard copy.
pub fn message_line(message: &Message) -> String {
    let mut line = format!(
        "[{}] {}",
        message.timestamp.format("%Y-%m-%d %H:%M:%S"),
        message.category
    );
    if !message.source.is_empty() {
        line.push_str(&format!(" - {}", message.source_location()));
    }
    line
}

/// Deferred row actions, applied after the scroll area releases the log.
enum RowAction {
    Toggle(u64),
    Copy(String),
    ExpandAll,
    CollapseAll,
}

/// Render the console panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    render_filter_controls(ui, state);
    ui.separator();
    render_rows(ui, state);
}

fn render_filter_controls(ui: &mut egui::Ui, state: &mut AppState) {
    let mut changed = false;

    ui.horizontal(|ui| {
        // Free-text filter.
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.filter.text)
                .hint_text("Filter messages\u{2026}")
                .desired_width(160.0),
        );
        changed |= response.changed();

        ui.separator();

        // Category toggles.
        for category in MessageCategory::all() {
            let mut enabled = state.filter.categories.contains(category);
            if ui.toggle_value(&mut enabled, category.label()).changed() {
                state.filter.set_category(*category, enabled);
                changed = true;
            }
        }

        ui.separator();

        // Scope menu: exclusive All Tabs / Current Tab Only, plus the
        // independent Other Sources toggle.
        ui.menu_button("Scope", |ui| {
            changed |= ui
                .radio_value(&mut state.filter.scope, MessageScope::AllTabs, "All Tabs")
                .changed();
            changed |= ui
                .radio_value(
                    &mut state.filter.scope,
                    MessageScope::CurrentTabOnly,
                    "Current Tab Only",
                )
                .changed();
            ui.separator();
            changed |= ui
                .checkbox(&mut state.filter.other_sources, "Other Sources")
                .changed();
        });

        ui.separator();

        if ui.button("Clear").clicked() {
            state.clear_console();
        }

        if state.log.dropped() > 0 {
            ui.label(
                egui::RichText::new(format!("{} dropped", state.log.dropped()))
                    .small()
                    .color(theme::level_colour(&crate::core::model::MessageLevel::Warning)),
            );
        }
    });

    if changed {
        state.mark_console_dirty();
    }
}

fn render_rows(ui: &mut egui::Ui, state: &mut AppState) {
    let rows: Vec<ConsoleRow> = state.console_rows().to_vec();

    if rows.is_empty() {
        ui.centered_and_justified(|ui| {
            if state.log.is_empty() {
                ui.label("No messages.");
            } else {
                ui.label("No messages match the current filter.");
            }
        });
        return;
    }

    let mut action: Option<RowAction> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show_rows(ui, CONSOLE_ROW_HEIGHT, rows.len(), |ui, range| {
            for row_index in range {
                match rows[row_index] {
                    ConsoleRow::Message(idx) => {
                        let Some(message) = state.log.messages().get(idx) else {
                            continue;
                        };
                        render_message_row(ui, message, &state.expanded, &mut action);
                    }
                    ConsoleRow::Note(idx) => {
                        let Some(message) = state.log.messages().get(idx) else {
                            continue;
                        };
                        if let Some(ref note) = message.note {
                            ui.horizontal(|ui| {
                                ui.add_space(28.0);
                                ui.label(egui::RichText::new(note).weak().monospace());
                            });
                        }
                    }
                }
            }
        });

    match action {
        Some(RowAction::Toggle(id)) => state.toggle_expanded(id),
        Some(RowAction::Copy(text)) => {
            ui.ctx().copy_text(text);
            state.status_message = "Copied message to clipboard.".to_string();
        }
        Some(RowAction::ExpandAll) => state.expand_all(),
        Some(RowAction::CollapseAll) => state.collapse_all(),
        None => {}
    }
}

fn render_message_row(
    ui: &mut egui::Ui,
    message: &Message,
    expanded: &std::collections::HashSet<u64>,
    action: &mut Option<RowAction>,
) {
    let level_colour = theme::level_colour(&message.level);
    let font = egui::FontId::monospace(12.0);

    // Severity background tint, drawn under the whole row.
    if let Some(bg) = theme::level_bg_colour(&message.level) {
        let rect = egui::Rect::from_min_size(
            ui.cursor().min,
            egui::vec2(ui.available_width(), CONSOLE_ROW_HEIGHT),
        );
        ui.painter().rect_filled(rect, 0.0, bg);
    }

    // Coloured level badge, then the message line in the normal text colour.
    let mut job = LayoutJob::default();
    job.append(
        &format!("[{:<4}] ", message.level.short_label()),
        0.0,
        TextFormat {
            font_id: font.clone(),
            color: level_colour,
            ..Default::default()
        },
    );
    let marker = match message.note {
        Some(_) if expanded.contains(&message.id) => "\u{25BE} ",
        Some(_) => "\u{25B8} ",
        None => "",
    };
    job.append(
        &format!("{marker}{}", message_line(message)),
        0.0,
        TextFormat {
            font_id: font,
            color: ui.visuals().text_color(),
            ..Default::default()
        },
    );

    let response = ui.selectable_label(false, job);

    // Clicking a message with a note toggles its detail row.
    if response.clicked() && message.note.is_some() {
        *action = Some(RowAction::Toggle(message.id));
    }

    response.context_menu(|ui| {
        if ui.button("Copy").clicked() {
            let mut text = message_line(message);
            if let Some(ref note) = message.note {
                text.push('\n');
                text.push_str(note);
            }
            *action = Some(RowAction::Copy(text));
            ui.close_menu();
        }
        ui.separator();
        if ui.button("Expand All").clicked() {
            *action = Some(RowAction::ExpandAll);
            ui.close_menu();
        }
        if ui.button("Collapse All").clicked() {
            *action = Some(RowAction::CollapseAll);
            ui.close_menu();
        }
    });
}
