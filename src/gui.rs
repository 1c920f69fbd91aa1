// TabDeck - gui.rs
//
// Top-level eframe::App implementation.
// Wires the strip, console, and preview panels together, drains the
// message feed and the settings notification channel, and persists the
// session on exit.

use crate::app::console::MessageFeed;
use crate::app::session::{self, SessionData};
use crate::app::settings::SettingChange;
use crate::app::state::AppState;
use crate::core::model::DockEdge;
use crate::core::preview::PreviewController;
use crate::ui;
use crate::util::constants::{
    DEFAULT_CONSOLE_HEIGHT, FEED_POLL_INTERVAL_MS, VERTICAL_STRIP_WIDTH,
};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

/// The TabDeck application.
pub struct TabDeckApp {
    pub state: AppState,
    feed: MessageFeed,
    settings_rx: mpsc::Receiver<SettingChange>,
    preview: PreviewController,
    session_file: PathBuf,
}

impl TabDeckApp {
    /// Create a new application instance around prepared state.
    pub fn new(mut state: AppState, feed: MessageFeed, session_file: PathBuf) -> Self {
        let settings_rx = state.settings.subscribe();
        let preview = PreviewController::new(state.settings.options().preview_delay_ms);
        Self {
            state,
            feed,
            settings_rx,
            preview,
            session_file,
        }
    }
}

impl eframe::App for TabDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // A deactivated window hides the preview immediately.
        let focused = ctx.input(|i| i.viewport().focused.unwrap_or(true));
        if !focused {
            self.preview.cancel();
        }

        // Drain the message feed.
        let incoming = self.feed.poll();
        let had_messages = !incoming.is_empty();
        for message in incoming {
            self.state.push_message(message);
        }
        if had_messages {
            ctx.request_repaint();
        }

        // Drain the settings notification channel.
        while let Ok(change) = self.settings_rx.try_recv() {
            match change {
                SettingChange::PreviewDelayMs(ms) => self.preview.set_delay_ms(ms),
                SettingChange::PreviewsEnabled(false) => self.preview.cancel(),
                // Layout-affecting options are read from the snapshot each
                // frame; nothing to do beyond the repaint already underway.
                _ => {}
            }
        }

        // Status bar (outermost bottom panel).
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.log.len();
                    let visible = self.state.visible_message_count();
                    let label = format!("Console ({visible}/{total})");
                    if ui
                        .selectable_label(self.state.console_visible, label)
                        .clicked()
                    {
                        self.state.console_visible = !self.state.console_visible;
                    }
                    ui.separator();
                    ui.label(format!("{} tab(s)", self.state.strip.len()));
                });
            });
        });

        // Tab strip on the configured edge.
        let edge = self.state.settings.options().edge;
        let strip_extent = self.state.settings.options().strip_height() + 4.0;
        let tab_rects = match edge {
            DockEdge::Top => {
                egui::TopBottomPanel::top("tab_strip")
                    .exact_height(strip_extent)
                    .show(ctx, |ui| {
                        ui::panels::tab_strip::render(ui, &mut self.state, &mut self.preview)
                    })
                    .inner
            }
            DockEdge::Bottom => {
                egui::TopBottomPanel::bottom("tab_strip")
                    .exact_height(strip_extent)
                    .show(ctx, |ui| {
                        ui::panels::tab_strip::render(ui, &mut self.state, &mut self.preview)
                    })
                    .inner
            }
            DockEdge::Left => {
                egui::SidePanel::left("tab_strip")
                    .exact_width(VERTICAL_STRIP_WIDTH)
                    .resizable(false)
                    .show(ctx, |ui| {
                        ui::panels::tab_strip::render(ui, &mut self.state, &mut self.preview)
                    })
                    .inner
            }
            DockEdge::Right => {
                egui::SidePanel::right("tab_strip")
                    .exact_width(VERTICAL_STRIP_WIDTH)
                    .resizable(false)
                    .show(ctx, |ui| {
                        ui::panels::tab_strip::render(ui, &mut self.state, &mut self.preview)
                    })
                    .inner
            }
        };

        // Console panel.
        if self.state.console_visible {
            egui::TopBottomPanel::bottom("console")
                .resizable(true)
                .default_height(DEFAULT_CONSOLE_HEIGHT)
                .show(ctx, |ui| {
                    ui::panels::console::render(ui, &mut self.state);
                });
        }

        // Central placeholder page for the active tab.
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.strip.active_index() {
                Some(index) => {
                    let tab = &self.state.strip.tabs()[index];
                    ui.vertical_centered(|ui| {
                        ui.add_space(ui.available_height() * 0.35);
                        ui.heading(&tab.title);
                        ui.label(
                            egui::RichText::new("Content area \u{2014} no page engine attached.")
                                .weak(),
                        );
                    });
                }
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label("No open tabs. Use the + button to open one.");
                    });
                }
            }
        });

        // Preview popup: advance the delay timer, then draw.
        let now = ctx.input(|i| i.time);
        self.preview.poll(now);
        ui::panels::preview::render(ctx, &mut self.state, &mut self.preview, &tab_rects);
        if self.preview.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(30));
        }

        // Keep polling the feed while idle.
        ctx.request_repaint_after(Duration::from_millis(FEED_POLL_INTERVAL_MS));
    }

    /// Save the session so the next launch can restore the open tabs.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let data = SessionData::capture(&self.state.strip, self.state.settings.options().edge);
        if let Err(e) = session::save(&data, &self.session_file) {
            tracing::warn!(error = %e, "Failed to save session");
        }
    }
}
