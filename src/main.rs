// TabDeck - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading and logging initialisation
// 3. Session restore (or demo seeding)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use tabdeck::app;
pub use tabdeck::core;
pub use tabdeck::platform;
pub use tabdeck::ui;
pub use tabdeck::util;

use clap::Parser;

/// TabDeck - browser-shell tab strip and diagnostics console.
///
/// Runs the widgets standalone with a placeholder page area; pass --demo
/// to seed tabs and a console message history.
#[derive(Parser, Debug)]
#[command(name = "TabDeck", version, about)]
struct Cli {
    /// Edge the tab strip docks to: top, bottom, left, or right.
    #[arg(short, long)]
    edge: Option<String>,

    /// Seed demo tabs and console messages.
    #[arg(long)]
    demo: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is loaded before logging init so [logging] level can take
    // part in the priority chain; warnings are replayed afterwards.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    for warning in &config_warnings {
        tracing::warn!("{warning}");
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "TabDeck starting"
    );

    let mut options = app::settings::UiOptions {
        previews_enabled: config.previews,
        preview_delay_ms: config.preview_delay_ms,
        thumbnails_enabled: config.thumbnails,
        close_button_enabled: config.close_buttons,
        wheel_switches_tabs: config.wheel_switching,
        edge: config.dock_edge,
        min_tab_width: config.min_tab_width,
        max_tab_width: config.max_tab_width,
    };
    if let Some(ref edge) = cli.edge {
        match tabdeck::core::model::DockEdge::parse(edge) {
            Some(parsed) => options.edge = parsed,
            None => {
                tracing::warn!(value = %edge, "Unrecognised --edge value; keeping configured edge")
            }
        }
    }

    let settings = app::settings::SettingsStore::new(options);
    let log = app::console::MessageLog::new(config.max_messages);
    let mut state = app::state::AppState::new(settings, log);

    let session_file = app::session::session_path(&platform_paths.data_dir);
    let (sink, feed) = app::console::message_channel();

    if cli.demo {
        seed_demo(&mut state, &sink);
        state.console_visible = true;
        state.status_message = "Demo session seeded.".to_string();
    } else if let Some(session) = app::session::load(&session_file) {
        state.strip = session.restore();
        if cli.edge.is_none() {
            state.settings.set_edge(session.edge);
        }
        tracing::info!(tabs = state.strip.len(), "Session restored");
    }
    if state.strip.is_empty() {
        state.strip.add_tab("New Tab");
    }

    let dark_mode = config.dark_mode;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            Ok(Box::new(gui::TabDeckApp::new(state, feed, session_file)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch TabDeck GUI: {e}");
        std::process::exit(1);
    }
}

/// Seed a handful of tabs and a varied message history so every console
/// filter and strip gesture can be exercised without an embedding host.
fn seed_demo(state: &mut app::state::AppState, sink: &app::console::MessageSink) {
    use chrono::{Duration, Utc};
    use tabdeck::core::model::{
        Message, MessageCategory, MessageLevel, TabId,
    };

    state.strip.add_tab("Start Page");
    let docs = state.strip.add_tab("Rust Documentation");
    let news = state.strip.add_tab("Daily News");
    let mail = state.strip.add_tab("Webmail");
    state.strip.set_pinned(0, true);
    state.strip.activate(1);

    let now = Utc::now();
    let push = |level: MessageLevel,
                category: MessageCategory,
                secs_ago: i64,
                source: &str,
                line: Option<u32>,
                tab: TabId,
                note: Option<&str>| {
        sink.push(Message {
            id: 0,
            level,
            category,
            timestamp: now - Duration::seconds(secs_ago),
            source: source.to_string(),
            line,
            tab,
            note: note.map(String::from),
        });
    };

    push(
        MessageLevel::Error,
        MessageCategory::Network,
        12,
        "https://news.example/feed.json",
        None,
        news,
        Some("Server returned HTTP 504 Gateway Timeout"),
    );
    push(
        MessageLevel::Warning,
        MessageCategory::Security,
        47,
        "https://mail.example/login",
        None,
        mail,
        Some("Certificate chain contains an expired intermediate"),
    );
    push(
        MessageLevel::Error,
        MessageCategory::JavaScript,
        63,
        "https://docs.example/search.js",
        Some(214),
        docs,
        Some("Uncaught TypeError: results is undefined"),
    );
    push(
        MessageLevel::Warning,
        MessageCategory::Css,
        90,
        "https://docs.example/style.css",
        Some(12),
        docs,
        Some("Unknown property 'text-wrap-mode'"),
    );
    push(
        MessageLevel::Info,
        MessageCategory::Network,
        120,
        "https://docs.example/index.html",
        None,
        docs,
        None,
    );
    push(
        MessageLevel::Info,
        MessageCategory::Other,
        150,
        "session-manager",
        None,
        TabId::NONE,
        Some("Previous session restored from disk"),
    );
    push(
        MessageLevel::Warning,
        MessageCategory::Other,
        200,
        "spell-checker",
        None,
        TabId::NONE,
        None,
    );
    push(
        MessageLevel::Error,
        MessageCategory::Network,
        260,
        "https://ads.example/beacon.gif",
        None,
        news,
        Some("Request blocked by content filter"),
    );
}
