// TabDeck - tests/e2e_console.rs
//
// End-to-end tests for the console pipeline: producer sink -> feed poll ->
// log append -> filter evaluation -> display ordering, all through the
// public library surface with no mocks.

use chrono::{Duration, TimeZone, Utc};
use tabdeck::app::console::{message_channel, MessageLog};
use tabdeck::core::filter::{evaluate, visible_rows, FilterState, MessageScope};
use tabdeck::core::model::{Message, MessageCategory, MessageLevel, TabId};

// =============================================================================
// Helpers
// =============================================================================

fn message(
    category: MessageCategory,
    tab: TabId,
    secs: i64,
    source: &str,
    note: Option<&str>,
) -> Message {
    Message {
        id: 0,
        level: MessageLevel::Info,
        category,
        timestamp: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap() + Duration::seconds(secs),
        source: source.to_string(),
        line: None,
        tab,
        note: note.map(String::from),
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Messages pushed through the sink arrive via the feed and land in the log
/// with sequential ids.
#[test]
fn e2e_sink_to_log_pipeline() {
    let (sink, feed) = message_channel();
    let mut log = MessageLog::default();

    sink.push(message(MessageCategory::Network, TabId(1), 0, "a", None));
    sink.push(message(MessageCategory::Css, TabId(2), 1, "b", None));

    for msg in feed.poll() {
        log.push(msg);
    }

    assert_eq!(log.len(), 2);
    assert_eq!(log.messages()[0].id, 0);
    assert_eq!(log.messages()[1].id, 1);
    assert_eq!(log.messages()[1].source, "b");
}

/// Producers on other threads deliver through the same feed.
#[test]
fn e2e_cross_thread_producer() {
    let (sink, feed) = message_channel();

    let handle = std::thread::spawn(move || {
        for i in 0..10 {
            sink.push(message(
                MessageCategory::Other,
                TabId::NONE,
                i,
                &format!("worker-{i}"),
                None,
            ));
        }
    });
    handle.join().unwrap();

    assert_eq!(feed.poll().len(), 10);
}

// =============================================================================
// Filter semantics over a realistic history
// =============================================================================

fn seeded_log() -> MessageLog {
    let mut log = MessageLog::default();
    // Two tabs (7 and 9) plus background sources.
    log.push(message(
        MessageCategory::Network,
        TabId(7),
        0,
        "https://a.test/page",
        None,
    ));
    log.push(message(
        MessageCategory::Network,
        TabId(9),
        1,
        "https://b.test/page",
        None,
    ));
    log.push(message(
        MessageCategory::Security,
        TabId(7),
        2,
        "https://a.test/login",
        Some("Mixed content on a secure page"),
    ));
    log.push(message(
        MessageCategory::Other,
        TabId::NONE,
        3,
        "update-checker",
        None,
    ));
    log
}

#[test]
fn e2e_current_tab_scope_with_category_subset() {
    let log = seeded_log();
    let filter = FilterState {
        categories: [MessageCategory::Network].into_iter().collect(),
        scope: MessageScope::CurrentTabOnly,
        ..Default::default()
    };

    let rows = visible_rows(log.messages(), &filter, TabId(7));
    assert_eq!(rows.len(), 1);
    assert_eq!(log.messages()[rows[0]].tab, TabId(7));

    // Same filter, different active tab: the tab-9 message instead.
    let rows = visible_rows(log.messages(), &filter, TabId(9));
    assert_eq!(rows.len(), 1);
    assert_eq!(log.messages()[rows[0]].tab, TabId(9));
}

#[test]
fn e2e_other_sources_toggle_controls_background_messages() {
    let log = seeded_log();
    let mut filter = FilterState::default();

    let with_others = visible_rows(log.messages(), &filter, TabId(7)).len();
    filter.other_sources = false;
    let without_others = visible_rows(log.messages(), &filter, TabId(7)).len();

    assert_eq!(with_others, 4);
    assert_eq!(without_others, 3);
}

#[test]
fn e2e_text_filter_reaches_notes() {
    let log = seeded_log();
    let filter = FilterState {
        text: "mixed content".to_string(),
        ..Default::default()
    };
    let rows = visible_rows(log.messages(), &filter, TabId(7));
    assert_eq!(rows.len(), 1);
    assert_eq!(log.messages()[rows[0]].category, MessageCategory::Security);
}

#[test]
fn e2e_display_order_newest_first_with_stable_ties() {
    let mut log = MessageLog::default();
    log.push(message(MessageCategory::Other, TabId::NONE, 10, "old", None));
    log.push(message(MessageCategory::Other, TabId::NONE, 30, "new", None));
    log.push(message(MessageCategory::Other, TabId::NONE, 10, "old-2", None));

    let rows = visible_rows(log.messages(), &FilterState::default(), TabId::NONE);
    let sources: Vec<&str> = rows
        .iter()
        .map(|&i| log.messages()[i].source.as_str())
        .collect();
    assert_eq!(sources, vec!["new", "old", "old-2"]);
}

/// The evaluation is a pure function of its inputs: the same (message,
/// filter, active) triple always yields the same answer.
#[test]
fn e2e_evaluate_is_deterministic() {
    let msg = message(MessageCategory::Network, TabId(7), 0, "https://a.test", None);
    let filter = FilterState {
        scope: MessageScope::CurrentTabOnly,
        ..Default::default()
    };
    let first = evaluate(&msg, &filter, TabId(7));
    for _ in 0..100 {
        assert_eq!(evaluate(&msg, &filter, TabId(7)), first);
    }
    assert!(first);
    assert!(!evaluate(&msg, &filter, TabId(9)));
}

// =============================================================================
// Bounds and clearing
// =============================================================================

#[test]
fn e2e_log_cap_drops_overflow_until_cleared() {
    let mut log = MessageLog::new(100);
    for i in 0..150 {
        log.push(message(
            MessageCategory::Other,
            TabId::NONE,
            i,
            &format!("m{i}"),
            None,
        ));
    }
    assert_eq!(log.len(), 100);
    assert_eq!(log.dropped(), 50);

    log.clear();
    assert!(log.is_empty());
    // Ingestion resumes after the user clears.
    log.push(message(MessageCategory::Other, TabId::NONE, 0, "fresh", None));
    assert_eq!(log.len(), 1);
}
