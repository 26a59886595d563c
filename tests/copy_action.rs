//! Copy-to-Clipboard Action Integration Tests
//!
//! Scenario tests with fake clipboard sinks and Tokio virtual time for the
//! confirmation lifecycle.

mod support;

use std::sync::Arc;
use std::time::Duration;

use color_cafe::{CopyState, ListView};
use support::{FailingClipboard, RecordingClipboard};

async fn advance(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    tokio::task::yield_now().await;
}

fn item_content(browser: &color_cafe::ColorNameBrowser, name: &str) -> String {
    let view = ListView::build(browser);
    view.items
        .iter()
        .find(|item| item.name == name)
        .map(|item| item.content.clone())
        .expect("item not rendered")
}

// =============================================================================
// Success path
// =============================================================================

#[tokio::test(start_paused = true)]
async fn copy_writes_the_literal_name_and_reverts() {
    let clipboard = RecordingClipboard::new();
    let (mut browser, mut rx) = support::browser_with(clipboard.clone());

    browser.activate_item("tomato");
    support::drain(&mut browser, &mut rx).await;

    // The clipboard holds the bare name, never the decorated label.
    assert_eq!(clipboard.writes(), vec!["tomato".to_string()]);
    assert_eq!(browser.copy_state("tomato"), Some(CopyState::Copied));
    assert_eq!(item_content(&browser, "tomato"), "tomato copied!");

    advance(1999).await;
    support::drain(&mut browser, &mut rx).await;
    assert_eq!(browser.copy_state("tomato"), Some(CopyState::Copied));

    advance(1).await;
    support::drain(&mut browser, &mut rx).await;
    assert_eq!(browser.copy_state("tomato"), None);
    assert_eq!(item_content(&browser, "tomato"), "tomato");
}

#[tokio::test(start_paused = true)]
async fn confirmations_on_different_items_are_independent() {
    let clipboard = RecordingClipboard::new();
    let (mut browser, mut rx) = support::browser_with(clipboard.clone());

    browser.activate_item("tomato");
    support::drain(&mut browser, &mut rx).await;

    advance(1000).await;
    browser.activate_item("red");
    support::drain(&mut browser, &mut rx).await;

    assert_eq!(browser.copy_state("tomato"), Some(CopyState::Copied));
    assert_eq!(browser.copy_state("red"), Some(CopyState::Copied));

    advance(1000).await;
    support::drain(&mut browser, &mut rx).await;
    assert_eq!(browser.copy_state("tomato"), None);
    assert_eq!(browser.copy_state("red"), Some(CopyState::Copied));

    advance(1000).await;
    support::drain(&mut browser, &mut rx).await;
    assert_eq!(browser.copy_state("red"), None);

    assert_eq!(
        clipboard.writes(),
        vec!["tomato".to_string(), "red".to_string()]
    );
}

// =============================================================================
// Failure path
// =============================================================================

#[tokio::test(start_paused = true)]
async fn failed_write_shows_failure_state_and_still_reverts() {
    let (mut browser, mut rx) = support::browser_with(Arc::new(FailingClipboard));

    browser.activate_item("tomato");
    support::drain(&mut browser, &mut rx).await;

    assert_eq!(browser.copy_state("tomato"), Some(CopyState::Failed));
    assert_eq!(item_content(&browser, "tomato"), "tomato copy failed!");

    advance(2000).await;
    support::drain(&mut browser, &mut rx).await;
    assert_eq!(browser.copy_state("tomato"), None);
    assert_eq!(item_content(&browser, "tomato"), "tomato");
}

#[tokio::test(start_paused = true)]
async fn unknown_names_are_ignored() {
    let clipboard = RecordingClipboard::new();
    let (mut browser, mut rx) = support::browser_with(clipboard.clone());

    browser.activate_item("notacolor");
    browser.activate_item("Tomato");

    assert_eq!(support::drain(&mut browser, &mut rx).await, 0);
    assert!(clipboard.writes().is_empty());
}

// =============================================================================
// Revert timer supersession
// =============================================================================

/// A revert deadline from a superseded activation must not clear the newer
/// confirmation, even if its message was already in flight.
#[tokio::test(start_paused = true)]
async fn stale_revert_deadline_is_ignored() {
    let clipboard = RecordingClipboard::new();
    let (mut browser, mut rx) = support::browser_with(clipboard.clone());

    browser.activate_item("tomato");
    support::drain(&mut browser, &mut rx).await;

    // Re-activate just before the first deadline, without processing any
    // messages in between: the old deadline fires while the new completion
    // is still queued ahead of it.
    advance(1999).await;
    browser.activate_item("tomato");
    tokio::task::yield_now().await;
    advance(1).await;

    support::drain(&mut browser, &mut rx).await;
    assert_eq!(
        browser.copy_state("tomato"),
        Some(CopyState::Copied),
        "second confirmation must survive the first deadline"
    );

    advance(1999).await;
    support::drain(&mut browser, &mut rx).await;
    assert_eq!(browser.copy_state("tomato"), Some(CopyState::Copied));

    advance(1).await;
    support::drain(&mut browser, &mut rx).await;
    assert_eq!(browser.copy_state("tomato"), None);

    assert_eq!(clipboard.writes().len(), 2);
}

/// Re-activating after the confirmation is applied retires the old timer
/// outright: the handle is dropped with the replaced confirmation.
#[tokio::test(start_paused = true)]
async fn reactivation_restarts_the_confirmation_window() {
    let clipboard = RecordingClipboard::new();
    let (mut browser, mut rx) = support::browser_with(clipboard.clone());

    browser.activate_item("tomato");
    support::drain(&mut browser, &mut rx).await;

    advance(1500).await;
    browser.activate_item("tomato");
    support::drain(&mut browser, &mut rx).await;

    // 2000 ms after the first copy the confirmation is still up, because the
    // second activation replaced it and restarted the window.
    advance(500).await;
    support::drain(&mut browser, &mut rx).await;
    assert_eq!(browser.copy_state("tomato"), Some(CopyState::Copied));

    advance(1500).await;
    support::drain(&mut browser, &mut rx).await;
    assert_eq!(browser.copy_state("tomato"), None);
}
