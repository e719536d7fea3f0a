use playbookapp::model::SearchEntry;
use playbookapp::search::{QueryMatcher, QueryState, SearchIndex, SearchWidget};
use std::time::Duration;
use tokio::time::{sleep, Instant};

const DEBOUNCE: Duration = Duration::from_millis(300);

fn widget() -> SearchWidget {
    SearchWidget::spawn(QueryMatcher::new(SearchIndex::canonical()), DEBOUNCE)
}

#[tokio::test(start_paused = true)]
async fn test_burst_is_matched_once_with_final_text() {
    let widget = widget();
    let mut rx = widget.subscribe();
    let start = Instant::now();

    widget.input("co").await;
    sleep(Duration::from_millis(100)).await;
    widget.input("cont").await;
    sleep(Duration::from_millis(100)).await;
    widget.input("content").await;

    let state = rx.wait_for(|s| s.is_open).await.unwrap().clone();
    assert!(start.elapsed() >= Duration::from_millis(500));
    assert_eq!(state.raw_query, "content");
    assert_eq!(state.matched_results.len(), 6);

    // No timer from the earlier keystrokes lands after the final match.
    sleep(Duration::from_secs(2)).await;
    assert_eq!(widget.shutdown().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_nothing_shown_before_quiet_period() {
    let widget = widget();
    widget.input("governance").await;
    sleep(Duration::from_millis(299)).await;

    let state = widget.state();
    assert_eq!(state.raw_query, "governance");
    assert!(state.matched_results.is_empty());
    assert!(!state.is_open);

    sleep(Duration::from_millis(2)).await;
    assert!(widget.state().is_open);

    widget.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_select_reports_path_and_resets() {
    let mut widget = widget();
    let mut rx = widget.subscribe();

    widget.input("governance").await;
    rx.wait_for(|s| s.is_open).await.unwrap();
    widget.select(0).await;

    assert_eq!(
        widget.next_selection().await.as_deref(),
        Some("/ai-marketing/governance")
    );
    let state = rx.wait_for(|s| !s.is_open).await.unwrap().clone();
    assert_eq!(state, QueryState::default());

    widget.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_clear_cancels_pending_match() {
    let widget = widget();
    widget.input("content").await;
    sleep(Duration::from_millis(100)).await;
    widget.clear().await;
    sleep(Duration::from_secs(2)).await;

    assert_eq!(widget.state(), QueryState::default());
    assert_eq!(widget.shutdown().await, 0);
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_keeps_query() {
    let widget = widget();
    let mut rx = widget.subscribe();

    widget.input("roi").await;
    rx.wait_for(|s| s.is_open).await.unwrap();
    widget.dismiss().await;

    let state = rx.wait_for(|s| !s.is_open).await.unwrap().clone();
    assert_eq!(state.raw_query, "roi");
    assert_eq!(
        state.matched_results,
        vec![SearchEntry::new(
            "ROI Framework",
            "/ai-marketing/strategic-foundations",
            "Strategic Foundations"
        )]
    );

    widget.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_short_query_stays_closed() {
    let widget = widget();
    widget.input("e").await;
    sleep(Duration::from_secs(1)).await;

    let state = widget.state();
    assert_eq!(state.raw_query, "e");
    assert!(!state.is_open);
    assert!(state.matched_results.is_empty());
    widget.shutdown().await;
}
