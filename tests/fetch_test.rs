use hr_dashboard_client::error::Result;
use hr_dashboard_client::fetch::{abortable, Debouncer, LatestFetch};
use std::time::Duration;

#[tokio::test]
async fn beginning_a_new_fetch_cancels_the_previous_one() {
    let mut latest = LatestFetch::new();
    let first = latest.begin();
    let second = latest.begin();

    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());
}

#[tokio::test]
async fn superseded_fetch_resolves_to_cancelled_instead_of_stale_data() {
    let mut latest = LatestFetch::new();
    let first = latest.begin();

    // A slow response that would arrive after the view moved on.
    let slow = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        Ok::<_, hr_dashboard_client::error::Error>(vec!["stale row"])
    };
    let racing = tokio::spawn(async move { abortable(&first, slow).await });

    // The user changes a filter; a second fetch supersedes the first.
    let _second = latest.begin();

    let outcome = racing.await.unwrap();
    assert!(outcome.unwrap_err().is_cancelled());
}

#[tokio::test]
async fn already_cancelled_token_short_circuits() {
    let mut latest = LatestFetch::new();
    let token = latest.begin();
    latest.cancel();

    let result: Result<i32> = abortable(&token, async { Ok(1) }).await;
    assert!(result.unwrap_err().is_cancelled());
}

#[tokio::test]
async fn uncancelled_fetch_completes_normally() {
    let mut latest = LatestFetch::new();
    let token = latest.begin();

    let result = abortable(&token, async { Ok(7) }).await;
    assert_eq!(result.unwrap(), 7);
}

#[tokio::test]
async fn debouncer_keeps_only_the_latest_trigger() {
    let debouncer = Debouncer::new(Duration::from_millis(20));

    let (first, second) = tokio::join!(debouncer.trigger(), debouncer.trigger());
    assert!(!first);
    assert!(second);
}

#[tokio::test]
async fn lone_trigger_fires() {
    let debouncer = Debouncer::new(Duration::from_millis(5));
    assert!(debouncer.trigger().await);
}
