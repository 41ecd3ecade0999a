//! End-to-end scan pipeline tests over the in-memory store and mock fetcher.

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use jobscan::testing::MockFetcher;
use jobscan::{
    render_report, BatchOrchestrator, JobSite, MemoryStore, PageSnapshot, ScanOutcome, SiteScanner,
    SnapshotStore,
};

const CHANGED_HTML: &str = r#"
    <div class="job-item">
        <h3>Rust Engineer</h3>
        <span class="company">Acme</span>
        <a href="/jobs/1">Apply</a>
    </div>
    <div class="job-item"><h3>Platform Engineer</h3></div>
    <div class="job-item"><h3>Database Engineer</h3></div>
"#;

const STATIC_HTML: &str = "<p>Nothing to see here, same as always.</p>";

fn orchestrator(
    fetcher: &MockFetcher,
    store: &Arc<MemoryStore>,
) -> BatchOrchestrator<MockFetcher, MemoryStore> {
    let scanner = SiteScanner::new(Arc::new(fetcher.clone()), Arc::clone(store))
        .with_courtesy_delay(Duration::ZERO);
    BatchOrchestrator::with_scanner(scanner, Arc::clone(store))
}

fn outcome_for<'a>(outcomes: &'a [ScanOutcome], name: &str) -> &'a ScanOutcome {
    outcomes
        .iter()
        .find(|o| o.site_name == name)
        .unwrap_or_else(|| panic!("no outcome for {name}"))
}

#[tokio::test]
async fn batch_isolates_failures_and_aggregates_changes() {
    let store = Arc::new(MemoryStore::new());
    let a_id = store.add_site(JobSite::new("Site A", "https://a.test/jobs"));
    let b_id = store.add_site(JobSite::new("Site B", "https://b.test/jobs"));
    store.add_site(JobSite::new("Site C", "https://c.test"));
    assert!(a_id < b_id);

    // B already has a snapshot matching what the fetcher will return
    let prior = PageSnapshot::new(b_id, STATIC_HTML);
    store.append_snapshot(&prior).await.unwrap();

    let fetcher = MockFetcher::new()
        .fail_url("https://a.test/jobs")
        .with_page("https://b.test/jobs", STATIC_HTML)
        .with_page("https://c.test", CHANGED_HTML);

    let outcomes = orchestrator(&fetcher, &store).scan_all().await.unwrap();
    assert_eq!(outcomes.len(), 3);

    let a = outcome_for(&outcomes, "Site A");
    assert!(a.error.is_some());
    assert!(!a.changed);
    assert_eq!(a.new_postings_count(), 0);

    let b = outcome_for(&outcomes, "Site B");
    assert!(b.is_success());
    assert!(!b.changed);
    assert_eq!(b.new_postings_count(), 0);

    let c = outcome_for(&outcomes, "Site C");
    assert!(c.is_success());
    assert!(c.changed);
    assert_eq!(c.new_postings_count(), 3);
    assert_eq!(c.new_postings[0].title, "Rust Engineer");
    assert_eq!(c.new_postings[0].url.as_deref(), Some("https://c.test/jobs/1"));

    // Only C produced a new snapshot; B's prior one still stands alone
    assert_eq!(store.snapshot_count(), 2);
    assert_eq!(store.posting_count(), 3);

    let scan_time = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let report = render_report(&outcomes, scan_time);
    assert!(report.contains("- sites scanned: 3"));
    assert!(report.contains("- failed: 1"));
    assert!(report.contains("- sites with changes: 1"));
    assert!(report.contains("- new postings: 3"));
    assert!(report.contains("- Site C: 3 new posting(s)"));

    // Pure rendering: same inputs, byte-identical output
    assert_eq!(report, render_report(&outcomes, scan_time));
}

#[tokio::test]
async fn repeated_polls_of_a_static_page_store_one_snapshot() {
    let store = Arc::new(MemoryStore::new());
    store.add_site(JobSite::new("Static", "https://static.test"));

    let fetcher = MockFetcher::new().with_page("https://static.test", CHANGED_HTML);
    let orchestrator = orchestrator(&fetcher, &store);

    for _ in 0..3 {
        orchestrator.scan_all().await.unwrap();
    }

    // First poll snapshots and extracts; later polls detect no change and
    // neither snapshot nor re-extract
    assert_eq!(fetcher.fetch_count("https://static.test"), 3);
    assert_eq!(store.snapshot_count(), 1);
    assert_eq!(store.posting_count(), 3);
}

#[tokio::test]
async fn changed_page_is_resnapshotted_and_reextracted() {
    let store = Arc::new(MemoryStore::new());
    store.add_site(JobSite::new("Board", "https://board.test"));

    let fetcher = MockFetcher::new().with_page("https://board.test", CHANGED_HTML);
    let orchestrator = orchestrator(&fetcher, &store);

    orchestrator.scan_all().await.unwrap();
    fetcher.set_page(
        "https://board.test",
        r#"<div class="job-item"><h3>Compiler Engineer</h3></div>"#,
    );
    let outcomes = orchestrator.scan_all().await.unwrap();

    assert!(outcomes[0].changed);
    assert_eq!(outcomes[0].new_postings_count(), 1);
    assert_eq!(store.snapshot_count(), 2);
    // 3 from the first poll, 1 from the second
    assert_eq!(store.posting_count(), 4);
}

#[tokio::test]
async fn empty_site_list_yields_empty_batch() {
    let store = Arc::new(MemoryStore::new());
    let fetcher = MockFetcher::new();

    let outcomes = orchestrator(&fetcher, &store).scan_all().await.unwrap();
    assert!(outcomes.is_empty());
    assert!(fetcher.calls().is_empty());
}

#[tokio::test]
async fn inactive_sites_are_skipped() {
    let store = Arc::new(MemoryStore::new());
    store.add_site(JobSite::new("Active", "https://active.test"));
    store.add_site(JobSite::new("Dormant", "https://dormant.test").inactive());

    let fetcher = MockFetcher::new()
        .with_page("https://active.test", STATIC_HTML)
        .with_page("https://dormant.test", STATIC_HTML);

    let outcomes = orchestrator(&fetcher, &store).scan_all().await.unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].site_name, "Active");
    assert_eq!(fetcher.fetch_count("https://dormant.test"), 0);
}

#[tokio::test]
async fn changed_page_with_no_extractable_postings_still_counts_as_changed() {
    let store = Arc::new(MemoryStore::new());
    store.add_site(JobSite::new("Sparse", "https://sparse.test"));

    let fetcher = MockFetcher::new().with_page("https://sparse.test", STATIC_HTML);

    let outcomes = orchestrator(&fetcher, &store).scan_all().await.unwrap();
    assert!(outcomes[0].changed);
    assert!(outcomes[0].is_success());
    assert_eq!(outcomes[0].new_postings_count(), 0);
    assert_eq!(store.snapshot_count(), 1);
    assert_eq!(store.posting_count(), 0);
}
