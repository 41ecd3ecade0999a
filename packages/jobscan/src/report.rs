//! Plain-text scan reports.
//!
//! Rendering is a pure function over the outcome list and an explicit scan
//! time: identical inputs produce byte-identical text.

use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::types::ScanOutcome;

/// Postings listed per site in the details section; the rest is summarized
/// as a count.
const DETAIL_POSTINGS_PER_SITE: usize = 5;

/// Render a human-readable report for one scan batch.
pub fn render_report(outcomes: &[ScanOutcome], scan_time: DateTime<Utc>) -> String {
    let mut report = String::new();

    let succeeded: Vec<&ScanOutcome> = outcomes.iter().filter(|o| o.is_success()).collect();
    let failed: Vec<&ScanOutcome> = outcomes.iter().filter(|o| !o.is_success()).collect();
    let changed = succeeded.iter().filter(|o| o.changed).count();
    let total_new: usize = succeeded.iter().map(|o| o.new_postings_count()).sum();

    let _ = writeln!(report, "=== Job Scan Report ===");
    let _ = writeln!(report, "Scan time: {}", scan_time.format("%Y-%m-%d %H:%M:%S UTC"));
    report.push('\n');

    let _ = writeln!(report, "Overall:");
    let _ = writeln!(report, "- sites scanned: {}", outcomes.len());
    let _ = writeln!(report, "- succeeded: {}", succeeded.len());
    let _ = writeln!(report, "- failed: {}", failed.len());
    let _ = writeln!(report, "- sites with changes: {changed}");
    let _ = writeln!(report, "- new postings: {total_new}");
    report.push('\n');

    if !succeeded.is_empty() {
        let _ = writeln!(report, "Scanned sites:");
        for outcome in &succeeded {
            if outcome.changed {
                let _ = writeln!(
                    report,
                    "- {}: {} new posting(s)",
                    outcome.site_name,
                    outcome.new_postings_count()
                );
            } else {
                let _ = writeln!(report, "- {}: no changes", outcome.site_name);
            }
        }
        report.push('\n');
    }

    if !failed.is_empty() {
        let _ = writeln!(report, "Failed sites:");
        for outcome in &failed {
            let cause = outcome.error.as_deref().unwrap_or("unknown error");
            let _ = writeln!(report, "- {}: {}", outcome.site_name, cause);
        }
        report.push('\n');
    }

    if total_new > 0 {
        let _ = writeln!(report, "New postings:");
        for outcome in succeeded.iter().filter(|o| !o.new_postings.is_empty()) {
            let _ = writeln!(report, "{}:", outcome.site_name);
            for posting in outcome.new_postings.iter().take(DETAIL_POSTINGS_PER_SITE) {
                let _ = writeln!(report, "  - {}", posting.title);
                if let Some(company) = &posting.company {
                    let _ = writeln!(report, "    company: {company}");
                }
                if let Some(location) = &posting.location {
                    let _ = writeln!(report, "    location: {location}");
                }
                if let Some(salary) = &posting.salary {
                    let _ = writeln!(report, "    salary: {salary}");
                }
                if let Some(url) = &posting.url {
                    let _ = writeln!(report, "    link: {url}");
                }
            }
            let remaining = outcome.new_postings_count().saturating_sub(DETAIL_POSTINGS_PER_SITE);
            if remaining > 0 {
                let _ = writeln!(report, "  ... and {remaining} more");
            }
            report.push('\n');
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{JobPosting, JobSite};
    use chrono::TimeZone;

    fn sample_outcomes() -> Vec<ScanOutcome> {
        let site_a = JobSite::new("Site A", "https://a.test").with_id(1);
        let site_c = JobSite::new("Site C", "https://c.test").with_id(3);

        let postings = vec![
            JobPosting::new(3, "Rust Engineer")
                .with_company("Acme")
                .with_salary("90k+"),
            JobPosting::new(3, "SRE").with_location("Remote"),
        ];

        vec![
            ScanOutcome::failed(2, "Site B", "timeout fetching: https://b.test"),
            ScanOutcome::unchanged(&site_a),
            ScanOutcome::with_postings(&site_c, postings),
        ]
    }

    #[test]
    fn report_aggregates_counts() {
        let outcomes = sample_outcomes();
        let scan_time = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let report = render_report(&outcomes, scan_time);

        assert!(report.contains("- sites scanned: 3"));
        assert!(report.contains("- succeeded: 2"));
        assert!(report.contains("- failed: 1"));
        assert!(report.contains("- sites with changes: 1"));
        assert!(report.contains("- new postings: 2"));
        assert!(report.contains("- Site B: timeout fetching: https://b.test"));
        assert!(report.contains("- Site A: no changes"));
        assert!(report.contains("- Site C: 2 new posting(s)"));
        assert!(report.contains("  - Rust Engineer"));
        assert!(report.contains("    company: Acme"));
    }

    #[test]
    fn report_is_deterministic() {
        let outcomes = sample_outcomes();
        let scan_time = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        let first = render_report(&outcomes, scan_time);
        let second = render_report(&outcomes, scan_time);
        assert_eq!(first, second);
    }

    #[test]
    fn overflow_postings_are_summarized() {
        let site = JobSite::new("Big Board", "https://big.test").with_id(9);
        let postings = (0..8)
            .map(|i| JobPosting::new(9, format!("Engineer {i}")))
            .collect();
        let outcomes = vec![ScanOutcome::with_postings(&site, postings)];

        let scan_time = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let report = render_report(&outcomes, scan_time);
        assert!(report.contains("... and 3 more"));
    }
}
