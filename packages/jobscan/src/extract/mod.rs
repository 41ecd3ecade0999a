//! Posting extraction from page markup.
//!
//! Best-effort heuristic mining: a site-specific selection rule, when
//! configured, is the sole element query (no fallback, no cap); otherwise a
//! fixed cascade of generic strategies is tried in priority order and the
//! first productive one wins. Parse and selector failures yield empty
//! results, never errors.

mod cascade;
mod fields;

use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::types::{JobPosting, JobSite};

/// Extract candidate postings from `html` for one site.
pub fn extract_postings(html: &str, site: &JobSite) -> Vec<JobPosting> {
    let document = Html::parse_document(html);

    let postings = match site.selector.as_deref() {
        Some(rule) => extract_with_rule(&document, rule, site),
        None => cascade::run(&document, site),
    };

    debug!(site = %site.name, postings = postings.len(), "extraction finished");
    postings
}

/// Apply an operator-configured rule as the sole element query. An invalid
/// rule yields nothing; the generic cascade is never consulted here.
fn extract_with_rule(document: &Html, rule: &str, site: &JobSite) -> Vec<JobPosting> {
    let selector = match Selector::parse(rule) {
        Ok(selector) => selector,
        Err(e) => {
            warn!(site = %site.name, rule = %rule, error = ?e, "invalid posting selector");
            return Vec::new();
        }
    };

    document
        .select(&selector)
        .filter_map(|el| fields::extract_posting(el, site))
        .collect()
}
