//! Generic selection-strategy cascade for sites without a configured rule.

use scraper::{ElementRef, Html, Selector};
use std::fmt;
use tracing::{debug, info};

use super::fields;
use crate::types::{JobPosting, JobSite};

/// Bound on element consideration per strategy, to limit work on
/// pathological pages. Explicitly configured rules are not capped.
const MAX_ELEMENTS_PER_STRATEGY: usize = 50;

/// One way of locating posting-container elements.
pub(crate) enum Strategy {
    /// Plain CSS query
    Css(&'static str),
    /// `scope` elements that contain a link whose href contains `link_href`
    Containing {
        scope: &'static str,
        link_href: &'static str,
    },
}

/// Strategies tried in priority order; the first productive one wins.
pub(crate) const GENERIC_STRATEGIES: &[Strategy] = &[
    Strategy::Css(".job-item"),
    Strategy::Css(".job-listing"),
    Strategy::Css(".position"),
    Strategy::Css(".vacancy"),
    Strategy::Css("[class*='job']"),
    Strategy::Css("[class*='position']"),
    Strategy::Css("[class*='career']"),
    Strategy::Containing { scope: "li", link_href: "job" },
    Strategy::Containing { scope: "div", link_href: "position" },
];

impl Strategy {
    /// Collect candidate elements for this strategy. Selector failures
    /// degrade to an empty candidate set.
    fn candidates<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        match self {
            Strategy::Css(query) => match Selector::parse(query) {
                Ok(selector) => document.select(&selector).collect(),
                Err(_) => Vec::new(),
            },
            Strategy::Containing { scope, link_href } => {
                let Ok(scope_selector) = Selector::parse(scope) else {
                    return Vec::new();
                };
                let link_query = format!("a[href*='{link_href}']");
                let Ok(link_selector) = Selector::parse(&link_query) else {
                    return Vec::new();
                };

                document
                    .select(&scope_selector)
                    .filter(|el| el.select(&link_selector).next().is_some())
                    .collect()
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Css(query) => f.write_str(query),
            Strategy::Containing { scope, link_href } => {
                write!(f, "{scope} containing a[href*='{link_href}']")
            }
        }
    }
}

/// Run the cascade: the first strategy that matches at least one element and
/// yields at least one posting short-circuits the rest.
pub(crate) fn run(document: &Html, site: &JobSite) -> Vec<JobPosting> {
    for strategy in GENERIC_STRATEGIES {
        let elements = strategy.candidates(document);
        if elements.is_empty() {
            continue;
        }

        debug!(
            site = %site.name,
            strategy = %strategy,
            matches = elements.len(),
            "cascade strategy matched elements"
        );

        let postings: Vec<JobPosting> = elements
            .into_iter()
            .take(MAX_ELEMENTS_PER_STRATEGY)
            .filter_map(|el| fields::extract_posting(el, site))
            .collect();

        if !postings.is_empty() {
            info!(
                site = %site.name,
                strategy = %strategy,
                postings = postings.len(),
                "cascade strategy produced postings"
            );
            return postings;
        }
    }

    Vec::new()
}
