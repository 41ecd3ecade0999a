//! Per-element field extraction.
//!
//! Each field is tried against an ordered list of candidate sub-selectors;
//! the first non-blank match wins. Field extraction never fails — missing
//! optional fields stay `None`, and an element with no derivable title is
//! discarded entirely.

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::types::{JobPosting, JobSite};

const TITLE_SELECTORS: &[&str] = &[
    "h1",
    "h2",
    "h3",
    "h4",
    ".title",
    ".job-title",
    ".position-title",
    "a[href*='job']",
    "a[href*='position']",
    "[class*='title']",
];

const COMPANY_SELECTORS: &[&str] = &[".company", ".company-name", ".employer", "[class*='company']"];

const LOCATION_SELECTORS: &[&str] = &[
    ".location",
    ".city",
    ".address",
    "[class*='location']",
    "[class*='city']",
];

const SALARY_SELECTORS: &[&str] = &[".salary", ".pay", ".wage", "[class*='salary']", "[class*='pay']"];

const DESCRIPTION_SELECTORS: &[&str] = &[".description", ".summary", ".content", "[class*='desc']"];

/// Digit ranges with optional k suffix, digit-plus, or a "negotiable" marker.
const SALARY_PATTERN: &str = r"\d+[kK]?\s*[-~]\s*\d+[kK]?|\d+[kK]?\+|(?i:negotiable)";

const DESCRIPTION_MAX_CHARS: usize = 500;

/// Build a posting from one candidate element, or discard it when no title
/// can be derived.
pub(crate) fn extract_posting(element: ElementRef<'_>, site: &JobSite) -> Option<JobPosting> {
    let title = extract_title(element)?;

    let mut posting = JobPosting::new(site.id, title);
    posting.company = select_first_text(element, COMPANY_SELECTORS);
    posting.location = select_first_text(element, LOCATION_SELECTORS);
    posting.salary = extract_salary(element);
    posting.description = extract_description(element);
    posting.url = extract_link(element, &site.url);

    Some(posting)
}

/// Title from sub-selectors, or the element's own text as a last resort.
fn extract_title(element: ElementRef<'_>) -> Option<String> {
    for query in TITLE_SELECTORS {
        if let Some(title) = select_text(element, query) {
            if title.chars().count() > 3 {
                return Some(title);
            }
        }
    }

    // Fallback: the element's full text, first line only, and only when the
    // whole text is plausibly a one-posting blurb (5..=200 chars).
    let text = raw_text(element);
    let trimmed = text.trim();
    let len = trimmed.chars().count();
    if (5..=200).contains(&len) {
        return trimmed
            .lines()
            .next()
            .map(|line| normalize_whitespace(line))
            .filter(|line| !line.is_empty());
    }

    None
}

fn extract_salary(element: ElementRef<'_>) -> Option<String> {
    if let Some(salary) = select_first_text(element, SALARY_SELECTORS) {
        return Some(salary);
    }

    // No salary-ish class anywhere: scan the element text for common
    // salary shapes, first match wins.
    let pattern = Regex::new(SALARY_PATTERN).ok()?;
    let text = raw_text(element);
    pattern.find(&text).map(|m| m.as_str().to_string())
}

fn extract_description(element: ElementRef<'_>) -> Option<String> {
    for query in DESCRIPTION_SELECTORS {
        if let Some(desc) = select_text(element, query) {
            if desc.chars().count() > 10 {
                return Some(desc.chars().take(DESCRIPTION_MAX_CHARS).collect());
            }
        }
    }
    None
}

/// First anchor with a non-blank href, resolved against the site base URL.
fn extract_link(element: ElementRef<'_>, base_url: &str) -> Option<String> {
    let selector = Selector::parse("a[href]").ok()?;
    let href = element
        .select(&selector)
        .filter_map(|a| a.value().attr("href"))
        .map(str::trim)
        .find(|href| !href.is_empty())?;

    if href.starts_with("http") {
        return Some(href.to_string());
    }

    // Relative link: join with a single slash between base and path
    let base = base_url.trim_end_matches('/');
    if href.starts_with('/') {
        Some(format!("{base}{href}"))
    } else {
        Some(format!("{base}/{href}"))
    }
}

/// First non-blank text among the given sub-selector queries.
fn select_first_text(element: ElementRef<'_>, queries: &[&str]) -> Option<String> {
    queries.iter().find_map(|query| select_text(element, query))
}

/// Text of the first descendant matching `query`, whitespace-normalized;
/// `None` when the query is invalid, matches nothing, or the text is blank.
fn select_text(element: ElementRef<'_>, query: &str) -> Option<String> {
    let selector = Selector::parse(query).ok()?;
    let matched = element.select(&selector).next()?;
    let text = normalize_whitespace(&raw_text(matched));
    (!text.is_empty()).then_some(text)
}

fn raw_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
