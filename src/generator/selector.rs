use super::templates::{ECOMMERCE, LANDING, PORTFOLIO};
use super::types::TemplateRecord;

const ECOMMERCE_KEYWORDS: &[&str] = &["магазин", "shop", "каталог", "товар"];
const PORTFOLIO_KEYWORDS: &[&str] = &["портфолио", "portfolio", "работы", "проект"];

/// Classifies a description into one of the fixed templates.
///
/// Matching is case-insensitive substring containment, first match wins:
/// commerce keywords take precedence over portfolio ones, and anything
/// without a recognizable keyword falls through to the landing template.
pub fn select(description: &str) -> &'static TemplateRecord {
    let description = description.to_lowercase();

    if contains_any(&description, ECOMMERCE_KEYWORDS) {
        &ECOMMERCE
    } else if contains_any(&description, PORTFOLIO_KEYWORDS) {
        &PORTFOLIO
    } else {
        &LANDING
    }
}

fn contains_any(description: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| description.contains(keyword))
}
