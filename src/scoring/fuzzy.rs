use strsim::normalized_levenshtein;

use crate::catalog::ProductDocument;
use crate::preprocessing::format_query;

// Field weights for the combined score. Product names dominate, quantity
// barely matters.
const WEIGHT_PRODUCT_NAMES: f64 = 3.0;
const WEIGHT_BRANDS: f64 = 2.0;
const WEIGHT_CATEGORIES: f64 = 1.5;
const WEIGHT_LABELS: f64 = 1.0;
const WEIGHT_QUANTITY: f64 = 0.5;

fn ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b) * 100.0
}

/// Similarity of a query against one candidate string, in 0..=100.
///
/// Both sides are normalized first, then the score is the better of the
/// whole-string ratio and the average best per-token ratio, so a one-word
/// query can still score 100 against a longer product name.
fn token_ratio(query: &str, text: &str) -> f64 {
    let q = format_query(query);
    let t = format_query(text);
    if q.is_empty() || t.is_empty() {
        return 0.0;
    }

    let full = ratio(&q, &t);

    let text_tokens: Vec<&str> = t.split(' ').collect();
    let query_tokens: Vec<&str> = q.split(' ').collect();
    let mut total = 0.0;
    for qt in &query_tokens {
        let best = text_tokens
            .iter()
            .map(|tt| ratio(qt, tt))
            .fold(0.0, f64::max);
        total += best;
    }
    let token_avg = total / query_tokens.len() as f64;

    full.max(token_avg)
}

pub fn score_product_names(query: &str, names: &[&str]) -> f64 {
    if query.trim().is_empty() || names.is_empty() {
        return 0.0;
    }
    names
        .iter()
        .map(|n| token_ratio(query, n))
        .fold(0.0, f64::max)
}

pub fn score_brands(query: &str, brands: &str) -> f64 {
    if query.trim().is_empty() || brands.trim().is_empty() {
        return 0.0;
    }
    brands
        .split(',')
        .map(|b| token_ratio(query, b.trim()))
        .fold(token_ratio(query, brands), f64::max)
}

/// Category score with a specificity bias: later entries in the category
/// list are more specific and weigh higher. `categories_tags` entries are
/// matched too, with the language prefix stripped and dashes as spaces.
pub fn score_categories(query: &str, categories: &[String], categories_tags: &[String]) -> f64 {
    if query.trim().is_empty() {
        return 0.0;
    }

    let mut best = 0.0f64;
    let count = categories.len();
    for (i, category) in categories.iter().enumerate() {
        let specificity = 0.5 + 0.5 * (i + 1) as f64 / count as f64;
        best = best.max(token_ratio(query, category) * specificity);
    }

    for tag in categories_tags {
        let stripped = tag.split_once(':').map(|(_, rest)| rest).unwrap_or(tag);
        let stripped = stripped.replace('-', " ");
        best = best.max(token_ratio(query, &stripped) * 0.9);
    }

    best
}

pub fn score_labels(query: &str, labels: &[String]) -> f64 {
    if query.trim().is_empty() || labels.is_empty() {
        return 0.0;
    }
    labels
        .iter()
        .map(|l| token_ratio(query, l))
        .fold(0.0, f64::max)
}

pub fn score_quantity(query: &str, quantity: &str) -> f64 {
    if query.trim().is_empty() || quantity.trim().is_empty() {
        return 0.0;
    }
    token_ratio(query, quantity)
}

/// Weighted similarity of a raw query against one catalog document. The
/// per-field components are each 0..=100, so totals beyond 100 are normal
/// for good matches.
pub fn compute_fuzzy_score(query: &str, document: &ProductDocument) -> f32 {
    if query.trim().is_empty() {
        return 0.0;
    }

    let names = document.product_names();
    let score = WEIGHT_PRODUCT_NAMES * score_product_names(query, &names)
        + WEIGHT_BRANDS * score_brands(query, document.brands())
        + WEIGHT_CATEGORIES
            * score_categories(
                query,
                document.categories.as_slice(),
                document.categories_tags(),
            )
        + WEIGHT_LABELS * score_labels(query, document.labels.as_slice())
        + WEIGHT_QUANTITY * score_quantity(query, document.quantity());

    score as f32
}
