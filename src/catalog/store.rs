use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result as AnyhowResult};
use tracing::debug;

use super::document::ProductDocument;
use crate::preprocessing::tokenize;

/// In-process product catalog, loaded from a JSON array snapshot.
///
/// Search text is tokenized once at load time; `text_search` then scores
/// documents by matched-term weight, the way the original catalog store
/// ranked text queries.
pub struct Catalog {
    documents: Vec<ProductDocument>,
    search_tokens: Vec<Vec<String>>,
}

/// A lexical hit: index into the catalog plus its text score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMatch {
    pub index: usize,
    pub score: f32,
}

impl Catalog {
    pub fn load(path: &Path) -> AnyhowResult<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open catalog snapshot at {}", path.display()))?;
        let documents: Vec<ProductDocument> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse catalog snapshot at {}", path.display()))?;
        debug!("Parsed {} catalog documents", documents.len());
        Ok(Self::from_documents(documents))
    }

    pub fn from_documents(documents: Vec<ProductDocument>) -> Self {
        let search_tokens = documents
            .iter()
            .map(|d| tokenize(&d.search_text()))
            .collect();
        Self {
            documents,
            search_tokens,
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn document(&self, index: usize) -> &ProductDocument {
        &self.documents[index]
    }

    pub fn documents(&self) -> &[ProductDocument] {
        &self.documents
    }

    /// Scores every document against an already-formatted query and returns
    /// the best `limit` hits, highest score first. Ties keep catalog order.
    pub fn text_search(&self, formatted_query: &str, limit: usize) -> Vec<TextMatch> {
        let mut terms: Vec<&str> = formatted_query
            .split(' ')
            .filter(|t| !t.is_empty())
            .collect();
        let mut seen: Vec<&str> = Vec::new();
        terms.retain(|t| {
            if seen.contains(t) {
                false
            } else {
                seen.push(*t);
                true
            }
        });
        if terms.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<TextMatch> = Vec::new();
        for (index, tokens) in self.search_tokens.iter().enumerate() {
            let mut score = 0.0f32;
            let mut matched = 0usize;
            for term in &terms {
                let occurrences = tokens.iter().filter(|t| t == term).count();
                if occurrences > 0 {
                    matched += 1;
                    score += 1.5 + 0.75 * (occurrences - 1) as f32;
                }
            }
            if matched == 0 {
                continue;
            }
            if matched == terms.len() && terms.len() > 1 {
                // full coverage of a multi-term query outranks scattered hits
                score += 1.0;
            }
            matches.push(TextMatch { index, score });
        }

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.index.cmp(&b.index))
        });
        matches.truncate(limit);
        matches
    }

    /// Unique "last category without a language prefix" per document, mapped
    /// to the full category path. Feeds the semantic index build.
    pub fn unique_last_categories(&self) -> Vec<(String, String)> {
        let mut seen: Vec<(String, String)> = Vec::new();
        for document in &self.documents {
            let categories = document.categories.as_slice();
            let last = categories
                .iter()
                .rev()
                .map(|c| c.trim())
                .find(|c| !c.is_empty() && !c.contains(':'));
            let Some(name) = last else { continue };
            if seen.iter().any(|(existing, _)| existing == name) {
                continue;
            }
            let path = categories
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .collect::<Vec<_>>()
                .join(" > ");
            seen.push((name.to_string(), path));
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocessing::format_query;
    use pretty_assertions::assert_eq;

    fn fixture() -> Catalog {
        let documents: Vec<ProductDocument> = serde_json::from_str(
            r#"[
                {"_id": "nutella001",
                 "product_name": [{"lang": "main", "text": "Nutella Hazelnut Spread"}],
                 "brands": "Ferrero",
                 "categories": "Spreads,Sweet Spreads,Chocolate Spreads,Hazelnut Chocolate Spreads",
                 "quantity": "350 g",
                 "search_string": "nutella ferrero hazelnut spread 350g chocolate"},
                {"_id": "bread001",
                 "product_name": [{"lang": "main", "text": "Chleb żytni"}],
                 "categories": "Pieczywo,Pieczywo żytnie",
                 "search_string": "chleb żytni pieczywo"},
                {"_id": "butter001",
                 "product_name": [{"lang": "en", "text": "Organic Almond Butter"}],
                 "categories": "en:spreads,en:nut-butters",
                 "search_string": "organic almond butter 250g"}
            ]"#,
        )
        .unwrap();
        Catalog::from_documents(documents)
    }

    #[test]
    fn test_text_search_ranks_by_matched_terms() {
        let catalog = fixture();
        let hits = catalog.text_search(&format_query("nutella chocolate"), 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(catalog.document(hits[0].index).id, "nutella001");
        assert!(hits[0].score > 0.0);
    }

    #[test]
    fn test_text_search_polish_terms() {
        let catalog = fixture();
        let hits = catalog.text_search(&format_query("chleb żytni"), 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(catalog.document(hits[0].index).id, "bread001");
    }

    #[test]
    fn test_text_search_no_match() {
        let catalog = fixture();
        assert!(catalog.text_search("zzzqqq", 10).is_empty());
        assert!(catalog.text_search("", 10).is_empty());
    }

    #[test]
    fn test_text_search_full_coverage_outranks_partial() {
        let catalog = fixture();
        let full = catalog.text_search(&format_query("organic almond"), 10);
        let partial = catalog.text_search(&format_query("organic zzz"), 10);
        assert_eq!(full[0].index, partial[0].index);
        assert!(full[0].score > partial[0].score);
    }

    #[test]
    fn test_text_search_limit() {
        let catalog = fixture();
        let hits = catalog.text_search(&format_query("spread butter pieczywo"), 1);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_unique_last_categories() {
        let catalog = fixture();
        let entries = catalog.unique_last_categories();
        // butter001 has only prefixed categories and contributes nothing
        assert_eq!(
            entries,
            vec![
                (
                    "Hazelnut Chocolate Spreads".to_string(),
                    "Spreads > Sweet Spreads > Chocolate Spreads > Hazelnut Chocolate Spreads"
                        .to_string()
                ),
                ("Pieczywo żytnie".to_string(), "Pieczywo > Pieczywo żytnie".to_string()),
            ]
        );
    }
}
