use serde::Deserialize;

use crate::preprocessing::format_query;

/// One entry of the `product_name` array: a product name in one language,
/// with `"main"` marking the preferred one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalizedName {
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub text: String,
}

/// Catalog fields such as `categories` and `labels` appear either as a
/// comma-separated string or as an array, depending on snapshot vintage.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "StringOrList")]
pub struct StringList(pub Vec<String>);

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
    Missing(()),
}

impl From<StringOrList> for StringList {
    fn from(value: StringOrList) -> Self {
        let entries = match value {
            StringOrList::One(s) => s.split(',').map(str::to_string).collect(),
            StringOrList::Many(v) => v,
            StringOrList::Missing(()) => Vec::new(),
        };
        StringList(
            entries
                .into_iter()
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .collect(),
        )
    }
}

impl StringList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single product record from the catalog snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub product_name: Option<Vec<LocalizedName>>,
    #[serde(default)]
    pub brands: Option<String>,
    #[serde(default)]
    pub categories: StringList,
    #[serde(default)]
    pub categories_tags: Option<Vec<String>>,
    #[serde(default)]
    pub labels: StringList,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub search_string: Option<String>,
}

impl ProductDocument {
    /// Unique non-empty product names, in document order.
    pub fn product_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        if let Some(entries) = &self.product_name {
            for entry in entries {
                let text = entry.text.trim();
                if !text.is_empty() && !names.contains(&text) {
                    names.push(text);
                }
            }
        }
        names
    }

    /// Display name of the record: the last category without a language
    /// prefix (no `:`), falling back to the `"main"` product name, then to
    /// the first non-empty product name.
    pub fn given_name(&self) -> String {
        for category in self.categories.as_slice().iter().rev() {
            let category = category.trim();
            if !category.is_empty() && !category.contains(':') {
                return category.to_string();
            }
        }

        if let Some(entries) = &self.product_name {
            if let Some(main) = entries
                .iter()
                .find(|e| e.lang == "main" && !e.text.trim().is_empty())
            {
                return main.text.trim().to_string();
            }
            if let Some(first) = entries.iter().find(|e| !e.text.trim().is_empty()) {
                return first.text.trim().to_string();
            }
        }

        String::new()
    }

    pub fn brands(&self) -> &str {
        self.brands.as_deref().unwrap_or("")
    }

    pub fn quantity(&self) -> &str {
        self.quantity.as_deref().unwrap_or("")
    }

    pub fn categories_tags(&self) -> &[String] {
        self.categories_tags.as_deref().unwrap_or(&[])
    }

    /// Normalized text the lexical search indexes: the precomputed
    /// `search_string` when the snapshot carries one, otherwise a
    /// concatenation of the descriptive fields.
    pub fn search_text(&self) -> String {
        if let Some(s) = &self.search_string {
            if !s.trim().is_empty() {
                return format_query(s);
            }
        }

        let mut parts: Vec<String> = Vec::new();
        parts.extend(self.product_names().iter().map(|n| n.to_string()));
        if !self.brands().is_empty() {
            parts.push(self.brands().to_string());
        }
        if !self.quantity().is_empty() {
            parts.push(self.quantity().to_string());
        }
        parts.extend(self.labels.as_slice().iter().cloned());
        parts.extend(self.categories.as_slice().iter().cloned());
        format_query(&parts.join(" "))
    }
}
