/// One semantic category hit: normalized id, display name, full category
/// path and cosine similarity (1 - distance).
#[derive(Debug, Clone)]
pub struct SemanticMatch {
    pub id: String,
    pub category: String,
    pub path: String,
    pub similarity: f32,
}
