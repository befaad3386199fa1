mod fuzzy;

pub use fuzzy::{
    compute_fuzzy_score, score_brands, score_categories, score_labels, score_product_names,
    score_quantity,
};
