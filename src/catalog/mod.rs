mod document;
mod store;

pub use document::{LocalizedName, ProductDocument, StringList};
pub use store::{Catalog, TextMatch};
