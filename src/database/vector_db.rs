mod add_categories;
mod db;
mod search;

pub use db::VectorDB;
