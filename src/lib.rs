pub mod domain;
pub mod extraction;
pub mod models;
pub mod processing;
pub mod repository;

/// Separator used when joining a profile's textual fields into one blob for
/// extraction and embedding.
pub const BLOB_SEPARATOR: &str = " | ";
