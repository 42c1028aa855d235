// file: src/input/mod.rs
// description: listing file discovery and reading
// reference: internal module structure

pub mod reader;
pub mod scanner;

pub use reader::{ListingBatch, ListingReader};
pub use scanner::{FileScanner, ListingFormat, ScannedFile};
