pub mod index;
pub mod loader;

// Re-export main types
pub use index::WzIndex;
pub use loader::{load_from_json, load_from_mappings_json, LoadError};
