pub mod error;
pub mod lexicon;
pub mod logging;
pub mod render;
pub mod scanner;

// Re-export error types for convenience
pub use error::{LexiconError, ScanError};
