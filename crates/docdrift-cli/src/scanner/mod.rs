//! File discovery: recursive walking with ignore patterns and include globs.

mod ignores;
mod walker;

pub use ignores::IgnorePatterns;
pub use walker::{ScanOptions, Scanner};
