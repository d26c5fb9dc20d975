//! docdrift-core: the decision engine behind docdrift.
//!
//! Given a declaration record (symbol name, doc block, gating flags) and an
//! immutable configuration, [`check`] extracts the first identifier-like
//! token from the doc block, runs a battery of narrative suppressors, then a
//! similarity cascade (edit distance behind an overlap gate, camel-chunk
//! heuristics) and returns at most one diagnostic, optionally carrying an
//! in-place replacement edit.
//!
//! The engine is pure: no I/O, no logging, no state between records. Drivers
//! may call [`check`] from any number of threads against a shared
//! configuration.

pub mod camel;
pub mod config;
pub mod distance;
pub mod engine;
pub mod narrative;
pub mod token;
pub mod types;

pub use config::{CheckConfig, DEFAULT_ALLOWED_LEADING_WORDS};
pub use engine::check;
pub use token::ExtractedToken;
pub use types::{DeclarationRecord, Diagnostic, Replacement, Span, SymbolKind};
