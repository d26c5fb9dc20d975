//! Command-line surface.
//!
//! Flag names mirror the settings file keys; every analysis option is
//! optional here so that `docdrift.toml` values shine through when a flag is
//! not given.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "docdrift",
    about = "Flags doc comments that start with a typoed or stale symbol name",
    version
)]
pub struct Cli {
    /// Files or directories to analyze.
    #[arg(value_name = "PATH", default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Configuration file (defaults to docdrift.toml in the current directory).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum Damerau-Levenshtein distance to consider a likely typo.
    #[arg(long, value_name = "N")]
    pub maxdist: Option<i64>,

    /// Check unexported declarations.
    #[arg(long, value_name = "BOOL")]
    pub include_unexported: Option<bool>,

    /// Check exported declarations.
    #[arg(long, value_name = "BOOL")]
    pub include_exported: Option<bool>,

    /// Also check type declarations.
    #[arg(long, value_name = "BOOL")]
    pub include_types: Option<bool>,

    /// Check files marked as generated.
    #[arg(long, value_name = "BOOL")]
    pub include_generated: Option<bool>,

    /// Check interface method declarations.
    #[arg(long, value_name = "BOOL")]
    pub include_interface_methods: Option<bool>,

    /// Narrative words allowed to open a doc comment (comma separated).
    #[arg(long, value_name = "WORDS")]
    pub allowed_leading_words: Option<String>,

    /// Symbol prefixes to strip before comparing (comma separated).
    #[arg(long, value_name = "PREFIXES")]
    pub allowed_prefixes: Option<String>,

    /// Skip plain-word tokens when the symbol is camelCase.
    #[arg(long, value_name = "BOOL")]
    pub skip_plain_word_camel: Option<bool>,

    /// Maximum camel chunks tolerated as inserted or removed.
    #[arg(long, value_name = "N")]
    pub max_camel_chunk_insert: Option<i64>,

    /// Maximum camel chunks tolerated as replaced.
    #[arg(long, value_name = "N")]
    pub max_camel_chunk_replace: Option<i64>,

    /// Apply suggested replacements in place.
    #[arg(long)]
    pub fix: bool,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Worker threads for file analysis (0 keeps the rayon default).
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub jobs: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
