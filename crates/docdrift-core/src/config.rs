//! Resolved analysis configuration.
//!
//! Drivers build one `CheckConfig` per run from whatever surface they expose
//! (CLI flags, a settings file) and hand a shared reference to every
//! [`crate::check`] call. The engine only reads it.

use std::collections::HashSet;

/// Narrative words that commonly open a doc sentence and are never treated
/// as symbol references.
pub const DEFAULT_ALLOWED_LEADING_WORDS: &str = "create,creates,creating,initialize,initializes,\
init,configure,configures,setup,setups,start,starts,read,reads,write,writes,send,sends,\
generate,generates,decode,decodes,encode,encodes,marshal,marshals,unmarshal,unmarshals,\
apply,applies,process,processes,make,makes,build,builds,test,tests";

/// Fixed ceiling, in bytes, for the small byte-delta heuristic.
pub(crate) const MAX_CHUNK_DIFF_SIZE: usize = 6;

/// Immutable per-run configuration for the decision engine.
///
/// Numeric bounds of zero disable the corresponding branch; drivers are
/// expected to clamp negative input to zero before constructing this.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Edit-distance ceiling for the raw Damerau-Levenshtein branch.
    pub max_dist: usize,
    pub include_unexported: bool,
    pub include_exported: bool,
    pub include_types: bool,
    pub include_generated: bool,
    pub include_interface_methods: bool,
    /// Suppress plain-word tokens when the symbol is camelCase.
    pub skip_plain_word_camel: bool,
    pub max_camel_chunk_insert: usize,
    pub max_camel_chunk_replace: usize,
    allowed_leading_words: HashSet<String>,
    allowed_prefixes: Vec<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            max_dist: 1,
            include_unexported: true,
            include_exported: false,
            include_types: false,
            include_generated: false,
            include_interface_methods: false,
            skip_plain_word_camel: true,
            max_camel_chunk_insert: 2,
            max_camel_chunk_replace: 2,
            allowed_leading_words: build_allowed_leading_words(DEFAULT_ALLOWED_LEADING_WORDS),
            allowed_prefixes: Vec::new(),
        }
    }
}

impl CheckConfig {
    /// Replaces the allowed leading words from delimited text. Fragments are
    /// split on commas, semicolons, slashes, and whitespace, and lowercased.
    pub fn set_allowed_leading_words(&mut self, raw: &str) {
        self.allowed_leading_words = build_allowed_leading_words(raw);
    }

    /// Replaces the allowed prefixes from delimited text, keeping order.
    pub fn set_allowed_prefixes(&mut self, raw: &str) {
        self.allowed_prefixes = split_list(raw).map(str::to_string).collect();
    }

    /// Whether the token is in the allowed narrative word set.
    pub fn is_allowed_leading_word(&self, word: &str) -> bool {
        !word.is_empty()
            && !self.allowed_leading_words.is_empty()
            && self.allowed_leading_words.contains(&word.to_lowercase())
    }

    /// Whether stripping a configured prefix from the symbol leaves exactly
    /// the doc token, compared case-insensitively. Catches conventions like
    /// an `op` prefix on every symbol of a dispatch table.
    pub fn matches_allowed_prefix_variant(&self, doc_token: &str, symbol: &str) -> bool {
        if self.allowed_prefixes.is_empty() {
            return false;
        }

        let symbol_lower = symbol.to_lowercase();
        for raw_prefix in &self.allowed_prefixes {
            let prefix = raw_prefix.trim();
            if prefix.is_empty() || symbol.len() <= prefix.len() {
                continue;
            }
            if !symbol_lower.starts_with(&prefix.to_lowercase()) {
                continue;
            }
            let trimmed = match symbol.get(prefix.len()..) {
                Some(trimmed) if !trimmed.is_empty() => trimmed,
                _ => continue,
            };
            if doc_token.to_lowercase() == trimmed.to_lowercase() {
                return true;
            }
        }
        false
    }
}

fn build_allowed_leading_words(raw: &str) -> HashSet<String> {
    split_list(raw).map(|w| w.to_lowercase()).collect()
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| matches!(c, ',' | ';' | '/' | '\n' | '\t' | ' '))
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_splitting_accepts_mixed_delimiters() {
        let mut config = CheckConfig::default();
        config.set_allowed_leading_words("foo,bar /baz");
        assert!(config.is_allowed_leading_word("foo"));
        assert!(config.is_allowed_leading_word("BAR"));
        assert!(config.is_allowed_leading_word("baz"));
        assert!(!config.is_allowed_leading_word("qux"));
        assert!(!config.is_allowed_leading_word(""));
    }

    #[test]
    fn default_leading_words_cover_common_verbs() {
        let config = CheckConfig::default();
        assert!(config.is_allowed_leading_word("creates"));
        assert!(config.is_allowed_leading_word("Unmarshals"));
        assert!(!config.is_allowed_leading_word("frobnicates"));
    }

    #[test]
    fn allowed_prefix_variant() {
        let mut config = CheckConfig::default();
        config.set_allowed_prefixes("op");
        assert!(config.matches_allowed_prefix_variant("Thing", "opThing"));
        assert!(!config.matches_allowed_prefix_variant("Other", "Thing"));
        assert!(!config.matches_allowed_prefix_variant("Thing", "op"));
    }

    #[test]
    fn prefix_order_is_preserved_and_empty_fragments_dropped() {
        let mut config = CheckConfig::default();
        config.set_allowed_prefixes("asm,, op");
        assert!(config.matches_allowed_prefix_variant("Load", "asmLoad"));
        assert!(config.matches_allowed_prefix_variant("Store", "opStore"));
    }
}
