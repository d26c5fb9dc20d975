//! Layered configuration: compiled defaults, then `docdrift.toml`, then CLI
//! flags, highest priority last.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use docdrift_core::CheckConfig;

use crate::cli::Cli;
use crate::errors::ConfigError;

/// Top-level shape of `docdrift.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub check: CheckSettings,
}

/// The `[check]` table. Keys match the CLI flag names; unset keys fall back
/// to the compiled defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CheckSettings {
    pub maxdist: Option<i64>,
    pub include_unexported: Option<bool>,
    pub include_exported: Option<bool>,
    pub include_types: Option<bool>,
    pub include_generated: Option<bool>,
    pub include_interface_methods: Option<bool>,
    pub allowed_leading_words: Option<String>,
    pub allowed_prefixes: Option<String>,
    pub skip_plain_word_camel: Option<bool>,
    pub max_camel_chunk_insert: Option<i64>,
    pub max_camel_chunk_replace: Option<i64>,
}

impl FileConfig {
    /// Parses a TOML document.
    pub fn from_toml(path: &Path, raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Loads the file at `path`, which must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &raw)
    }
}

/// Resolves the engine configuration for this invocation.
///
/// An explicit `--config` file must exist; the implicit `docdrift.toml` in
/// the current directory is optional.
pub fn resolve(cli: &Cli) -> Result<CheckConfig, ConfigError> {
    let mut config = CheckConfig::default();

    let file = match &cli.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => {
            let default_path = PathBuf::from("docdrift.toml");
            if default_path.exists() {
                Some(FileConfig::load(&default_path)?)
            } else {
                None
            }
        }
    };
    if let Some(file) = file {
        apply_settings(&mut config, &file.check);
    }

    apply_cli_overrides(&mut config, cli);
    Ok(config)
}

fn apply_settings(config: &mut CheckConfig, settings: &CheckSettings) {
    if let Some(v) = settings.maxdist {
        config.max_dist = clamp_bound(v);
    }
    if let Some(v) = settings.include_unexported {
        config.include_unexported = v;
    }
    if let Some(v) = settings.include_exported {
        config.include_exported = v;
    }
    if let Some(v) = settings.include_types {
        config.include_types = v;
    }
    if let Some(v) = settings.include_generated {
        config.include_generated = v;
    }
    if let Some(v) = settings.include_interface_methods {
        config.include_interface_methods = v;
    }
    if let Some(words) = &settings.allowed_leading_words {
        config.set_allowed_leading_words(words);
    }
    if let Some(prefixes) = &settings.allowed_prefixes {
        config.set_allowed_prefixes(prefixes);
    }
    if let Some(v) = settings.skip_plain_word_camel {
        config.skip_plain_word_camel = v;
    }
    if let Some(v) = settings.max_camel_chunk_insert {
        config.max_camel_chunk_insert = clamp_bound(v);
    }
    if let Some(v) = settings.max_camel_chunk_replace {
        config.max_camel_chunk_replace = clamp_bound(v);
    }
}

fn apply_cli_overrides(config: &mut CheckConfig, cli: &Cli) {
    let overrides = CheckSettings {
        maxdist: cli.maxdist,
        include_unexported: cli.include_unexported,
        include_exported: cli.include_exported,
        include_types: cli.include_types,
        include_generated: cli.include_generated,
        include_interface_methods: cli.include_interface_methods,
        allowed_leading_words: cli.allowed_leading_words.clone(),
        allowed_prefixes: cli.allowed_prefixes.clone(),
        skip_plain_word_camel: cli.skip_plain_word_camel,
        max_camel_chunk_insert: cli.max_camel_chunk_insert,
        max_camel_chunk_replace: cli.max_camel_chunk_replace,
    };
    apply_settings(config, &overrides);
}

/// Negative bounds from the outside world are clamped to zero, which
/// disables the corresponding engine branch.
fn clamp_bound(v: i64) -> usize {
    if v < 0 {
        tracing::warn!(value = v, "negative threshold clamped to 0");
        0
    } else {
        v as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check_table() {
        let raw = r#"
[check]
maxdist = 2
include-exported = true
allowed-prefixes = "asm,op"
max-camel-chunk-replace = 3
"#;
        let file = FileConfig::from_toml(Path::new("docdrift.toml"), raw).unwrap();
        let mut config = CheckConfig::default();
        apply_settings(&mut config, &file.check);

        assert_eq!(config.max_dist, 2);
        assert!(config.include_exported);
        assert!(config.include_unexported);
        assert_eq!(config.max_camel_chunk_replace, 3);
        assert!(config.matches_allowed_prefix_variant("Load", "asmLoad"));
    }

    #[test]
    fn negative_thresholds_are_clamped() {
        let raw = "[check]\nmaxdist = -3\nmax-camel-chunk-insert = -1\n";
        let file = FileConfig::from_toml(Path::new("docdrift.toml"), raw).unwrap();
        let mut config = CheckConfig::default();
        apply_settings(&mut config, &file.check);

        assert_eq!(config.max_dist, 0);
        assert_eq!(config.max_camel_chunk_insert, 0);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = FileConfig::from_toml(Path::new("bad.toml"), "[check\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let raw = "[check]\nmaxdist = 1\n\n[future]\nsomething = true\n";
        assert!(FileConfig::from_toml(Path::new("docdrift.toml"), raw).is_ok());
    }
}
