//! The decision cascade.
//!
//! Gate checks run first (generated, export, kind), then token extraction,
//! then the narrative suppressors, then the similarity branches. The branch
//! order is part of the external contract: reordering changes which records
//! produce diagnostics.

use crate::camel;
use crate::config::{CheckConfig, MAX_CHUNK_DIFF_SIZE};
use crate::distance::{damerau_levenshtein, eq_fold, passes_distance_gate, MIN_DOC_TOKEN_LEN};
use crate::narrative;
use crate::token::{self, ExtractedToken};
use crate::types::{DeclarationRecord, Diagnostic, Replacement, SymbolKind};

/// Decides whether the record's doc comment starts with a likely typoed or
/// stale reference to the symbol, returning at most one diagnostic.
///
/// Never fails: malformed or empty input yields `None`.
pub fn check<P: Clone>(record: &DeclarationRecord<P>, config: &CheckConfig) -> Option<Diagnostic<P>> {
    if record.generated && !config.include_generated {
        return None;
    }
    if record.exported {
        if !config.include_exported {
            return None;
        }
    } else if !config.include_unexported {
        return None;
    }
    match record.kind {
        SymbolKind::Type if !config.include_types => return None,
        SymbolKind::InterfaceMethod if !config.include_interface_methods => return None,
        _ => {}
    }
    if record.name.is_empty() || record.doc.is_empty() {
        return None;
    }

    let extracted = token::first_identifier_like(&record.doc)?;
    let tok = extracted.text.as_str();
    if tok.len() < MIN_DOC_TOKEN_LEN {
        return None;
    }

    if suppressed_as_narrative(&extracted, record, config) {
        return None;
    }

    let name = record.name.as_str();
    if !is_likely_drift(tok, name, config) {
        return None;
    }

    let message =
        format!("doc comment starts with '{tok}' but symbol is '{name}' (possible typo or old name)");
    let replacement = (extracted.span.is_valid() && extracted.span.end <= record.doc.len())
        .then(|| Replacement {
            span: extracted.span,
            text: name.to_string(),
        });
    Some(Diagnostic {
        position: record.position.clone(),
        message,
        replacement,
    })
}

/// Narrative suppressors, in contract order. Any hit drops the record.
fn suppressed_as_narrative<P>(
    extracted: &ExtractedToken,
    record: &DeclarationRecord<P>,
    config: &CheckConfig,
) -> bool {
    let tok = extracted.text.as_str();
    let line = extracted.line.as_str();

    if narrative::doc_first_word_has_dot(line) {
        return true;
    }
    if narrative::is_section_header(tok, line) {
        return true;
    }
    if narrative::is_narrative_sentence_intro(tok, line) {
        return true;
    }
    if narrative::contains_wildcard_token(tok, line) {
        return true;
    }
    if matches!(record.kind, SymbolKind::Function | SymbolKind::InterfaceMethod)
        && narrative::is_narrative_verb_form(tok, &record.name)
    {
        return true;
    }
    if config.skip_plain_word_camel
        && narrative::looks_like_simple_word(tok)
        && narrative::has_camel_case_interior(&record.name)
    {
        return true;
    }
    if config.is_allowed_leading_word(tok) {
        return true;
    }
    config.matches_allowed_prefix_variant(tok, &record.name)
}

/// The similarity cascade: gated edit distance first, then the camel-chunk
/// branches in order, accepting the first hit.
fn is_likely_drift(tok: &str, name: &str, config: &CheckConfig) -> bool {
    let doc_lower = tok.to_lowercase();
    let name_lower = name.to_lowercase();

    let len_diff = tok.len().abs_diff(name.len());
    if len_diff <= config.max_dist.saturating_add(1) || len_diff <= MAX_CHUNK_DIFF_SIZE {
        let d = damerau_levenshtein(&doc_lower, &name_lower);
        if d > 0 && d <= config.max_dist && passes_distance_gate(&doc_lower, &name_lower, d) {
            return true;
        }
    }

    if camel::is_camel_swap_variant(tok, name) {
        return true;
    }
    if eq_fold(tok, name) && tok != name {
        return true;
    }
    if camel::has_similar_camel_word(tok, name, config.max_dist) {
        return true;
    }
    if camel::has_camel_chunk_replacement(tok, name, config.max_camel_chunk_replace) {
        return true;
    }
    if camel::has_camel_chunk_insertion_or_removal(tok, name, config.max_camel_chunk_insert) {
        return true;
    }
    camel::has_small_chunk_difference(&doc_lower, &name_lower, MAX_CHUNK_DIFF_SIZE)
}
