//! Narrative suppressors: prose-shaped first tokens that are not typos.
//!
//! Each predicate inspects the extracted token together with the trimmed
//! first line. The engine short-circuits on the first hit, so these run in a
//! fixed order that is part of the external contract.

use crate::distance::eq_fold;

const SECTION_HEADER_SECOND_WORDS: &[&str] =
    &["helper", "helpers", "section", "sections", "overview", "summary"];

const NARRATIVE_SECOND_WORDS: &[&str] = &[
    "that", "the", "a", "an", "this", "these", "those", "whether", "if",
];

/// Whether the doc line reads like a heading ("Foo helpers", "Bar section").
pub fn is_section_header(first_tok: &str, line: &str) -> bool {
    second_word_in(first_tok, line, SECTION_HEADER_SECOND_WORDS)
}

/// Whether the doc line opens a plain English sentence ("Helper that ...").
pub fn is_narrative_sentence_intro(first_tok: &str, line: &str) -> bool {
    looks_like_simple_word(first_tok) && second_word_in(first_tok, line, NARRATIVE_SECOND_WORDS)
}

fn second_word_in(first_tok: &str, line: &str, second_words: &[&str]) -> bool {
    if first_tok.is_empty() || line.is_empty() {
        return false;
    }

    let mut fields = line.split_whitespace();
    let (first, second) = match (fields.next(), fields.next()) {
        (Some(first), Some(second)) => (first, second),
        _ => return false,
    };

    if !eq_fold(first_tok, strip_word_token(first)) {
        return false;
    }
    let second = strip_word_token(second).to_lowercase();
    !second.is_empty() && second_words.contains(&second.as_str())
}

/// Whether the token is clearly a glob-like placeholder rather than a name.
pub fn contains_wildcard_token(token: &str, line: &str) -> bool {
    if token.chars().any(|c| matches!(c, '*' | '?' | '[' | ']')) {
        return true;
    }
    if token.is_empty() || line.is_empty() {
        return false;
    }

    let lower_line = line.to_lowercase();
    let lower_token = token.to_lowercase();
    match lower_line.strip_prefix(&lower_token) {
        Some(rest) if !rest.is_empty() => rest.starts_with('*'),
        _ => false,
    }
}

/// Whether the token is a single plain word: all letters, at most the first
/// of them uppercase.
pub fn looks_like_simple_word(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let chars: Vec<char> = word.chars().collect();
    if !chars.iter().all(|c| c.is_alphabetic()) {
        return false;
    }
    if chars.len() == 1 {
        return true;
    }
    let rest: String = chars[1..].iter().collect();
    if rest.to_lowercase() != rest {
        return false;
    }
    chars[0].is_lowercase() || chars[0].is_uppercase()
}

/// Whether a name contains an uppercase letter past its first character.
pub fn has_camel_case_interior(name: &str) -> bool {
    name.chars().skip(1).any(|c| c.is_uppercase())
}

/// Whether the first word of the line is a dotted reference such as
/// `reflect.DeepEqual` or `.Hello`, or a plain word followed by a sentence
/// period. The prefix before the first dot must be empty or lowercase apart
/// from an initial capital; `ServeHTTP.foo` is not suppressed.
pub fn doc_first_word_has_dot(line: &str) -> bool {
    let first = match line.split_whitespace().next() {
        Some(first) => first,
        None => return false,
    };
    let dot = match first.find('.') {
        Some(dot) => dot,
        None => return false,
    };
    let prefix = &first[..dot];
    prefix.is_empty() || !has_camel_case_interior(prefix)
}

/// Whether the token is a third-person verb form of the symbol name, as in
/// "Creates ..." documenting `createFoo`. Only meaningful for functions.
pub fn is_narrative_verb_form(word: &str, func_name: &str) -> bool {
    if word.len() < 2 {
        return false;
    }
    let lower = word.to_lowercase();
    let stem = match lower.strip_suffix('s') {
        Some(stem) => stem,
        None => return false,
    };
    !stem.is_empty() && func_name.to_lowercase().starts_with(stem)
}

/// Removes punctuation from both ends of a whitespace-separated word.
fn strip_word_token(word: &str) -> &str {
    word.trim_matches(|c: char| " \t:.,;\r\n-*".contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_first_word() {
        assert!(doc_first_word_has_dot("reflect.DeepEqual doesn't work"));
        assert!(doc_first_word_has_dot("foo.Bar is weird"));
        assert!(doc_first_word_has_dot(".Hello starts with dot"));
        assert!(doc_first_word_has_dot("This. is a dot after"));
        assert!(!doc_first_word_has_dot("ServeHTTP handles"));
        assert!(!doc_first_word_has_dot("ServeHTTP.foo handles"));
        assert!(!doc_first_word_has_dot("UID.Event happens"));
        assert!(!doc_first_word_has_dot(""));
    }

    #[test]
    fn section_headers() {
        assert!(is_section_header("Parsing", "Parsing helpers"));
        assert!(is_section_header("Config", "Config section: defaults"));
        assert!(!is_section_header("Parsing", "Parsing the input"));
        assert!(!is_section_header("Parsing", "Parsing"));
    }

    #[test]
    fn narrative_sentence_intros() {
        assert!(is_narrative_sentence_intro("Helper", "Helper that wraps the client"));
        assert!(is_narrative_sentence_intro("checks", "checks whether the pod is ready"));
        assert!(!is_narrative_sentence_intro("serveHTTP", "serveHTTP that handles"));
        assert!(!is_narrative_sentence_intro("Helper", "Helper wraps the client"));
    }

    #[test]
    fn wildcard_tokens() {
        assert!(contains_wildcard_token("commonPrefixLen*", "commonPrefixLen* returns"));
        assert!(contains_wildcard_token("get[T]", "get[T] fetches"));
        assert!(!contains_wildcard_token("Token", "Token returns"));
    }

    #[test]
    fn simple_words() {
        assert!(looks_like_simple_word("helper"));
        assert!(looks_like_simple_word("Helper"));
        assert!(looks_like_simple_word("a"));
        assert!(!looks_like_simple_word("serveHTTP"));
        assert!(!looks_like_simple_word("foo2"));
        assert!(!looks_like_simple_word(""));
    }

    #[test]
    fn camel_interior() {
        assert!(has_camel_case_interior("opThing"));
        assert!(has_camel_case_interior("serveHTTP"));
        assert!(!has_camel_case_interior("Thing"));
        assert!(!has_camel_case_interior("thing"));
    }

    #[test]
    fn verb_forms() {
        assert!(is_narrative_verb_form("Creates", "createFoo"));
        assert!(is_narrative_verb_form("starts", "startServer"));
        assert!(!is_narrative_verb_form("Creates", "newHTTPClient"));
        assert!(!is_narrative_verb_form("Create", "createFoo"));
        assert!(!is_narrative_verb_form("s", "startServer"));
    }
}
