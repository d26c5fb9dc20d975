//! First-token extraction from raw comment blocks.
//!
//! All offsets are byte offsets relative to the start of the block text the
//! driver handed over, so a replacement span can be translated back into a
//! file range by adding the block's origin offset. Trimming only ever
//! consumes ASCII bytes, which keeps every slice on a UTF-8 boundary.

use crate::types::Span;

/// The first identifier-like token of a doc block, with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedToken {
    /// Token text.
    pub text: String,
    /// Byte range of the token within the block.
    pub span: Span,
    /// The trimmed first non-empty line, used by the narrative filters.
    pub line: String,
}

/// Extracts the first identifier-like token from a comment block.
///
/// Returns `None` when the block has no non-empty line or the first word
/// with content carries no leading identifier run.
pub fn first_identifier_like(block: &str) -> Option<ExtractedToken> {
    let (line, line_offset) = first_doc_line(block)?;
    let (id, rel) = identifier_from_line(line)?;
    let start = line_offset + rel;
    Some(ExtractedToken {
        text: id.to_string(),
        span: Span::new(start, start + id.len()),
        line: line.to_string(),
    })
}

/// Returns the first non-empty line of the raw comment text and the byte
/// offset of its trimmed start within the block.
fn first_doc_line(raw: &str) -> Option<(&str, usize)> {
    if raw.is_empty() {
        return None;
    }
    let mut text = raw;
    let mut consumed = 0;
    if let Some(rest) = text.strip_prefix("//") {
        text = rest;
        consumed = 2;
    } else if let Some(rest) = text.strip_prefix("/*") {
        text = rest.strip_suffix("*/").unwrap_or(rest);
        consumed = 2;
    }

    let mut current_offset = consumed;
    while !text.is_empty() {
        let (line, advance) = match text.find('\n') {
            Some(i) => (&text[..i], i + 1),
            None => (text, text.len()),
        };
        let line_offset = current_offset;
        current_offset += advance;
        text = &text[advance..];

        let (trimmed, left_trim) = trim_doc_line(line);
        if trimmed.is_empty() {
            continue;
        }
        return Some((trimmed, line_offset + left_trim));
    }
    None
}

/// Removes leading comment markers and surrounding whitespace, returning the
/// number of bytes trimmed from the left.
fn trim_doc_line(line: &str) -> (&str, usize) {
    let mut rest = line;
    let mut consumed = 0;

    let n = leading_len(rest, |b| matches!(b, b' ' | b'\t' | b'\r'));
    consumed += n;
    rest = &rest[n..];

    let n = leading_len(rest, |b| matches!(b, b'*' | b' ' | b'\t'));
    consumed += n;
    rest = &rest[n..];

    let n = leading_len(rest, |b| matches!(b, b' ' | b'\t'));
    consumed += n;
    rest = &rest[n..];

    (rest.trim_end_matches([' ', '\t', '\r']), consumed)
}

fn leading_len(s: &str, pred: impl Fn(u8) -> bool) -> usize {
    s.bytes().take_while(|&b| pred(b)).count()
}

/// Finds the first identifier token within a trimmed line, skipping
/// punctuation-only words and well-known labels.
fn identifier_from_line(line: &str) -> Option<(&str, usize)> {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        while i < bytes.len() && (bytes[i] == b' ' || bytes[i] == b'\t') {
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }
        let word_start = i;
        while i < bytes.len() && bytes[i] != b' ' && bytes[i] != b'\t' {
            i += 1;
        }
        let word = &line[word_start..i];
        let (trimmed, left_trim) = trim_word(word);
        if trimmed.is_empty() {
            continue;
        }
        let label = trimmed.strip_suffix(':').unwrap_or(trimmed).to_lowercase();
        if is_skippable_label(&label) {
            continue;
        }
        let (stripped, removed) = trim_pointer_prefixes(trimmed);
        if let Some(id) = leading_ident_run(stripped) {
            return Some((id, word_start + left_trim + removed));
        }
        break;
    }
    None
}

/// Strips punctuation from both ends of a word, returning the left offset.
fn trim_word(word: &str) -> (&str, usize) {
    let bytes = word.as_bytes();
    let mut left = 0;
    let mut right = bytes.len();
    while left < right && is_word_boundary(bytes[left]) {
        left += 1;
    }
    while right > left && is_word_boundary(bytes[right - 1]) {
        right -= 1;
    }
    (&word[left..right], left)
}

fn is_word_boundary(b: u8) -> bool {
    matches!(
        b,
        b',' | b'.' | b';' | b':' | b'(' | b')' | b'[' | b']' | b'{' | b'}' | b'\t' | b' ' | b'\r'
    )
}

/// Labels that introduce machine-readable doc directives rather than prose.
fn is_skippable_label(word: &str) -> bool {
    matches!(
        word,
        "deprecated" | "todo" | "note" | "fixme" | "nolint" | "lint" | "warning"
    )
}

/// Removes leading pointer markers before scanning for the identifier.
fn trim_pointer_prefixes(s: &str) -> (&str, usize) {
    let n = leading_len(s, |b| b == b'*' || b == b'&');
    (&s[n..], n)
}

/// The maximal leading run of ASCII letters, digits, and underscores.
fn leading_ident_run(s: &str) -> Option<&str> {
    let end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some(&s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(block: &str) -> Option<(String, usize, usize)> {
        first_identifier_like(block).map(|t| (t.text, t.span.start, t.span.end))
    }

    #[test]
    fn line_comment_token_and_range() {
        let block = "// serveHtpp handles websocket traffic.";
        let (text, start, end) = extract(block).unwrap();
        assert_eq!(text, "serveHtpp");
        assert_eq!(&block[start..end], "serveHtpp");
    }

    #[test]
    fn block_comment_token_and_range() {
        let block = "/* serveHtpp handles traffic */";
        let (text, start, end) = extract(block).unwrap();
        assert_eq!(text, "serveHtpp");
        assert_eq!(&block[start..end], "serveHtpp");
    }

    #[test]
    fn block_comment_skips_star_leaders() {
        let block = "/*\n * serveHtpp handles traffic\n */";
        let (text, start, end) = extract(block).unwrap();
        assert_eq!(text, "serveHtpp");
        assert_eq!(&block[start..end], "serveHtpp");
    }

    #[test]
    fn skips_labels_with_and_without_colon() {
        let t = first_identifier_like("// Deprecated: use newThing instead").unwrap();
        assert_eq!(t.text, "use");
        let t = first_identifier_like("// TODO remove after migration").unwrap();
        assert_eq!(t.text, "remove");
    }

    #[test]
    fn label_only_line_yields_next_word() {
        // "note:" is skipped; the following word becomes the token.
        let t = first_identifier_like("// note: helper for tests").unwrap();
        assert_eq!(t.text, "helper");
    }

    #[test]
    fn dotted_word_yields_leading_component() {
        let block = "// foo.Bar is weird";
        let (text, start, end) = extract(block).unwrap();
        assert_eq!(text, "foo");
        assert_eq!(&block[start..end], "foo");
    }

    #[test]
    fn leading_dot_word_yields_identifier_after_trim() {
        let t = first_identifier_like("// .Hello starts with dot").unwrap();
        assert_eq!(t.text, "Hello");
    }

    #[test]
    fn pointer_markers_are_stripped() {
        let block = "// *Conn wraps a connection";
        let (text, start, end) = extract(block).unwrap();
        assert_eq!(text, "Conn");
        assert_eq!(&block[start..end], "Conn");
    }

    #[test]
    fn empty_and_marker_only_blocks() {
        assert!(first_identifier_like("").is_none());
        assert!(first_identifier_like("//").is_none());
        assert!(first_identifier_like("//   ").is_none());
        assert!(first_identifier_like("/* */").is_none());
        assert!(first_identifier_like("// ---").is_none());
    }

    #[test]
    fn first_non_empty_line_wins() {
        let block = "//\n// second line here";
        // The second physical line still carries its own marker, which is not
        // an identifier, so extraction stops without a token.
        assert!(extract(block).is_none());
    }

    #[test]
    fn trimmed_line_is_reported() {
        let t = first_identifier_like("//   serveHTTP handles requests  ").unwrap();
        assert_eq!(t.line, "serveHTTP handles requests");
    }

    #[test]
    fn punctuation_stops_the_run() {
        let t = first_identifier_like("// doThing(x) does a thing").unwrap();
        assert_eq!(t.text, "doThing");
        let t = first_identifier_like("// half-open ranges").unwrap();
        assert_eq!(t.text, "half");
    }
}
