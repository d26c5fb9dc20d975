//! Go front end: declaration and doc-block enumeration via tree-sitter.
//!
//! Produces one record per documented function, method, type spec, and
//! interface method. A doc block is the contiguous run of line-leading
//! comments whose last line sits immediately above the declaration; its raw
//! text and byte offset are handed to the engine untouched so replacement
//! spans translate directly back into file offsets.

use std::collections::HashMap;
use std::path::Path;

use tree_sitter::{Node, Parser};

use docdrift_core::{DeclarationRecord, SymbolKind};

use super::FilePosition;
use crate::errors::ParseError;

pub struct GoFrontend {
    parser: Parser,
}

impl GoFrontend {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        let language = tree_sitter_go::LANGUAGE;
        parser
            .set_language(&language.into())
            .map_err(|e| ParseError::Language(e.to_string()))?;
        Ok(Self { parser })
    }

    /// Enumerates documented declarations in one Go source file.
    pub fn declarations(
        &mut self,
        path: &Path,
        source: &str,
    ) -> Result<Vec<DeclarationRecord<FilePosition>>, ParseError> {
        let tree = self.parser.parse(source, None).ok_or_else(|| ParseError::Parse {
            path: path.to_path_buf(),
        })?;
        let root = tree.root_node();

        let comments = CommentIndex::build(root, source);
        let generated = is_generated_file(source);
        let path_text = path.display().to_string();

        let mut sink = RecordSink {
            source,
            path: &path_text,
            generated,
            records: Vec::new(),
        };

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "function_declaration" | "method_declaration" => {
                    if let Some(group) = comments.doc_for_row(child.start_position().row) {
                        sink.push(&child, SymbolKind::Function, group);
                    }
                }
                "type_declaration" => {
                    collect_type_specs(&child, &comments, &mut sink);
                }
                _ => {}
            }
        }
        Ok(sink.records)
    }
}

/// Accumulates records, resolving names and positions from nodes.
struct RecordSink<'a> {
    source: &'a str,
    path: &'a str,
    generated: bool,
    records: Vec<DeclarationRecord<FilePosition>>,
}

impl RecordSink<'_> {
    fn push(&mut self, decl: &Node, kind: SymbolKind, group: &CommentGroup) {
        let Some(name_node) = decl.child_by_field_name("name") else {
            return;
        };
        let Ok(name) = name_node.utf8_text(self.source.as_bytes()) else {
            return;
        };
        if name.is_empty() {
            return;
        }
        let start = name_node.start_position();
        self.records.push(DeclarationRecord {
            name: name.to_string(),
            exported: is_exported(name),
            kind,
            doc: self.source[group.start_byte..group.end_byte].to_string(),
            doc_offset: group.start_byte,
            position: FilePosition {
                path: self.path.to_string(),
                line: start.row + 1,
                column: start.column + 1,
            },
            generated: self.generated,
        });
    }
}

/// Walks the specs of a `type` declaration. A spec's own doc group wins;
/// otherwise the enclosing declaration's group applies, as with
/// `type Foo struct{}` under a single comment.
fn collect_type_specs(decl: &Node, comments: &CommentIndex, sink: &mut RecordSink) {
    let decl_doc = comments.doc_for_row(decl.start_position().row);
    let mut cursor = decl.walk();
    for spec in decl.named_children(&mut cursor) {
        if !matches!(spec.kind(), "type_spec" | "type_alias") {
            continue;
        }
        let doc = comments
            .doc_for_row(spec.start_position().row)
            .or(decl_doc);
        if let Some(group) = doc {
            sink.push(&spec, SymbolKind::Type, group);
        }
        if let Some(type_node) = spec.child_by_field_name("type") {
            if type_node.kind() == "interface_type" {
                collect_interface_methods(&type_node, comments, sink);
            }
        }
    }
}

/// Interface method specs carry their own doc group, or failing that a
/// trailing comment on the same line.
fn collect_interface_methods(iface: &Node, comments: &CommentIndex, sink: &mut RecordSink) {
    let mut cursor = iface.walk();
    for member in iface.named_children(&mut cursor) {
        if !matches!(member.kind(), "method_elem" | "method_spec") {
            continue;
        }
        let doc = comments
            .doc_for_row(member.start_position().row)
            .or_else(|| comments.trailing_for_row(member.end_position().row));
        if let Some(group) = doc {
            sink.push(&member, SymbolKind::InterfaceMethod, group);
        }
    }
}

/// A contiguous run of comments, in source order.
#[derive(Debug, Clone, Copy)]
struct CommentGroup {
    start_byte: usize,
    end_byte: usize,
    end_row: usize,
}

/// All comments of a file, indexed for doc-group lookup.
struct CommentIndex {
    groups: Vec<CommentGroup>,
    by_end_row: HashMap<usize, usize>,
    trailing_by_row: HashMap<usize, usize>,
}

impl CommentIndex {
    fn build(root: Node, source: &str) -> Self {
        let line_starts = line_starts(source);
        let mut comments = Vec::new();
        collect_comments(root, &mut comments);

        let mut index = Self {
            groups: Vec::new(),
            by_end_row: HashMap::new(),
            trailing_by_row: HashMap::new(),
        };
        let mut open_group: Option<usize> = None;

        for node in comments {
            let start = node.start_position();
            let end = node.end_position();
            let group = CommentGroup {
                start_byte: node.start_byte(),
                end_byte: node.end_byte(),
                end_row: end.row,
            };
            let leading = line_starts
                .get(start.row)
                .map(|&line_start| {
                    source[line_start..node.start_byte()]
                        .bytes()
                        .all(|b| b == b' ' || b == b'\t')
                })
                .unwrap_or(false);

            if !leading {
                let idx = index.add_group(group);
                index.trailing_by_row.insert(start.row, idx);
                continue;
            }

            // Extend the open group when the comment starts on the very next
            // line; a blank line or interleaved code breaks the run.
            let extends = open_group
                .filter(|&i| index.groups[i].end_row + 1 == start.row);
            match extends {
                Some(i) => {
                    let prev_end_row = index.groups[i].end_row;
                    index.groups[i].end_byte = node.end_byte();
                    index.groups[i].end_row = end.row;
                    index.by_end_row.remove(&prev_end_row);
                    index.by_end_row.insert(end.row, i);
                }
                None => {
                    let idx = index.add_group(group);
                    index.by_end_row.insert(end.row, idx);
                    open_group = Some(idx);
                }
            }
        }
        index
    }

    fn add_group(&mut self, group: CommentGroup) -> usize {
        self.groups.push(group);
        self.groups.len() - 1
    }

    /// The doc group for a declaration starting on `row`: the group whose
    /// last line is the line immediately above.
    fn doc_for_row(&self, row: usize) -> Option<&CommentGroup> {
        if row == 0 {
            return None;
        }
        self.by_end_row.get(&(row - 1)).map(|&i| &self.groups[i])
    }

    fn trailing_for_row(&self, row: usize) -> Option<&CommentGroup> {
        self.trailing_by_row.get(&row).map(|&i| &self.groups[i])
    }
}

fn collect_comments<'tree>(node: Node<'tree>, out: &mut Vec<Node<'tree>>) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "comment" {
            out.push(child);
        }
        collect_comments(child, out);
    }
}

fn line_starts(source: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, b) in source.bytes().enumerate() {
        if b == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}

/// Go convention: exported names start with an uppercase letter.
fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_uppercase())
}

/// Go convention for generated files: a line comment
/// `// Code generated ... DO NOT EDIT.` at the start of a line.
fn is_generated_file(source: &str) -> bool {
    source.lines().any(|line| {
        line.starts_with("// Code generated ")
            && line.ends_with(" DO NOT EDIT.")
            && line.len() >= "// Code generated ".len() + " DO NOT EDIT.".len()
    })
}
