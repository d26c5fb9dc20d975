//! Record and diagnostic types exchanged with drivers.

use serde::{Deserialize, Serialize};

/// Declaration kind, as classified by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolKind {
    Function,
    Type,
    InterfaceMethod,
}

/// One declaration together with its doc block, produced by a front end.
///
/// The position type `P` is opaque to the engine: it is stored unchanged and
/// passed through into the diagnostic.
#[derive(Debug, Clone)]
pub struct DeclarationRecord<P> {
    /// Symbol name as written in the source.
    pub name: String,
    /// Whether the declaration is exported.
    pub exported: bool,
    pub kind: SymbolKind,
    /// Raw text of the doc block, comment markers included.
    pub doc: String,
    /// Byte offset of the doc block within its file. The engine never
    /// interprets this; drivers use it to translate replacement spans back
    /// into file offsets.
    pub doc_offset: usize,
    /// Declaration position, passed through into the diagnostic.
    pub position: P,
    /// Whether the containing file is marked as generated.
    pub generated: bool,
}

/// Half-open byte range within a doc block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A span is usable as an edit target only when it is non-empty.
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Replacement edit covering exactly the extracted token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// Byte range within the doc block.
    pub span: Span,
    /// Replacement text: the symbol name, verbatim.
    pub text: String,
}

/// A single finding for one declaration record.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic<P> {
    pub position: P,
    pub message: String,
    pub replacement: Option<Replacement>,
}
