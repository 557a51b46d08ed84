//! Layered parsing with graceful degradation.
//!
//! A [`ParserChain`] holds an ordered list of tree-sitter backends of
//! decreasing strictness. Each backend is tried in turn against the raw file
//! text; the first success wins and the succeeding backend is recorded for
//! observability. Only when every backend rejects the input does the chain
//! report a terminal failure, at which point callers must not guess partial
//! declarations from the text.

use thiserror::Error;
use tree_sitter::{Language, Parser, Point, Tree};

/// Errors produced by a single backend or by the chain as a whole.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{backend} rejected input: syntax error at line {line}, column {column}")]
    Syntax {
        backend: BackendId,
        line: usize,
        column: usize,
    },

    #[error("{backend} could not recover any module structure")]
    Unrecoverable { backend: BackendId },

    #[error("{backend} produced no parse tree")]
    Unavailable { backend: BackendId },

    #[error("tree-sitter language initialization failed")]
    LanguageInit,
}

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Identifies one parsing backend in the chain.
///
/// Ordering in [`DEFAULT_BACKENDS`] goes from the grammar with the widest
/// feature coverage down to the most tolerant one. The lenient backend
/// accepts trees containing error nodes, so declarations extracted from it
/// are best-effort for malformed input. That trade-off is deliberate: it
/// maximizes the number of files for which some structure can be recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum BackendId {
    /// TypeScript grammar, strict: any error node rejects the file.
    TypeScript,
    /// JavaScript grammar, strict.
    JavaScript,
    /// JavaScript grammar, tolerant: error nodes are accepted as long as at
    /// least one top-level construct was recovered.
    Lenient,
}

/// The default backend order: strict TypeScript, strict JavaScript, then the
/// error-recovering JavaScript pass.
pub const DEFAULT_BACKENDS: [BackendId; 3] =
    [BackendId::TypeScript, BackendId::JavaScript, BackendId::Lenient];

impl BackendId {
    /// Short label used in summaries and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            BackendId::TypeScript => "typescript",
            BackendId::JavaScript => "javascript",
            BackendId::Lenient => "javascript-lenient",
        }
    }

    /// Returns true if this backend accepts trees containing error nodes.
    pub fn is_lenient(&self) -> bool {
        matches!(self, BackendId::Lenient)
    }

    fn language(&self) -> Language {
        match self {
            BackendId::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            BackendId::JavaScript | BackendId::Lenient => {
                tree_sitter_javascript::LANGUAGE.into()
            }
        }
    }
}

impl std::fmt::Display for BackendId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A successful parse: the tree plus the backend that produced it.
///
/// Never persisted beyond the extraction step; the declaration extractor
/// consumes the tree and discards it.
#[derive(Debug)]
pub struct ParsedSource {
    pub backend: BackendId,
    pub tree: Tree,
}

/// An ordered chain of tree-sitter parsers tried against one file's text.
///
/// The chain owns one parser per backend (tree-sitter parsers are stateful
/// and `!Sync`, so parallel callers create one chain per worker). It has no
/// side effects beyond returning the outcome.
pub struct ParserChain {
    backends: Vec<(BackendId, Parser)>,
}

impl ParserChain {
    /// Creates a chain with the default backend order.
    pub fn new() -> ParseResult<Self> {
        Self::with_backends(&DEFAULT_BACKENDS)
    }

    /// Creates a chain with an explicit backend order.
    pub fn with_backends(ids: &[BackendId]) -> ParseResult<Self> {
        let mut backends = Vec::with_capacity(ids.len());
        for id in ids {
            let mut parser = Parser::new();
            parser
                .set_language(&id.language())
                .map_err(|_| ParseError::LanguageInit)?;
            backends.push((*id, parser));
        }
        Ok(Self { backends })
    }

    /// The configured backend order.
    pub fn backend_ids(&self) -> Vec<BackendId> {
        self.backends.iter().map(|(id, _)| *id).collect()
    }

    /// Tries each backend in order and returns the first success.
    ///
    /// On total failure the *last* backend's error is returned; error message
    /// content never influences which backend is tried next.
    pub fn parse(&mut self, text: &str) -> ParseResult<ParsedSource> {
        let mut last_error = ParseError::LanguageInit;

        for (id, parser) in &mut self.backends {
            match attempt(*id, parser, text) {
                Ok(tree) => {
                    return Ok(ParsedSource {
                        backend: *id,
                        tree,
                    })
                }
                Err(err) => last_error = err,
            }
        }

        Err(last_error)
    }
}

/// Runs one backend against the text and applies its acceptance rule.
fn attempt(id: BackendId, parser: &mut Parser, text: &str) -> ParseResult<Tree> {
    parser.reset();
    let tree = parser
        .parse(text, None)
        .ok_or(ParseError::Unavailable { backend: id })?;

    let root = tree.root_node();
    if !root.has_error() {
        return Ok(tree);
    }

    if id.is_lenient() {
        // Tolerant mode: keep the tree unless nothing at all was recovered.
        // The cursor borrows the tree, so it must go out of scope before the
        // tree is moved out.
        let recovered = {
            let mut cursor = root.walk();
            let mut children = root.named_children(&mut cursor);
            children.any(|child| !child.is_error())
        };
        if recovered {
            return Ok(tree);
        }
        return Err(ParseError::Unrecoverable { backend: id });
    }

    let point = first_error_position(&tree);
    Err(ParseError::Syntax {
        backend: id,
        line: point.row + 1,
        column: point.column,
    })
}

/// Locates the first error or missing node in a tree, depth-first.
fn first_error_position(tree: &Tree) -> Point {
    let root = tree.root_node();
    let mut cursor = root.walk();

    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return node.start_position();
        }
        // Only subtrees containing an error are worth descending into.
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return root.start_position();
            }
        }
    }
}
