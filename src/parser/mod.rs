//! Parsing backends for module source text.
//!
//! Files are parsed through a chain of tree-sitter grammars of decreasing
//! strictness; see [`chain`] for the fallback rules. The chain reports which
//! backend accepted each file so degraded parses are visible in summaries.
//!
//! # Example
//!
//! ```ignore
//! use importcheck::parser::ParserChain;
//!
//! let mut chain = ParserChain::new()?;
//! let parsed = chain.parse("export const a = 1;")?;
//! println!("parsed by {}", parsed.backend);
//! ```

pub mod chain;

// Re-export commonly used types for convenience
pub use chain::{
    BackendId, ParseError, ParseResult, ParsedSource, ParserChain, DEFAULT_BACKENDS,
};
