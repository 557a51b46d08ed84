//! Import/export analysis for module-style source files.
//!
//! This module holds the analyzer core: declaration extraction from parse
//! trees, canonical path resolution for relative specifiers, and the
//! two-phase pipeline that ties them together.
//!
//! # Features
//!
//! - Extract exported symbol names (named, aliased, destructured, default)
//! - Extract import requests in source order
//! - Resolve relative specifiers to canonical module keys
//! - Cross-check every import against the target module's export set
//!
//! # Example
//!
//! ```ignore
//! use importcheck::analysis::{analyze_project, AnalyzerConfig};
//! use importcheck::project::SourceFile;
//!
//! let files = vec![
//!     SourceFile::new("a.js", "export function foo() {}"),
//!     SourceFile::new("b.js", "import { foo, bar } from \"./a.js\";"),
//! ];
//! let analysis = analyze_project(&files, &AnalyzerConfig::default());
//! for diagnostic in &analysis.diagnostics {
//!     println!("{}", diagnostic);
//! }
//! ```

pub mod declarations;
pub mod pipeline;
pub mod resolver;

// Re-export main types for convenience
pub use declarations::{
    extract_declarations, ExtractError, FileDeclarations, ImportRequest, DEFAULT_EXPORT,
};
pub use pipeline::{analyze_project, Analysis, AnalyzerConfig};
pub use resolver::{resolve, Resolution, ResolveError, ResolverConfig};
