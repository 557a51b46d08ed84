//! Module graph for import/export relationship modeling.
//!
//! Maps canonical module keys to their records and offers a petgraph view
//! of the resolved import structure for collaborators that want edges
//! rather than diagnostics.
//!
//! # Example
//!
//! ```ignore
//! use importcheck::graph::{ModuleGraph, ModuleRecord};
//! use importcheck::parser::BackendId;
//!
//! let mut graph = ModuleGraph::new();
//! graph.insert(ModuleRecord::empty("src/a.js", BackendId::TypeScript));
//! assert!(graph.contains("src/a.js"));
//! ```

mod module_graph;

pub use module_graph::{ModuleGraph, ModuleRecord};
