//! Two-phase analysis orchestration.
//!
//! The gather phase parses every supplied file and extracts its declarations;
//! each file is independent, so the phase runs across rayon workers with one
//! parser chain per worker. Collecting the results is the one mandatory
//! synchronization point: no import is checked until every export set is
//! known, so forward references resolve correctly regardless of file order.
//! The resolve phase then runs once over the completed, immutable graph.

use rayon::prelude::*;

use crate::analysis::declarations::extract_declarations;
use crate::analysis::resolver::ResolverConfig;
use crate::graph::{ModuleGraph, ModuleRecord};
use crate::parser::{BackendId, ParserChain, DEFAULT_BACKENDS};
use crate::project::SourceFile;
use crate::report::{check_modules, Diagnostic};

/// Analyzer configuration, supplied once at initialization.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Ordered parser backend chain.
    pub backends: Vec<BackendId>,
    /// Path resolution settings.
    pub resolver: ResolverConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            backends: DEFAULT_BACKENDS.to_vec(),
            resolver: ResolverConfig::default(),
        }
    }
}

/// The result of one analysis run: the completed module graph and the full
/// diagnostic sequence. Owned by the caller; nothing outlives the run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub graph: ModuleGraph,
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    /// Number of error-severity diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Number of warning-severity diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }

    /// Returns true if any error-severity diagnostic was produced.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error())
    }

    /// Which backend parsed each module, in input order.
    pub fn backends_used(&self) -> Vec<(&str, BackendId)> {
        self.graph
            .modules()
            .map(|record| (record.path.as_str(), record.backend))
            .collect()
    }
}

/// Per-file gather result: a record unless every backend failed, plus any
/// diagnostics raised on the way.
struct GatheredFile {
    record: Option<ModuleRecord>,
    diagnostics: Vec<Diagnostic>,
}

/// Runs the full two-phase analysis over one project snapshot.
///
/// The file set must be complete before the call: the analyzer does not
/// stream files incrementally. One malformed file never prevents analysis of
/// the rest of the batch.
pub fn analyze_project(files: &[SourceFile], config: &AnalyzerConfig) -> Analysis {
    // Gather phase. `collect` is the barrier between the phases.
    let gathered: Vec<GatheredFile> = files
        .par_iter()
        .map_init(
            || ParserChain::with_backends(&config.backends),
            |chain, file| match chain {
                Ok(chain) => gather_file(chain, file),
                Err(err) => GatheredFile {
                    record: None,
                    diagnostics: vec![Diagnostic::parse_failure(&file.path, &*err)],
                },
            },
        )
        .collect();

    let mut graph = ModuleGraph::with_capacity(files.len());
    let mut diagnostics = Vec::new();
    for file in gathered {
        diagnostics.extend(file.diagnostics);
        if let Some(record) = file.record {
            graph.insert(record);
        }
    }

    // Resolve phase, over the now read-only graph.
    diagnostics.extend(check_modules(&graph, &config.resolver));

    Analysis { graph, diagnostics }
}

/// Parses one file and extracts its declarations.
fn gather_file(chain: &mut ParserChain, file: &SourceFile) -> GatheredFile {
    let parsed = match chain.parse(&file.text) {
        Ok(parsed) => parsed,
        Err(err) => {
            // All backends rejected the text: no record, one diagnostic.
            return GatheredFile {
                record: None,
                diagnostics: vec![Diagnostic::parse_failure(&file.path, err)],
            };
        }
    };

    match extract_declarations(&parsed.tree, &file.text) {
        Ok(decls) => GatheredFile {
            record: Some(ModuleRecord {
                path: file.path.clone(),
                backend: parsed.backend,
                exported_symbols: decls.exports,
                import_requests: decls.imports,
            }),
            diagnostics: Vec::new(),
        },
        Err(fault) => GatheredFile {
            record: Some(ModuleRecord::empty(&file.path, parsed.backend)),
            diagnostics: vec![Diagnostic::traversal_fault(&file.path, fault)],
        },
    }
}
