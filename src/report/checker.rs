//! Import cross-check over a completed module graph.
//!
//! This is the resolve phase: a pure consumer that runs only after the
//! gather phase has populated every record. It reads the now-immutable graph
//! and produces diagnostics ordered by file, then import statement, then
//! symbol within a statement. Idempotent, no I/O.

use rayon::prelude::*;

use crate::analysis::{resolve, Resolution, ResolverConfig};
use crate::graph::{ModuleGraph, ModuleRecord};
use crate::report::Diagnostic;

/// Checks every import request in the graph against the export sets.
///
/// Files are checked in parallel; rayon's order-preserving collect keeps the
/// merged sequence deterministic.
pub fn check_modules(graph: &ModuleGraph, config: &ResolverConfig) -> Vec<Diagnostic> {
    let records: Vec<&ModuleRecord> = graph.modules().collect();

    let per_file: Vec<Vec<Diagnostic>> = records
        .par_iter()
        .map(|record| check_record(record, graph, config))
        .collect();

    per_file.into_iter().flatten().collect()
}

/// Cross-checks one module's imports, in statement order.
fn check_record(
    record: &ModuleRecord,
    graph: &ModuleGraph,
    config: &ResolverConfig,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for request in &record.import_requests {
        let key = match resolve(&record.path, &request.specifier, config) {
            Ok(Resolution::External) => continue,
            Ok(Resolution::Module(key)) => key,
            Err(err) => {
                // Treated as unresolved, never as a crash.
                diagnostics.push(Diagnostic::unresolvable_path(
                    &record.path,
                    err,
                    request.line,
                ));
                continue;
            }
        };

        let target = match graph.get(&key) {
            Some(target) => target,
            None => {
                // Absent record: the file was never supplied or failed to
                // parse. One diagnostic per request, none per symbol.
                diagnostics.push(Diagnostic::module_not_found(
                    &record.path,
                    &request.specifier,
                    &key,
                    request.line,
                ));
                continue;
            }
        };

        for name in &request.names {
            if !target.exports(name) {
                diagnostics.push(Diagnostic::symbol_not_exported(
                    &record.path,
                    name,
                    &request.specifier,
                    &key,
                    request.line,
                ));
            }
        }
    }

    diagnostics
}
