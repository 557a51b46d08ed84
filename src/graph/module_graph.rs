//! Module graph: canonical key to module record, plus a petgraph view.
//!
//! The graph is populated once during the gather phase and read-only during
//! the resolve phase. Records are write-once: the exported-symbol set is
//! finalized before any resolution reads it, which eliminates data races by
//! construction rather than by locking.

use std::collections::{HashMap, HashSet};

use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::analysis::{resolve, ImportRequest, Resolution, ResolverConfig};
use crate::parser::BackendId;

/// One analyzed module: its exports, its imports, and which backend parsed it.
///
/// A file that failed every parser backend has no record; its absence is
/// itself meaningful (imports of it report "module not found").
#[derive(Debug, Clone)]
pub struct ModuleRecord {
    /// Canonical project-relative path, the graph key.
    pub path: String,
    /// The backend that produced the parse tree (observability only).
    pub backend: BackendId,
    /// Exported symbol names, including the reserved `default`.
    pub exported_symbols: HashSet<String>,
    /// Import requests in source order.
    pub import_requests: Vec<ImportRequest>,
}

impl ModuleRecord {
    /// Creates a record with no declarations, used when extraction was
    /// downgraded after a traversal fault.
    pub fn empty(path: impl Into<String>, backend: BackendId) -> Self {
        Self {
            path: path.into(),
            backend,
            exported_symbols: HashSet::new(),
            import_requests: Vec::new(),
        }
    }

    /// Returns true if the module exports the given symbol name.
    pub fn exports(&self, name: &str) -> bool {
        self.exported_symbols.contains(name)
    }
}

/// Mapping from canonical module key to [`ModuleRecord`], preserving the
/// order in which files were supplied so diagnostic output is deterministic.
#[derive(Debug, Clone, Default)]
pub struct ModuleGraph {
    records: HashMap<String, ModuleRecord>,
    order: Vec<String>,
}

impl ModuleGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with pre-allocated capacity for `modules` records.
    pub fn with_capacity(modules: usize) -> Self {
        Self {
            records: HashMap::with_capacity(modules),
            order: Vec::with_capacity(modules),
        }
    }

    /// Inserts a record under its canonical key.
    ///
    /// Duplicate keys keep the first record; the snapshot supplied to one
    /// analysis run identifies files uniquely by path, so a duplicate means
    /// the enumeration itself repeated an entry.
    pub fn insert(&mut self, record: ModuleRecord) {
        if self.records.contains_key(&record.path) {
            return;
        }
        self.order.push(record.path.clone());
        self.records.insert(record.path.clone(), record);
    }

    /// Looks up a module by canonical key.
    pub fn get(&self, key: &str) -> Option<&ModuleRecord> {
        self.records.get(key)
    }

    /// Returns true if a record exists for the key.
    pub fn contains(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    /// Number of modules in the graph.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the graph holds no modules.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in insertion (input file) order.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleRecord> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Builds a petgraph view of resolved module-to-module edges.
    ///
    /// Edges point from the importing module to the module it imports.
    /// Unresolvable and external imports contribute no edge; missing target
    /// modules contribute no node. Intended for collaborators that want the
    /// structure rather than diagnostics (e.g. a file-tree annotator).
    pub fn dependency_graph(&self, config: &ResolverConfig) -> DiGraph<String, ()> {
        let mut graph = DiGraph::with_capacity(self.len(), self.len());
        let mut indices: HashMap<&str, NodeIndex> = HashMap::with_capacity(self.len());

        for key in &self.order {
            let index = graph.add_node(key.clone());
            indices.insert(key.as_str(), index);
        }

        for record in self.modules() {
            let from = indices[record.path.as_str()];
            for request in &record.import_requests {
                let resolved = resolve(&record.path, &request.specifier, config);
                if let Ok(Resolution::Module(key)) = resolved {
                    if let Some(&to) = indices.get(key.as_str()) {
                        graph.add_edge(from, to, ());
                    }
                }
            }
        }

        graph
    }

    /// Returns true if the resolved import structure contains a cycle.
    pub fn has_import_cycle(&self, config: &ResolverConfig) -> bool {
        is_cyclic_directed(&self.dependency_graph(config))
    }

    /// Returns the modules involved in import cycles, one list per strongly
    /// connected component of size greater than one.
    pub fn import_cycles(&self, config: &ResolverConfig) -> Vec<Vec<String>> {
        let graph = self.dependency_graph(config);
        tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|scc| scc.into_iter().map(|ix| graph[ix].clone()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, exports: &[&str], imports: &[(&str, &[&str])]) -> ModuleRecord {
        ModuleRecord {
            path: path.to_string(),
            backend: BackendId::TypeScript,
            exported_symbols: exports.iter().map(|s| s.to_string()).collect(),
            import_requests: imports
                .iter()
                .enumerate()
                .map(|(i, (specifier, names))| ImportRequest {
                    specifier: specifier.to_string(),
                    names: names.iter().map(|s| s.to_string()).collect(),
                    line: i + 1,
                })
                .collect(),
        }
    }

    // ===== Record Tests =====

    #[test]
    fn test_record_exports() {
        let record = record("a.js", &["foo", "default"], &[]);
        assert!(record.exports("foo"));
        assert!(record.exports("default"));
        assert!(!record.exports("bar"));
    }

    #[test]
    fn test_empty_record() {
        let record = ModuleRecord::empty("a.js", BackendId::Lenient);
        assert!(record.exported_symbols.is_empty());
        assert!(record.import_requests.is_empty());
        assert_eq!(record.backend, BackendId::Lenient);
    }

    // ===== Graph Tests =====

    #[test]
    fn test_insert_and_lookup() {
        let mut graph = ModuleGraph::new();
        graph.insert(record("src/a.js", &["foo"], &[]));

        assert_eq!(graph.len(), 1);
        assert!(graph.contains("src/a.js"));
        assert!(!graph.contains("src/b.js"));
        assert!(graph.get("src/a.js").unwrap().exports("foo"));
    }

    #[test]
    fn test_duplicate_key_keeps_first_record() {
        let mut graph = ModuleGraph::new();
        graph.insert(record("a.js", &["first"], &[]));
        graph.insert(record("a.js", &["second"], &[]));

        assert_eq!(graph.len(), 1);
        assert!(graph.get("a.js").unwrap().exports("first"));
    }

    #[test]
    fn test_modules_iterate_in_insertion_order() {
        let mut graph = ModuleGraph::new();
        graph.insert(record("c.js", &[], &[]));
        graph.insert(record("a.js", &[], &[]));
        graph.insert(record("b.js", &[], &[]));

        let order: Vec<_> = graph.modules().map(|r| r.path.as_str()).collect();
        assert_eq!(order, vec!["c.js", "a.js", "b.js"]);
    }

    // ===== Dependency View Tests =====

    #[test]
    fn test_dependency_graph_edges() {
        let config = ResolverConfig::default();
        let mut graph = ModuleGraph::new();
        graph.insert(record("src/a.js", &["foo"], &[]));
        graph.insert(record("src/b.js", &[], &[("./a.js", &["foo"][..])]));

        let deps = graph.dependency_graph(&config);
        assert_eq!(deps.node_count(), 2);
        assert_eq!(deps.edge_count(), 1);
    }

    #[test]
    fn test_external_imports_add_no_edges() {
        let config = ResolverConfig::default();
        let mut graph = ModuleGraph::new();
        graph.insert(record("a.js", &[], &[("react", &["default"][..])]));

        let deps = graph.dependency_graph(&config);
        assert_eq!(deps.node_count(), 1);
        assert_eq!(deps.edge_count(), 0);
    }

    #[test]
    fn test_cycle_detection() {
        let config = ResolverConfig::default();
        let mut graph = ModuleGraph::new();
        graph.insert(record("a.js", &["a"], &[("./b.js", &["b"][..])]));
        graph.insert(record("b.js", &["b"], &[("./a.js", &["a"][..])]));

        assert!(graph.has_import_cycle(&config));
        let cycles = graph.import_cycles(&config);
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), 2);
    }

    #[test]
    fn test_acyclic_graph() {
        let config = ResolverConfig::default();
        let mut graph = ModuleGraph::new();
        graph.insert(record("a.js", &["a"], &[]));
        graph.insert(record("b.js", &[], &[("./a.js", &["a"][..])]));

        assert!(!graph.has_import_cycle(&config));
        assert!(graph.import_cycles(&config).is_empty());
    }
}
