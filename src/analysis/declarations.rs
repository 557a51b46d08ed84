//! Declaration extraction from parsed module source.
//!
//! Walks one successful parse tree and produces the set of exported symbol
//! names plus the ordered list of import requests for that file. The walk is
//! backend-agnostic: every grammar in the parser chain encodes the same
//! module constructs, so a single set of extraction rules covers all of them.

use std::collections::HashSet;

use thiserror::Error;
use tree_sitter::{Node, Tree};

/// Reserved symbol name representing a module's default export.
///
/// Source declarations cannot legally be named `default`, so it never
/// collides with a real named export.
pub const DEFAULT_EXPORT: &str = "default";

/// A traversal fault: the tree references text outside the source bounds.
///
/// Can only arise from a severely malformed (error-recovered) tree. Callers
/// downgrade it to an empty record plus a warning diagnostic; it never aborts
/// the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("malformed {kind} node at line {line}: span outside source text")]
    MalformedNode { kind: String, line: usize },
}

/// One import statement as written in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    /// The raw module specifier (e.g. `react`, `./utils`, `../lib/core.js`).
    pub specifier: String,
    /// Imported symbol names as written at the import site. A default
    /// binding is recorded as [`DEFAULT_EXPORT`]; namespace and side-effect
    /// imports contribute zero checkable names.
    pub names: Vec<String>,
    /// Line number of the import statement (1-indexed).
    pub line: usize,
}

impl ImportRequest {
    /// Returns true if the specifier denotes a same-project module.
    pub fn is_relative(&self) -> bool {
        self.specifier.starts_with('.')
    }
}

/// Exported symbols and import requests extracted from one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDeclarations {
    /// Set of exported symbol names; duplicate declarations collapse.
    pub exports: HashSet<String>,
    /// Import requests in source order.
    pub imports: Vec<ImportRequest>,
}

/// Extracts exports and imports from a parse tree in a single traversal.
///
/// Traversal order is irrelevant to the result: exports form a set and
/// import order follows source order regardless of how the tree is walked.
pub fn extract_declarations(
    tree: &Tree,
    source: &str,
) -> Result<FileDeclarations, ExtractError> {
    let mut decls = FileDeclarations::default();
    visit(tree.root_node(), source, &mut decls)?;
    Ok(decls)
}

fn visit(node: Node, source: &str, decls: &mut FileDeclarations) -> Result<(), ExtractError> {
    match node.kind() {
        "export_statement" => collect_exports(node, source, &mut decls.exports)?,
        "import_statement" => {
            if let Some(request) = collect_import(node, source)? {
                decls.imports.push(request);
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, source, decls)?;
    }
    Ok(())
}

/// Applies the export extraction rules to one `export_statement`.
fn collect_exports(
    node: Node,
    source: &str,
    exports: &mut HashSet<String>,
) -> Result<(), ExtractError> {
    // Any `export default` form exports exactly the reserved name.
    let mut cursor = node.walk();
    if node.children(&mut cursor).any(|c| c.kind() == "default") {
        exports.insert(DEFAULT_EXPORT.to_string());
        return Ok(());
    }

    if let Some(decl) = node.child_by_field_name("declaration") {
        match decl.kind() {
            "lexical_declaration" | "variable_declaration" => {
                let mut cursor = decl.walk();
                for declarator in decl.named_children(&mut cursor) {
                    if declarator.kind() != "variable_declarator" {
                        continue;
                    }
                    if let Some(pattern) = declarator.child_by_field_name("name") {
                        collect_bindings(pattern, source, exports)?;
                    }
                }
            }
            // function, class, and the TypeScript declaration forms all
            // carry their identifier in the `name` field.
            _ => {
                if let Some(name) = decl.child_by_field_name("name") {
                    exports.insert(node_text(name, source)?.to_string());
                }
            }
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "export_clause" => {
                let mut specs = child.walk();
                for spec in child.named_children(&mut specs) {
                    if spec.kind() != "export_specifier" {
                        continue;
                    }
                    // `export { local as alias }` exports the alias, the
                    // external-facing name, not the local one.
                    let exported = spec
                        .child_by_field_name("alias")
                        .or_else(|| spec.child_by_field_name("name"));
                    if let Some(name) = exported {
                        exports.insert(specifier_text(name, source)?);
                    }
                }
            }
            "namespace_export" => {
                // `export * as ns from '...'` exports the single name `ns`.
                let mut names = child.walk();
                for name in child.named_children(&mut names) {
                    exports.insert(specifier_text(name, source)?);
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Collects every binding identifier from a declarator pattern, including
/// destructuring forms like `export const { a, b: [c] = [] } = obj`.
fn collect_bindings(
    node: Node,
    source: &str,
    exports: &mut HashSet<String>,
) -> Result<(), ExtractError> {
    match node.kind() {
        "identifier" | "shorthand_property_identifier_pattern" => {
            exports.insert(node_text(node, source)?.to_string());
        }
        // `{ key: binding }` only binds on the value side.
        "pair_pattern" => {
            if let Some(value) = node.child_by_field_name("value") {
                collect_bindings(value, source, exports)?;
            }
        }
        // `binding = default` only binds on the left.
        "assignment_pattern" | "object_assignment_pattern" => {
            if let Some(left) = node.child_by_field_name("left") {
                collect_bindings(left, source, exports)?;
            }
        }
        _ => {
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                collect_bindings(child, source, exports)?;
            }
        }
    }
    Ok(())
}

/// Builds an [`ImportRequest`] from one `import_statement`.
///
/// Returns `Ok(None)` for statements with no resolvable source string, which
/// only occur in error-recovered trees.
fn collect_import(node: Node, source: &str) -> Result<Option<ImportRequest>, ExtractError> {
    let source_node = match node.child_by_field_name("source") {
        Some(n) => n,
        None => return Ok(None),
    };
    let specifier = string_value(source_node, source)?;
    if specifier.is_empty() {
        return Ok(None);
    }

    let line = node.start_position().row + 1;
    let mut names = Vec::new();

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() != "import_clause" {
            continue;
        }
        let mut clause = child.walk();
        for spec in child.children(&mut clause) {
            match spec.kind() {
                // `import foo from '...'` binds the default export.
                "identifier" => names.push(DEFAULT_EXPORT.to_string()),
                "named_imports" => {
                    let mut entries = spec.walk();
                    for entry in spec.named_children(&mut entries) {
                        if entry.kind() != "import_specifier" {
                            continue;
                        }
                        // The imported name as written; the local alias is
                        // irrelevant to the cross-check.
                        if let Some(name) = entry.child_by_field_name("name") {
                            names.push(specifier_text(name, source)?);
                        }
                    }
                }
                // `import * as ns` is recorded with zero checkable names:
                // per-member validation of namespace imports is out of scope.
                "namespace_import" => {}
                _ => {}
            }
        }
    }

    Ok(Some(ImportRequest {
        specifier,
        names,
        line,
    }))
}

fn node_text<'a>(node: Node, source: &'a str) -> Result<&'a str, ExtractError> {
    source
        .get(node.start_byte()..node.end_byte())
        .ok_or_else(|| ExtractError::MalformedNode {
            kind: node.kind().to_string(),
            line: node.start_position().row + 1,
        })
}

/// Text of a specifier name node; string literals lose their quotes.
fn specifier_text(node: Node, source: &str) -> Result<String, ExtractError> {
    if node.kind() == "string" {
        return string_value(node, source);
    }
    Ok(node_text(node, source)?.to_string())
}

/// Extracts a string literal's value (removes surrounding quotes).
fn string_value(node: Node, source: &str) -> Result<String, ExtractError> {
    let text = node_text(node, source)?;
    let trimmed = text
        .trim_start_matches(['"', '\'', '`'])
        .trim_end_matches(['"', '\'', '`']);
    Ok(trimmed.to_string())
}
