//! Project snapshot loading.
//!
//! Supplies the analyzer with its input: the full set of `(path, text)`
//! pairs for one project, with paths normalized to project-relative `/`
//! separated keys. The analyzer core never touches the filesystem itself;
//! this module is the local-directory collaborator that feeds it.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

/// One source file supplied to the analyzer.
///
/// Immutable once loaded; identified by its project-relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Project-relative path with `/` separators, the canonical key.
    pub path: String,
    /// Raw file text.
    pub text: String,
}

impl SourceFile {
    /// Creates a source file from a path and its text.
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// Extensions treated as module-style source files.
///
/// Only files carrying one of these enter the analyzer at all; everything
/// else in the tree is ignored.
pub const MODULE_EXTENSIONS: [&str; 6] = ["js", "mjs", "cjs", "jsx", "ts", "tsx"];

/// Returns true if the path carries a module source extension.
pub fn is_module_source(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            MODULE_EXTENSIONS.iter().any(|e| *e == ext)
        })
        .unwrap_or(false)
}

/// Loads every module source file under `root`, in directory-walk order.
///
/// Ignored directories (build output, vendored packages) are skipped
/// entirely. Files that cannot be read as UTF-8 text are skipped with a
/// warning on stderr rather than aborting the walk; the analyzer treats the
/// supplied set as the complete snapshot.
pub fn load_project(root: &Path) -> std::io::Result<Vec<SourceFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_ignored_dir(e))
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_dir() || !is_module_source(path) {
            continue;
        }

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("Warning: skipping {}: {}", path.display(), err);
                continue;
            }
        };

        files.push(SourceFile {
            path: relative_key(root, path),
            text,
        });
    }

    Ok(files)
}

/// Normalizes an on-disk path to a project-relative `/` separated key.
fn relative_key(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut key = String::new();
    for component in relative.components() {
        if !key.is_empty() {
            key.push('/');
        }
        key.push_str(&component.as_os_str().to_string_lossy());
    }
    key
}

/// Check if a directory should be ignored during traversal.
fn is_ignored_dir(entry: &walkdir::DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    matches!(
        name.as_ref(),
        "node_modules" | ".git" | "dist" | "build" | ".next" | "coverage" | ".turbo"
    )
}
