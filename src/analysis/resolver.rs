//! Canonical path resolution for relative module specifiers.
//!
//! Converts a raw specifier plus the importing file's project-relative path
//! into the canonical module key used by the module graph. Resolution is a
//! pure function of its inputs: it never inspects file existence (that is
//! decided later by presence or absence of a module record).

use thiserror::Error;

/// Resolution failure: the specifier walked past the project root.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("'{specifier}' escapes the project root (imported from {importer})")]
    EscapesRoot { importer: String, specifier: String },
}

/// Outcome of resolving one specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Non-relative specifier: an external package, exempt from checking.
    External,
    /// Same-project module, identified by its canonical key.
    Module(String),
}

/// Extension handling configuration, supplied at initialization.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Extension appended when a resolved path has no recognized one
    /// (without the leading dot).
    pub default_extension: String,
    /// Extensions recognized as module source files.
    pub recognized_extensions: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_extension: "js".to_string(),
            recognized_extensions: ["js", "mjs", "cjs", "jsx", "ts", "tsx"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ResolverConfig {
    /// Returns true if the path's final segment carries a recognized
    /// source-file extension.
    pub fn has_recognized_extension(&self, path: &str) -> bool {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => {
                self.recognized_extensions.iter().any(|e| e == ext)
            }
            _ => false,
        }
    }
}

/// Resolves `specifier` as written in `importer` to a canonical module key.
///
/// Non-relative specifiers resolve to [`Resolution::External`]. Relative
/// specifiers are walked segment by segment from the importer's directory:
/// `.` is a no-op, `..` pops one segment (popping past the root is an
/// error, not a silent no-op), anything else is pushed. The default
/// extension is appended only when no recognized extension is present, so
/// two specifiers written differently normalize to the same key.
pub fn resolve(
    importer: &str,
    specifier: &str,
    config: &ResolverConfig,
) -> Result<Resolution, ResolveError> {
    if !specifier.starts_with('.') {
        return Ok(Resolution::External);
    }

    // Directory of the importing file: every segment except the last.
    let mut segments: Vec<&str> = importer.split('/').collect();
    segments.pop();

    for part in specifier.split('/') {
        match part {
            "." | "" => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(ResolveError::EscapesRoot {
                        importer: importer.to_string(),
                        specifier: specifier.to_string(),
                    });
                }
            }
            _ => segments.push(part),
        }
    }

    let mut resolved = segments.join("/");
    if !config.has_recognized_extension(&resolved) {
        resolved.push('.');
        resolved.push_str(&config.default_extension);
    }

    Ok(Resolution::Module(resolved))
}
