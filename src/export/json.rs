//! JSON export implementation.
//!
//! Exports analysis results in JSON format for machine-readable output.

use super::Exporter;
use crate::analysis::Analysis;
use crate::report::Diagnostic;
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Serializable module record for JSON output.
#[derive(Serialize)]
struct JsonModule {
    path: String,
    backend: String,
    exports: Vec<String>,
    imports: usize,
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    modules: usize,
    diagnostics: usize,
    errors: usize,
    warnings: usize,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    summary: JsonSummary,
    diagnostics: &'a [Diagnostic],
    modules: Vec<JsonModule>,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, analysis: &Analysis, writer: &mut W) -> io::Result<()> {
        let modules: Vec<JsonModule> = analysis
            .graph
            .modules()
            .map(|record| {
                let mut exports: Vec<String> =
                    record.exported_symbols.iter().cloned().collect();
                // Export sets are unordered; sort for stable output.
                exports.sort();
                JsonModule {
                    path: record.path.clone(),
                    backend: record.backend.label().to_string(),
                    exports,
                    imports: record.import_requests.len(),
                }
            })
            .collect();

        let export = JsonExport {
            summary: JsonSummary {
                modules: analysis.graph.len(),
                diagnostics: analysis.diagnostics.len(),
                errors: analysis.error_count(),
                warnings: analysis.warning_count(),
            },
            diagnostics: &analysis.diagnostics,
            modules,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use crate::analysis::{analyze_project, AnalyzerConfig};
    use crate::export::{export_to_string, ExportFormat};
    use crate::project::SourceFile;

    #[test]
    fn test_json_export_structure() {
        let files = vec![
            SourceFile::new("a.js", "export function foo() {}\nexport const bar = 1;\n"),
            SourceFile::new("b.js", "import { foo, missing } from \"./a.js\";\n"),
        ];
        let analysis = analyze_project(&files, &AnalyzerConfig::default());
        let output = export_to_string(ExportFormat::Json, &analysis).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["summary"]["modules"], 2);
        assert_eq!(value["summary"]["errors"], 1);
        assert_eq!(value["diagnostics"][0]["symbol"], "missing");
        assert_eq!(value["modules"][0]["path"], "a.js");
        // Sorted export list keeps the output reproducible.
        assert_eq!(value["modules"][0]["exports"][0], "bar");
        assert_eq!(value["modules"][0]["exports"][1], "foo");
    }

    #[test]
    fn test_json_export_is_idempotent() {
        let files = vec![SourceFile::new(
            "a.js",
            "export const z = 1;\nexport const a = 2;\n",
        )];
        let analysis = analyze_project(&files, &AnalyzerConfig::default());
        let first = export_to_string(ExportFormat::Json, &analysis).unwrap();
        let second = export_to_string(ExportFormat::Json, &analysis).unwrap();
        assert_eq!(first, second);
    }
}
