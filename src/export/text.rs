//! Plain-text export implementation.
//!
//! The default CLI output: one line per diagnostic, a summary, and the
//! per-file table of which parser backend accepted each module.

use super::Exporter;
use crate::analysis::Analysis;
use std::io::{self, Write};

/// Text exporter implementation.
pub struct TextExporter;

impl Exporter for TextExporter {
    fn export<W: Write>(&self, analysis: &Analysis, writer: &mut W) -> io::Result<()> {
        for diagnostic in &analysis.diagnostics {
            writeln!(writer, "{}", diagnostic)?;
        }

        if !analysis.diagnostics.is_empty() {
            writeln!(writer)?;
        }

        writeln!(writer, "=== Summary ===")?;
        writeln!(writer, "Modules analyzed: {}", analysis.graph.len())?;
        if analysis.diagnostics.is_empty() {
            writeln!(writer, "No import/export issues found")?;
        } else {
            writeln!(
                writer,
                "Issues found: {} ({} errors, {} warnings)",
                analysis.diagnostics.len(),
                analysis.error_count(),
                analysis.warning_count()
            )?;
        }

        let backends = analysis.backends_used();
        if !backends.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "Parser backends used:")?;
            for (path, backend) in backends {
                writeln!(writer, "  {}: {}", path, backend)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze_project, AnalyzerConfig};
    use crate::export::{export_to_string, ExportFormat};
    use crate::project::SourceFile;

    fn sample_analysis() -> Analysis {
        let files = vec![
            SourceFile::new("a.js", "export function foo() {}\n"),
            SourceFile::new("b.js", "import { foo, bar } from \"./a.js\";\n"),
        ];
        analyze_project(&files, &AnalyzerConfig::default())
    }

    #[test]
    fn test_text_export_contains_diagnostic_and_summary() {
        let output = export_to_string(ExportFormat::Text, &sample_analysis()).unwrap();
        assert!(output.contains("imports 'bar' from './a.js'"));
        assert!(output.contains("Modules analyzed: 2"));
        assert!(output.contains("Issues found: 1 (1 errors, 0 warnings)"));
        assert!(output.contains("a.js: typescript"));
    }

    #[test]
    fn test_text_export_clean_project() {
        let files = vec![SourceFile::new("a.js", "export const x = 1;\n")];
        let analysis = analyze_project(&files, &AnalyzerConfig::default());
        let output = export_to_string(ExportFormat::Text, &analysis).unwrap();
        assert!(output.contains("No import/export issues found"));
    }
}
