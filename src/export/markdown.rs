//! Markdown export implementation.
//!
//! Exports analysis results in Markdown format for documentation and reporting.

use super::Exporter;
use crate::analysis::Analysis;
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, analysis: &Analysis, writer: &mut W) -> io::Result<()> {
        // Title
        writeln!(writer, "# Import Check Report")?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Count |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Modules Analyzed | {} |", analysis.graph.len())?;
        writeln!(writer, "| Errors | {} |", analysis.error_count())?;
        writeln!(writer, "| Warnings | {} |", analysis.warning_count())?;
        writeln!(writer)?;

        // Findings
        if !analysis.diagnostics.is_empty() {
            writeln!(writer, "## Findings")?;
            writeln!(writer)?;
            writeln!(writer, "| Severity | File | Line | Message |")?;
            writeln!(writer, "|----------|------|------|---------|")?;
            for diagnostic in &analysis.diagnostics {
                let line = diagnostic
                    .line
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "-".to_string());
                writeln!(
                    writer,
                    "| {} | {} | {} | {} |",
                    diagnostic.severity, diagnostic.file, line, diagnostic.message
                )?;
            }
            writeln!(writer)?;
        }

        // Parser backends
        let backends = analysis.backends_used();
        if !backends.is_empty() {
            writeln!(writer, "## Parser Backends")?;
            writeln!(writer)?;
            writeln!(writer, "| Module | Backend |")?;
            writeln!(writer, "|--------|---------|")?;
            for (path, backend) in backends {
                writeln!(writer, "| {} | {} |", path, backend)?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::analysis::{analyze_project, AnalyzerConfig};
    use crate::export::{export_to_string, ExportFormat};
    use crate::project::SourceFile;

    #[test]
    fn test_markdown_export_sections() {
        let files = vec![
            SourceFile::new("a.js", "export const x = 1;\n"),
            SourceFile::new("b.js", "import { y } from \"./a.js\";\n"),
        ];
        let analysis = analyze_project(&files, &AnalyzerConfig::default());
        let output = export_to_string(ExportFormat::Markdown, &analysis).unwrap();

        assert!(output.contains("# Import Check Report"));
        assert!(output.contains("| Modules Analyzed | 2 |"));
        assert!(output.contains("## Findings"));
        assert!(output.contains("| error | b.js | 1 |"));
        assert!(output.contains("## Parser Backends"));
    }

    #[test]
    fn test_markdown_export_omits_empty_findings() {
        let files = vec![SourceFile::new("a.js", "export const x = 1;\n")];
        let analysis = analyze_project(&files, &AnalyzerConfig::default());
        let output = export_to_string(ExportFormat::Markdown, &analysis).unwrap();
        assert!(!output.contains("## Findings"));
    }
}
