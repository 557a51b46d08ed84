use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use importcheck::analysis::{analyze_project, AnalyzerConfig};
use importcheck::export::{self, ExportFormat};
use importcheck::project::load_project;

#[derive(Parser)]
#[command(name = "importcheck")]
#[command(version = "0.1.0")]
#[command(about = "Static import/export cross-checker for JavaScript and TypeScript projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check imports against exports in a project
    Check {
        /// Path to the project root (defaults to current directory)
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Output format (text, json, markdown)
        #[arg(short, long, default_value = "text")]
        format: ExportFormat,

        /// Extension appended to extensionless relative imports
        #[arg(short, long, default_value = "js")]
        extension: String,
    },
    /// Show version information
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Check {
            path,
            format,
            extension,
        }) => match run_check(path, *format, extension) {
            Ok(clean) => {
                if clean {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                }
            }
            Err(err) => {
                eprintln!("Error: {:#}", err);
                ExitCode::from(2)
            }
        },
        Some(Commands::Version) => {
            println!("importcheck v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        None => {
            println!("importcheck - Static import/export cross-checker");
            println!("Run 'importcheck check' to analyze the current directory");
            println!("Run 'importcheck --help' for more information");
            ExitCode::SUCCESS
        }
    }
}

/// Loads the project, runs the analysis, and prints the report.
///
/// Returns `Ok(true)` when no error-severity diagnostics were produced.
fn run_check(path: &PathBuf, format: ExportFormat, extension: &str) -> anyhow::Result<bool> {
    let files = load_project(path)
        .with_context(|| format!("failed to enumerate {}", path.display()))?;

    let mut config = AnalyzerConfig::default();
    config.resolver.default_extension = extension.to_string();

    let analysis = analyze_project(&files, &config);

    let stdout = std::io::stdout();
    export::export(format, &analysis, &mut stdout.lock()).context("failed to write report")?;

    Ok(!analysis.has_errors())
}
