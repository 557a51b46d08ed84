//! Benchmarks for the analysis pipeline
//!
//! Measures parser chain throughput and full two-phase analysis over
//! synthetic projects of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use importcheck::analysis::{analyze_project, AnalyzerConfig};
use importcheck::parser::ParserChain;
use importcheck::project::SourceFile;

/// Builds a synthetic project: a chain of modules where each file imports
/// two symbols from its predecessor (one of which does not exist, so the
/// resolve phase has real work to do).
fn synthetic_project(files: usize) -> Vec<SourceFile> {
    let mut project = Vec::with_capacity(files);
    project.push(SourceFile::new(
        "mod0.js",
        "export function step0() {}\nexport const value0 = 0;\n",
    ));

    for i in 1..files {
        let text = format!(
            "import {{ step{prev}, gone{prev} }} from \"./mod{prev}.js\";\n\
             export function step{i}() {{}}\nexport const value{i} = {i};\n",
            prev = i - 1,
            i = i
        );
        project.push(SourceFile::new(format!("mod{}.js", i), text));
    }

    project
}

/// Benchmark the parser chain on a single clean file.
fn bench_parser_chain(c: &mut Criterion) {
    let clean = "export function foo() {}\nimport { bar } from \"./bar.js\";\n".repeat(50);
    let degraded = format!("{}function (\n", clean);

    let mut group = c.benchmark_group("parser_chain");

    group.bench_function("clean_first_backend", |b| {
        let mut chain = ParserChain::new().unwrap();
        b.iter(|| black_box(chain.parse(&clean).is_ok()));
    });

    group.bench_function("degraded_falls_to_lenient", |b| {
        let mut chain = ParserChain::new().unwrap();
        b.iter(|| black_box(chain.parse(&degraded).is_ok()));
    });

    group.finish();
}

/// Benchmark the full two-phase analysis.
fn bench_analyze_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_project");
    let config = AnalyzerConfig::default();

    for size in [10, 50, 200].iter() {
        let files = synthetic_project(*size);

        group.bench_with_input(BenchmarkId::new("files", size), &files, |b, files| {
            b.iter(|| black_box(analyze_project(files, &config).diagnostics.len()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parser_chain, bench_analyze_project);
criterion_main!(benches);
