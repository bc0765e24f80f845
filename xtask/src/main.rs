use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;
use vertexwalk::{GraphDescription, VertexGraph, VertexId};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "vertexwalk workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one traversal over a JSON graph description
    Walk(WalkArgs),
    /// Run the traversal benchmarks and summarize the results
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

#[derive(clap::Args)]
struct WalkArgs {
    /// Graph description file (`{"vertices": [{"value": 1, "neighbors": [..]}, ..]}`)
    graph: PathBuf,

    /// Traversal to run
    #[arg(long, value_enum)]
    op: Op,

    /// Start vertex index; omit for an absent start
    #[arg(long)]
    start: Option<usize>,

    /// End vertex index, used by `increasing-path`
    #[arg(long)]
    end: Option<usize>,

    /// Print a JSON report instead of plain text
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Op {
    Reachable,
    Print,
    Max,
    Leaves,
    AllOdd,
    IncreasingPath,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case", tag = "op", content = "result")]
enum Outcome {
    Reachable(Vec<usize>),
    Print(Vec<i64>),
    Max(Option<i64>),
    Leaves(Vec<usize>),
    AllOdd(bool),
    IncreasingPath(Option<Vec<usize>>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
            let parts: Vec<_> = items.iter().map(ToString::to_string).collect();
            write!(f, "[{}]", parts.join(", "))
        }

        match self {
            Outcome::Reachable(ids) | Outcome::Leaves(ids) => list(f, ids),
            Outcome::Print(values) => {
                for v in values {
                    writeln!(f, "{v}")?;
                }
                Ok(())
            }
            Outcome::Max(Some(v)) => write!(f, "{v}"),
            Outcome::Max(None) => f.write_str("none"),
            Outcome::AllOdd(odd) => write!(f, "{odd}"),
            Outcome::IncreasingPath(Some(path)) => list(f, path),
            Outcome::IncreasingPath(None) => f.write_str("no path"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Walk(args) => walk(&args)?,
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn walk(args: &WalkArgs) -> Result<()> {
    let text = fs::read_to_string(&args.graph)
        .with_context(|| format!("Failed to read {}", args.graph.display()))?;
    let description = GraphDescription::<i64>::from_json(&text)
        .with_context(|| format!("Invalid graph description in {}", args.graph.display()))?;

    let len = description.vertices.len();
    for (name, index) in [("start", args.start), ("end", args.end)] {
        if let Some(index) = index {
            if index >= len {
                bail!("{name} vertex {index} out of bounds for a graph of {len} vertices");
            }
        }
    }

    let outcome = VertexGraph::from_description(&description, |graph, ids| run_op(&graph, &ids, args))??;

    match outcome {
        outcome if args.json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        // One value per line, already newline-terminated.
        Outcome::Print(_) => print!("{outcome}"),
        outcome => println!("{outcome}"),
    }

    Ok(())
}

/// Runs the requested traversal.
fn run_op<'brand>(
    graph: &VertexGraph<'brand, i64>,
    ids: &[VertexId<'brand>],
    args: &WalkArgs,
) -> Result<Outcome> {
    let walk = graph.traversal();
    let start = args.start.map(|i| ids[i]);
    let end = args.end.map(|i| ids[i]);

    let sorted = |set: std::collections::HashSet<VertexId<'brand>>| {
        let mut v: Vec<_> = set.into_iter().map(VertexId::index).collect();
        v.sort_unstable();
        v
    };

    let outcome = match args.op {
        Op::Reachable => Outcome::Reachable(sorted(walk.reachable(start))),
        Op::Print => Outcome::Print(walk.dfs(start).map(|v| *graph.value(v)).collect()),
        Op::Max => Outcome::Max(walk.max(start).copied()),
        Op::Leaves => Outcome::Leaves(sorted(walk.leaves(start))),
        Op::AllOdd => Outcome::AllOdd(walk.all_odd(start)),
        Op::IncreasingPath => Outcome::IncreasingPath(
            walk.increasing_path(start, end)?
                .map(|path| path.into_iter().map(VertexId::index).collect()),
        ),
    };

    Ok(outcome)
}

const BENCH: &str = "traversal_benchmark";

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running traversal benchmarks...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", BENCH]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context(format!("Failed to run bench {BENCH}"))?;
    if !status.success() {
        bail!("Benchmark {BENCH} failed");
    }

    println!("Finished {} in {:.2?}", BENCH, start.elapsed());
    Ok(())
}

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

#[derive(Deserialize)]
struct BenchmarkInfo {
    throughput: Option<ThroughputInfo>,
}

#[derive(Deserialize)]
struct ThroughputInfo {
    #[serde(rename = "Elements")]
    elements: Option<u64>,
}

struct Row {
    name: String,
    mean_ns: f64,
    elements: Option<u64>,
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut rows = Vec::new();
    collect_results(criterion_dir, criterion_dir, &mut rows);
    rows.sort_by(|a, b| a.name.cmp(&b.name));

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Traversal Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Benchmark | Mean | Throughput (elem/s) |")?;
    writeln!(file, "|---|---|---|")?;

    for row in &rows {
        let throughput = match row.elements {
            Some(n) if row.mean_ns > 0.0 => format_rate(n as f64 * 1e9 / row.mean_ns),
            _ => "-".to_string(),
        };
        writeln!(file, "| {} | {:.2} µs | {} |", row.name, row.mean_ns / 1e3, throughput)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_rate(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks criterion's output tree. Each benchmark keeps its latest run in
/// `<name>/new/{estimates,benchmark}.json`.
fn collect_results(root: &Path, dir: &Path, rows: &mut Vec<Row>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() || path.file_name().is_some_and(|n| n == "report") {
            continue;
        }
        if path.file_name().is_some_and(|n| n == "new") {
            if let Some(row) = read_row(root, &path) {
                rows.push(row);
            }
            continue;
        }
        collect_results(root, &path, rows);
    }
}

fn read_row(root: &Path, new_dir: &Path) -> Option<Row> {
    let bench_dir = new_dir.parent()?;
    let name = bench_dir.strip_prefix(root).ok()?.display().to_string();

    let estimates: Estimates =
        serde_json::from_str(&fs::read_to_string(new_dir.join("estimates.json")).ok()?).ok()?;
    let elements = fs::read_to_string(new_dir.join("benchmark.json"))
        .ok()
        .and_then(|text| serde_json::from_str::<BenchmarkInfo>(&text).ok())
        .and_then(|info| info.throughput)
        .and_then(|t| t.elements);

    Some(Row {
        name,
        mean_ns: estimates.mean.point_estimate,
        elements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_outcome_writes_one_value_per_line() {
        assert_eq!(Outcome::Print(vec![3, -1, 7]).to_string(), "3\n-1\n7\n");
        assert_eq!(Outcome::Print(Vec::new()).to_string(), "");
    }

    #[test]
    fn list_outcomes_render_bracketed() {
        assert_eq!(Outcome::Reachable(vec![0, 2]).to_string(), "[0, 2]");
        assert_eq!(Outcome::Max(None).to_string(), "none");
        assert_eq!(Outcome::IncreasingPath(None).to_string(), "no path");
    }

    #[test]
    fn print_outcome_serializes_tagged() {
        let json = serde_json::to_string(&Outcome::Print(vec![1, 2])).unwrap();
        assert_eq!(json, r#"{"op":"print","result":[1,2]}"#);
    }
}
