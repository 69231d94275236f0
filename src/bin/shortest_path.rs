use std::env;
use std::process::ExitCode;
use std::time::Instant;

use sparse_paths::algorithm::query::{self, Query};
use sparse_paths::algorithm::{QueueKind, ShortestPathAlgorithm};
use sparse_paths::graph::{load_edge_list_file, Graph};
use sparse_paths::{Dijkstra, DirectedGraph};

const USAGE: &str = "usage: shortest_path <edge-list> <start> <goal> [--all] [--decrease-key] [--limit N]";

/// Parsed command line
struct Options {
    path: String,
    start: u64,
    goal: u64,
    all: bool,
    queue: QueueKind,
    limit: Option<usize>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let [path, start, goal, rest @ ..] = args else {
        return Err(USAGE.to_string());
    };

    let mut options = Options {
        path: path.clone(),
        start: start.parse().map_err(|_| format!("invalid start node: {}", start))?,
        goal: goal.parse().map_err(|_| format!("invalid goal node: {}", goal))?,
        all: false,
        queue: QueueKind::Lazy,
        limit: None,
    };

    let mut rest = rest.iter();
    while let Some(flag) = rest.next() {
        match flag.as_str() {
            "--all" => options.all = true,
            "--decrease-key" => options.queue = QueueKind::DecreaseKey,
            "--limit" => {
                let value = rest.next().ok_or("--limit needs a value")?;
                options.limit = Some(value.parse().map_err(|_| format!("invalid limit: {}", value))?);
            }
            other => return Err(format!("unknown option: {}\n{}", other, USAGE)),
        }
    }

    Ok(options)
}

fn run(options: Options) -> sparse_paths::Result<()> {
    let load_start = Instant::now();
    let (graph, report) = load_edge_list_file(&options.path)?;
    println!(
        "Loaded {} nodes and {} edges in {:?} ({} lines skipped)",
        graph.node_count(),
        graph.edge_count(),
        load_start.elapsed(),
        report.skipped
    );

    let mut dijkstra = Dijkstra::new().with_queue(options.queue);
    if let Some(limit) = options.limit {
        dijkstra = dijkstra.with_expansion_limit(limit);
    }

    println!(
        "Running {} with the {:?} queue (expansion limit: {})",
        <Dijkstra as ShortestPathAlgorithm<u64, DirectedGraph<u64>>>::name(&dijkstra),
        dijkstra.queue(),
        dijkstra
            .expansion_limit()
            .map_or_else(|| "none".to_string(), |limit| limit.to_string())
    );

    if options.all {
        let search_start = Instant::now();
        let result = <Dijkstra as ShortestPathAlgorithm<u64, DirectedGraph<u64>>>::search_all(
            &dijkstra,
            &graph,
            options.start,
        )?;
        println!(
            "Settled {} nodes reachable from {} in {:?}",
            result.costs.len(),
            options.start,
            search_start.elapsed()
        );
    }

    let search_start = Instant::now();
    let answer = query::answer(&dijkstra, &graph, Query::new(options.start, options.goal))?;
    let elapsed = search_start.elapsed();

    match answer.cost {
        Some(cost) => {
            println!("Cost to {}: {}", options.goal, cost);
            println!("Path to {}: {:?}", options.goal, answer.path);
        }
        None => println!("No path exists from {} to {}", options.start, options.goal),
    }
    println!(
        "Search took {:?} ({} expansions, {} stale entries skipped)",
        elapsed, answer.stats.expansions, answer.stats.stale_skipped
    );

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::from(2);
        }
    };

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
