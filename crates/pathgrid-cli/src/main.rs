//! `pathgrid` - run one grid search from the command line.
//!
//! Reads a solve request (`{"grid", "start", "end", "algorithm"}`) as JSON,
//! or an ASCII map with `--ascii`, validates it, runs the selected strategy
//! and prints `{"visited_order", "path"}` on stdout.
//!
//! ```bash
//! pathgrid request.json
//! pathgrid --algorithm jps --pretty < request.json
//! pathgrid --ascii maze.txt --start 0,0 --end 9,9 --summary
//! ```
//!
//! Exit status: `0` on success (including "no path"), `1` for I/O failures
//! and text that is not a JSON object, `2` for rejected input (malformed
//! fields included), `3` when a search runs out of capacity or time.
//! Rejections and search failures are also reported on
//! stdout as `{"error": {"kind", "message"}}`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser};
use log::{LevelFilter, debug, info};
use pathgrid_core::Grid;
use pathgrid_paths::{
    Algorithm, Error, ErrorKind, Query, Raw, SearchConfig, SearchResult, SolveRequest,
    ValidationError,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "pathgrid", version, about = "Grid pathfinding with exploration traces")]
struct Cli {
    /// Request file; `-` reads stdin.
    #[arg(default_value = "-")]
    input: String,

    /// Strategy to run, overriding the request's selector.
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Read INPUT as an ASCII map (`.`/`0` free, `#`/`1` wall).
    #[arg(long, requires_all = ["start", "end"])]
    ascii: bool,

    /// Start cell as `row,col` (ASCII input only).
    #[arg(long, value_parser = parse_coord, requires = "ascii")]
    start: Option<[i64; 2]>,

    /// End cell as `row,col` (ASCII input only).
    #[arg(long, value_parser = parse_coord, requires = "ascii")]
    end: Option<[i64; 2]>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Print the supported strategy names and exit.
    #[arg(long)]
    list: bool,

    /// Write a one-line summary to stderr.
    #[arg(long)]
    summary: bool,

    /// TOML file with search settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum RBFS stack depth.
    #[arg(long)]
    rbfs_max_depth: Option<usize>,

    /// Maximum RBFS node expansions.
    #[arg(long)]
    rbfs_max_expansions: Option<usize>,

    /// Give up waiting for the search after this many milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Algorithm used for ASCII input when none is given.
const ASCII_DEFAULT_ALGORITHM: &str = "bfs";

#[derive(Debug, thiserror::Error)]
enum Failure {
    #[error(transparent)]
    Engine(#[from] Error),
    #[error("search did not finish within {0} ms")]
    Timeout(u64),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Failure {
    fn kind(&self) -> &'static str {
        match self {
            Self::Engine(e) => e.kind().as_str(),
            Self::Timeout(_) => "TimeoutError",
            Self::Other(_) => "IoError",
        }
    }

    fn exit_code(&self) -> u8 {
        match self {
            Self::Engine(e) if e.kind() == ErrorKind::Capacity => 3,
            Self::Engine(_) => 2,
            Self::Timeout(_) => 3,
            Self::Other(_) => 1,
        }
    }
}

impl From<ValidationError> for Failure {
    fn from(e: ValidationError) -> Self {
        Self::Engine(e.into())
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    kind: &'a str,
    message: String,
}

fn parse_coord(s: &str) -> Result<[i64; 2], String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got {s:?}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<i64>()
            .map_err(|e| format!("bad coordinate {v:?}: {e}"))
    };
    Ok([parse(row)?, parse(col)?])
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading request from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(input).with_context(|| format!("reading {input}"))
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<SearchConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let config: SearchConfig = toml::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?;
            info!("Loaded config from {}", path.display());
            config
        }
        None => SearchConfig::default(),
    };
    if let Some(depth) = cli.rbfs_max_depth {
        config.rbfs.max_depth = depth;
    }
    if let Some(expansions) = cli.rbfs_max_expansions {
        config.rbfs.max_expansions = expansions;
    }
    Ok(config)
}

/// Turn the raw input text into a request, JSON or ASCII.
fn build_request(cli: &Cli, text: &str) -> Result<SolveRequest, Failure> {
    if cli.ascii {
        let grid = Grid::parse_ascii(text).map_err(ValidationError::from)?;
        let (start, end) = cli
            .start
            .zip(cli.end)
            .context("--ascii needs both --start and --end")?;
        let algorithm = cli.algorithm.as_deref().unwrap_or(ASCII_DEFAULT_ALGORITHM);
        return Ok(SolveRequest::new(grid.to_rows(), start, end, algorithm));
    }

    // Malformed fields decode as invalid values and are rejected by
    // validation; only text that is not a JSON object fails here.
    let mut req: SolveRequest = serde_json::from_str(text).context("decoding solve request")?;
    if let Some(algorithm) = &cli.algorithm {
        req.algorithm = Raw::Valid(algorithm.clone());
    }
    Ok(req)
}

/// Run the query, on a worker thread when a deadline is set.
///
/// The engine has no cancellation: on expiry the worker is abandoned and the
/// process exits around it.
fn solve_with_deadline(
    query: Query,
    config: SearchConfig,
    timeout_ms: Option<u64>,
) -> Result<SearchResult, Failure> {
    let Some(ms) = timeout_ms else {
        return Ok(query.solve(&config).map_err(Error::from)?);
    };
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        // The receiver is gone only if the deadline already passed.
        let _ = tx.send(query.solve(&config));
    });
    match rx.recv_timeout(Duration::from_millis(ms)) {
        Ok(result) => Ok(result.map_err(Error::from)?),
        Err(mpsc::RecvTimeoutError::Timeout) => Err(Failure::Timeout(ms)),
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            Err(anyhow::anyhow!("search worker exited without a result").into())
        }
    }
}

fn summary_line(algorithm: Algorithm, result: &SearchResult) -> String {
    match result.steps() {
        Some(steps) => format!(
            "{algorithm}: path of {} cells ({steps} steps), {} cells settled",
            result.path.len(),
            result.visited_order.len()
        ),
        None => format!(
            "{algorithm}: no path, {} cells settled",
            result.visited_order.len()
        ),
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn error_json(failure: &Failure, pretty: bool) -> anyhow::Result<String> {
    to_json(
        &ErrorBody {
            error: ErrorDetail {
                kind: failure.kind(),
                message: failure.to_string(),
            },
        },
        pretty,
    )
}

fn run(cli: &Cli) -> Result<String, Failure> {
    let config = load_config(cli)?;
    let text = read_input(&cli.input)?;
    let req = build_request(cli, &text)?;
    let query = req.validate()?;
    let algorithm = query.algorithm;
    debug!(
        "Running {algorithm} on a {}x{} grid",
        query.grid.rows(),
        query.grid.cols()
    );

    let result = solve_with_deadline(query, config, cli.timeout_ms)?;
    if cli.summary {
        eprintln!("{}", summary_line(algorithm, &result));
    }
    Ok(to_json(&result, cli.pretty)?)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list {
        for algorithm in Algorithm::ALL {
            println!("{algorithm}");
        }
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(Failure::Other(e)) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
        Err(failure) => {
            match error_json(&failure, cli.pretty) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("error: {failure} ({e:#})"),
            }
            ExitCode::from(failure.exit_code())
        }
    }
}
