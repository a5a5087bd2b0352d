//! Command implementations and argument parsing for the kumo CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use kumo_core::{
    CommunityConfig, CycleConfig, DEFAULT_INTER_PROBABILITY, DEFAULT_INTRA_PROBABILITY,
    DEFAULT_VERTEX_COUNT, DocumentError, GenerateError, GraphDocument, generate_community,
    generate_cycle,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_CYCLE_OUTPUT: &str = "cycle.json";
const DEFAULT_COMMUNITY_OUTPUT: &str = "community.json";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "kumo", about = "Generate synthetic random graphs as JSON.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a single random cycle over a shuffled vertex ordering.
    Cycle(CycleArgs),
    /// Generate a two-block community-structured random graph.
    Community(CommunityArgs),
}

/// Options accepted by the `cycle` command.
#[derive(Debug, Args, Clone)]
pub struct CycleArgs {
    /// Number of vertices in the cycle.
    #[arg(long = "vertex-count", default_value_t = DEFAULT_VERTEX_COUNT)]
    pub vertex_count: usize,

    /// RNG seed for reproducible output; seeded from entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Destination file, overwritten if it exists.
    #[arg(long, default_value = DEFAULT_CYCLE_OUTPUT)]
    pub output: PathBuf,
}

/// Options accepted by the `community` command.
#[derive(Debug, Args, Clone)]
pub struct CommunityArgs {
    /// Number of vertices to generate.
    #[arg(long = "vertex-count", default_value_t = DEFAULT_VERTEX_COUNT)]
    pub vertex_count: usize,

    /// Edge probability within community A.
    #[arg(long = "p-intra-a", default_value_t = DEFAULT_INTRA_PROBABILITY)]
    pub intra_probability_a: f64,

    /// Edge probability within community B.
    #[arg(long = "p-intra-b", default_value_t = DEFAULT_INTRA_PROBABILITY)]
    pub intra_probability_b: f64,

    /// Edge probability across the two communities.
    #[arg(long = "p-inter", default_value_t = DEFAULT_INTER_PROBABILITY)]
    pub inter_probability: f64,

    /// RNG seed for reproducible output; seeded from entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Destination file, overwritten if it exists.
    #[arg(long, default_value = DEFAULT_COMMUNITY_OUTPUT)]
    pub output: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Generator configuration was rejected.
    #[error(transparent)]
    Generate(#[from] GenerateError),
    /// Writing the output document failed.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the generator that ran.
    pub generator: &'static str,
    /// Number of vertices in the written document.
    pub vertex_count: usize,
    /// Number of edges in the written document.
    pub edge_count: usize,
    /// Path of the written document.
    pub output: PathBuf,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when validation or output writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kumo_cli::cli::{Cli, Command, CycleArgs, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let cli = Cli {
///     command: Command::Cycle(CycleArgs {
///         vertex_count: 8,
///         seed: Some(42),
///         output: dir.path().join("cycle.json"),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.vertex_count, 8);
/// assert_eq!(summary.edge_count, 8);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Cycle(args) => {
            Span::current().record("command", field::display("cycle"));
            run_cycle(args)
        }
        Command::Community(args) => {
            Span::current().record("command", field::display("community"));
            run_community(args)
        }
    }
}

#[instrument(
    name = "cli.cycle",
    err,
    skip(args),
    fields(vertex_count = field::Empty, output = field::Empty),
)]
pub(super) fn run_cycle(args: CycleArgs) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    span.record("vertex_count", field::display(args.vertex_count));
    span.record("output", field::display(args.output.display()));

    let config = CycleConfig {
        vertex_count: args.vertex_count,
        seed: args.seed,
    };
    let document = generate_cycle(&config);
    write_document("cycle", &document, args.output)
}

#[instrument(
    name = "cli.community",
    err,
    skip(args),
    fields(vertex_count = field::Empty, output = field::Empty),
)]
pub(super) fn run_community(args: CommunityArgs) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    span.record("vertex_count", field::display(args.vertex_count));
    span.record("output", field::display(args.output.display()));

    let config = CommunityConfig {
        vertex_count: args.vertex_count,
        intra_probability_a: args.intra_probability_a,
        intra_probability_b: args.intra_probability_b,
        inter_probability: args.inter_probability,
        seed: args.seed,
    };
    let document = generate_community(&config)?;
    write_document("community", &document, args.output)
}

fn write_document(
    generator: &'static str,
    document: &GraphDocument,
    output: PathBuf,
) -> Result<ExecutionSummary, CliError> {
    document.write_json_file(&output)?;
    info!(
        generator,
        vertex_count = document.vertices.len(),
        edge_count = document.edges.len(),
        output = %output.display(),
        "graph document written"
    );
    Ok(ExecutionSummary {
        generator,
        vertex_count: document.vertices.len(),
        edge_count: document.edges.len(),
        output,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use std::path::PathBuf;
/// # use kumo_cli::cli::{ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     generator: "cycle",
///     vertex_count: 4,
///     edge_count: 4,
///     output: PathBuf::from("cycle.json"),
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.starts_with("generator: cycle\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "generator: {}", summary.generator)?;
    writeln!(writer, "vertices: {}", summary.vertex_count)?;
    writeln!(writer, "edges: {}", summary.edge_count)?;
    writeln!(writer, "output: {}", summary.output.display())?;
    Ok(())
}
