//! Argument parsing and the generation pipeline behind each subcommand.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use flowgen_core::{
    Bipartite, CapacityRange, EdgeSink, FileSink, FixedDegree, Mesh, RandomDensity, SinkError,
    Topology, TopologyError,
};
use rand::{SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "flowgen",
    about = "Generate random flow-network topologies as plain-text edge lists."
)]
pub struct Cli {
    /// Topology to generate.
    #[command(subcommand)]
    pub command: Command,
}

/// One subcommand per topology strategy.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Every node has the same number of distinct outgoing neighbours.
    FixedDegree(FixedDegreeArgs),
    /// A rectangular grid fed from the first column and drained from the last.
    Mesh(MeshArgs),
    /// Each vertex pair is present with a fixed percentage.
    Random(RandomArgs),
    /// A source, two partitions and a sink.
    Bipartite(BipartiteArgs),
}

/// Destination and seed shared by every subcommand.
#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    /// File the edge list is written to.
    #[arg(long)]
    pub output: PathBuf,

    /// Seed for the random generator; drawn from OS entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options accepted by `fixed-degree`.
#[derive(Debug, Args, Clone)]
pub struct FixedDegreeArgs {
    /// Number of internal vertices.
    #[arg(long)]
    pub vertices: usize,

    /// Distinct neighbours per node.
    #[arg(long = "out-degree")]
    pub out_degree: usize,

    /// Smallest edge capacity.
    #[arg(long = "min-capacity")]
    pub min_capacity: u64,

    /// Largest edge capacity.
    #[arg(long = "max-capacity")]
    pub max_capacity: u64,

    /// Destination and seed.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options accepted by `mesh`.
#[derive(Debug, Args, Clone)]
pub struct MeshArgs {
    /// Grid rows.
    #[arg(long, default_value_t = Mesh::default().rows())]
    pub rows: usize,

    /// Grid columns.
    #[arg(long, default_value_t = Mesh::default().cols())]
    pub cols: usize,

    /// Constant capacity, or the upper bound of uniform draws from `1`.
    #[arg(long, default_value_t = Mesh::default().capacity().bounds().1)]
    pub capacity: u64,

    /// Give every edge exactly `--capacity`.
    #[arg(long = "constant-capacity")]
    pub constant_capacity: bool,

    /// Generate the 3x4 mesh with constant capacity 1, ignoring other shape options.
    #[arg(long)]
    pub defaults: bool,

    /// Destination and seed.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options accepted by `random`.
#[derive(Debug, Args, Clone)]
pub struct RandomArgs {
    /// Matrix order, including source and sink.
    #[arg(long, default_value_t = RandomDensity::default().vertices())]
    pub vertices: usize,

    /// Percentage (`0..=100`) of vertex pairs that are present.
    #[arg(long, default_value_t = RandomDensity::default().density())]
    pub density: u8,

    /// Smallest edge capacity.
    #[arg(long = "min-capacity", default_value_t = RandomDensity::default().capacity().min())]
    pub min_capacity: u64,

    /// Largest edge capacity.
    #[arg(long = "max-capacity", default_value_t = RandomDensity::default().capacity().max())]
    pub max_capacity: u64,

    /// Generate the 500-vertex, 80% dense graph, ignoring other shape options.
    #[arg(long)]
    pub defaults: bool,

    /// Destination and seed.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options accepted by `bipartite`.
#[derive(Debug, Args, Clone)]
pub struct BipartiteArgs {
    /// Size of the source-side partition.
    #[arg(long)]
    pub left: usize,

    /// Size of the sink-side partition.
    #[arg(long)]
    pub right: usize,

    /// Largest unit draw that still links a left/right pair.
    #[arg(long = "max-probability")]
    pub max_probability: f64,

    /// Smallest edge capacity.
    #[arg(long = "min-capacity")]
    pub min_capacity: u64,

    /// Largest edge capacity.
    #[arg(long = "max-capacity")]
    pub max_capacity: u64,

    /// Destination and seed.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Parameters were rejected or sampling could not complete.
    #[error(transparent)]
    Topology(#[from] TopologyError),
    /// The edge list could not be written.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl CliError {
    /// Returns the stable code of the underlying failure.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Topology(err) => err.code().as_str(),
            Self::Sink(err) => err.code().as_str(),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Stable label of the strategy that ran.
    pub strategy: &'static str,
    /// File the edge list was written to.
    pub output: PathBuf,
    /// Seed that reproduces the run.
    pub seed: u64,
    /// Number of edges written.
    pub edges: usize,
}

/// Executes the subcommand represented by `cli`.
///
/// Generation completes before the destination is touched, so rejected
/// parameters never leave a file behind.
///
/// # Errors
/// Returns [`CliError`] when validation, sampling or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use flowgen_cli::cli::{Cli, Command, MeshArgs, OutputArgs, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let cli = Cli {
///     command: Command::Mesh(MeshArgs {
///         rows: 2,
///         cols: 2,
///         capacity: 5,
///         constant_capacity: true,
///         defaults: false,
///         output: OutputArgs {
///             output: dir.path().join("mesh.txt"),
///             seed: Some(1),
///         },
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.edges, 10);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<GenerationSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::FixedDegree(args) => {
            span.record("command", "fixed-degree");
            let capacity = CapacityRange::new(args.min_capacity, args.max_capacity)?;
            let topology = FixedDegree::new(args.vertices, args.out_degree, capacity)?;
            generate_and_write(&topology, args.output)
        }
        Command::Mesh(args) => {
            span.record("command", "mesh");
            let topology = if args.defaults {
                Mesh::default()
            } else {
                Mesh::new(args.rows, args.cols, args.capacity, args.constant_capacity)?
            };
            generate_and_write(&topology, args.output)
        }
        Command::Random(args) => {
            span.record("command", "random");
            let topology = if args.defaults {
                RandomDensity::default()
            } else {
                let capacity = CapacityRange::new(args.min_capacity, args.max_capacity)?;
                RandomDensity::new(args.vertices, args.density, capacity)?
            };
            generate_and_write(&topology, args.output)
        }
        Command::Bipartite(args) => {
            span.record("command", "bipartite");
            let capacity = CapacityRange::new(args.min_capacity, args.max_capacity)?;
            let topology = Bipartite::new(args.left, args.right, args.max_probability, capacity)?;
            generate_and_write(&topology, args.output)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(topology, output),
    fields(
        strategy = topology.name(),
        output = %output.output.display(),
        seed = field::Empty,
    ),
)]
pub(super) fn generate_and_write<T: Topology>(
    topology: &T,
    output: OutputArgs,
) -> Result<GenerationSummary, CliError> {
    let OutputArgs { output, seed } = output;
    let seed = resolve_seed(seed);
    Span::current().record("seed", seed);

    let edges = topology.generate(&mut SmallRng::seed_from_u64(seed))?;
    FileSink::new(&output).write_edges(&edges)?;

    info!(edges = edges.len(), "edge list written");
    Ok(GenerationSummary {
        strategy: topology.name(),
        output,
        seed,
        edges: edges.len(),
    })
}

pub(super) fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let drawn = rand::random();
        info!(seed = drawn, "no seed supplied; drew one from OS entropy");
        drawn
    })
}

/// Renders `summary` to `writer`, one `key: value` pair per line.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use flowgen_cli::cli::{GenerationSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = GenerationSummary {
///     strategy: "mesh",
///     output: "mesh.txt".into(),
///     seed: 9,
///     edges: 31,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "strategy: mesh\noutput: mesh.txt\nseed: 9\nedges: 31\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &GenerationSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "strategy: {}", summary.strategy)?;
    writeln!(writer, "output: {}", summary.output.display())?;
    writeln!(writer, "seed: {}", summary.seed)?;
    writeln!(writer, "edges: {}", summary.edges)?;
    Ok(())
}
