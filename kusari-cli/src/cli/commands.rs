//! Command implementations and argument parsing for the kusari CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use kusari_core::{ChainError, ChainSet, ChainerBuilder, Cluster, Direction, ExecutionStrategy};
use kusari_providers_edgelist::{EdgeListError, parse_breakpoints, parse_edge_list};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kusari",
    about = "Decompose degree-bounded graph clusters into chains."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Decompose an edge list into chains.
    Chains(ChainsCommand),
}

/// Options accepted by the `chains` command.
#[derive(Debug, Args, Clone)]
pub struct ChainsCommand {
    /// Path to an edge list with one `<node> <node>` pair per line.
    pub path: PathBuf,

    /// File listing breakpoint point indices, one per line.
    #[arg(long)]
    pub breakpoints: Option<PathBuf>,

    /// Keep only chains with a leaf endpoint.
    #[arg(long = "leaves-only")]
    pub leaves_only: bool,

    /// How seeds are walked.
    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    pub strategy: StrategyArg,

    /// Check cluster invariants before walking.
    #[arg(long)]
    pub validate: bool,

    /// Override name for the cluster (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Execution strategies selectable from the command line.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum StrategyArg {
    /// Parallelise large clusters when the build allows it.
    #[default]
    Auto,
    /// Walk seeds on the calling thread.
    Sequential,
    /// Walk seeds on the rayon pool.
    Parallel,
}

impl StrategyArg {
    const fn label(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

impl From<StrategyArg> for ExecutionStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Auto => Self::Auto,
            StrategyArg::Sequential => Self::Sequential,
            StrategyArg::Parallel => Self::Parallel,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening an input.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge list or breakpoint parsing failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// Chain decomposition failed.
    #[error(transparent)]
    Core(#[from] ChainError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the decomposed cluster.
    pub cluster: String,
    /// Chains produced by the run.
    pub chains: ChainSet,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when an input cannot be read or parsed, or when
/// decomposition fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kusari_cli::cli::{ChainsCommand, Cli, Command, StrategyArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0 1\n1 2\n2 3\n")?;
/// let cli = Cli {
///     command: Command::Chains(ChainsCommand {
///         path: file.path().to_path_buf(),
///         breakpoints: None,
///         leaves_only: false,
///         strategy: StrategyArg::Sequential,
///         validate: true,
///         name: Some("path".into()),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.chains.len(), 1);
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
        Command::Chains(chains) => {
            Span::current().record("command", field::display("chains"));
            run_command(chains)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        path = field::Empty,
        strategy = field::Empty,
        breakpoints = field::Empty,
        override_name = field::Empty,
    ),
)]
pub(super) fn run_command(command: ChainsCommand) -> Result<ExecutionSummary, CliError> {
    let ChainsCommand {
        path,
        breakpoints,
        leaves_only,
        strategy,
        validate,
        name,
    } = command;

    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("strategy", field::display(strategy.label()));
    span.record("breakpoints", breakpoints.is_some());
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );

    let chainer = ChainerBuilder::new()
        .with_execution_strategy(strategy.into())
        .with_leaves_only(leaves_only)
        .with_cluster_validation(validate)
        .build()?;

    let cluster_name = derive_cluster_name(&path, name.as_deref());
    let cluster = parse_edge_list(&cluster_name, open_reader(&path)?)?;
    let flags = breakpoints
        .as_deref()
        .map(|flags_path| {
            parse_breakpoints(open_reader(flags_path)?, point_count(&cluster))
                .map_err(CliError::from)
        })
        .transpose()?;

    let chains = chainer.run(&cluster, flags.as_deref())?;
    info!(
        cluster = cluster_name.as_str(),
        chains = chains.len(),
        leaf_chains = chains.counts().leaf,
        "command completed"
    );
    Ok(ExecutionSummary {
        cluster: cluster_name,
        chains,
    })
}

#[instrument(name = "cli.open_reader", err, fields(path = field::Empty))]
pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// One past the largest point index of `cluster`.
fn point_count(cluster: &impl Cluster) -> usize {
    (0..cluster.node_count())
        .filter_map(|node| cluster.point_index(node))
        .max()
        .map_or(0, |point| point.saturating_add(1))
}

pub(super) fn derive_cluster_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "cluster".to_owned())
}

/// Renders `summary` to `writer` in a tab-separated text format.
///
/// The header reports per-category totals; each following line lists one
/// chain as `<index>\t<open|closed>\t<leaf|->\t<nodes>`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kusari_cli::cli::{ExecutionSummary, render_summary};
/// # use kusari_core::{AdjacencyCluster, ChainerBuilder};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cluster = AdjacencyCluster::from_edges(3, &[(0, 1), (1, 2)])?;
/// let chains = ChainerBuilder::new().build()?.run(&cluster, None)?;
/// let summary = ExecutionSummary { cluster: "demo".into(), chains };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.ends_with("0\topen\tleaf\t0 1 2\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let counts = summary.chains.counts();
    writeln!(writer, "cluster: {}", summary.cluster)?;
    writeln!(writer, "chains: {}", counts.total)?;
    writeln!(writer, "leaf chains: {}", counts.leaf)?;
    writeln!(writer, "closed loops: {}", counts.closed_loops)?;
    writeln!(writer, "single edges: {}", counts.single_edge)?;
    for (index, chain) in summary.chains.chains().iter().enumerate() {
        let shape = if chain.is_closed_loop() { "closed" } else { "open" };
        let leaf = if chain.is_leaf() { "leaf" } else { "-" };
        let nodes = chain
            .nodes(Direction::Forward)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{index}\t{shape}\t{leaf}\t{nodes}")?;
    }
    Ok(())
}
