//! Command implementations and argument parsing for the topsis CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use topsis_core::{ErrorKind, RawTable, ResultTable, ScoreFormat, TopsisError, compute_ranking};
use topsis_providers_csv::{CsvProviderError, CsvTableReader, write_result_path};
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "topsis",
    about = "Rank the alternatives of a CSV decision table with TOPSIS."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Rank a decision table and write the scored result.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// CSV file whose first column identifies each alternative and whose
    /// remaining columns hold numeric criterion values.
    pub input: PathBuf,

    /// Comma-separated positive weights, one per criterion, e.g. `1,1,2`.
    #[arg(allow_hyphen_values = true)]
    pub weights: String,

    /// Comma-separated impacts, `+` (beneficial) or `-` (cost), one per criterion.
    #[arg(allow_hyphen_values = true)]
    pub impacts: String,

    /// Destination CSV for the input rows plus `Topsis Score` and `Rank`.
    pub output: PathBuf,

    /// Decimal places for the score column (shortest exact form when omitted).
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub precision: Option<usize>,
}

impl RunCommand {
    fn score_format(&self) -> ScoreFormat {
        self.precision.map_or(ScoreFormat::Shortest, ScoreFormat::Fixed)
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the input or writing the output failed.
    #[error(transparent)]
    Csv(#[from] CsvProviderError),
    /// The decision table could not be ranked.
    #[error(transparent)]
    Core(#[from] TopsisError),
}

impl CliError {
    /// Stable machine-readable code of the underlying failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Csv(err) => err.code(),
            Self::Core(err) => err.code().as_str(),
        }
    }

    /// Classified kind for ranking failures; `None` for I/O and CSV errors.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Csv(_) => None,
            Self::Core(err) => Some(err.kind()),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name derived from the input file.
    pub input: String,
    /// Where the ranked table was written.
    pub output: PathBuf,
    /// Number of criterion columns.
    pub criteria: usize,
    /// The ranked table.
    pub result: ResultTable,
    /// How scores were rendered.
    pub format: ScoreFormat,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read, the table cannot be
/// ranked, or the output cannot be written. Nothing is written on failure.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use topsis_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("phones.csv");
/// std::fs::write(&input, "Model,Price,Storage\nM1,250,16\nM2,200,32\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         input,
///         weights: "1,1".into(),
///         impacts: "-,+".into(),
///         output: dir.path().join("ranked.csv"),
///         precision: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.result.by_rank()[0].identifier(), "M2");
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
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(&run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(input = field::Empty, output = field::Empty, precision = field::Empty),
)]
pub(super) fn run_command(command: &RunCommand) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    span.record("input", field::display(command.input.display()));
    span.record("output", field::display(command.output.display()));
    if let Some(precision) = command.precision {
        span.record("precision", precision);
    }

    let table = read_input(&command.input)?;
    let criteria = table.column_count().saturating_sub(1);
    let result = compute_ranking(&table, &command.weights, &command.impacts)?;
    let format = command.score_format();
    write_result_path(&command.output, &result, format)?;

    let summary = ExecutionSummary {
        input: derive_input_name(&command.input),
        output: command.output.clone(),
        criteria,
        result,
        format,
    };
    info!(
        input = summary.input.as_str(),
        alternatives = summary.result.len(),
        criteria = summary.criteria,
        "command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.read_input", err, fields(path = field::Empty))]
pub(super) fn read_input(path: &Path) -> Result<RawTable, CliError> {
    Span::current().record("path", field::display(path.display()));
    Ok(CsvTableReader::new().read_path(path)?)
}

pub(super) fn derive_input_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "input".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` in a human-readable text format, listing
/// alternatives best first.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "input: {}", summary.input)?;
    writeln!(writer, "alternatives: {}", summary.result.len())?;
    writeln!(writer, "criteria: {}", summary.criteria)?;
    writeln!(writer, "output: {}", summary.output.display())?;
    for alternative in summary.result.by_rank() {
        writeln!(
            writer,
            "{}\t{}\t{}",
            alternative.rank(),
            summary.format.render(alternative.score()),
            alternative.identifier()
        )?;
    }
    Ok(())
}
