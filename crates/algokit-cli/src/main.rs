// crates/algokit-cli/src/main.rs
// ============================================================================
// Module: algokit CLI Entry Point
// Description: Command dispatcher for the algokit algorithm clients.
// Purpose: Run sorting, searching, graph and string clients over text input.
// Dependencies: clap, algokit-core, algokit-config, serde, serde_json, tracing.
// ============================================================================

//! ## Overview
//! The algokit CLI reads whitespace-separated text from a file or stdin, runs
//! one library algorithm over it and prints the result as text lines or a
//! single JSON document. Inputs are untrusted: every read is capped by
//! `limits.max_input_bytes` and graph headers by the vertex and edge limits.
//! All user-facing strings are routed through the message catalog.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub(crate) mod graph;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use algokit_cli::input::InputError;
use algokit_cli::input::read_text;
use algokit_cli::t;
use algokit_cli::telemetry;
use algokit_config::AlgokitConfig;
use algokit_config::LogLevel;
use algokit_config::OutputFormat;
use algokit_core::GraphLimits;
use algokit_core::SortAlgorithm;
use algokit_core::TableKind;
use algokit_core::UnionFindAlgorithm;
use algokit_core::fundamentals::LinkedStack;
use algokit_core::fundamentals::Transaction;
use algokit_core::fundamentals::binary_search;
use algokit_core::fundamentals::evaluate;
use algokit_core::fundamentals::three_sum;
use algokit_core::fundamentals::two_sum;
use algokit_core::sorting::MinPq;
use algokit_core::strings::key_indexed;
use algokit_core::strings::lsd;
use algokit_core::strings::msd;
use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::graph::GraphCommand;
use crate::graph::command_graph;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "algokit", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Config file path (defaults to `ALGOKIT_CONFIG`, then ./algokit.toml).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Output format (overrides `output.format`).
    #[arg(long, value_enum, value_name = "FORMAT", global = true)]
    format: Option<FormatArg>,
    /// Log level (overrides `logging.level`; `RUST_LOG` wins over both).
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    log_level: Option<LevelArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Sort whitespace-separated tokens.
    Sort(SortCommand),
    /// Evaluate a fully parenthesized arithmetic expression.
    Eval(EvalCommand),
    /// Replay union operations and report the joining pairs.
    UnionFind(UnionFindCommand),
    /// Counting and whitelist clients.
    Search {
        /// Selected search subcommand.
        #[command(subcommand)]
        command: SearchCommand,
    },
    /// Keep the largest transactions.
    Transactions(TransactionsCommand),
    /// Count word frequencies with a symbol table.
    Frequency(FrequencyCommand),
    /// Graph processing clients.
    Graph {
        /// Selected graph subcommand.
        #[command(subcommand)]
        command: GraphCommand,
    },
    /// String and key sorts.
    Strings {
        /// Selected strings subcommand.
        #[command(subcommand)]
        command: StringsCommand,
    },
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Input source shared by every command.
#[derive(Args, Debug)]
pub(crate) struct InputArgs {
    /// Input file (defaults to stdin).
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,
}

impl InputArgs {
    /// Returns the input path, if any.
    pub(crate) fn path(&self) -> Option<&Path> {
        self.input.as_deref()
    }
}

/// Arguments for `sort`.
#[derive(Args, Debug)]
struct SortCommand {
    /// Sort algorithm (defaults to `sorting.algorithm`).
    #[arg(long, value_name = "ALGORITHM")]
    algorithm: Option<SortAlgorithm>,
    /// Parse tokens as numbers instead of strings.
    #[arg(long, action = ArgAction::SetTrue)]
    numeric: bool,
    /// Input source.
    #[command(flatten)]
    input: InputArgs,
}

/// Arguments for `eval`.
#[derive(Args, Debug)]
struct EvalCommand {
    /// Expression to evaluate (read from input when omitted).
    #[arg(value_name = "EXPR")]
    expression: Option<String>,
    /// Input source.
    #[command(flatten)]
    input: InputArgs,
}

/// Arguments for `union-find`.
#[derive(Args, Debug)]
struct UnionFindCommand {
    /// Union-find implementation (defaults to `union_find.algorithm`).
    #[arg(long, value_name = "ALGORITHM")]
    algorithm: Option<UnionFindAlgorithm>,
    /// Input source.
    #[command(flatten)]
    input: InputArgs,
}

/// Search subcommands.
#[derive(Subcommand, Debug)]
enum SearchCommand {
    /// Count triples that sum to zero.
    ThreeSum(SumCommand),
    /// Count pairs that sum to zero.
    TwoSum(SumCommand),
    /// Print input keys missing from a whitelist.
    Whitelist(WhitelistCommand),
}

/// Arguments for the zero-sum counters.
#[derive(Args, Debug)]
struct SumCommand {
    /// Use the sort-and-search counter (requires distinct values).
    #[arg(long, action = ArgAction::SetTrue)]
    fast: bool,
    /// Input source.
    #[command(flatten)]
    input: InputArgs,
}

/// Arguments for `search whitelist`.
#[derive(Args, Debug)]
struct WhitelistCommand {
    /// File of allowed integer keys.
    #[arg(long, value_name = "PATH")]
    whitelist: PathBuf,
    /// Input source.
    #[command(flatten)]
    input: InputArgs,
}

/// Arguments for `transactions`.
#[derive(Args, Debug)]
struct TransactionsCommand {
    /// Number of transactions to keep.
    #[arg(long, value_name = "M")]
    top: usize,
    /// Input source.
    #[command(flatten)]
    input: InputArgs,
}

/// Arguments for `frequency`.
#[derive(Args, Debug)]
struct FrequencyCommand {
    /// Ignore words shorter than this many characters.
    #[arg(long, value_name = "L", default_value_t = 1)]
    min_length: usize,
    /// Symbol table implementation.
    #[arg(long, value_name = "TABLE", default_value_t = TableKind::default())]
    table: TableKind,
    /// Input source.
    #[command(flatten)]
    input: InputArgs,
}

/// Strings subcommands.
#[derive(Subcommand, Debug)]
enum StringsCommand {
    /// LSD radix sort on fixed-width strings.
    Lsd(LsdCommand),
    /// MSD radix sort on arbitrary strings.
    Msd(InputArgs),
    /// Key-indexed counting on small integer keys.
    Count(CountCommand),
}

/// Arguments for `strings lsd`.
#[derive(Args, Debug)]
struct LsdCommand {
    /// Number of leading bytes to sort on.
    #[arg(long, value_name = "W")]
    width: usize,
    /// Input source.
    #[command(flatten)]
    input: InputArgs,
}

/// Arguments for `strings count`.
#[derive(Args, Debug)]
struct CountCommand {
    /// Keys must lie in `0 .. radix`.
    #[arg(long, value_name = "R")]
    radix: usize,
    /// Input source.
    #[command(flatten)]
    input: InputArgs,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Load and validate the configuration.
    Validate,
}

/// Output format argument.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum FormatArg {
    /// Plain text lines.
    Text,
    /// A single JSON document.
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Log level argument.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LevelArg {
    /// Errors only.
    Error,
    /// Warnings and errors.
    Warn,
    /// Informational events.
    Info,
    /// Algorithm-level debug events.
    Debug,
    /// Everything.
    Trace,
}

impl From<LevelArg> for LogLevel {
    fn from(value: LevelArg) -> Self {
        match value {
            LevelArg::Error => Self::Error,
            LevelArg::Warn => Self::Warn,
            LevelArg::Info => Self::Info,
            LevelArg::Debug => Self::Debug,
            LevelArg::Trace => Self::Trace,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for catalog messages.
#[derive(Debug, Error)]
#[error("{message}")]
pub(crate) struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a catalog message.
    pub(crate) const fn new(message: String) -> Self {
        Self {
            message,
        }
    }

    /// Wraps a library error.
    pub(crate) fn algorithm(error: &impl std::fmt::Display) -> Self {
        Self::new(t!("algorithm.failed", error = error))
    }
}

/// CLI result alias for fallible operations.
pub(crate) type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Context
// ============================================================================

/// Resolved settings shared by every command.
pub(crate) struct Context {
    /// Loaded and validated configuration.
    config: AlgokitConfig,
    /// Effective output format.
    format: OutputFormat,
}

impl Context {
    /// Reads a capped input from `path` or stdin.
    pub(crate) fn read(&self, path: Option<&Path>) -> CliResult<String> {
        read_text(path, self.config.limits.max_input_bytes).map_err(|err| {
            let message = match err {
                InputError::Io {
                    source_name,
                    error,
                } => t!("input.read_failed", source = source_name, error = error),
                InputError::TooLarge {
                    source_name,
                    limit,
                } => t!("input.too_large", source = source_name, limit = limit),
                InputError::NotUtf8 {
                    source_name,
                } => t!("input.not_utf8", source = source_name),
            };
            CliError::new(message)
        })
    }

    /// Returns the graph parser limits.
    pub(crate) const fn limits(&self) -> GraphLimits {
        self.config.graph_limits()
    }

    /// Prints `report` in the effective output format.
    pub(crate) fn emit<R: Report>(&self, report: &R) -> CliResult<ExitCode> {
        match self.format {
            OutputFormat::Text => {
                for line in report.text_lines() {
                    write_stdout_line(&line)
                        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string(report)
                    .map_err(|err| CliError::new(t!("output.json_failed", error = err)))?;
                write_stdout_line(&json)
                    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}

/// Command result that renders as text lines or JSON.
pub(crate) trait Report: Serialize {
    /// Returns the text rendering, one entry per output line.
    fn text_lines(&self) -> Vec<String>;
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let mut config = AlgokitConfig::load(cli.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    if let Some(level) = cli.log_level {
        config.logging.level = level.into();
    }
    telemetry::init(&config.logging)
        .map_err(|err| CliError::new(t!("logging.init_failed", error = err)))?;
    let format = cli.format.map_or(config.output.format, OutputFormat::from);
    let context = Context {
        config,
        format,
    };

    match command {
        Commands::Sort(command) => command_sort(&context, &command),
        Commands::Eval(command) => command_eval(&context, &command),
        Commands::UnionFind(command) => command_union_find(&context, &command),
        Commands::Search {
            command,
        } => command_search(&context, &command),
        Commands::Transactions(command) => command_transactions(&context, &command),
        Commands::Frequency(command) => command_frequency(&context, &command),
        Commands::Graph {
            command,
        } => command_graph(&context, &command),
        Commands::Strings {
            command,
        } => command_strings(&context, &command),
        Commands::Config {
            command: ConfigCommand::Validate,
        } => write_stdout_line(&t!("config.validate.ok"))
            .map(|()| ExitCode::SUCCESS)
            .map_err(|err| CliError::new(output_error("stdout", &err))),
    }
}

/// Prints top-level help.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Reports
// ============================================================================

/// Sorted tokens, kept numeric when parsed as numbers.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Items {
    /// String tokens.
    Words(Vec<String>),
    /// Numeric tokens.
    Numbers(Vec<f64>),
    /// Small integer keys.
    Keys(Vec<usize>),
}

/// Output of every sorting command.
#[derive(Debug, Serialize)]
struct SortReport {
    /// Algorithm name.
    algorithm: String,
    /// Items in sorted order.
    items: Items,
}

impl Report for SortReport {
    fn text_lines(&self) -> Vec<String> {
        let line = match &self.items {
            Items::Words(words) => words.join(" "),
            Items::Numbers(numbers) => join(numbers, " "),
            Items::Keys(keys) => join(keys, " "),
        };
        vec![line]
    }
}

/// Output of `eval`.
#[derive(Debug, Serialize)]
struct EvalReport {
    /// Expression as given.
    expression: String,
    /// Evaluated value.
    value: f64,
}

impl Report for EvalReport {
    fn text_lines(&self) -> Vec<String> {
        vec![t!("eval.result", value = self.value)]
    }
}

/// Output of `union-find`.
#[derive(Debug, Serialize)]
struct UnionFindReport {
    /// Implementation name.
    algorithm: UnionFindAlgorithm,
    /// Number of sites.
    sites: usize,
    /// Pairs that merged two components, in input order.
    joined: Vec<[usize; 2]>,
    /// Final component count.
    components: usize,
}

impl Report for UnionFindReport {
    fn text_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> =
            self.joined.iter().map(|[p, q]| t!("union_find.joined", p = p, q = q)).collect();
        lines.push(t!("union_find.count", count = self.components));
        lines
    }
}

/// Output of the zero-sum counters.
#[derive(Debug, Serialize)]
struct CountReport {
    /// Counter name.
    algorithm: &'static str,
    /// Number of zero-sum tuples.
    count: usize,
}

impl Report for CountReport {
    fn text_lines(&self) -> Vec<String> {
        vec![t!("search.count", count = self.count)]
    }
}

/// Output of `search whitelist`.
#[derive(Debug, Serialize)]
struct WhitelistReport {
    /// Input keys absent from the whitelist, in input order.
    missing: Vec<i32>,
}

impl Report for WhitelistReport {
    fn text_lines(&self) -> Vec<String> {
        self.missing.iter().map(ToString::to_string).collect()
    }
}

/// Output of `transactions`.
#[derive(Debug, Serialize)]
struct TransactionsReport {
    /// Largest transactions, largest first.
    top: Vec<Transaction>,
}

impl Report for TransactionsReport {
    fn text_lines(&self) -> Vec<String> {
        self.top.iter().map(ToString::to_string).collect()
    }
}

/// Most frequent word.
#[derive(Debug, Serialize)]
struct WordCount {
    /// The word.
    word: String,
    /// Its occurrences.
    count: usize,
}

/// Output of `frequency`.
#[derive(Debug, Serialize)]
struct FrequencyReport {
    /// Symbol table used for counting.
    table: TableKind,
    /// Minimum word length counted.
    min_length: usize,
    /// Words counted.
    words: usize,
    /// Distinct words counted.
    distinct: usize,
    /// Most frequent word; ties go to the smallest word.
    max: Option<WordCount>,
}

impl Report for FrequencyReport {
    fn text_lines(&self) -> Vec<String> {
        let first = self.max.as_ref().map_or_else(
            || t!("frequency.none", min_length = self.min_length),
            |max| t!("frequency.max", word = max.word, count = max.count),
        );
        vec![first, t!("frequency.summary", distinct = self.distinct, words = self.words)]
    }
}

// ============================================================================
// SECTION: Fundamentals Commands
// ============================================================================

/// Executes `sort`.
fn command_sort(context: &Context, command: &SortCommand) -> CliResult<ExitCode> {
    let text = context.read(command.input.path())?;
    let algorithm = command.algorithm.unwrap_or(context.config.sorting.algorithm);
    let items = if command.numeric {
        let mut numbers = text
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| CliError::new(t!("parse.number", token = token)))
            })
            .collect::<CliResult<Vec<f64>>>()?;
        algorithm.apply(&mut numbers);
        Items::Numbers(numbers)
    } else {
        let mut words: Vec<&str> = text.split_whitespace().collect();
        algorithm.apply(&mut words);
        Items::Words(words.into_iter().map(str::to_string).collect())
    };
    debug!(algorithm = %algorithm, numeric = command.numeric, "sorted input");
    context.emit(&SortReport {
        algorithm: algorithm.to_string(),
        items,
    })
}

/// Executes `eval`.
fn command_eval(context: &Context, command: &EvalCommand) -> CliResult<ExitCode> {
    let expression = match &command.expression {
        Some(expression) => expression.clone(),
        None => context.read(command.input.path())?,
    };
    let expression = expression.trim();
    if expression.is_empty() {
        return Err(CliError::new(t!("eval.missing")));
    }
    let value =
        evaluate(expression).map_err(|err| CliError::new(t!("eval.failed", error = err)))?;
    context.emit(&EvalReport {
        expression: expression.to_string(),
        value,
    })
}

/// Executes `union-find`.
fn command_union_find(context: &Context, command: &UnionFindCommand) -> CliResult<ExitCode> {
    let text = context.read(command.input.path())?;
    let algorithm = command.algorithm.unwrap_or(context.config.union_find.algorithm);
    let mut lines = numbered_lines(&text);
    let (_, header) = lines.next().ok_or_else(|| CliError::new(t!("parse.missing_count")))?;
    let sites: usize =
        header.trim().parse().map_err(|_| CliError::new(t!("parse.missing_count")))?;
    if sites > context.config.limits.max_vertices {
        return Err(CliError::algorithm(&format!(
            "{sites} sites exceed the limit of {}",
            context.config.limits.max_vertices
        )));
    }
    let mut uf = algorithm.build(sites);
    let mut joined = Vec::new();
    for (line, text) in lines {
        let mut fields = text.split_whitespace().map(str::parse::<usize>);
        let (Some(Ok(p)), Some(Ok(q)), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(CliError::new(t!("parse.pair", line = line)));
        };
        if uf.union(p, q).map_err(|err| CliError::algorithm(&err))? {
            joined.push([p, q]);
        }
    }
    debug!(algorithm = %algorithm, sites, unions = joined.len(), "replayed unions");
    context.emit(&UnionFindReport {
        algorithm,
        sites,
        joined,
        components: uf.count(),
    })
}

/// Dispatches `search` subcommands.
fn command_search(context: &Context, command: &SearchCommand) -> CliResult<ExitCode> {
    match command {
        SearchCommand::ThreeSum(sum) => {
            let values = parse_integers(&context.read(sum.input.path())?)?;
            let (algorithm, count) = if sum.fast {
                ("three_sum_fast", three_sum::count_fast(&values))
            } else {
                ("three_sum", Ok(three_sum::count(&values)))
            };
            context.emit(&CountReport {
                algorithm,
                count: count.map_err(|err| CliError::algorithm(&err))?,
            })
        }
        SearchCommand::TwoSum(sum) => {
            let values = parse_integers(&context.read(sum.input.path())?)?;
            let (algorithm, count) = if sum.fast {
                ("two_sum_fast", two_sum::count_fast(&values))
            } else {
                ("two_sum", Ok(two_sum::count(&values)))
            };
            context.emit(&CountReport {
                algorithm,
                count: count.map_err(|err| CliError::algorithm(&err))?,
            })
        }
        SearchCommand::Whitelist(whitelist) => {
            let mut allowed = parse_integers(&context.read(Some(&whitelist.whitelist))?)?;
            context.config.sorting.algorithm.apply(&mut allowed);
            let keys = parse_integers(&context.read(whitelist.input.path())?)?;
            let missing = keys
                .into_iter()
                .filter(|key| binary_search::index_of(key, &allowed).is_none())
                .collect();
            context.emit(&WhitelistReport {
                missing,
            })
        }
    }
}

/// Executes `transactions`.
fn command_transactions(context: &Context, command: &TransactionsCommand) -> CliResult<ExitCode> {
    let text = context.read(command.input.path())?;
    let mut pq = MinPq::new();
    for (line, entry) in numbered_lines(&text) {
        let transaction = entry
            .parse::<Transaction>()
            .map_err(|err| CliError::new(t!("parse.transaction", line = line, error = err)))?;
        pq.insert(transaction);
        if pq.len() > command.top {
            pq.del_min();
        }
    }
    let mut stack = LinkedStack::new();
    while let Some(transaction) = pq.del_min() {
        stack.push(transaction);
    }
    let top = std::iter::from_fn(|| stack.pop()).collect();
    context.emit(&TransactionsReport {
        top,
    })
}

/// Executes `frequency`.
fn command_frequency(context: &Context, command: &FrequencyCommand) -> CliResult<ExitCode> {
    let text = context.read(command.input.path())?;
    let mut table = command.table.build::<String, usize>();
    let mut words = 0;
    for word in text.split_whitespace().filter(|w| w.chars().count() >= command.min_length) {
        words += 1;
        let key = word.to_string();
        let count = table.get(&key).copied().unwrap_or(0);
        table.put(key, count + 1);
    }
    let mut max: Option<(&String, usize)> = None;
    for key in table.keys() {
        let count = table.get(key).copied().unwrap_or(0);
        let better = max.is_none_or(|(best, best_count)| {
            count > best_count || (count == best_count && key < best)
        });
        if better {
            max = Some((key, count));
        }
    }
    debug!(table = %command.table, words, distinct = table.len(), "counted words");
    context.emit(&FrequencyReport {
        table: command.table,
        min_length: command.min_length,
        words,
        distinct: table.len(),
        max: max.map(|(word, count)| WordCount {
            word: word.clone(),
            count,
        }),
    })
}

// ============================================================================
// SECTION: Strings Commands
// ============================================================================

/// Dispatches `strings` subcommands.
fn command_strings(context: &Context, command: &StringsCommand) -> CliResult<ExitCode> {
    let (algorithm, items) = match command {
        StringsCommand::Lsd(lsd_command) => {
            let text = context.read(lsd_command.input.path())?;
            let mut words: Vec<&str> = text.split_whitespace().collect();
            lsd::sort(&mut words, lsd_command.width).map_err(|err| CliError::algorithm(&err))?;
            ("lsd", Items::Words(words.into_iter().map(str::to_string).collect()))
        }
        StringsCommand::Msd(input) => {
            let text = context.read(input.path())?;
            let mut words: Vec<&str> = text.split_whitespace().collect();
            msd::sort(&mut words);
            ("msd", Items::Words(words.into_iter().map(str::to_string).collect()))
        }
        StringsCommand::Count(count) => {
            let text = context.read(count.input.path())?;
            let mut keys = text
                .split_whitespace()
                .map(|token| {
                    token
                        .parse::<usize>()
                        .map_err(|_| CliError::new(t!("parse.number", token = token)))
                })
                .collect::<CliResult<Vec<usize>>>()?;
            key_indexed::sort(&mut keys, count.radix).map_err(|err| CliError::algorithm(&err))?;
            ("key_indexed", Items::Keys(keys))
        }
    };
    context.emit(&SortReport {
        algorithm: algorithm.to_string(),
        items,
    })
}

// ============================================================================
// SECTION: Parsing Helpers
// ============================================================================

/// Yields non-blank lines with one-based line numbers.
fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Parses whitespace-separated integers, reporting the first bad token.
fn parse_integers(text: &str) -> CliResult<Vec<i32>> {
    let mut values = Vec::new();
    for (line, entry) in numbered_lines(text) {
        for token in entry.split_whitespace() {
            let value = token
                .parse::<i32>()
                .map_err(|_| CliError::new(t!("parse.integer", line = line, token = token)))?;
            values.push(value);
        }
    }
    Ok(values)
}

/// Joins displayable items with `separator`.
pub(crate) fn join<T: std::fmt::Display>(items: &[T], separator: &str) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(separator)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.stdout"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}

// ============================================================================
// SECTION: Tests
// ============================================================================
