// raysan/src/cli.rs
//! Command-line interface definition for the `raysan` application.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "raysan",
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Sanitize JSON and HTML input",
    long_about = "Raysan runs JSON-shaped input through a prioritized rule pipeline: null bytes, control characters, ANSI escapes, invisible Unicode and script blocks are stripped from strings, prototype-pollution keys are dropped from objects and non-finite numbers are zeroed. A strict mode additionally restricts strings to printable ASCII and keys to identifiers.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress informational messages and logging.
    #[arg(long, short = 'q', global = true, conflicts_with = "debug", help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging, overriding RUST_LOG.
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `raysan` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes JSON from a file or stdin.
    #[command(about = "Sanitizes a JSON document (or JSON Lines) from a file or stdin.")]
    Sanitize(SanitizeCommand),

    /// Strips scripts, event handlers and disallowed tags or attributes from HTML.
    #[command(about = "Scrubs an HTML fragment from a file or stdin.")]
    Html(HtmlCommand),

    /// Exits with status 1 when the input would need sanitizing.
    #[command(about = "Checks whether input needs sanitizing (exit code 1 if it does).")]
    Check(CheckCommand),

    /// Lists the built-in rules in the order they run.
    #[command(about = "Lists the built-in sanitization rules.")]
    Rules,
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    #[arg(long = "config", value_name = "FILE", env = "RAYSAN_CONFIG", help = "Path to a sanitization configuration file (YAML).")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Restrict strings to printable ASCII and keys to identifiers.")]
    pub strict: bool,

    #[arg(long = "no-deep", help = "Skip the recursive pass over nested arrays and objects.")]
    pub no_deep: bool,

    #[arg(long = "max-depth", value_name = "N", help = "Recursion limit for the deep and strict passes.")]
    pub max_depth: Option<usize>,

    #[arg(long = "preserve-whitespace", help = "Do not collapse or trim whitespace in strings.")]
    pub preserve_whitespace: bool,

    /// Treat each non-empty input line as its own JSON document.
    #[arg(long, help = "Treat each non-empty input line as a separate JSON document.")]
    pub lines: bool,

    #[arg(long, help = "Print a summary report to stderr.")]
    pub report: bool,
}

/// Arguments for the `html` command.
#[derive(Parser, Debug)]
pub struct HtmlCommand {
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    #[arg(long = "allow-tags", value_delimiter = ',', value_name = "TAGS", help = "Keep only these tags (comma-separated); text inside other tags is kept.")]
    pub allow_tags: Option<Vec<String>>,

    #[arg(long = "allow-attrs", value_delimiter = ',', value_name = "ATTRS", help = "Keep only these attributes (comma-separated).")]
    pub allow_attrs: Option<Vec<String>>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,
}
