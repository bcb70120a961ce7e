//! CLI argument definitions for bookshelf.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `books` | Load the catalog and print the books inside a price range |
//! | `bounds` | Load the catalog and print its price bounds |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--base-url` | `$BOOKSHELF_API_BASE` or itbook.store | Catalog API root |
//! | `--timeout-ms` | `3000` | Request timeout in ms (0 disables) |
//! | `--log-level` | `warn` | Log verbosity on stderr |
//!
//! # Examples
//!
//! ```bash
//! # Latest listings
//! bookshelf books
//!
//! # Search and narrow to $10..$30
//! bookshelf books golang --min 10 --max 30
//!
//! # Price bounds as JSON
//! bookshelf bounds rust --format json --pretty
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Browse a remote book catalog and narrow it by price.
#[derive(Debug, Parser)]
#[command(
    name = "bookshelf",
    author,
    version,
    about = "Browse a remote book catalog and narrow it by price"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Catalog API root. Falls back to BOOKSHELF_API_BASE, then the public itbook.store API.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout budget in milliseconds; 0 waits indefinitely.
    #[arg(long, global = true, default_value_t = 3000)]
    pub timeout_ms: u64,

    /// Log verbosity. RUST_LOG overrides this when set.
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text for terminal display.
    Table,
    /// Single JSON object.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const fn to_filter_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the catalog and list the books whose price is in range.
    ///
    /// Without bounds the full range [0, max price] is shown. Bounds are
    /// clamped into that range before they are applied.
    ///
    /// # Examples
    ///
    ///   bookshelf books
    ///   bookshelf books golang --min 10 --max 30
    Books(BooksArgs),

    /// Load the catalog and report its price bounds.
    Bounds(BoundsArgs),
}

/// Arguments for the `books` command.
#[derive(Debug, Args)]
pub struct BooksArgs {
    /// Search query; omit for the latest listings.
    #[arg(default_value = "")]
    pub query: String,

    /// Lower price bound.
    #[arg(long)]
    pub min: Option<f64>,

    /// Upper price bound.
    #[arg(long)]
    pub max: Option<f64>,
}

/// Arguments for the `bounds` command.
#[derive(Debug, Args)]
pub struct BoundsArgs {
    /// Search query; omit for the latest listings.
    #[arg(default_value = "")]
    pub query: String,
}
