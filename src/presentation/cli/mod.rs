pub mod commands;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::ffi::OsString;
use std::process::exit;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::filesystem::TraversalPolicy;
use crate::infrastructure::hosting::DEFAULT_API_URL;

/// `--version` long output with build metadata
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_DATE"),
    ", ",
    env!("BUILD_TARGET"),
    ")"
);

/// Long flags also accepted with a single dash, e.g. `-path ~/src` or `-username=octocat`
const SINGLE_DASH_FLAGS: [&str; 2] = ["path", "username"];

/// Rewrite single-dash spellings of the long flags to their `--` form.
///
/// Without this clap reads `-path=/srv` as `-p` with the value `ath=/srv`.
/// Arguments after a `--` terminator are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_terminator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_terminator {
                return arg;
            }
            if arg == "--" {
                after_terminator = true;
                return arg;
            }
            match arg.to_str().and_then(single_dash_long_flag) {
                Some(rewritten) => OsString::from(rewritten),
                None => arg,
            }
        })
        .collect()
}

fn single_dash_long_flag(arg: &str) -> Option<String> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_FLAGS
        .contains(&name)
        .then(|| format!("-{}", arg))
}

/// How unreadable directories are handled while scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraversalMode {
    /// Abort the scan on the first unreadable directory
    Strict,
    /// Report unreadable directories and keep scanning
    Lenient,
}

impl From<TraversalMode> for TraversalPolicy {
    fn from(mode: TraversalMode) -> Self {
        match mode {
            TraversalMode::Strict => TraversalPolicy::Strict,
            TraversalMode::Lenient => TraversalPolicy::Lenient,
        }
    }
}

/// Flags shared by every tool
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Report repositories with uncommitted changes
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Base path to search for git repositories (defaults to your home directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Traversal error handling
    #[arg(long, value_enum, default_value = "strict")]
    pub traversal: TraversalMode,
}

/// List repositories without checking their status
#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Base path to search for git repositories
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// Traversal error handling
    #[arg(long, value_enum, default_value = "lenient")]
    pub traversal: TraversalMode,
}

/// Clone every repository of a GitHub user that is not present locally
#[derive(Debug, Clone, Args)]
pub struct DownArgs {
    /// GitHub username (prompted for when omitted)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Path to clone repositories into
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// GitHub API root
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

/// gitkit - find local git repositories and mirror remote ones
#[derive(Parser)]
#[command(name = "gitkit")]
#[command(about = "Find local git repositories and mirror a user's GitHub repositories")]
#[command(version, long_version = LONG_VERSION)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Report repositories with uncommitted changes
    Check(CheckArgs),

    /// List repositories under a directory
    Scan(ScanArgs),

    /// Clone a user's GitHub repositories
    Down(DownArgs),
}

/// CLI application runner
pub struct CliApp {
    global: GlobalArgs,
    command: Commands,
}

impl CliApp {
    pub fn new() -> Self {
        let cli = Cli::parse_from(normalize_args(std::env::args_os()));
        Self::with_command(cli.global, cli.command)
    }

    /// Runner for a single-purpose binary that parsed its own arguments
    pub fn with_command(global: GlobalArgs, command: Commands) -> Self {
        Self { global, command }
    }

    pub fn run(self) -> anyhow::Result<()> {
        init_logging(self.global.verbose);

        if self.global.no_color {
            colored::control::set_override(false);
        }

        match self.handle_command() {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    fn handle_command(&self) -> anyhow::Result<()> {
        match &self.command {
            Commands::Check(args) => commands::check::CheckCommand::new(args.clone()).execute(),
            Commands::Scan(args) => commands::scan::ScanCommand::new(args.clone()).execute(),
            Commands::Down(args) => commands::down::DownCommand::new(args.clone()).execute(),
        }
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

/// `RUST_LOG` wins; otherwise only errors, or everything down to debug with `--verbose`.
/// Logs go to stderr so stdout stays a clean report.
fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
