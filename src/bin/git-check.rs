use clap::Parser;
use gitkit::presentation::cli::{
    normalize_args, CheckArgs, CliApp, Commands, GlobalArgs, LONG_VERSION,
};

/// Report git repositories with uncommitted changes
#[derive(Parser)]
#[command(name = "git-check")]
#[command(version, long_version = LONG_VERSION)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    args: CheckArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    CliApp::with_command(cli.global, Commands::Check(cli.args)).run()
}
