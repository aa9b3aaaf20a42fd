use clap::Parser;
use gitkit::presentation::cli::{
    normalize_args, CliApp, Commands, GlobalArgs, ScanArgs, LONG_VERSION,
};

/// List git repositories under a directory
#[derive(Parser)]
#[command(name = "git-scan")]
#[command(version, long_version = LONG_VERSION)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    args: ScanArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    CliApp::with_command(cli.global, Commands::Scan(cli.args)).run()
}
