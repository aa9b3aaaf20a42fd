use clap::Parser;
use gitkit::presentation::cli::{
    normalize_args, CliApp, Commands, DownArgs, GlobalArgs, LONG_VERSION,
};

/// Clone every repository of a GitHub user that is not present locally
#[derive(Parser)]
#[command(name = "gitdown")]
#[command(version, long_version = LONG_VERSION)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    args: DownArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    CliApp::with_command(cli.global, Commands::Down(cli.args)).run()
}
