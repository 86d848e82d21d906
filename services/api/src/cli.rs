use clap::{Args, Parser, Subcommand};
use viability::error::AppError;

use crate::demo::{run_demo, run_report, DemoArgs, ReportArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Startup Viability Calculator",
    about = "Serve and demo the Is My Startup Viable? scoring service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print and optionally write the export report for a built-in example preset
    Report(ReportArgs),
    /// Run a scripted walkthrough: load a preset, tweak it, export the report
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Report(args) => run_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
