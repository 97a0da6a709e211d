use crate::demo::{run_demo, run_standing_report, DemoArgs, StandingArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use immogest::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ImmoGest Scoring Service",
    about = "Serve and exercise the ImmoGest scoring engines from the command line",
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
    /// Classify a property's standing from a JSON rooms file
    Standing(StandingArgs),
    /// Run an end-to-end CLI demo covering classification and ranking
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
        Command::Standing(args) => run_standing_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
