use crate::commands::{run_gst, run_itc, run_notices, run_tds, GstArgs, ItcArgs, NoticesArgs, TdsArgs};
use crate::server;
use advisory_desk::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Advisory Desk",
    about = "Run the advisory firm's portal service or its calculators from the command line",
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
    /// Assess a payment for TDS withholding
    Tds(TdsArgs),
    /// Check a supply for GST applicability
    Gst(GstArgs),
    /// Check an inward supply for input-credit eligibility
    Itc(ItcArgs),
    /// Render the published-notice feed from a CSV export
    Notices(NoticesArgs),
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
        Command::Tds(args) => {
            run_tds(args);
            Ok(())
        }
        Command::Gst(args) => {
            run_gst(args);
            Ok(())
        }
        Command::Itc(args) => {
            run_itc(args);
            Ok(())
        }
        Command::Notices(args) => run_notices(args),
    }
}
