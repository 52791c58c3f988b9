use crate::console::{
    run_dashboard, run_scheme_check, run_scheme_search, run_stories, DashboardArgs,
    SchemeCheckArgs, SchemeSearchArgs, StoriesArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fundbridge::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "fundbridge",
    about = "Serve and explore the FundBridge startup/investor platform",
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
    /// Browse government schemes and check eligibility
    Schemes {
        #[command(subcommand)]
        command: SchemesCommand,
    },
    /// Show the dashboard a given identity would receive
    Dashboard(DashboardArgs),
    /// List curated success stories
    Stories(StoriesArgs),
}

#[derive(Subcommand, Debug)]
enum SchemesCommand {
    /// Filter the scheme catalog by search text and category
    Search(SchemeSearchArgs),
    /// Evaluate an applicant profile against every scheme
    Check(SchemeCheckArgs),
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
        Command::Schemes {
            command: SchemesCommand::Search(args),
        } => run_scheme_search(args),
        Command::Schemes {
            command: SchemesCommand::Check(args),
        } => run_scheme_check(args),
        Command::Dashboard(args) => run_dashboard(args),
        Command::Stories(args) => run_stories(args),
    }
}
