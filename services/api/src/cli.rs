use crate::demo::{run_demo, run_search, DemoArgs, SearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use job_board::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Job Board",
    about = "Search job postings and run the job board service from the command line",
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
    /// Filter the posting catalog and print matching jobs
    Search(SearchArgs),
    /// Walk through a search, a saved job, and an application
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
    /// CSV catalog to serve instead of JOB_BOARD_CATALOG or the built-in sample
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Search(args) => run_search(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_flags_parse() {
        let cli = Cli::try_parse_from([
            "job-board",
            "search",
            "--query",
            "designer",
            "--job-type",
            "Contract",
            "--date-posted",
            "last_week",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Search(args)) => {
                assert_eq!(args.query.as_deref(), Some("designer"));
                assert!(!args.json);
            }
            other => panic!("expected search command, got {other:?}"),
        }
    }

    #[test]
    fn search_rejects_unknown_job_type() {
        let result = Cli::try_parse_from(["job-board", "search", "--job-type", "fulltime"]);
        assert!(result.is_err());
    }
}
