use crate::allocate::{run_allocate, run_roster, AllocateArgs, RosterArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use kitty_allocator::config::AppConfig;
use kitty_allocator::error::AppError;
use kitty_allocator::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Kitty Allocator",
    about = "Distribute a discount kitty across sales agents by weighted performance",
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
    /// Allocate the kitty described by a JSON input document
    Allocate(AllocateArgs),
    /// Allocate a kitty across agents imported from a CSV roster
    Roster(RosterArgs),
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

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Allocate(args) => run_allocate(args, &config.allocation),
        Command::Roster(args) => run_roster(args, &config.allocation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn allocate_accepts_positional_input_and_output() {
        let cli = Cli::try_parse_from(["kitty", "allocate", "in.json", "out.json"])
            .expect("arguments parse");

        match cli.command {
            Some(Command::Allocate(args)) => {
                assert_eq!(args.input, PathBuf::from("in.json"));
                assert_eq!(args.output, Some(PathBuf::from("out.json")));
                assert!(args.config.is_none());
            }
            other => panic!("expected allocate command, got {other:?}"),
        }
    }

    #[test]
    fn allocate_defaults_to_input_json() {
        let cli = Cli::try_parse_from(["kitty", "allocate"]).expect("arguments parse");

        match cli.command {
            Some(Command::Allocate(args)) => {
                assert_eq!(args.input, PathBuf::from("input.json"));
                assert!(args.output.is_none());
            }
            other => panic!("expected allocate command, got {other:?}"),
        }
    }

    #[test]
    fn roster_requires_kitty() {
        assert!(Cli::try_parse_from(["kitty", "roster", "agents.csv"]).is_err());

        let cli = Cli::try_parse_from([
            "kitty",
            "roster",
            "agents.csv",
            "--kitty",
            "5000",
            "--min-per-agent",
            "0",
        ])
        .expect("arguments parse");
        match cli.command {
            Some(Command::Roster(args)) => {
                assert_eq!(args.kitty, 5000);
                assert_eq!(args.min_per_agent, Some(0));
            }
            other => panic!("expected roster command, got {other:?}"),
        }
    }
}
