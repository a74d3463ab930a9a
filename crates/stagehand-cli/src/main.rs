mod cmd_list;
mod cmd_run;
mod cmd_validate;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "stagehand",
    version,
    about = "Interactive playbook runner",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,

    // `stagehand <play>` with no subcommand runs the play.
    #[command(flatten)]
    run: RunArgs,
}

#[derive(Args)]
struct RunArgs {
    /// Play to run: a path, a file name, or a declared name
    /// (defaults to the default play)
    play: Option<String>,

    /// Resume from the given 1-based act number
    #[arg(short = 'c', long = "continue", value_name = "ACT_NUMBER")]
    continue_from: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a play and walk through its acts
    Run(RunArgs),
    /// List every play, marking the default
    List,
    /// Resolve a play and validate its act list without playing it
    Validate {
        /// Play to validate: a path, a file name, or a declared name
        play: Option<String>,
    },
}

/// How the process should exit. An abort already printed its resume
/// guidance to stdout; it still exits nonzero.
enum Exit {
    Success,
    Aborted,
}

fn dispatch(cli: Cli) -> anyhow::Result<Exit> {
    let root = std::env::current_dir()?;

    match cli.cmd {
        Some(Command::List) => cmd_list::execute(&root).map(|()| Exit::Success),
        Some(Command::Validate { play }) => {
            cmd_validate::execute(&root, play.as_deref()).map(|()| Exit::Success)
        }
        Some(Command::Run(args)) => {
            cmd_run::execute(&root, args.play.as_deref(), args.continue_from)
        }
        None => cmd_run::execute(&root, cli.run.play.as_deref(), cli.run.continue_from),
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("STAGEHAND_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let code = match dispatch(cli) {
        Ok(Exit::Success) => 0,
        Ok(Exit::Aborted) => 1,
        Err(err) => {
            eprintln!("✗ {err:#}");
            1
        }
    };
    std::process::exit(code);
}
