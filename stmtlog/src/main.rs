use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stmtlog_core::cli;
use stmtlog_core::logging::{LogMode, default_log_mode, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "stmtlog",
    version,
    about = "stmtlog: filtered SQL statement logging"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Config tooling
    Conf {
        #[command(subcommand)]
        cmd: cli::conf::ConfCmd,
    },

    /// Replay JSON-lines statement events through the filter
    Replay {
        /// Config directory or file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Event file (defaults to stdin)
        #[arg(long)]
        input: Option<PathBuf>,

        #[arg(long, conflicts_with = "json")]
        pretty: bool,

        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Conf { cmd } => {
            if let Err(e) = cli::conf::run(cmd) {
                eprintln!("conf error: {e:#}");
                std::process::exit(1);
            }
        }

        Command::Replay {
            config,
            input,
            pretty,
            json,
        } => {
            let mode = if json {
                LogMode::Json
            } else if pretty {
                LogMode::Pretty
            } else {
                default_log_mode()
            };
            init_logging(mode);

            if let Err(e) = cli::replay::run(config, input) {
                eprintln!("replay error: {e:#}");
                std::process::exit(1);
            }
        }
    }
}
