use crate::conf::{ConfigError, load_config};
use crate::settings::LogFormat;
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            println!("{} Config loaded successfully", "✔".green());
            println!("{} level: {}", "✔".green(), cfg.log_level);
            println!("{} format: {}", "✔".green(), cfg.log_format);
            println!(
                "{} {} target statements",
                "✔".green(),
                cfg.target_statements.len()
            );

            if cfg.disabled {
                println!("{} statement logging is disabled", "!".yellow());
            }

            if let LogFormat::Unsupported(token) = &cfg.log_format {
                println!(
                    "{} format '{}' is not supported; every logged statement will fail",
                    "!".yellow(),
                    token
                );
                std::process::exit(1);
            }

            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: ConfigError, plain: bool) {
    let hint = config_error_hint(&err);
    // Causes are chained, not inlined; `{:#}` prints each once.
    let err = anyhow::Error::from(err);

    if plain {
        eprintln!("{:#}", err);
        return;
    }

    eprintln!();
    eprintln!("{} {:#}", "✘".red(), err);

    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "Create a config directory with:\n\
             \n\
             stmtlog conf init config",
        ),

        ConfigError::Parse { .. } => Some(
            "Settings live in a single `statement_log` block.\n\
             \n\
             Example:\n\
             \n\
             statement_log = {\n\
             \x20 level  = \"info\"\n\
             \x20 format = \"json\"\n\
             }\n\
             \n\
             Valid levels: debug, info, warn, error, fatal.",
        ),

        ConfigError::Settings { .. } => Some(
            "Target statements must be non-blank keywords.\n\
             \n\
             Example:\n\
             \n\
             target_statements = [\"insert\", \"update\", \"delete\"]",
        ),
    }
}
