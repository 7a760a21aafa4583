//! Headless driver: runs the bot commands against local files.
//!
//! Files stand in for attachments, the output directory stands in for the
//! channel, and the ephemeral replies are printed to stdout.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use biggify_bot::commands::{self, BiggifyArgs};
use biggify_bot::config::defaults::describe_settings;
use biggify_bot::local::{attachment_from_path, write_reply};
use biggify_bot::{BotConfig, CommandError, CommandReply};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stretch an image horizontally and split it into strips.
    Biggify {
        image: PathBuf,
        /// Number of horizontal strips (default from BIGGIFY_DEFAULT_ROWS).
        #[arg(long, allow_negative_numbers = true)]
        rows: Option<i64>,
        /// Horizontal stretch, 1.0-3.0 (default from BIGGIFY_DEFAULT_STRETCH).
        #[arg(long, allow_negative_numbers = true)]
        stretch_factor: Option<f64>,
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Merge image strips top to bottom into a single image.
    Merge {
        #[arg(required = true)]
        images: Vec<PathBuf>,
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// List the environment settings and their defaults.
    Settings,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let dotenv_path = biggify_bot::load_dotenv();
    let (config, rejected) = BotConfig::from_env();
    biggify_bot::init_tracing(&config.log_filter);

    match dotenv_path {
        Some(path) => tracing::info!("Loaded .env from: {path}"),
        None => tracing::info!("No .env file found, using system environment variables"),
    }
    for setting in &rejected {
        setting.log();
    }

    let args = Args::parse();
    let (result, out) = match args.command {
        Command::Biggify {
            image,
            rows,
            stretch_factor,
            out,
        } => {
            let attachment = attachment_from_path(&image)?;
            let args = BiggifyArgs {
                rows,
                stretch_factor,
            };
            (commands::biggify(&config, attachment, args).await, out)
        }
        Command::Merge { images, out } => {
            let attachments = images
                .iter()
                .map(|path| attachment_from_path(path))
                .collect::<anyhow::Result<Vec<_>>>()?;
            (commands::merge_biggify(&config, attachments).await, out)
        }
        Command::Settings => {
            for line in describe_settings() {
                println!("{line}");
            }
            return Ok(ExitCode::SUCCESS);
        }
    };

    deliver(result, &out)
}

fn deliver(result: Result<CommandReply, CommandError>, out: &Path) -> anyhow::Result<ExitCode> {
    match result {
        Ok(reply) => {
            for path in write_reply(&reply, out)? {
                println!("{}", path.display());
            }
            for message in &reply.messages {
                println!("{message}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::warn!("Command rejected: {e:?}");
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_rows_reach_the_command() {
        let args =
            Args::try_parse_from(["biggify-bot", "biggify", "x.png", "--rows", "-1"]).unwrap();
        match args.command {
            Command::Biggify { rows, .. } => assert_eq!(rows, Some(-1)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn negative_stretch_reaches_the_command() {
        let args = Args::try_parse_from([
            "biggify-bot",
            "biggify",
            "x.png",
            "--stretch-factor",
            "-2.5",
        ])
        .unwrap();
        match args.command {
            Command::Biggify { stretch_factor, .. } => assert_eq!(stretch_factor, Some(-2.5)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn merge_requires_at_least_one_path() {
        assert!(Args::try_parse_from(["biggify-bot", "merge"]).is_err());
    }

    #[test]
    fn settings_subcommand_parses() {
        let args = Args::try_parse_from(["biggify-bot", "settings"]).unwrap();
        assert!(matches!(args.command, Command::Settings));
    }
}
