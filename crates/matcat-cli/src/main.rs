//! matcat CLI
//!
//! Command-line interface for toolbox disk-catalog tooling.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use matcat_cli::cli::{Args, Command};
use matcat_cli::config::Config;
use matcat_cli::{commands, Error};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("matcat: {err}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Lint { file } => {
            let (report, text) = commands::lint(&file, &config)?;
            println!("{text}");
            Ok(if report.is_clean() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Command::List { file, section } => {
            let catalog = matcat_content::parse_file(&file)?;
            print!("{}", commands::list(&catalog, section.map(Into::into)));
            Ok(ExitCode::SUCCESS)
        }
        Command::Show { file, name } => {
            let catalog = matcat_content::parse_file(&file)?;
            match commands::show(&catalog, &name) {
                Ok(text) => {
                    print!("{text}");
                    Ok(ExitCode::SUCCESS)
                }
                Err(Error::NotListed { name }) => {
                    eprintln!("matcat: {name} is not listed in the catalog");
                    Ok(ExitCode::from(1))
                }
                Err(err) => Err(err.into()),
            }
        }
        Command::Fmt { file, write, width } => {
            let width = width.unwrap_or_else(|| config.width());
            if let Some(text) = commands::fmt(&file, write, width)? {
                print!("{text}");
            } else {
                tracing::info!(file = %file.display(), "rewrote catalog in place");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Export { file, format } => {
            let catalog = matcat_content::parse_file(&file)?;
            println!("{}", commands::export(&catalog, format)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Stats { file } => {
            let catalog = matcat_content::parse_file(&file)?;
            print!("{}", commands::stats(&catalog));
            Ok(ExitCode::SUCCESS)
        }
    }
}
