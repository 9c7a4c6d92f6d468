use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use colored::Colorize;
use sprout_lib::{Repository, repository::CoreConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod plant;
mod view;

#[derive(Parser, Debug)]
#[command(name = "sprout")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: plant::Command,

    /// Override the blob store database file
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// Override the key the plant list is saved under
    #[arg(short, long, global = true)]
    key: Option<String>,

    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut cfg = match CoreConfig::load() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return sysexits::ExitCode::Config.into();
        }
    };

    if let Some(store) = cli.store {
        debug!("Using blob store at {}", store.display());
        cfg.set_store_path(store);
    }
    if let Some(key) = cli.key {
        debug!("Using storage key '{key}'");
        cfg.set_storage_key(key);
    }

    let mut repo = match Repository::new(&cfg) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("{} failed to open plant store: {err}", "error:".red().bold());
            return sysexits::ExitCode::CantCreat.into();
        }
    };

    plant::handle(&mut repo, cli.command).into()
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
