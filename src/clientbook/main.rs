use clap::Parser;
use clientbook::api::{ClientApi, CmdMessage, OpenOptions};
use clientbook::config::ClientbookConfig;
use clientbook::error::{ClientbookError, Result};
use clientbook::store::fs::FileStore;
use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
use cli::{Cli, Shell};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout belongs to the menu
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn config_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.config_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "clientbook", "clientbook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ClientbookError::Config("Could not determine config dir".into()))
}

fn run(cli: Cli) -> Result<()> {
    let (config, config_err) = ClientbookConfig::load_or_default(config_dir(&cli)?);
    let config = config.with_data_file(cli.data_file.clone());
    tracing::debug!(data_file = %config.data_file.display(), "starting");

    let store = FileStore::new(&config.data_file);
    let options = OpenOptions {
        backup_corrupt: config.backup_corrupt,
    };
    let (api, open_messages) = ClientApi::open(store, options);

    let mut messages = Vec::new();
    if let Some(e) = config_err {
        tracing::warn!(error = %e, "ignoring unreadable config");
        messages.push(CmdMessage::warning(format!("{}. Using default settings.", e)));
    }
    messages.extend(open_messages);

    let clear_screen = console::Term::stdout().is_term();
    let stdin = io::stdin();
    let mut shell = Shell::new(api, stdin.lock(), io::stdout()).with_clear_screen(clear_screen);
    shell.announce(&messages)?;
    shell.run()
}
