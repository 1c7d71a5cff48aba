use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clientbook", version)]
#[command(about = "Interactive client registry for independent service providers", long_about = None)]
pub struct Cli {
    /// Data file to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Directory holding config.json (defaults to the user config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
