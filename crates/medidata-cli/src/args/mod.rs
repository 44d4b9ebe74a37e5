// NOTE: Command organization
//
// Namespaced subcommands grouped by what they act on: patient records, the
// exam taxonomy, the Notion sync simulation, the lab-exam webhook and the
// local config file.

mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "medidata")]
#[command(about = "Inspect patient exam cards, exam taxonomy, Notion sync and lab webhooks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml (defaults to $MEDIDATA_PATH or the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Overrides MEDIDATA_LOG; logs go to stderr
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(flatten)]
    pub view_mode: ViewModeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
