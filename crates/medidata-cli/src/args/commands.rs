use super::enums::TaxonomyKind;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Inspect patient records and their exam cards")]
    Patient {
        #[command(subcommand)]
        command: PatientCommand,
    },

    #[command(about = "Show exam category, sync status and risk styling")]
    Taxonomy {
        #[command(subcommand)]
        command: TaxonomyCommand,
    },

    #[command(about = "Simulate connecting and syncing a Notion workspace")]
    Sync {
        #[command(subcommand)]
        command: SyncCommand,
    },

    #[command(about = "Build or send the lab-exam webhook test payload")]
    Webhook {
        #[command(subcommand)]
        command: WebhookCommand,
    },

    #[command(about = "Show or initialize config.toml")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum PatientCommand {
    #[command(about = "List patients in a roster")]
    List {
        /// Roster JSON ({"patients": [...]}); the bundled sample when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },

    #[command(about = "Render the cards of one patient")]
    Show {
        #[arg(long)]
        file: Option<PathBuf>,

        /// Zero-based patient index in the roster
        #[arg(long, default_value = "0")]
        index: usize,

        /// Only render the card with this label (case-insensitive)
        #[arg(long)]
        card: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum TaxonomyCommand {
    #[command(about = "List every known tag with its style")]
    List,

    #[command(about = "Resolve one tag; unknown tags get the neutral style")]
    Lookup {
        kind: TaxonomyKind,
        tag: String,
    },
}

#[derive(Subcommand)]
pub enum SyncCommand {
    #[command(about = "Connect with a token, then run manual syncs")]
    Run {
        /// Notion integration token
        #[arg(long, default_value = "")]
        token: String,

        /// Manual syncs to run after connecting
        #[arg(long, default_value = "1")]
        force_syncs: u32,

        /// Sleep through each timer gap instead of jumping virtual time
        #[arg(long)]
        realtime: bool,

        #[command(flatten)]
        options: SyncOptionArgs,
    },
}

/// Turn off individual Notion sync options (all on by default or per config).
#[derive(Debug, Clone, Default, Args)]
pub struct SyncOptionArgs {
    #[arg(long)]
    pub skip_metabolic: bool,

    #[arg(long)]
    pub skip_microbiota: bool,

    #[arg(long)]
    pub skip_genetic: bool,

    #[arg(long)]
    pub skip_laboratory: bool,

    #[arg(long)]
    pub no_dashboards: bool,
}

#[derive(Subcommand)]
pub enum WebhookCommand {
    #[command(about = "Print the example payload and endpoint")]
    Payload,

    #[command(about = "Send the example payload, stamped with the current time")]
    Send {
        /// Endpoint URL; config webhook.url when omitted
        #[arg(long)]
        url: Option<String>,

        /// Log the request instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the effective configuration")]
    Show,

    #[command(about = "Write a config.toml with default values")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
