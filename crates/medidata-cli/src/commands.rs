use super::args::{
    Cli, Commands, ConfigCommand, PatientCommand, SyncCommand, TaxonomyCommand, WebhookCommand,
};
use super::handlers::{self, HandlerContext};
use anyhow::Result;
use clap::CommandFactory;
use medidata_runtime::{Config, resolve_workspace_path};

const CONFIG_FILE: &str = "config.toml";

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let ctx = HandlerContext::new(cli.format, &cli.view_mode);
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let config_path = data_dir.join(CONFIG_FILE);
    tracing::debug!(data_dir = %data_dir.display(), "workspace resolved");

    match command {
        Commands::Patient { command } => match command {
            PatientCommand::List { file } => handlers::patient::handle_list(file.as_deref(), &ctx),
            PatientCommand::Show { file, index, card } => {
                handlers::patient::handle_show(file.as_deref(), index, card.as_deref(), &ctx)
            }
        },

        Commands::Taxonomy { command } => match command {
            TaxonomyCommand::List => handlers::taxonomy::handle_list(&ctx),
            TaxonomyCommand::Lookup { kind, tag } => {
                handlers::taxonomy::handle_lookup(kind, &tag, &ctx)
            }
        },

        Commands::Sync { command } => {
            let config = Config::load_from(&config_path)?;

            match command {
                SyncCommand::Run {
                    token,
                    force_syncs,
                    realtime,
                    options,
                } => handlers::sync::handle_run(
                    &config,
                    handlers::sync::SyncRunRequest {
                        token: &token,
                        force_syncs,
                        realtime,
                        options: &options,
                    },
                    &ctx,
                ),
            }
        }

        Commands::Webhook { command } => {
            let config = Config::load_from(&config_path)?;

            match command {
                WebhookCommand::Payload => handlers::webhook::handle_payload(&config, &ctx),
                WebhookCommand::Send { url, dry_run } => {
                    handlers::webhook::handle_send(&config, url.as_deref(), dry_run, &ctx)
                }
            }
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::handle_show(&config_path, &ctx),
            ConfigCommand::Init { force } => {
                handlers::config::handle_init(&config_path, force, &ctx)
            }
        },
    }
}
