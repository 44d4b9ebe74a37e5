// NOTE: medidata CLI layering
//
// args       -> clap definitions only
// commands   -> resolves data dir and config, dispatches to handlers
// handlers   -> calls engine/runtime, hands domain results to presenters
// presentation -> presenters build view models, renderers print them
//
// Handlers never print directly; every command goes through HandlerContext
// so `--format json` always dumps the full view model.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{
    Cli, Commands, ConfigCommand, LogLevel, OutputFormat, PatientCommand, SyncCommand,
    TaxonomyCommand, TaxonomyKind, WebhookCommand,
};
pub use commands::run;
