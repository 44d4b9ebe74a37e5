use super::HandlerContext;
use crate::args::hints::cmd;
use crate::presentation::presenters;
use anyhow::Result;
use medidata_runtime::Config;
use std::path::Path;

pub fn handle_show(config_path: &Path, ctx: &HandlerContext) -> Result<()> {
    let exists = config_path.exists();
    let config = Config::load_from(config_path)?;
    ctx.render(presenters::present_config_show(config_path, exists, config))
}

pub fn handle_init(config_path: &Path, force: bool, ctx: &HandlerContext) -> Result<()> {
    let overwritten = config_path.exists();
    if overwritten && !force {
        anyhow::bail!(
            "{} already exists; use `{}` to replace it",
            config_path.display(),
            cmd::CONFIG_INIT_FORCE
        );
    }

    let config = Config::default();
    config.save_to(config_path)?;
    tracing::info!(path = %config_path.display(), overwritten, "config written");
    ctx.render(presenters::present_config_init(config_path, overwritten, config))
}
