use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigShowViewModel, Guidance, StatusBadge,
};
use medidata_runtime::Config;
use std::path::Path;

pub fn present_config_show(
    path: &Path,
    exists: bool,
    config: Config,
) -> CommandResultViewModel<ConfigShowViewModel> {
    let result = CommandResultViewModel::new(ConfigShowViewModel {
        path: path.display().to_string(),
        exists,
        config,
    });

    if exists {
        result
    } else {
        result
            .with_badge(StatusBadge::info("No config file, showing defaults"))
            .with_suggestion(
                Guidance::new("Write the defaults to disk").with_command(cmd::CONFIG_INIT),
            )
    }
}

pub fn present_config_init(
    path: &Path,
    overwritten: bool,
    config: Config,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let label = if overwritten {
        "Config overwritten"
    } else {
        "Config created"
    };

    CommandResultViewModel::new(ConfigInitViewModel {
        path: path.display().to_string(),
        overwritten,
        config,
    })
    .with_badge(StatusBadge::success(label))
}
