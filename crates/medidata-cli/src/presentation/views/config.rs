use std::fmt;

use super::style;
use crate::presentation::view_models::{ConfigInitViewModel, ConfigShowViewModel, ViewMode};

pub struct ConfigShowView<'a> {
    data: &'a ConfigShowViewModel,
    mode: ViewMode,
}

impl<'a> ConfigShowView<'a> {
    pub fn new(data: &'a ConfigShowViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ConfigShowView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.path);
        }

        let source = if self.data.exists {
            format!("# {}", self.data.path)
        } else {
            format!("# {} (not found, showing defaults)", self.data.path)
        };
        writeln!(f, "{}", style::dim(&source))?;

        let body = toml::to_string_pretty(&self.data.config).map_err(|_| fmt::Error)?;
        write!(f, "{}", body)
    }
}

pub struct ConfigInitView<'a> {
    pub data: &'a ConfigInitViewModel,
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let verb = if self.data.overwritten {
            "Overwrote"
        } else {
            "Wrote"
        };
        writeln!(f, "{} {}", verb, self.data.path)
    }
}
