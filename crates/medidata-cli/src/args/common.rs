use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        global = true,
        help = "Minimal output (names and tags only, for scripting)"
    )]
    pub quiet: bool,

    #[arg(
        long,
        global = true,
        help = "Compact output (one line per item)"
    )]
    pub compact: bool,

    #[arg(
        long,
        global = true,
        help = "Verbose output (style classes and timings)"
    )]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        crate::presentation::ViewMode::from_flags(self.quiet, self.compact, self.verbose)
    }
}
