//! # Presentation Layer
//!
//! MVVM split used by every command:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                                                                 ==(Text)==> [ View ] --> stdout
//! ```
//!
//! * `view_models/` hold raw data and must serialize; no formatting.
//! * `presenters/` turn engine and runtime results into view models and decide
//!   badges and tips.
//! * `views/` implement `fmt::Display` per `ViewMode` and own all colour.
//! * `renderers/` pick JSON or text. `--format json` ignores `ViewMode`.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode,
};
