pub mod config;
pub mod patient;
pub mod style;
pub mod sync;
pub mod taxonomy;
pub mod webhook;
