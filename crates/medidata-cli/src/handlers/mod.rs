mod context;

pub mod config;
pub mod patient;
pub mod sync;
pub mod taxonomy;
pub mod webhook;

pub use context::HandlerContext;
