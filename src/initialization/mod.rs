//! Process initialization.
//!
//! Logger and HTTP client construction, kept out of the engine so the core
//! stays free of startup concerns.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
