pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod freq;
pub mod lang;
pub mod loc;
pub mod output;
pub mod scan;
pub mod stats;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
