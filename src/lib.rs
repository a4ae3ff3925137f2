pub mod analyzers;
pub mod cli;
pub mod client;
pub mod error;
pub mod models;
pub mod readers;
pub mod settings;
pub mod utils;

pub use error::{MonitorError, Result};
