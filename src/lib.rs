pub mod config;
pub mod core;
pub mod error;
pub mod report;

pub use config::Config;
pub use error::{Error, Result};

#[cfg(feature = "gui")]
pub mod gui;
