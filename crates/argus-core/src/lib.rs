pub mod config;
pub mod error;
pub mod types;

pub use config::ArgusConfig;
pub use error::{ArgusError, Result};
pub use types::*;
