mod config;
mod error;
mod types;

pub use config::*;
pub use error::SdnError;
pub use types::*;
