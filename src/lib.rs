pub mod config;
#[cfg(not(fuzzing))]
pub(crate) mod decoder;
#[cfg(fuzzing)]
pub mod decoder;
pub(crate) mod errors;
pub mod header;

pub use config::{ParserCfg, ParserCfgBuilder};
pub use errors::{HeaderError, Result};
pub use header::*;
