//! RockBLOCK (Iridium SBD) web services client.

mod client;
mod error;
mod types;

pub use client::{RockblockClient, DEFAULT_BASE_URL};
pub use error::RockblockError;
pub use types::*;
