//! RockBLOCK client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RockblockError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
