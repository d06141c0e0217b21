//! Persistence for the option registry and the append-only vote log.
//!
//! Handlers talk to a [`VoteStore`] rather than to files directly, so the
//! flat-file store used in production can be swapped for [`MemoryStore`].

mod file;
mod memory;

use crate::models::{PollOption, Vote};
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed data in '{path}': {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode vote log: {0}")]
    Encode(#[from] serde_json::Error),
}

#[async_trait]
pub trait VoteStore: Send + Sync {
    /// Current option registry, re-read on every call.
    async fn get_options(&self) -> Result<Vec<PollOption>, StoreError>;

    /// Every vote recorded so far, including votes for options since removed.
    async fn get_votes(&self) -> Result<Vec<Vote>, StoreError>;

    async fn append_vote(&self, vote: &Vote) -> Result<(), StoreError>;

    /// Raw bytes of the vote log, used to fingerprint the statistics.
    async fn vote_log_bytes(&self) -> Result<Vec<u8>, StoreError>;
}
