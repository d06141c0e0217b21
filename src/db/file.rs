use super::{StoreError, VoteStore};
use crate::models::{PollOption, Vote};
use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

// Options and submissions kept as two JSON files on disk
pub struct FileStore {
    options_path: PathBuf,
    submissions_path: PathBuf,
    // Serializes read-modify-write of the vote log within this process
    append_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(options_path: impl Into<PathBuf>, submissions_path: impl Into<PathBuf>) -> Self {
        Self {
            options_path: options_path.into(),
            submissions_path: submissions_path.into(),
            append_lock: Mutex::new(()),
        }
    }

    // Create an empty vote log if none exists yet
    pub async fn init(&self) -> Result<(), StoreError> {
        let exists = fs::try_exists(&self.submissions_path)
            .await
            .map_err(|source| StoreError::Read {
                path: self.submissions_path.clone(),
                source,
            })?;

        if exists {
            info!("Using vote log at {}", self.submissions_path.display());
        } else {
            warn!(
                "Vote log {} not found, creating an empty one",
                self.submissions_path.display()
            );
            write_file(&self.submissions_path, "[]").await?;
        }

        if !fs::try_exists(&self.options_path).await.unwrap_or(false) {
            warn!(
                "Options file {} not found, requests will fail until it exists",
                self.options_path.display()
            );
        }

        Ok(())
    }
}

#[async_trait]
impl VoteStore for FileStore {
    async fn get_options(&self) -> Result<Vec<PollOption>, StoreError> {
        read_json(&self.options_path).await
    }

    async fn get_votes(&self) -> Result<Vec<Vote>, StoreError> {
        read_json(&self.submissions_path).await
    }

    async fn append_vote(&self, vote: &Vote) -> Result<(), StoreError> {
        let _guard = self.append_lock.lock().await;

        let mut votes: Vec<Vote> = read_json(&self.submissions_path).await?;
        votes.push(vote.clone());

        let contents = serde_json::to_string_pretty(&votes)?;
        write_file(&self.submissions_path, &contents).await?;

        debug!("Appended vote for '{}' ({} total)", vote.option_id(), votes.len());
        Ok(())
    }

    async fn vote_log_bytes(&self) -> Result<Vec<u8>, StoreError> {
        fs::read(&self.submissions_path)
            .await
            .map_err(|source| StoreError::Read {
                path: self.submissions_path.clone(),
                source,
            })
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let contents = fs::read_to_string(path)
        .await
        .map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

async fn write_file(path: &Path, contents: &str) -> Result<(), StoreError> {
    fs::write(path, contents)
        .await
        .map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })
}
