use super::{StoreError, VoteStore};
use crate::models::{PollOption, Vote};
use async_trait::async_trait;
use tokio::sync::RwLock;

// In-memory store, mostly for tests
#[derive(Default)]
pub struct MemoryStore {
    options: RwLock<Vec<PollOption>>,
    votes: RwLock<Vec<Vote>>,
}

impl MemoryStore {
    pub fn new(options: Vec<PollOption>, votes: Vec<Vote>) -> Self {
        Self {
            options: RwLock::new(options),
            votes: RwLock::new(votes),
        }
    }

    pub async fn set_options(&self, options: Vec<PollOption>) {
        *self.options.write().await = options;
    }
}

#[async_trait]
impl VoteStore for MemoryStore {
    async fn get_options(&self) -> Result<Vec<PollOption>, StoreError> {
        Ok(self.options.read().await.clone())
    }

    async fn get_votes(&self) -> Result<Vec<Vote>, StoreError> {
        Ok(self.votes.read().await.clone())
    }

    async fn append_vote(&self, vote: &Vote) -> Result<(), StoreError> {
        self.votes.write().await.push(vote.clone());
        Ok(())
    }

    async fn vote_log_bytes(&self) -> Result<Vec<u8>, StoreError> {
        let votes = self.votes.read().await;
        Ok(serde_json::to_vec(&*votes)?)
    }
}
