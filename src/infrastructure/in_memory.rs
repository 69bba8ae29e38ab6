use crate::domain::ports::ReceiptStore;
use crate::domain::receipt::{Points, ReceiptId};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for receipt scores.
///
/// Uses `Arc<RwLock<HashMap<ReceiptId, Points>>>` so request handlers can share
/// it. Everything is lost when the process exits.
#[derive(Default, Clone)]
pub struct InMemoryReceiptStore {
    scores: Arc<RwLock<HashMap<ReceiptId, Points>>>,
}

impl InMemoryReceiptStore {
    /// Creates a new, empty in-memory receipt store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn put(&self, id: ReceiptId, points: Points) -> Result<()> {
        let mut scores = self.scores.write().await;
        scores.insert(id, points);
        Ok(())
    }

    async fn get(&self, id: &ReceiptId) -> Result<Option<Points>> {
        let scores = self.scores.read().await;
        Ok(scores.get(id).copied())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.scores.read().await.len())
    }
}
