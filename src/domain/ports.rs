use super::receipt::{Points, ReceiptId};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Keeps the score of every processed receipt for the lifetime of the process.
///
/// Each id is written once, right after a successful score; entries are never
/// updated or removed.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    async fn put(&self, id: ReceiptId, points: Points) -> Result<()>;
    async fn get(&self, id: &ReceiptId) -> Result<Option<Points>>;
    async fn len(&self) -> Result<usize>;
}

pub type ReceiptStoreRef = Arc<dyn ReceiptStore>;
