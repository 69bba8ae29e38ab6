use crate::domain::ports::ReceiptStoreRef;
use crate::domain::receipt::{Points, ReceiptId};
use crate::domain::rules;
use crate::error::{ReceiptError, Result};
use serde_json::Value;

/// The main entry point for processing receipts.
///
/// `ReceiptProcessor` scores receipts and remembers the result under a fresh id.
/// It owns a handle to the storage backend; cloning it shares that backend.
#[derive(Clone)]
pub struct ReceiptProcessor {
    store: ReceiptStoreRef,
}

impl ReceiptProcessor {
    /// Creates a new `ReceiptProcessor` backed by `store`.
    pub fn new(store: ReceiptStoreRef) -> Self {
        Self { store }
    }

    /// Scores `receipt` and stores the result.
    ///
    /// Nothing is written when the receipt is invalid.
    pub async fn process(&self, receipt: &Value) -> Result<ReceiptId> {
        let points = rules::score(receipt).inspect_err(|error| {
            tracing::warn!(reason = %error, "Rejected invalid receipt");
        })?;

        let id = ReceiptId::generate();
        self.store.put(id.clone(), points).await?;

        tracing::info!(%id, %points, "Processed receipt");
        Ok(id)
    }

    /// Looks up the points stored for `raw_id`.
    ///
    /// The id is checked before the store is consulted.
    pub async fn points(&self, raw_id: &str) -> Result<Points> {
        let id = ReceiptId::parse(raw_id).inspect_err(|_| {
            tracing::warn!(id = raw_id, "Rejected malformed receipt id");
        })?;

        let points = self.store.get(&id).await?;
        tracing::debug!(%id, found = points.is_some(), "Looked up receipt points");
        points.ok_or_else(|| ReceiptError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ReceiptStore;
    use crate::infrastructure::in_memory::InMemoryReceiptStore;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn processor() -> (ReceiptProcessor, InMemoryReceiptStore) {
        let store = InMemoryReceiptStore::new();
        (ReceiptProcessor::new(Arc::new(store.clone())), store)
    }

    fn morning_receipt() -> Value {
        json!({
            "retailer": "Walgreens",
            "purchaseDate": "2022-01-02",
            "purchaseTime": "08:13",
            "total": "2.65",
            "items": [
                {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
                {"shortDescription": "Dasani", "price": "1.40"}
            ]
        })
    }

    #[tokio::test]
    async fn test_process_then_lookup_round_trip() {
        let (processor, _) = processor();
        let receipt = morning_receipt();

        let id = processor.process(&receipt).await.unwrap();
        let points = processor.points(id.as_str()).await.unwrap();

        assert_eq!(points, rules::score(&receipt).unwrap());
    }

    #[tokio::test]
    async fn test_each_process_gets_a_new_id() {
        let (processor, store) = processor();
        let receipt = morning_receipt();

        let first = processor.process(&receipt).await.unwrap();
        let second = processor.process(&receipt).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_invalid_receipt_is_not_stored() {
        let (processor, store) = processor();
        let mut receipt = morning_receipt();
        receipt["items"] = json!([]);

        let result = processor.process(&receipt).await;

        assert!(matches!(result, Err(ReceiptError::Validation(_))));
        assert_eq!(store.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let (processor, _) = processor();
        let result = processor.points("does-not-exist").await;
        assert!(matches!(result, Err(ReceiptError::NotFound(id)) if id == "does-not-exist"));
    }

    /// Counts lookups so tests can prove the store was never touched.
    #[derive(Default)]
    struct CountingStore {
        inner: InMemoryReceiptStore,
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl ReceiptStore for CountingStore {
        async fn put(&self, id: ReceiptId, points: Points) -> Result<()> {
            self.inner.put(id, points).await
        }

        async fn get(&self, id: &ReceiptId) -> Result<Option<Points>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.get(id).await
        }

        async fn len(&self) -> Result<usize> {
            self.inner.len().await
        }
    }

    #[tokio::test]
    async fn test_malformed_id_skips_store_lookup() {
        let store = Arc::new(CountingStore::default());
        let processor = ReceiptProcessor::new(store.clone());

        let result = processor.points("abc 123").await;

        assert!(matches!(result, Err(ReceiptError::InvalidId(_))));
        assert_eq!(store.lookups.load(Ordering::SeqCst), 0);

        let _ = processor.points("abc123").await;
        assert_eq!(store.lookups.load(Ordering::SeqCst), 1);
    }
}
