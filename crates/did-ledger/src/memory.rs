//! An in-memory [`LedgerIndex`] reference adapter.
//!
//! Grounded on `daa_chain::storage::FileStorage`'s `Arc<RwLock<HashMap<...>>>`
//! shape, traded here for a `Vec` per DID so [`LedgerIndex::history`] can
//! return records in append (block-height) order without a secondary
//! index. Not persistent — this is a reference/testing adapter, not a
//! production ledger integration (§1, §5).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use did_metadata::{Operation, RecordV1_1};

use crate::controller_fold::is_authorized;
use crate::error::LedgerError;
use crate::index::{LedgerIndex, Signer};

/// An in-memory, process-local [`LedgerIndex`].
///
/// Cloning is cheap: the backing store is reference-counted, so every
/// clone observes the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    records: Arc<RwLock<HashMap<String, Vec<RecordV1_1>>>>,
}

impl InMemoryLedger {
    /// Returns an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LedgerIndex for InMemoryLedger {
    async fn exists(&self, did: &str) -> Result<Option<RecordV1_1>, LedgerError> {
        let records = self.records.read().await;
        Ok(records.get(did).and_then(|history| history.first()).cloned())
    }

    async fn append(&self, record: RecordV1_1, signers: Vec<Signer>) -> Result<(), LedgerError> {
        record.validate().map_err(|e| LedgerError::SchemaInvalid(e.to_string()))?;

        let mut records = self.records.write().await;
        let history = records.entry(record.did.clone()).or_default();

        if record.operation == Operation::Enrollment {
            if !history.is_empty() {
                warn!(did = %record.did, "rejected duplicate enrollment");
                return Err(LedgerError::Conflict);
            }
        } else {
            if history.is_empty() {
                return Err(LedgerError::SchemaInvalid(
                    "update operation targets a DID with no prior enrollment".to_string(),
                ));
            }
            if !is_authorized(history, &signers) {
                warn!(did = %record.did, "rejected update: no authorized signer");
                return Err(LedgerError::BadSignature);
            }
        }

        debug!(did = %record.did, operation = ?record.operation, height = history.len(), "appended record");
        history.push(record);
        Ok(())
    }

    async fn history(&self, did: &str) -> Result<Vec<RecordV1_1>, LedgerError> {
        let records = self.records.read().await;
        Ok(records.get(did).cloned().unwrap_or_default())
    }
}
