//! Folds a DID's record history to answer "who may sign the next
//! update?" — the authorization check every [`crate::LedgerIndex::append`]
//! implementation must run before accepting a non-enrollment record.
//!
//! Each update record already stores its *resulting* controller set (see
//! `did_metadata::controllers::add_controller`/`remove_controller`), so
//! folding reduces to reading the last record in block-height order: that
//! is the controller set at the update's parent height, the set the new
//! submission's signers must intersect.

use did_metadata::RecordV1_1;

use crate::index::Signer;

/// Whether at least one of `signers` is a controller in `history`'s most
/// recent record.
///
/// Returns `false` for empty history: there is no DID to update yet, so
/// nothing is authorized to sign against it.
#[must_use]
pub fn is_authorized(history: &[RecordV1_1], signers: &[Signer]) -> bool {
    let Some(parent) = history.last() else {
        return false;
    };
    signers.iter().any(|signer| parent.controllers.iter().any(|c| *c == signer.0))
}

#[cfg(test)]
mod tests {
    use super::is_authorized;
    use crate::index::Signer;
    use did_metadata::{BiometricSection, HelperStorage, Operation, RecordV1_1, VERSION};
    use chrono::Utc;

    fn record_with_controllers(controllers: Vec<&str>) -> RecordV1_1 {
        RecordV1_1 {
            version: VERSION.to_string(),
            did: "did:biodid:testnet:x".to_string(),
            controllers: controllers.into_iter().map(String::from).collect(),
            enrollment_timestamp: Utc::now(),
            biometric: BiometricSection {
                id_hash: bs58::encode([9u8; 32]).into_string(),
                helper_storage: HelperStorage::External,
                helper_uri: Some("https://example.test/h".to_string()),
                helper_data: None,
            },
            operation: Operation::Enrollment,
            revoked: false,
            revoked_at: None,
        }
    }

    #[test]
    fn empty_history_authorizes_nobody() {
        assert!(!is_authorized(&[], &[Signer("addr_a".to_string())]));
    }

    #[test]
    fn a_current_controller_is_authorized() {
        let history = vec![record_with_controllers(vec!["addr_a", "addr_b"])];
        assert!(is_authorized(&history, &[Signer("addr_b".to_string())]));
    }

    #[test]
    fn a_former_controller_dropped_by_the_latest_record_is_not_authorized() {
        let history = vec![
            record_with_controllers(vec!["addr_a", "addr_b"]),
            record_with_controllers(vec!["addr_a"]),
        ];
        assert!(!is_authorized(&history, &[Signer("addr_b".to_string())]));
    }
}
