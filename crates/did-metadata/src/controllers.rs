//! Builders for controller-set update records.
//!
//! These functions validate structure only (non-empty resulting
//! controller set, no duplicates). They do not check whether `signer` is
//! actually authorized to make the change — that is the ledger-side
//! verifier's job, consuming the controller set at the update's parent
//! block height (see `did-ledger`).

use chrono::{DateTime, SubsecRound, Utc};

use crate::error::MetadataError;
use crate::record::{Operation, RecordV1_1};

/// Builds an `add_controller` update record: `new_address` joins the
/// current controller set.
///
/// # Errors
/// Returns [`MetadataError::DuplicateController`] if `new_address` is
/// already a controller.
pub fn add_controller(
    current: &RecordV1_1,
    new_address: &str,
    at: DateTime<Utc>,
) -> Result<RecordV1_1, MetadataError> {
    if current.controllers.iter().any(|c| c == new_address) {
        return Err(MetadataError::DuplicateController(new_address.to_string()));
    }

    let mut controllers = current.controllers.clone();
    controllers.push(new_address.to_string());

    let updated = RecordV1_1 {
        controllers,
        operation: Operation::AddController,
        enrollment_timestamp: at.trunc_subsecs(3),
        ..current.clone()
    };
    updated.validate()?;
    Ok(updated)
}

/// Builds a `remove_controller` update record: `address` leaves the
/// current controller set.
///
/// # Errors
/// - [`MetadataError::MissingField`] if `address` is not a current
///   controller.
/// - [`MetadataError::EmptyControllers`] if removing it would leave the
///   controller set empty.
pub fn remove_controller(
    current: &RecordV1_1,
    address: &str,
    at: DateTime<Utc>,
) -> Result<RecordV1_1, MetadataError> {
    if !current.controllers.iter().any(|c| c == address) {
        return Err(MetadataError::MissingField(format!("{address} is not a current controller")));
    }

    let controllers: Vec<String> =
        current.controllers.iter().filter(|c| c.as_str() != address).cloned().collect();

    let updated = RecordV1_1 {
        controllers,
        operation: Operation::RemoveController,
        enrollment_timestamp: at.trunc_subsecs(3),
        ..current.clone()
    };
    updated.validate()?;
    Ok(updated)
}

/// Builds a revocation record marking the DID revoked as of `at`.
///
/// # Errors
/// Propagates any [`MetadataError`] from [`RecordV1_1::validate`].
pub fn revoke(current: &RecordV1_1, at: DateTime<Utc>) -> Result<RecordV1_1, MetadataError> {
    let at = at.trunc_subsecs(3);
    let updated = RecordV1_1 {
        operation: Operation::Revocation,
        revoked: true,
        revoked_at: Some(at),
        enrollment_timestamp: at,
        ..current.clone()
    };
    updated.validate()?;
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::{add_controller, remove_controller, revoke};
    use crate::record::{BiometricSection, HelperStorage, Operation, RecordV1_1, VERSION};
    use chrono::Utc;

    fn base_record() -> RecordV1_1 {
        let did = did_identifier::did_from_commitment(&[2u8; 32], did_identifier::Network::Testnet);
        RecordV1_1 {
            version: VERSION.to_string(),
            did: did.to_string(),
            controllers: vec!["addr_a".to_string()],
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
    fn add_controller_appends_the_new_address() {
        let record = base_record();
        let updated = add_controller(&record, "addr_b", Utc::now()).unwrap();
        assert_eq!(updated.controllers, vec!["addr_a".to_string(), "addr_b".to_string()]);
        assert_eq!(updated.operation, Operation::AddController);
    }

    #[test]
    fn add_controller_rejects_existing_controller() {
        let record = base_record();
        assert!(add_controller(&record, "addr_a", Utc::now()).is_err());
    }

    #[test]
    fn remove_controller_drops_the_address() {
        let mut record = base_record();
        record.controllers.push("addr_b".to_string());
        let updated = remove_controller(&record, "addr_a", Utc::now()).unwrap();
        assert_eq!(updated.controllers, vec!["addr_b".to_string()]);
    }

    #[test]
    fn remove_controller_cannot_empty_the_set() {
        let record = base_record();
        assert!(remove_controller(&record, "addr_a", Utc::now()).is_err());
    }

    #[test]
    fn revoke_sets_revoked_and_revoked_at() {
        let record = base_record();
        let updated = revoke(&record, Utc::now()).unwrap();
        assert!(updated.revoked);
        assert!(updated.revoked_at.is_some());
        assert_eq!(updated.operation, Operation::Revocation);
    }
}
