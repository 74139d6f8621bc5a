//! Drives a single end-to-end enrollment: quantize → `Gen` → aggregate →
//! derive a DID → check the ledger for a pre-existing identity → assemble
//! the v1.1 metadata record.
//!
//! This module does not submit the assembled record — that is the
//! caller's responsibility, via whatever transaction-assembly layer
//! wraps the `did_ledger::LedgerIndex` this module only queries.

use std::collections::BTreeMap;

use chrono::{SubsecRound, Utc};
use rand_core::{CryptoRng, RngCore};
use tracing::info;

use did_aggregator::{aggregate, FallbackThresholds};
use did_fuzzy_extractor::gen;
use did_identifier::{did_from_commitment, Network};
use did_ledger::LedgerIndex;
use did_metadata::{
    encode, BiometricSection, HelperStorage, MetadataError, Operation, RecordV1_1, VERSION,
};
use did_quantizer::{quantize, FingerTemplate, QuantParams};

use crate::commitment::master_commitment;
use crate::error::CoordinatorError;
use crate::helper_store::HelperStore;

/// Enrolls up to ten finger templates into a single DID, assembling the
/// v1.1 metadata record a caller should submit to `ledger`.
///
/// Per spec §4.7:
/// 1. Every template is quantized and run through `Gen`; an
///    [`CoordinatorError::InsufficientFeatures`] on any one of them
///    aborts the whole enrollment immediately (`Gen` itself cannot
///    fail, so quantization is the only failure mode here).
/// 2. The resulting finger keys are aggregated with `enrolled_count`
///    equal to the number of templates presented.
/// 3. The master commitment and DID are derived.
/// 4. `ledger.exists` is checked; an existing record short-circuits with
///    [`CoordinatorError::DuplicateEnrollment`].
/// 5. The v1.1 record is assembled, with helper data stored inline if it
///    fits the size bound, or pushed through `helper_store` otherwise.
///
/// # Errors
/// See the variants of [`CoordinatorError`].
pub async fn enroll(
    templates: Vec<FingerTemplate>,
    network: Network,
    wallet_address: &str,
    quant_params: &QuantParams,
    thresholds: &FallbackThresholds,
    ledger: &dyn LedgerIndex,
    helper_store: &dyn HelperStore,
    rng: &mut (impl RngCore + CryptoRng),
) -> Result<RecordV1_1, CoordinatorError> {
    let enrolled_count = templates.len();
    let mut presented = Vec::with_capacity(enrolled_count);
    let mut helpers = BTreeMap::new();

    for template in templates {
        let finger_id = template.finger_id;
        let quality = template.quality;
        let vector = quantize(&template, quant_params)
            .map_err(|source| CoordinatorError::InsufficientFeatures { finger: finger_id, source })?;
        let (key, helper) = gen(vector, finger_id, rng);
        presented.push((finger_id, key, quality));
        helpers.insert(finger_id.tag().to_string(), helper);
    }

    let aggregation = aggregate(presented, enrolled_count, thresholds)
        .map_err(|source| CoordinatorError::Aggregation { source, finger_failures: Vec::new() })?;

    let commitment = master_commitment(&aggregation.master_key, &aggregation.fingers_used);
    let did = did_from_commitment(&commitment, network);
    let did_text = did.to_string();

    if let Some(existing) = ledger.exists(&did_text).await? {
        info!(did = %did_text, "enrollment matched an existing record");
        return Err(CoordinatorError::DuplicateEnrollment(Box::new(existing)));
    }

    let id_hash = bs58::encode(commitment).into_string();
    let mut record = RecordV1_1 {
        version: VERSION.to_string(),
        did: did_text.clone(),
        controllers: vec![wallet_address.to_string()],
        enrollment_timestamp: Utc::now().trunc_subsecs(3),
        biometric: BiometricSection {
            id_hash: id_hash.clone(),
            helper_storage: HelperStorage::Inline,
            helper_uri: None,
            helper_data: Some(helpers.clone()),
        },
        operation: Operation::Enrollment,
        revoked: false,
        revoked_at: None,
    };

    match encode(&record.clone().into()) {
        Ok(_) => {}
        Err(MetadataError::RecordTooLarge { .. }) => {
            let uri =
                helper_store.put(&did_text, &helpers).await.map_err(CoordinatorError::HelperStore)?;
            record.biometric = BiometricSection {
                id_hash,
                helper_storage: HelperStorage::External,
                helper_uri: Some(uri),
                helper_data: None,
            };
        }
        Err(other) => return Err(other.into()),
    }

    info!(did = %did_text, fallback = aggregation.fallback_mode, "assembled enrollment record");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::enroll;
    use crate::error::CoordinatorError;
    use crate::helper_store::HelperStore;
    use async_trait::async_trait;
    use did_aggregator::FallbackThresholds;
    use did_identifier::Network;
    use did_ledger::{InMemoryLedger, Signer};
    use did_metadata::{HelperStorage, Operation};
    use did_quantizer::{FingerId, FingerTemplate, Minutia, QuantParams};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct MemoryHelperStore;

    #[async_trait]
    impl HelperStore for MemoryHelperStore {
        async fn put(
            &self,
            did: &str,
            _helpers: &BTreeMap<String, did_fuzzy_extractor::HelperData>,
        ) -> Result<String, String> {
            Ok(format!("mem://helpers/{did}"))
        }
    }

    fn sample_minutiae(seed: u32) -> Vec<Minutia> {
        (0..20)
            .map(|i| {
                Minutia::new(
                    100 + seed * 37 + i * 300,
                    200 + seed * 53 + i * 250,
                    ((i * 37 + seed) % 360) as u16,
                )
            })
            .collect()
    }

    fn sample_templates() -> Vec<FingerTemplate> {
        vec![
            FingerTemplate::new(FingerId::LThumb, sample_minutiae(1), 90),
            FingerTemplate::new(FingerId::LIndex, sample_minutiae(2), 90),
            FingerTemplate::new(FingerId::RThumb, sample_minutiae(3), 90),
            FingerTemplate::new(FingerId::RIndex, sample_minutiae(4), 90),
        ]
    }

    #[tokio::test]
    async fn happy_path_enrollment_produces_a_record() {
        let ledger = InMemoryLedger::new();
        let store = MemoryHelperStore;
        let mut rng = StdRng::seed_from_u64(1);

        let record = enroll(
            sample_templates(),
            Network::Testnet,
            "addr_a",
            &QuantParams::default(),
            &FallbackThresholds::default(),
            &ledger,
            &store,
            &mut rng,
        )
        .await
        .unwrap();

        assert_eq!(record.operation, Operation::Enrollment);
        assert!(!record.revoked);
        assert_eq!(record.controllers, vec!["addr_a".to_string()]);
        assert!(record.did.starts_with("did:biodid:testnet:"));
        assert_eq!(record.biometric.helper_storage, HelperStorage::Inline);
        assert_eq!(record.biometric.helper_data.as_ref().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn enrolling_the_same_templates_twice_yields_the_same_did() {
        let ledger_a = InMemoryLedger::new();
        let ledger_b = InMemoryLedger::new();
        let store = MemoryHelperStore;

        let mut rng_a = StdRng::seed_from_u64(10);
        let record_a = enroll(
            sample_templates(),
            Network::Testnet,
            "addr_a",
            &QuantParams::default(),
            &FallbackThresholds::default(),
            &ledger_a,
            &store,
            &mut rng_a,
        )
        .await
        .unwrap();

        // A fresh RNG draws different per-finger salts and messages, so
        // the helper bundles differ, but the DID must not.
        let mut rng_b = StdRng::seed_from_u64(99);
        let record_b = enroll(
            sample_templates(),
            Network::Testnet,
            "addr_a",
            &QuantParams::default(),
            &FallbackThresholds::default(),
            &ledger_b,
            &store,
            &mut rng_b,
        )
        .await
        .unwrap();

        assert_eq!(record_a.did, record_b.did);
        assert_ne!(record_a.biometric.helper_data, record_b.biometric.helper_data);
    }

    #[tokio::test]
    async fn duplicate_enrollment_is_rejected() {
        let ledger = InMemoryLedger::new();
        let store = MemoryHelperStore;
        let mut rng = StdRng::seed_from_u64(2);

        let record = enroll(
            sample_templates(),
            Network::Testnet,
            "addr_a",
            &QuantParams::default(),
            &FallbackThresholds::default(),
            &ledger,
            &store,
            &mut rng,
        )
        .await
        .unwrap();
        ledger.append(record.clone(), vec![Signer("addr_a".to_string())]).await.unwrap();

        let mut rng2 = StdRng::seed_from_u64(3);
        let err = enroll(
            sample_templates(),
            Network::Testnet,
            "addr_b",
            &QuantParams::default(),
            &FallbackThresholds::default(),
            &ledger,
            &store,
            &mut rng2,
        )
        .await
        .unwrap_err();

        match err {
            CoordinatorError::DuplicateEnrollment(existing) => assert_eq!(existing.did, record.did),
            other => panic!("expected DuplicateEnrollment, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn insufficient_features_fails_the_whole_enrollment() {
        let mut templates = sample_templates();
        templates[1] = FingerTemplate::new(FingerId::LIndex, Vec::new(), 90);

        let ledger = InMemoryLedger::new();
        let store = MemoryHelperStore;
        let mut rng = StdRng::seed_from_u64(5);

        let err = enroll(
            templates,
            Network::Testnet,
            "addr_a",
            &QuantParams::default(),
            &FallbackThresholds::default(),
            &ledger,
            &store,
            &mut rng,
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            CoordinatorError::InsufficientFeatures { finger: FingerId::LIndex, .. }
        ));
        assert!(ledger.history("did:biodid:testnet:does-not-exist").await.unwrap().is_empty());
    }
}
