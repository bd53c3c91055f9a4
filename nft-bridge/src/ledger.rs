//! Transfer Ledger
//!
//! Append-only record of inbound transfers that reached a terminal outcome on
//! this chain, keyed by `(source_chain_id, nonce)`. It is read before every
//! completion attempt and is the only thing standing between an at-least-once
//! relay and a double mint. Entries are never removed.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Order, StdError, StdResult, Storage, Timestamp};
use cw_storage_plus::{Bound, Map};

use common::{TransferIntent, TransferStatus};

use crate::error::ContractError;

/// Terminal outcome of one inbound transfer
#[cw_serde]
pub struct LedgerEntry {
    pub source_chain_id: u64,
    pub nonce: u64,
    pub origin_chain_id: u64,
    pub token_id: u64,
    pub recipient: String,
    /// 32-byte transfer hash of the consumed intent
    pub transfer_hash: Binary,
    /// `Completed` or `Failed`
    pub status: TransferStatus,
    /// Why the transfer failed (Failed entries only)
    pub reason: Option<String>,
    pub recorded_at: Timestamp,
}

/// Key: (source_chain_id, nonce), Value: LedgerEntry
pub const LEDGER: Map<(u64, u64), LedgerEntry> = Map::new("transfer_ledger");

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

pub fn load_entry(
    storage: &dyn Storage,
    source_chain_id: u64,
    nonce: u64,
) -> StdResult<Option<LedgerEntry>> {
    LEDGER.may_load(storage, (source_chain_id, nonce))
}

pub fn has_completed(storage: &dyn Storage, source_chain_id: u64, nonce: u64) -> StdResult<bool> {
    Ok(matches!(
        load_entry(storage, source_chain_id, nonce)?,
        Some(LedgerEntry {
            status: TransferStatus::Completed,
            ..
        })
    ))
}

pub fn record_completed(
    storage: &mut dyn Storage,
    now: Timestamp,
    intent: &TransferIntent,
) -> Result<LedgerEntry, ContractError> {
    record(storage, now, intent, TransferStatus::Completed, None)
}

pub fn record_failed(
    storage: &mut dyn Storage,
    now: Timestamp,
    intent: &TransferIntent,
    reason: String,
) -> Result<LedgerEntry, ContractError> {
    record(storage, now, intent, TransferStatus::Failed, Some(reason))
}

fn record(
    storage: &mut dyn Storage,
    now: Timestamp,
    intent: &TransferIntent,
    status: TransferStatus,
    reason: Option<String>,
) -> Result<LedgerEntry, ContractError> {
    let key = intent.ledger_key();
    if LEDGER.has(storage, key) {
        return Err(ContractError::AlreadyRecorded {
            source_chain_id: intent.source_chain_id,
            nonce: intent.nonce,
        });
    }

    let entry = LedgerEntry {
        source_chain_id: intent.source_chain_id,
        nonce: intent.nonce,
        origin_chain_id: intent.origin_chain_id,
        token_id: intent.token_id,
        recipient: intent.recipient.clone(),
        transfer_hash: Binary::from(intent.transfer_hash().to_vec()),
        status,
        reason,
        recorded_at: now,
    };
    LEDGER.save(storage, key, &entry)?;

    Ok(entry)
}

/// Entries in key order, optionally restricted to one source chain.
///
/// When restricted, a `start_after` cursor must belong to that chain.
pub fn entries(
    storage: &dyn Storage,
    source_chain_id: Option<u64>,
    start_after: Option<(u64, u64)>,
    limit: Option<u32>,
) -> StdResult<Vec<LedgerEntry>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

    match source_chain_id {
        Some(source_chain_id) => {
            let start = match start_after {
                Some((cursor_chain_id, _)) if cursor_chain_id != source_chain_id => {
                    return Err(StdError::generic_err(format!(
                        "cursor chain {} does not match source chain {}",
                        cursor_chain_id, source_chain_id
                    )));
                }
                Some((_, nonce)) => Some(Bound::exclusive(nonce)),
                None => None,
            };
            LEDGER
                .prefix(source_chain_id)
                .range(storage, start, None, Order::Ascending)
                .take(limit)
                .map(|item| item.map(|(_, entry)| entry))
                .collect()
        }
        None => {
            let start = start_after.map(Bound::exclusive);
            LEDGER
                .range(storage, start, None, Order::Ascending)
                .take(limit)
                .map(|item| item.map(|(_, entry)| entry))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    fn intent(nonce: u64) -> TransferIntent {
        TransferIntent {
            token_id: 5,
            origin_chain_id: 7001,
            source_chain_id: 7001,
            destination_chain_id: 11_155_111,
            recipient: "recipient".to_string(),
            nonce,
            status: TransferStatus::Pending,
        }
    }

    #[test]
    fn test_record_completed_once() {
        let mut storage = MockStorage::new();
        let now = Timestamp::from_seconds(1_000);

        assert!(!has_completed(&storage, 7001, 0).unwrap());
        let entry = record_completed(&mut storage, now, &intent(0)).unwrap();
        assert_eq!(entry.status, TransferStatus::Completed);
        assert_eq!(entry.transfer_hash.as_slice(), &intent(0).transfer_hash());
        assert!(has_completed(&storage, 7001, 0).unwrap());

        let err = record_completed(&mut storage, now, &intent(0)).unwrap_err();
        assert_eq!(
            err,
            ContractError::AlreadyRecorded {
                source_chain_id: 7001,
                nonce: 0
            }
        );
        assert!(err.is_idempotent_success());
    }

    #[test]
    fn test_failed_entry_is_not_completed_and_blocks_later_records() {
        let mut storage = MockStorage::new();
        let now = Timestamp::from_seconds(1_000);

        record_failed(&mut storage, now, &intent(1), "forged proof".to_string()).unwrap();
        assert!(!has_completed(&storage, 7001, 1).unwrap());

        let entry = load_entry(&storage, 7001, 1).unwrap().unwrap();
        assert_eq!(entry.status, TransferStatus::Failed);
        assert_eq!(entry.reason.as_deref(), Some("forged proof"));

        assert!(record_completed(&mut storage, now, &intent(1)).is_err());
    }

    #[test]
    fn test_nonce_scoped_per_source_chain() {
        let mut storage = MockStorage::new();
        let now = Timestamp::from_seconds(1_000);

        record_completed(&mut storage, now, &intent(0)).unwrap();
        let other_source = TransferIntent {
            source_chain_id: 97,
            ..intent(0)
        };
        record_completed(&mut storage, now, &other_source).unwrap();

        assert_eq!(entries(&storage, None, None, None).unwrap().len(), 2);
        let only_97 = entries(&storage, Some(97), None, None).unwrap();
        assert_eq!(only_97.len(), 1);
        assert_eq!(only_97[0].source_chain_id, 97);
    }

    #[test]
    fn test_filtered_cursor_must_match_chain() {
        let mut storage = MockStorage::new();
        let now = Timestamp::from_seconds(1_000);
        for nonce in 0..3 {
            record_completed(&mut storage, now, &intent(nonce)).unwrap();
        }

        let page = entries(&storage, Some(7001), Some((7001, 0)), None).unwrap();
        assert_eq!(
            page.iter().map(|e| e.nonce).collect::<Vec<_>>(),
            vec![1, 2]
        );

        let err = entries(&storage, Some(7001), Some((97, 0)), None).unwrap_err();
        assert!(err.to_string().contains("cursor chain 97"));
    }
}
