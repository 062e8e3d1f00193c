multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_INDEX, ERR_NOT_INITIALIZED};
use crate::types::{CiphertextHandle, TipRecord};

/// Append-only log of encrypted tips. A tip's ledger index (1-based)
/// is its permanent identity.
#[multiversx_sc::module]
pub trait TipLedgerModule:
    crate::access_control::AccessControlModule
    + crate::cooldown::CooldownModule
    + crate::accumulator::AccumulatorModule
    + crate::batches::BatchModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: submitTip
    // Everything is checked before anything is written.
    // ========================================================

    #[endpoint(submitTip)]
    fn submit_tip(
        &self,
        encrypted_amount: CiphertextHandle<Self::Api>,
        encrypted_annotation_part1: CiphertextHandle<Self::Api>,
        encrypted_annotation_part2: CiphertextHandle<Self::Api>,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_not_paused();
        self.require_submission_allowed(&caller);

        let batch = self.require_open_batch();

        require!(self.is_initialized(&encrypted_amount), ERR_NOT_INITIALIZED);
        require!(
            self.is_initialized(&encrypted_annotation_part1),
            ERR_NOT_INITIALIZED
        );
        require!(
            self.is_initialized(&encrypted_annotation_part2),
            ERR_NOT_INITIALIZED
        );

        // ── Fold into the batch total: seed on first tip, merge after ──
        let mut aggregate = self.batch_aggregates(batch.id).get();
        aggregate.running_total = if aggregate.tip_count == 0 {
            encrypted_amount.clone()
        } else {
            self.merge(&aggregate.running_total, &encrypted_amount)
        };
        aggregate.tip_count += 1;
        self.batch_aggregates(batch.id).set(&aggregate);

        let record = TipRecord {
            contributor: caller.clone(),
            batch_id: batch.id,
            encrypted_amount,
            encrypted_annotation_part1,
            encrypted_annotation_part2,
        };
        let tip_index = self.tips().push(&record) as u64;
        self.batch_tips(batch.id).push(&tip_index);
        self.contributor_tips(&caller).push(&tip_index);

        self.record_submission(&caller);
        self.tip_submitted_event(&caller, batch.id, tip_index);

        tip_index
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getTipCount)]
    fn get_tip_count(&self) -> u64 {
        self.tips().len() as u64
    }

    #[view(getTip)]
    fn get_tip(&self, tip_index: u64) -> TipRecord<Self::Api> {
        require!(
            tip_index >= 1 && tip_index <= self.tips().len() as u64,
            ERR_INVALID_INDEX
        );
        self.tips().get(tip_index as usize)
    }

    #[view(getBatchTipIndices)]
    fn get_batch_tip_indices(&self, batch_id: u64) -> MultiValueEncoded<u64> {
        self.require_known_batch(batch_id);
        let mut result = MultiValueEncoded::new();
        for tip_index in self.batch_tips(batch_id).iter() {
            result.push(tip_index);
        }
        result
    }

    #[view(getContributorTips)]
    fn get_contributor_tips(&self, contributor: ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for tip_index in self.contributor_tips(&contributor).iter() {
            result.push(tip_index);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("tips")]
    fn tips(&self) -> VecMapper<TipRecord<Self::Api>>;

    #[storage_mapper("batchTips")]
    fn batch_tips(&self, batch_id: u64) -> VecMapper<u64>;

    #[storage_mapper("contributorTips")]
    fn contributor_tips(&self, contributor: &ManagedAddress) -> VecMapper<u64>;
}
