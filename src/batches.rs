multiversx_sc::imports!();

use crate::errors::{
    ERR_BATCH_ALREADY_OPEN, ERR_BATCH_NOT_OPEN, ERR_BATCH_STILL_OPEN, ERR_INVALID_BATCH,
};
use crate::types::{Batch, BatchAggregate};

// ============================================================
// Batch lifecycle: Closed → Open → Closed, one batch at a time.
// Only the latest batch can be open. Batch 0 is a closed sentinel
// so "no batch yet" and "batch closed" take the same path.
// ============================================================

#[multiversx_sc::module]
pub trait BatchModule:
    crate::access_control::AccessControlModule + crate::events::EventsModule
{
    fn init_batches(&self) {
        self.batches(0).set(Batch::sentinel());
        self.latest_batch_id().set(0u64);
    }

    #[endpoint(openBatch)]
    fn open_batch(&self) -> u64 {
        let provider = self.require_provider();
        self.require_not_paused();

        let latest = self.latest_batch();
        require!(!latest.is_open, ERR_BATCH_ALREADY_OPEN);

        let batch_id = latest.id + 1;
        let now = self.blockchain().get_block_timestamp();

        self.batches(batch_id).set(Batch {
            id: batch_id,
            is_open: true,
            opened_at: now,
            closed_at: 0,
        });
        self.batch_aggregates(batch_id)
            .set(BatchAggregate::<Self::Api>::empty());
        self.latest_batch_id().set(batch_id);

        self.batch_opened_event(batch_id, &provider, now);

        batch_id
    }

    #[endpoint(closeBatch)]
    fn close_batch(&self) -> u64 {
        let provider = self.require_provider();
        self.require_not_paused();

        let mut batch = self.latest_batch();
        require!(batch.is_open, ERR_BATCH_NOT_OPEN);

        let now = self.blockchain().get_block_timestamp();
        batch.is_open = false;
        batch.closed_at = now;
        self.batches(batch.id).set(&batch);

        self.batch_closed_event(batch.id, &provider, now);

        batch.id
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn latest_batch(&self) -> Batch {
        self.batches(self.latest_batch_id().get()).get()
    }

    /// The batch tips go into right now.
    fn require_open_batch(&self) -> Batch {
        let batch = self.latest_batch();
        require!(batch.is_open, ERR_BATCH_NOT_OPEN);
        batch
    }

    /// A batch that can be decrypted: real (id ≥ 1) and done collecting.
    fn require_closed_batch(&self, batch_id: u64) -> Batch {
        require!(
            batch_id >= 1 && batch_id <= self.latest_batch_id().get(),
            ERR_INVALID_BATCH
        );
        let batch = self.batches(batch_id).get();
        require!(!batch.is_open, ERR_BATCH_STILL_OPEN);
        batch
    }

    fn require_known_batch(&self, batch_id: u64) {
        require!(batch_id <= self.latest_batch_id().get(), ERR_INVALID_BATCH);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getLatestBatchId)]
    fn get_latest_batch_id(&self) -> u64 {
        self.latest_batch_id().get()
    }

    #[view(getCurrentBatch)]
    fn get_current_batch(&self) -> Batch {
        self.latest_batch()
    }

    #[view(getBatch)]
    fn get_batch(&self, batch_id: u64) -> Batch {
        self.require_known_batch(batch_id);
        self.batches(batch_id).get()
    }

    #[view(getBatches)]
    fn get_batches(&self, from: u64, count: u64) -> MultiValueEncoded<Batch> {
        let mut result = MultiValueEncoded::new();
        let latest = self.latest_batch_id().get();
        if count == 0 || from > latest {
            return result;
        }
        let end = core::cmp::min(from.saturating_add(count - 1), latest);

        for id in from..=end {
            result.push(self.batches(id).get());
        }
        result
    }

    #[view(getBatchAggregate)]
    fn get_batch_aggregate(&self, batch_id: u64) -> BatchAggregate<Self::Api> {
        self.require_known_batch(batch_id);
        if self.batch_aggregates(batch_id).is_empty() {
            return BatchAggregate::empty();
        }
        self.batch_aggregates(batch_id).get()
    }

    #[view(getBatchTipCount)]
    fn get_batch_tip_count(&self, batch_id: u64) -> u64 {
        self.get_batch_aggregate(batch_id).tip_count
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("latestBatchId")]
    fn latest_batch_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("batches")]
    fn batches(&self, batch_id: u64) -> SingleValueMapper<Batch>;

    #[storage_mapper("batchAggregates")]
    fn batch_aggregates(
        &self,
        batch_id: u64,
    ) -> SingleValueMapper<BatchAggregate<Self::Api>>;
}
