multiversx_sc::imports!();

use crate::types::Fingerprint;

// Events carry identifiers only. No plaintext amount is ever logged
// before the oracle reveals a batch total.

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Access control ──

    #[event("ownershipTransferred")]
    fn ownership_transferred_event(
        &self,
        #[indexed] previous_owner: &ManagedAddress,
        #[indexed] new_owner: &ManagedAddress,
    );

    #[event("providerAdded")]
    fn provider_added_event(&self, #[indexed] provider: &ManagedAddress);

    #[event("providerRemoved")]
    fn provider_removed_event(&self, #[indexed] provider: &ManagedAddress);

    #[event("paused")]
    fn paused_event(&self, #[indexed] by: &ManagedAddress);

    #[event("unpaused")]
    fn unpaused_event(&self, #[indexed] by: &ManagedAddress);

    // ── Configuration ──

    #[event("cooldownUpdated")]
    fn cooldown_updated_event(&self, #[indexed] old_seconds: u64, #[indexed] new_seconds: u64);

    #[event("fheExecutorUpdated")]
    fn fhe_executor_updated_event(
        &self,
        #[indexed] old_address: &ManagedAddress,
        #[indexed] new_address: &ManagedAddress,
    );

    #[event("decryptionOracleUpdated")]
    fn decryption_oracle_updated_event(
        &self,
        #[indexed] old_address: &ManagedAddress,
        #[indexed] new_address: &ManagedAddress,
    );

    // ── Batches ──

    #[event("batchOpened")]
    fn batch_opened_event(
        &self,
        #[indexed] batch_id: u64,
        #[indexed] provider: &ManagedAddress,
        opened_at: u64,
    );

    #[event("batchClosed")]
    fn batch_closed_event(
        &self,
        #[indexed] batch_id: u64,
        #[indexed] provider: &ManagedAddress,
        closed_at: u64,
    );

    // ── Tips ──

    #[event("tipSubmitted")]
    fn tip_submitted_event(
        &self,
        #[indexed] contributor: &ManagedAddress,
        #[indexed] batch_id: u64,
        tip_index: u64,
    );

    // ── Decryption ──

    #[event("decryptionRequested")]
    fn decryption_requested_event(
        &self,
        #[indexed] request_id: u64,
        #[indexed] batch_id: u64,
        state_fingerprint: &Fingerprint<Self::Api>,
    );

    #[event("decryptionCompleted")]
    fn decryption_completed_event(
        &self,
        #[indexed] request_id: u64,
        #[indexed] batch_id: u64,
        total: u64,
    );
}
