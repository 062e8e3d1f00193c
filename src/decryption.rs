multiversx_sc::imports!();

use crate::{
    decryption_oracle_proxy,
    errors::{
        ERR_DUPLICATE_REQUEST, ERR_INVALID_PROOF, ERR_MALFORMED_CLEARTEXT, ERR_NOT_INITIALIZED,
        ERR_REPLAY_ATTEMPT, ERR_STATE_MISMATCH, ERR_UNKNOWN_REQUEST,
    },
    types::{CiphertextHandle, DecryptionContext, Fingerprint},
};

/// Endpoint the oracle calls back with the cleartext.
pub const DECRYPTION_CALLBACK_ENDPOINT: &[u8] = b"onDecryptionCallback";

/// Request/callback bridge to the decryption oracle.
///
/// A request and its answer are two independent calls, linked only by
/// the `DecryptionContext` stored under the oracle's request id. Other
/// transactions may run in between, so the callback re-derives the
/// fingerprint from current state before accepting anything.
#[multiversx_sc::module]
pub trait DecryptionModule:
    crate::access_control::AccessControlModule
    + crate::cooldown::CooldownModule
    + crate::accumulator::AccumulatorModule
    + crate::batches::BatchModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: requestBatchTotalDecryption
    // Closed batches only: an open total is still moving.
    // ========================================================

    #[endpoint(requestBatchTotalDecryption)]
    fn request_batch_total_decryption(&self, batch_id: u64) -> u64 {
        let provider = self.require_provider();
        self.require_not_paused();
        self.require_decryption_request_allowed(&provider);
        self.require_closed_batch(batch_id);

        // An empty batch was never seeded.
        let running_total = self.batch_aggregates(batch_id).get().running_total;
        require!(self.is_initialized(&running_total), ERR_NOT_INITIALIZED);

        let ciphertexts = self.serialized_batch_state(&running_total);
        let state_fingerprint = self.state_fingerprint(&ciphertexts);

        let oracle = self.decryption_oracle_address().get();
        let request_id: u64 = self
            .tx()
            .to(&oracle)
            .typed(decryption_oracle_proxy::DecryptionOracleProxy)
            .request_decryption(ciphertexts, ManagedBuffer::from(DECRYPTION_CALLBACK_ENDPOINT))
            .returns(ReturnsResult)
            .sync_call();

        require!(
            self.decryption_contexts(request_id).is_empty(),
            ERR_DUPLICATE_REQUEST
        );

        let now = self.blockchain().get_block_timestamp();
        self.decryption_contexts(request_id).set(DecryptionContext {
            batch_id,
            state_fingerprint: state_fingerprint.clone(),
            fulfilled: false,
            requested_by: provider.clone(),
            requested_at: now,
        });
        self.batch_decryption_requests(batch_id).push(&request_id);

        self.record_decryption_request(&provider);
        self.decryption_requested_event(request_id, batch_id, &state_fingerprint);

        request_id
    }

    // ========================================================
    // ENDPOINT: onDecryptionCallback
    // Anyone may relay the oracle's answer; the proof decides.
    // Check order: unknown request, replay, state drift, proof.
    // ========================================================

    #[endpoint(onDecryptionCallback)]
    fn on_decryption_callback(
        &self,
        request_id: u64,
        cleartext: ManagedBuffer,
        proof: ManagedBuffer,
    ) -> u64 {
        require!(
            !self.decryption_contexts(request_id).is_empty(),
            ERR_UNKNOWN_REQUEST
        );
        let mut context = self.decryption_contexts(request_id).get();

        require!(!context.fulfilled, ERR_REPLAY_ATTEMPT);

        let running_total = self.batch_aggregates(context.batch_id).get().running_total;
        let ciphertexts = self.serialized_batch_state(&running_total);
        require!(
            self.state_fingerprint(&ciphertexts) == context.state_fingerprint,
            ERR_STATE_MISMATCH
        );

        let oracle = self.decryption_oracle_address().get();
        let proof_valid: bool = self
            .tx()
            .to(&oracle)
            .typed(decryption_oracle_proxy::DecryptionOracleProxy)
            .verify_proof(request_id, cleartext.clone(), proof)
            .returns(ReturnsResult)
            .sync_call();
        require!(proof_valid, ERR_INVALID_PROOF);

        let total = match u64::top_decode(cleartext) {
            Ok(total) => total,
            Err(_) => sc_panic!(ERR_MALFORMED_CLEARTEXT),
        };

        context.fulfilled = true;
        self.decryption_contexts(request_id).set(&context);
        self.revealed_totals().insert(context.batch_id, total);

        self.decryption_completed_event(request_id, context.batch_id, total);

        total
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn serialized_batch_state(
        &self,
        running_total: &CiphertextHandle<Self::Api>,
    ) -> ManagedVec<ManagedBuffer> {
        let mut ciphertexts = ManagedVec::new();
        ciphertexts.push(self.serialize(running_total));
        ciphertexts
    }

    /// keccak256 over this contract's address followed by every
    /// serialized handle, so a fingerprint cannot be replayed against
    /// another deployment.
    fn state_fingerprint(
        &self,
        ciphertexts: &ManagedVec<ManagedBuffer>,
    ) -> Fingerprint<Self::Api> {
        let mut preimage = self.blockchain().get_sc_address().as_managed_buffer().clone();
        for ciphertext in ciphertexts.iter() {
            preimage.append(&ciphertext);
        }
        self.crypto().keccak256(&preimage)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getDecryptionContext)]
    fn get_decryption_context(&self, request_id: u64) -> DecryptionContext<Self::Api> {
        require!(
            !self.decryption_contexts(request_id).is_empty(),
            ERR_UNKNOWN_REQUEST
        );
        self.decryption_contexts(request_id).get()
    }

    #[view(getBatchDecryptionRequests)]
    fn get_batch_decryption_requests(&self, batch_id: u64) -> MultiValueEncoded<u64> {
        self.require_known_batch(batch_id);
        let mut result = MultiValueEncoded::new();
        for request_id in self.batch_decryption_requests(batch_id).iter() {
            result.push(request_id);
        }
        result
    }

    /// `None` until a verified callback has revealed the batch total.
    #[view(getRevealedTotal)]
    fn get_revealed_total(&self, batch_id: u64) -> Option<u64> {
        self.require_known_batch(batch_id);
        self.revealed_totals().get(&batch_id)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("decryptionOracleAddress")]
    fn decryption_oracle_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("decryptionContexts")]
    fn decryption_contexts(
        &self,
        request_id: u64,
    ) -> SingleValueMapper<DecryptionContext<Self::Api>>;

    #[storage_mapper("batchDecryptionRequests")]
    fn batch_decryption_requests(&self, batch_id: u64) -> VecMapper<u64>;

    /// Latest verified total per batch. A total of 0 is a real answer.
    #[storage_mapper("revealedTotals")]
    fn revealed_totals(&self) -> MapMapper<u64, u64>;
}
