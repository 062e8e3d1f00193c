#![no_std]

multiversx_sc::imports!();

pub mod decryption_oracle_mock_proxy;

use fhe_executor_mock::fhe_executor_mock_proxy;

const SIGNATURE_DOMAIN: &[u8] = b"decryption-oracle-mock";

/// Stand-in for a decryption oracle, for scenario tests.
///
/// Decrypts through the executor mock as soon as a request arrives and
/// signs `(request id, cleartext)` with a keccak256 tag. Whoever relays
/// the answer fetches it with `getSignedResult`. Cleartext is the
/// concatenation of each value as 8 big-endian bytes.
#[multiversx_sc::contract]
pub trait DecryptionOracleMock {
    #[init]
    fn init(&self, fhe_executor: ManagedAddress) {
        self.fhe_executor().set(&fhe_executor);
    }

    #[endpoint(requestDecryption)]
    fn request_decryption(
        &self,
        ciphertexts: ManagedVec<ManagedBuffer>,
        callback: ManagedBuffer,
    ) -> u64 {
        let executor = self.fhe_executor().get();
        let mut cleartext = ManagedBuffer::new();
        for ciphertext in ciphertexts.iter() {
            let value: u64 = self
                .tx()
                .to(&executor)
                .typed(fhe_executor_mock_proxy::FheExecutorMockProxy)
                .decrypt(ManagedBuffer::clone(&ciphertext))
                .returns(ReturnsResult)
                .sync_call();
            cleartext.append_bytes(&value.to_be_bytes());
        }

        let request_id = self.last_request_id().update(|id| {
            *id += 1;
            *id
        });
        self.requester(request_id).set(self.blockchain().get_caller());
        self.callback_endpoint(request_id).set(&callback);
        self.cleartext(request_id).set(&cleartext);

        request_id
    }

    #[view(verifyProof)]
    fn verify_proof(
        &self,
        request_id: u64,
        cleartext: ManagedBuffer,
        proof: ManagedBuffer,
    ) -> bool {
        if !self.is_known_request(request_id) {
            return false;
        }
        cleartext == self.cleartext(request_id).get()
            && proof == self.sign(request_id, &cleartext)
    }

    /// (cleartext, proof)
    #[view(getSignedResult)]
    fn get_signed_result(&self, request_id: u64) -> MultiValue2<ManagedBuffer, ManagedBuffer> {
        require!(self.is_known_request(request_id), "Unknown request");
        let cleartext = self.cleartext(request_id).get();
        let proof = self.sign(request_id, &cleartext);
        (cleartext, proof).into()
    }

    #[view(getRequester)]
    fn get_requester(&self, request_id: u64) -> ManagedAddress {
        require!(self.is_known_request(request_id), "Unknown request");
        self.requester(request_id).get()
    }

    /// Replaces the answer for a known request. The next
    /// `getSignedResult` signs whatever is stored here.
    #[endpoint(overrideCleartext)]
    fn override_cleartext(&self, request_id: u64, cleartext: ManagedBuffer) {
        require!(self.is_known_request(request_id), "Unknown request");
        self.cleartext(request_id).set(&cleartext);
    }

    /// Makes the next request reuse `last_request_id + 1`.
    #[endpoint(rewindRequestId)]
    fn rewind_request_id(&self, last_request_id: u64) {
        self.last_request_id().set(last_request_id);
    }

    #[view(getLastRequestId)]
    fn get_last_request_id(&self) -> u64 {
        self.last_request_id().get()
    }

    fn is_known_request(&self, request_id: u64) -> bool {
        request_id >= 1 && request_id <= self.last_request_id().get()
    }

    fn sign(&self, request_id: u64, cleartext: &ManagedBuffer) -> ManagedBuffer {
        let mut preimage = ManagedBuffer::new_from_bytes(SIGNATURE_DOMAIN);
        preimage.append(self.blockchain().get_sc_address().as_managed_buffer());
        preimage.append_bytes(&request_id.to_be_bytes());
        preimage.append(cleartext);
        self.crypto().keccak256(&preimage).as_managed_buffer().clone()
    }

    #[storage_mapper("fheExecutor")]
    fn fhe_executor(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("lastRequestId")]
    fn last_request_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("requester")]
    fn requester(&self, request_id: u64) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("callbackEndpoint")]
    fn callback_endpoint(&self, request_id: u64) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("cleartext")]
    fn cleartext(&self, request_id: u64) -> SingleValueMapper<ManagedBuffer>;
}
