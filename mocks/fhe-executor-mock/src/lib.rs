#![no_std]

multiversx_sc::imports!();

pub mod fhe_executor_mock_proxy;

pub type Handle<M> = ManagedByteArray<M, 32>;

const HANDLE_SEED: &[u8] = b"fhe-executor-mock";

/// Plaintext-backed stand-in for an FHE executor, for scenario tests.
///
/// Every handle it hands out maps to a plaintext `u64` kept in storage.
/// `add` wraps on overflow, like 64-bit encrypted integers do.
#[multiversx_sc::contract]
pub trait FheExecutorMock {
    #[init]
    fn init(&self) {}

    #[endpoint(trivialEncrypt)]
    fn trivial_encrypt(&self, value: u64) -> Handle<Self::Api> {
        self.new_handle(value)
    }

    #[endpoint(add)]
    fn add(&self, lhs: Handle<Self::Api>, rhs: Handle<Self::Api>) -> Handle<Self::Api> {
        let lhs_value = self.plaintext_of(lhs.as_managed_buffer());
        let rhs_value = self.plaintext_of(rhs.as_managed_buffer());
        self.new_handle(lhs_value.wrapping_add(rhs_value))
    }

    #[view(isInitialized)]
    fn is_initialized(&self, handle: Handle<Self::Api>) -> bool {
        self.known(handle.as_managed_buffer()).get()
    }

    /// Takes the serialized form the oracle receives.
    #[view(decrypt)]
    fn decrypt(&self, ciphertext: ManagedBuffer) -> u64 {
        self.plaintext_of(&ciphertext)
    }

    fn new_handle(&self, value: u64) -> Handle<Self::Api> {
        let nonce = self.handle_nonce().update(|nonce| {
            *nonce += 1;
            *nonce
        });
        let mut seed = ManagedBuffer::new_from_bytes(HANDLE_SEED);
        seed.append_bytes(&nonce.to_be_bytes());

        let handle = self.crypto().keccak256(&seed);
        self.known(handle.as_managed_buffer()).set(true);
        self.plaintext(handle.as_managed_buffer()).set(value);
        handle
    }

    fn plaintext_of(&self, serialized: &ManagedBuffer) -> u64 {
        require!(self.known(serialized).get(), "Unknown handle");
        self.plaintext(serialized).get()
    }

    #[storage_mapper("handleNonce")]
    fn handle_nonce(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("known")]
    fn known(&self, serialized: &ManagedBuffer) -> SingleValueMapper<bool>;

    #[storage_mapper("plaintext")]
    fn plaintext(&self, serialized: &ManagedBuffer) -> SingleValueMapper<u64>;
}
