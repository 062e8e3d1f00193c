multiversx_sc::imports!();

use crate::{
    fhe_executor_proxy,
    types::{is_zero_handle, CiphertextHandle},
};

/// Binding to the encryption-scheme collaborator.
///
/// The contract never sees plaintext: it only checks, merges and
/// serializes handles owned by the FHE executor. `merge` must be
/// associative and commutative, so a batch total does not depend on
/// submission order.
#[multiversx_sc::module]
pub trait AccumulatorModule {
    /// A handle is initialized when the executor produced it. The zero
    /// handle is rejected without asking.
    fn is_initialized(&self, handle: &CiphertextHandle<Self::Api>) -> bool {
        if is_zero_handle(handle) {
            return false;
        }

        let executor = self.fhe_executor_address().get();
        self.tx()
            .to(&executor)
            .typed(fhe_executor_proxy::FheExecutorProxy)
            .is_initialized(handle.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn merge(
        &self,
        current: &CiphertextHandle<Self::Api>,
        incoming: &CiphertextHandle<Self::Api>,
    ) -> CiphertextHandle<Self::Api> {
        let executor = self.fhe_executor_address().get();
        self.tx()
            .to(&executor)
            .typed(fhe_executor_proxy::FheExecutorProxy)
            .add(current.clone(), incoming.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn serialize(&self, handle: &CiphertextHandle<Self::Api>) -> ManagedBuffer {
        handle.as_managed_buffer().clone()
    }

    #[storage_mapper("fheExecutorAddress")]
    fn fhe_executor_address(&self) -> SingleValueMapper<ManagedAddress>;
}
