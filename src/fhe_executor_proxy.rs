use multiversx_sc::proxy_imports::*;

use crate::types::CiphertextHandle;

/// Encryption-scheme collaborator: owns the ciphertexts behind the handles.
pub struct FheExecutorProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for FheExecutorProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = FheExecutorProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        FheExecutorProxyMethods { wrapped_tx: tx }
    }
}

pub struct FheExecutorProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> FheExecutorProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn is_initialized<Arg0: ProxyArg<CiphertextHandle<Env::Api>>>(
        self,
        handle: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isInitialized")
            .argument(&handle)
            .original_result()
    }

    /// Homomorphic addition. Returns a fresh handle for `lhs + rhs`.
    pub fn add<
        Arg0: ProxyArg<CiphertextHandle<Env::Api>>,
        Arg1: ProxyArg<CiphertextHandle<Env::Api>>,
    >(
        self,
        lhs: Arg0,
        rhs: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, CiphertextHandle<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("add")
            .argument(&lhs)
            .argument(&rhs)
            .original_result()
    }
}
