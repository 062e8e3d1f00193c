use multiversx_sc::proxy_imports::*;

/// Decryption oracle collaborator. Answers later through the callback
/// endpoint named in the request.
pub struct DecryptionOracleProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for DecryptionOracleProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = DecryptionOracleProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        DecryptionOracleProxyMethods { wrapped_tx: tx }
    }
}

pub struct DecryptionOracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> DecryptionOracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn request_decryption<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedBuffer<Env::Api>>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        ciphertexts: Arg0,
        callback: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("requestDecryption")
            .argument(&ciphertexts)
            .argument(&callback)
            .original_result()
    }

    pub fn verify_proof<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        request_id: Arg0,
        cleartext: Arg1,
        proof: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("verifyProof")
            .argument(&request_id)
            .argument(&cleartext)
            .argument(&proof)
            .original_result()
    }
}
