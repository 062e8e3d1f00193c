#![allow(dead_code)]

use confidential_tips::confidential_tips_proxy;
use decryption_oracle_mock::decryption_oracle_mock_proxy;
use fhe_executor_mock::fhe_executor_mock_proxy;
use multiversx_sc_scenario::imports::*;

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const PROVIDER: TestAddress = TestAddress::new("provider");
pub const ALICE: TestAddress = TestAddress::new("alice");
pub const BOB: TestAddress = TestAddress::new("bob");
pub const CAROL: TestAddress = TestAddress::new("carol");
pub const RELAYER: TestAddress = TestAddress::new("relayer");

pub const TIPS_ADDRESS: TestSCAddress = TestSCAddress::new("confidential-tips");
pub const MIRROR_TIPS_ADDRESS: TestSCAddress = TestSCAddress::new("confidential-tips-mirror");
pub const EXECUTOR_ADDRESS: TestSCAddress = TestSCAddress::new("fhe-executor");
pub const ORACLE_ADDRESS: TestSCAddress = TestSCAddress::new("decryption-oracle");

pub const TIPS_CODE: MxscPath = MxscPath::new("output/confidential-tips.mxsc.json");
pub const EXECUTOR_CODE: MxscPath =
    MxscPath::new("mocks/fhe-executor-mock/output/fhe-executor-mock.mxsc.json");
pub const ORACLE_CODE: MxscPath =
    MxscPath::new("mocks/decryption-oracle-mock/output/decryption-oracle-mock.mxsc.json");

pub const COOLDOWN_SECONDS: u64 = 60;
pub const START_TIMESTAMP: u64 = 1_000;

pub type Handle = ManagedByteArray<StaticApi, 32>;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(TIPS_CODE, confidential_tips::ContractBuilder);
    blockchain.register_contract(EXECUTOR_CODE, fhe_executor_mock::ContractBuilder);
    blockchain.register_contract(ORACLE_CODE, decryption_oracle_mock::ContractBuilder);
    blockchain
}

pub fn managed(address: TestAddress) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(address.to_address())
}

pub fn managed_sc(address: TestSCAddress) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(address.to_address())
}

pub fn zero_handle() -> Handle {
    ManagedByteArray::new_from_bytes(&[0u8; 32])
}

/// Non-zero, but never produced by the executor.
pub fn forged_handle() -> Handle {
    ManagedByteArray::new_from_bytes(&[7u8; 32])
}

pub struct TipsTestState {
    pub world: ScenarioWorld,
    pub now: u64,
}

impl TipsTestState {
    /// Executor, oracle and tips contract deployed; PROVIDER registered.
    pub fn new() -> Self {
        let mut world = world();

        for account in [OWNER, PROVIDER, ALICE, BOB, CAROL, RELAYER] {
            world.account(account).nonce(1);
        }
        world.current_block().block_timestamp(START_TIMESTAMP);

        world
            .tx()
            .from(OWNER)
            .typed(fhe_executor_mock_proxy::FheExecutorMockProxy)
            .init()
            .code(EXECUTOR_CODE)
            .new_address(EXECUTOR_ADDRESS)
            .run();

        world
            .tx()
            .from(OWNER)
            .typed(decryption_oracle_mock_proxy::DecryptionOracleMockProxy)
            .init(managed_sc(EXECUTOR_ADDRESS))
            .code(ORACLE_CODE)
            .new_address(ORACLE_ADDRESS)
            .run();

        let mut state = TipsTestState {
            world,
            now: START_TIMESTAMP,
        };
        state.deploy_tips(TIPS_ADDRESS);
        state.add_provider(PROVIDER);
        state
    }

    pub fn deploy_tips(&mut self, address: TestSCAddress) {
        self.world
            .tx()
            .from(OWNER)
            .typed(confidential_tips_proxy::ConfidentialTipsProxy)
            .init(
                managed_sc(EXECUTOR_ADDRESS),
                managed_sc(ORACLE_ADDRESS),
                COOLDOWN_SECONDS,
            )
            .code(TIPS_CODE)
            .new_address(address)
            .run();
    }

    pub fn advance(&mut self, seconds: u64) {
        self.now += seconds;
        self.world.current_block().block_timestamp(self.now);
    }

    // ── Encryption collaborator ──

    pub fn encrypt(&mut self, value: u64) -> Handle {
        self.world
            .tx()
            .from(OWNER)
            .to(EXECUTOR_ADDRESS)
            .typed(fhe_executor_mock_proxy::FheExecutorMockProxy)
            .trivial_encrypt(value)
            .returns(ReturnsResult)
            .run()
    }

    pub fn plaintext_of(&mut self, handle: &Handle) -> u64 {
        self.world
            .query()
            .to(EXECUTOR_ADDRESS)
            .typed(fhe_executor_mock_proxy::FheExecutorMockProxy)
            .decrypt(handle.as_managed_buffer().clone())
            .returns(ReturnsResult)
            .run()
    }

    // ── Access control ──

    pub fn add_provider(&mut self, provider: TestAddress) {
        self.world
            .tx()
            .from(OWNER)
            .to(TIPS_ADDRESS)
            .typed(confidential_tips_proxy::ConfidentialTipsProxy)
            .add_provider(managed(provider))
            .run();
    }

    pub fn set_cooldown(&mut self, seconds: u64) {
        self.world
            .tx()
            .from(OWNER)
            .to(TIPS_ADDRESS)
            .typed(confidential_tips_proxy::ConfidentialTipsProxy)
            .set_cooldown_seconds(seconds)
            .run();
    }

    // ── Batches ──

    pub fn open_batch(&mut self) -> u64 {
        self.open_batch_on(TIPS_ADDRESS)
    }

    pub fn open_batch_on(&mut self, tips: TestSCAddress) -> u64 {
        self.world
            .tx()
            .from(PROVIDER)
            .to(tips)
            .typed(confidential_tips_proxy::ConfidentialTipsProxy)
            .open_batch()
            .returns(ReturnsResult)
            .run()
    }

    pub fn close_batch(&mut self) -> u64 {
        self.close_batch_on(TIPS_ADDRESS)
    }

    pub fn close_batch_on(&mut self, tips: TestSCAddress) -> u64 {
        self.world
            .tx()
            .from(PROVIDER)
            .to(tips)
            .typed(confidential_tips_proxy::ConfidentialTipsProxy)
            .close_batch()
            .returns(ReturnsResult)
            .run()
    }

    pub fn batch_aggregate(
        &mut self,
        batch_id: u64,
    ) -> confidential_tips::types::BatchAggregate<StaticApi> {
        self.world
            .query()
            .to(TIPS_ADDRESS)
            .typed(confidential_tips_proxy::ConfidentialTipsProxy)
            .get_batch_aggregate(batch_id)
            .returns(ReturnsResult)
            .run()
    }

    // ── Tips ──

    /// Tips `amount` with freshly encrypted annotation parts.
    pub fn submit_tip(&mut self, contributor: TestAddress, amount: u64) -> u64 {
        let encrypted_amount = self.encrypt(amount);
        self.submit_handle(contributor, encrypted_amount)
    }

    pub fn submit_handle(&mut self, contributor: TestAddress, encrypted_amount: Handle) -> u64 {
        self.submit_handle_on(TIPS_ADDRESS, contributor, encrypted_amount)
    }

    pub fn submit_handle_on(
        &mut self,
        tips: TestSCAddress,
        contributor: TestAddress,
        encrypted_amount: Handle,
    ) -> u64 {
        let annotation_part1 = self.encrypt(0x6772_6174);
        let annotation_part2 = self.encrypt(0x7468_616e);
        self.world
            .tx()
            .from(contributor)
            .to(tips)
            .typed(confidential_tips_proxy::ConfidentialTipsProxy)
            .submit_tip(encrypted_amount, annotation_part1, annotation_part2)
            .returns(ReturnsResult)
            .run()
    }

    pub fn submit_tip_expect_err(
        &mut self,
        contributor: TestAddress,
        encrypted_amount: Handle,
        annotation_part1: Handle,
        annotation_part2: Handle,
        message: &str,
    ) {
        self.world
            .tx()
            .from(contributor)
            .to(TIPS_ADDRESS)
            .typed(confidential_tips_proxy::ConfidentialTipsProxy)
            .submit_tip(encrypted_amount, annotation_part1, annotation_part2)
            .returns(ExpectError(4, message))
            .run();
    }

    // ── Decryption ──

    pub fn request_decryption(&mut self, batch_id: u64) -> u64 {
        self.request_decryption_on(TIPS_ADDRESS, batch_id)
    }

    pub fn request_decryption_on(&mut self, tips: TestSCAddress, batch_id: u64) -> u64 {
        self.world
            .tx()
            .from(PROVIDER)
            .to(tips)
            .typed(confidential_tips_proxy::ConfidentialTipsProxy)
            .request_batch_total_decryption(batch_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn request_decryption_expect_err(&mut self, batch_id: u64, message: &str) {
        self.world
            .tx()
            .from(PROVIDER)
            .to(TIPS_ADDRESS)
            .typed(confidential_tips_proxy::ConfidentialTipsProxy)
            .request_batch_total_decryption(batch_id)
            .returns(ExpectError(4, message))
            .run();
    }

    /// (cleartext, proof) as the oracle would deliver them.
    pub fn signed_result(
        &mut self,
        request_id: u64,
    ) -> (ManagedBuffer<StaticApi>, ManagedBuffer<StaticApi>) {
        self.world
            .query()
            .to(ORACLE_ADDRESS)
            .typed(decryption_oracle_mock_proxy::DecryptionOracleMockProxy)
            .get_signed_result(request_id)
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    pub fn deliver(
        &mut self,
        request_id: u64,
        cleartext: ManagedBuffer<StaticApi>,
        proof: ManagedBuffer<StaticApi>,
    ) -> u64 {
        self.world
            .tx()
            .from(RELAYER)
            .to(TIPS_ADDRESS)
            .typed(confidential_tips_proxy::ConfidentialTipsProxy)
            .on_decryption_callback(request_id, cleartext, proof)
            .returns(ReturnsResult)
            .run()
    }

    pub fn deliver_expect_err(
        &mut self,
        request_id: u64,
        cleartext: ManagedBuffer<StaticApi>,
        proof: ManagedBuffer<StaticApi>,
        message: &str,
    ) {
        self.world
            .tx()
            .from(RELAYER)
            .to(TIPS_ADDRESS)
            .typed(confidential_tips_proxy::ConfidentialTipsProxy)
            .on_decryption_callback(request_id, cleartext, proof)
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn decryption_context(
        &mut self,
        tips: TestSCAddress,
        request_id: u64,
    ) -> confidential_tips::types::DecryptionContext<StaticApi> {
        self.world
            .query()
            .to(tips)
            .typed(confidential_tips_proxy::ConfidentialTipsProxy)
            .get_decryption_context(request_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn revealed_total(&mut self, batch_id: u64) -> Option<u64> {
        self.world
            .query()
            .to(TIPS_ADDRESS)
            .typed(confidential_tips_proxy::ConfidentialTipsProxy)
            .get_revealed_total(batch_id)
            .returns(ReturnsResult)
            .run()
    }
}

/// Cleartext the way the oracle encodes a single value.
pub fn cleartext_of(value: u64) -> ManagedBuffer<StaticApi> {
    ManagedBuffer::new_from_bytes(&value.to_be_bytes())
}
