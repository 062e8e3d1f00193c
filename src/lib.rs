#![no_std]

multiversx_sc::imports!();

pub mod access_control;
pub mod accumulator;
pub mod batches;
pub mod confidential_tips_proxy;
pub mod cooldown;
pub mod decryption;
pub mod decryption_oracle_proxy;
pub mod errors;
pub mod events;
pub mod fhe_executor_proxy;
pub mod ledger;
pub mod types;

use errors::ERR_ZERO_ADDRESS;

// ============================================================
// Contract
// ============================================================

/// Confidential tips, collected in batches.
///
/// Tip amounts stay encrypted end to end. Each batch keeps a homomorphic
/// running total, and only a closed batch's total can be revealed, through
/// the decryption oracle.
#[multiversx_sc::contract]
pub trait ConfidentialTips:
    access_control::AccessControlModule
    + cooldown::CooldownModule
    + accumulator::AccumulatorModule
    + batches::BatchModule
    + ledger::TipLedgerModule
    + decryption::DecryptionModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        fhe_executor_address: ManagedAddress,
        decryption_oracle_address: ManagedAddress,
        cooldown_seconds: u64,
    ) {
        require!(!fhe_executor_address.is_zero(), ERR_ZERO_ADDRESS);
        require!(!decryption_oracle_address.is_zero(), ERR_ZERO_ADDRESS);

        let deployer = self.blockchain().get_caller();
        self.owner().set(&deployer);
        self.providers().insert(deployer);
        self.paused().set(false);

        self.fhe_executor_address().set(&fhe_executor_address);
        self.decryption_oracle_address().set(&decryption_oracle_address);
        self.cooldown_seconds().set(cooldown_seconds);

        self.init_batches();
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINTS: collaborator configuration (owner only)
    // ========================================================

    #[endpoint(setFheExecutor)]
    fn set_fhe_executor(&self, new_address: ManagedAddress) {
        self.require_owner();
        require!(!new_address.is_zero(), ERR_ZERO_ADDRESS);

        let old_address = self.fhe_executor_address().get();
        self.fhe_executor_address().set(&new_address);

        self.fhe_executor_updated_event(&old_address, &new_address);
    }

    /// Pending requests keep their contexts; callbacks are verified
    /// against whichever oracle is configured when they arrive.
    #[endpoint(setDecryptionOracle)]
    fn set_decryption_oracle(&self, new_address: ManagedAddress) {
        self.require_owner();
        require!(!new_address.is_zero(), ERR_ZERO_ADDRESS);

        let old_address = self.decryption_oracle_address().get();
        self.decryption_oracle_address().set(&new_address);

        self.decryption_oracle_updated_event(&old_address, &new_address);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// (fhe executor, decryption oracle, cooldown seconds)
    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue3<ManagedAddress, ManagedAddress, u64> {
        let executor = self.fhe_executor_address().get();
        let oracle = self.decryption_oracle_address().get();
        let cooldown = self.cooldown_seconds().get();
        (executor, oracle, cooldown).into()
    }
}
