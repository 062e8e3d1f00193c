multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_PAUSED, ERR_NOT_OWNER, ERR_NOT_PAUSED, ERR_NOT_PROVIDER, ERR_PAUSED,
    ERR_ZERO_ADDRESS,
};

/// Single owner, a set of providers, and a pause flag.
///
/// Guards are plain functions called at the top of each endpoint.
#[multiversx_sc::module]
pub trait AccessControlModule: crate::events::EventsModule {
    // ========================================================
    // ENDPOINTS (owner only)
    // ========================================================

    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, new_owner: ManagedAddress) {
        self.require_owner();
        require!(!new_owner.is_zero(), ERR_ZERO_ADDRESS);

        let previous_owner = self.owner().get();
        self.owner().set(&new_owner);

        self.ownership_transferred_event(&previous_owner, &new_owner);
    }

    /// Re-adding a provider is a silent no-op.
    #[endpoint(addProvider)]
    fn add_provider(&self, provider: ManagedAddress) {
        self.require_owner();
        require!(!provider.is_zero(), ERR_ZERO_ADDRESS);

        if self.providers().insert(provider.clone()) {
            self.provider_added_event(&provider);
        }
    }

    /// Removing an unknown provider is a silent no-op.
    #[endpoint(removeProvider)]
    fn remove_provider(&self, provider: ManagedAddress) {
        self.require_owner();

        if self.providers().swap_remove(&provider) {
            self.provider_removed_event(&provider);
        }
    }

    #[endpoint(pause)]
    fn pause(&self) {
        self.require_owner();
        require!(!self.paused().get(), ERR_ALREADY_PAUSED);

        self.paused().set(true);
        self.paused_event(&self.blockchain().get_caller());
    }

    #[endpoint(unpause)]
    fn unpause(&self) {
        self.require_owner();
        require!(self.paused().get(), ERR_NOT_PAUSED);

        self.paused().set(false);
        self.unpaused_event(&self.blockchain().get_caller());
    }

    // ========================================================
    // GUARDS
    // ========================================================

    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERR_NOT_OWNER);
    }

    fn require_provider(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.providers().contains(&caller), ERR_NOT_PROVIDER);
        caller
    }

    fn require_not_paused(&self) {
        require!(!self.paused().get(), ERR_PAUSED);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    #[view(isPaused)]
    fn is_paused(&self) -> bool {
        self.paused().get()
    }

    #[view(isProvider)]
    fn is_provider(&self, address: ManagedAddress) -> bool {
        self.providers().contains(&address)
    }

    #[view(getProviders)]
    fn get_providers(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for provider in self.providers().iter() {
            result.push(provider);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("providers")]
    fn providers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;
}
