multiversx_sc::imports!();

use crate::errors::ERR_COOLDOWN_ACTIVE;

/// `true` once `cooldown_seconds` have passed since `last_action_at`.
pub fn cooldown_elapsed(last_action_at: u64, cooldown_seconds: u64, now: u64) -> bool {
    now >= last_action_at.saturating_add(cooldown_seconds)
}

/// Seconds left before the action is allowed again, 0 if allowed now.
pub fn cooldown_remaining(last_action_at: u64, cooldown_seconds: u64, now: u64) -> u64 {
    last_action_at
        .saturating_add(cooldown_seconds)
        .saturating_sub(now)
}

/// Per-actor rate limiting for tip submission and decryption requests.
///
/// One global `cooldownSeconds` value drives both timers, so the two
/// limits always move together. An actor with no recorded action is
/// never limited.
#[multiversx_sc::module]
pub trait CooldownModule:
    crate::access_control::AccessControlModule + crate::events::EventsModule
{
    #[endpoint(setCooldownSeconds)]
    fn set_cooldown_seconds(&self, new_seconds: u64) {
        self.require_owner();

        let old_seconds = self.cooldown_seconds().get();
        self.cooldown_seconds().set(new_seconds);

        self.cooldown_updated_event(old_seconds, new_seconds);
    }

    fn require_submission_allowed(&self, actor: &ManagedAddress) {
        self.require_cooldown_elapsed(&self.last_submission_at(actor));
    }

    fn require_decryption_request_allowed(&self, actor: &ManagedAddress) {
        self.require_cooldown_elapsed(&self.last_decryption_request_at(actor));
    }

    fn require_cooldown_elapsed(&self, timer: &SingleValueMapper<Option<u64>>) {
        let Some(last_action_at) = timer.get() else {
            return;
        };
        let now = self.blockchain().get_block_timestamp();
        require!(
            cooldown_elapsed(last_action_at, self.cooldown_seconds().get(), now),
            ERR_COOLDOWN_ACTIVE
        );
    }

    fn record_submission(&self, actor: &ManagedAddress) {
        let now = self.blockchain().get_block_timestamp();
        self.last_submission_at(actor).set(Some(now));
    }

    fn record_decryption_request(&self, actor: &ManagedAddress) {
        let now = self.blockchain().get_block_timestamp();
        self.last_decryption_request_at(actor).set(Some(now));
    }

    fn remaining_for(&self, timer: &SingleValueMapper<Option<u64>>) -> u64 {
        let Some(last_action_at) = timer.get() else {
            return 0;
        };
        let now = self.blockchain().get_block_timestamp();
        cooldown_remaining(last_action_at, self.cooldown_seconds().get(), now)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getCooldownSeconds)]
    fn get_cooldown_seconds(&self) -> u64 {
        self.cooldown_seconds().get()
    }

    #[view(getLastSubmissionAt)]
    fn get_last_submission_at(&self, actor: ManagedAddress) -> u64 {
        self.last_submission_at(&actor).get().unwrap_or_default()
    }

    #[view(getLastDecryptionRequestAt)]
    fn get_last_decryption_request_at(&self, actor: ManagedAddress) -> u64 {
        self.last_decryption_request_at(&actor).get().unwrap_or_default()
    }

    /// (submission, decryption request) seconds left for `actor`
    #[view(getCooldownRemaining)]
    fn get_cooldown_remaining(&self, actor: ManagedAddress) -> MultiValue2<u64, u64> {
        let submission = self.remaining_for(&self.last_submission_at(&actor));
        let decryption = self.remaining_for(&self.last_decryption_request_at(&actor));
        (submission, decryption).into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("cooldownSeconds")]
    fn cooldown_seconds(&self) -> SingleValueMapper<u64>;

    /// `None` until the actor first submits. `Some(0)` is a real
    /// timestamp and still encodes non-empty.
    #[storage_mapper("lastSubmissionAt")]
    fn last_submission_at(&self, actor: &ManagedAddress) -> SingleValueMapper<Option<u64>>;

    #[storage_mapper("lastDecryptionRequestAt")]
    fn last_decryption_request_at(
        &self,
        actor: &ManagedAddress,
    ) -> SingleValueMapper<Option<u64>>;
}
