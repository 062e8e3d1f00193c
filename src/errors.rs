// ============================================================
// Rejection messages. A failed check reverts the whole call.
// ============================================================

// ── Authorization ──

pub const ERR_NOT_OWNER: &str = "Caller is not the owner";
pub const ERR_NOT_PROVIDER: &str = "Caller is not a provider";

// ── Lifecycle state ──

pub const ERR_ALREADY_PAUSED: &str = "Contract already paused";
pub const ERR_NOT_PAUSED: &str = "Contract not paused";
pub const ERR_PAUSED: &str = "Contract is paused";
pub const ERR_BATCH_ALREADY_OPEN: &str = "Batch already open";
pub const ERR_BATCH_NOT_OPEN: &str = "Batch not open";
pub const ERR_BATCH_STILL_OPEN: &str = "Batch still open";

// ── Rate limit ──

pub const ERR_COOLDOWN_ACTIVE: &str = "Cooldown active";

// ── Integrity violation ──

pub const ERR_NOT_INITIALIZED: &str = "Ciphertext not initialized";
pub const ERR_REPLAY_ATTEMPT: &str = "Decryption already fulfilled";
pub const ERR_STATE_MISMATCH: &str = "State fingerprint mismatch";
pub const ERR_INVALID_PROOF: &str = "Invalid decryption proof";
pub const ERR_MALFORMED_CLEARTEXT: &str = "Malformed cleartext";
pub const ERR_DUPLICATE_REQUEST: &str = "Duplicate decryption request";

// ── Reference ──

pub const ERR_INVALID_BATCH: &str = "Invalid batch id";
pub const ERR_UNKNOWN_REQUEST: &str = "Unknown decryption request";
pub const ERR_INVALID_INDEX: &str = "Invalid tip index";
pub const ERR_ZERO_ADDRESS: &str = "Zero address";
