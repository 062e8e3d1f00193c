multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Opaque reference to a value encrypted under the FHE executor's key.
/// The all-zero handle is the default, never-produced handle.
pub type CiphertextHandle<M> = ManagedByteArray<M, 32>;

/// keccak256 digest binding a decryption request to the state it asked for.
pub type Fingerprint<M> = ManagedByteArray<M, 32>;

pub const HANDLE_LEN: usize = 32;

pub fn uninitialized_handle<M: ManagedTypeApi>() -> CiphertextHandle<M> {
    ManagedByteArray::new_from_bytes(&[0u8; HANDLE_LEN])
}

pub fn is_zero_handle<M: ManagedTypeApi>(handle: &CiphertextHandle<M>) -> bool {
    handle.to_byte_array() == [0u8; HANDLE_LEN]
}

// ============================================================
// Batch: a bounded collection epoch
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Batch {
    pub id: u64,
    /// Only the latest batch can ever be open.
    pub is_open: bool,
    pub opened_at: u64,
    /// 0 while the batch is still open
    pub closed_at: u64,
}

impl Batch {
    /// Batch 0: permanently closed, never accepts tips.
    pub fn sentinel() -> Self {
        Batch {
            id: 0,
            is_open: false,
            opened_at: 0,
            closed_at: 0,
        }
    }
}

// ============================================================
// Batch Aggregate: encrypted running total per batch
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct BatchAggregate<M: ManagedTypeApi> {
    pub tip_count: u64,
    /// Uninitialized until the first tip of the batch seeds it.
    pub running_total: CiphertextHandle<M>,
}

impl<M: ManagedTypeApi> BatchAggregate<M> {
    pub fn empty() -> Self {
        BatchAggregate {
            tip_count: 0,
            running_total: uninitialized_handle(),
        }
    }
}

// ============================================================
// Tip Record: one append-only ledger entry
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct TipRecord<M: ManagedTypeApi> {
    pub contributor: ManagedAddress<M>,
    pub batch_id: u64,
    pub encrypted_amount: CiphertextHandle<M>,
    pub encrypted_annotation_part1: CiphertextHandle<M>,
    pub encrypted_annotation_part2: CiphertextHandle<M>,
}

// ============================================================
// Decryption Context: links a request to its later callback
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct DecryptionContext<M: ManagedTypeApi> {
    pub batch_id: u64,
    /// keccak256(contract address ‖ serialized running total) at request time
    pub state_fingerprint: Fingerprint<M>,
    pub fulfilled: bool,
    pub requested_by: ManagedAddress<M>,
    pub requested_at: u64,
}
