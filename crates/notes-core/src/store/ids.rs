use rand::Rng;

/// How many candidate identifiers a create may draw before giving up
pub const MAX_ID_ATTEMPTS: u32 = 16;

/// Source of candidate note identifiers
///
/// Candidates may collide with existing notes; the store checks and redraws.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> i64;
}

/// Uniformly random non-negative 63-bit identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> i64 {
        rand::thread_rng().gen_range(0..=i64::MAX)
    }
}
