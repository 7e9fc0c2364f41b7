use uuid::Uuid;

/// Mints identifiers for new orders.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// 32 lowercase hex characters from a random v4 uuid.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
