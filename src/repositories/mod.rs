pub mod in_memory;
pub mod seed;

use async_trait::async_trait;

use crate::{
    entities::order::Order,
    errors::{OrderError, RepoErr},
};

/// Applied to the stored order while the store is locked. Returning `Err`
/// leaves the order as it was.
pub type Mutation = Box<dyn FnOnce(&mut Order) -> Result<(), OrderError> + Send>;

/// Decides, under the same lock, whether an order may be removed.
pub type RemovalGuard = Box<dyn FnOnce(&Order) -> Result<(), OrderError> + Send>;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Every order in insertion order.
    async fn list(&self) -> Vec<Order>;
    async fn insert(&self, order: Order) -> Result<Order, RepoErr>;
    async fn get_by_id(&self, id: &str) -> Result<Order, RepoErr>;
    async fn modify(&self, id: &str, mutation: Mutation) -> Result<Order, RepoErr>;
    async fn remove_if(&self, id: &str, guard: RemovalGuard) -> Result<Order, RepoErr>;
}
