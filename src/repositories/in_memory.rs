use crate::entities::order::Order;
use crate::errors::RepoErr;
use crate::repositories::{Mutation, OrderRepository, RemovalGuard};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Ordered, process-lifetime order store. Clones share the same collection.
#[derive(Clone, Debug, Default)]
pub struct InMemoryOrderRepository {
    inner: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderRepository {
    /// Starts from an existing collection. Ids must be unique.
    pub fn with_orders(orders: Vec<Order>) -> Result<Self, RepoErr> {
        for (i, o) in orders.iter().enumerate() {
            if orders[..i].iter().any(|prev| prev.id == o.id) {
                return Err(RepoErr::DuplicateId);
            }
        }
        Ok(Self {
            inner: Arc::new(RwLock::new(orders)),
        })
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn list(&self) -> Vec<Order> {
        self.inner.read().await.clone()
    }

    async fn insert(&self, order: Order) -> Result<Order, RepoErr> {
        let mut orders = self.inner.write().await;
        if orders.iter().any(|o| o.id == order.id) {
            return Err(RepoErr::DuplicateId);
        }
        orders.push(order.clone());
        Ok(order)
    }

    async fn get_by_id(&self, id: &str) -> Result<Order, RepoErr> {
        let orders = self.inner.read().await;
        orders
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(RepoErr::NotFound)
    }

    async fn modify(&self, id: &str, mutation: Mutation) -> Result<Order, RepoErr> {
        let mut orders = self.inner.write().await;
        let stored = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(RepoErr::NotFound)?;
        // Mutate a copy so a rejected mutation cannot leave partial writes behind.
        let mut next = stored.clone();
        mutation(&mut next)?;
        next.id = stored.id.clone();
        *stored = next;
        Ok(stored.clone())
    }

    async fn remove_if(&self, id: &str, guard: RemovalGuard) -> Result<Order, RepoErr> {
        let mut orders = self.inner.write().await;
        let index = orders
            .iter()
            .position(|o| o.id == id)
            .ok_or(RepoErr::NotFound)?;
        guard(&orders[index])?;
        Ok(orders.remove(index))
    }
}
