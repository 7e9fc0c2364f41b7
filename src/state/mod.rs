use crate::repositories::OrderRepository;
use crate::utils::{IdGenerator, UuidIdGenerator};
use actix_web::web::Data;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderRepository>,
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    pub fn new<R: OrderRepository + 'static>(orders: R) -> Data<Self> {
        Self::with_ids(orders, UuidIdGenerator)
    }

    pub fn with_ids<R, G>(orders: R, ids: G) -> Data<Self>
    where
        R: OrderRepository + 'static,
        G: IdGenerator + 'static,
    {
        Data::new(Self {
            orders: Arc::new(orders),
            ids: Arc::new(ids),
        })
    }
}
