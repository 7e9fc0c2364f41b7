use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::entities::order::Order;
use crate::errors::{ApiError, OrderError, RepoErr};
use crate::state::AppState;
use crate::validation::{self, OrderPayload};

const MAX_ID_ATTEMPTS: usize = 3;

/// `{ "data": { ... } }`. A missing `data` key reads as an empty object.
#[derive(Debug, Default, Deserialize)]
pub struct OrderRequest {
    #[serde(default)]
    pub data: OrderPayload,
}

#[derive(Debug, Serialize)]
struct DataResponse<T> {
    data: T,
}

fn rejected(err: OrderError) -> ApiError {
    debug!(reason = %err, "order request rejected");
    err.into()
}

fn repo_error(order_id: &str, err: RepoErr) -> ApiError {
    match err {
        RepoErr::NotFound => rejected(OrderError::NotFound(order_id.to_string())),
        RepoErr::Rejected(e) => rejected(e),
        RepoErr::DuplicateId => {
            error!(%order_id, err = %err, "store rejected write");
            ApiError::Internal
        }
    }
}

pub async fn list_orders(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let items = state.orders.list().await;
    Ok(HttpResponse::Ok().json(DataResponse { data: items }))
}

pub async fn create_order(
    state: web::Data<AppState>,
    payload: web::Json<OrderRequest>,
) -> Result<HttpResponse, ApiError> {
    let data = payload.into_inner().data;
    let draft = validation::order_body(&data).map_err(rejected)?;
    let status = validation::create_status(&data).map_err(rejected)?;

    let mut order = Order::new(state.ids.next_id(), draft, status);
    for _ in 0..MAX_ID_ATTEMPTS {
        match state.orders.insert(order.clone()).await {
            Ok(created) => {
                info!(order_id = %created.id, status = %created.status, dishes = created.dishes.len(), "order created");
                return Ok(HttpResponse::Created().json(DataResponse { data: created }));
            }
            Err(RepoErr::DuplicateId) => {
                warn!(order_id = %order.id, "minted id already taken; retrying");
                order.id = state.ids.next_id();
            }
            Err(e) => return Err(repo_error(&order.id, e)),
        }
    }
    error!(attempts = MAX_ID_ATTEMPTS, "could not mint a unique order id");
    Err(ApiError::Internal)
}

pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let order_id = path.into_inner();
    let order = state
        .orders
        .get_by_id(&order_id)
        .await
        .map_err(|e| repo_error(&order_id, e))?;
    Ok(HttpResponse::Ok().json(DataResponse { data: order }))
}

pub async fn update_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<OrderRequest>,
) -> Result<HttpResponse, ApiError> {
    let order_id = path.into_inner();
    let data = payload.into_inner().data;
    let draft = validation::order_body(&data).map_err(rejected)?;

    let route_id = order_id.clone();
    let updated = state
        .orders
        .modify(
            &order_id,
            Box::new(move |order: &mut Order| -> Result<(), OrderError> {
                let next = validation::status_change(&route_id, &data, order)?;
                order.apply(draft, next);
                Ok(())
            }),
        )
        .await
        .map_err(|e| repo_error(&order_id, e))?;

    info!(order_id = %updated.id, status = %updated.status, "order updated");
    Ok(HttpResponse::Ok().json(DataResponse { data: updated }))
}

pub async fn delete_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let order_id = path.into_inner();
    state
        .orders
        .remove_if(&order_id, Box::new(validation::deletable))
        .await
        .map_err(|e| repo_error(&order_id, e))?;
    info!(%order_id, "order deleted");
    Ok(HttpResponse::NoContent().finish())
}
