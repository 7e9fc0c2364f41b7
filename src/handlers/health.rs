use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::state::AppState;

pub async fn ping(state: web::Data<AppState>) -> HttpResponse {
    let orders = state.orders.list().await.len();
    HttpResponse::Ok().json(json!({ "status": "ok", "orders": orders }))
}
