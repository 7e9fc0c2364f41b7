use crate::errors::ApiError;
use crate::handlers::{self, fallback};
use actix_web::web::{self, ServiceConfig};

pub fn config(cfg: &mut ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    )
    .service(web::scope("/health").route("", web::get().to(handlers::health::ping)))
    .service(
        web::resource("/orders")
            .route(web::get().to(handlers::orders::list_orders))
            .route(web::post().to(handlers::orders::create_order))
            .default_service(web::to(fallback::method_not_allowed)),
    )
    .service(
        web::resource("/orders/{orderId}")
            .route(web::get().to(handlers::orders::get_order))
            .route(web::put().to(handlers::orders::update_order))
            .route(web::delete().to(handlers::orders::delete_order))
            .default_service(web::to(fallback::method_not_allowed)),
    );
}
