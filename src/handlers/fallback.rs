use actix_web::{HttpRequest, HttpResponse};

use crate::errors::ApiError;

pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound(format!("Path not found: {}", req.uri())))
}

pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed {
        method: req.method().to_string(),
        path: req.uri().to_string(),
    })
}
