use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use serde::Serialize;

/// Business and input rule violations raised by the validator chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("Order must include a {0}")]
    MissingField(&'static str),
    #[error("Order must include at least one dish")]
    NoDishes,
    #[error("Dish {0} must have a quantity that is an integer greater than 0")]
    InvalidDishQuantity(usize),
    #[error("Order does not exist: {0}")]
    NotFound(String),
    #[error("Order id does not match route id. Order: {order}, Route: {route}")]
    IdMismatch { order: String, route: String },
    #[error("Order must have a status of pending, preparing, out-for-delivery, delivered")]
    InvalidStatus,
    #[error("A delivered order cannot be changed")]
    DeliveredLocked,
    #[error("An order cannot be deleted unless it is pending")]
    NotPending,
}

#[derive(Debug, Display)]
pub enum ApiError {
    #[display("{_0}")]
    Validation(String),
    #[display("{_0}")]
    NotFound(String),
    #[display("{_0}")]
    Conflict(String),
    #[display("{method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },
    #[display("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrBody {
    message: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrBody {
            message: self.to_string(),
        })
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        let message = err.to_string();
        match err {
            OrderError::NotFound(_) => Self::NotFound(message),
            OrderError::IdMismatch { .. } | OrderError::DeliveredLocked | OrderError::NotPending => {
                Self::Conflict(message)
            }
            OrderError::MissingField(_)
            | OrderError::NoDishes
            | OrderError::InvalidDishQuantity(_)
            | OrderError::InvalidStatus => Self::Validation(message),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepoErr {
    #[error("not found")]
    NotFound,
    #[error("duplicate order id")]
    DuplicateId,
    #[error(transparent)]
    Rejected(#[from] OrderError),
}
