use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::shop::ShopError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Shop error: {0}")]
    Shop(#[from] ShopError),

    #[error("No catalog product at position {0}")]
    CatalogSlot(usize),

    #[error("Shop state is poisoned")]
    StatePoisoned,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("Request failed: {}", self);
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartError;
    use crate::models::ProductId;

    #[test]
    fn test_app_error_display() {
        let id = ProductId::new();
        let err = AppError::from(ShopError::Cart(CartError::UnknownProduct(id)));
        assert_eq!(
            err.to_string(),
            format!("Shop error: product {} is in the cart but not in the shop", id)
        );
        assert_eq!(AppError::CatalogSlot(1).to_string(), "No catalog product at position 1");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            AppError::StatePoisoned.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::CatalogSlot(0).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
