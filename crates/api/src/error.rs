//! Error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use invoicer_core::billing::BillingError;
use invoicer_core::client::ClientError;
use invoicer_core::product::ProductError;
use invoicer_shared::AppError;
use invoicer_store::StoreError;
use tracing::{debug, error, warn};

/// An [`AppError`] rendered as a JSON response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// Builds a `NotFound` error for a missing record.
    pub fn not_found(kind: &str, id: impl std::fmt::Display) -> Self {
        Self(AppError::NotFound(format!("{kind} not found: {id}")))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.0.is_server_error() {
            error!(error = %self.0, "Request failed");
        } else {
            warn!(code = self.0.error_code(), error = %self.0, "Request rejected");
        }

        (status, Json(self.0.to_body())).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Billing(err) => err.into(),
            err => Self(err.into()),
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        Self(err.into())
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        Self(err.into())
    }
}

impl From<BillingError> for ApiError {
    fn from(err: BillingError) -> Self {
        debug!(code = err.error_code(), "Billing rules rejected the document");
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::NotFound("client not found".into()), StatusCode::NOT_FOUND, "NOT_FOUND")]
    #[case(AppError::Validation("name is required".into()), StatusCode::BAD_REQUEST, "VALIDATION_ERROR")]
    #[case(AppError::Internal("lock poisoned".into()), StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")]
    #[tokio::test]
    async fn test_error_response(
        #[case] error: AppError,
        #[case] status: StatusCode,
        #[case] code: &str,
    ) {
        let response = ApiError(error).into_response();
        assert_eq!(response.status(), status);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], code);
    }

    #[test]
    fn test_store_not_found_maps_to_404() {
        let err = ApiError::from(StoreError::not_found("quote", "abc"));
        assert_eq!(err.0.status_code(), 404);
    }

    #[test]
    fn test_store_billing_error_maps_to_400() {
        let err = ApiError::from(StoreError::from(BillingError::AmountOverflow));
        assert_eq!(err.0.status_code(), 400);
        assert_eq!(err.0.to_body()["message"], "Amount is too large");
    }
}
