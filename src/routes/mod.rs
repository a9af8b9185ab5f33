//! HTTP routes. Handlers only translate between the wire and the services.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::services::ServiceError;

pub mod customers;
pub mod main;

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: u16,
    error: &'a str,
    message: String,
}

/// JSON error body shared by every failure response.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody {
        status: status.as_u16(),
        error: status.canonical_reason().unwrap_or("Error"),
        message: message.into(),
    })
}

pub fn error_response(err: &ServiceError) -> HttpResponse {
    let status = match err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    json_error(status, err.to_string())
}

/// Request bodies must be declared as `application/json`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = match &err {
            JsonPayloadError::ContentType => json_error(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Content-Type must be application/json",
            ),
            other => json_error(StatusCode::BAD_REQUEST, other.to_string()),
        };
        log::error!("Rejected request body: {err}");
        InternalError::from_response(err, response).into()
    })
}

/// Registers every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(main::health_check)
        .service(main::api_metadata)
        .service(customers::list_customers)
        .service(customers::create_customer)
        .service(customers::show_customer)
        .service(customers::update_customer)
        .service(customers::delete_customer)
        .service(customers::suspend_customer)
        .service(customers::activate_customer);
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    #[actix_web::test]
    async fn service_errors_map_to_status_codes() {
        assert_eq!(
            error_response(&ServiceError::Validation("bad".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_response(&ServiceError::NotFound(1)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_response(&ServiceError::Storage("down".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn error_body_names_reason_and_message() {
        let response = error_response(&ServiceError::NotFound(42));
        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], 404);
        assert_eq!(value["error"], "Not Found");
        assert_eq!(value["message"], "Customer with id '42' was not found.");
    }
}
