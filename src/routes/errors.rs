//! Mapping of [`ServiceError`] onto HTTP responses.
//!
//! Every error body is a problem-details object:
//! `{ "status": 404, "title": "Not Found", "detail": "pilot not found" }`.

use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpResponse, ResponseError, web};
use serde::Serialize;

use crate::repository::errors::RepositoryError;
use crate::routes::bad_request;
use crate::services::ServiceError;

#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    pub status: u16,
    pub title: &'static str,
    pub detail: String,
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Unauthorized | ServiceError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            ServiceError::Forbidden => StatusCode::FORBIDDEN,
            ServiceError::NotFound(_) | ServiceError::Repository(RepositoryError::NotFound) => {
                StatusCode::NOT_FOUND
            }
            ServiceError::Pagination(_)
            | ServiceError::Form(_)
            | ServiceError::TypeConstraint(_)
            | ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Repository(RepositoryError::ConstraintViolation(_)) => {
                StatusCode::CONFLICT
            }
            ServiceError::Repository(RepositoryError::ConnectionError(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ServiceError::Repository(_) | ServiceError::Blocking(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let detail = if status.is_server_error() {
            log::error!("Request failed: {self}");
            "The server could not complete the request.".to_string()
        } else {
            self.to_string()
        };

        let mut response = HttpResponse::build(status);
        if status == StatusCode::UNAUTHORIZED {
            response.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        response.json(ProblemDetails {
            status: status.as_u16(),
            title: status.canonical_reason().unwrap_or("Error"),
            detail,
        })
    }
}

/// Rewrites the rate limiter's plain-text 429 into a problem-details body.
pub fn rate_limit_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::TOO_MANY_REQUESTS, too_many_requests)
}

fn too_many_requests<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let (req, rejected) = res.into_parts();
    let retry_after = rejected.headers().get(header::RETRY_AFTER).cloned();
    let detail = match retry_after.as_ref().and_then(|value| value.to_str().ok()) {
        Some(seconds) => format!("Rate limit exceeded, retry in {seconds}s"),
        None => "Rate limit exceeded".to_string(),
    };

    let mut response = HttpResponse::TooManyRequests();
    if let Some(value) = retry_after {
        response.insert_header((header::RETRY_AFTER, value));
    }
    let response = response.json(ProblemDetails {
        status: StatusCode::TOO_MANY_REQUESTS.as_u16(),
        title: "Too Many Requests",
        detail,
    });

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, response).map_into_right_body(),
    ))
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| bad_request(err))
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| bad_request(err))
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| bad_request(err))
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;
    use crate::pagination::PaginationError;

    async fn body_of(err: ServiceError) -> serde_json::Value {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(
            ServiceError::Pagination(PaginationError::InvalidPage).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Repository(RepositoryError::ConstraintViolation("fk".into()))
                .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ServiceError::Repository(RepositoryError::ConnectionError("down".into()))
                .status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ServiceError::Repository(RepositoryError::DatabaseError("disk".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ServiceError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ServiceError::NotFound("pilot").status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn validation_detail_is_the_validator_message() {
        let body = body_of(ServiceError::Pagination(PaginationError::InvalidPage)).await;

        assert_eq!(body["status"], 400);
        assert_eq!(body["title"], "Bad Request");
        assert_eq!(body["detail"], "Invalid page number.");
    }

    #[actix_web::test]
    async fn server_errors_hide_their_cause() {
        let body = body_of(ServiceError::Repository(RepositoryError::DatabaseError(
            "disk I/O error at /var/db".into(),
        )))
        .await;

        assert_eq!(body["status"], 500);
        assert!(!body["detail"].as_str().unwrap().contains("/var/db"));
    }

    #[actix_web::test]
    async fn rate_limit_rejection_becomes_problem_details() {
        use actix_web::{App, test};

        let app = test::init_service(App::new().wrap(rate_limit_handlers()).route(
            "/",
            web::get().to(|| async {
                HttpResponse::TooManyRequests()
                    .insert_header((header::RETRY_AFTER, "42"))
                    .body("Too Many Requests! Wait for 42s")
            }),
        ))
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(resp.headers().get(header::RETRY_AFTER).unwrap(), "42");
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 429);
        assert_eq!(body["title"], "Too Many Requests");
        assert_eq!(body["detail"], "Rate limit exceeded, retry in 42s");
    }

    #[test]
    fn unauthorized_carries_challenge() {
        let response = ServiceError::Unauthorized.error_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }
}
