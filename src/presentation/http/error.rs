// src/presentation/http/error.rs
//! Client-facing error taxonomy and the domain → HTTP mapping.
use crate::domain::errors::{DomainError, DomainResult};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Machine-readable error codes. Each has exactly one description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InternalServerError,
    BadGateway,
    ServiceUnavailable,
    BadRequest,
    NotFound,
    MethodNotAllowed,
    MissingPermissions,
    InvalidAuthorizationHeader,
    MissingAuthorizationHeader,
    ExpiredAuthorizationHeader,
    ForbiddenAction,
    PreconditionFailed,
    UnsupportedMediaType,
}

impl ErrorCode {
    pub const ALL: [Self; 13] = [
        Self::InternalServerError,
        Self::BadGateway,
        Self::ServiceUnavailable,
        Self::BadRequest,
        Self::NotFound,
        Self::MethodNotAllowed,
        Self::MissingPermissions,
        Self::InvalidAuthorizationHeader,
        Self::MissingAuthorizationHeader,
        Self::ExpiredAuthorizationHeader,
        Self::ForbiddenAction,
        Self::PreconditionFailed,
        Self::UnsupportedMediaType,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
            Self::BadGateway => "BAD_GATEWAY",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::MissingPermissions => "MISSING_PERMISSIONS",
            Self::InvalidAuthorizationHeader => "INVALID_AUTHORIZATION_HEADER",
            Self::MissingAuthorizationHeader => "MISSING_AUTHORIZATION_HEADER",
            Self::ExpiredAuthorizationHeader => "EXPIRED_AUTHORIZATION_HEADER",
            Self::ForbiddenAction => "FORBIDDEN_ACTION",
            Self::PreconditionFailed => "PRECONDITION_FAILED",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::InternalServerError => "Internal server error.",
            Self::BadGateway => {
                "The server encountered a temporary error and could not complete your request."
            }
            Self::ServiceUnavailable => "The requested service is currently unreachable.",
            Self::BadRequest => {
                "The application sent a request that this server could not understand."
            }
            Self::NotFound => "Resource does not exist.",
            Self::MethodNotAllowed => "Method is not allowed for this resource.",
            Self::MissingPermissions => "You do not have permissions to access this endpoint.",
            Self::InvalidAuthorizationHeader => {
                "The request contains an invalid Authorization header."
            }
            Self::MissingAuthorizationHeader => "Request requires a JWT Authorization header.",
            Self::ExpiredAuthorizationHeader => {
                "The request contains an expired Authorization header."
            }
            Self::ForbiddenAction => "The action being performed is forbidden",
            Self::PreconditionFailed => "Precondition failed.",
            Self::UnsupportedMediaType => {
                "The server does not support the media type transmitted in the request."
            }
        }
    }

    /// Status used when an error is built from the code alone.
    pub const fn status(self) -> StatusCode {
        match self {
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadGateway => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingPermissions | Self::ForbiddenAction => StatusCode::FORBIDDEN,
            Self::InvalidAuthorizationHeader
            | Self::MissingAuthorizationHeader
            | Self::ExpiredAuthorizationHeader => StatusCode::UNAUTHORIZED,
            Self::PreconditionFailed => StatusCode::PRECONDITION_FAILED,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error body returned to clients: `{"code", "description", "field"}`.
///
/// `field` names the offending input, or is empty when none applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{code} ({field}) {description}")]
pub struct AppError {
    pub code: ErrorCode,
    pub description: String,
    pub field: String,
}

impl AppError {
    pub fn new(code: ErrorCode, description: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            field: field.into(),
        }
    }

    /// Uses the code's fixed description.
    pub fn from_code(code: ErrorCode, field: impl Into<String>) -> Self {
        Self::new(code, code.description(), field)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppErrors {
    pub errors: Vec<AppError>,
}

impl AppErrors {
    pub fn push(&mut self, error: AppError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<AppError> for AppErrors {
    fn from(error: AppError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for AppErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for AppErrors {}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    error: AppError,
}

impl HttpError {
    pub fn new(status: StatusCode, error: AppError) -> Self {
        Self { status, error }
    }

    pub fn from_code(code: ErrorCode, field: impl Into<String>) -> Self {
        Self::new(code.status(), AppError::from_code(code, field))
    }

    pub fn bad_request() -> Self {
        Self::from_code(ErrorCode::BadRequest, "")
    }

    pub fn internal() -> Self {
        Self::from_code(ErrorCode::InternalServerError, "")
    }

    /// The one place domain failures become HTTP responses.
    pub fn from_error(err: DomainError) -> Self {
        match err {
            DomainError::ArticleNotFound => Self::new(
                StatusCode::NOT_FOUND,
                AppError::new(ErrorCode::NotFound, err.to_string(), "id"),
            ),
            DomainError::ArticleCreate | DomainError::ArticleUpdate => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                AppError::new(
                    ErrorCode::InternalServerError,
                    "unable to create/update article",
                    "",
                ),
            ),
            other => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                AppError::new(ErrorCode::InternalServerError, other.to_string(), "unknown"),
            ),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn app_error(&self) -> &AppError {
        &self.error
    }
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        Self::from_error(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for DomainResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_format() {
        let err = AppError::new(ErrorCode::NotFound, "some_description", "some_field");
        assert_eq!(err.to_string(), "NOT_FOUND (some_field) some_description");
    }

    #[test]
    fn app_error_serializes_in_field_order() {
        let err = AppError::from_code(ErrorCode::MethodNotAllowed, "nil");
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"code":"METHOD_NOT_ALLOWED","description":"Method is not allowed for this resource.","field":"nil"}"#
        );
    }

    #[test]
    fn serialized_code_matches_as_str() {
        for code in ErrorCode::ALL {
            let json = serde_json::to_value(code).unwrap();
            assert_eq!(json, code.as_str());
            assert!(!code.description().is_empty());
        }
    }

    #[test]
    fn app_errors_aggregate() {
        let mut errors = AppErrors::from(AppError::from_code(ErrorCode::BadRequest, ""));
        errors.push(AppError::new(ErrorCode::PreconditionFailed, "stale", "version"));
        assert!(!errors.is_empty());
        assert_eq!(
            errors.to_string(),
            "BAD_REQUEST () The application sent a request that this server could not understand.; PRECONDITION_FAILED (version) stale"
        );
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["errors"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn maps_domain_errors() {
        let not_found = HttpError::from_error(DomainError::ArticleNotFound);
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            not_found.app_error(),
            &AppError::new(
                ErrorCode::NotFound,
                "requested article could not be found",
                "id"
            )
        );

        for err in [DomainError::ArticleCreate, DomainError::ArticleUpdate] {
            let mapped = HttpError::from_error(err);
            assert_eq!(mapped.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(mapped.app_error().description, "unable to create/update article");
            assert_eq!(mapped.app_error().field, "");
        }

        let query = HttpError::from_error(DomainError::ArticleQuery);
        assert_eq!(query.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(query.app_error().code, ErrorCode::InternalServerError);
        assert_eq!(query.app_error().field, "unknown");
        assert_eq!(
            query.app_error().description,
            DomainError::ArticleQuery.to_string()
        );
    }

    #[test]
    fn code_statuses() {
        assert_eq!(ErrorCode::UnsupportedMediaType.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(ErrorCode::ExpiredAuthorizationHeader.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(HttpError::internal().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(HttpError::bad_request().app_error().field, "");
    }
}
