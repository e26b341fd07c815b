//! Remote error taxonomy and the combined error type delivered to callers.
//!
//! Each HTTP status the accounts API documents maps to one named variant.
//! A 400 is decoded into the service's structured error body; anything
//! outside the documented set becomes [`ApiError::UnsupportedStatus`].

use reqwest::StatusCode;
use thiserror::Error;

use crestbank_types::ValidationError;

use crate::payload::BadRequestBody;

/// Errors arising from the remote service or the transport beneath it.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: the submitted payload failed server-side validation. error_code: {error_code:?} error_message: {error_message:?}")]
    BadRequest {
        error_code: String,
        error_message: String,
    },

    #[error("bad request returned with a corrupted error body")]
    CorruptBadRequest,

    #[error("unauthorized: the access token is invalid or has expired")]
    Unauthorized,

    #[error("forbidden: the client credentials were rejected")]
    Forbidden,

    #[error("not found: the endpoint or resource does not exist")]
    NotFound,

    #[error("method not allowed: the target resource does not support this method")]
    MethodNotAllowed,

    #[error("not acceptable: the content type specified in the request header is incorrect")]
    NotAcceptable,

    #[error("conflict: the resource already exists, or the version given on delete is wrong; safe to ignore for duplicate creates")]
    Conflict,

    #[error("too many requests: the rate limit has been exceeded, back off immediately and retry later")]
    TooManyRequests,

    #[error("server error: an internal error occurred or the request timed out, safe to retry after a short wait")]
    InternalServerError,

    #[error("bad gateway: temporary internal networking problem, safe to retry after a short wait")]
    BadGateway,

    #[error("service unavailable: a service is temporarily overloaded, safe to retry after a short wait")]
    ServiceUnavailable,

    #[error("gateway timeout: temporary internal networking problem, safe to retry after a short wait")]
    GatewayTimeout,

    #[error("status code {status} is not part of the documented API surface")]
    UnsupportedStatus { status: u16 },

    #[error("traversal link {link:?} does not resolve against the API base url")]
    InvalidLink { link: String },

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("error decoding response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("request was aborted before an outcome was delivered")]
    Aborted,
}

impl ApiError {
    /// Classify a non-success response. The body is only consulted for 400
    /// responses, which carry a structured error payload.
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        match status {
            StatusCode::BAD_REQUEST => match serde_json::from_slice::<BadRequestBody>(body) {
                Ok(decoded) => Self::BadRequest {
                    error_code: decoded.error_code,
                    error_message: decoded.error_message,
                },
                Err(_) => Self::CorruptBadRequest,
            },
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::METHOD_NOT_ALLOWED => Self::MethodNotAllowed,
            StatusCode::NOT_ACCEPTABLE => Self::NotAcceptable,
            StatusCode::CONFLICT => Self::Conflict,
            StatusCode::TOO_MANY_REQUESTS => Self::TooManyRequests,
            StatusCode::INTERNAL_SERVER_ERROR => Self::InternalServerError,
            StatusCode::BAD_GATEWAY => Self::BadGateway,
            StatusCode::SERVICE_UNAVAILABLE => Self::ServiceUnavailable,
            StatusCode::GATEWAY_TIMEOUT => Self::GatewayTimeout,
            other => Self::UnsupportedStatus {
                status: other.as_u16(),
            },
        }
    }

    /// True for outcomes that are safe to retry after backing off. The
    /// client itself never retries; this guides callers implementing their
    /// own policy.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::TooManyRequests
                | Self::InternalServerError
                | Self::BadGateway
                | Self::ServiceUnavailable
                | Self::GatewayTimeout
        )
    }
}

/// Any error the client can deliver: local validation or remote/transport.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// The failure side of every outcome: a non-empty, ordered list.
pub type ErrorBatch = Vec<Error>;

pub(crate) fn validation_batch(errors: Vec<ValidationError>) -> ErrorBatch {
    errors.into_iter().map(Error::Validation).collect()
}
