use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[source] sqlx::Error),

    #[error("store query failed: {0}")]
    Store(#[source] sqlx::Error),

    #[error("{0}")]
    MalformedInput(String),

    #[error("question {id} has unrecognized category {category:?}")]
    UnknownCategory { id: i32, category: String },

    #[error("question {id} has non-positive marks {marks}")]
    InvalidMarks { id: i32, marks: i32 },

    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ServiceError {
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedInput(detail.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::StoreUnavailable(_) => "ERR-DB-001",
            Self::Store(_) => "ERR-DB-002",
            Self::Migrate(_) => "ERR-DB-000",
            Self::MalformedInput(_) => "ERR-INPUT-001",
            Self::UnknownCategory { .. } => "ERR-QUESTION-001",
            Self::InvalidMarks { .. } => "ERR-QUESTION-002",
            Self::Config(_) => "ERR-CONF-001",
            Self::Io(_) => "ERR-IO-001",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::MalformedInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Connection-level failures mean the store could not be reached at all;
/// everything else is a failure of the query itself.
impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(
            err,
            sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
                | sqlx::Error::WorkerCrashed
                | sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
        ) {
            Self::StoreUnavailable(err)
        } else {
            Self::Store(err)
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = self.code(), "request failed: {}", &self);
        } else {
            tracing::warn!(code = self.code(), "request rejected: {}", &self);
        }
        let body = json!({
            "code": self.code(),
            "detail": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
