use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Upstream HTTP status: {0}")]
    UpstreamStatus(u16),

    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Analytics document contains no records")]
    EmptyDocument,

    #[error("Invalid analytics URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Status served to the viewer when this error reaches the top of a handler.
    /// Anything that went wrong with the upstream document is a bad gateway.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::UpstreamStatus(_)
            | Error::Fetch(_)
            | Error::Json(_)
            | Error::EmptyDocument => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
