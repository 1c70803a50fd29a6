use actix_web::{body, http::{self, header::ContentType, StatusCode}, HttpResponse};
use thiserror::Error;

pub mod aggregate;
pub mod ledger;
pub mod rates;
pub mod record;
pub mod sequence;
pub mod totals;
pub mod vacation;

/// Engine-wide error taxonomy. Validation is re-checked at every public
/// boundary; the engine never trusts caller-side checks alone.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    InvalidState(String),
    #[error("upstream store unavailable: {0}")]
    Upstream(#[from] sea_orm::DbErr),
}

impl actix_web::error::ResponseError for EngineError {
    fn error_response(&self) -> HttpResponse<body::BoxBody> {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }

    fn status_code(&self) -> http::StatusCode {
        match self {
            EngineError::Validation(_) => StatusCode::BAD_REQUEST,
            EngineError::NotFound(_) => StatusCode::NOT_FOUND,
            EngineError::InvalidState(_) => StatusCode::CONFLICT,
            EngineError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::error::ResponseError as _;

    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(EngineError::Validation("bad".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(EngineError::NotFound("employee").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(EngineError::InvalidState("paid".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(EngineError::Upstream(sea_orm::DbErr::Custom("down".into())).status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_messages_are_human_readable() {
        assert_eq!(EngineError::NotFound("employee").to_string(), "employee not found");
        assert_eq!(
            EngineError::Upstream(sea_orm::DbErr::Custom("down".into())).to_string(),
            "upstream store unavailable: Custom Error: down"
        );
    }
}
