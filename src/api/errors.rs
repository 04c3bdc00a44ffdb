use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{ErrorKind, SettlementError};

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Запрос не разобрался (битый JSON, не читается файл).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Запрос разобрался, но данные нарушают контракт.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Внутреннее противоречие расчёта.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<SettlementError> for ApiError {
    fn from(err: SettlementError) -> Self {
        match err.kind() {
            ErrorKind::InvalidInput => ApiError::InvalidInput(err.to_string()),
            ErrorKind::ConsistencyViolation => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
