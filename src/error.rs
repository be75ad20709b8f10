use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 请求级错误，直接映射为 HTTP 状态码和 `{"detail": ...}` 响应体
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up for this activity")]
    AlreadySignedUp,

    #[error("Participant not found in activity")]
    ParticipantNotFound,

    /// 仅在开启容量限制时出现
    #[error("Activity is full")]
    ActivityFull,

    #[error("{0}")]
    InvalidQuery(String),
}

impl ApiError {
    /// metrics 中使用的 outcome 标签
    pub fn outcome(&self) -> &'static str {
        match self {
            ApiError::ActivityNotFound => "not_found",
            ApiError::AlreadySignedUp => "duplicate",
            ApiError::ParticipantNotFound => "participant_not_found",
            ApiError::ActivityFull => "full",
            ApiError::InvalidQuery(_) => "invalid",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ActivityNotFound | ApiError::ParticipantNotFound => StatusCode::NOT_FOUND,
            ApiError::AlreadySignedUp | ApiError::ActivityFull => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "detail": self.to_string()
        }))
    }
}

/// 启动时装载活动数据的错误
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("activity '{0}' is defined more than once")]
    DuplicateActivity(String),

    #[error("'{email}' is listed more than once in '{activity}'")]
    DuplicateParticipant { activity: String, email: String },
}
