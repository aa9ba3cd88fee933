use thiserror::Error;

/// 提交失敗時使用者看到的預設訊息
pub const UNKNOWN_SERVER_ERROR: &str = "Неизвестная ошибка";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Validation error: {message}")]
    ValidationError { field: String, message: String },

    #[error("Server rejected application (HTTP {status}): {message}")]
    ServerRejection { status: u16, message: String },

    #[error("Network error: {message}")]
    NetworkError { message: String },
}

impl SubmissionError {
    pub fn missing_field(field: &str) -> Self {
        SubmissionError::ValidationError {
            field: field.to_string(),
            message: "Пожалуйста, заполните все обязательные поля".to_string(),
        }
    }

    /// 轉換成單一的使用者提示訊息
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::ValidationError { message, .. } => message.clone(),
            SubmissionError::ServerRejection { message, .. } => {
                format!("Ошибка отправки заявки: {}", message)
            }
            SubmissionError::NetworkError { message } => format!("Ошибка соединения: {}", message),
        }
    }
}

#[derive(Error, Debug)]
pub enum LoanError {
    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Server,
    Network,
    Configuration,
    System,
}

impl LoanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LoanError::Submission(SubmissionError::ValidationError { .. }) => {
                ErrorCategory::Validation
            }
            LoanError::Submission(SubmissionError::ServerRejection { .. }) => ErrorCategory::Server,
            LoanError::Submission(SubmissionError::NetworkError { .. })
            | LoanError::HttpClientError(_) => ErrorCategory::Network,
            LoanError::ConfigValidationError { .. }
            | LoanError::InvalidConfigValueError { .. }
            | LoanError::MissingConfigError { .. } => ErrorCategory::Configuration,
            LoanError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LoanError::Submission(e) => e.user_message(),
            LoanError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            LoanError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            LoanError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Choose a loan purpose and enter your monthly income",
            ErrorCategory::Server => "Check the application details or contact support",
            ErrorCategory::Network => "Check your connection and the service endpoint, then try again",
            ErrorCategory::Configuration => "Check the configuration file and command-line flags",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;
