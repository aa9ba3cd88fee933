use crate::domain::model::{ApplicationPayload, GatewayResponse};
use crate::utils::error::SubmissionError;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
    fn user_agent(&self) -> Option<&str>;
}

/// Transport to the remote application service.
///
/// Implementations report transport failures as `SubmissionError::NetworkError`
/// and leave interpretation of status/body to the submitter.
#[async_trait]
pub trait ApplicationGateway: Send + Sync {
    async fn post_application(
        &self,
        payload: &ApplicationPayload,
    ) -> Result<GatewayResponse, SubmissionError>;
}
