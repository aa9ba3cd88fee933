use crate::domain::model::{ApplicationPayload, GatewayResponse, ServerResponse};
use crate::domain::ports::{ApplicationGateway, ConfigProvider};
use crate::utils::error::{Result, SubmissionError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// POSTs applications as JSON to the configured service endpoint.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    endpoint: String,
}

impl HttpGateway {
    /// No request timeout: the call waits until the service answers or the
    /// transport fails.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        if let Some(user_agent) = config.user_agent() {
            builder = builder.user_agent(user_agent.to_string());
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// reqwest 的最外層訊息只有 "error sending request"，要沿 source() 往下取原因
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

fn network_error(e: reqwest::Error) -> SubmissionError {
    SubmissionError::NetworkError {
        message: error_chain(&e),
    }
}

#[async_trait]
impl ApplicationGateway for HttpGateway {
    async fn post_application(
        &self,
        payload: &ApplicationPayload,
    ) -> std::result::Result<GatewayResponse, SubmissionError> {
        tracing::debug!("Making API request to: {}", self.endpoint);

        // .json() 會設定 Content-Type: application/json
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status().as_u16();
        tracing::debug!("API response status: {}", status);

        let text = response.text().await.map_err(network_error)?;

        // 無法解析的回應視為沒有 body
        let body = match serde_json::from_str::<ServerResponse>(&text) {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::debug!("Response body is not a valid service reply: {}", e);
                None
            }
        };

        Ok(GatewayResponse { status, body })
    }
}
