use crate::domain::model::{ApplicationPayload, GatewayResponse, LoanDraft, SubmissionReceipt};
use crate::domain::ports::ApplicationGateway;
use crate::utils::error::{SubmissionError, UNKNOWN_SERVER_ERROR};

/// Validates drafts, posts them through a gateway and interprets the reply.
pub struct ApplicationSubmitter<G: ApplicationGateway> {
    gateway: G,
}

impl<G: ApplicationGateway> ApplicationSubmitter<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub async fn submit(
        &self,
        draft: &LoanDraft,
        email: &str,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        // 驗證失敗時不發出任何網路請求
        let payload = ApplicationPayload::from_draft(draft, email)?;

        tracing::debug!(
            "Submitting application: amount={}, term={}, monthly_payment={}",
            payload.amount,
            payload.term_months,
            payload.monthly_payment
        );

        let response = self.gateway.post_application(&payload).await.map_err(|e| {
            tracing::warn!("Application submission failed: {}", e);
            e
        })?;

        interpret_response(response)
    }
}

/// Success requires a 2xx status AND `success == true` with an application id.
pub fn interpret_response(
    response: GatewayResponse,
) -> Result<SubmissionReceipt, SubmissionError> {
    let status = response.status;
    let status_ok = response.is_success_status();
    let body = response.body.unwrap_or_default();

    if status_ok && body.success {
        if let Some(application_id) = body.application_id() {
            tracing::debug!("Application accepted with id {}", application_id);
            return Ok(SubmissionReceipt {
                application_id,
                status: body.status,
                message: body.message,
            });
        }
        tracing::warn!("Service reported success without an application id");
        return Err(SubmissionError::ServerRejection {
            status,
            message: "response did not include an application id".to_string(),
        });
    }

    let message = body
        .error_message()
        .unwrap_or(UNKNOWN_SERVER_ERROR)
        .to_string();
    tracing::warn!("Application rejected (HTTP {}): {}", status, message);

    Err(SubmissionError::ServerRejection { status, message })
}
