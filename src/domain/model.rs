use crate::core::calculator::{
    compute_monthly_payment, snap_amount, clamp_term, DEFAULT_AMOUNT, DEFAULT_TERM_MONTHS,
    INTEREST_RATE,
};
use crate::utils::error::SubmissionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanPurpose {
    Personal,
    Business,
    Education,
    Medical,
    Other,
}

impl LoanPurpose {
    pub const ALL: [LoanPurpose; 5] = [
        LoanPurpose::Personal,
        LoanPurpose::Business,
        LoanPurpose::Education,
        LoanPurpose::Medical,
        LoanPurpose::Other,
    ];

    /// 送往伺服器的值
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanPurpose::Personal => "personal",
            LoanPurpose::Business => "business",
            LoanPurpose::Education => "education",
            LoanPurpose::Medical => "medical",
            LoanPurpose::Other => "other",
        }
    }

    /// 下拉選單顯示的名稱
    pub fn label(&self) -> &'static str {
        match self {
            LoanPurpose::Personal => "Личные нужды",
            LoanPurpose::Business => "Развитие бизнеса",
            LoanPurpose::Education => "Образование",
            LoanPurpose::Medical => "Медицинские услуги",
            LoanPurpose::Other => "Другое",
        }
    }
}

impl fmt::Display for LoanPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanPurpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LoanPurpose::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "unknown loan purpose '{}', expected one of: personal, business, education, medical, other",
                    s
                )
            })
    }
}

/// The in-progress application held by the form.
///
/// Amount and term behave like bounded sliders; the monthly payment is always
/// derived from them and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanDraft {
    amount: u32,
    term_months: u32,
    pub purpose: Option<LoanPurpose>,
    pub monthly_income: String,
    pub additional_info: String,
}

impl Default for LoanDraft {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            term_months: DEFAULT_TERM_MONTHS,
            purpose: None,
            monthly_income: String::new(),
            additional_info: String::new(),
        }
    }
}

impl LoanDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    /// Clamps into [10000, 500000] and snaps to the 5000 step.
    pub fn set_amount(&mut self, amount: u32) {
        self.amount = snap_amount(amount);
    }

    /// Clamps into [3, 60].
    pub fn set_term_months(&mut self, term_months: u32) {
        self.term_months = clamp_term(term_months);
    }

    pub fn monthly_payment(&self) -> u64 {
        compute_monthly_payment(self.amount, self.term_months)
    }

    /// 必填欄位：用途與月收入（只檢查是否為空字串）
    pub fn validate(&self) -> Result<LoanPurpose, SubmissionError> {
        let purpose = self
            .purpose
            .ok_or_else(|| SubmissionError::missing_field("purpose"))?;
        if self.monthly_income.is_empty() {
            return Err(SubmissionError::missing_field("monthly_income"));
        }
        Ok(purpose)
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// JSON body POSTed to the application service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationPayload {
    pub email: String,
    pub amount: u32,
    pub term_months: u32,
    pub monthly_payment: u64,
    pub interest_rate: f64,
    pub purpose: LoanPurpose,
    pub income: String,
    pub additional_info: String,
}

impl ApplicationPayload {
    pub fn from_draft(draft: &LoanDraft, email: &str) -> Result<Self, SubmissionError> {
        let purpose = draft.validate()?;
        Ok(Self {
            email: email.to_string(),
            amount: draft.amount(),
            term_months: draft.term_months(),
            monthly_payment: draft.monthly_payment(),
            interest_rate: INTEREST_RATE,
            purpose,
            income: draft.monthly_income.clone(),
            additional_info: draft.additional_info.clone(),
        })
    }
}

/// Response body of the application service. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServerResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub application_id: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ServerResponse {
    /// 後端可能回傳數字或字串的 id
    pub fn application_id(&self) -> Option<String> {
        match self.application_id.as_ref()? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

/// What the gateway observed: the HTTP status and the decoded body, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: Option<ServerResponse>,
}

impl GatewayResponse {
    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub application_id: String,
    pub status: Option<String>,
    pub message: Option<String>,
}

impl SubmissionReceipt {
    pub fn user_message(&self) -> String {
        format!(
            "Заявка успешно отправлена! Номер заявки: {}",
            self.application_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft() {
        let draft = LoanDraft::default();
        assert_eq!(draft.amount(), 50_000);
        assert_eq!(draft.term_months(), 12);
        assert_eq!(draft.purpose, None);
        assert!(draft.monthly_income.is_empty());
        assert_eq!(draft.monthly_payment(), 4_688);
    }

    #[test]
    fn test_payment_follows_amount_and_term() {
        let mut draft = LoanDraft::new();
        draft.set_amount(10_000);
        draft.set_term_months(60);
        assert_eq!(draft.monthly_payment(), 188);

        draft.set_amount(500_000);
        draft.set_term_months(3);
        assert_eq!(draft.monthly_payment(), 187_500);
    }

    #[test]
    fn test_sliders_clamp_and_snap() {
        let mut draft = LoanDraft::new();
        draft.set_amount(1);
        assert_eq!(draft.amount(), 10_000);
        draft.set_amount(9_999_999);
        assert_eq!(draft.amount(), 500_000);
        draft.set_amount(52_499);
        assert_eq!(draft.amount(), 50_000);
        draft.set_amount(52_500);
        assert_eq!(draft.amount(), 55_000);

        draft.set_term_months(0);
        assert_eq!(draft.term_months(), 3);
        draft.set_term_months(120);
        assert_eq!(draft.term_months(), 60);
    }

    #[test]
    fn test_validate_requires_purpose_and_income() {
        let mut draft = LoanDraft::new();
        assert!(matches!(
            draft.validate(),
            Err(SubmissionError::ValidationError { ref field, .. }) if field == "purpose"
        ));

        draft.purpose = Some(LoanPurpose::Medical);
        assert!(matches!(
            draft.validate(),
            Err(SubmissionError::ValidationError { ref field, .. }) if field == "monthly_income"
        ));

        draft.monthly_income = "85000".to_string();
        assert_eq!(draft.validate(), Ok(LoanPurpose::Medical));
    }

    #[test]
    fn test_purpose_parsing() {
        assert_eq!("business".parse::<LoanPurpose>(), Ok(LoanPurpose::Business));
        assert_eq!(" Education ".parse::<LoanPurpose>(), Ok(LoanPurpose::Education));
        assert!("".parse::<LoanPurpose>().is_err());
        assert!("mortgage".parse::<LoanPurpose>().is_err());
        assert_eq!(LoanPurpose::Medical.label(), "Медицинские услуги");
        assert_eq!(LoanPurpose::Other.to_string(), "other");
    }

    #[test]
    fn test_payload_serialization() {
        let mut draft = LoanDraft::new();
        draft.purpose = Some(LoanPurpose::Personal);
        draft.monthly_income = "120000".to_string();
        draft.additional_info = "Ремонт".to_string();

        let payload = ApplicationPayload::from_draft(&draft, "user@example.com").unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "email": "user@example.com",
                "amount": 50000,
                "term_months": 12,
                "monthly_payment": 4688,
                "interest_rate": 12.5,
                "purpose": "personal",
                "income": "120000",
                "additional_info": "Ремонт"
            })
        );
    }

    #[test]
    fn test_server_response_application_id_forms() {
        let text: ServerResponse =
            serde_json::from_str(r#"{"success": true, "application_id": "A123"}"#).unwrap();
        assert_eq!(text.application_id(), Some("A123".to_string()));

        let numeric: ServerResponse = serde_json::from_str(
            r#"{"success": true, "application_id": 42, "status": "pending"}"#,
        )
        .unwrap();
        assert_eq!(numeric.application_id(), Some("42".to_string()));
        assert_eq!(numeric.status.as_deref(), Some("pending"));

        let failure: ServerResponse = serde_json::from_str(r#"{"error": ""}"#).unwrap();
        assert!(!failure.success);
        assert_eq!(failure.error_message(), None);
    }
}
