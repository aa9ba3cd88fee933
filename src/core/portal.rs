//! Portal navigation: login → verify → dashboard, plus the active dashboard tab.
//!
//! No credentials are checked; any non-empty input advances the flow.

use crate::core::form::LoanForm;
use crate::core::submitter::ApplicationSubmitter;
use crate::domain::model::SubmissionReceipt;
use crate::domain::ports::ApplicationGateway;
use crate::utils::error::SubmissionError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Verify,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Profile,
    Loan,
    Documents,
    Support,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Profile => "profile",
            Tab::Loan => "loan",
            Tab::Documents => "documents",
            Tab::Support => "support",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dashboard" => Ok(Tab::Dashboard),
            "profile" => Ok(Tab::Profile),
            "loan" => Ok(Tab::Loan),
            "documents" => Ok(Tab::Documents),
            "support" => Ok(Tab::Support),
            _ => Err(format!("unknown tab '{}'", s)),
        }
    }
}

/// The single blocking message shown after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Failure(String),
}

impl Notification {
    pub fn from_outcome(outcome: &Result<SubmissionReceipt, SubmissionError>) -> Self {
        match outcome {
            Ok(receipt) => Notification::Success(receipt.user_message()),
            Err(e) => Notification::Failure(e.user_message()),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Notification::Success(text) | Notification::Failure(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notification::Success(_))
    }
}

#[derive(Debug, Default)]
pub struct PortalSession {
    screen: Screen,
    email: String,
    active_tab: Tab,
    loan_form: LoanForm,
}

impl PortalSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn loan_form(&self) -> &LoanForm {
        &self.loan_form
    }

    pub fn loan_form_mut(&mut self) -> &mut LoanForm {
        &mut self.loan_form
    }

    /// Moves to the verification screen when the email is non-empty.
    pub fn login(&mut self, email: &str) -> bool {
        if self.screen != Screen::Login || email.is_empty() {
            return false;
        }
        self.email = email.to_string();
        self.loan_form.set_email(email);
        self.screen = Screen::Verify;
        tracing::debug!("Login step completed, awaiting verification code");
        true
    }

    /// Moves to the dashboard when the code is non-empty.
    pub fn verify(&mut self, code: &str) -> bool {
        if self.screen != Screen::Verify || code.is_empty() {
            return false;
        }
        self.screen = Screen::Dashboard;
        tracing::debug!("Verification step completed");
        true
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Submits the loan form and returns to the dashboard tab on success.
    pub async fn submit_loan<G: ApplicationGateway>(
        &mut self,
        submitter: &ApplicationSubmitter<G>,
    ) -> (Result<SubmissionReceipt, SubmissionError>, Notification) {
        let outcome = self.loan_form.submit(submitter).await;
        if outcome.is_ok() {
            self.active_tab = Tab::Dashboard;
        }
        let notification = Notification::from_outcome(&outcome);
        (outcome, notification)
    }
}
