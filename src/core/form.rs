use crate::core::submitter::ApplicationSubmitter;
use crate::domain::model::{LoanDraft, SubmissionReceipt};
use crate::domain::ports::ApplicationGateway;
use crate::utils::error::SubmissionError;

/// Clears the submitting flag when dropped, including when the submit future
/// is dropped mid-flight.
struct SubmittingGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> SubmittingGuard<'a> {
    fn engage(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

/// One loan application form: the draft, the applicant email and the
/// submitting flag. idle → submitting → (success | error) → idle.
#[derive(Debug, Default)]
pub struct LoanForm {
    draft: LoanDraft,
    email: String,
    submitting: bool,
}

impl LoanForm {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            draft: LoanDraft::default(),
            email: email.into(),
            submitting: false,
        }
    }

    pub fn draft(&self) -> &LoanDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut LoanDraft {
        &mut self.draft
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// 只給畫面用來停用按鈕；不作為重入鎖，`&mut self` 已保證同時只有一個提交
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// 送出按鈕是否可用
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.draft.is_complete()
    }

    /// Submits the draft. The draft is reset to defaults on success and left
    /// untouched on any error.
    pub async fn submit<G: ApplicationGateway>(
        &mut self,
        submitter: &ApplicationSubmitter<G>,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let outcome = {
            let _guard = SubmittingGuard::engage(&mut self.submitting);
            submitter.submit(&self.draft, &self.email).await
        };

        if outcome.is_ok() {
            self.draft.reset();
        }
        outcome
    }
}
