pub mod calculator;
pub mod form;
pub mod portal;
pub mod submitter;

pub use crate::domain::model::{
    ApplicationPayload, GatewayResponse, LoanDraft, LoanPurpose, ServerResponse, SubmissionReceipt,
};
pub use crate::domain::ports::{ApplicationGateway, ConfigProvider};
pub use crate::utils::error::Result;
