pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpGateway;
pub use config::TomlConfig;
pub use core::{
    calculator::{compute_monthly_payment, Quote, INTEREST_RATE},
    form::LoanForm,
    portal::{Notification, PortalSession, Screen, Tab},
    submitter::ApplicationSubmitter,
};
pub use domain::model::{LoanDraft, LoanPurpose, SubmissionReceipt};
pub use utils::error::{LoanError, Result, SubmissionError};
