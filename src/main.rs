use clap::Parser;
use loan_quote::config::{ApplyArgs, Command, QuoteArgs};
use loan_quote::utils::error::ErrorCategory;
use loan_quote::utils::logger;
use loan_quote::{
    ApplicationSubmitter, CliConfig, HttpGateway, LoanError, PortalSession, Quote, SubmissionError,
    Tab,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match &config.command {
        Command::Quote(args) => {
            logger::init_cli_logger(config.verbose);
            print_quote(args)?;
        }
        Command::Apply(args) => {
            let resolved = match config.resolve() {
                Ok(resolved) => resolved,
                Err(e) => {
                    logger::init_cli_logger(config.verbose);
                    report_and_exit(&e);
                }
            };
            logger::init_cli_logger_with_level(config.verbose, resolved.log_level());
            tracing::debug!("Resolved configuration: {:?}", resolved);

            let gateway = match HttpGateway::from_config(&resolved) {
                Ok(gateway) => gateway,
                Err(e) => report_and_exit(&e),
            };
            let submitter = ApplicationSubmitter::new(gateway);

            if let Err(e) = apply(args, &submitter).await {
                report_and_exit(&e);
            }
        }
    }

    Ok(())
}

fn print_quote(args: &QuoteArgs) -> anyhow::Result<()> {
    let quote = Quote::new(args.amount, args.term);
    if quote.amount != args.amount || quote.term_months != args.term {
        tracing::info!(
            "Input adjusted to slider bounds: amount {} -> {}, term {} -> {}",
            args.amount,
            quote.amount,
            args.term,
            quote.term_months
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    println!("Loan amount:      {} ₽", quote.amount);
    println!("Term:             {} months", quote.term_months);
    println!("Indicative rate:  {}% per year", quote.interest_rate);
    println!("Monthly payment:  {} ₽", quote.monthly_payment);
    Ok(())
}

async fn apply(
    args: &ApplyArgs,
    submitter: &ApplicationSubmitter<HttpGateway>,
) -> Result<(), LoanError> {
    let mut session = PortalSession::new();

    if !session.login(&args.email) {
        return Err(SubmissionError::missing_field("email").into());
    }
    if !session.verify(&args.code) {
        return Err(SubmissionError::missing_field("code").into());
    }
    session.select_tab(Tab::Loan);

    let draft = session.loan_form_mut().draft_mut();
    draft.set_amount(args.amount);
    draft.set_term_months(args.term);
    draft.purpose = args.purpose;
    draft.monthly_income = args.income.clone();
    draft.additional_info = args.info.clone();
    if let Some(purpose) = args.purpose {
        tracing::debug!("Loan purpose: {} ({})", purpose, purpose.label());
    }

    tracing::info!(
        "Submitting application to {} (monthly payment {})",
        submitter.gateway().endpoint(),
        session.loan_form().draft().monthly_payment()
    );

    let (outcome, notification) = session.submit_loan(submitter).await;
    match outcome {
        Ok(receipt) => {
            tracing::info!("✅ Application accepted: {}", receipt.application_id);
            println!("✅ {}", notification.text());
            if let Some(message) = receipt.message {
                println!("{}", message);
            }
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn report_and_exit(e: &LoanError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.category() {
        ErrorCategory::Validation | ErrorCategory::Configuration => 1,
        ErrorCategory::Server => 2,
        ErrorCategory::Network => 3,
        ErrorCategory::System => 1,
    };
    std::process::exit(exit_code);
}
