use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    init_cli_logger_with_level(verbose, None);
}

/// `level` 來自設定檔 `[logging] level`，RUST_LOG 優先
pub fn init_cli_logger_with_level(verbose: bool, level: Option<&str>) {
    let default_directive = if verbose {
        "loan_quote=debug,info".to_string()
    } else {
        format!("loan_quote={}", level.unwrap_or("info"))
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
