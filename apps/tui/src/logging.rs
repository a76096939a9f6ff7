use crate::config::AppConfig;
use color_eyre::eyre::WrapErr;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the file logger. Nothing is written to the terminal, which
/// belongs to the UI while the app runs.
pub fn init(config: &AppConfig) -> color_eyre::Result<()> {
    let path = config.log_file.display();
    let file = File::create(&config.log_file)
        .wrap_err_with(|| format!("cannot create log file {path}"))?;
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .wrap_err("logger already installed")?;

    Ok(())
}
