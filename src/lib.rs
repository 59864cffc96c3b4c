pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::{Conversion, CurrencyRateProvider};
use anyhow::{Context, Result};
use tracing::{debug, info};

pub enum AppCommand {
    Interactive,
    Convert {
        from: String,
        to: String,
        amount: f64,
    },
    Currencies,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Interactive => {
            let provider = providers::rate_provider(&config)?;
            let stdin = std::io::stdin();
            let mut session = cli::interactive::Session::new(
                stdin.lock(),
                console::Term::stdout(),
                &config.currencies,
            );
            session.run(&provider).await
        }
        AppCommand::Convert { from, to, amount } => {
            let provider = providers::rate_provider(&config)?;
            let conversion = convert(&provider, &from, &to, amount).await?;
            println!("{}", conversion.summary_line());
            println!("{}", conversion.rate_line());
            Ok(())
        }
        AppCommand::Currencies => {
            println!("{}", cli::currencies::currencies_table(&config.currencies));
            Ok(())
        }
    }
}

/// Looks up the current rate and applies it to `amount`.
pub async fn convert<P: CurrencyRateProvider>(
    provider: &P,
    from: &str,
    to: &str,
    amount: f64,
) -> Result<Conversion> {
    let from = from.trim().to_uppercase();
    let to = to.trim().to_uppercase();
    let rate = provider
        .get_rate(&from, &to)
        .await
        .with_context(|| format!("Failed to convert {from} to {to}"))?;
    Ok(Conversion::new(&from, &to, amount, rate))
}
