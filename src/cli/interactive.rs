//! Prompt driven conversion loop

use crate::cli::ui::{StyleType, new_spinner, style_text};
use crate::core::conversion::{Conversion, validate_amount};
use crate::core::currency::{Currency, CurrencyRateProvider, find_currency};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::{error, info};

pub struct Session<'a, R, W> {
    input: R,
    output: W,
    currencies: &'a [Currency],
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(input: R, output: W, currencies: &'a [Currency]) -> Self {
        Session {
            input,
            output,
            currencies,
        }
    }

    /// Runs conversions until the user declines to continue.
    ///
    /// A failed rate lookup is reported and the user may try again; only I/O
    /// failures on the terminal end the session with an error.
    ///
    /// Prompts read `input` synchronously and block the calling task. The
    /// loop is strictly sequential, so nothing else runs on the runtime while
    /// waiting for the user.
    pub async fn run<P: CurrencyRateProvider>(&mut self, provider: &P) -> Result<()> {
        loop {
            let origin = self.select_currency("Select the origin currency")?;
            let destination = self.select_currency("Select the destination currency")?;
            let amount = self.read_amount(origin)?;

            let spinner = new_spinner(format!(
                "Fetching {} to {} rate",
                origin.code, destination.code
            ));
            let rate = provider.get_rate(&origin.code, &destination.code).await;
            spinner.finish_and_clear();

            match rate {
                Ok(rate) => {
                    let conversion =
                        Conversion::new(&origin.code, &destination.code, amount, rate);
                    info!(?conversion, "Conversion complete");
                    writeln!(
                        self.output,
                        "{}",
                        style_text(&conversion.summary_line(), StyleType::Result)
                    )?;
                    writeln!(self.output, "{}", conversion.rate_line())?;
                }
                Err(e) => {
                    error!(error = %e, "Rate lookup failed");
                    self.report(&format!("Could not fetch the exchange rate: {e}"))?;
                }
            }

            if !self.confirm("Convert another amount?")? {
                return Ok(());
            }
        }
    }

    /// Shows the numbered currency menu until a valid number or code is entered.
    pub fn select_currency(&mut self, title: &str) -> Result<&'a Currency> {
        let currencies = self.currencies;
        writeln!(self.output, "{}", style_text(title, StyleType::Title))?;
        for (index, currency) in currencies.iter().enumerate() {
            writeln!(self.output, "  {}) {}", index + 1, currency)?;
        }

        loop {
            let answer = self.prompt("> ")?;
            if let Some(currency) = Self::pick(currencies, &answer) {
                return Ok(currency);
            }
            self.report(&format!(
                "Unknown choice '{}', enter 1-{} or a currency code",
                answer.trim(),
                currencies.len()
            ))?;
        }
    }

    /// Asks for an amount, prompting with the currency symbol.
    pub fn read_amount(&mut self, currency: &Currency) -> Result<f64> {
        writeln!(
            self.output,
            "{}",
            style_text("Enter the amount to convert (e.g. 100)", StyleType::Title)
        )?;
        loop {
            let answer = self.prompt(&format!("{} ", currency.symbol))?;
            match validate_amount(&answer) {
                Ok(amount) => return Ok(amount),
                Err(e) => self.report(&e.to_string())?,
            }
        }
    }

    /// Yes/no question, anything but an explicit yes counts as no.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.prompt(&format!("{question} [y/N] "))?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    fn pick(currencies: &'a [Currency], answer: &str) -> Option<&'a Currency> {
        let answer = answer.trim();
        match answer.parse::<usize>() {
            Ok(number) => number.checked_sub(1).and_then(|i| currencies.get(i)),
            Err(_) => find_currency(currencies, answer),
        }
    }

    fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", style_text(prompt, StyleType::Prompt))?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from terminal")?;
        if read == 0 {
            bail!("Input closed");
        }
        Ok(line)
    }

    fn report(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", style_text(message, StyleType::Error))?;
        Ok(())
    }
}
