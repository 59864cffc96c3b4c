//! Amount conversion and display formatting

use anyhow::{Result, bail};

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub origin: String,
    pub destination: String,
    pub amount: f64,
    pub rate: f64,
}

impl Conversion {
    pub fn new(origin: &str, destination: &str, amount: f64, rate: f64) -> Self {
        Conversion {
            origin: origin.to_string(),
            destination: destination.to_string(),
            amount,
            rate,
        }
    }

    pub fn result(&self) -> f64 {
        self.amount * self.rate
    }

    /// `100.00 USD = 92.00 EUR`
    pub fn summary_line(&self) -> String {
        format!(
            "{:.2} {} = {:.2} {}",
            self.amount,
            self.origin,
            self.result(),
            self.destination
        )
    }

    pub fn rate_line(&self) -> String {
        format!("Exchange rate: {:.4}", self.rate)
    }
}

/// Parses user supplied amount text.
pub fn validate_amount(input: &str) -> Result<f64> {
    let input = input.trim();
    if input.is_empty() {
        bail!("The amount cannot be empty");
    }

    let amount: f64 = match input.parse() {
        Ok(value) => value,
        Err(e) => bail!("Invalid amount '{input}': {e}"),
    };
    if !amount.is_finite() {
        bail!("Invalid amount '{input}': must be a finite number");
    }
    if amount < 0.0 {
        bail!("Invalid amount '{input}': must not be negative");
    }
    Ok(amount)
}
