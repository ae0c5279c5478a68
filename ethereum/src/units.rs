//! Conversions between 18-decimal base units and their decimal rendering.

use ethers_core::{types::U256, utils};

use crate::Error;

/// Render an amount of base units as a decimal with 18 places.
pub fn format_ether(amount: U256) -> String {
  utils::format_ether(amount)
}

/// Parse a decimal amount into base units, assuming 18 decimals.
pub fn parse_ether(amount: &str) -> Result<U256, Error> {
  let trimmed = amount.trim();
  if trimmed.is_empty() || trimmed.starts_with('-') {
    Err(Error::InvalidAmount(amount.to_string()))?;
  }
  utils::parse_ether(trimmed).map_err(|_| Error::InvalidAmount(amount.to_string()))
}
