//! Operator configuration, read from the environment.

use core::time::Duration;
use std::path::PathBuf;

use zeroize::Zeroizing;

use ethers_core::types::Address;

use crate::Error;

pub const RPC_URL: &str = "AMM_RPC_URL";
pub const PRIVATE_KEY: &str = "AMM_PRIVATE_KEY";
pub const ARTIFACTS_PATH: &str = "AMM_ARTIFACTS_PATH";
pub const POLL_INTERVAL_MS: &str = "AMM_POLL_INTERVAL_MS";
pub const FACTORY_ADDRESS: &str = "AMM_FACTORY_ADDRESS";
pub const TOKEN_A_ADDRESS: &str = "AMM_TOKEN_A_ADDRESS";
pub const TOKEN_B_ADDRESS: &str = "AMM_TOKEN_B_ADDRESS";
pub const POOL_ADDRESS: &str = "AMM_POOL_ADDRESS";

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";
const DEFAULT_ARTIFACTS_PATH: &str = "./artifacts";
// Matches the default polling interval of ethers' HTTP provider
const DEFAULT_POLL_INTERVAL_MS: u64 = 7000;

// Left in place of an address the operator has yet to fill in
const PLACEHOLDER: &str = "0x...";

/// Where to reach the chain, who to sign as, and which contracts to talk to.
#[derive(Clone)]
pub struct Config {
  pub rpc_url: String,
  pub private_key: Option<Zeroizing<String>>,
  pub artifacts: PathBuf,
  pub poll_interval: Duration,
  /// Used to find the pool for token A and token B when no pool is configured.
  pub factory: Option<Address>,
  pub token_a: Option<Address>,
  pub token_b: Option<Address>,
  pub pool: Option<Address>,
}

impl core::fmt::Debug for Config {
  fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    fmt
      .debug_struct("Config")
      .field("rpc_url", &self.rpc_url)
      .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
      .field("artifacts", &self.artifacts)
      .field("poll_interval", &self.poll_interval)
      .field("factory", &self.factory)
      .field("token_a", &self.token_a)
      .field("token_b", &self.token_b)
      .field("pool", &self.pool)
      .finish()
  }
}

impl Config {
  /// Read the configuration from the process environment.
  pub fn from_env() -> Result<Self, Error> {
    Self::from_lookup(|variable| std::env::var(variable).ok())
  }

  /// Read the configuration through an arbitrary lookup function.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
    // Treat empty values as unset
    let var = |variable: &str| lookup(variable).filter(|value| !value.trim().is_empty());

    let address = |variable: &'static str| -> Result<Option<Address>, Error> {
      let Some(value) = var(variable) else { return Ok(None) };
      let value = value.trim();
      if value == PLACEHOLDER {
        return Ok(None);
      }
      parse_address(value).map(Some).ok_or_else(|| Error::InvalidConfig {
        variable,
        expected: "address",
        value: value.to_string(),
      })
    };

    let poll_interval = match var(POLL_INTERVAL_MS) {
      Some(ms) => Duration::from_millis(ms.trim().parse().map_err(|_| Error::InvalidConfig {
        variable: POLL_INTERVAL_MS,
        expected: "number of milliseconds",
        value: ms.clone(),
      })?),
      None => Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
    };

    Ok(Self {
      rpc_url: var(RPC_URL).unwrap_or_else(|| DEFAULT_RPC_URL.to_string()),
      private_key: var(PRIVATE_KEY).map(Zeroizing::new),
      artifacts: var(ARTIFACTS_PATH).unwrap_or_else(|| DEFAULT_ARTIFACTS_PATH.to_string()).into(),
      poll_interval,
      factory: address(FACTORY_ADDRESS)?,
      token_a: address(TOKEN_A_ADDRESS)?,
      token_b: address(TOKEN_B_ADDRESS)?,
      pool: address(POOL_ADDRESS)?,
    })
  }

  /// The private key of the signing identity.
  pub fn private_key(&self) -> Result<&str, Error> {
    self.private_key.as_ref().map(|key| key.as_str()).ok_or(Error::MissingConfig(PRIVATE_KEY))
  }
}

/// Parse a hex address, with or without its `0x` prefix.
pub fn parse_address(value: &str) -> Option<Address> {
  value.parse::<Address>().ok()
}

/// Yield a configured address, or the error naming the variable which should have set it.
pub fn require(address: Option<Address>, variable: &'static str) -> Result<Address, Error> {
  address.ok_or(Error::MissingConfig(variable))
}
