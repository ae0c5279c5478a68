#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]

use thiserror::Error;

pub(crate) mod abi;

pub mod units;
pub mod math;
pub mod config;
pub mod artifact;
pub mod contract;
pub mod client;

pub mod erc20;
pub mod factory;
pub mod pool;

pub mod flow;
pub use flow::{
  Deployment, deploy_and_test, check_pool_reserves, check_token_balance, add_liquidity_manual,
  resolve_pool,
};

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum Error {
  /// A contract call, deployment, or node request failed.
  ///
  /// This covers reverts, transport failures, insufficient balances, and transactions which were
  /// dropped before confirmation. The node's message is kept verbatim.
  #[error("remote call failed: {0}")]
  RemoteCall(String),
  #[error("{0} wasn't specified")]
  MissingConfig(&'static str),
  #[error("{variable} wasn't a valid {expected}: {value}")]
  InvalidConfig { variable: &'static str, expected: &'static str, value: String },
  #[error("couldn't load the {contract} artifact: {reason}")]
  Artifact { contract: String, reason: String },
  #[error("invalid amount {0:?}")]
  InvalidAmount(String),
  #[error("swap quote overflowed for the current reserves")]
  Overflow,
}

pub(crate) fn remote(e: impl core::fmt::Display) -> Error {
  Error::RemoteCall(e.to_string())
}
