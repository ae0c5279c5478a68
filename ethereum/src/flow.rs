//! The operations exposed to the operator.
//!
//! Each is a fixed sequence of remote calls, each awaited before the next is issued. Nothing is
//! retried and nothing is rolled back; a failure leaves the chain in whatever state the calls
//! before it produced.

use std::{sync::Arc, path::Path};

use serde::Serialize;

use ethers_core::types::{Address, U256, TransactionReceipt};
use ethers_providers::Middleware;

use crate::{
  Error,
  units::{format_ether, parse_ether},
  math::{self, FEE_TIER},
  config::{self, Config},
  client::sender,
  erc20::Erc20,
  factory::Factory,
  pool::{Reserves, Pool},
};

const TOKEN_DECIMALS: u8 = 18;
const TOKEN_SUPPLY: &str = "1000000";
const LIQUIDITY_AMOUNT: &str = "1000";
const SWAP_AMOUNT: &str = "100";

/// The contracts created by [`deploy_and_test`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Deployment {
  pub factory: Address,
  pub token_a: Address,
  pub token_b: Address,
  pub pool: Address,
}

/// Deploy two tokens and a factory, create a pool for the tokens, seed it with liquidity, and swap
/// against it.
///
/// Any failure is logged before being returned.
pub async fn deploy_and_test<M: Middleware + 'static>(
  client: Arc<M>,
  artifacts: &Path,
) -> Result<Deployment, Error> {
  log::info!("starting AMM deployment and testing");
  let res = full_flow(client, artifacts).await;
  if let Err(e) = &res {
    log::error!("error during deployment/testing: {e}");
  }
  res
}

async fn full_flow<M: Middleware + 'static>(
  client: Arc<M>,
  artifacts: &Path,
) -> Result<Deployment, Error> {
  let signer = sender(client.as_ref())?;
  log::info!("using account {signer:?}");

  log::info!("deploying test tokens");
  let supply = parse_ether(TOKEN_SUPPLY)?;
  let token_a =
    Erc20::deploy(client.clone(), artifacts, "Token A", "TKNA", TOKEN_DECIMALS, supply).await?;
  log::info!("token A deployed at {:?}", token_a.address());
  let token_b =
    Erc20::deploy(client.clone(), artifacts, "Token B", "TKNB", TOKEN_DECIMALS, supply).await?;
  log::info!("token B deployed at {:?}", token_b.address());

  log::info!("deploying AMM factory");
  let factory = Factory::deploy(client.clone(), artifacts).await?;
  log::info!("factory deployed at {:?}", factory.address());

  log::info!("creating pool");
  factory.create_pool(token_a.address(), token_b.address(), FEE_TIER).await?;
  let pool_address = factory.pool(token_a.address(), token_b.address(), FEE_TIER).await?;
  log::info!("pool created at {pool_address:?}");
  let pool = Pool::new(client.clone(), pool_address);

  log::info!("adding liquidity");
  let liquidity = parse_ether(LIQUIDITY_AMOUNT)?;
  token_a.approve(pool_address, liquidity).await?;
  token_b.approve(pool_address, liquidity).await?;
  log::info!("tokens approved");
  pool.add_liquidity(liquidity, liquidity, signer).await?;
  log::info!("liquidity added");

  let reserves = pool.reserves().await?;
  log_reserves("pool reserves", &reserves);

  log::info!("testing swap");
  let amount_in = parse_ether(SWAP_AMOUNT)?;
  token_a.approve(pool_address, amount_in).await?;
  let quote =
    math::quote(reserves.reserve0, reserves.reserve1, amount_in).ok_or(Error::Overflow)?;
  log::info!("expected output: {}", format_ether(quote.expected_output));
  // Swap token A for token B
  pool.swap(U256::zero(), quote.min_output, signer).await?;
  log::info!("swap completed");

  let reserves = pool.reserves().await?;
  log_reserves("final pool reserves", &reserves);

  let balance_a = token_a.balance_of(signer).await?;
  let balance_b = token_b.balance_of(signer).await?;
  log::info!("token A balance: {}", format_ether(balance_a));
  log::info!("token B balance: {}", format_ether(balance_b));

  log::info!("deployment and testing completed successfully");
  Ok(Deployment {
    factory: factory.address(),
    token_a: token_a.address(),
    token_b: token_b.address(),
    pool: pool_address,
  })
}

fn log_reserves(label: &str, reserves: &Reserves) {
  log::info!(
    "{label}: reserve 0 = {}, reserve 1 = {}",
    format_ether(reserves.reserve0),
    format_ether(reserves.reserve1),
  );
}

/// The pool to operate on: the one given, else the configured pool, else the pool the configured
/// factory indexes for the configured tokens at the 0.3% fee tier.
pub async fn resolve_pool<M: Middleware + 'static>(
  client: Arc<M>,
  pool: Option<Address>,
  config: &Config,
) -> Result<Address, Error> {
  if let Some(pool) = pool.or(config.pool) {
    return Ok(pool);
  }
  let (Some(factory), Some(token_a), Some(token_b)) =
    (config.factory, config.token_a, config.token_b)
  else {
    return Err(Error::MissingConfig(config::POOL_ADDRESS));
  };
  let pool = Factory::new(client, factory).pool(token_a, token_b, FEE_TIER).await?;
  log::info!("found pool {pool:?} through factory {factory:?}");
  Ok(pool)
}

/// Read a pool's reserves.
pub async fn check_pool_reserves<M: Middleware + 'static>(
  client: Arc<M>,
  pool: Address,
) -> Result<Reserves, Error> {
  let reserves = Pool::new(client, pool).reserves().await?;
  log_reserves("pool reserves", &reserves);
  Ok(reserves)
}

/// Read how much of a token `holder` has.
pub async fn check_token_balance<M: Middleware + 'static>(
  client: Arc<M>,
  token: Address,
  holder: Address,
) -> Result<U256, Error> {
  let token = Erc20::new(client, token);
  let balance = token.balance_of(holder).await?;
  let name = token.name().await?;
  log::info!("{name} balance for {holder:?}: {}", format_ether(balance));
  Ok(balance)
}

/// Approve both tokens to the pool and deposit them, minting liquidity to the sender.
///
/// Amounts are decimal token amounts, assuming 18 decimals.
pub async fn add_liquidity_manual<M: Middleware + 'static>(
  client: Arc<M>,
  pool: Address,
  token_a: Address,
  token_b: Address,
  amount0: &str,
  amount1: &str,
) -> Result<TransactionReceipt, Error> {
  let amount0 = parse_ether(amount0)?;
  let amount1 = parse_ether(amount1)?;
  let signer = sender(client.as_ref())?;

  Erc20::new(client.clone(), token_a).approve(pool, amount0).await?;
  Erc20::new(client.clone(), token_b).approve(pool, amount1).await?;

  let receipt = Pool::new(client, pool).add_liquidity(amount0, amount1, signer).await?;
  log::info!("liquidity added successfully");
  Ok(receipt)
}
