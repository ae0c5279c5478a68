use std::sync::Arc;

use ethers_core::types::{Address, U256, TransactionReceipt};
use ethers_providers::Middleware;

use crate::{Error, remote, contract::confirm};
pub use crate::abi::pool::ISimpleAmm;

/// The balances a pool holds of each of its tokens.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Reserves {
  pub reserve0: U256,
  pub reserve1: U256,
}

/// A constant-product pool over two tokens.
#[derive(Clone, Debug)]
pub struct Pool<M>(ISimpleAmm<M>);
impl<M: Middleware + 'static> Pool<M> {
  pub fn new(client: Arc<M>, address: Address) -> Self {
    Self(ISimpleAmm::new(address, client))
  }

  pub fn address(&self) -> Address {
    self.0.address()
  }

  pub async fn reserves(&self) -> Result<Reserves, Error> {
    let (reserve0, reserve1) = self.0.get_reserves().call().await.map_err(remote)?;
    Ok(Reserves { reserve0, reserve1 })
  }

  /// Deposit both tokens, minting liquidity to `to`.
  ///
  /// Both amounts must have been approved to the pool beforehand.
  pub async fn add_liquidity(
    &self,
    amount0: U256,
    amount1: U256,
    to: Address,
  ) -> Result<TransactionReceipt, Error> {
    confirm(&self.0.add_liquidity(amount0, amount1, to)).await
  }

  pub async fn swap(
    &self,
    amount0_out: U256,
    amount1_out: U256,
    to: Address,
  ) -> Result<TransactionReceipt, Error> {
    confirm(&self.0.swap(amount0_out, amount1_out, to)).await
  }
}
