use std::{sync::Arc, path::Path};

use ethers_core::types::{Address, U256, TransactionReceipt};
use ethers_providers::Middleware;

use crate::{
  Error, remote,
  artifact::{self, Artifact},
  contract::{deploy, confirm},
};
pub use crate::abi::erc20::IErc20;

/// A handle to an ERC20 contract.
///
/// This does not check a contract is deployed at the address, nor that it's actually an ERC20.
#[derive(Clone, Debug)]
pub struct Erc20<M>(IErc20<M>);
impl<M: Middleware + 'static> Erc20<M> {
  pub fn new(client: Arc<M>, address: Address) -> Self {
    Self(IErc20::new(address, client))
  }

  /// Deploy a fresh test token, minting the entire supply to the deployer.
  pub async fn deploy(
    client: Arc<M>,
    artifacts: &Path,
    name: &str,
    symbol: &str,
    decimals: u8,
    supply: U256,
  ) -> Result<Self, Error> {
    let artifact = Artifact::load(artifacts, artifact::TEST_ERC20)?;
    let address = deploy(
      client.clone(),
      artifact,
      (name.to_string(), symbol.to_string(), decimals, supply),
    )
    .await?;
    Ok(Self::new(client, address))
  }

  pub fn address(&self) -> Address {
    self.0.address()
  }

  pub async fn name(&self) -> Result<String, Error> {
    self.0.name().call().await.map_err(remote)
  }

  pub async fn balance_of(&self, holder: Address) -> Result<U256, Error> {
    self.0.balance_of(holder).call().await.map_err(remote)
  }

  /// Allow `spender` to transfer up to `amount` from the sender.
  pub async fn approve(&self, spender: Address, amount: U256) -> Result<TransactionReceipt, Error> {
    confirm(&self.0.approve(spender, amount)).await
  }
}
