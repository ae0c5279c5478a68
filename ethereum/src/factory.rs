use std::{sync::Arc, path::Path};

use ethers_core::types::{Address, TransactionReceipt};
use ethers_providers::Middleware;

use crate::{
  Error, remote,
  artifact::{self, Artifact},
  contract::{deploy, confirm},
};
pub use crate::abi::factory::IAmmFactory;

/// The factory which creates and indexes pools.
#[derive(Clone, Debug)]
pub struct Factory<M>(IAmmFactory<M>);
impl<M: Middleware + 'static> Factory<M> {
  pub fn new(client: Arc<M>, address: Address) -> Self {
    Self(IAmmFactory::new(address, client))
  }

  pub async fn deploy(client: Arc<M>, artifacts: &Path) -> Result<Self, Error> {
    let artifact = Artifact::load(artifacts, artifact::FACTORY)?;
    let address = deploy(client.clone(), artifact, ()).await?;
    Ok(Self::new(client, address))
  }

  pub fn address(&self) -> Address {
    self.0.address()
  }

  pub async fn create_pool(
    &self,
    token_a: Address,
    token_b: Address,
    fee: u32,
  ) -> Result<TransactionReceipt, Error> {
    confirm(&self.0.create_pool(token_a, token_b, fee)).await
  }

  /// The pool for this pair and fee tier.
  ///
  /// The factory reports the zero address for a pool which doesn't exist, which is surfaced as a
  /// failed call.
  pub async fn pool(&self, token_a: Address, token_b: Address, fee: u32) -> Result<Address, Error> {
    let pool = self.0.get_pool(token_a, token_b, fee).call().await.map_err(remote)?;
    if pool == Address::zero() {
      Err(Error::RemoteCall(format!(
        "factory has no pool for {token_a:?}/{token_b:?} at fee tier {fee}"
      )))?;
    }
    Ok(pool)
  }
}
