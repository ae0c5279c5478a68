use std::sync::Arc;

use ethers_core::{
  abi::{Tokenize, Detokenize},
  types::{Address, TransactionReceipt},
};
use ethers_providers::Middleware;
use ethers_contract::{ContractCall, ContractFactory};

use crate::{Error, remote, artifact::Artifact};

/// Deploy a compiled contract, waiting for its creation to be included.
///
/// A creation which was included yet reverted is a failed remote call, even though the node still
/// reports the address the contract would have been created at.
pub async fn deploy<M: Middleware + 'static, T: Tokenize>(
  client: Arc<M>,
  artifact: Artifact,
  constructor_args: T,
) -> Result<Address, Error> {
  let factory = ContractFactory::new(artifact.abi, artifact.bytecode, client);
  let (contract, receipt) = factory
    .deploy(constructor_args)
    .map_err(remote)?
    .send_with_receipt()
    .await
    .map_err(remote)?;
  check_status(&receipt)?;
  Ok(contract.address())
}

/// Send a state-changing call and wait for its receipt.
///
/// A transaction which was dropped, or which was included yet reverted, is a failed remote call.
pub async fn confirm<M: Middleware, D: Detokenize>(
  call: &ContractCall<M, D>,
) -> Result<TransactionReceipt, Error> {
  let pending_tx = call.send().await.map_err(remote)?;
  let receipt = pending_tx
    .await
    .map_err(remote)?
    .ok_or_else(|| Error::RemoteCall("transaction was dropped before confirmation".to_string()))?;
  check_status(&receipt)?;
  Ok(receipt)
}

fn check_status(receipt: &TransactionReceipt) -> Result<(), Error> {
  if receipt.status != Some(1.into()) {
    Err(Error::RemoteCall(format!("transaction {:?} reverted", receipt.transaction_hash)))?;
  }
  Ok(())
}
