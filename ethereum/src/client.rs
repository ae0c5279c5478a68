use std::sync::Arc;

use ethers_core::types::Address;
use ethers_providers::{Middleware, Provider, Http};
use ethers_signers::{Signer, LocalWallet};
use ethers_middleware::SignerMiddleware;

use crate::{
  Error, remote,
  config::{self, Config},
};

/// An HTTP provider which signs with the operator's key.
pub type Client = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Connect to the configured node and bind the signing identity to its chain ID.
pub async fn connect(config: &Config) -> Result<Arc<Client>, Error> {
  let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
    .map_err(|_| Error::InvalidConfig {
      variable: config::RPC_URL,
      expected: "URL",
      value: config.rpc_url.clone(),
    })?
    .interval(config.poll_interval);

  let wallet = config.private_key()?.parse::<LocalWallet>().map_err(|_| Error::InvalidConfig {
    variable: config::PRIVATE_KEY,
    expected: "secp256k1 private key",
    // Never echo the key back
    value: "<redacted>".to_string(),
  })?;

  let client = SignerMiddleware::new_with_provider_chain(provider, wallet).await.map_err(remote)?;
  log::info!("using account {:?} on chain {}", client.address(), client.signer().chain_id());
  Ok(Arc::new(client))
}

/// The address transactions from this client are sent from.
pub fn sender<M: Middleware>(client: &M) -> Result<Address, Error> {
  client.default_sender().ok_or(Error::MissingConfig(config::PRIVATE_KEY))
}
