use std::{sync::Arc, fs};

use ethers_core::{
  abi::{self, Token},
  types::Bytes,
};
use ethers_providers::{Provider, MockProvider};


mod units;
mod artifact;

pub(crate) const TEST_ERC20_ABI: &str = r#"[
  {
    "type": "constructor",
    "inputs": [
      { "name": "name", "type": "string", "internalType": "string" },
      { "name": "symbol", "type": "string", "internalType": "string" },
      { "name": "decimals", "type": "uint8", "internalType": "uint8" },
      { "name": "supply", "type": "uint256", "internalType": "uint256" }
    ],
    "stateMutability": "nonpayable"
  },
  {
    "type": "function",
    "name": "name",
    "inputs": [],
    "outputs": [{ "name": "", "type": "string", "internalType": "string" }],
    "stateMutability": "view"
  }
]"#;

pub(crate) fn write_artifact(dir: &tempfile::TempDir, name: &str, abi: &str, bin: &str) {
  fs::write(dir.path().join(format!("{name}.abi")), abi).unwrap();
  fs::write(dir.path().join(format!("{name}.bin")), bin).unwrap();
}

pub(crate) fn mocked() -> (Arc<Provider<MockProvider>>, MockProvider) {
  let (provider, mock) = Provider::mocked();
  (Arc::new(provider), mock)
}

// The mock pops responses from the back, so these must be queued in reverse order of the calls
pub(crate) fn queue_return(mock: &MockProvider, tokens: &[Token]) {
  mock.push::<Bytes, _>(Bytes::from(abi::encode(tokens))).unwrap();
}
