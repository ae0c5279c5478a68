//! Compiled contracts, as emitted by `solc --abi --bin`.

use std::{fs, path::Path};

use ethers_core::{abi::Abi, types::Bytes};

use crate::Error;

/// The test token, constructed with `(name, symbol, decimals, supply)`.
pub const TEST_ERC20: &str = "TestERC20";
/// The pool factory, constructed with no arguments.
pub const FACTORY: &str = "UniswapV3Factory";

/// A contract's interface and creation bytecode.
#[derive(Clone, Debug)]
pub struct Artifact {
  pub abi: Abi,
  pub bytecode: Bytes,
}

impl Artifact {
  /// Load `<dir>/<name>.abi` and `<dir>/<name>.bin`.
  pub fn load(dir: &Path, name: &str) -> Result<Self, Error> {
    let err = |reason: String| Error::Artifact { contract: name.to_string(), reason };

    let abi_path = dir.join(format!("{name}.abi"));
    let abi = fs::read_to_string(&abi_path)
      .map_err(|e| err(format!("couldn't read {}: {e}", abi_path.display())))?;
    let abi: Abi =
      serde_json::from_str(&abi).map_err(|e| err(format!("ABI wasn't valid JSON: {e}")))?;

    let bin_path = dir.join(format!("{name}.bin"));
    let bin = fs::read_to_string(&bin_path)
      .map_err(|e| err(format!("couldn't read {}: {e}", bin_path.display())))?;
    let bin = bin.trim();
    let bin = bin.strip_prefix("0x").unwrap_or(bin);
    if bin.is_empty() {
      Err(err("bytecode was empty".to_string()))?;
    }
    let bytecode = hex::decode(bin).map_err(|e| err(format!("bytecode wasn't valid hex: {e}")))?;

    Ok(Self { abi, bytecode: bytecode.into() })
  }
}
