use std::fs;

use crate::{
  Error,
  artifact::Artifact,
  tests::{TEST_ERC20_ABI as ABI, write_artifact as write},
};

#[test]
fn load_artifact() {
  let dir = tempfile::tempdir().unwrap();
  write(&dir, "TestERC20", ABI, "0x6080604052\n");

  let artifact = Artifact::load(dir.path(), "TestERC20").unwrap();
  assert_eq!(artifact.bytecode.to_vec(), vec![0x60u8, 0x80, 0x60, 0x40, 0x52]);
  assert_eq!(artifact.abi.constructor().unwrap().inputs.len(), 4);
  assert!(artifact.abi.function("name").is_ok());
}

#[test]
fn unprefixed_bytecode() {
  let dir = tempfile::tempdir().unwrap();
  write(&dir, "UniswapV3Factory", "[]", "  6080604052  ");
  let artifact = Artifact::load(dir.path(), "UniswapV3Factory").unwrap();
  assert_eq!(artifact.bytecode.len(), 5);
  assert!(artifact.abi.constructor().is_none());
}

#[test]
fn missing_files() {
  let dir = tempfile::tempdir().unwrap();
  let Err(Error::Artifact { contract, .. }) = Artifact::load(dir.path(), "TestERC20") else {
    panic!("loaded an artifact which doesn't exist");
  };
  assert_eq!(contract, "TestERC20");

  // ABI without its bytecode
  fs::write(dir.path().join("TestERC20.abi"), ABI).unwrap();
  assert!(matches!(Artifact::load(dir.path(), "TestERC20"), Err(Error::Artifact { .. })));
}

#[test]
fn malformed_files() {
  let dir = tempfile::tempdir().unwrap();

  write(&dir, "BadAbi", "{ not json", "0x6080");
  assert!(matches!(Artifact::load(dir.path(), "BadAbi"), Err(Error::Artifact { .. })));

  write(&dir, "BadBin", ABI, "0xnothex");
  assert!(matches!(Artifact::load(dir.path(), "BadBin"), Err(Error::Artifact { .. })));

  write(&dir, "EmptyBin", ABI, "0x");
  assert!(matches!(Artifact::load(dir.path(), "EmptyBin"), Err(Error::Artifact { .. })));
}
