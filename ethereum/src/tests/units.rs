use ethers_core::types::U256;

use crate::{
  Error,
  units::{format_ether, parse_ether},
};

#[test]
fn parse() {
  assert_eq!(parse_ether("1").unwrap(), U256::exp10(18));
  assert_eq!(parse_ether("1000000").unwrap(), U256::exp10(24));
  assert_eq!(parse_ether(" 0.5 ").unwrap(), U256::exp10(17) * U256::from(5));
  assert_eq!(parse_ether("0").unwrap(), U256::zero());
}

#[test]
fn parse_rejects_garbage() {
  for bad in ["", "  ", "-1", "one", "1.2.3"] {
    assert!(matches!(parse_ether(bad), Err(Error::InvalidAmount(_))), "accepted {bad:?}");
  }
}

#[test]
fn format() {
  assert_eq!(format_ether(U256::exp10(18) * U256::from(1000)), "1000.000000000000000000");
  assert_eq!(format_ether(U256::exp10(17)), "0.100000000000000000");
}
