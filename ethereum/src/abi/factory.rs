use ethers_contract::abigen;

abigen!(
  IAmmFactory,
  r#"[
    function owner() view returns (address)
    function feeAmountTickSpacing(uint24) view returns (int24)
    function getPool(address,address,uint24) view returns (address)
    function createPool(address,address,uint24) returns (address)
    function setOwner(address)
    function enableFeeAmount(uint24,int24)
  ]"#
);
