use ethers_contract::abigen;

abigen!(
  ISimpleAmm,
  r#"[
    function token0() view returns (address)
    function token1() view returns (address)
    function fee() view returns (uint24)
    function reserve0() view returns (uint256)
    function reserve1() view returns (uint256)
    function totalSupply() view returns (uint256)
    function balanceOf(address) view returns (uint256)
    function addLiquidity(uint256,uint256,address) returns (uint256)
    function removeLiquidity(uint256,address) returns (uint256,uint256)
    function swap(uint256,uint256,address)
    function getReserves() view returns (uint256,uint256)
  ]"#
);
