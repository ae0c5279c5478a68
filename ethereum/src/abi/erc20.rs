use ethers_contract::abigen;

abigen!(
  IErc20,
  r#"[
    function name() view returns (string)
    function symbol() view returns (string)
    function decimals() view returns (uint8)
    function totalSupply() view returns (uint256)
    function balanceOf(address) view returns (uint256)
    function allowance(address,address) view returns (uint256)
    function transfer(address,uint256) returns (bool)
    function approve(address,uint256) returns (bool)
    function transferFrom(address,address,uint256) returns (bool)
    function mint(address,uint256)
  ]"#
);
