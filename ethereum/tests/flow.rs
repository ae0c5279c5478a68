use std::{sync::Arc, time::Duration, path::PathBuf};

use ethers_core::utils::{Anvil, AnvilInstance};
use ethers_providers::{Provider, Http};
use ethers_signers::{LocalWallet, Signer};
use ethers_middleware::SignerMiddleware;

use amm_ethereum::{
  deploy_and_test, check_pool_reserves, check_token_balance, add_liquidity_manual,
  client::Client,
  units::parse_ether,
};

fn artifacts() -> PathBuf {
  std::env::var("AMM_ARTIFACTS_PATH").unwrap_or_else(|_| "./artifacts".to_string()).into()
}

fn client(anvil: &AnvilInstance) -> Arc<Client> {
  let provider =
    Provider::<Http>::try_from(anvil.endpoint()).unwrap().interval(Duration::from_millis(10u64));
  let wallet: LocalWallet = anvil.keys()[0].clone().into();
  Arc::new(SignerMiddleware::new(provider, wallet.with_chain_id(anvil.chain_id())))
}

#[tokio::test]
#[ignore = "requires anvil and compiled TestERC20/UniswapV3Factory artifacts"]
async fn full_flow_then_manual_liquidity() {
  let anvil = Anvil::new().spawn();
  let client = client(&anvil);
  let signer = client.address();

  let deployment = deploy_and_test(client.clone(), &artifacts()).await.unwrap();
  assert_ne!(deployment.token_a, deployment.token_b);

  let before = check_pool_reserves(client.clone(), deployment.pool).await.unwrap();
  assert!(!before.reserve0.is_zero());
  assert!(!before.reserve1.is_zero());

  // Everything minted, less what was deposited and swapped in
  let supply = parse_ether("1000000").unwrap();
  let balance_a = check_token_balance(client.clone(), deployment.token_a, signer).await.unwrap();
  assert!(balance_a <= supply - parse_ether("1100").unwrap());

  add_liquidity_manual(
    client.clone(),
    deployment.pool,
    deployment.token_a,
    deployment.token_b,
    "10",
    "10",
  )
  .await
  .unwrap();
  let after = check_pool_reserves(client, deployment.pool).await.unwrap();
  assert!(after.reserve0 > before.reserve0);
  assert!(after.reserve1 > before.reserve1);
}

#[tokio::test]
#[ignore = "requires anvil"]
async fn missing_artifacts_fail_before_sending() {
  let anvil = Anvil::new().spawn();
  let client = client(&anvil);

  let dir = std::env::temp_dir().join("amm-ethereum-no-artifacts");
  let res = deploy_and_test(client, &dir).await;
  assert!(matches!(res, Err(amm_ethereum::Error::Artifact { .. })));
}
