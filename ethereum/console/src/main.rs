use clap::{Parser, Subcommand};

use ethers_core::types::Address;

use amm_ethereum::{
  deploy_and_test, check_pool_reserves, check_token_balance, add_liquidity_manual, resolve_pool,
  config::{self, Config, parse_address, require},
  client::connect,
  units::format_ether,
};

/// Deploy and exercise a constant-product AMM.
///
/// The node, signing key, artifacts, and default contract addresses are read from the `AMM_*`
/// environment variables.
#[derive(Parser, Debug)]
#[command(name = "amm-console", version)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Deploy two tokens and a factory, create a pool, add liquidity, and swap against it.
  DeployAndTest,
  /// Read a pool's reserves.
  CheckPoolReserves {
    /// The pool. Defaults to AMM_POOL_ADDRESS, else the factory's pool for the configured tokens.
    #[arg(value_parser = address)]
    pool: Option<Address>,
  },
  /// Read a holder's balance of a token.
  CheckTokenBalance {
    /// The token. Defaults to AMM_TOKEN_A_ADDRESS.
    #[arg(value_parser = address)]
    token: Option<Address>,
    /// The holder. Defaults to the signing account.
    #[arg(value_parser = address)]
    holder: Option<Address>,
  },
  /// Approve both tokens to a pool and deposit them.
  AddLiquidity {
    /// Defaults to AMM_POOL_ADDRESS, else the factory's pool for the configured tokens.
    #[arg(long, value_parser = address)]
    pool: Option<Address>,
    /// Defaults to AMM_TOKEN_A_ADDRESS.
    #[arg(long, value_parser = address)]
    token_a: Option<Address>,
    /// Defaults to AMM_TOKEN_B_ADDRESS.
    #[arg(long, value_parser = address)]
    token_b: Option<Address>,
    /// Amount of token A, in whole tokens (18 decimals).
    amount0: String,
    /// Amount of token B, in whole tokens (18 decimals).
    amount1: String,
  },
}

fn address(value: &str) -> Result<Address, String> {
  parse_address(value).ok_or_else(|| format!("{value} isn't a 20-byte hex address"))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
  // Override the panic handler with one which will exit the process if any tokio task panics
  {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
      existing(panic);
      const MSG: &str = "exiting the process due to a task panicking";
      println!("{MSG}");
      log::error!("{MSG}");
      std::process::exit(1);
    }));
  }

  if std::env::var("RUST_LOG").is_err() {
    std::env::set_var("RUST_LOG", "info");
  }
  env_logger::init();

  let cli = Cli::parse();
  let config = Config::from_env()?;
  log::debug!("loaded {config:?}");

  let client = connect(&config).await?;

  match cli.command {
    Command::DeployAndTest => {
      let deployment = deploy_and_test(client, &config.artifacts).await?;
      println!("{}", serde_json::to_string_pretty(&deployment)?);
    }
    Command::CheckPoolReserves { pool } => {
      let pool = resolve_pool(client.clone(), pool, &config).await?;
      let reserves = check_pool_reserves(client, pool).await?;
      println!("reserve 0: {}", format_ether(reserves.reserve0));
      println!("reserve 1: {}", format_ether(reserves.reserve1));
    }
    Command::CheckTokenBalance { token, holder } => {
      let token = require(token.or(config.token_a), config::TOKEN_A_ADDRESS)?;
      let holder = holder.unwrap_or_else(|| client.address());
      let balance = check_token_balance(client, token, holder).await?;
      println!("{}", format_ether(balance));
    }
    Command::AddLiquidity { pool, token_a, token_b, amount0, amount1 } => {
      let pool = resolve_pool(client.clone(), pool, &config).await?;
      let token_a = require(token_a.or(config.token_a), config::TOKEN_A_ADDRESS)?;
      let token_b = require(token_b.or(config.token_b), config::TOKEN_B_ADDRESS)?;
      let receipt =
        add_liquidity_manual(client, pool, token_a, token_b, &amount0, &amount1).await?;
      println!("{:?}", receipt.transaction_hash);
    }
  }

  Ok(())
}
