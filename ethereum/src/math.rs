//! The one piece of local arithmetic: quoting a constant-product swap from on-chain reserves.

use ethers_core::types::U256;

/// The pool fee tier passed to the factory, in hundredths of a basis point (0.3%).
pub const FEE_TIER: u32 = 3000;

/// Numerator of the fraction of output kept after the 0.3% deduction.
pub const FEE_NUMERATOR: u64 = 997;
/// Denominator of the fraction of output kept after the 0.3% deduction.
pub const FEE_DENOMINATOR: u64 = 1000;

/// A quote for swapping an exact amount in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SwapQuote {
  /// `reserve_out * amount_in / (reserve_in + amount_in)`, floored.
  pub expected_output: U256,
  /// The expected output with 0.3% deducted, floored. This is the amount requested from the pool.
  pub min_output: U256,
}

/// The raw constant-product output for `amount_in`.
///
/// Returns `None` if the product overflows or the denominator is zero.
pub fn expected_output(reserve_in: U256, reserve_out: U256, amount_in: U256) -> Option<U256> {
  let numerator = reserve_out.checked_mul(amount_in)?;
  let denominator = reserve_in.checked_add(amount_in)?;
  numerator.checked_div(denominator)
}

/// Deduct the 0.3% fee from an output amount.
pub fn deduct_fee(output: U256) -> Option<U256> {
  output.checked_mul(U256::from(FEE_NUMERATOR))?.checked_div(U256::from(FEE_DENOMINATOR))
}

/// Quote a swap of `amount_in` of the input side against the given reserves.
pub fn quote(reserve_in: U256, reserve_out: U256, amount_in: U256) -> Option<SwapQuote> {
  let expected_output = expected_output(reserve_in, reserve_out, amount_in)?;
  Some(SwapQuote { expected_output, min_output: deduct_fee(expected_output)? })
}
