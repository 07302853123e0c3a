use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ZakaChainError;

/// A contribution split into the part kept by the ledger and the amil fee
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContributionSplit {
    pub net_amount: u64,
    pub amil_fee: u64,
}

/// Calculate the amil fee for a contribution
/// Formula: fee = floor(amount * fee_percentage / 1000)
///
/// The product is taken in u128, so any u64 amount with a fee rate up to
/// u8::MAX cannot overflow.
pub fn calculate_amil_fee(amount: u64, amil_fee_percentage: u8) -> Result<u64> {
    let fee = (amount as u128)
        .checked_mul(amil_fee_percentage as u128)
        .ok_or(ZakaChainError::MathOverflow)?
        .checked_div(FEE_DENOMINATOR)
        .ok_or(ZakaChainError::MathOverflow)?;

    #[cfg(feature = "verbose")]
    msg!("calculate_amil_fee: amount={}, rate={}, fee={}", amount, amil_fee_percentage, fee);

    u64::try_from(fee).map_err(|_| error!(ZakaChainError::MathOverflow))
}

/// Split a gross contribution into (net, fee). net + fee == amount always holds.
pub fn split_contribution(amount: u64, amil_fee_percentage: u8) -> Result<ContributionSplit> {
    let amil_fee = calculate_amil_fee(amount, amil_fee_percentage)?;
    let net_amount = amount
        .checked_sub(amil_fee)
        .ok_or(ZakaChainError::MathOverflow)?;

    Ok(ContributionSplit { net_amount, amil_fee })
}

/// Checked accumulator for the running totals
pub fn add_amount(total: u64, amount: u64) -> Result<u64> {
    total
        .checked_add(amount)
        .ok_or_else(|| error!(ZakaChainError::MathOverflow))
}

pub fn increment_count(count: u32) -> Result<u32> {
    count
        .checked_add(1)
        .ok_or_else(|| error!(ZakaChainError::MathOverflow))
}

/// Format token amount with decimals for readable logs
pub fn format_tokens(amount: u64) -> (u64, u64) {
    let whole = amount / TOKEN_DECIMALS_DIVISOR;
    let fractional = amount % TOKEN_DECIMALS_DIVISOR;
    (whole, fractional)
}
