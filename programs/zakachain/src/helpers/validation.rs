use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ZakaChainError;

pub fn validate_fee_percentage(amil_fee_percentage: u8) -> Result<()> {
    require!(
        amil_fee_percentage <= MAX_FEE_PERCENTAGE,
        ZakaChainError::InvalidFeePercentage
    );
    Ok(())
}

pub fn validate_amount(amount: u64) -> Result<()> {
    require!(amount > 0, ZakaChainError::InvalidAmount);
    Ok(())
}

/// Balance must cover the requested amount before any transfer is attempted
pub fn validate_balance(balance: u64, amount: u64) -> Result<()> {
    require!(balance >= amount, ZakaChainError::InsufficientFunds);
    Ok(())
}

/// Lengths are measured in bytes: that is what the account space reserves.
pub fn validate_unique_id(unique_id: &str) -> Result<()> {
    require!(
        unique_id.len() <= MAX_UNIQUE_ID_LEN,
        ZakaChainError::UniqueIdTooLong
    );
    Ok(())
}

pub fn validate_name(name: &str) -> Result<()> {
    require!(name.len() <= MAX_NAME_LEN, ZakaChainError::NameTooLong);
    Ok(())
}

pub fn validate_description(description: &str) -> Result<()> {
    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        ZakaChainError::DescriptionTooLong
    );
    Ok(())
}

/// Manual withdrawals may only pay into a token account owned by the amil
pub fn validate_recipient(recipient_owner: &Pubkey, amil: &Pubkey) -> Result<()> {
    require_keys_eq!(*recipient_owner, *amil, ZakaChainError::InvalidRecipient);
    Ok(())
}
