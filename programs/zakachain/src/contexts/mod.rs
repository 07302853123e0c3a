use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};
use crate::constants::*;
use crate::errors::ZakaChainError;
use crate::state::*;

// ACCOUNTS - Instruction account validation structs
//
// Ledger-owned addresses are re-derived from their seeds on every instruction.
// Authorization and amount checks live in the handlers (see state::ZakaChainState).

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Created on first call; a second call is rejected by the handler
    #[account(
        init_if_needed,
        payer = amil,
        space = DISCRIMINATOR_LEN + ZakaChainState::LEN,
        seeds = [STATE_SEED],
        bump
    )]
    pub state: Account<'info, ZakaChainState>,
    #[account(mut)]
    pub amil: Signer<'info>,
    /// Contribution mint, pinned for the lifetime of the ledger
    pub mint: Account<'info, Mint>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct AdminControl<'info> {
    #[account(mut, seeds = [STATE_SEED], bump = state.bump)]
    pub state: Account<'info, ZakaChainState>,
    pub authority: Signer<'info>,
}

#[derive(Accounts)]
pub struct CollectZakat<'info> {
    #[account(mut, seeds = [STATE_SEED], bump = state.bump)]
    pub state: Account<'info, ZakaChainState>,
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(constraint = mint.key() == state.mint @ ZakaChainError::InvalidTokenMint)]
    pub mint: Account<'info, Mint>,
    #[account(
        mut,
        constraint = payer_token_account.mint == mint.key() @ ZakaChainError::InvalidTokenMint,
        constraint = payer_token_account.owner == payer.key() @ ZakaChainError::InvalidTokenAccount
    )]
    pub payer_token_account: Account<'info, TokenAccount>,
    /// Ledger vault: ATA of the state PDA, created on the first contribution
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = state
    )]
    pub program_token_account: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = amil_token_account.mint == mint.key() @ ZakaChainError::InvalidTokenMint,
        constraint = amil_token_account.owner == state.amil @ ZakaChainError::InvalidRecipient
    )]
    pub amil_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct AddMustahik<'info> {
    #[account(mut, seeds = [STATE_SEED], bump = state.bump)]
    pub state: Account<'info, ZakaChainState>,
    #[account(mut)]
    pub amil: Signer<'info>,
    /// CHECK: mustahik wallet - only used as a PDA seed and stored as identity
    pub mustahik: UncheckedAccount<'info>,
    #[account(
        init_if_needed,
        payer = amil,
        space = DISCRIMINATOR_LEN + MustahikAccount::LEN,
        seeds = [MUSTAHIK_SEED, mustahik.key().as_ref()],
        bump
    )]
    pub mustahik_account: Account<'info, MustahikAccount>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct DistributeToMustahik<'info> {
    #[account(mut, seeds = [STATE_SEED], bump = state.bump)]
    pub state: Account<'info, ZakaChainState>,
    #[account(mut)]
    pub amil: Signer<'info>,
    /// CHECK: mustahik wallet - PDA seed and owner of the receiving ATA
    pub mustahik: UncheckedAccount<'info>,
    #[account(
        mut,
        seeds = [MUSTAHIK_SEED, mustahik.key().as_ref()],
        bump = mustahik_account.bump,
        constraint = mustahik_account.address == mustahik.key() @ ZakaChainError::InvalidMustahikAccount
    )]
    pub mustahik_account: Account<'info, MustahikAccount>,
    #[account(constraint = mint.key() == state.mint @ ZakaChainError::InvalidTokenMint)]
    pub mint: Account<'info, Mint>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = state
    )]
    pub program_token_account: Account<'info, TokenAccount>,
    /// Created for the mustahik if absent, paid by the amil
    #[account(
        init_if_needed,
        payer = amil,
        associated_token::mint = mint,
        associated_token::authority = mustahik
    )]
    pub mustahik_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Shared by both manual withdrawal variants
#[derive(Accounts)]
pub struct ManualWithdrawal<'info> {
    #[account(mut, seeds = [STATE_SEED], bump = state.bump)]
    pub state: Account<'info, ZakaChainState>,
    pub amil: Signer<'info>,
    #[account(constraint = mint.key() == state.mint @ ZakaChainError::InvalidTokenMint)]
    pub mint: Account<'info, Mint>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = state
    )]
    pub program_token_account: Account<'info, TokenAccount>,
    /// Owner is checked against the amil in the handler (InvalidRecipient)
    #[account(
        mut,
        constraint = recipient_token_account.mint == mint.key() @ ZakaChainError::InvalidTokenMint,
        constraint = recipient_token_account.key() != program_token_account.key() @ ZakaChainError::InvalidRecipient
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct GetMustahikStatus<'info> {
    /// CHECK: mustahik wallet - PDA seed only
    pub mustahik: UncheckedAccount<'info>,
    /// CHECK: address re-derived and data decoded in the handler, so an
    /// unregistered mustahik surfaces as NotFound instead of a deserialize error
    pub mustahik_account: UncheckedAccount<'info>,
}
