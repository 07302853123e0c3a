use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};
use crate::constants::*;

/// Transfer tokens out of an account owned by a signing wallet (payer side).
/// A zero amount (fee rounded down to nothing) issues no CPI.
pub fn transfer_from_signer<'info>(
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    token::transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}

/// Transfer tokens out of the ledger vault.
///
/// The vault's authority is the state PDA; the seeds are assembled here and
/// nowhere else, so no other code path can move vault funds.
#[inline(never)]
pub fn transfer_from_vault<'info>(
    token_program: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    state: &AccountInfo<'info>,
    state_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let bump = [state_bump];
    let seeds: &[&[u8]] = &[STATE_SEED, &bump];

    token::transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: vault.clone(),
                to: to.clone(),
                authority: state.clone(),
            },
            &[seeds],
        ),
        amount,
    )
}
