use anchor_lang::prelude::*;

declare_id!("3EJSTPJYM3BaNBvL7haWnhXoNh5GvmsQfwL1QQ2am3GJ");

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod state;

mod formal_verification;

pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use events::*;
pub use helpers::cpi::{transfer_from_signer, transfer_from_vault};
pub use helpers::{math::*, pda::*, validation::*};
pub use state::*;

#[program]
pub mod zakachain {
    use super::*;

    // ══════════════════════════════════════════════════════════════════════════
    // ADMIN
    // ══════════════════════════════════════════════════════════════════════════

    /// Create the ledger state and make the caller its amil
    pub fn initialize(ctx: Context<Initialize>, amil_fee_percentage: u8) -> Result<()> {
        let state = &mut ctx.accounts.state;
        let clock = Clock::get()?;

        state.initialize(
            ctx.accounts.amil.key(),
            ctx.accounts.mint.key(),
            amil_fee_percentage,
            ctx.bumps.state,
        )?;

        msg!("ZakaChain initialized: amil={}, mint={}, fee={}/1000",
            state.amil, state.mint, amil_fee_percentage);

        emit!(ZakaChainInitialized {
            amil: state.amil,
            mint: state.mint,
            amil_fee_percentage,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn update_authority(ctx: Context<AdminControl>, new_authority: Pubkey) -> Result<()> {
        let state = &mut ctx.accounts.state;
        let old_amil = state.update_authority(&ctx.accounts.authority.key(), new_authority)?;

        emit!(AuthorityUpdated {
            old_amil,
            new_amil: new_authority,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    pub fn update_fee_percentage(ctx: Context<AdminControl>, new_fee_percentage: u8) -> Result<()> {
        let state = &mut ctx.accounts.state;
        let old_fee_percentage =
            state.update_fee_percentage(&ctx.accounts.authority.key(), new_fee_percentage)?;

        emit!(FeePercentageUpdated {
            old_fee_percentage,
            new_fee_percentage,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════════
    // FUND FLOWS
    // ══════════════════════════════════════════════════════════════════════════

    /// Accept a contribution: net amount to the vault, fee to the amil
    pub fn collect_zakat(ctx: Context<CollectZakat>, amount: u64) -> Result<()> {
        let clock = Clock::get()?;
        let payer_balance = ctx.accounts.payer_token_account.amount;

        let mint = ctx.accounts.mint.key();

        let split = ctx.accounts.state.apply_collection(&mint, amount, payer_balance)?;

        let token_program = ctx.accounts.token_program.to_account_info();
        let payer_token_account = ctx.accounts.payer_token_account.to_account_info();
        let payer = ctx.accounts.payer.to_account_info();

        transfer_from_signer(
            &token_program,
            &payer_token_account,
            &ctx.accounts.program_token_account.to_account_info(),
            &payer,
            split.net_amount,
        )?;
        transfer_from_signer(
            &token_program,
            &payer_token_account,
            &ctx.accounts.amil_token_account.to_account_info(),
            &payer,
            split.amil_fee,
        )?;

        let state = &ctx.accounts.state;
        let (whole, frac) = format_tokens(split.net_amount);
        msg!("Zakat collected: {}.{:06} ({} units), amil fee {} units",
            whole, frac, split.net_amount, split.amil_fee);

        emit!(ZakatCollected {
            payer: payer.key(),
            amount: split.net_amount,
            amil_fee: split.amil_fee,
            total_zakat_collected: state.total_zakat_collected,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Pay a registered, active mustahik out of the vault
    pub fn distribute_to_mustahik(ctx: Context<DistributeToMustahik>, amount: u64) -> Result<()> {
        let clock = Clock::get()?;
        let amil = ctx.accounts.amil.key();
        let vault_balance = ctx.accounts.program_token_account.amount;

        {
            let accounts = &mut *ctx.accounts;
            accounts
                .state
                .apply_distribution(&amil, &mut accounts.mustahik_account, vault_balance, amount)?;
        }

        let state = &ctx.accounts.state;
        transfer_from_vault(
            &ctx.accounts.token_program.to_account_info(),
            &ctx.accounts.program_token_account.to_account_info(),
            &ctx.accounts.mustahik_token_account.to_account_info(),
            &state.to_account_info(),
            state.bump,
            amount,
        )?;

        let (whole, frac) = format_tokens(amount);
        msg!("Distributed {}.{:06} to mustahik {}", whole, frac, ctx.accounts.mustahik.key());

        emit!(ZakatDistributed {
            mustahik: ctx.accounts.mustahik.key(),
            amount,
            total_zakat_distributed: state.total_zakat_distributed,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Move vault funds to an amil-owned account, tagged with an external reference
    pub fn withdraw_zakat_manual(
        ctx: Context<ManualWithdrawal>,
        amount: u64,
        unique_id: String,
    ) -> Result<()> {
        let clock = Clock::get()?;
        let amil = ctx.accounts.amil.key();
        let recipient_owner = ctx.accounts.recipient_token_account.owner;
        let vault_balance = ctx.accounts.program_token_account.amount;

        ctx.accounts.state.apply_manual_withdrawal(
            &amil,
            &recipient_owner,
            vault_balance,
            amount,
            &unique_id,
            clock.unix_timestamp,
        )?;

        let state = &ctx.accounts.state;
        transfer_from_vault(
            &ctx.accounts.token_program.to_account_info(),
            &ctx.accounts.program_token_account.to_account_info(),
            &ctx.accounts.recipient_token_account.to_account_info(),
            &state.to_account_info(),
            state.bump,
            amount,
        )?;

        msg!("Manual withdrawal #{} ({}): {} units", state.manual_withdrawal_count, unique_id, amount);

        emit!(ZakatWithdrawnManual {
            amil,
            recipient: ctx.accounts.recipient_token_account.key(),
            amount,
            unique_id,
            withdrawal_count: state.withdrawal_count,
            manual_withdrawal_count: state.manual_withdrawal_count,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Move vault funds to an amil-owned account for off-chain distribution
    pub fn withdraw_for_manual_distribution(
        ctx: Context<ManualWithdrawal>,
        amount: u64,
        description: String,
    ) -> Result<()> {
        let clock = Clock::get()?;
        let amil = ctx.accounts.amil.key();
        let recipient_owner = ctx.accounts.recipient_token_account.owner;
        let vault_balance = ctx.accounts.program_token_account.amount;

        ctx.accounts.state.apply_operational_withdrawal(
            &amil,
            &recipient_owner,
            vault_balance,
            amount,
            &description,
            clock.unix_timestamp,
        )?;

        let state = &ctx.accounts.state;
        transfer_from_vault(
            &ctx.accounts.token_program.to_account_info(),
            &ctx.accounts.program_token_account.to_account_info(),
            &ctx.accounts.recipient_token_account.to_account_info(),
            &state.to_account_info(),
            state.bump,
            amount,
        )?;

        msg!("Withdrawal #{} for manual distribution: {} units", state.withdrawal_count, amount);

        emit!(ManualDistributionWithdrawal {
            amil,
            recipient: ctx.accounts.recipient_token_account.key(),
            amount,
            description,
            withdrawal_count: state.withdrawal_count,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════════
    // MUSTAHIK REGISTRY
    // ══════════════════════════════════════════════════════════════════════════

    pub fn add_mustahik(ctx: Context<AddMustahik>, unique_id: String, name: String) -> Result<()> {
        let clock = Clock::get()?;
        let amil = ctx.accounts.amil.key();
        let mustahik = ctx.accounts.mustahik.key();
        let bump = ctx.bumps.mustahik_account;

        {
            let accounts = &mut *ctx.accounts;
            accounts.state.apply_registration(
                &amil,
                &mut accounts.mustahik_account,
                mustahik,
                unique_id.clone(),
                name.clone(),
                clock.unix_timestamp,
                bump,
            )?;
        }

        msg!("Mustahik registered: {} ({})", mustahik, unique_id);

        emit!(MustahikAdded {
            mustahik,
            unique_id,
            name,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Read-only lookup; the status is also returned as instruction return data
    pub fn get_mustahik_status(ctx: Context<GetMustahikStatus>) -> Result<MustahikStatus> {
        let record = load_mustahik(
            &ctx.accounts.mustahik.key(),
            &ctx.accounts.mustahik_account.to_account_info(),
        )?;
        let status = record.status();

        emit!(MustahikStatusQueried {
            mustahik: status.address,
            is_active: status.is_active,
            total_received: status.total_received,
        });

        Ok(status)
    }
}
