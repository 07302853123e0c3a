use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ZakaChainError;
use crate::helpers::*;
use crate::state::MustahikAccount;

/// Global ledger configuration and cumulative totals
///
/// Only one ZakaChainState account exists per program instance. Every
/// fund-moving instruction reads and mutates it, so each `apply_*` method
/// validates first and commits last: on error the record is left untouched.
///
/// PDA Seeds: ["state"]
#[account]
#[derive(Default, Debug)]
pub struct ZakaChainState {
    /// Administrator: configures the ledger, registers mustahik, moves funds
    pub amil: Pubkey,

    /// Contribution mint, fixed at initialization
    pub mint: Pubkey,

    /// Fee rate in 0.1% units (25 = 2.5%), capped at 125
    pub amil_fee_percentage: u8,

    /// Net zakat received by the vault (after the amil fee)
    pub total_zakat_collected: u64,

    /// Paid out to mustahik plus manual withdrawals; never decreases
    pub total_zakat_distributed: u64,

    /// Lifetime amil fee revenue
    pub total_amil_fees_collected: u64,

    /// All manual withdrawals, both variants
    pub withdrawal_count: u32,

    /// Manual withdrawals tagged with a reference ID only
    pub manual_withdrawal_count: u32,

    /// Timestamp of the latest manual withdrawal
    pub last_withdrawal_timestamp: i64,

    /// Legacy directory of registered mustahik (<= 100)
    pub mustahiks: Vec<Pubkey>,

    pub is_initialized: bool,

    /// PDA bump, also used to sign for the vault
    pub bump: u8,
}

impl ZakaChainState {
    /// Account size calculation:
    /// - amil: 32 bytes
    /// - mint: 32 bytes
    /// - amil_fee_percentage: 1 byte
    /// - 3 u64 totals: 24 bytes
    /// - 2 u32 counters: 8 bytes
    /// - last_withdrawal_timestamp: 8 bytes
    /// - mustahiks: 4 + 32 * 100 bytes
    /// - is_initialized + bump: 2 bytes
    /// Total: 3311 bytes
    pub const LEN: usize = 32 + 32 + 1 + 8 * 3 + 4 * 2 + 8 + (4 + 32 * MAX_MUSTAHIKS) + 1 + 1;

    // ──────────────────────────────────────────────────────
    // Guards
    // ──────────────────────────────────────────────────────

    pub fn assert_initialized(&self) -> Result<()> {
        require!(self.is_initialized, ZakaChainError::NotInitialized);
        Ok(())
    }

    pub fn assert_amil(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.amil, ZakaChainError::Unauthorized);
        Ok(())
    }

    /// Every token account the ledger touches must hold the pinned mint
    pub fn assert_mint(&self, mint: &Pubkey) -> Result<()> {
        require_keys_eq!(*mint, self.mint, ZakaChainError::InvalidTokenMint);
        Ok(())
    }

    /// Both checks every admin instruction starts with
    pub fn assert_authorized(&self, signer: &Pubkey) -> Result<()> {
        self.assert_initialized()?;
        self.assert_amil(signer)
    }

    // ──────────────────────────────────────────────────────
    // Lifecycle
    // ──────────────────────────────────────────────────────

    /// First write wins: a second call fails with AlreadyInitialized
    pub fn initialize(
        &mut self,
        amil: Pubkey,
        mint: Pubkey,
        amil_fee_percentage: u8,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized, ZakaChainError::AlreadyInitialized);
        require!(mint != Pubkey::default(), ZakaChainError::InvalidTokenMint);
        validate_fee_percentage(amil_fee_percentage)?;

        self.amil = amil;
        self.mint = mint;
        self.amil_fee_percentage = amil_fee_percentage;
        self.total_zakat_collected = 0;
        self.total_zakat_distributed = 0;
        self.total_amil_fees_collected = 0;
        self.withdrawal_count = 0;
        self.manual_withdrawal_count = 0;
        self.last_withdrawal_timestamp = 0;
        self.mustahiks = Vec::new();
        self.is_initialized = true;
        self.bump = bump;
        Ok(())
    }

    /// Returns the previous amil
    pub fn update_authority(&mut self, signer: &Pubkey, new_authority: Pubkey) -> Result<Pubkey> {
        self.assert_authorized(signer)?;
        require!(new_authority != Pubkey::default(), ZakaChainError::InvalidAuthority);

        let old = self.amil;
        self.amil = new_authority;
        Ok(old)
    }

    /// Returns the previous fee rate
    pub fn update_fee_percentage(&mut self, signer: &Pubkey, new_fee_percentage: u8) -> Result<u8> {
        self.assert_authorized(signer)?;
        validate_fee_percentage(new_fee_percentage)?;

        let old = self.amil_fee_percentage;
        self.amil_fee_percentage = new_fee_percentage;
        Ok(old)
    }

    // ──────────────────────────────────────────────────────
    // Fund flows
    // ──────────────────────────────────────────────────────

    /// Record a contribution of `amount` in `mint` from a payer holding
    /// `payer_balance`. The caller moves `net_amount` to the vault and
    /// `amil_fee` to the amil.
    pub fn apply_collection(
        &mut self,
        mint: &Pubkey,
        amount: u64,
        payer_balance: u64,
    ) -> Result<ContributionSplit> {
        self.assert_initialized()?;
        self.assert_mint(mint)?;
        validate_amount(amount)?;
        validate_balance(payer_balance, amount)?;

        let split = split_contribution(amount, self.amil_fee_percentage)?;
        let total_collected = add_amount(self.total_zakat_collected, split.net_amount)?;
        let total_fees = add_amount(self.total_amil_fees_collected, split.amil_fee)?;

        self.total_zakat_collected = total_collected;
        self.total_amil_fees_collected = total_fees;
        Ok(split)
    }

    /// Register a mustahik: fills the record and mirrors the address into the
    /// bounded directory.
    pub fn apply_registration(
        &mut self,
        signer: &Pubkey,
        record: &mut MustahikAccount,
        mustahik: Pubkey,
        unique_id: String,
        name: String,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        self.assert_authorized(signer)?;
        require!(!record.is_registered(), ZakaChainError::MustahikAlreadyRegistered);
        require!(
            !self.mustahiks.contains(&mustahik),
            ZakaChainError::MustahikAlreadyRegistered
        );
        require!(
            self.mustahiks.len() < MAX_MUSTAHIKS,
            ZakaChainError::MaxMustahiksReached
        );

        record.register(mustahik, unique_id, name, now, bump)?;
        self.mustahiks.push(mustahik);
        Ok(())
    }

    /// Record a payout of `amount` from a vault holding `vault_balance`
    pub fn apply_distribution(
        &mut self,
        signer: &Pubkey,
        record: &mut MustahikAccount,
        vault_balance: u64,
        amount: u64,
    ) -> Result<()> {
        self.assert_authorized(signer)?;
        validate_amount(amount)?;
        record.assert_active()?;
        validate_balance(vault_balance, amount)?;

        let total_distributed = add_amount(self.total_zakat_distributed, amount)?;
        let total_received = record.next_total_received(amount)?;

        self.total_zakat_distributed = total_distributed;
        record.total_received = total_received;
        Ok(())
    }

    /// Manual withdrawal tagged with an external reference.
    /// Counts towards both withdrawal counters.
    pub fn apply_manual_withdrawal(
        &mut self,
        signer: &Pubkey,
        recipient_owner: &Pubkey,
        vault_balance: u64,
        amount: u64,
        unique_id: &str,
        now: i64,
    ) -> Result<()> {
        validate_amount(amount)?;
        validate_unique_id(unique_id)?;
        self.assert_authorized(signer)?;
        validate_recipient(recipient_owner, &self.amil)?;
        validate_balance(vault_balance, amount)?;

        let total_distributed = add_amount(self.total_zakat_distributed, amount)?;
        let withdrawal_count = increment_count(self.withdrawal_count)?;
        let manual_withdrawal_count = increment_count(self.manual_withdrawal_count)?;

        self.total_zakat_distributed = total_distributed;
        self.withdrawal_count = withdrawal_count;
        self.manual_withdrawal_count = manual_withdrawal_count;
        self.last_withdrawal_timestamp = now;
        Ok(())
    }

    /// Manual withdrawal for off-chain distribution, tagged with free text.
    /// Leaves `manual_withdrawal_count` alone.
    pub fn apply_operational_withdrawal(
        &mut self,
        signer: &Pubkey,
        recipient_owner: &Pubkey,
        vault_balance: u64,
        amount: u64,
        description: &str,
        now: i64,
    ) -> Result<()> {
        validate_amount(amount)?;
        validate_description(description)?;
        self.assert_authorized(signer)?;
        validate_recipient(recipient_owner, &self.amil)?;
        validate_balance(vault_balance, amount)?;

        let total_distributed = add_amount(self.total_zakat_distributed, amount)?;
        let withdrawal_count = increment_count(self.withdrawal_count)?;

        self.total_zakat_distributed = total_distributed;
        self.withdrawal_count = withdrawal_count;
        self.last_withdrawal_timestamp = now;
        Ok(())
    }
}
