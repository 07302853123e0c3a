use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ZakaChainError;
use crate::helpers::{add_amount, validate_name, validate_unique_id};

/// Registered beneficiary (mustahik)
///
/// PDA Seeds: ["mustahik", mustahik_pubkey]
#[account]
#[derive(Default, Debug)]
pub struct MustahikAccount {
    /// The mustahik's wallet address
    pub address: Pubkey,

    /// External reference assigned by the amil (<= 32 bytes)
    pub unique_id: String,

    /// Display name (<= 64 bytes)
    pub name: String,

    /// Eligibility flag, set at registration
    pub is_active: bool,

    /// Unix timestamp of registration
    pub created_at: i64,

    /// Lifetime total distributed to this mustahik
    pub total_received: u64,

    /// PDA bump seed
    pub bump: u8,
}

/// Read-only projection returned by `get_mustahik_status`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MustahikStatus {
    pub address: Pubkey,
    pub unique_id: String,
    pub name: String,
    pub is_active: bool,
    pub created_at: i64,
    pub total_received: u64,
}

impl MustahikAccount {
    /// Account size calculation (strings reserved at full capacity):
    /// - address: 32 bytes
    /// - unique_id: 4 + 32 bytes
    /// - name: 4 + 64 bytes
    /// - is_active: 1 byte
    /// - created_at: 8 bytes
    /// - total_received: 8 bytes
    /// - bump: 1 byte
    /// Total: 154 bytes
    pub const LEN: usize = 32 + (4 + MAX_UNIQUE_ID_LEN) + (4 + MAX_NAME_LEN) + 1 + 8 + 8 + 1;

    /// A freshly allocated record deserializes with the default address
    pub fn is_registered(&self) -> bool {
        self.address != Pubkey::default()
    }

    /// Fill a newly allocated record. Fails if the address is already taken.
    pub fn register(
        &mut self,
        address: Pubkey,
        unique_id: String,
        name: String,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_registered(), ZakaChainError::MustahikAlreadyRegistered);
        require!(address != Pubkey::default(), ZakaChainError::InvalidMustahikAccount);
        validate_unique_id(&unique_id)?;
        validate_name(&name)?;

        self.address = address;
        self.unique_id = unique_id;
        self.name = name;
        self.is_active = true;
        self.created_at = now;
        self.total_received = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn assert_active(&self) -> Result<()> {
        require!(self.is_registered(), ZakaChainError::NotFound);
        require!(self.is_active, ZakaChainError::MustahikInactive);
        Ok(())
    }

    pub fn status(&self) -> MustahikStatus {
        MustahikStatus {
            address: self.address,
            unique_id: self.unique_id.clone(),
            name: self.name.clone(),
            is_active: self.is_active,
            created_at: self.created_at,
            total_received: self.total_received,
        }
    }

    pub(crate) fn next_total_received(&self, amount: u64) -> Result<u64> {
        add_amount(self.total_received, amount)
    }
}
