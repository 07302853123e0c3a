use anchor_lang::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// ADMIN EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted once when the ledger state is created
#[event]
pub struct ZakaChainInitialized {
    pub amil: Pubkey,
    pub mint: Pubkey,
    pub amil_fee_percentage: u8,
    pub timestamp: i64,
}

/// Emitted when the amil authority is handed over
#[event]
pub struct AuthorityUpdated {
    pub old_amil: Pubkey,
    pub new_amil: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct FeePercentageUpdated {
    pub old_fee_percentage: u8,
    pub new_fee_percentage: u8,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// FUND FLOW EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted on every contribution. `amount` is the net amount kept by the ledger.
#[event]
pub struct ZakatCollected {
    pub payer: Pubkey,
    pub amount: u64,
    pub amil_fee: u64,
    pub total_zakat_collected: u64,
    pub timestamp: i64,
}

#[event]
pub struct ZakatDistributed {
    pub mustahik: Pubkey,
    pub amount: u64,
    pub total_zakat_distributed: u64,
    pub timestamp: i64,
}

/// Manual withdrawal tagged with an external reference
#[event]
pub struct ZakatWithdrawnManual {
    pub amil: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub unique_id: String,
    pub withdrawal_count: u32,
    pub manual_withdrawal_count: u32,
    pub timestamp: i64,
}

/// Manual withdrawal for off-chain distribution, tagged with free text
#[event]
pub struct ManualDistributionWithdrawal {
    pub amil: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub description: String,
    pub withdrawal_count: u32,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// MUSTAHIK EVENTS
// ══════════════════════════════════════════════════════════════════════════════

#[event]
pub struct MustahikAdded {
    pub mustahik: Pubkey,
    pub unique_id: String,
    pub name: String,
    pub timestamp: i64,
}

#[event]
pub struct MustahikStatusQueried {
    pub mustahik: Pubkey,
    pub is_active: bool,
    pub total_received: u64,
}
