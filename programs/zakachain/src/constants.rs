// ══════════════════════════════════════════════════════════════════════════════
// PDA SEEDS
// ══════════════════════════════════════════════════════════════════════════════

/// Singleton ledger state: ["state"]
pub const STATE_SEED: &[u8] = b"state";

/// Per-beneficiary record: ["mustahik", mustahik_pubkey]
pub const MUSTAHIK_SEED: &[u8] = b"mustahik";

// ══════════════════════════════════════════════════════════════════════════════
// FEE CONFIGURATION
// ══════════════════════════════════════════════════════════════════════════════

/// Fee rate unit is 0.1%, so the denominator is 1000 (25 = 2.5%)
pub const FEE_DENOMINATOR: u128 = 1000;

/// Maximum amil fee: 125 = 12.5%
pub const MAX_FEE_PERCENTAGE: u8 = 125;

// ══════════════════════════════════════════════════════════════════════════════
// STORAGE BOUNDS
// ══════════════════════════════════════════════════════════════════════════════

/// Capacity of the legacy mustahik directory kept on the state account
pub const MAX_MUSTAHIKS: usize = 100;

/// Max bytes for a mustahik reference or a withdrawal reference
pub const MAX_UNIQUE_ID_LEN: usize = 32;

/// Max bytes for a mustahik display name
pub const MAX_NAME_LEN: usize = 64;

/// Max bytes for a manual distribution description
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Anchor account discriminator
pub const DISCRIMINATOR_LEN: usize = 8;

// ══════════════════════════════════════════════════════════════════════════════
// DISPLAY
// ══════════════════════════════════════════════════════════════════════════════

/// Contribution mints are expected to carry 6 decimals (USDC)
pub const TOKEN_DECIMALS_DIVISOR: u64 = 1_000_000;
