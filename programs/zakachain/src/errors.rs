use anchor_lang::prelude::*;

/// ZakaChain Error Codes
///
/// Every message carries the phrase clients match on, so keep them stable.
#[error_code]
pub enum ZakaChainError {
    #[msg("The contract has not been initialized")]
    NotInitialized,

    #[msg("The contract is already initialized")]
    AlreadyInitialized,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Invalid fee percentage")]
    InvalidFeePercentage,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Insufficient funds")]
    InsufficientFunds,

    #[msg("Invalid recipient")]
    InvalidRecipient,

    #[msg("Unique ID is too long")]
    UniqueIdTooLong,

    #[msg("Name is too long")]
    NameTooLong,

    #[msg("Description is too long")]
    DescriptionTooLong,

    #[msg("Mustahik not found")]
    NotFound,

    #[msg("Mustahik is already registered")]
    MustahikAlreadyRegistered,

    #[msg("Mustahik is not active")]
    MustahikInactive,

    #[msg("Maximum number of mustahiks reached")]
    MaxMustahiksReached,

    #[msg("Invalid mustahik account")]
    InvalidMustahikAccount,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid authority")]
    InvalidAuthority,

    #[msg("Math overflow")]
    MathOverflow,
}
