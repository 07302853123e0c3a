use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ZakaChainError;
use crate::state::MustahikAccount;

/// Derive a program address from a namespace tag and identity seeds.
///
/// The bump is the highest value that pushes the SHA-256 result off the
/// ed25519 curve, so no private key exists for the returned address and only
/// this program can sign for it.
pub fn derive_address(namespace: &[u8], identities: &[&[u8]], program_id: &Pubkey) -> (Pubkey, u8) {
    let mut seeds: Vec<&[u8]> = Vec::with_capacity(identities.len() + 1);
    seeds.push(namespace);
    seeds.extend_from_slice(identities);
    Pubkey::find_program_address(&seeds, program_id)
}

/// Singleton ledger state: ["state"]. On chain the seeds are checked by the
/// account constraints, so only tests derive it directly.
#[cfg(test)]
pub fn derive_state_address() -> (Pubkey, u8) {
    derive_address(STATE_SEED, &[], &crate::ID)
}

/// Beneficiary record: ["mustahik", mustahik]
pub fn derive_mustahik_address(mustahik: &Pubkey) -> (Pubkey, u8) {
    derive_address(MUSTAHIK_SEED, &[mustahik.as_ref()], &crate::ID)
}

/// Re-derive the record address for `mustahik` and compare it to the one the
/// caller supplied. Returns the canonical bump.
pub fn verify_mustahik_address(mustahik: &Pubkey, supplied: &Pubkey) -> Result<u8> {
    let (expected, bump) = derive_mustahik_address(mustahik);
    require_keys_eq!(*supplied, expected, ZakaChainError::InvalidMustahikAccount);
    Ok(bump)
}

/// Decode a mustahik record from raw account parts.
///
/// An account the program does not own, or one with no data, has never been
/// registered.
pub fn decode_mustahik(owner: &Pubkey, data: &[u8]) -> Result<MustahikAccount> {
    require!(
        *owner == crate::ID && !data.is_empty(),
        ZakaChainError::NotFound
    );
    let mut bytes: &[u8] = data;
    let account = MustahikAccount::try_deserialize(&mut bytes)
        .map_err(|_| error!(ZakaChainError::NotFound))?;
    require!(account.is_registered(), ZakaChainError::NotFound);
    Ok(account)
}

/// Load the mustahik record behind an unchecked account, verifying its address
pub fn load_mustahik(mustahik: &Pubkey, account_info: &AccountInfo) -> Result<MustahikAccount> {
    verify_mustahik_address(mustahik, account_info.key)?;
    let data = account_info.try_borrow_data()?;
    decode_mustahik(account_info.owner, &data[..])
}
