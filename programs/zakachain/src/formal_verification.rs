// ============================================================================
// LEDGER INVARIANTS & PROPERTY-BASED TESTS
// ============================================================================
//
// Run with: cargo test --lib formal_verification
//
// This module implements:
// 1. Accounting invariants over the fee arithmetic
// 2. Security properties (authorization, recipient restriction, atomicity)
// 3. Fuzzing harnesses over generated operation sequences
// 4. A state machine replay checked against a shadow model
// ============================================================================

#[cfg(test)]
mod formal_tests {
    use anchor_lang::prelude::*;
    use crate::constants::*;
    use crate::helpers::math::*;
    use crate::helpers::pda::*;
    use crate::state::{MustahikAccount, ZakaChainState};
    use crate::ZakaChainError;

    const MINT: Pubkey = Pubkey::new_from_array([7; 32]);

    fn is_error(result: Result<()>, expected: ZakaChainError) -> bool {
        match result {
            Err(anchor_lang::error::Error::AnchorError(e)) => e.error_code_number == u32::from(expected),
            _ => false,
        }
    }

    fn snapshot(state: &ZakaChainState) -> Vec<u8> {
        let mut data = Vec::new();
        state.try_serialize(&mut data).unwrap();
        data
    }

    /// Deterministic xorshift generator so failures reproduce
    struct Rng(u64);

    impl Rng {
        fn next_u64(&mut self) -> u64 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            self.0 = x;
            x
        }

        fn below(&mut self, bound: u64) -> u64 {
            self.next_u64() % bound
        }
    }

    // ========================================================================
    // ACCOUNTING INVARIANTS
    // ========================================================================

    mod invariants {
        use super::*;

        /// net + fee == amount for every valid rate
        #[test]
        fn inv_split_conserves_amount() {
            let amounts = [
                1u64, 7, 39, 40, 999, 1_000, 1_001, 975_000, 1_000_000,
                123_456_789, u64::MAX / 1000, u64::MAX / 2, u64::MAX,
            ];
            for rate in 0..=MAX_FEE_PERCENTAGE {
                for &amount in amounts.iter() {
                    let split = split_contribution(amount, rate).unwrap();
                    assert_eq!(
                        split.net_amount as u128 + split.amil_fee as u128,
                        amount as u128,
                        "split leaks value: amount={}, rate={}", amount, rate
                    );
                }
            }
        }

        /// fee == floor(amount * rate / 1000)
        #[test]
        fn inv_fee_is_floor() {
            for rate in 0..=MAX_FEE_PERCENTAGE {
                for amount in (0u64..5_000).step_by(37) {
                    let fee = calculate_amil_fee(amount, rate).unwrap();
                    let exact = amount as u128 * rate as u128;
                    assert!(fee as u128 * 1000 <= exact);
                    assert!((fee as u128 + 1) * 1000 > exact);
                }
            }
        }

        /// Fee never exceeds 12.5% of the contribution
        #[test]
        fn inv_fee_bounded_by_cap() {
            for rate in 0..=MAX_FEE_PERCENTAGE {
                for amount in [1u64, 8, 1_000, 1_000_000, u64::MAX] {
                    let fee = calculate_amil_fee(amount, rate).unwrap();
                    assert!(fee as u128 * 8 <= amount as u128);
                }
            }
        }

        /// Higher rate never yields a smaller fee
        #[test]
        fn inv_fee_monotonic_in_rate() {
            let amount = 987_654_321u64;
            let mut previous = 0u64;
            for rate in 0..=MAX_FEE_PERCENTAGE {
                let fee = calculate_amil_fee(amount, rate).unwrap();
                assert!(fee >= previous);
                previous = fee;
            }
        }

        /// Every rate above the cap is rejected, at init and on update
        #[test]
        fn inv_rates_above_cap_rejected() {
            let amil = Pubkey::new_unique();
            let mut live = ZakaChainState::default();
            live.initialize(amil, MINT, 25, 255).unwrap();

            for rate in (MAX_FEE_PERCENTAGE + 1)..=u8::MAX {
                let mut fresh = ZakaChainState::default();
                assert!(is_error(fresh.initialize(amil, MINT, rate, 255), ZakaChainError::InvalidFeePercentage));
                assert!(matches!(
                    live.update_fee_percentage(&amil, rate),
                    Err(anchor_lang::error::Error::AnchorError(_))
                ));
            }
            assert_eq!(live.amil_fee_percentage, 25);
        }
    }

    // ========================================================================
    // SECURITY PROPERTIES
    // ========================================================================

    mod security {
        use super::*;

        /// Only the current amil can touch admin operations or vault funds
        #[test]
        fn sec_only_amil_moves_funds() {
            let amil = Pubkey::new_unique();
            let mut state = ZakaChainState::default();
            state.initialize(amil, MINT, 25, 255).unwrap();

            let mut record = MustahikAccount::default();
            state
                .apply_registration(&amil, &mut record, Pubkey::new_unique(), "A".into(), "B".into(), 0, 1)
                .unwrap();

            for _ in 0..20 {
                let intruder = Pubkey::new_unique();
                assert!(is_error(
                    state.apply_distribution(&intruder, &mut record, u64::MAX, 1),
                    ZakaChainError::Unauthorized
                ));
                assert!(is_error(
                    state.apply_manual_withdrawal(&intruder, &intruder, u64::MAX, 1, "R", 0),
                    ZakaChainError::Unauthorized
                ));
                assert!(is_error(
                    state.apply_operational_withdrawal(&intruder, &amil, u64::MAX, 1, "D", 0),
                    ZakaChainError::Unauthorized
                ));
            }
            assert_eq!(state.total_zakat_distributed, 0);
            assert_eq!(state.withdrawal_count, 0);
        }

        /// Vault PDA and every mustahik PDA differ from the amil, so they can
        /// never be valid manual withdrawal recipients
        #[test]
        fn sec_program_addresses_never_recipients() {
            let amil = Pubkey::new_unique();
            let mut state = ZakaChainState::default();
            state.initialize(amil, MINT, 25, 255).unwrap();

            let (state_pda, _) = derive_state_address();
            assert!(is_error(
                state.apply_manual_withdrawal(&amil, &state_pda, 1_000, 1, "R", 0),
                ZakaChainError::InvalidRecipient
            ));
            for _ in 0..10 {
                let (mustahik_pda, _) = derive_mustahik_address(&Pubkey::new_unique());
                assert!(is_error(
                    state.apply_operational_withdrawal(&amil, &mustahik_pda, 1_000, 1, "D", 0),
                    ZakaChainError::InvalidRecipient
                ));
            }
        }

        /// Address derivation is deterministic and identity-separated
        #[test]
        fn sec_address_determinism() {
            let mut seen = std::collections::HashSet::new();
            for _ in 0..32 {
                let mustahik = Pubkey::new_unique();
                let first = derive_mustahik_address(&mustahik);
                assert_eq!(first, derive_mustahik_address(&mustahik));
                assert!(seen.insert(first.0), "address collision");
            }
            assert!(!seen.contains(&derive_state_address().0));
        }
    }

    // ========================================================================
    // FUZZING TARGETS
    // ========================================================================

    mod fuzzing {
        use super::*;

        /// Random contributions: totals equal the sum of splits
        #[test]
        fn fuzz_collection_totals() {
            let mut rng = Rng(0x5eed_1234_abcd_0001);
            for _ in 0..50 {
                let rate = rng.below(MAX_FEE_PERCENTAGE as u64 + 1) as u8;
                let mut state = ZakaChainState::default();
                state.initialize(Pubkey::new_unique(), MINT, rate, 255).unwrap();

                let mut gross = 0u128;
                for _ in 0..40 {
                    let amount = rng.below(10_000_000_000) + 1;
                    state.apply_collection(&MINT, amount, amount).unwrap();
                    gross += amount as u128;
                }
                assert_eq!(
                    state.total_zakat_collected as u128 + state.total_amil_fees_collected as u128,
                    gross
                );
            }
        }

        /// Any failing operation leaves the record byte-for-byte unchanged
        #[test]
        fn fuzz_failures_are_atomic() {
            let mut rng = Rng(0x0bad_cafe_f00d_0002);
            let amil = Pubkey::new_unique();
            let mut state = ZakaChainState::default();
            state.initialize(amil, MINT, 25, 255).unwrap();
            state.apply_collection(&MINT, 1_000_000, 1_000_000).unwrap();

            for _ in 0..500 {
                let before = snapshot(&state);
                let balance = rng.below(1_000);
                let amount = balance + 1 + rng.below(1_000);

                let result = match rng.below(3) {
                    0 => state.apply_manual_withdrawal(&amil, &amil, balance, amount, "R", 1),
                    1 => state.apply_operational_withdrawal(&amil, &amil, balance, amount, "D", 1),
                    _ => state.apply_collection(&MINT, amount, balance).map(|_| ()),
                };
                assert!(is_error(result, ZakaChainError::InsufficientFunds));
                assert_eq!(snapshot(&state), before);
            }
        }

        /// Random string lengths around each bound
        #[test]
        fn fuzz_string_bounds() {
            let amil = Pubkey::new_unique();
            let mut state = ZakaChainState::default();
            state.initialize(amil, MINT, 25, 255).unwrap();

            for len in 0..=MAX_UNIQUE_ID_LEN + 8 {
                let id = "x".repeat(len);
                let result = state.apply_manual_withdrawal(&amil, &amil, u64::MAX, 1, &id, 0);
                assert_eq!(result.is_ok(), len <= MAX_UNIQUE_ID_LEN, "len={}", len);
            }
            for len in (0..=MAX_DESCRIPTION_LEN + 8).step_by(3) {
                let description = "y".repeat(len);
                let result = state.apply_operational_withdrawal(&amil, &amil, u64::MAX, 1, &description, 0);
                assert_eq!(result.is_ok(), len <= MAX_DESCRIPTION_LEN, "len={}", len);
            }
        }
    }

    // ========================================================================
    // STATE MACHINE
    // ========================================================================

    mod state_machine {
        use super::*;

        /// Shadow model tracking what the ledger should hold
        struct Model {
            vault: u64,
            collected: u64,
            fees: u64,
            distributed: u64,
            withdrawals: u32,
            manual_withdrawals: u32,
        }

        /// Replay random operation sequences and compare with the model after
        /// each step
        #[test]
        fn test_state_machine_replay() {
            let mut rng = Rng(0x1dea_5eed_0000_0003);
            let amil = Pubkey::new_unique();
            let mut state = ZakaChainState::default();
            state.initialize(amil, MINT, 25, 255).unwrap();

            let mut records: Vec<MustahikAccount> = Vec::new();
            let mut model = Model { vault: 0, collected: 0, fees: 0, distributed: 0, withdrawals: 0, manual_withdrawals: 0 };

            for step in 0..2_000 {
                let previous_distributed = state.total_zakat_distributed;
                let amount = rng.below(50_000) + 1;

                match rng.below(5) {
                    0 => {
                        let split = state.apply_collection(&MINT, amount, amount).unwrap();
                        model.vault += split.net_amount;
                        model.collected += split.net_amount;
                        model.fees += split.amil_fee;
                    }
                    1 if records.len() < MAX_MUSTAHIKS => {
                        let mut record = MustahikAccount::default();
                        state
                            .apply_registration(&amil, &mut record, Pubkey::new_unique(), format!("M-{}", step), "N".into(), step, 1)
                            .unwrap();
                        records.push(record);
                    }
                    2 if !records.is_empty() => {
                        let index = rng.below(records.len() as u64) as usize;
                        let result = state.apply_distribution(&amil, &mut records[index], model.vault, amount);
                        if amount <= model.vault {
                            result.unwrap();
                            model.vault -= amount;
                            model.distributed += amount;
                        } else {
                            assert!(is_error(result, ZakaChainError::InsufficientFunds));
                        }
                    }
                    3 => {
                        let result = state.apply_manual_withdrawal(&amil, &amil, model.vault, amount, "REF", step);
                        if amount <= model.vault {
                            result.unwrap();
                            model.vault -= amount;
                            model.distributed += amount;
                            model.withdrawals += 1;
                            model.manual_withdrawals += 1;
                        } else {
                            assert!(is_error(result, ZakaChainError::InsufficientFunds));
                        }
                    }
                    _ => {
                        let result = state.apply_operational_withdrawal(&amil, &amil, model.vault, amount, "OPS", step);
                        if amount <= model.vault {
                            result.unwrap();
                            model.vault -= amount;
                            model.distributed += amount;
                            model.withdrawals += 1;
                        } else {
                            assert!(is_error(result, ZakaChainError::InsufficientFunds));
                        }
                    }
                }

                assert!(state.total_zakat_distributed >= previous_distributed, "distributed total decreased");
                assert!(state.manual_withdrawal_count <= state.withdrawal_count);
                assert!(state.mustahiks.len() <= MAX_MUSTAHIKS);
                assert_eq!(state.total_zakat_collected, model.collected);
                assert_eq!(state.total_amil_fees_collected, model.fees);
                assert_eq!(state.total_zakat_distributed, model.distributed);
                assert_eq!(state.withdrawal_count, model.withdrawals);
                assert_eq!(state.manual_withdrawal_count, model.manual_withdrawals);
                assert_eq!(model.vault, model.collected - model.distributed);
            }

            let paid_to_mustahik: u64 = records.iter().map(|r| r.total_received).sum();
            assert!(paid_to_mustahik <= state.total_zakat_distributed);
            assert_eq!(state.mustahiks.len(), records.len());
        }
    }
}
