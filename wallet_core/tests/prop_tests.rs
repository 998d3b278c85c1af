use proptest::prelude::*;

use sweep_wallet_core::compute_send_amount;

proptest! {
    /// When an amount is returned it is positive and accounts for every deduction.
    #[test]
    fn send_amount_matches_arithmetic(
        balance in 0u64..=u64::MAX,
        fee in 0u64..1_000_000,
        rent in 0u64..10_000_000,
        buffer in 0u64..10_000_000,
    ) {
        let expected = balance as i128 - fee as i128 - rent as i128 - buffer as i128;
        match compute_send_amount(balance, fee, rent, buffer) {
            Some(amount) => {
                prop_assert!(amount > 0);
                prop_assert_eq!(amount as i128, expected);
            }
            None => prop_assert!(expected <= 0),
        }
    }
}
