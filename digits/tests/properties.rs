//! Randomized checks against an independent arbitrary-precision reference.

use digits::{add, add_str, will_overflow, DecimalString};
use num_bigint::BigUint;
use proptest::prelude::*;

fn n(s: &str) -> DecimalString {
    s.parse().unwrap()
}

fn big(s: &str) -> BigUint {
    s.parse().unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Canonical decimals: no leading zeros unless the value is zero.
const CANONICAL: &str = "0|[1-9][0-9]{0,59}";

/// Any digit run, leading zeros included.
const WRITTEN: &str = "[0-9]{1,60}";

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn sum_matches_reference(a in WRITTEN, b in WRITTEN) {
        init_tracing();
        let sum = add(&n(&a), &n(&b));
        prop_assert_eq!(big(sum.as_str()), big(&a) + big(&b));
    }

    #[test]
    fn sum_matches_reference_for_asymmetric_widths(a in "[0-9]", b in "[1-9][0-9]{49}") {
        let sum = add(&n(&a), &n(&b));
        prop_assert_eq!(big(sum.as_str()), big(&a) + big(&b));
        prop_assert!(sum.len() == 50 || sum.len() == 51);
    }

    #[test]
    fn addition_commutes(a in WRITTEN, b in WRITTEN) {
        prop_assert_eq!(add(&n(&a), &n(&b)), add(&n(&b), &n(&a)));
    }

    #[test]
    fn zero_is_identity(a in WRITTEN) {
        let a = n(&a);
        prop_assert_eq!(add(&a, &n("0")), a.clone());
        prop_assert_eq!(add(&n("0"), &a).trim_leading_zeros(), a.trim_leading_zeros());
    }

    #[test]
    fn width_grows_exactly_when_pre_scan_overflows(a in WRITTEN, b in WRITTEN) {
        let (a, b) = (n(&a), n(&b));
        let widest = a.len().max(b.len());
        let sum = add(&a, &b);
        if will_overflow(&a, &b) {
            prop_assert_eq!(sum.len(), widest + 1);
        } else {
            prop_assert_eq!(sum.len(), widest);
        }
    }

    #[test]
    fn canonical_operands_give_canonical_sum(a in CANONICAL, b in CANONICAL) {
        prop_assert!(add(&n(&a), &n(&b)).is_canonical());
    }

    #[test]
    fn addition_associates(a in WRITTEN, b in WRITTEN, c in WRITTEN) {
        let (a, b, c) = (n(&a), n(&b), n(&c));
        prop_assert_eq!(
            (&(&a + &b) + &c).trim_leading_zeros(),
            (&a + &(&b + &c)).trim_leading_zeros()
        );
    }

    #[test]
    fn string_boundary_agrees_with_typed_addition(a in WRITTEN, b in WRITTEN) {
        prop_assert_eq!(add_str(&a, &b).unwrap(), add(&n(&a), &n(&b)).to_string());
    }

    #[test]
    fn machine_integers_agree_with_native_addition(a in any::<u64>(), b in any::<u64>()) {
        let sum = DecimalString::from(a) + DecimalString::from(b);
        prop_assert_eq!(sum.as_str(), (a as u128 + b as u128).to_string());
    }

    #[test]
    fn non_digit_input_is_rejected(a in "[0-9]{0,5}[^0-9][0-9]{0,5}") {
        prop_assert!(a.parse::<DecimalString>().is_err());
        prop_assert!(add_str(&a, "1").is_err());
        prop_assert!(add_str("1", &a).is_err());
    }
}

#[test]
fn parallel_additions_need_no_synchronization() {
    let handles: Vec<_> = (0..8u64)
        .map(|i| {
            std::thread::spawn(move || {
                let mut total = DecimalString::zero();
                for _ in 0..1000 {
                    total += DecimalString::from(i);
                }
                total
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), (i as u64 * 1000).to_string().as_str());
    }
}
