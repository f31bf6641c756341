//! Property-based tests for the curried arithmetic and aggregation functions.
//!
//! ## Right Currying
//! - `subtract(__, b)(a) == subtract(a, b)`.
//!
//! ## Reusability
//! - A partial application gives the same answer on every later call.
//!
//! ## Statelessness
//! - Aggregations give the same answer no matter what was computed before.

#![cfg(feature = "math")]

use currant::prelude::*;
use proptest::prelude::*;

proptest! {
    /// Right currying of a binary library function.
    #[test]
    fn prop_right_curried_subtract(left in -1_000_i32..1_000, right in -1_000_i32..1_000) {
        let deferred = call!(subtract(), __, right).unwrap();
        prop_assert_eq!(
            call!(deferred, left).unwrap(),
            call!(subtract(), left, right).unwrap()
        );
    }

    /// Partial applications are never mutated by later calls.
    #[test]
    fn prop_partial_application_reusable(first in any::<i32>(), seconds in prop::collection::vec(any::<i32>(), 1..8)) {
        let partial = call!(add(), first).unwrap();
        for second in seconds {
            prop_assert_eq!(
                call!(partial, second).unwrap(),
                Value::from(f64::from(first) + f64::from(second))
            );
        }
    }

    /// Statelessness: sum of a list does not depend on earlier calls.
    #[test]
    fn prop_sum_is_stateless(
        earlier in prop::collection::vec(-100_i32..100, 0..10),
        list in prop::collection::vec(-100_i32..100, 0..10),
    ) {
        let expected: i32 = list.iter().sum();
        let _ = call!(sum(), earlier.clone()).unwrap();
        prop_assert_eq!(call!(sum(), list).unwrap(), Value::from(expected));
    }

    /// max and min agree with the integer extremes, with infinite identities.
    #[test]
    fn prop_max_min_agree_with_iterator(list in prop::collection::vec(-1_000_i32..1_000, 0..20)) {
        let expected_max = list.iter().copied().max().map_or(f64::NEG_INFINITY, f64::from);
        let expected_min = list.iter().copied().min().map_or(f64::INFINITY, f64::from);
        prop_assert_eq!(call!(max(), list.clone()).unwrap(), Value::from(expected_max));
        prop_assert_eq!(call!(min(), list).unwrap(), Value::from(expected_min));
    }
}
