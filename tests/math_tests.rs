//! Tests for the curried arithmetic and numeric aggregation functions.

#![cfg(feature = "math")]

use currant::prelude::*;
use rstest::rstest;

fn number(value: f64) -> Value {
    Value::from(value)
}

// =============================================================================
// add / multiply
// =============================================================================

mod add_and_multiply {
    use super::*;

    #[rstest]
    fn test_add_two_numbers() {
        assert_eq!(call!(add(), 3, 7).unwrap(), number(10.0));
    }

    #[rstest]
    fn test_add_is_curried() {
        let increment = call!(add(), 1).unwrap();
        assert_eq!(call!(increment, 42).unwrap(), number(43.0));
    }

    #[rstest]
    fn test_multiply_two_numbers() {
        assert_eq!(call!(multiply(), 6, 7).unwrap(), number(42.0));
    }

    #[rstest]
    fn test_multiply_is_curried() {
        let double = call!(multiply(), 2).unwrap();
        assert_eq!(call!(double, 15).unwrap(), number(30.0));
    }
}

// =============================================================================
// subtract / divide
// =============================================================================

mod subtract_and_divide {
    use super::*;

    #[rstest]
    fn test_subtract_two_numbers() {
        assert_eq!(call!(subtract(), 22, 7).unwrap(), number(15.0));
    }

    #[rstest]
    fn test_subtract_is_curried() {
        let nines_complement = call!(subtract(), 9).unwrap();
        assert_eq!(call!(nines_complement, 6).unwrap(), number(3.0));
    }

    #[rstest]
    fn test_subtract_right_curried_with_placeholder() {
        let minus_five = call!(subtract(), __, 5).unwrap();
        assert_eq!(call!(minus_five, 17).unwrap(), number(12.0));
    }

    #[rstest]
    fn test_divide_two_numbers() {
        assert_eq!(call!(divide(), 28, 7).unwrap(), number(4.0));
    }

    #[rstest]
    fn test_divide_is_curried() {
        let into_twenty_eight = call!(divide(), 28).unwrap();
        assert_eq!(call!(into_twenty_eight, 7).unwrap(), number(4.0));
    }

    #[rstest]
    fn test_divide_right_curried_with_placeholder() {
        let half = call!(divide(), __, 2).unwrap();
        assert_eq!(call!(half, 40).unwrap(), number(20.0));
    }
}

// =============================================================================
// modulo
// =============================================================================

mod modulo_tests {
    use super::*;

    #[rstest]
    #[case(100, 2, 0.0)]
    #[case(100, 3, 1.0)]
    #[case(100, 17, 15.0)]
    fn test_modulo_remainder(#[case] dividend: i32, #[case] divisor: i32, #[case] expected: f64) {
        assert_eq!(call!(modulo(), dividend, divisor).unwrap(), number(expected));
    }

    #[rstest]
    fn test_modulo_is_curried() {
        let hundred_mod = call!(modulo(), 100).unwrap();
        assert!(hundred_mod.is_function());
        assert_eq!(call!(hundred_mod, 2).unwrap(), number(0.0));
        assert_eq!(call!(hundred_mod, 3).unwrap(), number(1.0));
        assert_eq!(call!(hundred_mod, 17).unwrap(), number(15.0));
    }

    #[rstest]
    fn test_modulo_right_curried_with_placeholder() {
        let is_odd = call!(modulo(), __, 2).unwrap();
        assert!(is_odd.is_function());
        assert_eq!(call!(is_odd, 3).unwrap(), number(1.0));
        assert_eq!(call!(is_odd, 198).unwrap(), number(0.0));

        let mod_five = call!(modulo(), __, 5).unwrap();
        assert_eq!(call!(mod_five, 12).unwrap(), number(2.0));
        assert_eq!(call!(mod_five, 8).unwrap(), number(3.0));
    }

    #[rstest]
    fn test_modulo_sign_follows_dividend() {
        assert_eq!(call!(modulo(), -5, 4).unwrap(), number(-1.0));
    }
}

// =============================================================================
// math_mod
// =============================================================================

mod math_mod_tests {
    use super::*;

    #[rstest]
    #[case(Value::from("s"), Value::from(3))]
    #[case(Value::from(3), Value::from("s"))]
    #[case(Value::from(12.2), Value::from(3))]
    #[case(Value::from(3), Value::from(12.2))]
    fn test_math_mod_requires_integers(#[case] dividend: Value, #[case] divisor: Value) {
        let result = call!(math_mod(), &dividend, &divisor).unwrap();
        assert!(result.is_nan());
        // NaN is never equal to itself
        assert_ne!(result, call!(math_mod(), dividend, divisor).unwrap());
    }

    #[rstest]
    fn test_math_mod_differs_from_modulo() {
        assert_ne!(
            call!(math_mod(), -17, 5).unwrap(),
            call!(modulo(), -17, 5).unwrap()
        );
        assert_ne!(
            call!(math_mod(), 17.2, 5).unwrap(),
            call!(modulo(), 17.2, 5).unwrap()
        );
        assert_ne!(
            call!(math_mod(), 17, -5).unwrap(),
            call!(modulo(), 17, -5).unwrap()
        );
    }

    #[rstest]
    fn test_math_mod_true_modulo() {
        assert_eq!(call!(math_mod(), -17, 5).unwrap(), number(3.0));
        assert!(call!(math_mod(), 17, -5).unwrap().is_nan());
        assert!(call!(math_mod(), 17, 0).unwrap().is_nan());
        assert!(call!(math_mod(), 17.2, 5).unwrap().is_nan());
        assert!(call!(math_mod(), 17, 5.5).unwrap().is_nan());
    }

    #[rstest]
    fn test_math_mod_is_curried() {
        let twenty_nine_mod = call!(math_mod(), 29).unwrap();
        assert_eq!(call!(twenty_nine_mod, 6).unwrap(), number(5.0));
    }

    #[rstest]
    fn test_math_mod_right_curried_with_placeholder() {
        let mod_five = call!(math_mod(), __, 5).unwrap();
        assert_eq!(call!(mod_five, -12).unwrap(), number(3.0));
        assert_eq!(call!(mod_five, 8).unwrap(), number(3.0));
    }
}

// =============================================================================
// Bare calls
// =============================================================================

#[rstest]
#[case(add())]
#[case(subtract())]
#[case(multiply())]
#[case(divide())]
#[case(modulo())]
#[case(math_mod())]
fn test_binary_functions_reject_bare_call(#[case] function: Curried) {
    let error = call!(function).unwrap_err();
    assert_eq!(
        error,
        CurryError::MissingArguments {
            function: function.name().to_string(),
            arity: 2,
        }
    );
}

#[rstest]
#[case(sum())]
#[case(product())]
#[case(max())]
#[case(min())]
fn test_aggregations_reject_bare_call(#[case] function: Curried) {
    assert!(matches!(
        call!(function),
        Err(CurryError::MissingArguments { arity: 1, .. })
    ));
}

// =============================================================================
// sum / product
// =============================================================================

mod sum_and_product {
    use super::*;

    #[rstest]
    fn test_sum_adds_list() {
        assert_eq!(call!(sum(), [1, 2, 3, 4]).unwrap(), number(10.0));
    }

    #[rstest]
    fn test_sum_does_not_keep_accumulator() {
        assert_eq!(call!(sum(), [1, 2, 3, 4]).unwrap(), number(10.0));
        assert_eq!(call!(sum(), [1]).unwrap(), number(1.0));
        assert_eq!(call!(sum(), [5, 5, 5, 5, 5]).unwrap(), number(25.0));
    }

    #[rstest]
    fn test_empty_list_identities() {
        assert_eq!(call!(sum(), Value::List(vec![])).unwrap(), number(0.0));
        assert_eq!(call!(product(), Value::List(vec![])).unwrap(), number(1.0));
    }

    #[rstest]
    fn test_product_multiplies_list() {
        assert_eq!(call!(product(), [1, 2, 3, 4]).unwrap(), number(24.0));
    }
}

// =============================================================================
// max / min
// =============================================================================

mod max_and_min {
    use super::*;

    fn mixed() -> Value {
        Value::from([
            Value::from(7),
            Value::from("22"),
            Value::from(11),
            Value::from(34),
            Value::from(17),
            Value::from("52"),
            Value::from(26),
            Value::from(13),
            Value::from(40),
            Value::from(20),
            Value::from("10"),
            Value::from(5),
            Value::from(16),
            Value::from(8),
            Value::from(4),
            Value::from("2"),
            Value::from("1"),
        ])
    }

    #[rstest]
    fn test_max_of_list() {
        assert_eq!(
            call!(max(), [2, 1, 2, 8, 6, 7, 5, 3, 0, 9]).unwrap(),
            number(9.0)
        );
        assert_eq!(
            call!(max(), [7, 22, 11, 34, 17, 52, 26, 13, 40, 20, 10, 5, 16, 8, 4, 2, 1]).unwrap(),
            number(52.0)
        );
    }

    #[rstest]
    fn test_max_accepts_negatives_decimals_and_strings() {
        assert_eq!(
            call!(max(), [-6.0, -2.0, -4.3, -1.1, -5.0]).unwrap(),
            number(-1.1)
        );
        assert_eq!(call!(max(), mixed()).unwrap(), number(52.0));
    }

    #[rstest]
    #[case([6, 2, 1, 3])]
    #[case([3, 6, 2, 1])]
    #[case([3, 1, 6, 2])]
    #[case([3, 1, 2, 6])]
    fn test_max_in_any_position(#[case] list: [i32; 4]) {
        assert_eq!(call!(max(), list).unwrap(), number(6.0));
    }

    #[rstest]
    fn test_max_returns_number() {
        assert_eq!(
            call!(max(), ["4", "1", "100", "10", "2"]).unwrap(),
            number(100.0)
        );
    }

    #[rstest]
    fn test_min_of_list() {
        assert_eq!(
            call!(min(), [2, 1, 2, 8, 6, 7, 5, 3, 0, 9]).unwrap(),
            number(0.0)
        );
        assert_eq!(
            call!(min(), [7, 22, 11, 34, 17, 52, 26, 13, 40, 20, 10, 5, 16, 8, 4, 2, 1]).unwrap(),
            number(1.0)
        );
    }

    #[rstest]
    fn test_min_accepts_negatives_decimals_and_strings() {
        assert_eq!(
            call!(min(), [-6.0, -2.0, -4.3, -1.1, -5.0]).unwrap(),
            number(-6.0)
        );
        assert_eq!(call!(min(), mixed()).unwrap(), number(1.0));
    }

    #[rstest]
    #[case([0, 2, 1, 3])]
    #[case([3, 0, 2, 1])]
    #[case([3, 1, 0, 2])]
    #[case([3, 1, 2, 0])]
    fn test_min_in_any_position(#[case] list: [i32; 4]) {
        assert_eq!(call!(min(), list).unwrap(), number(0.0));
    }

    #[rstest]
    fn test_min_returns_number() {
        assert_eq!(
            call!(min(), ["4", "1", "100", "10", "2"]).unwrap(),
            number(1.0)
        );
    }

    #[rstest]
    fn test_empty_list_is_infinite_and_stable() {
        for _ in 0..3 {
            assert_eq!(
                call!(max(), Value::List(vec![])).unwrap(),
                number(f64::NEG_INFINITY)
            );
            assert_eq!(
                call!(min(), Value::List(vec![])).unwrap(),
                number(f64::INFINITY)
            );
        }
    }
}
