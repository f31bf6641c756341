//! Numeric folds over a list.
//!
//! Each function takes one list. Elements are coerced with
//! [`Value::to_number`], which is what lets `max(["4", "100"])` answer `100`.
//! No state survives between calls: every call folds from its identity.

use std::sync::LazyLock;

use crate::curry::Curried;
use crate::value::Value;

static SUM: LazyLock<Curried> = LazyLock::new(|| {
    Curried::unary("sum", |list| {
        let total = list
            .expect_list("sum")?
            .iter()
            .map(Value::to_number)
            .fold(0.0, |total, number| total + number);
        Ok(Value::from(total))
    })
});

static PRODUCT: LazyLock<Curried> = LazyLock::new(|| {
    Curried::unary("product", |list| {
        let total = list
            .expect_list("product")?
            .iter()
            .map(Value::to_number)
            .fold(1.0, |total, number| total * number);
        Ok(Value::from(total))
    })
});

static MAX: LazyLock<Curried> = LazyLock::new(|| {
    Curried::unary("max", |list| {
        Ok(Value::from(extreme(list.expect_list("max")?, f64::NEG_INFINITY, f64::max)))
    })
});

static MIN: LazyLock<Curried> = LazyLock::new(|| {
    Curried::unary("min", |list| {
        Ok(Value::from(extreme(list.expect_list("min")?, f64::INFINITY, f64::min)))
    })
});

/// Adds up a list of numbers; `0` for an empty list.
///
/// # Examples
///
/// ```rust
/// use currant::prelude::*;
///
/// # fn main() -> Result<(), CurryError> {
/// assert_eq!(call!(sum(), [1, 2, 3, 4])?, Value::from(10));
/// assert_eq!(call!(sum(), Value::List(vec![]))?, Value::from(0));
/// # Ok(())
/// # }
/// ```
pub fn sum() -> Curried {
    SUM.clone()
}

/// Multiplies a list of numbers; `1` for an empty list.
pub fn product() -> Curried {
    PRODUCT.clone()
}

/// Largest number in a list; `-Infinity` for an empty list.
///
/// Numeric strings count as numbers. Any element that is not a number makes
/// the result `NaN`.
///
/// # Examples
///
/// ```rust
/// use currant::prelude::*;
///
/// # fn main() -> Result<(), CurryError> {
/// assert_eq!(call!(max(), ["4", "1", "100", "10", "2"])?, Value::from(100));
/// assert_eq!(call!(max(), Value::List(vec![]))?, Value::from(f64::NEG_INFINITY));
/// # Ok(())
/// # }
/// ```
pub fn max() -> Curried {
    MAX.clone()
}

/// Smallest number in a list; `Infinity` for an empty list.
///
/// Coerces like [`max`].
pub fn min() -> Curried {
    MIN.clone()
}

fn extreme(elements: &[Value], identity: f64, pick: fn(f64, f64) -> f64) -> f64 {
    elements
        .iter()
        .map(Value::to_number)
        .try_fold(identity, |best, number| {
            (!number.is_nan()).then(|| pick(best, number))
        })
        .unwrap_or(f64::NAN)
}
