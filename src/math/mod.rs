//! Curried arithmetic.
//!
//! Every function here is a [`Curried`] value: call it with all of its
//! arguments, with some of them, or with [`__`](crate::curry::__) in the
//! positions to fill later. Operands go through
//! [`Value::to_number`] first and the arithmetic itself is plain IEEE-754
//! double arithmetic, `NaN` and infinities included.
//!
//! | function            | result                                       |
//! |---------------------|----------------------------------------------|
//! | [`add`]`(a, b)`      | `a + b`                                      |
//! | [`subtract`]`(a, b)` | `a - b`                                      |
//! | [`multiply`]`(a, b)` | `a * b`                                      |
//! | [`divide`]`(a, b)`   | `a / b`                                      |
//! | [`modulo`]`(a, b)`   | `a % b`, sign of the dividend                |
//! | [`math_mod`]`(m, p)` | non-negative remainder, or `NaN`             |
//!
//! The numeric aggregations ([`sum`], [`product`], [`max`], [`min`]) live in
//! the `aggregate` submodule and are re-exported here.
//!
//! # Examples
//!
//! ```rust
//! use currant::prelude::*;
//!
//! # fn main() -> Result<(), CurryError> {
//! let double = call!(multiply(), 2)?;
//! assert_eq!(call!(double, 15)?, Value::from(30));
//!
//! let is_odd = call!(modulo(), __, 2)?;
//! assert_eq!(call!(is_odd, 3)?, Value::from(1));
//! assert_eq!(call!(is_odd, 198)?, Value::from(0));
//! # Ok(())
//! # }
//! ```

mod aggregate;

use std::sync::LazyLock;

use crate::curry::Curried;
use crate::value::Value;

pub use aggregate::{max, min, product, sum};

static ADD: LazyLock<Curried> = LazyLock::new(|| {
    Curried::binary("add", |augend, addend| {
        Ok(Value::from(augend.to_number() + addend.to_number()))
    })
});

static SUBTRACT: LazyLock<Curried> = LazyLock::new(|| {
    Curried::binary("subtract", |minuend, subtrahend| {
        Ok(Value::from(minuend.to_number() - subtrahend.to_number()))
    })
});

static MULTIPLY: LazyLock<Curried> = LazyLock::new(|| {
    Curried::binary("multiply", |multiplicand, multiplier| {
        Ok(Value::from(multiplicand.to_number() * multiplier.to_number()))
    })
});

static DIVIDE: LazyLock<Curried> = LazyLock::new(|| {
    Curried::binary("divide", |dividend, divisor| {
        Ok(Value::from(dividend.to_number() / divisor.to_number()))
    })
});

static MODULO: LazyLock<Curried> = LazyLock::new(|| {
    Curried::binary("modulo", |dividend, divisor| {
        Ok(Value::from(dividend.to_number() % divisor.to_number()))
    })
});

static MATH_MOD: LazyLock<Curried> = LazyLock::new(|| {
    Curried::binary("math_mod", |dividend, divisor| {
        Ok(Value::from(true_modulo(
            dividend.to_number(),
            divisor.to_number(),
        )))
    })
});

/// Adds two numbers.
///
/// # Examples
///
/// ```rust
/// use currant::prelude::*;
///
/// # fn main() -> Result<(), CurryError> {
/// assert_eq!(call!(add(), 3, 7)?, Value::from(10));
/// # Ok(())
/// # }
/// ```
pub fn add() -> Curried {
    ADD.clone()
}

/// Subtracts the second number from the first.
///
/// # Examples
///
/// ```rust
/// use currant::prelude::*;
///
/// # fn main() -> Result<(), CurryError> {
/// let minus_five = call!(subtract(), __, 5)?;
/// assert_eq!(call!(minus_five, 17)?, Value::from(12));
/// # Ok(())
/// # }
/// ```
pub fn subtract() -> Curried {
    SUBTRACT.clone()
}

/// Multiplies two numbers.
pub fn multiply() -> Curried {
    MULTIPLY.clone()
}

/// Divides the first number by the second.
pub fn divide() -> Curried {
    DIVIDE.clone()
}

/// Remainder of dividing the first number by the second.
///
/// The result keeps the sign of the dividend, like `%` on `f64`:
/// `modulo(-5, 4) == -1`. Use [`math_mod`] for a non-negative remainder.
pub fn modulo() -> Curried {
    MODULO.clone()
}

/// The mathematical modulo: always in `0..p` for a positive integer `p`.
///
/// Returns `NaN` (it does not fail) when either operand is not an integer
/// or the divisor is below 1.
///
/// # Examples
///
/// ```rust
/// use currant::prelude::*;
///
/// # fn main() -> Result<(), CurryError> {
/// assert_eq!(call!(math_mod(), -17, 5)?, Value::from(3));
/// assert!(call!(math_mod(), 17, -5)?.is_nan());
/// assert!(call!(math_mod(), 17.2, 5)?.is_nan());
/// # Ok(())
/// # }
/// ```
pub fn math_mod() -> Curried {
    MATH_MOD.clone()
}

fn true_modulo(dividend: f64, divisor: f64) -> f64 {
    if !is_integer(dividend) || !is_integer(divisor) || divisor < 1.0 {
        return f64::NAN;
    }
    ((dividend % divisor) + divisor) % divisor
}

#[allow(clippy::float_cmp)]
fn is_integer(number: f64) -> bool {
    number.is_finite() && number.trunc() == number
}
