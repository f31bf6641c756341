//! Curried comparison, keyed aggregation and property access.
//!
//! Comparisons use [`Value::loose_cmp`]: two strings compare
//! lexicographically, anything else numerically. A comparison involving
//! `NaN` is `false` in every direction.
//!
//! # Examples
//!
//! ```rust
//! use currant::prelude::*;
//!
//! # fn main() -> Result<(), CurryError> {
//! let less_than_five = call!(lt(), __, 5)?;
//! assert_eq!(call!(less_than_five, 3)?, Value::from(true));
//! assert_eq!(call!(less_than_five, 5)?, Value::from(false));
//!
//! assert_eq!(call!(gt(), "abcd", "abc")?, Value::from(true));
//! # Ok(())
//! # }
//! ```

use std::cmp::Ordering;
use std::sync::LazyLock;

use crate::curry::Curried;
use crate::error::CurryError;
use crate::value::Value;

static LT: LazyLock<Curried> = LazyLock::new(|| {
    Curried::binary("lt", |left, right| {
        Ok(Value::from(matches!(left.loose_cmp(right), Some(Ordering::Less))))
    })
});

static LTE: LazyLock<Curried> = LazyLock::new(|| {
    Curried::binary("lte", |left, right| {
        Ok(Value::from(matches!(
            left.loose_cmp(right),
            Some(Ordering::Less | Ordering::Equal)
        )))
    })
});

static GT: LazyLock<Curried> = LazyLock::new(|| {
    Curried::binary("gt", |left, right| {
        Ok(Value::from(matches!(left.loose_cmp(right), Some(Ordering::Greater))))
    })
});

static GTE: LazyLock<Curried> = LazyLock::new(|| {
    Curried::binary("gte", |left, right| {
        Ok(Value::from(matches!(
            left.loose_cmp(right),
            Some(Ordering::Greater | Ordering::Equal)
        )))
    })
});

static MAX_BY: LazyLock<Curried> = LazyLock::new(|| {
    Curried::binary("max_by", |key, list| {
        extreme_by("max_by", key, list, Ordering::Greater)
    })
});

static MIN_BY: LazyLock<Curried> = LazyLock::new(|| {
    Curried::binary("min_by", |key, list| {
        extreme_by("min_by", key, list, Ordering::Less)
    })
});

static PROP: LazyLock<Curried> = LazyLock::new(|| {
    Curried::binary("prop", |name, record| {
        let field = match name {
            Value::Str(text) => record.field(text),
            other => record.field(&other.to_string()),
        };
        Ok(field.cloned().unwrap_or_default())
    })
});

/// `true` when the first argument is less than the second.
pub fn lt() -> Curried {
    LT.clone()
}

/// `true` when the first argument is less than or equal to the second.
///
/// # Examples
///
/// ```rust
/// use currant::prelude::*;
///
/// # fn main() -> Result<(), CurryError> {
/// let at_least_twenty = call!(lte(), 20)?;
/// assert_eq!(call!(at_least_twenty, 20)?, Value::from(true));
/// assert_eq!(call!(at_least_twenty, 10)?, Value::from(false));
/// # Ok(())
/// # }
/// ```
pub fn lte() -> Curried {
    LTE.clone()
}

/// `true` when the first argument is greater than the second.
pub fn gt() -> Curried {
    GT.clone()
}

/// `true` when the first argument is greater than or equal to the second.
pub fn gte() -> Curried {
    GTE.clone()
}

/// The element of a list whose key is largest.
///
/// The first argument is the key function (any callable [`Value`]), the
/// second the list. Keys are compared with [`Value::loose_cmp`]; on a tie
/// the earliest element wins. An empty list yields [`Value::Undefined`].
///
/// # Errors
///
/// Fails with [`CurryError::UnexpectedType`] when the second argument is not
/// a list, and with whatever the key function fails with.
///
/// # Examples
///
/// ```rust
/// use currant::prelude::*;
///
/// # fn main() -> Result<(), CurryError> {
/// let points = Value::from([
///     Value::record([("x", 3), ("y", 1)]),
///     Value::record([("x", 5), ("y", 10)]),
///     Value::record([("x", -2), ("y", 0)]),
/// ]);
/// let highest_x = call!(max_by(), call!(prop(), "x")?)?;
///
/// assert_eq!(call!(highest_x, points)?, Value::record([("x", 5), ("y", 10)]));
/// assert_eq!(call!(highest_x, Value::List(vec![]))?, Value::Undefined);
/// # Ok(())
/// # }
/// ```
pub fn max_by() -> Curried {
    MAX_BY.clone()
}

/// The element of a list whose key is smallest. Mirrors [`max_by`].
pub fn min_by() -> Curried {
    MIN_BY.clone()
}

/// A field of a record; [`Value::Undefined`] when the field is absent or the
/// target is not a record.
///
/// A non-string field name is looked up by its display form.
pub fn prop() -> Curried {
    PROP.clone()
}

fn extreme_by(
    function: &str,
    key: &Value,
    list: &Value,
    wanted: Ordering,
) -> Result<Value, CurryError> {
    let mut best: Option<(&Value, Value)> = None;
    for element in list.expect_list(function)? {
        let candidate = key.call([element])?;
        let replace = best
            .as_ref()
            .is_none_or(|(_, best_key)| candidate.loose_cmp(best_key) == Some(wanted));
        if replace {
            best = Some((element, candidate));
        }
    }
    Ok(best.map_or(Value::Undefined, |(element, _)| element.clone()))
}
