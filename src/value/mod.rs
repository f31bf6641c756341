//! The dynamic value model shared by every curried function.
//!
//! A [`Value`] is what a curried function receives in each argument
//! position and what it returns. Partial applications are values too
//! ([`Value::Function`]), so results can be called again.
//!
//! [`Value::Undefined`] is an ordinary value meaning "absent". It is never
//! treated as a placeholder: deferring a position requires
//! [`__`](crate::curry::__).
//!
//! # Loose semantics
//!
//! The library functions accept mixed inputs the way their untyped
//! counterparts do, through two narrow, explicit steps:
//!
//! - [`Value::to_number`] coerces a value to `f64` (numeric strings parse,
//!   booleans become `0`/`1`, anything else is `NaN`).
//! - [`Value::loose_cmp`] orders two strings lexicographically and every
//!   other pair numerically after coercion.

#[cfg(feature = "serde")]
mod serialization;

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use crate::curry::{Argument, Curried};
use crate::error::CurryError;

/// A dynamically typed argument or result.
///
/// # Examples
///
/// ```rust
/// use currant::Value;
///
/// let point = Value::record([("x", 3), ("y", 1)]);
/// assert_eq!(point.field("x"), Some(&Value::from(3)));
/// assert_eq!(Value::from("22").to_number(), 22.0);
/// assert!(Value::Undefined.to_number().is_nan());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// No value.
    #[default]
    Undefined,
    /// A boolean.
    Bool(bool),
    /// A double precision number.
    Number(f64),
    /// A string.
    Str(String),
    /// An ordered sequence of values.
    List(Vec<Value>),
    /// Named fields.
    Record(BTreeMap<String, Value>),
    /// A curried function, possibly partially applied.
    Function(Curried),
}

impl Value {
    /// Builds a [`Value::Record`] from `(name, value)` pairs.
    pub fn record<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Record(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Returns a short name for the kind of this value, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Record(_) => "record",
            Self::Function(_) => "function",
        }
    }

    /// Returns `true` for [`Value::Undefined`].
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` for [`Value::Function`].
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Returns `true` for a number that is `NaN`.
    pub const fn is_nan(&self) -> bool {
        matches!(self, Self::Number(number) if number.is_nan())
    }

    /// Returns the number held by a [`Value::Number`], without coercion.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the boolean held by a [`Value::Bool`].
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the string held by a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements of a [`Value::List`].
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(elements) => Some(elements),
            _ => None,
        }
    }

    #[cfg_attr(not(any(feature = "math", feature = "relation")), allow(dead_code))]
    pub(crate) fn expect_list(&self, function: &str) -> Result<&[Self], CurryError> {
        self.as_list().ok_or_else(|| CurryError::UnexpectedType {
            function: function.to_owned(),
            expected: "list",
            found: self.kind(),
        })
    }

    /// Returns the function held by a [`Value::Function`].
    pub const fn as_function(&self) -> Option<&Curried> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Looks up a field of a [`Value::Record`].
    pub fn field(&self, name: &str) -> Option<&Self> {
        match self {
            Self::Record(fields) => fields.get(name),
            _ => None,
        }
    }

    /// Coerces this value to a number.
    ///
    /// | value                      | result                 |
    /// |----------------------------|------------------------|
    /// | `Number(n)`                | `n`                    |
    /// | `Bool(b)`                  | `1.0` / `0.0`          |
    /// | `Str` (blank)              | `0.0`                  |
    /// | `Str` (decimal, `Infinity`)| the parsed number      |
    /// | anything else              | `NaN`                  |
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currant::Value;
    ///
    /// assert_eq!(Value::from(" 52 ").to_number(), 52.0);
    /// assert_eq!(Value::from("-Infinity").to_number(), f64::NEG_INFINITY);
    /// assert!(Value::from("inf").to_number().is_nan());
    /// assert!(Value::from("s").to_number().is_nan());
    /// ```
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(number) => *number,
            Self::Bool(flag) => f64::from(u8::from(*flag)),
            Self::Str(text) => parse_number(text),
            Self::Undefined | Self::List(_) | Self::Record(_) | Self::Function(_) => f64::NAN,
        }
    }

    /// Orders two values loosely.
    ///
    /// Two strings compare lexicographically; any other pair compares after
    /// [`to_number`](Self::to_number). Returns `None` when either side
    /// coerces to `NaN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use currant::Value;
    ///
    /// assert_eq!(Value::from("abcd").loose_cmp(&Value::from("abc")), Some(Ordering::Greater));
    /// assert_eq!(Value::from("10").loose_cmp(&Value::from(9)), Some(Ordering::Greater));
    /// assert_eq!(Value::from("x").loose_cmp(&Value::from(9)), None);
    /// ```
    pub fn loose_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Str(left), Self::Str(right)) => Some(left.cmp(right)),
            _ => self.to_number().partial_cmp(&other.to_number()),
        }
    }

    /// Calls this value as a function.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::NotCallable`] unless this is a
    /// [`Value::Function`]; otherwise whatever [`Curried::call`] returns.
    pub fn call<I>(&self, arguments: I) -> Result<Self, CurryError>
    where
        I: IntoIterator,
        I::Item: Into<Argument>,
    {
        match self {
            Self::Function(function) => function.call(arguments),
            other => Err(CurryError::NotCallable {
                found: other.kind(),
            }),
        }
    }
}

fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // `f64::from_str` also accepts "inf" and "nan" spellings
        _ if trimmed.bytes().any(|byte| byte.is_ascii_alphabetic() && !matches!(byte, b'e' | b'E')) => {
            f64::NAN
        }
        _ => trimmed.parse().unwrap_or(f64::NAN),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) if number.is_infinite() => {
                let sign = if number.is_sign_negative() { "-" } else { "" };
                write!(formatter, "{sign}Infinity")
            }
            Self::Number(number) => write!(formatter, "{number}"),
            Self::Str(text) => write!(formatter, "{text:?}"),
            Self::List(elements) => {
                formatter.write_str("[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{element}")?;
                }
                formatter.write_str("]")
            }
            Self::Record(fields) => {
                formatter.write_str("{")?;
                for (index, (name, value)) in fields.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{name}: {value}")?;
                }
                formatter.write_str("}")
            }
            Self::Function(function) => write!(formatter, "{function}"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<f32> for Value {
    fn from(number: f32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl From<Curried> for Value {
    fn from(function: Curried) -> Self {
        Self::Function(function)
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(fields: BTreeMap<String, Self>) -> Self {
        Self::Record(fields)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(elements: Vec<T>) -> Self {
        Self::List(elements.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for Value {
    fn from(elements: [T; N]) -> Self {
        Self::List(elements.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::List(iterator.into_iter().map(Into::into).collect())
    }
}
