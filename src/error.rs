//! Error type for the curry engine and the functions built on it.
//!
//! Violated numeric preconditions are not errors: they produce `NaN`
//! (see [`math_mod`](crate::math::math_mod)). Only shape problems with the
//! call itself surface as a [`CurryError`].

use thiserror::Error;

/// Represents errors that can occur while applying a curried function.
///
/// # Examples
///
/// ```rust
/// use currant::prelude::*;
///
/// let pair = CurryBuilder::new(2)
///     .name("pair")
///     .build(|values: &[Value]| Ok(Value::from(values.to_vec())))
///     .unwrap();
///
/// let error = pair.call(Vec::<Argument>::new()).unwrap_err();
/// assert_eq!(
///     error,
///     CurryError::MissingArguments { function: "pair".to_string(), arity: 2 }
/// );
/// assert_eq!(format!("{error}"), "pair: expected 2 arguments, called with none");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurryError {
    /// A function requiring arguments was called bare, with no arguments.
    #[error("{function}: expected {arity} arguments, called with none")]
    MissingArguments {
        /// Name of the function that was called.
        function: String,
        /// Number of argument positions still open.
        arity: usize,
    },

    /// A function was declared with an arity of zero.
    #[error("cannot curry a function of arity 0")]
    InvalidArity,

    /// A value that is not a function was called.
    #[error("{found} is not callable")]
    NotCallable {
        /// Kind of the value that was called.
        found: &'static str,
    },

    /// An argument had the wrong shape for the function body.
    #[error("{function}: expected {expected}, found {found}")]
    UnexpectedType {
        /// Name of the function that rejected the argument.
        function: String,
        /// Kind of value the function accepts.
        expected: &'static str,
        /// Kind of value it was given.
        found: &'static str,
    },
}
