//! The curry engine.
//!
//! [`curry`] wraps a function body of a declared arity. The resulting
//! [`Curried`] value can be called with any number of arguments:
//!
//! - with every position filled, the body runs and its result is returned;
//! - with positions left open, a new [`Value::Function`] awaiting them is
//!   returned, and the receiver is left untouched;
//! - [`__`] in a position keeps that position open, so a later call fills
//!   exactly that position ("right currying").
//!
//! # Examples
//!
//! ```rust
//! use currant::prelude::*;
//!
//! # fn main() -> Result<(), CurryError> {
//! let join = curry(
//!     |values: &[Value]| {
//!         let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
//!         Ok(Value::from(parts.join(" ")))
//!     },
//!     3,
//! )?;
//!
//! let all_at_once = call!(join, 1, 2, 3)?;
//! let one_by_one = call!(call!(call!(join, 1)?, 2)?, 3)?;
//! let deferred_middle = call!(call!(join, 1, __, 3)?, 2)?;
//!
//! assert_eq!(all_at_once, Value::from("1 2 3"));
//! assert_eq!(one_by_one, all_at_once);
//! assert_eq!(deferred_middle, all_at_once);
//! # Ok(())
//! # }
//! ```
//!
//! # Laws
//!
//! - **Split equivalence**: splitting the same arguments over several calls
//!   gives the same result as one call with all of them.
//! - **Placeholder equivalence**: `f(__, b)(a) == f(a, b)`.
//! - **Immutability**: applying arguments to a partial application never
//!   changes it; it can be reused any number of times.

mod call_macro;
mod slots;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use smallvec::SmallVec;
use static_assertions::assert_impl_all;

use crate::error::CurryError;
use crate::value::Value;

use slots::{Application, Slots};

/// Placeholder marker type for deferring an argument position.
///
/// Placeholders are recognised by type, never by comparing values, so no
/// legitimate argument (including [`Value::Undefined`]) is ever mistaken for
/// one.
///
/// # Examples
///
/// ```rust
/// use currant::prelude::*;
///
/// # fn main() -> Result<(), CurryError> {
/// let divide = curry(|values: &[Value]| Ok(Value::from(values[0].to_number() / values[1].to_number())), 2)?;
///
/// let half = call!(divide, __, 2)?;
/// assert_eq!(call!(half, 40)?, Value::from(20));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// The placeholder constant.
///
/// Named `__` (double underscore) because `_` is not a valid expression.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;

/// One argument supplied to a curried function: a value or a placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum Argument {
    /// Keep this position open for a later call.
    Placeholder,
    /// A concrete argument.
    Value(Value),
}

impl From<Placeholder> for Argument {
    fn from(_: Placeholder) -> Self {
        Self::Placeholder
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&Value> for Argument {
    fn from(value: &Value) -> Self {
        Self::Value(value.clone())
    }
}

macro_rules! argument_from_value {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for Argument {
                fn from(value: $source) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

argument_from_value!(
    bool,
    f32,
    f64,
    i32,
    i64,
    u32,
    &str,
    String,
    Curried,
    BTreeMap<String, Value>,
);

impl<T: Into<Value>> From<Vec<T>> for Argument {
    fn from(elements: Vec<T>) -> Self {
        Self::Value(Value::from(elements))
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Argument {
    fn from(elements: [T; N]) -> Self {
        Self::Value(Value::from(elements))
    }
}

/// What a zero-argument call does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyCall {
    /// Fail with [`CurryError::MissingArguments`].
    #[default]
    Reject,
    /// Return an equivalent function still awaiting every open position.
    Defer,
}

type Body = dyn Fn(&[Value]) -> Result<Value, CurryError> + Send + Sync;

#[cfg_attr(not(any(feature = "math", feature = "relation")), allow(dead_code))]
const BINARY: NonZeroUsize = NonZeroUsize::MIN.saturating_add(1);

fn missing(function: &str, arity: usize) -> CurryError {
    CurryError::MissingArguments {
        function: function.to_owned(),
        arity,
    }
}

struct Definition {
    name: Cow<'static, str>,
    arity: NonZeroUsize,
    empty_call: EmptyCall,
    body: Box<Body>,
}

struct Node {
    definition: Arc<Definition>,
    slots: Slots,
    overflow: Vec<Value>,
}

/// A curried function, possibly partially applied.
///
/// Cloning is cheap: the function body is shared and every node is
/// immutable.
#[derive(Clone)]
pub struct Curried {
    node: Arc<Node>,
}

assert_impl_all!(Curried: Send, Sync, Clone);
assert_impl_all!(Value: Send, Sync, Clone);

impl Curried {
    #[cfg_attr(not(any(feature = "math", feature = "relation")), allow(dead_code))]
    pub(crate) fn builtin<F>(name: &'static str, arity: NonZeroUsize, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, CurryError> + Send + Sync + 'static,
    {
        Self::from_definition(Definition {
            name: Cow::Borrowed(name),
            arity,
            empty_call: EmptyCall::Reject,
            body: Box::new(body),
        })
    }

    /// A one-argument builtin.
    #[cfg_attr(not(any(feature = "math", feature = "relation")), allow(dead_code))]
    pub(crate) fn unary<F>(name: &'static str, operation: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, CurryError> + Send + Sync + 'static,
    {
        Self::builtin(name, NonZeroUsize::MIN, move |values| match values {
            [first, ..] => operation(first),
            [] => Err(missing(name, 1)),
        })
    }

    /// A two-argument builtin.
    #[cfg_attr(not(any(feature = "math", feature = "relation")), allow(dead_code))]
    pub(crate) fn binary<F>(name: &'static str, operation: F) -> Self
    where
        F: Fn(&Value, &Value) -> Result<Value, CurryError> + Send + Sync + 'static,
    {
        Self::builtin(name, BINARY, move |values| match values {
            [first, second, ..] => operation(first, second),
            _ => Err(missing(name, BINARY.get() - values.len())),
        })
    }

    fn from_definition(definition: Definition) -> Self {
        let slots = slots::vacant(definition.arity);
        Self {
            node: Arc::new(Node {
                definition: Arc::new(definition),
                slots,
                overflow: Vec::new(),
            }),
        }
    }

    /// Returns the name given to the function.
    pub fn name(&self) -> &str {
        &self.node.definition.name
    }

    /// Returns the declared arity.
    pub fn arity(&self) -> usize {
        self.node.definition.arity.get()
    }

    /// Returns how many positions are still open.
    pub fn remaining(&self) -> usize {
        slots::open_count(&self.node.slots)
    }

    /// Returns `true` once at least one argument has been applied.
    pub fn is_partial(&self) -> bool {
        self.remaining() < self.arity() || !self.node.overflow.is_empty()
    }

    /// Applies arguments.
    ///
    /// Returns the body's result when the call fills every remaining
    /// position, or a [`Value::Function`] awaiting the positions still open.
    ///
    /// # Errors
    ///
    /// - [`CurryError::MissingArguments`] for a call without arguments under
    ///   [`EmptyCall::Reject`], carrying the number of positions still open.
    /// - Any error returned by the function body.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currant::prelude::*;
    ///
    /// # fn main() -> Result<(), CurryError> {
    /// let add = curry(|values: &[Value]| Ok(Value::from(values[0].to_number() + values[1].to_number())), 2)?;
    ///
    /// let increment = add.call([1])?;
    /// assert!(increment.is_function());
    /// assert_eq!(increment.call([42])?, Value::from(43));
    /// # Ok(())
    /// # }
    /// ```
    pub fn call<I>(&self, arguments: I) -> Result<Value, CurryError>
    where
        I: IntoIterator,
        I::Item: Into<Argument>,
    {
        let arguments: SmallVec<[Argument; 4]> = arguments.into_iter().map(Into::into).collect();
        let definition = &self.node.definition;

        if arguments.is_empty() {
            return match definition.empty_call {
                EmptyCall::Reject => {
                    let remaining = self.remaining();
                    tracing::debug!(
                        function = %definition.name,
                        remaining,
                        "rejected call without arguments"
                    );
                    Err(missing(&definition.name, remaining))
                }
                EmptyCall::Defer => Ok(Value::Function(self.clone())),
            };
        }

        let merged = slots::merge(&self.node.slots, &self.node.overflow, arguments);
        match merged.saturate() {
            Application::Ready(values) => {
                tracing::trace!(
                    function = %definition.name,
                    arguments = values.len(),
                    "invoking body"
                );
                (definition.body)(values.as_slice())
            }
            Application::Pending(merged) => {
                tracing::trace!(
                    function = %definition.name,
                    remaining = merged.remaining(),
                    "partially applied"
                );
                Ok(Value::Function(Self {
                    node: Arc::new(Node {
                        definition: Arc::clone(definition),
                        slots: merged.slots,
                        overflow: merged.overflow,
                    }),
                }))
            }
        }
    }
}

impl PartialEq for Curried {
    /// Two curried functions are equal when they share a definition and hold
    /// the same applied arguments.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node.definition, &other.node.definition)
            && self.node.slots == other.node.slots
            && self.node.overflow == other.node.overflow
    }
}

impl fmt::Debug for Curried {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("name", &self.name())
            .field("arity", &self.arity())
            .field("slots", &self.node.slots)
            .field("overflow", &self.node.overflow)
            .finish()
    }
}

impl fmt::Display for Curried {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<function {}/{}>", self.name(), self.arity())
    }
}

/// Configures and builds a [`Curried`] function.
///
/// # Examples
///
/// ```rust
/// use currant::prelude::*;
///
/// # fn main() -> Result<(), CurryError> {
/// let pair = CurryBuilder::new(2)
///     .name("pair")
///     .empty_call(EmptyCall::Defer)
///     .build(|values: &[Value]| Ok(values.iter().take(2).cloned().collect()))?;
///
/// // a bare call hands back an equivalent function instead of failing
/// let same = call!(pair)?;
/// assert_eq!(call!(same, 1, 2)?, Value::from([1, 2]));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct CurryBuilder {
    name: Cow<'static, str>,
    arity: usize,
    empty_call: EmptyCall,
}

impl CurryBuilder {
    /// Starts a function of the given arity, named `"anonymous"`, rejecting
    /// zero-argument calls.
    pub const fn new(arity: usize) -> Self {
        Self {
            name: Cow::Borrowed("anonymous"),
            arity,
            empty_call: EmptyCall::Reject,
        }
    }

    /// Sets the name used in errors and log events.
    #[must_use]
    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets what a call without arguments does.
    #[must_use]
    pub fn empty_call(mut self, policy: EmptyCall) -> Self {
        self.empty_call = policy;
        self
    }

    /// Wraps `body` into a curried function.
    ///
    /// `body` receives the positional arguments in declaration order,
    /// followed by any excess arguments.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::InvalidArity`] when the arity is zero.
    pub fn build<F>(self, body: F) -> Result<Curried, CurryError>
    where
        F: Fn(&[Value]) -> Result<Value, CurryError> + Send + Sync + 'static,
    {
        let arity = NonZeroUsize::new(self.arity).ok_or(CurryError::InvalidArity)?;
        Ok(Curried::from_definition(Definition {
            name: self.name,
            arity,
            empty_call: self.empty_call,
            body: Box::new(body),
        }))
    }
}

/// Wraps a function body of the given arity into a curried function.
///
/// Shorthand for `CurryBuilder::new(arity).build(body)`.
///
/// # Errors
///
/// Returns [`CurryError::InvalidArity`] when `arity` is zero.
///
/// # Examples
///
/// ```rust
/// use currant::prelude::*;
///
/// assert_eq!(
///     curry(|_: &[Value]| Ok(Value::Undefined), 0).unwrap_err(),
///     CurryError::InvalidArity
/// );
/// ```
pub fn curry<F>(body: F, arity: usize) -> Result<Curried, CurryError>
where
    F: Fn(&[Value]) -> Result<Value, CurryError> + Send + Sync + 'static,
{
    CurryBuilder::new(arity).build(body)
}
