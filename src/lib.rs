//! # currant
//!
//! Placeholder-aware automatic currying for Rust, with a small library of
//! curried arithmetic, comparison and aggregation functions built on it.
//!
//! ## Overview
//!
//! - **Curry engine**: [`curry`](curry::curry) wraps a function body of a
//!   declared arity. The result can be called with any subset of its
//!   arguments and returns a new function awaiting the rest.
//! - **Placeholders**: [`__`](curry::__) keeps a position open so a later
//!   call fills that exact position ("right currying").
//! - **Dynamic values**: arguments and results are [`Value`](value::Value)s.
//! - **Library functions**: `add`, `subtract`, `multiply`, `divide`,
//!   `modulo`, `math_mod`, `sum`, `product`, `max`, `min` (feature `math`)
//!   and `lt`, `lte`, `gt`, `gte`, `max_by`, `min_by`, `prop`
//!   (feature `relation`).
//!
//! ## Feature Flags
//!
//! - `math`: Curried arithmetic and numeric aggregation
//! - `relation`: Curried comparison and keyed aggregation
//! - `serde`: `Serialize`/`Deserialize` for [`Value`](value::Value)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use currant::prelude::*;
//!
//! # #[cfg(feature = "math")]
//! # fn main() -> Result<(), CurryError> {
//! let minus_five = call!(subtract(), __, 5)?;
//! assert_eq!(call!(minus_five, 17)?, Value::from(12));
//!
//! let increment = call!(add(), 1)?;
//! assert_eq!(call!(increment, 42)?, Value::from(43));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "math"))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the engine, the value model and every library function.
///
/// # Usage
///
/// ```rust
/// use currant::prelude::*;
/// ```
pub mod prelude {
    pub use crate::call;
    pub use crate::curry::*;
    pub use crate::error::CurryError;
    pub use crate::value::Value;

    #[cfg(feature = "math")]
    pub use crate::math::*;

    #[cfg(feature = "relation")]
    pub use crate::relation::*;
}

pub mod curry;
pub mod error;
pub mod value;

#[cfg(feature = "math")]
pub mod math;

#[cfg(feature = "relation")]
pub mod relation;

pub use curry::{__, Argument, Curried, curry};
pub use error::CurryError;
pub use value::Value;
