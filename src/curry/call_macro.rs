//! The `call!` macro for applying heterogeneous arguments.

/// Calls a curried function with arguments of mixed types.
///
/// Each argument is converted with [`Argument::from`](crate::curry::Argument),
/// so numbers, strings, lists, [`Value`](crate::value::Value)s and the
/// placeholder [`__`](crate::curry::__) can be mixed freely. The callee can be
/// a [`Curried`](crate::curry::Curried) or a [`Value`](crate::value::Value)
/// holding a function, so calls chain with `?`.
///
/// # Syntax
///
/// - `call!(f)` calls `f` without arguments
/// - `call!(f, a, b)` calls `f` with `a` and `b`
/// - `call!(f, __, b)` defers the first position
///
/// # Examples
///
/// ```
/// use currant::prelude::*;
///
/// # fn main() -> Result<(), CurryError> {
/// let subtract = curry(|values: &[Value]| Ok(Value::from(values[0].to_number() - values[1].to_number())), 2)?;
/// let nines_complement = call!(subtract, 9)?;
/// assert_eq!(call!(nines_complement, 6)?, Value::from(3));
///
/// let lte = curry(|values: &[Value]| Ok(Value::from(values[0].to_number() <= values[1].to_number())), 2)?;
/// let up_to_twenty = call!(lte, __, 20)?;
/// assert_eq!(call!(up_to_twenty, 20)?, Value::from(true));
/// assert_eq!(call!(up_to_twenty, 25)?, Value::from(false));
/// # Ok(())
/// # }
/// ```
///
/// ## Bare calls
///
/// ```
/// use currant::prelude::*;
///
/// let first = curry(|values: &[Value]| Ok(values[0].clone()), 1).unwrap();
/// assert!(matches!(
///     call!(first),
///     Err(CurryError::MissingArguments { .. })
/// ));
/// ```
#[macro_export]
macro_rules! call {
    ($function:expr $(, $argument:expr)* $(,)?) => {
        $function.call(::std::vec::Vec::<$crate::curry::Argument>::from([
            $($crate::curry::Argument::from($argument)),*
        ]))
    };
}
