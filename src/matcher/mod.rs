mod legacy;
mod typed;

use std::fmt::{Formatter, Result as FmtResult};

pub use legacy::{legacy, Legacy, LegacyMatcher};
pub use typed::{typed, Typed};

/// A matcher is used to check if the passed argument matches a pre-defined
/// expectation. It is consumed by [`ArgumentListMatcher`](crate::arg_list::ArgumentListMatcher)
/// to verify the arguments of an expected call.
///
/// `T` is allowed to be unsized, so matchers can be written directly against
/// type erased [`ArgValue`](crate::value::ArgValue) arguments.
pub trait Matcher<T: ?Sized> {
    /// Returns `true` if the passed `value` matches the expectations, `false`
    /// otherwise.
    fn matches(&self, value: &T) -> bool;

    /// Write a human readable representation of the matcher to the passed
    /// formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
}
