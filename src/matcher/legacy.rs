use std::fmt::{Formatter, Result as FmtResult};

use super::Matcher;

/// Create a new [`Legacy`] adapter around a matcher object that only
/// follows the old [`LegacyMatcher`] convention.
pub fn legacy<M>(inner: M) -> Legacy<M> {
    Legacy(inner)
}

/// Interface of matcher objects written against the historic two-method
/// convention: a boolean predicate plus a failure message accessor.
///
/// Two message naming conventions exist across library versions.
/// [`description`](Self::description) is the newer one and falls back to
/// [`failure_message`](Self::failure_message) when not provided.
pub trait LegacyMatcher<T: ?Sized> {
    /// Returns `true` if the passed `value` matches the expectation.
    fn matches(&self, value: &T) -> bool;

    /// The message describing the expectation when it is not met.
    fn failure_message(&self) -> String;

    /// Human readable description of the expectation.
    fn description(&self) -> String {
        self.failure_message()
    }
}

/// Implements [`Matcher`] for any [`LegacyMatcher`], so matcher objects
/// following the old convention can participate in argument lists unchanged.
#[must_use]
#[derive(Debug)]
pub struct Legacy<M>(pub M);

impl<T, M> Matcher<T> for Legacy<M>
where
    T: ?Sized,
    M: LegacyMatcher<T>,
{
    fn matches(&self, value: &T) -> bool {
        self.0.matches(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0.description())
    }
}
