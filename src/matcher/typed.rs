use std::any::Any;
use std::fmt::{Formatter, Result as FmtResult};
use std::marker::PhantomData;

use crate::value::ArgValue;

use super::Matcher;

/// Create a new [`Typed`] adapter that downcasts the argument to `T` and
/// forwards it to the passed `inner` matcher.
pub fn typed<T, M>(inner: M) -> Typed<T, M>
where
    T: Any,
    M: Matcher<T>,
{
    Typed::new(inner)
}

/// Adapter that lifts a matcher for a concrete argument type `T` to a
/// matcher over type erased [`ArgValue`]s.
///
/// The actual argument is downcast to `T` before the inner matcher is
/// invoked. An argument of a different concrete type is a non-match.
#[must_use]
#[derive(Debug)]
pub struct Typed<T, M> {
    inner: M,
    _marker: PhantomData<fn(&T)>,
}

impl<T, M> Typed<T, M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, M> Matcher<dyn ArgValue> for Typed<T, M>
where
    T: Any,
    M: Matcher<T>,
{
    fn matches(&self, value: &dyn ArgValue) -> bool {
        value
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |value| self.inner.matches(value))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.inner.fmt(f)
    }
}
