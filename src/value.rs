use std::any::Any;
use std::fmt::Debug;

/// A type erased argument value.
///
/// Both literal argument descriptors and the actual arguments of a call are
/// handled as `dyn ArgValue` trait objects, which keeps the argument list
/// matcher agnostic to argument count and argument types. The trait is
/// implemented for every `T: Any + Debug + PartialEq + Send + Sync`.
pub trait ArgValue: Any + Debug + Send + Sync {
    /// Upcast to [`Any`], so matchers and equality checks can downcast to
    /// the concrete argument type.
    fn as_any(&self) -> &dyn Any;

    /// Returns `true` if `other` has the same concrete type as `self` and
    /// both values compare equal.
    ///
    /// A differing concrete type is an ordinary non-match, not an error.
    /// `self` is the expected value and forms the left hand side of the
    /// comparison.
    fn eq_value(&self, other: &dyn ArgValue) -> bool;
}

impl<T> ArgValue for T
where
    T: Any + Debug + PartialEq + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_value(&self, other: &dyn ArgValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }
}

impl PartialEq for dyn ArgValue {
    fn eq(&self, other: &Self) -> bool {
        self.eq_value(other)
    }
}
