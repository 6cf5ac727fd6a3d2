use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::mem::take;

use once_cell::sync::Lazy;

use crate::matcher::Matcher;
use crate::value::ArgValue;

/// Create a literal descriptor that is compared to the actual argument
/// with `==`.
pub fn literal<T>(value: T) -> ArgDescriptor
where
    T: ArgValue,
{
    ArgDescriptor::Value(Box::new(value))
}

/// Create a descriptor that invokes the passed `matcher` with the actual
/// argument.
///
/// Matchers for a concrete argument type can be lifted to type erased
/// arguments with [`typed`](crate::matcher::typed) first.
pub fn matching<M>(matcher: M) -> ArgDescriptor
where
    M: Matcher<dyn ArgValue> + Send + Sync + 'static,
{
    ArgDescriptor::Matcher(Box::new(matcher))
}

/// Create the sentinel descriptor that accepts any actual argument list.
pub fn any_args() -> ArgDescriptor {
    ArgDescriptor::AnyArgs
}

/// Create the sentinel descriptor that accepts only an empty actual
/// argument list.
pub fn no_args() -> ArgDescriptor {
    ArgDescriptor::NoArgs
}

/// One element of an expected argument list.
///
/// Sentinels are only meaningful as the leading descriptor, where they
/// select the matching strategy for the whole list (see
/// [`ArgumentListMatcher::new`]). A sentinel in any later position never
/// matches.
pub enum ArgDescriptor {
    /// The whole actual argument list may be anything.
    AnyArgs,

    /// The actual argument list must be empty.
    NoArgs,

    /// A literal value, compared to the actual argument by value equality.
    Value(Box<dyn ArgValue>),

    /// A matcher that is invoked with the actual argument.
    Matcher(Box<dyn Matcher<dyn ArgValue> + Send + Sync>),
}

impl ArgDescriptor {
    fn matches(&self, value: &dyn ArgValue) -> bool {
        match self {
            // Dispatch on the boxed value itself, not on the box: the box
            // would satisfy the `ArgValue` blanket impl and downcasting the
            // actual argument to it could never succeed.
            Self::Value(expected) => (**expected).eq_value(value),
            Self::Matcher(matcher) => matcher.matches(value),
            Self::AnyArgs | Self::NoArgs => false,
        }
    }
}

impl Display for ArgDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::AnyArgs => write!(f, "AnyArgs"),
            Self::NoArgs => write!(f, "NoArgs"),
            Self::Value(value) => write!(f, "{value:?}"),
            Self::Matcher(matcher) => matcher.fmt(f),
        }
    }
}

impl Debug for ArgDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::AnyArgs => write!(f, "AnyArgs"),
            Self::NoArgs => write!(f, "NoArgs"),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Matcher(matcher) => {
                write!(f, "Matcher(")?;
                matcher.fmt(f)?;
                write!(f, ")")
            }
        }
    }
}

/// Classification of an expected argument list, derived once when the
/// [`ArgumentListMatcher`] is created.
#[derive(Debug)]
pub enum ExpectedArgs {
    /// Any actual argument list matches.
    AnyArgs,

    /// Only the empty actual argument list matches.
    NoArgs,

    /// The actual arguments must match the descriptors pairwise.
    Exact(Vec<ArgDescriptor>),
}

impl ExpectedArgs {
    /// The number of positional arguments this expectation accepts, if it
    /// is fixed.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Self::AnyArgs => None,
            Self::NoArgs => Some(0),
            Self::Exact(descriptors) => Some(descriptors.len()),
        }
    }
}

impl Default for ExpectedArgs {
    fn default() -> Self {
        Self::AnyArgs
    }
}

impl Display for ExpectedArgs {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::AnyArgs => write!(f, "any arguments"),
            Self::NoArgs => write!(f, "no arguments"),
            Self::Exact(descriptors) => {
                let mut first = true;

                for descriptor in descriptors {
                    if !take(&mut first) {
                        write!(f, ", ")?;
                    }

                    write!(f, "{descriptor}")?;
                }

                Ok(())
            }
        }
    }
}

static MATCH_ANY_ARGS: Lazy<ArgumentListMatcher> = Lazy::new(ArgumentListMatcher::default);

/// Matches the argument list of a single call against an expectation that
/// was captured once at construction time.
///
/// The expectation is classified into one of three strategies when the
/// matcher is created and is immutable afterwards, so a single instance can
/// be queried concurrently from multiple threads without synchronization.
///
/// The default instance accepts any argument list.
#[must_use]
#[derive(Debug, Default)]
pub struct ArgumentListMatcher {
    expected: ExpectedArgs,
}

impl ArgumentListMatcher {
    /// Create a new [`ArgumentListMatcher`] from the passed `expected`
    /// descriptors.
    ///
    /// The matching strategy is selected by the leading descriptor: the
    /// any-args sentinel accepts every call, the no-args sentinel accepts
    /// only calls without arguments, and any other list is matched
    /// positionally. Any value is accepted as a literal descriptor; there
    /// are no error conditions.
    ///
    /// A sentinel accompanied by further descriptors is unspecified input;
    /// the trailing descriptors are ignored.
    pub fn new<I>(expected: I) -> Self
    where
        I: IntoIterator<Item = ArgDescriptor>,
    {
        let descriptors = expected.into_iter().collect::<Vec<_>>();

        let expected = match descriptors.first() {
            Some(ArgDescriptor::AnyArgs) => ExpectedArgs::AnyArgs,
            Some(ArgDescriptor::NoArgs) => ExpectedArgs::NoArgs,
            _ => ExpectedArgs::Exact(descriptors),
        };

        Self { expected }
    }

    /// The shared matcher that accepts any argument list, usable as the
    /// default expectation of a call.
    pub fn match_any_args() -> &'static Self {
        &MATCH_ANY_ARGS
    }

    /// The classified expectation.
    ///
    /// Kept read-only for inspection, so the reporting layer can compose
    /// its own diagnostics from the expected descriptors.
    pub fn expected_args(&self) -> &ExpectedArgs {
        &self.expected
    }

    /// Returns `true` if the passed actual arguments satisfy the
    /// expectation.
    ///
    /// An arity mismatch is a non-match, as is any positional pair that
    /// fails the value or matcher comparison. Pairs are evaluated from left
    /// to right with a short circuit on the first failure. Panics raised by
    /// a misbehaving matcher propagate unchanged to the caller.
    pub fn args_match(&self, args: &[&dyn ArgValue]) -> bool {
        match &self.expected {
            ExpectedArgs::AnyArgs => true,
            ExpectedArgs::NoArgs => args.is_empty(),
            ExpectedArgs::Exact(descriptors) => {
                descriptors.len() == args.len()
                    && descriptors
                        .iter()
                        .zip(args)
                        .all(|(descriptor, arg)| descriptor.matches(*arg))
            }
        }
    }
}

impl Display for ArgumentListMatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.expected, f)
    }
}

/// Coerce a list of values into an array of [`ArgValue`] references, ready
/// to be passed to [`ArgumentListMatcher::args_match`].
#[macro_export]
macro_rules! args {
    ($( $value:expr ),* $(,)?) => {
        [$( &$value as &dyn $crate::ArgValue ),*]
    };
}
