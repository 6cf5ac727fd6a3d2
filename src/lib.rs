//! Argument list matching core for test double frameworks.
//!
//! An [`ArgumentListMatcher`] captures an expectation of the form "called
//! with these arguments" — an ordered list of literal values and matchers,
//! or one of the any-args/no-args sentinels — and decides for every call
//! whether the actual arguments satisfy it. It performs no call
//! bookkeeping and produces no diagnostics of its own; both belong to the
//! surrounding expectation layer.
//!
//! ```
//! use argmatch::{literal, matching, typed, ArgumentListMatcher, Matcher};
//! use std::fmt::{Formatter, Result as FmtResult};
//!
//! struct Positive;
//!
//! impl Matcher<i32> for Positive {
//!     fn matches(&self, value: &i32) -> bool {
//!         *value > 0
//!     }
//!
//!     fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
//!         write!(f, "Positive")
//!     }
//! }
//!
//! let matcher = ArgumentListMatcher::new([literal("save"), matching(typed(Positive))]);
//!
//! assert!(matcher.args_match(&argmatch::args!["save", 7]));
//! assert!(!matcher.args_match(&argmatch::args!["save", -7]));
//! assert!(!matcher.args_match(&argmatch::args!["save"]));
//! ```

pub mod arg_list;
pub mod matcher;
pub mod value;

pub use arg_list::{
    any_args, literal, matching, no_args, ArgDescriptor, ArgumentListMatcher, ExpectedArgs,
};
pub use matcher::{legacy, typed, Legacy, LegacyMatcher, Matcher, Typed};
pub use value::ArgValue;
