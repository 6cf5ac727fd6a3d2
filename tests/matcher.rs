use std::any::{type_name, Any};
use std::fmt::{Formatter, Result as FmtResult};
use std::marker::PhantomData;

use pretty_assertions::assert_eq;

use argmatch::{
    args, legacy, matching, typed, ArgValue, ArgumentListMatcher, LegacyMatcher, Matcher,
};

struct IsEven;

impl Matcher<i32> for IsEven {
    fn matches(&self, value: &i32) -> bool {
        value % 2 == 0
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "IsEven")
    }
}

fn kind_of<T>() -> KindOf<T> {
    KindOf(PhantomData)
}

struct KindOf<T>(PhantomData<fn(&T)>);

impl<T: Any> Matcher<dyn ArgValue> for KindOf<T> {
    fn matches(&self, value: &dyn ArgValue) -> bool {
        value.as_any().is::<T>()
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "KindOf({})", type_name::<T>())
    }
}

struct LessThanLegacy(i32);

impl LegacyMatcher<i32> for LessThanLegacy {
    fn matches(&self, value: &i32) -> bool {
        *value < self.0
    }

    fn failure_message(&self) -> String {
        format!("a number less than {}", self.0)
    }
}

struct AnyStringLegacy;

impl LegacyMatcher<dyn ArgValue> for AnyStringLegacy {
    fn matches(&self, value: &dyn ArgValue) -> bool {
        value.as_any().is::<String>() || value.as_any().is::<&str>()
    }

    fn failure_message(&self) -> String {
        "a string".into()
    }

    fn description(&self) -> String {
        "any string".into()
    }
}

#[test]
fn typed_matcher_forwards_to_the_inner_matcher() {
    let matcher = ArgumentListMatcher::new([matching(typed(IsEven))]);

    assert!(matcher.args_match(&args![4]));
    assert!(!matcher.args_match(&args![5]));
}

#[test]
fn typed_matcher_rejects_arguments_of_a_different_type() {
    let matcher = ArgumentListMatcher::new([matching(typed(IsEven))]);

    assert!(!matcher.args_match(&args![4i64]));
    assert!(!matcher.args_match(&args!["4"]));
}

#[test]
fn kind_of_matcher_checks_the_argument_type() {
    let matcher = ArgumentListMatcher::new([matching(kind_of::<i32>())]);

    assert!(matcher.args_match(&args![7]));
    assert!(!matcher.args_match(&args!["not a number"]));
}

#[test]
fn legacy_objects_participate_via_the_adapter() {
    let matcher = ArgumentListMatcher::new([matching(typed(legacy(LessThanLegacy(10))))]);

    assert!(matcher.args_match(&args![9]));
    assert!(!matcher.args_match(&args![10]));
    assert_eq!(format!("{matcher}"), "a number less than 10");
}

#[test]
fn legacy_adapter_works_directly_on_type_erased_arguments() {
    let matcher = ArgumentListMatcher::new([matching(legacy(AnyStringLegacy))]);

    assert!(matcher.args_match(&args!["x"]));
    assert!(matcher.args_match(&args![String::from("y")]));
    assert!(!matcher.args_match(&args![1]));
    assert_eq!(format!("{matcher}"), "any string");
}

#[test]
fn legacy_description_falls_back_to_the_failure_message() {
    let legacy = LessThanLegacy(3);

    assert_eq!(legacy.description(), legacy.failure_message());
}
