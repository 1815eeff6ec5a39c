use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use pretty_assertions::assert_eq;
use vtest::{CollectSink, Tester};

fn capture() -> Tester<Vec<u8>, CollectSink> {
    Tester::with_parts(Vec::new(), CollectSink::new())
}

fn printed(t: &Tester<Vec<u8>, CollectSink>) -> String {
    String::from_utf8(t.output().clone()).unwrap()
}

#[test]
fn headers_print_once_per_scope() {
    let mut t = capture();
    t.scope("suite", "first_case");
    t.equal("msg", 3, 3);
    t.equal("again", 4, 4);

    assert_eq!(
        printed(&t),
        "Starting tests for suite\n\
         \tfirst_case\n\
         \t\tmsg: 3 == 3\n\
         \t\t\t✓ PASSED\n\
         \t\tagain: 4 == 4\n\
         \t\t\t✓ PASSED\n"
    );
}

#[test]
fn case_change_prints_only_the_case_header() {
    let mut t = capture();
    t.scope("suite", "first_case");
    t.pass("reached");
    t.scope("suite", "second_case");
    t.pass("reached again");

    assert_eq!(
        printed(&t),
        "Starting tests for suite\n\
         \tfirst_case\n\
         \t\treached\n\
         \t\t\t✓ PASSED\n\
         \tsecond_case\n\
         \t\treached again\n\
         \t\t\t✓ PASSED\n"
    );
}

#[test]
fn group_change_prints_both_headers() {
    let mut t = capture();
    t.scope("first_suite", "case");
    t.pass("reached");
    t.scope("second_suite", "case_two");
    t.pass("reached again");

    let out = printed(&t);
    assert!(out.contains("Starting tests for first_suite\n"));
    assert!(out.contains("Starting tests for second_suite\n\tcase_two\n"));
}

#[test]
fn redeclaring_the_same_scope_is_silent() {
    let mut t = capture();
    t.scope("suite", "case");
    t.pass("one");
    t.scope("suite", "case");
    t.pass("two");

    assert_eq!(printed(&t).matches("Starting tests for").count(), 1);
    assert_eq!(printed(&t).matches("\tcase\n").count(), 1);
}

#[test]
fn failed_marker_precedes_the_forwarded_outcome() {
    let mut t = capture();
    t.scope("suite", "failing");
    t.less_than("msg", 5, 3);

    assert!(printed(&t).ends_with("\t\tmsg: 5 < 3\n\t\t\t✗ FAILED\n"));
    assert_eq!(t.sink().failures().len(), 1);
    assert_eq!(t.sink().failures()[0].message, "msg");
}

#[test]
fn set_membership() {
    let mut t = capture();
    t.scope("membership", "set");

    let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
    t.contains("present", &set, &2);
    t.contains("absent", &set, &9);

    assert_eq!(t.sink().checks(), 2);
    assert_eq!(t.sink().failures().len(), 1);
    assert_eq!(t.sink().failures()[0].message, "absent");
}

#[test]
fn membership_description_renders_the_collection() {
    let mut t = capture();
    t.scope("membership", "rendering");

    // BTreeSet for deterministic Debug ordering.
    let set: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
    t.contains("present", &set, &2);

    assert!(printed(&t).contains("\t\tpresent: {1, 2, 3} contains 2\n"));
}

#[test]
fn slice_membership() {
    let mut t = capture();
    t.scope("membership", "slice");

    let values = [10, 20, 30];
    t.contains("present", &values, &20);
    assert!(t.sink().all_passed());
}

#[test]
fn keyed_membership() {
    let mut t = capture();
    t.scope("membership", "keyed");

    let mut hashed = HashMap::new();
    hashed.insert("alpha".to_string(), 1);
    t.contains_key("present", &hashed, "alpha");
    t.contains_key("absent", &hashed, "omega");

    let mut ordered = BTreeMap::new();
    ordered.insert(7, "seven");
    t.contains_key("present", &ordered, &7);

    assert_eq!(t.sink().checks(), 3);
    assert_eq!(t.sink().failures().len(), 1);
    assert_eq!(t.sink().failures()[0].message, "absent");
}

#[test]
fn collected_failures_convert_to_result() {
    let mut t = capture();
    t.scope("suite", "result");
    t.equal("fine", 1, 1);
    t.fail("broken");

    let (_, sink) = t.into_parts();
    let err = sink.into_result().unwrap_err();
    assert_eq!(err.to_string(), "assertion failed: broken");
}
