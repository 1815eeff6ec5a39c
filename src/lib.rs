//! Verbose assertion helpers for tests. Each helper prints the current test
//! scope, an affirmative description of the check, and a pass/fail marker,
//! then forwards the boolean outcome to an [`AssertSink`]. Because the
//! descriptions print on every run, not just on failures, messages should be
//! affirmative statements of expectations.

pub mod errors;
pub mod sink;

mod compare;
mod lookup;
mod scope;
mod tolerance;

use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};
use std::io::{self, Write};

use itertools::Itertools;

use compare::Comparison;
use scope::ScopeMarker;

pub use errors::{AssertionFailed, Result};
pub use lookup::KeyLookup;
pub use sink::{AssertSink, CollectSink, PanicSink};
pub use tolerance::Tolerance;

/// The caller-owned assertion context: a scope marker, an output writer, and
/// the sink that turns failing outcomes into failure signals.
///
/// A `Tester` is deliberately not shared state. All helpers take `&mut self`,
/// so one value serves one sequential caller; parallel test execution gets
/// one `Tester` per thread rather than a lock around hidden globals.
///
/// ```
/// let mut t = vtest::Tester::new();
/// t.scope("readme", "arithmetic");
/// t.equal("one plus one is two", 1 + 1, 2);
/// ```
pub struct Tester<W: Write = io::Stdout, S: AssertSink = PanicSink> {
    scope: ScopeMarker,
    out: W,
    sink: S,
}

impl Tester {
    /// A tester that prints to stdout and panics on a failing comparison,
    /// which the harness reports as a failed test case.
    pub fn new() -> Self {
        Tester::with_parts(io::stdout(), PanicSink)
    }
}

impl Default for Tester {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write, S: AssertSink> Tester<W, S> {
    /// Build a tester around an arbitrary writer and sink. Tests in this
    /// crate pair a `Vec<u8>` with a [`CollectSink`] to observe both the
    /// printed lines and the forwarded outcomes.
    pub fn with_parts(out: W, sink: S) -> Self {
        Self { scope: ScopeMarker::default(), out, sink }
    }

    /// Declare the current test scope. Headers are emitted lazily by the
    /// next helper call, once per transition: a group change prints
    /// `Starting tests for <group>`, a case change prints the indented case
    /// name. Repeated declarations of the same pair print nothing.
    pub fn scope(&mut self, group: &str, case: &str) {
        self.scope.set(group, case);
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (W, S) {
        (self.out, self.sink)
    }

    // ---- exact kinds ----

    /// Test if two values are equal.
    pub fn equal<T: PartialEq + Display>(&mut self, message: &str, lhs: T, rhs: T) {
        let outcome = lhs == rhs;
        self.symmetric(message, Comparison::Equal, &lhs, &rhs, outcome);
    }

    /// Test if two values are unequal.
    pub fn not_equal<T: PartialEq + Display>(&mut self, message: &str, lhs: T, rhs: T) {
        let outcome = lhs != rhs;
        self.symmetric(message, Comparison::NotEqual, &lhs, &rhs, outcome);
    }

    /// Test if one value is less than another.
    pub fn less_than<T: Ord + Display>(&mut self, message: &str, lhs: T, rhs: T) {
        self.ordered(message, Comparison::LessThan, lhs, rhs);
    }

    /// Test if one value is less than or equal to another.
    pub fn less_or_equal<T: Ord + Display>(&mut self, message: &str, lhs: T, rhs: T) {
        self.ordered(message, Comparison::LessOrEqual, lhs, rhs);
    }

    /// Test if one value is greater than another.
    pub fn greater_than<T: Ord + Display>(&mut self, message: &str, lhs: T, rhs: T) {
        self.ordered(message, Comparison::GreaterThan, lhs, rhs);
    }

    /// Test if one value is greater than or equal to another.
    pub fn greater_or_equal<T: Ord + Display>(&mut self, message: &str, lhs: T, rhs: T) {
        self.ordered(message, Comparison::GreaterOrEqual, lhs, rhs);
    }

    // ---- tolerance-bearing kinds ----

    /// Test if two floating-point values are equal within a supplied margin.
    /// The boundary is inclusive: `|lhs - rhs| == margin` passes.
    pub fn equal_within<F: Tolerance>(&mut self, message: &str, lhs: F, rhs: F, margin: F) {
        let outcome = tolerance::equal_within(lhs, rhs, margin);
        self.approximate(message, Comparison::Equal, lhs, rhs, margin, outcome);
    }

    /// Test if two floating-point values differ by more than a supplied margin.
    pub fn not_equal_within<F: Tolerance>(&mut self, message: &str, lhs: F, rhs: F, margin: F) {
        let outcome = tolerance::not_equal_within(lhs, rhs, margin);
        self.approximate(message, Comparison::NotEqual, lhs, rhs, margin, outcome);
    }

    /// Test if `lhs < rhs - |margin|`.
    ///
    /// Unlike [`Tester::equal_within`], where the margin loosens equality,
    /// the ordering forms use the margin to widen the requirement: `lhs`
    /// must clear `rhs` by at least `|margin|`. A zero margin degenerates to
    /// the plain comparison.
    pub fn less_than_within<F: Tolerance>(&mut self, message: &str, lhs: F, rhs: F, margin: F) {
        let outcome = tolerance::less_than_within(lhs, rhs, margin);
        self.approximate(message, Comparison::LessThan, lhs, rhs, margin, outcome);
    }

    /// Test if `lhs <= rhs - |margin|`. See [`Tester::less_than_within`] for
    /// how the margin widens rather than loosens the requirement.
    pub fn less_or_equal_within<F: Tolerance>(&mut self, message: &str, lhs: F, rhs: F, margin: F) {
        let outcome = tolerance::less_or_equal_within(lhs, rhs, margin);
        self.approximate(message, Comparison::LessOrEqual, lhs, rhs, margin, outcome);
    }

    /// Test if `lhs > rhs + |margin|`. See [`Tester::less_than_within`] for
    /// how the margin widens rather than loosens the requirement.
    pub fn greater_than_within<F: Tolerance>(&mut self, message: &str, lhs: F, rhs: F, margin: F) {
        let outcome = tolerance::greater_than_within(lhs, rhs, margin);
        self.approximate(message, Comparison::GreaterThan, lhs, rhs, margin, outcome);
    }

    /// Test if `lhs >= rhs + |margin|`. See [`Tester::less_than_within`] for
    /// how the margin widens rather than loosens the requirement.
    pub fn greater_or_equal_within<F: Tolerance>(
        &mut self,
        message: &str,
        lhs: F,
        rhs: F,
        margin: F,
    ) {
        let outcome = tolerance::greater_or_equal_within(lhs, rhs, margin);
        self.approximate(message, Comparison::GreaterOrEqual, lhs, rhs, margin, outcome);
    }

    // ---- structural kinds ----

    /// Test if two objects are equal under their own equality contract, in
    /// both directions, and that their hash digests agree. All three
    /// sub-checks must hold for the comparison to pass.
    pub fn equal_structural<T>(&mut self, message: &str, lhs: &T, rhs: &T)
    where
        T: PartialEq + Hash + Debug + ?Sized,
    {
        let outcome = lhs == rhs && rhs == lhs && digest(lhs) == digest(rhs);
        let detail = format!("{lhs:?} {} {rhs:?}", Comparison::Equal.symbol());
        self.report(message, Some(&detail), outcome);
    }

    /// Test if two objects are unequal in both directions with differing
    /// hash digests. Distinct values that happen to collide on their digest
    /// are reported as a failure.
    pub fn not_equal_structural<T>(&mut self, message: &str, lhs: &T, rhs: &T)
    where
        T: PartialEq + Hash + Debug + ?Sized,
    {
        let outcome = lhs != rhs && rhs != lhs && digest(lhs) != digest(rhs);
        let detail = format!("{lhs:?} {} {rhs:?}", Comparison::NotEqual.symbol());
        self.report(message, Some(&detail), outcome);
    }

    // ---- membership ----

    /// Test if a collection contains an element.
    pub fn contains<C, T>(&mut self, message: &str, collection: C, element: &T)
    where
        C: IntoIterator + Debug,
        C::Item: Borrow<T>,
        T: PartialEq + Display,
    {
        let detail = format!("{collection:?} {} {element}", Comparison::Contains.symbol());
        let outcome = collection.into_iter().contains(element);
        self.report(message, Some(&detail), outcome);
    }

    /// Test if a keyed mapping contains a key.
    pub fn contains_key<M, Q>(&mut self, message: &str, map: &M, key: &Q)
    where
        M: KeyLookup<Q> + Debug,
        Q: Display + ?Sized,
    {
        let detail = format!("{map:?} {} {key}", Comparison::Contains.symbol());
        let outcome = map.has_key(key);
        self.report(message, Some(&detail), outcome);
    }

    // ---- unconditional and passthrough ----

    /// A test that passes if it is reached in the code.
    pub fn pass(&mut self, message: &str) {
        self.report(message, None, true);
    }

    /// A test that fails if it is reached in the code.
    pub fn fail(&mut self, message: &str) {
        self.report(message, None, false);
    }

    pub fn is_true(&mut self, message: &str, value: bool) {
        self.report(message, Some(&value.to_string()), value);
    }

    pub fn is_false(&mut self, message: &str, value: bool) {
        self.report(message, Some(&value.to_string()), !value);
    }

    pub fn is_some<T: Debug>(&mut self, message: &str, value: &Option<T>) {
        let detail = format!("{value:?}");
        self.report(message, Some(&detail), value.is_some());
    }

    pub fn is_none<T: Debug>(&mut self, message: &str, value: &Option<T>) {
        let detail = format!("{value:?}");
        self.report(message, Some(&detail), value.is_none());
    }

    // ---- internals ----

    fn symmetric<T: Display + ?Sized>(
        &mut self,
        message: &str,
        cmp: Comparison,
        lhs: &T,
        rhs: &T,
        outcome: bool,
    ) {
        let detail = format!("{lhs} {} {rhs}", cmp.symbol());
        self.report(message, Some(&detail), outcome);
    }

    /// Ordered helpers decide from the sign of the three-way comparison, not
    /// from the built-in operators.
    fn ordered<T: Ord + Display>(&mut self, message: &str, cmp: Comparison, lhs: T, rhs: T) {
        let outcome = cmp.holds(lhs.cmp(&rhs));
        self.symmetric(message, cmp, &lhs, &rhs, outcome);
    }

    fn approximate<F: Tolerance>(
        &mut self,
        message: &str,
        cmp: Comparison,
        lhs: F,
        rhs: F,
        margin: F,
        outcome: bool,
    ) {
        let detail = format!("{lhs} {} {rhs} ± {margin}", cmp.symbol());
        self.report(message, Some(&detail), outcome);
    }

    /// Every helper funnels through here: scope headers, description line,
    /// result marker, then the sink. Output is flushed before the sink runs
    /// so the FAILED line survives a sink that aborts the test case.
    fn report(&mut self, message: &str, detail: Option<&str>, outcome: bool) {
        self.scope.emit(&mut self.out);
        match detail {
            Some(detail) => writeln!(self.out, "\t\t{message}: {detail}").ok(),
            None => writeln!(self.out, "\t\t{message}").ok(),
        };
        if outcome {
            writeln!(self.out, "\t\t\t✓ PASSED").ok();
        } else {
            writeln!(self.out, "\t\t\t✗ FAILED").ok();
        }
        self.out.flush().ok();
        tracing::debug!(%message, outcome, "comparison evaluated");
        self.sink.assert(outcome, message);
    }
}

fn digest<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
