use crate::errors::{AssertionFailed, Result};

/// The underlying assertion primitive every helper forwards its boolean
/// outcome to. `true` must be observably silent; `false` is the sink's to
/// turn into a failure signal. Helpers never catch whatever the sink raises.
pub trait AssertSink {
    fn assert(&mut self, outcome: bool, message: &str);
}

/// Default sink: panics with the failure rendering, aborting the current
/// test case exactly like `assert!`. The PASSED/FAILED line is already on
/// the console by the time this fires, so diagnostics survive the abort.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicSink;

impl AssertSink for PanicSink {
    fn assert(&mut self, outcome: bool, message: &str) {
        if !outcome {
            panic!("{}", AssertionFailed::new(message));
        }
    }
}

/// A sink that records failures instead of raising, for callers that prefer
/// `Result` (the CLI runner) or want to inspect outcomes (tests).
#[derive(Debug, Clone, Default)]
pub struct CollectSink {
    checks: usize,
    failures: Vec<AssertionFailed>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of outcomes seen, passing or failing.
    pub fn checks(&self) -> usize {
        self.checks
    }

    pub fn failures(&self) -> &[AssertionFailed] {
        &self.failures
    }

    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Ok when every forwarded outcome was true, else the first failure.
    pub fn into_result(mut self) -> Result<()> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(self.failures.remove(0))
        }
    }
}

impl AssertSink for CollectSink {
    fn assert(&mut self, outcome: bool, message: &str) {
        self.checks += 1;
        if !outcome {
            self.failures.push(AssertionFailed::new(message));
        }
    }
}
