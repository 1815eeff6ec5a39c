use std::io::Write;

/// Remembers which (group, case) headers have already been printed so each
/// transition announces itself exactly once.
///
/// The caller declares scope explicitly through [`crate::Tester::scope`];
/// there is no stack inspection and no global state. Both printed fields
/// start empty, which no real identifier equals, so the first declared scope
/// always emits both headers.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScopeMarker {
    group: String,
    case: String,
    printed_group: String,
    printed_case: String,
}

impl ScopeMarker {
    pub(crate) fn set(&mut self, group: &str, case: &str) {
        self.group.clear();
        self.group.push_str(group);
        self.case.clear();
        self.case.push_str(case);
    }

    /// Emit headers for any pending transition. Group and case are compared
    /// independently, each against the last value actually printed.
    pub(crate) fn emit<W: Write>(&mut self, out: &mut W) {
        if self.group != self.printed_group {
            self.printed_group.clone_from(&self.group);
            tracing::trace!(group = %self.group, "entering test group");
            writeln!(out, "Starting tests for {}", self.group).ok();
        }
        if self.case != self.printed_case {
            self.printed_case.clone_from(&self.case);
            tracing::trace!(case = %self.case, "entering test case");
            writeln!(out, "\t{}", self.case).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rendered(marker: &mut ScopeMarker) -> String {
        let mut buf = Vec::new();
        marker.emit(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn first_scope_prints_both_headers() {
        let mut marker = ScopeMarker::default();
        marker.set("suite", "case_one");
        assert_eq!(rendered(&mut marker), "Starting tests for suite\n\tcase_one\n");
    }

    #[test]
    fn unchanged_scope_prints_nothing() {
        let mut marker = ScopeMarker::default();
        marker.set("suite", "case_one");
        rendered(&mut marker);
        assert_eq!(rendered(&mut marker), "");
    }

    #[test]
    fn case_change_prints_only_case_header() {
        let mut marker = ScopeMarker::default();
        marker.set("suite", "case_one");
        rendered(&mut marker);
        marker.set("suite", "case_two");
        assert_eq!(rendered(&mut marker), "\tcase_two\n");
    }

    #[test]
    fn undeclared_scope_is_silent() {
        let mut marker = ScopeMarker::default();
        assert_eq!(rendered(&mut marker), "");
    }
}
