//! Test harness types shared by the suite runners.
//!
//! - `TestSuiteResult`: per-suite counts
//! - `TestSuiteDesc`: static descriptor for a suite (name, mask, runner)
//! - `TestRunSummary`: aggregated results across all suites
//!
//! Suites are normally declared with `define_test_suite!` rather than by
//! building a `TestSuiteDesc` by hand:
//!
//! ```ignore
//! define_test_suite!(aeabi_copy, SUITE_COPY, [
//!     test_copy_prefix,
//!     test_copy_zero_length,
//! ]);
//! ```

use super::config::TestConfig;
use super::suite_masks::SuiteMask;
use super::TestResult;

/// Maximum number of test suites a summary can hold.
pub const HARNESS_MAX_SUITES: usize = 16;

/// Result of executing a single test suite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestSuiteResult {
    pub name: &'static str,
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
}

impl TestSuiteResult {
    /// Create a new result with just the suite name set.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            total: 0,
            passed: 0,
            failed: 0,
        }
    }

    pub fn fill(&mut self, passed: u32, total: u32) {
        self.total = total;
        self.passed = passed;
        self.failed = total.saturating_sub(passed);
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

pub type SuiteRunnerFn = fn(&TestConfig, &mut TestSuiteResult) -> TestResult;

/// Static descriptor for a test suite, created by `define_test_suite!`.
#[derive(Clone, Copy)]
pub struct TestSuiteDesc {
    pub name: &'static str,
    pub mask: SuiteMask,
    pub run: SuiteRunnerFn,
}

/// Aggregated results from running all selected suites.
#[derive(Clone, Copy, Debug, Default)]
pub struct TestRunSummary {
    pub suites: [TestSuiteResult; HARNESS_MAX_SUITES],
    pub suite_count: usize,
    pub total_tests: u32,
    pub passed: u32,
    pub failed: u32,
}

impl TestRunSummary {
    /// Record one suite's results; the per-suite slot is dropped once
    /// `HARNESS_MAX_SUITES` is reached but the totals still count it.
    pub fn add_suite_result(&mut self, result: &TestSuiteResult) {
        if self.suite_count < HARNESS_MAX_SUITES {
            self.suites[self.suite_count] = *result;
            self.suite_count += 1;
        }
        self.total_tests = self.total_tests.saturating_add(result.total);
        self.passed = self.passed.saturating_add(result.passed);
        self.failed = self.failed.saturating_add(result.failed);
    }

    pub fn suites(&self) -> &[TestSuiteResult] {
        &self.suites[..self.suite_count]
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
