use core::ffi::c_int;
use core::fmt;

pub mod config;
pub mod harness;
mod runner;
pub mod suite_masks;

pub use config::{config_from_cmdline, TestConfig, Verbosity};
pub use harness::{
    SuiteRunnerFn, TestRunSummary, TestSuiteDesc, TestSuiteResult, HARNESS_MAX_SUITES,
};
pub use runner::run_single_test;
pub use suite_masks::*;

/// Result of a single test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    Fail,
    /// Test did not run (e.g. the target lacks the memory it needs)
    Skipped,
}

impl TestResult {
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Fail)
    }

    /// Convert from C-style return code (0 = pass, non-zero = fail).
    #[inline]
    pub fn from_c_int(val: c_int) -> Self {
        if val == 0 { Self::Pass } else { Self::Fail }
    }

    /// Convert to C-style return code (0 = pass, -1 = fail).
    #[inline]
    pub fn to_c_int(self) -> c_int {
        match self {
            Self::Pass | Self::Skipped => 0,
            Self::Fail => -1,
        }
    }
}

impl From<i32> for TestResult {
    fn from(val: i32) -> Self {
        Self::from_c_int(val as c_int)
    }
}

impl From<TestResult> for c_int {
    fn from(val: TestResult) -> Self {
        val.to_c_int()
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pass => "pass",
            Self::Fail => "FAIL",
            Self::Skipped => "skipped",
        })
    }
}

/// Return a passing test result.
#[macro_export]
macro_rules! pass {
    () => {
        $crate::testing::TestResult::Pass
    };
}

/// Return a failing test result with optional message.
///
/// # Example
/// ```ignore
/// if dest != [1, 2, 3] {
///     return fail!("copy wrote {:?}", dest);
/// }
/// ```
#[macro_export]
macro_rules! fail {
    () => {
        $crate::testing::TestResult::Fail
    };
    ($msg:expr) => {{
        $crate::klog_info!("TEST FAIL: {}", $msg);
        $crate::testing::TestResult::Fail
    }};
    ($fmt:expr, $($arg:tt)*) => {{
        $crate::klog_info!(concat!("TEST FAIL: ", $fmt), $($arg)*);
        $crate::testing::TestResult::Fail
    }};
}

/// Run a single test through `run_single_test`.
///
/// ```ignore
/// run_test!(test_function)
/// run_test!(test_function, Verbosity::Verbose)
///
/// // Accumulating results (for suite runners)
/// run_test!(passed, total, test_function, config.verbosity)
/// ```
#[macro_export]
macro_rules! run_test {
    ($passed:expr, $total:expr, $test_fn:expr, $verbosity:expr) => {{
        $total += 1;
        let result = $crate::testing::run_single_test(
            stringify!($test_fn),
            || $test_fn().into(),
            $verbosity,
        );
        if result.is_pass() {
            $passed += 1;
        }
        result
    }};

    ($test_fn:expr, $verbosity:expr) => {{
        $crate::testing::run_single_test(stringify!($test_fn), || $test_fn().into(), $verbosity)
    }};

    ($test_fn:expr) => {{
        $crate::testing::run_single_test(
            stringify!($test_fn),
            || $test_fn().into(),
            $crate::testing::Verbosity::Summary,
        )
    }};
}

/// Define a test suite and its static `TestSuiteDesc`.
///
/// Generates `run_<name>_suite` and `<NAME>_SUITE_DESC`:
///
/// ```ignore
/// define_test_suite!(aeabi_move, SUITE_MOVE, [
///     test_move_shift_left,
///     test_move_shift_right,
/// ]);
/// ```
#[macro_export]
macro_rules! define_test_suite {
    ($suite_name:ident, $mask:expr, [$($test_fn:path),* $(,)?]) => {
        $crate::paste::paste! {
            fn [<run_ $suite_name _suite>](
                config: &$crate::testing::TestConfig,
                out: &mut $crate::testing::TestSuiteResult,
            ) -> $crate::testing::TestResult {
                let mut passed = 0u32;
                let mut total = 0u32;

                $(
                    $crate::run_test!(passed, total, $test_fn, config.verbosity);
                )*

                out.fill(passed, total);
                if passed == total {
                    $crate::testing::TestResult::Pass
                } else {
                    $crate::testing::TestResult::Fail
                }
            }

            pub static [<$suite_name:upper _SUITE_DESC>]: $crate::testing::TestSuiteDesc =
                $crate::testing::TestSuiteDesc {
                    name: stringify!($suite_name),
                    mask: $mask,
                    run: [<run_ $suite_name _suite>],
                };
        }
    };
}

/// Register multiple test suites with the harness in one call.
#[macro_export]
macro_rules! register_test_suites {
    ($register_fn:path, $($suite_desc:expr),* $(,)?) => {
        $(
            let _ = $register_fn(&$suite_desc);
        )*
    };
}
