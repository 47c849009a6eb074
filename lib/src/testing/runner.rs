use super::config::Verbosity;
use super::TestResult;

/// Run one test and report it according to `verbosity`.
///
/// There is no unwinding in a freestanding image, so a panicking test takes
/// the whole run down with it.
pub fn run_single_test(name: &str, test_fn: fn() -> TestResult, verbosity: Verbosity) -> TestResult {
    let result = test_fn();
    match verbosity {
        Verbosity::Verbose => crate::klog_info!("TEST {}: {}", name, result),
        Verbosity::Summary if result.is_failure() => crate::klog_info!("TEST {}: {}", name, result),
        _ => {}
    }
    result
}
