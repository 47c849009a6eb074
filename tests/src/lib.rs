#![no_std]

#[cfg(test)]
extern crate std;

use aeabi_compat::testing::{
    TestConfig, TestResult, TestRunSummary, TestSuiteDesc, TestSuiteResult,
};
use aeabi_compat::{klog_debug, klog_info, klog_set_level, klog_warn};
use spin::Mutex;


pub const TESTS_MAX_SUITES: usize = aeabi_compat::testing::HARNESS_MAX_SUITES;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// `TESTS_MAX_SUITES` suites are already registered.
    Full,
    /// A suite with the same name is already registered.
    Duplicate,
}

struct Registry {
    suites: [Option<&'static TestSuiteDesc>; TESTS_MAX_SUITES],
    count: usize,
}

impl Registry {
    const fn new() -> Self {
        Self {
            suites: [None; TESTS_MAX_SUITES],
            count: 0,
        }
    }

    fn iter(&self) -> impl Iterator<Item = &'static TestSuiteDesc> + '_ {
        self.suites[..self.count].iter().flatten().copied()
    }
}

static REGISTRY: Mutex<Registry> = Mutex::new(Registry::new());

pub fn tests_reset_registry() {
    *REGISTRY.lock() = Registry::new();
}

pub fn tests_register_suite(desc: &'static TestSuiteDesc) -> Result<(), RegistryError> {
    let mut registry = REGISTRY.lock();
    if registry.iter().any(|d| d.name == desc.name) {
        return Err(RegistryError::Duplicate);
    }
    if registry.count >= TESTS_MAX_SUITES {
        return Err(RegistryError::Full);
    }
    let slot = registry.count;
    registry.suites[slot] = Some(desc);
    registry.count += 1;
    Ok(())
}

pub fn tests_registered_count() -> usize {
    REGISTRY.lock().count
}

/// Register every memory suite; suites that are already present are skipped.
pub fn tests_register_memory_suites() {
    suites::register_memory_suites();
}

/// Run every registered suite selected by `config.suite_mask`.
///
/// `summary` is reset first and then filled with the per-suite results.
pub fn tests_run_all(config: &TestConfig, summary: &mut TestRunSummary) -> TestResult {
    *summary = TestRunSummary::default();

    if !config.enabled {
        klog_info!("MEMTESTS: Harness disabled");
        return TestResult::Skipped;
    }
    klog_set_level(config.log_level);
    klog_info!(
        "MEMTESTS: Starting suites={} verbosity={}",
        config.suite_mask.name(),
        config.verbosity
    );

    // Copy the descriptors out so a suite can never run under the lock.
    let mut desc_list: [Option<&'static TestSuiteDesc>; TESTS_MAX_SUITES] =
        [None; TESTS_MAX_SUITES];
    for (slot, desc) in desc_list.iter_mut().zip(REGISTRY.lock().iter()) {
        *slot = Some(desc);
    }

    for (idx, desc) in desc_list.iter().flatten().enumerate() {
        if !config.suite_mask.intersects(desc.mask) {
            klog_debug!("SUITE{} {} skipped by mask", idx, desc.name);
            continue;
        }

        let mut res = TestSuiteResult::new(desc.name);
        let _ = (desc.run)(config, &mut res);

        if res.all_passed() {
            klog_info!(
                "SUITE{} {} total={} pass={} fail={}",
                idx,
                res.name,
                res.total,
                res.passed,
                res.failed
            );
        } else {
            klog_warn!(
                "SUITE{} {} total={} pass={} fail={}",
                idx,
                res.name,
                res.total,
                res.passed,
                res.failed
            );
        }
        summary.add_suite_result(&res);
    }

    klog_info!(
        "MEMTESTS SUMMARY: total={} passed={} failed={}",
        summary.total_tests,
        summary.passed,
        summary.failed
    );

    if summary.all_passed() {
        TestResult::Pass
    } else {
        TestResult::Fail
    }
}

mod suites {
    use aeabi_compat::define_test_suite;
    use aeabi_compat::testing::{SUITE_CLEAR, SUITE_COPY, SUITE_HINTS, SUITE_MOVE, SUITE_SET};

    use super::tests_register_suite;
    use crate::memory_tests::*;

    define_test_suite!(aeabi_copy, SUITE_COPY, [
        test_copy_prefix,
        test_copy_zero_length,
        test_copy_every_length_in_bounds,
    ]);

    define_test_suite!(aeabi_move, SUITE_MOVE, [
        test_move_shift_left,
        test_move_shift_right,
        test_move_same_address,
        test_move_disjoint_regions,
        test_move_every_overlap,
    ]);

    define_test_suite!(aeabi_clear, SUITE_CLEAR, [
        test_clear_whole,
        test_clear_prefix_in_bounds,
    ]);

    define_test_suite!(aeabi_set, SUITE_SET, [
        test_set_prefix,
        test_set_truncates_value,
        test_set_zero_length,
    ]);

    define_test_suite!(aeabi_hints, SUITE_HINTS, [
        test_hinted_copy_matches_base,
        test_hinted_move_matches_base,
        test_hinted_fill_matches_base,
    ]);

    pub(super) fn register_memory_suites() {
        aeabi_compat::register_test_suites!(
            tests_register_suite,
            AEABI_COPY_SUITE_DESC,
            AEABI_MOVE_SUITE_DESC,
            AEABI_CLEAR_SUITE_DESC,
            AEABI_SET_SUITE_DESC,
            AEABI_HINTS_SUITE_DESC,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeabi_compat::testing::{config_from_cmdline, SuiteMask, Verbosity, SUITE_ALL};
    use std::io::Write;

    // The registry is global; tests that touch it run one at a time.
    static REGISTRY_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn stdout_sink(bytes: &[u8]) {
        let _ = std::io::stdout().write_all(bytes);
    }

    fn run(config: &TestConfig) -> (TestResult, TestRunSummary) {
        aeabi_compat::klog_attach_sink(stdout_sink);
        tests_register_memory_suites();
        let mut summary = TestRunSummary::default();
        let result = tests_run_all(config, &mut summary);
        (result, summary)
    }

    fn idle_suite(_: &TestConfig, _: &mut TestSuiteResult) -> TestResult {
        TestResult::Pass
    }

    const fn idle(name: &'static str) -> TestSuiteDesc {
        TestSuiteDesc {
            name,
            mask: SuiteMask::empty(),
            run: idle_suite,
        }
    }

    static IDLE_SUITES: [TestSuiteDesc; TESTS_MAX_SUITES] = [
        idle("idle0"),
        idle("idle1"),
        idle("idle2"),
        idle("idle3"),
        idle("idle4"),
        idle("idle5"),
        idle("idle6"),
        idle("idle7"),
        idle("idle8"),
        idle("idle9"),
        idle("idle10"),
        idle("idle11"),
        idle("idle12"),
        idle("idle13"),
        idle("idle14"),
        idle("idle15"),
    ];
    static ONE_TOO_MANY: TestSuiteDesc = idle("idle_extra");

    #[test]
    fn all_memory_suites_pass() {
        let _registry = REGISTRY_TEST_LOCK.lock();
        let config = TestConfig {
            verbosity: Verbosity::Verbose,
            ..TestConfig::enabled_with(SUITE_ALL)
        };
        let (result, summary) = run(&config);

        assert_eq!(result, TestResult::Pass);
        assert_eq!(summary.suite_count, 5);
        assert_eq!(summary.total_tests, 16);
        assert_eq!(summary.failed, 0);
        assert!(summary.suites().iter().all(|s| s.all_passed()));
    }

    #[test]
    fn cmdline_selects_suites() {
        let _registry = REGISTRY_TEST_LOCK.lock();
        let config = config_from_cmdline("memtests=move+set memtests.verbosity=quiet");
        let (result, summary) = run(&config);

        assert_eq!(result, TestResult::Pass);
        let names: std::vec::Vec<&str> = summary.suites().iter().map(|s| s.name).collect();
        assert_eq!(names, ["aeabi_move", "aeabi_set"]);
        assert_eq!(summary.total_tests, 8);
    }

    #[test]
    fn disabled_config_runs_nothing() {
        let _registry = REGISTRY_TEST_LOCK.lock();
        let (result, summary) = run(&config_from_cmdline("memtests=off"));
        assert_eq!(result, TestResult::Skipped);
        assert_eq!(summary.suite_count, 0);
    }

    #[test]
    fn registration_rejects_duplicates() {
        let _registry = REGISTRY_TEST_LOCK.lock();
        tests_register_memory_suites();
        assert_eq!(tests_registered_count(), 5);
        assert_eq!(
            tests_register_suite(&suites::AEABI_COPY_SUITE_DESC),
            Err(RegistryError::Duplicate)
        );
        assert_eq!(tests_registered_count(), 5);
    }

    #[test]
    fn registration_stops_at_capacity() {
        let _registry = REGISTRY_TEST_LOCK.lock();
        tests_reset_registry();
        assert_eq!(tests_registered_count(), 0);

        for desc in &IDLE_SUITES {
            assert_eq!(tests_register_suite(desc), Ok(()));
        }
        assert_eq!(tests_registered_count(), TESTS_MAX_SUITES);

        assert_eq!(tests_register_suite(&ONE_TOO_MANY), Err(RegistryError::Full));
        assert_eq!(
            tests_register_suite(&IDLE_SUITES[3]),
            Err(RegistryError::Duplicate)
        );
        assert_eq!(tests_registered_count(), TESTS_MAX_SUITES);

        tests_reset_registry();
        tests_register_memory_suites();
        assert_eq!(tests_registered_count(), 5);
    }
}
