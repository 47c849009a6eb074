//! Harness configuration parsed from a boot command line.
//!
//! Recognised tokens (everything else is ignored):
//!
//! - `memtests=on|off|<suites>`
//! - `memtests.suite=<suites>` where `<suites>` is `all`, `none` or names
//!   joined with `+` (`copy+move`)
//! - `memtests.verbosity=quiet|summary|verbose`
//! - `memtests.log=error|warn|info|debug|trace`

use core::fmt;

use super::suite_masks::SuiteMask;
use crate::klog::KlogLevel;

pub const MEMTESTS_DEFAULT_ENABLED: bool = false;
pub const MEMTESTS_DEFAULT_SUITE: SuiteMask = SuiteMask::ALL;
pub const MEMTESTS_DEFAULT_VERBOSITY: Verbosity = Verbosity::Summary;
pub const MEMTESTS_DEFAULT_LOG_LEVEL: KlogLevel = KlogLevel::Info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Summary,
    Verbose,
}

impl Verbosity {
    /// Unknown values fall back to `Summary`.
    pub fn from_name(value: &str) -> Self {
        if value.eq_ignore_ascii_case("quiet") {
            Verbosity::Quiet
        } else if value.eq_ignore_ascii_case("verbose") {
            Verbosity::Verbose
        } else {
            Verbosity::Summary
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Summary => "summary",
            Verbosity::Verbose => "verbose",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestConfig {
    pub enabled: bool,
    pub suite_mask: SuiteMask,
    pub verbosity: Verbosity,
    pub log_level: KlogLevel,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            enabled: MEMTESTS_DEFAULT_ENABLED,
            suite_mask: MEMTESTS_DEFAULT_SUITE,
            verbosity: MEMTESTS_DEFAULT_VERBOSITY,
            log_level: MEMTESTS_DEFAULT_LOG_LEVEL,
        }
    }
}

impl TestConfig {
    /// Enabled configuration running `suites`, everything else default.
    pub fn enabled_with(suites: SuiteMask) -> Self {
        Self {
            enabled: true,
            suite_mask: suites,
            ..Self::default()
        }
    }
}

fn apply_enable_token(config: &mut TestConfig, value: &str) {
    if value.eq_ignore_ascii_case("on")
        || value.eq_ignore_ascii_case("true")
        || value.eq_ignore_ascii_case("enabled")
    {
        config.enabled = true;
        return;
    }
    if value.eq_ignore_ascii_case("false") || value.eq_ignore_ascii_case("disabled") {
        config.enabled = false;
        return;
    }

    match SuiteMask::parse_suites(value) {
        Some(mask) if !mask.is_empty() => {
            config.enabled = true;
            config.suite_mask = mask;
        }
        Some(_) => {
            config.enabled = false;
            config.suite_mask = SuiteMask::empty();
        }
        None => {}
    }
}

fn process_token(config: &mut TestConfig, token: &str) {
    if let Some(value) = token.strip_prefix("memtests=") {
        apply_enable_token(config, value);
        return;
    }
    if let Some(value) = token.strip_prefix("memtests.suite=") {
        if let Some(mask) = SuiteMask::parse_suites(value) {
            config.suite_mask = mask;
            config.enabled = !mask.is_empty();
        }
        return;
    }
    if let Some(value) = token.strip_prefix("memtests.verbosity=") {
        config.verbosity = Verbosity::from_name(value);
        return;
    }
    if let Some(value) = token.strip_prefix("memtests.log=") {
        if let Some(level) = KlogLevel::from_name(value) {
            config.log_level = level;
        }
    }
}

/// Start from the defaults and apply every recognised token of `cmdline`.
pub fn config_from_cmdline(cmdline: &str) -> TestConfig {
    let mut config = TestConfig::default();
    for token in cmdline.split_whitespace() {
        process_token(&mut config, token);
    }
    config
}
