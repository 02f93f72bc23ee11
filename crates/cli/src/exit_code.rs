//! Centralized exit code definitions for the match-rule tool.
//!
//! All entry points map parser outcomes through the [`ExitCode`] enum so the
//! binary's contract with callers stays in one place: `0` for an accepted
//! rule, `1` for usage and validation failures, `2` for an empty rule
//! string.

use std::fmt;

use rules::RuleError;

/// Exit codes returned by the `oc-dbus-match` binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// The rule parsed and validated successfully.
    Ok = 0,

    /// Usage error or rule validation failure.
    Syntax = 1,

    /// The supplied rule string was empty.
    EmptyRule = 2,
}

impl ExitCode {
    /// Returns the exit code as an `i32` for process status reporting.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Converts a numeric status back into a typed exit code, if known.
    #[must_use]
    pub const fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            1 => Some(Self::Syntax),
            2 => Some(Self::EmptyRule),
            _ => None,
        }
    }

    /// Maps a parser failure onto the exit code the binary reports for it.
    #[must_use]
    pub const fn from_error(error: &RuleError) -> Self {
        match error {
            RuleError::EmptyRule => Self::EmptyRule,
            _ => Self::Syntax,
        }
    }

    /// Returns a short human-readable description of the code.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "rule accepted",
            Self::Syntax => "usage or validation error",
            Self::EmptyRule => "empty rule",
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
