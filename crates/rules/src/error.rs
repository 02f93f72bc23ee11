use thiserror::Error;

use crate::value::MAX_VALUE_LEN;

/// Result type for match-rule parsing operations.
pub type RuleResult<T> = Result<T, RuleError>;

/// Errors produced while validating a match rule.
///
/// Every variant names the offending element, key, or value so callers can
/// report which part of the rule was rejected. All variants are recoverable:
/// the parser discards the partially built rule and returns, it never aborts
/// the process.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    /// The rule string contained no elements.
    #[error("match rule is empty")]
    EmptyRule,

    /// An element was empty, lacked an `=` separator, or had an empty value.
    #[error("malformed element '{0}' in match rule")]
    MalformedElement(String),

    /// The key is not part of the match-rule vocabulary.
    #[error("unknown match key '{0}'")]
    UnknownKey(String),

    /// The value does not satisfy the key-specific syntax.
    #[error("invalid value '{value}' for match key '{key}'")]
    InvalidValueSyntax {
        /// The key whose value failed validation, as written in the rule.
        key: String,
        /// The rejected value, as written in the rule.
        value: String,
    },

    /// A numbered argument key referenced an index outside `0..64`.
    #[error("argument index {index} in match key '{key}' is out of range (0..64)")]
    IndexOutOfRange {
        /// The offending key, as written in the rule.
        key: String,
        /// The parsed index.
        index: u32,
    },

    /// A quoted value interior exceeded [`MAX_VALUE_LEN`] bytes.
    #[error("value for match key '{key}' is {len} bytes long (limit {MAX_VALUE_LEN})")]
    ValueTooLong {
        /// The key whose value overflowed the ceiling.
        key: String,
        /// The interior length in bytes.
        len: usize,
    },
}
