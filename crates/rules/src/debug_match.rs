//! MATCH tracing for rule-parsing decisions.
//!
//! Structured tracing for the parser pipeline, mirroring the daemon's match
//! debug category. All tracing is conditionally compiled behind the
//! `tracing` feature flag and produces no-op inline functions when disabled,
//! so the parser stays dependency-free by default.

use std::fmt;

/// Target name for tracing events, matching the daemon's debug category.
#[cfg(feature = "tracing")]
const MATCH_TARGET: &str = "dbus::match";

/// Traces a validated clause being applied to the rule under construction.
///
/// # Arguments
///
/// * `key` - The clause key as written in the rule (e.g. `arg0`)
/// * `value` - The clause value as written, quoting included
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_clause_applied(key: &str, value: &str) {
    tracing::trace!(
        target: MATCH_TARGET,
        key = %key,
        value = %value,
        "clause_applied"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_clause_applied(_key: &str, _value: &str) {}

/// Traces acceptance of a complete rule.
///
/// # Arguments
///
/// * `rule` - The full rule text
/// * `clauses` - Number of elements the rule contained
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_rule_accepted(rule: &str, clauses: usize) {
    tracing::debug!(
        target: MATCH_TARGET,
        rule = %rule,
        clauses = clauses,
        "rule_accepted"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_rule_accepted(_rule: &str, _clauses: usize) {}

/// Traces rejection of a rule, including the failure that stopped parsing.
///
/// # Arguments
///
/// * `rule` - The full rule text
/// * `reason` - The error that terminated the pipeline
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_rule_rejected(rule: &str, reason: &dyn fmt::Display) {
    tracing::debug!(
        target: MATCH_TARGET,
        rule = %rule,
        reason = %reason,
        "rule_rejected"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_rule_rejected(_rule: &str, _reason: &dyn fmt::Display) {}
