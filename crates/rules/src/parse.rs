//! Pipeline driver: tokenize, validate, build, report.

use crate::debug_match;
use crate::error::RuleResult;
use crate::key::MatchKey;
use crate::rule::{Clause, Rule};
use crate::token::{self, Element};
use crate::value;

/// Parses and validates a complete match rule string.
///
/// Drives every element through the tokenize, key-validation,
/// value-validation, and build stages in order. The first failing element
/// terminates the pipeline: the partially built rule is discarded and the
/// failure is returned, so callers never observe a partially valid [`Rule`].
/// A later clause for the same key overwrites an earlier one.
///
/// Parsing is a pure function of its input. There is no shared state, so
/// independent calls are safe from any number of threads without
/// coordination, and re-parsing the same text always yields an identical
/// rule.
///
/// # Errors
///
/// Returns the [`RuleError`](crate::RuleError) describing the first element
/// that failed tokenization, key validation, or value validation.
///
/// # Examples
///
/// ```
/// use rules::{parse, MessageType};
///
/// let rule = parse("type='signal',interface='org.freedesktop.DBus'")?;
/// assert_eq!(rule.message_type(), MessageType::Signal);
/// assert_eq!(rule.interface(), Some("org.freedesktop.DBus"));
///
/// assert!(parse("type='bogus'").is_err());
/// # Ok::<(), rules::RuleError>(())
/// ```
pub fn parse(input: &str) -> RuleResult<Rule> {
    match parse_rule(input) {
        Ok(rule) => Ok(rule),
        Err(error) => {
            debug_match::trace_rule_rejected(input, &error);
            Err(error)
        }
    }
}

fn parse_rule(input: &str) -> RuleResult<Rule> {
    let elements = token::tokenize(input)?;

    let mut rule = Rule::default();
    for element in &elements {
        rule.apply(parse_element(element)?);
        debug_match::trace_clause_applied(element.key, element.value);
    }

    debug_match::trace_rule_accepted(input, elements.len());
    Ok(rule)
}

/// Validates a single element into a typed clause.
fn parse_element(element: &Element<'_>) -> RuleResult<Clause> {
    let key = MatchKey::parse(element.key)?;
    value::validate(&key, element)
}
