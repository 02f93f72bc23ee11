use crate::error::{RuleError, RuleResult};
use crate::key::MatchKey;
use crate::name;
use crate::rule::{Clause, MessageType};
use crate::token::Element;

/// Maximum number of bytes permitted in a quoted value interior.
///
/// Values beyond the ceiling are rejected outright as
/// [`RuleError::ValueTooLong`], never truncated.
pub const MAX_VALUE_LEN: usize = 256;

/// Validates an element's value against the syntax for its key, producing a
/// typed clause ready for the builder.
///
/// Every value is wrapped in single quotes except the boolean literal for
/// `eavesdrop`. The quoted interior must be non-empty, free of embedded
/// quotes, and at most [`MAX_VALUE_LEN`] bytes. Numbered argument values are
/// accepted verbatim after quote removal; the bus compares them opaquely, so
/// no further constraint applies.
pub(crate) fn validate(key: &MatchKey, element: &Element<'_>) -> RuleResult<Clause> {
    match key {
        MatchKey::Type => {
            let interior = unquote(element)?;
            MessageType::from_keyword(interior)
                .map(Clause::Type)
                .ok_or_else(|| invalid(element))
        }
        MatchKey::Sender => {
            let interior = unquote(element)?;
            name::classify_bus_name(interior)
                .map(Clause::Sender)
                .ok_or_else(|| invalid(element))
        }
        MatchKey::Interface => {
            let interior = unquote(element)?;
            if name::is_interface_name(interior) {
                Ok(Clause::Interface(interior.to_owned()))
            } else {
                Err(invalid(element))
            }
        }
        MatchKey::Member => {
            let interior = unquote(element)?;
            if name::is_member_name(interior) {
                Ok(Clause::Member(interior.to_owned()))
            } else {
                Err(invalid(element))
            }
        }
        MatchKey::Path => {
            let interior = unquote(element)?;
            if name::is_object_path(interior) {
                Ok(Clause::Path(interior.to_owned()))
            } else {
                Err(invalid(element))
            }
        }
        MatchKey::PathNamespace => {
            let interior = unquote(element)?;
            if name::is_object_path(interior) {
                Ok(Clause::PathNamespace(interior.to_owned()))
            } else {
                Err(invalid(element))
            }
        }
        MatchKey::Destination => {
            let interior = unquote(element)?;
            if name::is_unique_name(interior) {
                Ok(Clause::Destination(interior.to_owned()))
            } else {
                Err(invalid(element))
            }
        }
        MatchKey::Eavesdrop => match element.value {
            "true" => Ok(Clause::Eavesdrop(true)),
            "false" => Ok(Clause::Eavesdrop(false)),
            _ => Err(invalid(element)),
        },
        MatchKey::Arg(index) => {
            let interior = unquote(element)?;
            Ok(Clause::Arg(*index, interior.to_owned()))
        }
        MatchKey::ArgPath(index) => {
            let interior = unquote(element)?;
            Ok(Clause::ArgPath(*index, interior.to_owned()))
        }
    }
}

/// Strips the single-quote wrapping from an element value.
///
/// The value must be exactly `'interior'`: leading and trailing quote, a
/// non-empty interior with no embedded quote, and an interior within the
/// [`MAX_VALUE_LEN`] ceiling.
fn unquote<'a>(element: &Element<'a>) -> RuleResult<&'a str> {
    let interior = element
        .value
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .ok_or_else(|| invalid(element))?;
    if interior.is_empty() || interior.contains('\'') {
        return Err(invalid(element));
    }
    if interior.len() > MAX_VALUE_LEN {
        return Err(RuleError::ValueTooLong {
            key: element.key.to_owned(),
            len: interior.len(),
        });
    }
    Ok(interior)
}

fn invalid(element: &Element<'_>) -> RuleError {
    RuleError::InvalidValueSyntax {
        key: element.key.to_owned(),
        value: element.value.to_owned(),
    }
}
