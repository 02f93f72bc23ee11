use std::fmt;

use crate::error::{RuleError, RuleResult};

/// Highest argument index addressable by `arg<N>` and `arg<N>path` keys.
///
/// The bus caps messages at 64 matchable arguments, so `arg64` is rejected
/// by range even though it matches the numbered-key shape.
pub const MAX_ARG_INDEX: u8 = 63;

/// A validated match-rule key.
///
/// The vocabulary is closed: eight fixed keys plus the two numbered families
/// carrying an index in `0..=`[`MAX_ARG_INDEX`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MatchKey {
    /// `type` -- message type selector.
    Type,
    /// `sender` -- originating bus name.
    Sender,
    /// `interface` -- interface the member belongs to.
    Interface,
    /// `member` -- method or signal name.
    Member,
    /// `path` -- object path the message was sent to or from.
    Path,
    /// `path_namespace` -- object path prefix.
    PathNamespace,
    /// `destination` -- unique connection name of the addressee.
    Destination,
    /// `eavesdrop` -- request delivery of messages addressed elsewhere.
    Eavesdrop,
    /// `arg<N>` -- string comparison against message argument `N`.
    Arg(u8),
    /// `arg<N>path` -- path-style comparison against message argument `N`.
    ArgPath(u8),
}

impl MatchKey {
    /// Parses and validates a raw key token.
    ///
    /// Numbered keys are matched by shape first: a token shaped like
    /// `arg<digits>` or `arg<digits>path` whose index falls outside `0..64`
    /// fails with [`RuleError::IndexOutOfRange`], not
    /// [`RuleError::UnknownKey`]. Everything outside the vocabulary fails
    /// with [`RuleError::UnknownKey`].
    pub fn parse(key: &str) -> RuleResult<Self> {
        match key {
            "type" => Ok(Self::Type),
            "sender" => Ok(Self::Sender),
            "interface" => Ok(Self::Interface),
            "member" => Ok(Self::Member),
            "path" => Ok(Self::Path),
            "path_namespace" => Ok(Self::PathNamespace),
            "destination" => Ok(Self::Destination),
            "eavesdrop" => Ok(Self::Eavesdrop),
            _ => Self::parse_numbered(key),
        }
    }

    /// Parses the `arg<N>` / `arg<N>path` families.
    fn parse_numbered(key: &str) -> RuleResult<Self> {
        let Some(rest) = key.strip_prefix("arg") else {
            return Err(RuleError::UnknownKey(key.to_owned()));
        };
        let (digits, is_path) = match rest.strip_suffix("path") {
            Some(digits) => (digits, true),
            None => (rest, false),
        };
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(RuleError::UnknownKey(key.to_owned()));
        }

        // Overflow of u32 can only mean the index is far out of range.
        let index = digits.parse::<u32>().unwrap_or(u32::MAX);
        match u8::try_from(index) {
            Ok(small) if small <= MAX_ARG_INDEX => Ok(if is_path {
                Self::ArgPath(small)
            } else {
                Self::Arg(small)
            }),
            _ => Err(RuleError::IndexOutOfRange {
                key: key.to_owned(),
                index,
            }),
        }
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type => f.write_str("type"),
            Self::Sender => f.write_str("sender"),
            Self::Interface => f.write_str("interface"),
            Self::Member => f.write_str("member"),
            Self::Path => f.write_str("path"),
            Self::PathNamespace => f.write_str("path_namespace"),
            Self::Destination => f.write_str("destination"),
            Self::Eavesdrop => f.write_str("eavesdrop"),
            Self::Arg(index) => write!(f, "arg{index}"),
            Self::ArgPath(index) => write!(f, "arg{index}path"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_keys_parse() {
        let cases = [
            ("type", MatchKey::Type),
            ("sender", MatchKey::Sender),
            ("interface", MatchKey::Interface),
            ("member", MatchKey::Member),
            ("path", MatchKey::Path),
            ("path_namespace", MatchKey::PathNamespace),
            ("destination", MatchKey::Destination),
            ("eavesdrop", MatchKey::Eavesdrop),
        ];

        for (token, expected) in cases {
            assert_eq!(MatchKey::parse(token), Ok(expected), "key {token}");
        }
    }

    #[test]
    fn numbered_keys_parse_within_range() {
        assert_eq!(MatchKey::parse("arg0"), Ok(MatchKey::Arg(0)));
        assert_eq!(MatchKey::parse("arg63"), Ok(MatchKey::Arg(63)));
        assert_eq!(MatchKey::parse("arg0path"), Ok(MatchKey::ArgPath(0)));
        assert_eq!(MatchKey::parse("arg63path"), Ok(MatchKey::ArgPath(63)));
    }

    #[test]
    fn numbered_keys_out_of_range_fail_by_range() {
        assert_eq!(
            MatchKey::parse("arg64"),
            Err(RuleError::IndexOutOfRange {
                key: "arg64".to_owned(),
                index: 64,
            })
        );
        assert_eq!(
            MatchKey::parse("arg1000"),
            Err(RuleError::IndexOutOfRange {
                key: "arg1000".to_owned(),
                index: 1000,
            })
        );
        assert!(matches!(
            MatchKey::parse("arg64path"),
            Err(RuleError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn leading_zeros_parse_as_decimal() {
        assert_eq!(MatchKey::parse("arg007"), Ok(MatchKey::Arg(7)));
    }

    #[test]
    fn malformed_numbered_keys_are_unknown() {
        for token in ["arg", "argpath", "argx", "arg1x", "arg1pathx", "arg-1"] {
            assert_eq!(
                MatchKey::parse(token),
                Err(RuleError::UnknownKey(token.to_owned())),
                "key {token}"
            );
        }
    }

    #[test]
    fn unknown_keys_rejected() {
        for token in ["", "typ", "TYPE", "Sender", "path-namespace"] {
            assert!(matches!(
                MatchKey::parse(token),
                Err(RuleError::UnknownKey(_))
            ));
        }
    }

    #[test]
    fn display_round_trips_canonical_spelling() {
        let cases = [
            (MatchKey::Type, "type"),
            (MatchKey::PathNamespace, "path_namespace"),
            (MatchKey::Arg(5), "arg5"),
            (MatchKey::ArgPath(63), "arg63path"),
        ];

        for (key, expected) in cases {
            assert_eq!(key.to_string(), expected);
        }
    }
}
