//! Bus-name, member-name, and object-path grammar checks.
//!
//! These predicates implement the published naming grammar the wire protocol
//! enforces: dotted bus names with a restricted element alphabet, interface
//! names without hyphens, member names without dots, and `/`-delimited
//! object paths. Length enforcement happens earlier, at value extraction.

use crate::rule::BusName;

/// Bytes allowed in a bus-name element (`[A-Za-z0-9_-]`).
fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-'
}

/// Bytes allowed in interface and member elements (`[A-Za-z0-9_]`).
fn is_member_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Validates a unique connection name such as `:1.42`.
///
/// Unique names start with `:`, contain at least one `.`, and are composed
/// of non-empty `.`-separated elements. Unlike well-known names, elements of
/// a unique name may begin with a digit (the bus assigns purely numeric
/// ones).
pub(crate) fn is_unique_name(name: &str) -> bool {
    let Some(rest) = name.strip_prefix(':') else {
        return false;
    };
    rest.contains('.')
        && rest
            .split('.')
            .all(|element| !element.is_empty() && element.bytes().all(is_name_byte))
}

/// Validates a well-known bus name such as `org.example.Service`.
///
/// Well-known names contain at least one `.`, must not begin with `.`, and
/// are composed of non-empty elements that do not begin with a digit.
pub(crate) fn is_well_known_name(name: &str) -> bool {
    name.contains('.')
        && name.split('.').all(|element| {
            element
                .as_bytes()
                .first()
                .is_some_and(|first| !first.is_ascii_digit())
                && element.bytes().all(is_name_byte)
        })
}

/// Classifies a bus name as unique or well-known, validating its grammar.
pub(crate) fn classify_bus_name(name: &str) -> Option<BusName> {
    if name.starts_with(':') {
        is_unique_name(name).then(|| BusName::Unique(name.to_owned()))
    } else {
        is_well_known_name(name).then(|| BusName::WellKnown(name.to_owned()))
    }
}

/// Validates an interface name such as `org.freedesktop.DBus`.
///
/// Interface names follow the well-known bus-name structure with a narrower
/// element alphabet: no hyphen anywhere.
pub(crate) fn is_interface_name(name: &str) -> bool {
    name.contains('.')
        && name.split('.').all(|element| {
            element
                .as_bytes()
                .first()
                .is_some_and(|first| !first.is_ascii_digit())
                && element.bytes().all(is_member_byte)
        })
}

/// Validates a member (method or signal) name such as `NameOwnerChanged`.
///
/// Member names are a single non-empty element: no `.`, no hyphen, and no
/// leading digit.
pub(crate) fn is_member_name(name: &str) -> bool {
    name.as_bytes()
        .first()
        .is_some_and(|first| !first.is_ascii_digit())
        && name.bytes().all(is_member_byte)
}

/// Validates an object path such as `/org/freedesktop/DBus`.
///
/// Paths begin with `/`; apart from the root path itself, elements are
/// non-empty, drawn from the member alphabet, and never followed by a
/// trailing slash.
pub(crate) fn is_object_path(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    let Some(rest) = path.strip_prefix('/') else {
        return false;
    };
    rest.split('/')
        .all(|element| !element.is_empty() && element.bytes().all(is_member_byte))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_names_require_colon_and_dot() {
        assert!(is_unique_name(":1.42"));
        assert!(is_unique_name(":1.2.3"));
        assert!(is_unique_name(":abc.def"));

        assert!(!is_unique_name("1.42"));
        assert!(!is_unique_name(":142"));
        assert!(!is_unique_name(":1..2"));
        assert!(!is_unique_name(":1.2."));
        assert!(!is_unique_name(":"));
        assert!(!is_unique_name(":1.2 "));
    }

    #[test]
    fn well_known_names_require_dotted_elements() {
        assert!(is_well_known_name("org.example"));
        assert!(is_well_known_name("org.example.Service"));
        assert!(is_well_known_name("org.foo-bar"));
        assert!(is_well_known_name("org._7zip"));

        assert!(!is_well_known_name("org"));
        assert!(!is_well_known_name(".org.example"));
        assert!(!is_well_known_name("org..example"));
        assert!(!is_well_known_name("org.example."));
        assert!(!is_well_known_name("org.2example"));
        assert!(!is_well_known_name("org.exa mple"));
    }

    #[test]
    fn classification_matches_prefix() {
        assert_eq!(
            classify_bus_name(":1.42"),
            Some(BusName::Unique(":1.42".to_owned()))
        );
        assert_eq!(
            classify_bus_name("org.example"),
            Some(BusName::WellKnown("org.example".to_owned()))
        );
        assert_eq!(classify_bus_name(":bogus"), None);
        assert_eq!(classify_bus_name("bogus"), None);
    }

    #[test]
    fn interface_names_forbid_hyphens() {
        assert!(is_interface_name("org.freedesktop.DBus"));
        assert!(is_interface_name("org.example._1"));

        assert!(!is_interface_name("org.foo-bar"));
        assert!(!is_interface_name("org"));
        assert!(!is_interface_name(".org.example"));
        assert!(!is_interface_name("org.1example"));
    }

    #[test]
    fn member_names_are_single_elements() {
        assert!(is_member_name("NameOwnerChanged"));
        assert!(is_member_name("Frob_2"));
        assert!(is_member_name("_private"));

        assert!(!is_member_name(""));
        assert!(!is_member_name("2Frob"));
        assert!(!is_member_name("a.b"));
        assert!(!is_member_name("a-b"));
    }

    #[test]
    fn object_paths_are_slash_delimited() {
        assert!(is_object_path("/"));
        assert!(is_object_path("/org"));
        assert!(is_object_path("/org/freedesktop/DBus"));
        assert!(is_object_path("/_1/2"));

        assert!(!is_object_path(""));
        assert!(!is_object_path("relative"));
        assert!(!is_object_path("/org/"));
        assert!(!is_object_path("/org//freedesktop"));
        assert!(!is_object_path("/org/foo-bar"));
    }
}
