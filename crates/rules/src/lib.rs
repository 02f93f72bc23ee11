#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `rules` validates and parses D-Bus match rules: the comma-separated
//! `key=value` strings with which a bus client describes the messages it
//! wants to receive (`type='signal',interface='org.freedesktop.DBus'`). The
//! crate implements the policy-description grammar consumed by a bus daemon
//! or by a client registering interest in traffic. Message transport, name
//! ownership, and rule *evaluation* against live messages are external
//! collaborators and deliberately absent here.
//!
//! # Design
//!
//! Parsing is a fixed pipeline of pure, order-dependent stages:
//!
//! 1. **Tokenize** -- split the rule on `,` into elements and each element
//!    into `(key, value)` at the first `=` (values may contain `=`).
//! 2. **Validate key** -- accept the fixed vocabulary plus the numbered
//!    `arg<N>` / `arg<N>path` families, producing a typed [`MatchKey`].
//! 3. **Validate value** -- unwrap the single-quoted value, enforce the
//!    [`MAX_VALUE_LEN`] ceiling, and run the key-specific grammar check.
//! 4. **Build** -- apply the validated clause to the [`Rule`] under
//!    construction; a later clause for the same key overwrites an earlier
//!    one.
//!
//! [`parse`] drives the pipeline and is the crate's sole entry point. The
//! structured dump of a parsed rule is the [`Rule`]'s [`Display`]
//! implementation.
//!
//! # Invariants
//!
//! - Every populated [`Rule`] field passed its key-specific syntax check
//!   before insertion.
//! - Numbered argument indices are validated against `0..64` before any
//!   write into the argument tables.
//! - A [`Rule`] is either fully valid (returned) or fully absent: the first
//!   failing element abandons the whole rule and no partial record escapes.
//! - The returned [`Rule`] owns every extracted substring; it holds no
//!   references into the input.
//!
//! # Errors
//!
//! All failures surface as [`RuleError`] variants naming the offending
//! element, key, or value. Parsing is deterministic and side-effect free;
//! nothing in this crate exits the process or retries.
//!
//! # Examples
//!
//! ```
//! use rules::{parse, BusName, MessageType};
//!
//! let rule = parse("type='signal',sender=':1.42',arg0='ready'")?;
//!
//! assert_eq!(rule.message_type(), MessageType::Signal);
//! assert_eq!(rule.sender(), Some(&BusName::Unique(":1.42".into())));
//! assert_eq!(rule.arg(0), Some("ready"));
//! # Ok::<(), rules::RuleError>(())
//! ```
//!
//! # See also
//!
//! - `crates/cli` for the command-line front-end that feeds rule strings to
//!   [`parse`] and prints the dump.
//! - [`debug_match`] for the feature-gated tracing instrumentation.
//!
//! [`Display`]: std::fmt::Display

pub mod debug_match;
mod error;
mod key;
mod name;
mod parse;
mod rule;
mod token;
mod value;

pub use error::{RuleError, RuleResult};
pub use key::{MAX_ARG_INDEX, MatchKey};
pub use parse::parse;
pub use rule::{BusName, MessageType, Rule};
pub use value::MAX_VALUE_LEN;
