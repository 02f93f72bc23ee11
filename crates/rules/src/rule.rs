use std::collections::BTreeMap;
use std::fmt;

/// Message type selected by the `type` key.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum MessageType {
    /// No `type` clause was present; the rule matches every message type.
    #[default]
    Unknown,
    /// Broadcast signal emission.
    Signal,
    /// Method invocation request.
    MethodCall,
    /// Reply to a method invocation.
    MethodReturn,
    /// Error reply.
    Error,
}

impl MessageType {
    /// Parses a `type` value keyword, if it is part of the vocabulary.
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "signal" => Some(Self::Signal),
            "method_call" => Some(Self::MethodCall),
            "method_return" => Some(Self::MethodReturn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown"),
            Self::Signal => f.write_str("signal"),
            Self::MethodCall => f.write_str("method_call"),
            Self::MethodReturn => f.write_str("method_return"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// A bus participant name carried by `sender` clauses.
///
/// The two namespaces are distinct on the wire: unique connection names are
/// assigned by the bus and start with `:`, well-known names are dotted,
/// human-assigned identifiers.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum BusName {
    /// Bus-assigned unique connection name (`:1.42`).
    Unique(String),
    /// Human-assigned well-known name (`org.example.Service`).
    WellKnown(String),
}

impl BusName {
    /// Returns the name text regardless of classification.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unique(name) | Self::WellKnown(name) => name,
        }
    }

    /// Returns whether this is a bus-assigned unique connection name.
    #[must_use]
    pub const fn is_unique(&self) -> bool {
        matches!(self, Self::Unique(_))
    }

    /// Returns the classification token used in dumps and diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unique(_) => "unique",
            Self::WellKnown(_) => "well-known",
        }
    }
}

impl fmt::Display for BusName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated clause ready to be applied to a rule under construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Clause {
    Type(MessageType),
    Sender(BusName),
    Interface(String),
    Member(String),
    Path(String),
    PathNamespace(String),
    Destination(String),
    Eavesdrop(bool),
    Arg(u8, String),
    ArgPath(u8, String),
}

/// A fully validated match rule.
///
/// Built incrementally by the parser and frozen on success; on any failure
/// the partially built record is discarded wholesale, so a `Rule` in caller
/// hands always satisfies every key-specific syntax check. The record owns
/// all of its strings and holds no references into the original rule text.
///
/// The [`Display`](fmt::Display) implementation renders a deterministic
/// multi-line dump of every populated field, with numbered arguments in
/// index order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Rule {
    message_type: MessageType,
    sender: Option<BusName>,
    interface: Option<String>,
    member: Option<String>,
    path: Option<String>,
    path_namespace: Option<String>,
    destination: Option<String>,
    eavesdrop: bool,
    args: BTreeMap<u8, String>,
    arg_paths: BTreeMap<u8, String>,
}

impl Rule {
    /// Applies a validated clause, overwriting any prior value for the same
    /// key or argument index (last write wins).
    pub(crate) fn apply(&mut self, clause: Clause) {
        match clause {
            Clause::Type(message_type) => self.message_type = message_type,
            Clause::Sender(sender) => self.sender = Some(sender),
            Clause::Interface(interface) => self.interface = Some(interface),
            Clause::Member(member) => self.member = Some(member),
            Clause::Path(path) => self.path = Some(path),
            Clause::PathNamespace(namespace) => self.path_namespace = Some(namespace),
            Clause::Destination(destination) => self.destination = Some(destination),
            Clause::Eavesdrop(eavesdrop) => self.eavesdrop = eavesdrop,
            Clause::Arg(index, value) => {
                self.args.insert(index, value);
            }
            Clause::ArgPath(index, value) => {
                self.arg_paths.insert(index, value);
            }
        }
    }

    /// Returns the selected message type (`Unknown` when no `type` clause
    /// was present).
    #[must_use]
    pub const fn message_type(&self) -> MessageType {
        self.message_type
    }

    /// Returns the sender constraint, classified as unique or well-known.
    #[must_use]
    pub const fn sender(&self) -> Option<&BusName> {
        self.sender.as_ref()
    }

    /// Returns the interface constraint.
    #[must_use]
    pub fn interface(&self) -> Option<&str> {
        self.interface.as_deref()
    }

    /// Returns the member constraint.
    #[must_use]
    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    /// Returns the object-path constraint.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Returns the object-path namespace constraint.
    #[must_use]
    pub fn path_namespace(&self) -> Option<&str> {
        self.path_namespace.as_deref()
    }

    /// Returns the destination constraint (always a unique connection name).
    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    /// Returns whether the rule requests eavesdropping.
    #[must_use]
    pub const fn eavesdrop(&self) -> bool {
        self.eavesdrop
    }

    /// Returns the string constraint for message argument `index`, if any.
    #[must_use]
    pub fn arg(&self, index: u8) -> Option<&str> {
        self.args.get(&index).map(String::as_str)
    }

    /// Returns the path constraint for message argument `index`, if any.
    #[must_use]
    pub fn arg_path(&self, index: u8) -> Option<&str> {
        self.arg_paths.get(&index).map(String::as_str)
    }

    /// Returns the full argument-constraint table, keyed by index.
    #[must_use]
    pub const fn args(&self) -> &BTreeMap<u8, String> {
        &self.args
    }

    /// Returns the full argument-path-constraint table, keyed by index.
    #[must_use]
    pub const fn arg_paths(&self) -> &BTreeMap<u8, String> {
        &self.arg_paths
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<15} {}", "type", self.message_type)?;
        if let Some(sender) = &self.sender {
            writeln!(f, "{:<15} {} ({})", "sender", sender, sender.kind())?;
        }
        if let Some(interface) = &self.interface {
            writeln!(f, "{:<15} {interface}", "interface")?;
        }
        if let Some(member) = &self.member {
            writeln!(f, "{:<15} {member}", "member")?;
        }
        if let Some(path) = &self.path {
            writeln!(f, "{:<15} {path}", "path")?;
        }
        if let Some(namespace) = &self.path_namespace {
            writeln!(f, "{:<15} {namespace}", "path_namespace")?;
        }
        if let Some(destination) = &self.destination {
            writeln!(f, "{:<15} {destination}", "destination")?;
        }
        writeln!(f, "{:<15} {}", "eavesdrop", self.eavesdrop)?;
        for (index, value) in &self.args {
            let label = format!("arg{index}");
            writeln!(f, "{label:<15} '{value}'")?;
        }
        for (index, value) in &self.arg_paths {
            let label = format!("arg{index}path");
            writeln!(f, "{label:<15} '{value}'")?;
        }
        Ok(())
    }
}
