use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::recipient::Recipient;

// Either `name <email>` or a single token without whitespace or brackets.
static ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<name>[^<>]*)<(?P<email>[^<>]+)>|(?P<bare>[^\s<>]+))$")
        .expect("address regex is valid")
});

/// Parse a free-form address such as `"Jane Doe <jane@example.com>"` or
/// `"jane@example.com"`.
///
/// Never fails: input that matches neither form is used verbatim (trimmed)
/// as the email. Address syntax is not validated.
pub fn parse_address(input: &str) -> Recipient {
    let trimmed = input.trim();

    let Some(captures) = ADDRESS_REGEX.captures(trimmed) else {
        return Recipient::bare(trimmed);
    };

    if let Some(email) = captures.name("email") {
        let name = captures
            .name("name")
            .map(|m| m.as_str().trim().to_string());
        return Recipient::new(email.as_str().trim(), name);
    }

    match captures.name("bare") {
        Some(bare) => Recipient::bare(bare.as_str()),
        None => Recipient::bare(trimmed),
    }
}

/// A single sender or recipient as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Address {
    Text(String),
    Mailbox {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        address: Option<String>,
    },
    /// Any other JSON value, such as `null`, a number or a mailbox whose
    /// address is not a string. It never resolves to a recipient.
    Unrecognized(serde_json::Value),
}

impl Address {
    pub fn mailbox(name: impl Into<String>, address: impl Into<String>) -> Self {
        Address::Mailbox {
            name: Some(name.into()),
            address: Some(address.into()),
        }
    }

    /// Resolve into a recipient. Mailboxes without an address yield `None`.
    pub fn to_recipient(&self) -> Option<Recipient> {
        match self {
            Address::Text(text) => Some(parse_address(text)),
            Address::Mailbox {
                name,
                address: Some(address),
            } if !address.is_empty() => Some(Recipient::new(address.clone(), name.clone())),
            Address::Mailbox { .. } | Address::Unrecognized(_) => None,
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        match self {
            Address::Text(text) => text.is_empty(),
            Address::Mailbox { .. } => false,
            Address::Unrecognized(_) => true,
        }
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Address::Text(value.to_string())
    }
}

impl From<String> for Address {
    fn from(value: String) -> Self {
        Address::Text(value)
    }
}

/// A recipient field that accepts one address or a list of them.
// `Many` comes first: serde would otherwise read a two-element array as a mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AddressField {
    Many(Vec<Address>),
    One(Address),
}

impl AddressField {
    pub(crate) fn is_blank(&self) -> bool {
        matches!(self, AddressField::One(address) if address.is_blank())
    }
}

impl From<Address> for AddressField {
    fn from(value: Address) -> Self {
        AddressField::One(value)
    }
}

impl From<&str> for AddressField {
    fn from(value: &str) -> Self {
        AddressField::One(value.into())
    }
}

impl From<Vec<Address>> for AddressField {
    fn from(value: Vec<Address>) -> Self {
        AddressField::Many(value)
    }
}
