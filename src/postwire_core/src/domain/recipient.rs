use serde::{Deserialize, Serialize};

/// An email address with an optional display name, as sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Recipient {
    pub fn new(email: impl Into<String>, name: Option<String>) -> Self {
        Self {
            email: email.into(),
            name: name.filter(|n| !n.is_empty()),
        }
    }

    pub fn bare(email: impl Into<String>) -> Self {
        Self::new(email, None)
    }

    pub fn named(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(email, Some(name.into()))
    }
}
