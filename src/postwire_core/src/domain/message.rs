use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{
    address::{Address, AddressField},
    attachment::{Attachment, AttachmentInput},
    recipient::Recipient,
};

/// Send request as handed over by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageOptions {
    #[serde(default)]
    pub from: Option<Address>,
    #[serde(default)]
    pub to: Option<AddressField>,
    #[serde(default)]
    pub reply_to: Option<AddressField>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub attachments: Option<Vec<AttachmentInput>>,
    #[serde(default)]
    pub headers: Option<BTreeMap<String, String>>,
}

/// Provider request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub from: Recipient,
    pub recipients: Vec<Recipient>,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Recipient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
}
