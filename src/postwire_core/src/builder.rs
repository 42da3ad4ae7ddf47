use std::collections::BTreeMap;

use crate::{
    domain::{
        adapter_config::AdapterConfig,
        address::{Address, AddressField, parse_address},
        attachment::{Attachment, AttachmentInput},
        message::{MessageOptions, OutboundMessage},
        recipient::Recipient,
    },
    error::SendError,
};

/// Accumulates one [`OutboundMessage`] from loosely typed host input.
///
/// Every step consumes the builder and returns the next snapshot. Nothing is
/// validated until [`MessageBuilder::build`], except attachments which are
/// checked as they are encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBuilder {
    from: Recipient,
    recipients: Vec<Recipient>,
    subject: String,
    html_body: Option<String>,
    text_body: Option<String>,
    reply_to: Option<Recipient>,
    attachments: Option<Vec<Attachment>>,
    headers: Option<BTreeMap<String, String>>,
}

impl MessageBuilder {
    pub fn new(config: &AdapterConfig) -> Self {
        Self {
            from: Recipient::new(
                config.default_from_address.clone(),
                Some(config.default_from_name.clone()),
            ),
            recipients: Vec::new(),
            subject: String::new(),
            html_body: None,
            text_body: None,
            reply_to: None,
            attachments: None,
            headers: None,
        }
    }

    /// Set the sender. Empty name or email parts fall back to the defaults.
    pub fn with_from(
        mut self,
        from: Option<&Address>,
        default_address: &str,
        default_name: &str,
    ) -> Self {
        let Some(from) = from.filter(|f| !f.is_blank()) else {
            return self;
        };

        let (email, name) = match from {
            Address::Text(text) => {
                let parsed = parse_address(text);
                (Some(parsed.email), parsed.name)
            }
            Address::Mailbox { name, address } => (address.clone(), name.clone()),
            Address::Unrecognized(_) => return self,
        };

        let email = email
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| default_address.to_string());
        let name = name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| default_name.to_string());

        self.from = Recipient::new(email, Some(name));
        self
    }

    /// Replace the recipient list. Mailboxes without an address are dropped.
    pub fn with_recipients(mut self, to: Option<&AddressField>) -> Self {
        let Some(to) = to.filter(|t| !t.is_blank()) else {
            return self;
        };

        let addresses = match to {
            AddressField::One(address) => std::slice::from_ref(address),
            AddressField::Many(addresses) => addresses.as_slice(),
        };

        self.recipients = addresses.iter().filter_map(Address::to_recipient).collect();
        self
    }

    /// Set the reply-to address. Only the first entry of a list is used.
    pub fn with_reply_to(mut self, reply_to: Option<&AddressField>) -> Self {
        let Some(reply_to) = reply_to.filter(|r| !r.is_blank()) else {
            return self;
        };

        let chosen = match reply_to {
            AddressField::One(address) => Some(address),
            AddressField::Many(addresses) => addresses.first(),
        };

        if let Some(recipient) = chosen.and_then(Address::to_recipient) {
            self.reply_to = Some(recipient);
        }
        self
    }

    pub fn with_content(mut self, options: &MessageOptions) -> Self {
        self.subject = options.subject.clone().unwrap_or_default();

        if let Some(html) = options.html.as_ref().filter(|h| !h.is_empty()) {
            self.html_body = Some(html.clone());
        }
        if let Some(text) = options.text.as_ref().filter(|t| !t.is_empty()) {
            self.text_body = Some(text.clone());
        }
        self
    }

    pub fn with_headers(mut self, headers: Option<&BTreeMap<String, String>>) -> Self {
        if let Some(headers) = headers.filter(|h| !h.is_empty()) {
            self.headers = Some(headers.clone());
        }
        self
    }

    /// Encode attachments to base64. Fails if any entry lacks a filename or content.
    pub fn with_attachments(
        mut self,
        attachments: Option<&[AttachmentInput]>,
    ) -> Result<Self, SendError> {
        let Some(attachments) = attachments.filter(|a| !a.is_empty()) else {
            return Ok(self);
        };

        let encoded = attachments
            .iter()
            .map(Attachment::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        self.attachments = Some(encoded);
        Ok(self)
    }

    pub fn build(self) -> Result<OutboundMessage, SendError> {
        if self.recipients.is_empty() {
            return Err(SendError::validation("must have at least one recipient"));
        }

        Ok(OutboundMessage {
            from: self.from,
            recipients: self.recipients,
            subject: self.subject,
            html_body: self.html_body,
            text_body: self.text_body,
            reply_to: self.reply_to,
            attachments: self.attachments,
            headers: self.headers,
        })
    }
}
