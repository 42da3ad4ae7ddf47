use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::error::SendError;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const DATA_URI_PREFIX: &str = "data:";

/// Attachment body as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttachmentContent {
    Binary(Vec<u8>),
    Text(String),
}

impl AttachmentContent {
    /// Base64 payload for the wire. Data URIs are assumed to be encoded already.
    pub fn to_base64(&self) -> String {
        match self {
            AttachmentContent::Binary(bytes) => STANDARD.encode(bytes),
            AttachmentContent::Text(text) if text.starts_with(DATA_URI_PREFIX) => text
                .split_once(',')
                .map(|(_, payload)| payload.to_string())
                .unwrap_or_default(),
            AttachmentContent::Text(text) => STANDARD.encode(text.as_bytes()),
        }
    }
}

impl From<Vec<u8>> for AttachmentContent {
    fn from(value: Vec<u8>) -> Self {
        AttachmentContent::Binary(value)
    }
}

impl From<&str> for AttachmentContent {
    fn from(value: &str) -> Self {
        AttachmentContent::Text(value.to_string())
    }
}

/// Host-side attachment description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentInput {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub content: Option<AttachmentContent>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub cid: Option<String>,
}

impl AttachmentInput {
    pub fn new(filename: impl Into<String>, content: impl Into<AttachmentContent>) -> Self {
        Self {
            filename: Some(filename.into()),
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_cid(mut self, cid: impl Into<String>) -> Self {
        self.cid = Some(cid.into());
        self
    }
}

/// Attachment in provider wire format. `data` is always base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    pub is_base64: bool,
}

impl TryFrom<&AttachmentInput> for Attachment {
    type Error = SendError;

    fn try_from(input: &AttachmentInput) -> Result<Self, Self::Error> {
        let (Some(file_name), Some(content)) = (&input.filename, &input.content) else {
            return Err(SendError::validation(
                "attachment must have a filename and content",
            ));
        };

        Ok(Attachment {
            file_name: file_name.clone(),
            content_type: input
                .content_type
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            data: content.to_base64(),
            content_id: input.cid.clone(),
            is_base64: true,
        })
    }
}
