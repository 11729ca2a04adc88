//! Shared request/response types for the FFI and CLI surfaces

use serde::{Deserialize, Serialize};

use crate::signing::{Eip191Message, Screen, SignDocument};

/// Result of rendering a textual sign doc
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSignBytes {
    /// Flattened plaintext the user reviews
    pub plaintext: String,
    /// Envelope bytes, 0x-prefixed hex
    pub sign_bytes: String,
    /// keccak256 of the envelope, 0x-prefixed hex
    pub digest: String,
    /// Number of screens rendered
    pub screens: usize,
}

impl From<&Eip191Message> for RenderedSignBytes {
    fn from(message: &Eip191Message) -> Self {
        Self {
            plaintext: message.plaintext().to_string(),
            sign_bytes: format!("0x{}", message.envelope_hex()),
            digest: message.digest_hex(),
            screens: message.lines().len(),
        }
    }
}

/// Decoded screens, for callers that display them natively
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedSignDoc {
    pub screens: Vec<Screen>,
    pub lines: Vec<String>,
}

impl From<SignDocument> for DecodedSignDoc {
    fn from(doc: SignDocument) -> Self {
        let lines = doc.lines();
        Self {
            screens: doc.screens,
            lines,
        }
    }
}

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<crate::error::Eip191Error>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: crate::error::Eip191Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":{"code":"internal","message":"Serialization failed"}}"#.to_string()
        })
    }
}
