//! Sign mode handler contract
//!
//! The host dispatches signing requests by [`SignMode`] to a
//! [`SignModeHandler`]. Handlers must be shareable across threads since the
//! host may sign several transactions concurrently.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SignModeResult;

/// Signing scheme identifier
///
/// Numeric values follow the Cosmos SDK `SignMode` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignMode {
    Unspecified,
    /// Protobuf SignDoc bytes
    Direct,
    /// ADR-050 human readable screens, CBOR encoded
    Textual,
    /// Protobuf SignDocDirectAux bytes
    DirectAux,
    /// Legacy Amino JSON
    LegacyAminoJson,
    /// Plain EIP-191 envelope over raw bytes
    Eip191,
}

impl SignMode {
    pub fn as_i32(self) -> i32 {
        match self {
            SignMode::Unspecified => 0,
            SignMode::Direct => 1,
            SignMode::Textual => 2,
            SignMode::DirectAux => 3,
            SignMode::LegacyAminoJson => 127,
            SignMode::Eip191 => 191,
        }
    }

    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(SignMode::Unspecified),
            1 => Some(SignMode::Direct),
            2 => Some(SignMode::Textual),
            3 => Some(SignMode::DirectAux),
            127 => Some(SignMode::LegacyAminoJson),
            191 => Some(SignMode::Eip191),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SignMode::Unspecified => "SIGN_MODE_UNSPECIFIED",
            SignMode::Direct => "SIGN_MODE_DIRECT",
            SignMode::Textual => "SIGN_MODE_TEXTUAL",
            SignMode::DirectAux => "SIGN_MODE_DIRECT_AUX",
            SignMode::LegacyAminoJson => "SIGN_MODE_LEGACY_AMINO_JSON",
            SignMode::Eip191 => "SIGN_MODE_EIP_191",
        }
    }
}

impl fmt::Display for SignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-request context handed down by the host
#[derive(Debug, Clone, Default)]
pub struct SignContext {
    /// Correlates diagnostics with the host's request
    pub request_id: Option<String>,
}

impl SignContext {
    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        Self {
            request_id: Some(request_id.into()),
        }
    }
}

/// Data identifying the signer of a transaction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignerData {
    /// Bech32 address
    pub address: String,
    /// Chain ID
    pub chain_id: String,
    /// Account number
    pub account_number: u64,
    /// Sequence number
    pub sequence: u64,
    /// Public key bytes (compressed secp256k1)
    pub public_key: Option<Vec<u8>>,
}

/// Transaction data a handler renders sign bytes from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TxData {
    /// Protobuf-encoded TxBody
    pub body_bytes: Vec<u8>,
    /// Protobuf-encoded AuthInfo
    pub auth_info_bytes: Vec<u8>,
    /// Canonical textual sign doc rendered ahead of time (offline flows)
    pub textual_sign_doc: Option<Vec<u8>>,
}

impl TxData {
    pub fn with_textual_sign_doc(sign_doc: Vec<u8>) -> Self {
        Self {
            textual_sign_doc: Some(sign_doc),
            ..Self::default()
        }
    }
}

/// Converts signer and transaction data into the bytes that get signed
pub trait SignModeHandler: Send + Sync {
    /// The mode this handler answers for
    fn mode(&self) -> SignMode;

    /// Produce the sign bytes for one signer of one transaction
    fn get_sign_bytes(
        &self,
        ctx: &SignContext,
        signer: &SignerData,
        tx: &TxData,
    ) -> SignModeResult<Vec<u8>>;
}
