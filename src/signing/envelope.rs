//! EIP-191 Personal Message Envelope
//!
//! Reference: https://eips.ethereum.org/EIPS/eip-191
//!
//! Format: "\x19Ethereum Signed Message:\n" + len(message) + message
//!
//! The length is the decimal byte length of the message, not its character
//! count.

use tiny_keccak::{Hasher, Keccak};

/// Ethereum message prefix for personal_sign
pub const ETH_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// Wrap a message in the personal_sign envelope
pub fn personal_message(message: &[u8]) -> Vec<u8> {
    let length = message.len().to_string();
    let mut data = Vec::with_capacity(ETH_MESSAGE_PREFIX.len() + length.len() + message.len());
    data.extend_from_slice(ETH_MESSAGE_PREFIX.as_bytes());
    data.extend_from_slice(length.as_bytes());
    data.extend_from_slice(message);
    data
}

/// keccak256 of an already-built envelope, the digest a wallet signs
pub fn personal_message_digest(envelope: &[u8]) -> [u8; 32] {
    keccak256(envelope)
}

/// Compute keccak256 hash
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut output);
    output
}

/// A flattened textual sign doc together with its envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eip191Message {
    lines: Vec<String>,
    plaintext: String,
    envelope: Vec<u8>,
}

impl Eip191Message {
    /// Join the lines with `\n` and wrap the result
    pub fn from_lines(lines: Vec<String>) -> Self {
        let plaintext = lines.join("\n");
        let envelope = personal_message(plaintext.as_bytes());
        Self {
            lines,
            plaintext,
            envelope,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn plaintext(&self) -> &str {
        &self.plaintext
    }

    pub fn envelope(&self) -> &[u8] {
        &self.envelope
    }

    pub fn into_envelope(self) -> Vec<u8> {
        self.envelope
    }

    /// Get envelope as hex (no 0x prefix)
    pub fn envelope_hex(&self) -> String {
        hex::encode(&self.envelope)
    }

    pub fn digest(&self) -> [u8; 32] {
        personal_message_digest(&self.envelope)
    }

    /// Get digest as 0x-prefixed hex
    pub fn digest_hex(&self) -> String {
        format!("0x{}", hex::encode(self.digest()))
    }
}
