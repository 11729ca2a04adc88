//! Sign Mode Handlers
//!
//! This module turns a canonical textual sign document into bytes an
//! Ethereum-style wallet can sign with `personal_sign`:
//! 1. Ask the inner textual encoder for the canonical CBOR document
//! 2. Decode the screens and flatten them into one plaintext message
//! 3. Wrap the plaintext in the EIP-191 personal message envelope
//!
//! Handlers are looked up by [`SignMode`] through a [`HandlerMap`].

pub mod diagnostics;
pub mod eip191;
pub mod envelope;
pub mod handler;
pub mod handler_map;
pub mod prerendered;
pub mod textual;

pub use diagnostics::*;
pub use eip191::*;
pub use envelope::*;
pub use handler::*;
pub use handler_map::*;
pub use prerendered::*;
pub use textual::*;

/// Errors raised while producing sign bytes
#[derive(Debug, thiserror::Error)]
pub enum SignModeError {
    #[error("unsupported sign mode {0}")]
    UnsupportedMode(SignMode),

    #[error("invalid textual sign doc: {0}")]
    Decode(String),

    #[error("failed to encode textual sign doc: {0}")]
    Encode(String),

    #[error(transparent)]
    Upstream(Box<dyn std::error::Error + Send + Sync>),

    #[error("transaction carries no textual sign doc")]
    MissingSignDoc,

    #[error("duplicate handler registered for {0}")]
    DuplicateHandler(SignMode),

    #[error("invalid render limits: {0}")]
    InvalidLimits(String),
}

impl SignModeError {
    /// Wrap an error raised by an inner encoder
    pub fn upstream(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Upstream(Box::new(err))
    }
}

pub type SignModeResult<T> = Result<T, SignModeError>;
