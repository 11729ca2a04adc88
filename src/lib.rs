//! EIP-191 Textual Sign Mode
//!
//! Re-encodes Cosmos SIGN_MODE_TEXTUAL sign docs as Ethereum personal
//! messages, so wallets that only implement `personal_sign` can sign the
//! human-readable rendering of a transaction.
//!
//! # Architecture
//!
//! This crate provides:
//! - **signing**: sign mode handlers, the textual sign doc model, the EIP-191
//!   envelope and the handler map used for dispatch
//! - **config**: decode limits for untrusted sign docs
//! - **ffi**: C-ABI exports for native callers
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use eip191_textual::signing::{HandlerMap, SignMode, SignContext, SignerData, TxData};
//!
//! let handlers = HandlerMap::with_eip191_textual(Arc::new(textual_encoder))?;
//! let sign_bytes = handlers.get_sign_bytes(
//!     SignMode::Textual,
//!     &SignContext::default(),
//!     &signer,
//!     &tx,
//! )?;
//! ```

pub mod config;
pub mod error;
pub mod ffi;
pub mod signing;
pub mod types;
pub mod utils;

pub use config::RenderLimits;
pub use error::{Eip191Error, Eip191Result, ErrorCode};
pub use signing::{
    Eip191Message, Eip191TextualHandler, HandlerMap, Screen, SignContext, SignDocument, SignMode,
    SignModeError, SignModeHandler, SignerData, TxData,
};
pub use types::*;

pub use ffi::{eip191_decode_sign_doc, eip191_free_string, eip191_render_textual};
