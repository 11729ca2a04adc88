//! Pre-rendered textual encoder
//!
//! For offline and air-gapped flows the textual sign doc is rendered on an
//! online machine (where coin metadata is available) and shipped alongside the
//! transaction. This encoder simply hands those bytes back.

use super::{SignContext, SignMode, SignModeError, SignModeHandler, SignModeResult, SignerData, TxData};

#[derive(Debug, Clone, Copy, Default)]
pub struct PrerenderedTextualHandler;

impl SignModeHandler for PrerenderedTextualHandler {
    fn mode(&self) -> SignMode {
        SignMode::Textual
    }

    fn get_sign_bytes(
        &self,
        _ctx: &SignContext,
        _signer: &SignerData,
        tx: &TxData,
    ) -> SignModeResult<Vec<u8>> {
        match &tx.textual_sign_doc {
            Some(sign_doc) if !sign_doc.is_empty() => Ok(sign_doc.clone()),
            _ => Err(SignModeError::MissingSignDoc),
        }
    }
}
