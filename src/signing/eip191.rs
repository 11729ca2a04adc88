//! EIP-191 Textual Sign Mode Handler
//!
//! Wraps a SIGN_MODE_TEXTUAL encoder and re-encodes its CBOR screens as an
//! Ethereum personal message, so wallets that only speak `personal_sign` can
//! sign what the user actually reviewed.
//!
//! Each screen becomes one line:
//! `[*][\t * indent][title: ]content`
//! Lines are joined with `\n` and the result is wrapped in
//! `"\x19Ethereum Signed Message:\n" + len + message`.

use std::sync::Arc;

use super::{
    Eip191Message, SignBytesObserver, SignContext, SignDocument, SignMode, SignModeError,
    SignModeHandler, SignModeResult, SignerData, TxData,
};
use crate::config::RenderLimits;
use crate::log_debug;

/// Adapter from a textual encoder to EIP-191 personal messages
#[derive(Clone)]
pub struct Eip191TextualHandler {
    inner: Arc<dyn SignModeHandler>,
    limits: RenderLimits,
    observer: Option<Arc<dyn SignBytesObserver>>,
}

impl std::fmt::Debug for Eip191TextualHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Eip191TextualHandler")
            .field("inner_mode", &self.inner.mode())
            .field("limits", &self.limits)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Eip191TextualHandler {
    pub fn new(inner: Arc<dyn SignModeHandler>) -> Self {
        Self {
            inner,
            limits: RenderLimits::standard(),
            observer: None,
        }
    }

    /// Use custom decode limits
    pub fn with_limits(mut self, limits: RenderLimits) -> SignModeResult<Self> {
        limits.validate()?;
        self.limits = limits;
        Ok(self)
    }

    /// Attach a diagnostics observer for the final sign bytes
    pub fn with_observer(mut self, observer: Arc<dyn SignBytesObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn limits(&self) -> &RenderLimits {
        &self.limits
    }

    /// Render canonical textual bytes into a personal message
    ///
    /// Fails with `UnsupportedMode` before touching the bytes if `mode` is not
    /// SIGN_MODE_TEXTUAL.
    pub fn render(&self, mode: SignMode, sign_doc: &[u8]) -> SignModeResult<Eip191Message> {
        if mode != SignMode::Textual {
            return Err(SignModeError::UnsupportedMode(mode));
        }
        let doc = SignDocument::from_cbor_with_limits(sign_doc, &self.limits)?;
        Ok(Eip191Message::from_lines(doc.lines()))
    }

    /// Full pipeline returning the message rather than raw bytes
    pub fn render_message(
        &self,
        ctx: &SignContext,
        signer: &SignerData,
        tx: &TxData,
    ) -> SignModeResult<Eip191Message> {
        let mode = self.inner.mode();
        if mode != SignMode::Textual {
            return Err(SignModeError::UnsupportedMode(mode));
        }

        let sign_doc = self
            .inner
            .get_sign_bytes(ctx, signer, tx)
            .map_err(|e| match e {
                e @ SignModeError::Upstream(_) => e,
                other => SignModeError::upstream(other),
            })?;

        let message = self.render(mode, &sign_doc)?;
        log_debug!(
            "signing",
            "rendered textual sign doc",
            signer = signer.address,
            chain_id = signer.chain_id,
            screens = message.lines().len(),
            digest = message.digest_hex(),
        );
        if let Some(observer) = &self.observer {
            observer.observe(ctx, mode, message.envelope());
        }
        Ok(message)
    }
}

impl SignModeHandler for Eip191TextualHandler {
    fn mode(&self) -> SignMode {
        self.inner.mode()
    }

    fn get_sign_bytes(
        &self,
        ctx: &SignContext,
        signer: &SignerData,
        tx: &TxData,
    ) -> SignModeResult<Vec<u8>> {
        self.render_message(ctx, signer, tx)
            .map(Eip191Message::into_envelope)
    }
}
