//! Handler lookup by sign mode
//!
//! The host builds one `HandlerMap` at startup and dispatches every signing
//! request through it.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::{
    Eip191TextualHandler, HexDumpLogger, SignContext, SignMode, SignModeError, SignModeHandler,
    SignModeResult, SignerData, TxData,
};

/// Sign mode handlers keyed by the mode they serve
pub struct HandlerMap {
    default_mode: SignMode,
    handlers: BTreeMap<SignMode, Arc<dyn SignModeHandler>>,
}

impl HandlerMap {
    /// Register handlers; two handlers for the same mode is an error
    pub fn new(
        default_mode: SignMode,
        handlers: Vec<Arc<dyn SignModeHandler>>,
    ) -> SignModeResult<Self> {
        let mut map = BTreeMap::new();
        for handler in handlers {
            let mode = handler.mode();
            if map.insert(mode, handler).is_some() {
                return Err(SignModeError::DuplicateHandler(mode));
            }
        }
        Ok(Self {
            default_mode,
            handlers: map,
        })
    }

    /// A map whose only handler is the EIP-191 adapter around `inner`
    ///
    /// The adapter logs a hex dump of every sign doc it renders.
    pub fn with_eip191_textual(inner: Arc<dyn SignModeHandler>) -> SignModeResult<Self> {
        let handler = Eip191TextualHandler::new(inner).with_observer(Arc::new(HexDumpLogger));
        let mode = handler.mode();
        Self::new(mode, vec![Arc::new(handler)])
    }

    pub fn default_mode(&self) -> SignMode {
        self.default_mode
    }

    /// Registered modes in ascending numeric order
    pub fn supported_modes(&self) -> Vec<SignMode> {
        self.handlers.keys().copied().collect()
    }

    pub fn get(&self, mode: SignMode) -> Option<&Arc<dyn SignModeHandler>> {
        self.handlers.get(&mode)
    }

    pub fn get_sign_bytes(
        &self,
        mode: SignMode,
        ctx: &SignContext,
        signer: &SignerData,
        tx: &TxData,
    ) -> SignModeResult<Vec<u8>> {
        let handler = self
            .handlers
            .get(&mode)
            .ok_or(SignModeError::UnsupportedMode(mode))?;
        handler.get_sign_bytes(ctx, signer, tx)
    }
}
