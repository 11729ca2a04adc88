//! Sign bytes observers
//!
//! Observers see the final sign bytes after a successful render. They are
//! purely diagnostic: nothing they do can change or fail the render.

use super::{SignContext, SignMode};
use crate::log_debug;

/// Hook invoked with the bytes a handler is about to return
pub trait SignBytesObserver: Send + Sync {
    fn observe(&self, ctx: &SignContext, mode: SignMode, sign_bytes: &[u8]);
}

impl<F> SignBytesObserver for F
where
    F: Fn(&SignContext, SignMode, &[u8]) + Send + Sync,
{
    fn observe(&self, ctx: &SignContext, mode: SignMode, sign_bytes: &[u8]) {
        self(ctx, mode, sign_bytes)
    }
}

/// Logs a hex dump of the sign bytes at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct HexDumpLogger;

impl SignBytesObserver for HexDumpLogger {
    fn observe(&self, ctx: &SignContext, mode: SignMode, sign_bytes: &[u8]) {
        log_debug!(
            "signing",
            "rendered sign bytes",
            mode = mode,
            request_id = ctx.request_id.as_deref().unwrap_or("-"),
            len = sign_bytes.len(),
            sign_bytes = hex::encode(sign_bytes),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_closure_observer() {
        let seen = Mutex::new(Vec::new());
        let observer = |_: &SignContext, mode: SignMode, bytes: &[u8]| {
            seen.lock().unwrap().push((mode, bytes.to_vec()));
        };
        observer.observe(&SignContext::default(), SignMode::Textual, b"abc");

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen, vec![(SignMode::Textual, b"abc".to_vec())]);
    }

    #[test]
    fn test_hex_dump_logger_does_not_panic() {
        HexDumpLogger.observe(&SignContext::with_request_id("req-1"), SignMode::Textual, &[0x19]);
    }
}
