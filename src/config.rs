//! Render limits
//!
//! Bounds applied while decoding a textual sign doc. Input is untrusted, so a
//! document that exceeds any limit is rejected rather than truncated.

use crate::signing::{SignModeError, SignModeResult};

/// Maximum number of screens accepted by default (CBOR array element cap)
pub const DEFAULT_MAX_SCREENS: usize = 131_072;

/// Maximum CBOR nesting depth accepted by default
pub const DEFAULT_MAX_NESTING: usize = 32;

/// Maximum indentation level accepted by default
///
/// Each level renders as one tab, so this bounds the bytes a single screen
/// can expand to. Renderers nest far shallower than this.
pub const DEFAULT_MAX_INDENT: u32 = 65_536;

/// Decode limits for textual sign docs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLimits {
    /// Screens per document
    pub max_screens: usize,
    /// Indent level per screen
    pub max_indent: u32,
    /// CBOR recursion depth
    pub max_nesting: usize,
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self::standard()
    }
}

impl RenderLimits {
    /// Limits matching what the textual renderer can emit
    pub fn standard() -> Self {
        Self {
            max_screens: DEFAULT_MAX_SCREENS,
            max_indent: DEFAULT_MAX_INDENT,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }

    /// Tight limits for constrained signers (hardware wallets, small displays)
    pub fn strict() -> Self {
        Self {
            max_screens: 4_096,
            max_indent: 16,
            max_nesting: 8,
        }
    }

    pub fn with_max_screens(mut self, max_screens: usize) -> Self {
        self.max_screens = max_screens;
        self
    }

    pub fn with_max_indent(mut self, max_indent: u32) -> Self {
        self.max_indent = max_indent;
        self
    }

    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }

    /// Check the limits can decode at least a one-screen document
    pub fn validate(&self) -> SignModeResult<()> {
        if self.max_screens == 0 {
            return Err(SignModeError::InvalidLimits(
                "max_screens must be at least 1".into(),
            ));
        }
        // sign doc map -> screens array -> screen map
        if self.max_nesting < 3 {
            return Err(SignModeError::InvalidLimits(format!(
                "max_nesting must be at least 3, got {}",
                self.max_nesting
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        assert!(RenderLimits::standard().validate().is_ok());
        assert!(RenderLimits::strict().validate().is_ok());
        assert_eq!(RenderLimits::default(), RenderLimits::standard());
    }

    #[test]
    fn test_invalid_limits() {
        let limits = RenderLimits::standard().with_max_screens(0);
        assert!(matches!(
            limits.validate(),
            Err(SignModeError::InvalidLimits(_))
        ));

        let limits = RenderLimits::standard().with_max_nesting(2);
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_strict_is_tighter_than_standard() {
        let standard = RenderLimits::standard();
        let strict = RenderLimits::strict();
        assert!(strict.max_screens < standard.max_screens);
        assert!(strict.max_indent < standard.max_indent);
        assert!(strict.max_nesting < standard.max_nesting);
        assert!(standard.max_indent >= 2_000);
    }
}
