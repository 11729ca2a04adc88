//! FFI Layer
//!
//! All C-ABI exports are defined here. Every function follows the same
//! pattern:
//! - Input: JSON string (null-terminated C string)
//! - Output: JSON string (must be freed with `eip191_free_string`)
//!
//! Error handling: All functions return JSON with `success` field.
//! On error, `success: false` and `error` object is populated.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::sync::Arc;

use crate::config::RenderLimits;
use crate::error::{Eip191Error, ErrorCode};
use crate::{log_error, log_warn};
use crate::signing::{
    Eip191TextualHandler, PrerenderedTextualHandler, SignContext, SignDocument, SignerData, TxData,
};
use crate::types::*;

// =============================================================================
// Memory Management
// =============================================================================

/// Free a string returned by any eip191_* function
///
/// # Safety
/// The pointer must have been returned by an eip191_* function
#[unsafe(no_mangle)]
pub extern "C" fn eip191_free_string(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    unsafe {
        let _ = CString::from_raw(s);
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Convert C string to an owned Rust string, returning error JSON if invalid
fn parse_input(input: *const c_char) -> Result<String, *mut c_char> {
    if input.is_null() {
        return Err(error_response(Eip191Error::invalid_input("Null input pointer")));
    }

    let c_str = unsafe { CStr::from_ptr(input) };
    match c_str.to_str() {
        Ok(s) => Ok(s.to_owned()),
        Err(_) => Err(error_response(Eip191Error::invalid_input("Invalid UTF-8 string"))),
    }
}

/// Create a success response JSON string
fn success_response<T: serde::Serialize>(data: T) -> *mut c_char {
    let response = ApiResponse::ok(data);
    string_to_ptr(response.to_json())
}

/// Create an error response JSON string
fn error_response(error: Eip191Error) -> *mut c_char {
    if error.code == ErrorCode::Internal {
        log_error!("ffi", "request failed", code = format!("{:?}", error.code), message = error.message);
    } else {
        log_warn!("ffi", "request failed", code = format!("{:?}", error.code), message = error.message);
    }
    let response: ApiResponse<()> = ApiResponse::err(error);
    string_to_ptr(response.to_json())
}

/// Convert Rust string to C string pointer
fn string_to_ptr(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c_str) => c_str.into_raw(),
        Err(_) => {
            // Last resort: return a minimal error
            let fallback = r#"{"success":false,"error":{"code":"internal","message":"String conversion failed"}}"#;
            CString::new(fallback).map_or(std::ptr::null_mut(), CString::into_raw)
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignDocRequest {
    /// Hex-encoded CBOR textual sign doc, with or without 0x
    sign_doc: String,
    #[serde(default)]
    signer: Option<SignerData>,
    #[serde(default)]
    request_id: Option<String>,
    /// Use the strict render limits
    #[serde(default)]
    strict: bool,
}

impl SignDocRequest {
    fn sign_doc_bytes(&self) -> Result<Vec<u8>, Eip191Error> {
        let hex_str = self.sign_doc.trim();
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        if hex_str.is_empty() {
            return Err(Eip191Error::invalid_input("Empty sign doc"));
        }
        Ok(hex::decode(hex_str)?)
    }

    fn limits(&self) -> RenderLimits {
        if self.strict {
            RenderLimits::strict()
        } else {
            RenderLimits::standard()
        }
    }
}

fn parse_request(input: *const c_char) -> Result<SignDocRequest, *mut c_char> {
    let json_str = parse_input(input)?;
    serde_json::from_str(&json_str)
        .map_err(|e| error_response(Eip191Error::parse_error(format!("Invalid request: {}", e))))
}

fn render_request(request: &SignDocRequest) -> Result<RenderedSignBytes, Eip191Error> {
    let sign_doc = request.sign_doc_bytes()?;
    let handler = Eip191TextualHandler::new(Arc::new(PrerenderedTextualHandler))
        .with_limits(request.limits())?;

    let ctx = match &request.request_id {
        Some(id) => SignContext::with_request_id(id.clone()),
        None => SignContext::default(),
    };
    let signer = request.signer.clone().unwrap_or_default();
    let message = handler.render_message(&ctx, &signer, &TxData::with_textual_sign_doc(sign_doc))?;
    Ok(RenderedSignBytes::from(&message))
}

// =============================================================================
// Textual Sign Docs
// =============================================================================

/// Render a textual sign doc as an EIP-191 personal message
///
/// # Input
/// ```json
/// { "signDoc": "0xa10181a102626869", "requestId": "optional", "strict": false }
/// ```
///
/// # Output
/// ```json
/// {
///   "success": true,
///   "data": {
///     "plaintext": "hi",
///     "signBytes": "0x19457468...",
///     "digest": "0x...",
///     "screens": 1
///   }
/// }
/// ```
#[unsafe(no_mangle)]
pub extern "C" fn eip191_render_textual(input: *const c_char) -> *mut c_char {
    let request = match parse_request(input) {
        Ok(r) => r,
        Err(ptr) => return ptr,
    };

    match render_request(&request) {
        Ok(rendered) => success_response(rendered),
        Err(e) => error_response(e),
    }
}

/// Decode a textual sign doc into its screens without wrapping it
///
/// # Input
/// ```json
/// { "signDoc": "0x..." }
/// ```
///
/// # Output
/// ```json
/// {
///   "success": true,
///   "data": {
///     "screens": [{ "title": "Fee", "content": "0.01 ATOM", "indent": 1, "expert": true }],
///     "lines": ["*\tFee: 0.01 ATOM"]
///   }
/// }
/// ```
#[unsafe(no_mangle)]
pub extern "C" fn eip191_decode_sign_doc(input: *const c_char) -> *mut c_char {
    let request = match parse_request(input) {
        Ok(r) => r,
        Err(ptr) => return ptr,
    };

    let decoded = request
        .sign_doc_bytes()
        .and_then(|bytes| {
            SignDocument::from_cbor_with_limits(&bytes, &request.limits()).map_err(Eip191Error::from)
        });

    match decoded {
        Ok(doc) => success_response(DecodedSignDoc::from(doc)),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn call_ffi(func: extern "C" fn(*const c_char) -> *mut c_char, input: &str) -> Value {
        let c_input = CString::new(input).unwrap();
        let result = func(c_input.as_ptr());
        let output = unsafe { CStr::from_ptr(result) }.to_string_lossy().into_owned();
        eip191_free_string(result);
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_render_textual() {
        let response = call_ffi(eip191_render_textual, r#"{"signDoc":"0xa10181a102626869"}"#);
        assert_eq!(response["success"], true);
        assert_eq!(response["data"]["plaintext"], "hi");
        assert_eq!(response["data"]["screens"], 1);
        assert_eq!(
            response["data"]["signBytes"],
            "0x19457468657265756d205369676e6564204d6573736167653a0a326869"
        );
    }

    #[test]
    fn test_render_textual_bad_hex() {
        let response = call_ffi(eip191_render_textual, r#"{"signDoc":"0xa10181zz"}"#);
        assert_eq!(response["success"], false);
        assert_eq!(response["error"]["code"], "hex_error");
    }

    #[test]
    fn test_render_textual_bad_json() {
        let response = call_ffi(eip191_render_textual, r#"{"sign_doc":"#);
        assert_eq!(response["success"], false);
        assert_eq!(response["error"]["code"], "parse_error");
    }

    #[test]
    fn test_render_textual_decode_error() {
        let response = call_ffi(eip191_render_textual, r#"{"signDoc":"ff"}"#);
        assert_eq!(response["success"], false);
        assert_eq!(response["error"]["code"], "decode_error");
    }

    #[test]
    fn test_render_textual_empty_sign_doc() {
        let response = call_ffi(eip191_render_textual, r#"{"signDoc":"0x"}"#);
        assert_eq!(response["success"], false);
        assert_eq!(response["error"]["code"], "invalid_input");
    }

    #[test]
    fn test_decode_sign_doc() {
        // {1: [{1: "Fee", 2: "0.01 ATOM", 3: 1, 4: true}]}
        let response = call_ffi(
            eip191_decode_sign_doc,
            r#"{"signDoc":"a10181a401634665650269302e30312041544f4d030104f5"}"#,
        );
        assert_eq!(response["success"], true);
        assert_eq!(response["data"]["screens"][0]["title"], "Fee");
        assert_eq!(response["data"]["lines"][0], "*\tFee: 0.01 ATOM");
    }

    #[test]
    fn test_null_input() {
        let result = eip191_render_textual(std::ptr::null());
        let output = unsafe { CStr::from_ptr(result) }.to_string_lossy().into_owned();
        eip191_free_string(result);
        assert!(output.contains("Null input pointer"));
    }
}
