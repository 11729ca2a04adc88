//! Textual sign doc model
//!
//! A textual sign doc is a CBOR map `{1: [screen, ...]}` where each screen is
//! a map `{1: title, 2: content, 3: indent, 4: expert}`. Every key is
//! optional and defaults to its zero value, and a `null` screen decodes as an
//! empty one.

use ciborium::value::{Integer, Value};
use serde::{Deserialize, Serialize};

use super::{SignModeError, SignModeResult};
use crate::config::RenderLimits;

const SIGN_DOC_SCREENS_KEY: u64 = 1;

const SCREEN_TITLE_KEY: u64 = 1;
const SCREEN_CONTENT_KEY: u64 = 2;
const SCREEN_INDENT_KEY: u64 = 3;
const SCREEN_EXPERT_KEY: u64 = 4;

/// Marker prefixed to lines meant for expert review only
pub const EXPERT_MARKER: char = '*';

/// One display unit of a textual sign doc
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    pub title: String,
    pub content: String,
    pub indent: u32,
    pub expert: bool,
}

impl Screen {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_indent(mut self, indent: u32) -> Self {
        self.indent = indent;
        self
    }

    pub fn expert(mut self) -> Self {
        self.expert = true;
        self
    }

    /// Render this screen as a single line
    ///
    /// Layout: expert marker, indent tabs, `title: `, content.
    pub fn to_line(&self) -> String {
        let mut line = String::with_capacity(
            1 + self.indent as usize + self.title.len() + 2 + self.content.len(),
        );
        if self.expert {
            line.push(EXPERT_MARKER);
        }
        for _ in 0..self.indent {
            line.push('\t');
        }
        if !self.title.is_empty() {
            line.push_str(&self.title);
            line.push_str(": ");
        }
        line.push_str(&self.content);
        line
    }

    fn from_cbor(value: Value, index: usize, limits: &RenderLimits) -> SignModeResult<Self> {
        let entries = match value {
            Value::Map(entries) => entries,
            // absent screen, rendered as an empty line
            Value::Null => return Ok(Screen::default()),
            other => {
                return Err(SignModeError::Decode(format!(
                    "screen {} is {}, expected a map",
                    index,
                    kind(&other)
                )))
            }
        };

        let mut screen = Screen::default();
        for (k, value) in entries {
            // unknown and non-integer keys are ignored
            let Some(k) = int_key(&k) else { continue };
            match k {
                SCREEN_TITLE_KEY => {
                    screen.title = text_field(value, index, "title")?;
                }
                SCREEN_CONTENT_KEY => {
                    screen.content = text_field(value, index, "content")?;
                }
                SCREEN_INDENT_KEY => {
                    screen.indent = indent_field(value, index, limits)?;
                }
                SCREEN_EXPERT_KEY => {
                    screen.expert = match value {
                        Value::Bool(b) => b,
                        Value::Null => false,
                        other => {
                            return Err(SignModeError::Decode(format!(
                                "screen {} expert is {}, expected a bool",
                                index,
                                kind(&other)
                            )))
                        }
                    };
                }
                _ => {}
            }
        }
        Ok(screen)
    }

    fn to_cbor(&self) -> Value {
        let mut entries = Vec::new();
        if !self.title.is_empty() {
            entries.push((key(SCREEN_TITLE_KEY), Value::Text(self.title.clone())));
        }
        if !self.content.is_empty() {
            entries.push((key(SCREEN_CONTENT_KEY), Value::Text(self.content.clone())));
        }
        if self.indent > 0 {
            entries.push((key(SCREEN_INDENT_KEY), Value::Integer(Integer::from(self.indent))));
        }
        if self.expert {
            entries.push((key(SCREEN_EXPERT_KEY), Value::Bool(true)));
        }
        Value::Map(entries)
    }
}

/// Decoded textual sign doc: screens in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignDocument {
    pub screens: Vec<Screen>,
}

impl SignDocument {
    pub fn new(screens: Vec<Screen>) -> Self {
        Self { screens }
    }

    /// Decode canonical CBOR bytes with the standard limits
    pub fn from_cbor(bytes: &[u8]) -> SignModeResult<Self> {
        Self::from_cbor_with_limits(bytes, &RenderLimits::standard())
    }

    /// Decode canonical CBOR bytes
    ///
    /// Fails on malformed CBOR, wrong value types, negative indents, limit
    /// violations, and trailing bytes after the document.
    pub fn from_cbor_with_limits(bytes: &[u8], limits: &RenderLimits) -> SignModeResult<Self> {
        let mut reader = bytes;
        let value: Value =
            ciborium::de::from_reader_with_recursion_limit(&mut reader, limits.max_nesting)
                .map_err(|e| SignModeError::Decode(e.to_string()))?;
        if !reader.is_empty() {
            return Err(SignModeError::Decode(format!(
                "{} bytes of trailing data",
                reader.len()
            )));
        }

        let entries = match value {
            Value::Map(entries) => entries,
            other => {
                return Err(SignModeError::Decode(format!(
                    "sign doc is {}, expected a map",
                    kind(&other)
                )))
            }
        };

        let mut screens = Vec::new();
        for (k, value) in entries {
            if int_key(&k) != Some(SIGN_DOC_SCREENS_KEY) {
                continue;
            }
            let items = match value {
                Value::Array(items) => items,
                Value::Null => Vec::new(),
                other => {
                    return Err(SignModeError::Decode(format!(
                        "screens is {}, expected an array",
                        kind(&other)
                    )))
                }
            };
            if items.len() > limits.max_screens {
                return Err(SignModeError::Decode(format!(
                    "{} screens exceeds limit of {}",
                    items.len(),
                    limits.max_screens
                )));
            }
            screens = items
                .into_iter()
                .enumerate()
                .map(|(i, item)| Screen::from_cbor(item, i, limits))
                .collect::<SignModeResult<Vec<_>>>()?;
        }

        Ok(Self { screens })
    }

    /// Encode as CBOR with integer keys, omitting zero-valued fields
    pub fn to_cbor(&self) -> SignModeResult<Vec<u8>> {
        let mut entries = Vec::new();
        if !self.screens.is_empty() {
            entries.push((
                key(SIGN_DOC_SCREENS_KEY),
                Value::Array(self.screens.iter().map(Screen::to_cbor).collect()),
            ));
        }
        let mut out = Vec::new();
        ciborium::ser::into_writer(&Value::Map(entries), &mut out)
            .map_err(|e| SignModeError::Encode(e.to_string()))?;
        Ok(out)
    }

    /// One line per screen, in screen order
    pub fn lines(&self) -> Vec<String> {
        self.screens.iter().map(Screen::to_line).collect()
    }

    /// Lines joined with `\n`, no trailing newline
    pub fn plaintext(&self) -> String {
        self.lines().join("\n")
    }
}

fn key(k: u64) -> Value {
    Value::Integer(Integer::from(k))
}

fn int_key(value: &Value) -> Option<u64> {
    match value {
        Value::Integer(i) => u64::try_from(*i).ok(),
        _ => None,
    }
}

fn text_field(value: Value, index: usize, field: &str) -> SignModeResult<String> {
    match value {
        Value::Text(s) => Ok(s),
        Value::Null => Ok(String::new()),
        other => Err(SignModeError::Decode(format!(
            "screen {} {} is {}, expected a text string",
            index,
            field,
            kind(&other)
        ))),
    }
}

fn indent_field(value: Value, index: usize, limits: &RenderLimits) -> SignModeResult<u32> {
    let raw = match value {
        Value::Integer(i) => i128::from(i),
        Value::Null => 0,
        other => {
            return Err(SignModeError::Decode(format!(
                "screen {} indent is {}, expected an unsigned integer",
                index,
                kind(&other)
            )))
        }
    };
    if raw < 0 {
        return Err(SignModeError::Decode(format!(
            "screen {} has negative indent {}",
            index, raw
        )));
    }
    if raw > limits.max_indent as i128 {
        return Err(SignModeError::Decode(format!(
            "screen {} indent {} exceeds limit of {}",
            index, raw, limits.max_indent
        )));
    }
    // bounded by max_indent above
    Ok(raw as u32)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Integer(_) => "an integer",
        Value::Bytes(_) => "a byte string",
        Value::Float(_) => "a float",
        Value::Text(_) => "a text string",
        Value::Bool(_) => "a bool",
        Value::Null => "null",
        Value::Tag(_, _) => "a tagged value",
        Value::Array(_) => "an array",
        Value::Map(_) => "a map",
        _ => "an unsupported value",
    }
}
