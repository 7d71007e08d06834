//! Line-based codec for tokio.
//!
//! [`LineCodec`] frames an arbitrary-sized byte stream into lines terminated
//! by `\n` (with an optional preceding `\r`), decoding each line with the
//! session's configured text encoding. Outbound lines are sanitized,
//! encoded and terminated with `\r\n`.
//!
//! Encoding failures never drop a line: inbound bytes that do not decode
//! cleanly are passed through as raw UTF-8, or read byte-for-byte as
//! windows-1252 when they are not UTF-8 either. Outbound text the encoding
//! cannot represent is sent as raw UTF-8.
//!
//! An unterminated tail left when the stream ends is discarded.

use std::borrow::Cow;

use bytes::BytesMut;
use encoding::Encoding;
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, info};

use crate::error;

/// Default cap for a single line, terminator included.
pub const MAX_IRC_LINE_LEN: usize = 8191;

/// Line-based codec that handles newline-terminated messages.
#[derive(Debug, Clone)]
pub struct LineCodec {
    encoding: &'static Encoding,
    /// Index of next byte to check for newline
    next_index: usize,
    /// Maximum line length
    max_len: usize,
}

impl LineCodec {
    /// Create a new codec with the specified encoding.
    ///
    /// # Arguments
    /// * `label` - Encoding label (e.g., "utf-8", "latin1")
    pub fn new(label: &str) -> error::Result<Self> {
        let encoding = Encoding::for_label(label.as_bytes())
            .ok_or_else(|| error::ProtocolError::UnknownEncoding(label.to_string()))?;
        Ok(Self {
            encoding,
            next_index: 0,
            max_len: MAX_IRC_LINE_LEN,
        })
    }

    /// Create a new codec with custom max line length.
    pub fn with_max_len(label: &str, max_len: usize) -> error::Result<Self> {
        let mut codec = Self::new(label)?;
        codec.max_len = max_len;
        Ok(codec)
    }

    /// Name of the encoding in use.
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Decode raw line bytes into text.
    ///
    /// Falls back to raw UTF-8 pass-through when the configured encoding
    /// rejects the bytes, then to windows-1252, which maps every byte to a
    /// character. Distinct byte strings therefore never collapse into the
    /// same replacement text.
    pub fn decode_text(&self, raw: &[u8]) -> String {
        if let Some(text) = self
            .encoding
            .decode_without_bom_handling_and_without_replacement(raw)
        {
            return text.into_owned();
        }

        debug!(encoding = self.encoding.name(), "data not decoded, passing raw bytes");
        match std::str::from_utf8(raw) {
            Ok(text) => text.to_string(),
            Err(_) => {
                let (text, _had_errors) = encoding::WINDOWS_1252.decode_without_bom_handling(raw);
                text.into_owned()
            }
        }
    }

    /// Encode text for the wire, falling back to raw UTF-8 bytes when the
    /// configured encoding cannot represent it.
    pub fn encode_text<'a>(&self, text: &'a str) -> Cow<'a, [u8]> {
        let (bytes, _enc, had_errors) = self.encoding.encode(text);
        if had_errors {
            info!(encoding = self.encoding.name(), "data not encoded, sending raw bytes");
            Cow::Borrowed(text.as_bytes())
        } else {
            bytes
        }
    }

    /// Truncate an outbound line at its first CR or LF.
    ///
    /// Keeps message text from smuggling a second protocol line.
    pub fn sanitize(mut data: String) -> String {
        if let Some(pos) = data.find(['\r', '\n']) {
            data.truncate(pos);
        }
        data
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = error::ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> error::Result<Option<String>> {
        // Look for newline starting from where we left off
        if let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') {
            let line = src.split_to(self.next_index + offset + 1);
            self.next_index = 0;

            if line.len() > self.max_len {
                return Err(error::ProtocolError::MessageTooLong {
                    actual: line.len(),
                    limit: self.max_len,
                });
            }

            // Strip LF and any CR run before it (non-RFC servers send bare LF)
            let mut end = line.len() - 1;
            while end > 0 && line[end - 1] == b'\r' {
                end -= 1;
            }

            Ok(Some(self.decode_text(&line[..end])))
        } else {
            // No complete line yet - remember where we stopped
            self.next_index = src.len();

            if src.len() > self.max_len {
                return Err(error::ProtocolError::MessageTooLong {
                    actual: src.len(),
                    limit: self.max_len,
                });
            }

            Ok(None)
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> error::Result<Option<String>> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }
        if !src.is_empty() {
            debug!(bytes = src.len(), "dropping unterminated line at end of stream");
            src.clear();
        }
        self.next_index = 0;
        Ok(None)
    }
}

impl Encoder<String> for LineCodec {
    type Error = error::ProtocolError;

    fn encode(&mut self, msg: String, dst: &mut BytesMut) -> error::Result<()> {
        let line = Self::sanitize(msg);
        let bytes = self.encode_text(&line);
        dst.reserve(bytes.len() + 2);
        dst.extend_from_slice(&bytes);
        dst.extend_from_slice(b"\r\n");
        Ok(())
    }
}
