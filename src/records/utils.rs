//! Text decoding helpers

use encoding_rs::Encoding;
use log::{debug, warn};

use super::types::error::{RecordError, Result};

/// Resolves a WHATWG encoding label such as `utf-8`, `latin1` or `gbk`.
pub fn parse_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| RecordError::UnknownEncoding(label.to_owned()))
}

/// Decodes raw file bytes to text.
///
/// A byte order mark wins over `fallback`. Malformed sequences are replaced
/// with U+FFFD rather than failing the whole file.
pub fn decode_text(bytes: &[u8], fallback: &'static Encoding) -> String {
    let (text, used, had_errors) = fallback.decode(bytes);
    if used != fallback {
        debug!("Byte order mark selected {} over {}", used.name(), fallback.name());
    }
    if had_errors {
        warn!("Input contained malformed {} sequences; they were replaced", used.name());
    }
    text.into_owned()
}
