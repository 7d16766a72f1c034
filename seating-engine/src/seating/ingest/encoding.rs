//! Text decoding for uploaded guest lists
//!
//! Spreadsheet exports arrive as UTF-8 (with or without BOM) or a legacy
//! Western single-byte code page. A byte-order mark decides outright;
//! otherwise every candidate decodes the bytes and the one producing the
//! fewest invalid-character markers wins, UTF-8 on ties.

use encoding_rs::{Encoding, ISO_8859_15, UTF_8, WINDOWS_1252};
use tracing::instrument;

/// Candidates tried in preference order
const CANDIDATES: [&Encoding; 3] = [UTF_8, WINDOWS_1252, ISO_8859_15];

/// Decoded text plus the encoding that produced it
#[derive(Debug, Clone)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static Encoding,
    /// Replacement characters and C1 controls left in `text`
    pub markers: usize,
}

/// Count characters that betray a wrong decoding
///
/// U+FFFD appears where bytes were invalid; C1 controls (U+0080..U+009F)
/// appear when Latin-9 decodes bytes that windows-1252 maps to
/// punctuation.
pub fn invalid_markers(text: &str) -> usize {
    text.chars()
        .filter(|c| *c == '\u{FFFD}' || ('\u{80}'..='\u{9F}').contains(c))
        .count()
}

/// Decode `bytes` with the best-fitting encoding
#[instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_best(bytes: &[u8]) -> DecodedText {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        let text = text.into_owned();
        let markers = invalid_markers(&text);
        tracing::debug!(encoding = encoding.name(), "Decoded using byte-order mark");
        return DecodedText {
            text,
            encoding,
            markers,
        };
    }

    let mut best: Option<DecodedText> = None;
    for encoding in CANDIDATES {
        let (text, _) = encoding.decode_without_bom_handling(bytes);
        let markers = invalid_markers(&text);
        let better = best.as_ref().is_none_or(|current| markers < current.markers);
        if better {
            best = Some(DecodedText {
                text: text.into_owned(),
                encoding,
                markers,
            });
        }
        if markers == 0 {
            break;
        }
    }

    let decoded = best.unwrap_or_else(|| DecodedText {
        text: String::new(),
        encoding: UTF_8,
        markers: 0,
    });
    tracing::debug!(
        encoding = decoded.encoding.name(),
        markers = decoded.markers,
        "Selected text encoding"
    );
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_bom_is_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("Zoë,Brontë\n".as_bytes());
        let decoded = decode_best(&bytes);
        assert_eq!(decoded.encoding, UTF_8);
        assert_eq!(decoded.text, "Zoë,Brontë\n");
    }

    #[test]
    fn test_plain_utf8_wins_ties() {
        let decoded = decode_best("José,Núñez".as_bytes());
        assert_eq!(decoded.encoding, UTF_8);
        assert_eq!(decoded.text, "José,Núñez");
        assert_eq!(decoded.markers, 0);
    }

    #[test]
    fn test_latin1_bytes_fall_back_to_windows_1252() {
        // "José" in a single-byte Western code page
        let bytes = [b'J', b'o', b's', 0xE9, b',', b'R', b'u', b'i', b'z'];
        let decoded = decode_best(&bytes);
        assert_eq!(decoded.encoding, WINDOWS_1252);
        assert_eq!(decoded.text, "José,Ruiz");
    }

    #[test]
    fn test_markers() {
        assert_eq!(invalid_markers("abc"), 0);
        assert_eq!(invalid_markers("a\u{FFFD}b\u{85}"), 2);
    }
}
