//! Legacy single-byte code page for converter output.
//!
//! Legacy Bengali fonts are installed as Windows ANSI fonts, so each glyph is
//! addressed by a Windows-1252 byte. The converter works in Unicode
//! characters that stand for those bytes; this module moves between the two.

use encoding_rs::{EncoderResult, WINDOWS_1252};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("character {ch:?} at byte offset {offset} has no legacy code page byte")]
    Unmappable { ch: char, offset: usize },
    #[error("input too long to encode")]
    TooLong,
}

/// Encode converted text to legacy bytes, rejecting characters the code page
/// cannot represent.
pub fn encode(text: &str) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = WINDOWS_1252.new_encoder();
    let capacity = encoder
        .max_buffer_length_from_utf8_without_replacement(text.len())
        .ok_or(EncodeError::TooLong)?;
    let mut out = vec![0u8; capacity];
    let (result, read, written) = encoder.encode_from_utf8_without_replacement(text, &mut out, true);
    match result {
        EncoderResult::InputEmpty => {
            out.truncate(written);
            Ok(out)
        }
        EncoderResult::Unmappable(ch) => Err(EncodeError::Unmappable {
            ch,
            offset: read - ch.len_utf8(),
        }),
        // The buffer is sized for the worst case.
        EncoderResult::OutputFull => Err(EncodeError::TooLong),
    }
}

/// Encode converted text to legacy bytes. Characters outside the code page
/// become HTML numeric character references.
pub fn encode_lossy(text: &str) -> Vec<u8> {
    let (bytes, _, _) = WINDOWS_1252.encode(text);
    bytes.into_owned()
}

/// Read a legacy byte stream back as the characters the converter emits.
pub fn decode(bytes: &[u8]) -> String {
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text.into_owned()
}

/// Whether every character of `text` has a legacy code page byte.
pub fn is_representable(text: &str) -> bool {
    encode(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_identity() {
        assert_eq!(encode("Kv 2023").unwrap(), b"Kv 2023".to_vec());
    }

    #[test]
    fn glyph_characters_map_to_high_bytes() {
        assert_eq!(encode("‡").unwrap(), vec![0x87]);
        assert_eq!(encode("°").unwrap(), vec![0xB0]);
        assert_eq!(encode("©").unwrap(), vec![0xA9]);
        assert_eq!(encode("š^").unwrap(), vec![0x9A, b'^']);
    }

    #[test]
    fn unmappable_reports_char_and_offset() {
        let err = encode("Kক").unwrap_err();
        assert_eq!(err, EncodeError::Unmappable { ch: 'ক', offset: 1 });
    }

    #[test]
    fn empty_input() {
        assert_eq!(encode("").unwrap(), Vec::<u8>::new());
        assert!(is_representable(""));
    }

    #[test]
    fn lossy_replaces_unmappable() {
        assert_eq!(encode_lossy("K\u{1F600}"), b"K&#128512;".to_vec());
    }

    #[test]
    fn decode_high_bytes() {
        assert_eq!(decode(&[0x87, b'K', b'v']), "‡Kv");
    }

    #[test]
    fn representability() {
        assert!(is_representable("¶µ‡Š…"));
        assert!(!is_representable("ক"));
    }
}
