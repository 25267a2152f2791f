//! Incremental UTF-8 decoding for streamed response bodies.
//!
//! Network chunks do not align with character boundaries: a multi-byte
//! sequence may span two chunks. The decoder defers an incomplete trailing
//! sequence to the next chunk and substitutes U+FFFD for bytes that can
//! never form a valid sequence, so a malformed chunk degrades output but
//! never aborts the relay.

const REPLACEMENT: char = '\u{FFFD}';

/// Incremental UTF-8 decoder.
#[derive(Debug, Default)]
pub struct StreamDecoder {
    pending: Vec<u8>,
}

impl StreamDecoder {
    /// Create an empty decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk, returning all text decodable so far.
    ///
    /// An incomplete multi-byte sequence at the end of the chunk is held
    /// back and prepended to the next chunk. Invalid bytes decode to
    /// U+FFFD.
    pub fn push(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);

        let mut out = String::new();
        let mut rest: &[u8] = &self.pending;

        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    out.push_str(valid);
                    rest = &[];
                    break;
                }
                Err(e) => {
                    let valid_up_to = e.valid_up_to();
                    // Safe split: everything before valid_up_to is valid UTF-8.
                    out.push_str(std::str::from_utf8(&rest[..valid_up_to]).expect("valid prefix"));
                    rest = &rest[valid_up_to..];

                    match e.error_len() {
                        // Invalid sequence of known length: substitute and continue.
                        Some(len) => {
                            out.push(REPLACEMENT);
                            rest = &rest[len..];
                        }
                        // Incomplete sequence at the end: defer to the next chunk.
                        None => break,
                    }
                }
            }
        }

        self.pending = rest.to_vec();
        out
    }

    /// Flush any deferred bytes at end of stream.
    ///
    /// A sequence still incomplete at end of stream can never complete, so
    /// it decodes to a single U+FFFD.
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            String::new()
        } else {
            self.pending.clear();
            REPLACEMENT.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_chunks_pass_through() {
        let mut decoder = StreamDecoder::new();
        assert_eq!(decoder.push(b"Hel"), "Hel");
        assert_eq!(decoder.push(b"lo, "), "lo, ");
        assert_eq!(decoder.push(b"world"), "world");
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn multibyte_sequence_split_across_chunks_is_deferred() {
        // "é" is 0xC3 0xA9.
        let mut decoder = StreamDecoder::new();
        assert_eq!(decoder.push(&[b'h', 0xC3]), "h");
        assert_eq!(decoder.push(&[0xA9, b'!']), "é!");
    }

    #[test]
    fn four_byte_sequence_split_three_ways() {
        // "𝄞" is 0xF0 0x9D 0x84 0x9E.
        let mut decoder = StreamDecoder::new();
        assert_eq!(decoder.push(&[0xF0]), "");
        assert_eq!(decoder.push(&[0x9D, 0x84]), "");
        assert_eq!(decoder.push(&[0x9E]), "𝄞");
    }

    #[test]
    fn invalid_bytes_become_replacement_characters() {
        let mut decoder = StreamDecoder::new();
        assert_eq!(decoder.push(&[b'a', 0xFF, b'b']), "a\u{FFFD}b");
    }

    #[test]
    fn truncated_sequence_at_end_of_stream_flushes_as_replacement() {
        let mut decoder = StreamDecoder::new();
        assert_eq!(decoder.push(&[b'x', 0xE2, 0x82]), "x");
        assert_eq!(decoder.finish(), "\u{FFFD}");
    }
}
