//! Server-sent event decoding for OpenAI streaming responses.
//!
//! The streaming endpoints emit `data: {json}` lines terminated by a
//! `data: [DONE]` sentinel. Network chunks do not align with event
//! boundaries, so the decoder buffers bytes until a full line arrives.

/// Incremental decoder for an SSE byte stream.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
    finished: bool,
}

impl SseDecoder {
    /// Create an empty decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the `[DONE]` sentinel has been observed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Feed one network chunk, returning the data payloads of every event
    /// completed by it.
    ///
    /// Partial lines are carried over to the next call. Events after the
    /// `[DONE]` sentinel are ignored.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut payloads = Vec::new();
        if self.finished {
            return payloads;
        }

        self.buffer.extend_from_slice(chunk);

        while let Some(newline) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=newline).collect();
            let line = String::from_utf8_lossy(&line);
            let line = line.trim_end_matches(['\n', '\r']);

            let Some(payload) = line.strip_prefix("data:") else {
                continue;
            };
            let payload = payload.trim_start();

            if payload == "[DONE]" {
                self.finished = true;
                break;
            }

            if !payload.is_empty() {
                payloads.push(payload.to_string());
            }
        }

        payloads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_one_event_per_line() {
        let mut decoder = SseDecoder::new();
        let payloads = decoder.push(b"data: {\"a\":1}\n\ndata: {\"b\":2}\n\n");
        assert_eq!(payloads, vec!["{\"a\":1}", "{\"b\":2}"]);
        assert!(!decoder.is_finished());
    }

    #[test]
    fn carries_partial_lines_between_chunks() {
        let mut decoder = SseDecoder::new();
        assert!(decoder.push(b"data: {\"text\":").is_empty());
        let payloads = decoder.push(b"\"Hi\"}\n");
        assert_eq!(payloads, vec!["{\"text\":\"Hi\"}"]);
    }

    #[test]
    fn stops_at_the_done_sentinel() {
        let mut decoder = SseDecoder::new();
        let payloads = decoder.push(b"data: {\"a\":1}\ndata: [DONE]\ndata: {\"b\":2}\n");
        assert_eq!(payloads, vec!["{\"a\":1}"]);
        assert!(decoder.is_finished());
        assert!(decoder.push(b"data: {\"c\":3}\n").is_empty());
    }

    #[test]
    fn ignores_comment_and_blank_lines() {
        let mut decoder = SseDecoder::new();
        let payloads = decoder.push(b": keep-alive\r\n\r\ndata: {\"a\":1}\r\n");
        assert_eq!(payloads, vec!["{\"a\":1}"]);
    }
}
