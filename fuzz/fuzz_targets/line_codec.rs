//! Fuzz target for the line framer.
//!
//! Decodes arbitrary bytes in two chunks and checks the result matches a
//! single-chunk decode.

#![no_main]

use bytes::BytesMut;
use libfuzzer_sys::fuzz_target;
use tokio_util::codec::Decoder;
use wrexbot::LineCodec;

fn decode_all(chunks: &[&[u8]]) -> Vec<String> {
    let mut codec = match LineCodec::with_max_len("utf-8", 1024) {
        Ok(codec) => codec,
        Err(_) => return Vec::new(),
    };
    let mut buf = BytesMut::new();
    let mut lines = Vec::new();
    for chunk in chunks {
        buf.extend_from_slice(chunk);
        loop {
            match codec.decode(&mut buf) {
                Ok(Some(line)) => lines.push(line),
                Ok(None) => break,
                Err(_) => return lines,
            }
        }
    }
    lines
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > 1024 {
        return;
    }
    let split = data[0] as usize % data.len();
    let (head, tail) = data.split_at(split);
    assert_eq!(decode_all(&[head, tail]), decode_all(&[data]));
});
