//! Performance tests for escape sequence filtering.
//!
//! These tests verify that filtering stays linear:
//! - 16MB of colored output filtered in < 5 seconds
//! - streaming in small chunks costs no more than one large write
//!
//! Run with: `cargo test --test performance`

use std::io::Write;
use std::time::{Duration, Instant};

use termtint::filter::ColorWriter;

// ========================================================================
// Test Infrastructure
// ========================================================================

/// Colored log lines, roughly `target` bytes in total, and the same text
/// without sequences.
fn generate_colored_log(target: usize) -> (Vec<u8>, Vec<u8>) {
    let mut colored = Vec::with_capacity(target);
    let mut plain = Vec::with_capacity(target);
    let mut i = 0usize;
    while colored.len() < target {
        let line = format!("line {i} status ");
        colored.extend_from_slice(line.as_bytes());
        plain.extend_from_slice(line.as_bytes());
        let (code, word) = if i % 3 == 0 {
            ("\x1b[0;1;31m", "FAIL")
        } else {
            ("\x1b[0;38;2;0;215;95m", "ok")
        };
        colored.extend_from_slice(code.as_bytes());
        colored.extend_from_slice(word.as_bytes());
        colored.extend_from_slice(b"\x1b[0m\n");
        plain.extend_from_slice(word.as_bytes());
        plain.push(b'\n');
        i += 1;
    }
    (colored, plain)
}

fn filter_in_chunks(input: &[u8], chunk: usize) -> (Vec<u8>, Duration) {
    let start = Instant::now();
    let mut writer = ColorWriter::new(Vec::with_capacity(input.len())).streaming();
    for piece in input.chunks(chunk) {
        writer.write_all(piece).unwrap();
    }
    let out = writer.into_inner().unwrap();
    (out, start.elapsed())
}

// ========================================================================
// Throughput
// ========================================================================

#[test]
fn filters_16mb_under_five_seconds() {
    let (colored, plain) = generate_colored_log(16 * 1024 * 1024);
    let (out, elapsed) = filter_in_chunks(&colored, colored.len());

    assert!(out == plain, "filtered output differs from plain text");
    assert!(
        elapsed < Duration::from_secs(5),
        "filtering 16MB took {:?}",
        elapsed
    );
}

#[test]
fn small_chunks_stay_linear() {
    let (colored, plain) = generate_colored_log(4 * 1024 * 1024);

    let (whole, whole_time) = filter_in_chunks(&colored, colored.len());
    let (chunked, chunked_time) = filter_in_chunks(&colored, 7);

    assert!(whole == plain);
    assert!(chunked == plain);
    // Chunking adds per-write overhead but must not rescan earlier data.
    assert!(
        chunked_time < whole_time * 50 + Duration::from_secs(2),
        "7-byte chunks took {:?} vs {:?} for one write",
        chunked_time,
        whole_time
    );
}
