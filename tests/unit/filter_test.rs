//! Unit tests for escape sequence filtering

use proptest::prelude::*;
use std::io::Write;

use termtint::filter::{strip_str, ColorWriter, MAX_HELD_BYTES};
use termtint::terminal::Fixed;

use crate::helpers::{filter_once, tty_scheme};

// ============================================================================
// Single writes
// ============================================================================

#[test]
fn non_terminal_count_is_filtered_length() {
    let (n, out) = filter_once(b"\x1b[0;91mtest\x1b[0m", false);
    assert_eq!(out, b"test");
    assert_eq!(n, 4);
}

#[test]
fn terminal_output_is_untouched() {
    let input = b"\x1b[0;91mtest\x1b[0m";
    let (n, out) = filter_once(input, true);
    assert_eq!(out, input);
    assert_eq!(n, input.len());
}

#[test]
fn ambiguous_input_passes_through() {
    for input in [
        &b"\x1b"[..],
        &b"\x1b["[..],
        &b"\x1b[1;2"[..],
        &b"\x1b[31\x1ftext"[..],
        &b"[31mtext"[..],
        &b"\x1b]0;title\x07"[..],
    ] {
        let (n, out) = filter_once(input, false);
        assert_eq!(out, input);
        assert_eq!(n, input.len());
    }
}

#[test]
fn io_write_reports_consumed_bytes() {
    let mut writer = ColorWriter::new(Vec::new());
    let n = writer.write(b"\x1b[31mab\x1b[0m").unwrap();
    assert_eq!(n, 11);
    assert_eq!(writer.get_ref().as_slice(), b"ab");
}

#[test]
fn write_macro_filters_formatted_output() {
    let red = tty_scheme().color_func("red");
    let mut writer = ColorWriter::new(Vec::new());
    write!(writer, "[{}] {}", red.apply("E"), "bad input").unwrap();
    assert_eq!(writer.get_ref().as_slice(), b"[E] bad input");
}

// ============================================================================
// Streaming
// ============================================================================

#[test]
fn streaming_joins_split_sequences() {
    let mut writer = ColorWriter::new(Vec::new()).streaming();
    assert_eq!(writer.write_filtered(b"one\x1b[3").unwrap(), 3);
    assert_eq!(writer.held(), b"\x1b[3");
    assert_eq!(writer.write_filtered(b"1mtwo").unwrap(), 3);
    assert!(writer.held().is_empty());
    assert_eq!(writer.into_inner().unwrap(), b"onetwo");
}

#[test]
fn streaming_releases_held_bytes_on_flush() {
    let mut writer = ColorWriter::new(Vec::new()).streaming();
    writer.write_all(b"end\x1b[").unwrap();
    assert_eq!(writer.get_ref().as_slice(), b"end");
    writer.flush().unwrap();
    assert_eq!(writer.get_ref().as_slice(), b"end\x1b[");
}

#[test]
fn streaming_never_holds_more_than_the_cap() {
    let mut input = b"\x1b[".to_vec();
    input.extend(std::iter::repeat(b'1').take(MAX_HELD_BYTES));
    let mut writer = ColorWriter::new(Vec::new()).streaming();
    writer.write_filtered(&input).unwrap();
    assert!(writer.held().is_empty());
    assert_eq!(writer.get_ref().as_slice(), input.as_slice());
}

#[test]
fn switching_to_terminal_releases_held_bytes() {
    let mut writer = ColorWriter::new(Vec::new()).streaming();
    writer.write_filtered(b"a\x1b").unwrap();
    writer.set_terminal(Fixed(true));
    assert_eq!(writer.write_filtered(b"[0m").unwrap(), 4);
    assert_eq!(writer.into_inner().unwrap(), b"a\x1b[0m");
}

// ============================================================================
// Properties
// ============================================================================

fn part_strategy() -> impl Strategy<Value = String> {
    let color = prop_oneof![
        Just(String::new()),
        Just("red".to_string()),
        Just("white".to_string()),
        (1u16..=255).prop_map(|n| n.to_string()),
        any::<[u8; 3]>().prop_map(|[r, g, b]| format!("#{r:02x}{g:02x}{b:02x}")),
        "[a-z]{1,6}",
    ];
    (color, "[bdBuish]{0,4}").prop_map(|(color, mods)| {
        if mods.is_empty() {
            color
        } else {
            format!("{color}+{mods}")
        }
    })
}

fn style_strategy() -> impl Strategy<Value = String> {
    (part_strategy(), proptest::option::of(part_strategy())).prop_map(|(fg, bg)| match bg {
        Some(bg) => format!("{fg}:{bg}"),
        None => fg,
    })
}

proptest! {
    #[test]
    fn stripping_styled_text_recovers_it(style in style_strategy(), text in "[^\x1b]*") {
        let styled = tty_scheme().color_func(&style).apply(&text);
        prop_assert_eq!(strip_str(&styled), text.as_str());

        let (_, out) = filter_once(styled.as_bytes(), false);
        prop_assert_eq!(out, text.as_bytes());
    }

    #[test]
    fn terminal_writes_are_identity(input in proptest::collection::vec(any::<u8>(), 0..256)) {
        let (n, out) = filter_once(&input, true);
        prop_assert_eq!(n, input.len());
        prop_assert_eq!(out, input);
    }

    #[test]
    fn filtered_output_never_grows(input in proptest::collection::vec(any::<u8>(), 0..256)) {
        let (n, out) = filter_once(&input, false);
        prop_assert_eq!(n, out.len());
        prop_assert!(out.len() <= input.len());
    }
}
