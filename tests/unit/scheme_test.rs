//! Unit tests for color schemes

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use termtint::terminal::{ColorMode, Fixed, Stream};
use termtint::{ColorScheme, Config, SchemeOptions};

use crate::helpers::tty_scheme;

#[test]
fn stdout_and_stderr_schemes_share_one_cache() {
    let stdout = tty_scheme();
    let stderr = stdout.clone_with(SchemeOptions::default().terminal(Fixed(false)));

    assert_eq!(stdout.paint("yellow+b", "warn"), "\x1b[0;1;33mwarn\x1b[0m");
    assert_eq!(stderr.paint("yellow+b", "warn"), "warn");
    assert_eq!(stdout.cache().len(), 1);
    assert!(stderr.cache().shares_with(stdout.cache()));
}

#[test]
fn terminal_flip_reaches_existing_formatters() {
    let tty = Arc::new(AtomicBool::new(true));
    let check = {
        let tty = tty.clone();
        move || tty.load(Ordering::Relaxed)
    };
    let scheme = ColorScheme::new(SchemeOptions::default().terminal(check));
    let blue = scheme.color_func("blue");

    assert_eq!(blue.apply("x"), "\x1b[0;34mx\x1b[0m");
    tty.store(false, Ordering::Relaxed);
    assert_eq!(blue.apply("x"), "x");
    assert!(!scheme.is_terminal());
}

#[test]
fn schemes_are_usable_across_threads() {
    let scheme = tty_scheme();
    let handles: Vec<_> = (1u8..=16)
        .map(|n| {
            let scheme = scheme.clone();
            thread::spawn(move || scheme.paint(&n.to_string(), "x"))
        })
        .collect();

    for (n, handle) in (1u8..=16).zip(handles) {
        assert_eq!(handle.join().unwrap(), format!("\x1b[0;38;5;{n}mx\x1b[0m"));
    }
    assert_eq!(scheme.cache().len(), 16);
}

#[test]
fn config_roles_and_never_mode() {
    let mut config = Config::default();
    config.color = ColorMode::Never;
    let scheme = ColorScheme::from_config(&config, Stream::Stdout);

    assert!(!scheme.is_terminal());
    assert_eq!(scheme.role("error").apply("boom"), "boom");
    assert_eq!(
        scheme.role("error").code().map(|c| c.as_str()),
        Some("\x1b[0;1;31m")
    );
}

#[test]
fn always_mode_colors_without_a_tty() {
    let mut config = Config::default();
    config.color = ColorMode::Always;
    let scheme = ColorScheme::from_config(&config, Stream::Stdout);
    assert_eq!(scheme.role("success").apply("ok"), "\x1b[0;32mok\x1b[0m");
}

#[test]
fn clone_with_roles_replaces_only_roles() {
    let scheme = tty_scheme();
    let mut roles = BTreeMap::new();
    roles.insert("note".to_string(), "magenta".to_string());
    let custom = scheme.clone_with(SchemeOptions::default().roles(roles));

    assert_eq!(custom.role("note").apply("n"), "\x1b[0;35mn\x1b[0m");
    assert_eq!(scheme.role("note").apply("n"), "n");
    assert!(custom.cache().shares_with(scheme.cache()));
}
