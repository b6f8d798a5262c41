//! Terminal capability checks
//!
//! Whether a destination is a terminal is asked every time output is
//! formatted or filtered, never cached: streams get redirected and
//! environment overrides change while a process runs.

use std::env;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Environment variable that disables color when set and non-empty.
pub const NO_COLOR: &str = "NO_COLOR";

/// Environment variable that forces color when set, non-empty and not `0`.
pub const FORCE_COLOR: &str = "FORCE_COLOR";

/// Answers whether a destination is an interactive terminal.
pub trait TerminalCheck: Send + Sync {
    fn is_terminal(&self) -> bool;
}

/// Shared, type-erased capability check.
pub type SharedCheck = Arc<dyn TerminalCheck>;

impl<F> TerminalCheck for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_terminal(&self) -> bool {
        self()
    }
}

/// A check with a constant answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed(pub bool);

impl TerminalCheck for Fixed {
    fn is_terminal(&self) -> bool {
        self.0
    }
}

/// One of the process's standard streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
    Stdin,
}

impl TerminalCheck for Stream {
    fn is_terminal(&self) -> bool {
        let stream = match self {
            Stream::Stdout => atty::Stream::Stdout,
            Stream::Stderr => atty::Stream::Stderr,
            Stream::Stdin => atty::Stream::Stdin,
        };
        atty::is(stream)
    }
}

/// When to emit color.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when the stream is a terminal, honoring `NO_COLOR` and `FORCE_COLOR`
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorMode {
    /// Capability check for `stream` under this mode.
    pub fn check(self, stream: Stream) -> ModeCheck {
        ModeCheck { mode: self, stream }
    }

    /// Decide given an environment lookup and the stream's TTY status.
    ///
    /// `is_tty` is only consulted when no override applies.
    pub fn decide(
        self,
        lookup: impl Fn(&str) -> Option<String>,
        is_tty: impl FnOnce() -> bool,
    ) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if lookup(NO_COLOR).is_some_and(|v| !v.is_empty()) {
                    return false;
                }
                if lookup(FORCE_COLOR).is_some_and(|v| !v.is_empty() && v != "0") {
                    return true;
                }
                is_tty()
            }
        }
    }
}

/// A [`ColorMode`] bound to a standard stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeCheck {
    mode: ColorMode,
    stream: Stream,
}

impl TerminalCheck for ModeCheck {
    fn is_terminal(&self) -> bool {
        self.mode
            .decide(|key| env::var(key).ok(), || self.stream.is_terminal())
    }
}
