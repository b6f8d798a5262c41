//! CLI definitions for termtint
//!
//! Kept in the library, separate from main.rs, so xtask can render man
//! pages from the same definitions.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

use crate::terminal::ColorMode;

/// Version string; dev builds carry the git commit.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

/// Version string; dev builds carry the git commit.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build clap styles matching the default roles.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD | Effects::UNDERLINE)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::BrightBlack.on_default())
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "termtint")]
#[command(about = "Style text with ANSI escape sequences, or strip them from output")]
#[command(
    long_about = "termtint compiles compact style strings into ANSI SGR escape sequences
and removes CSI escape sequences from output that is not going to a terminal.

STYLE STRINGS:
    foreground[:background], each part COLOR[+MODIFIERS]

    COLOR       black red green yellow blue magenta cyan white,
                a palette index 1-255, or #RRGGBB
    MODIFIERS   b bold, d dim, B blink, u underline, i invert,
                s strikethrough, h bright color variant

    off         no styling
    reset       just the reset sequence

EXAMPLES:
    termtint paint red+b error: disk full
    termtint paint '#ff8700:black' warning
    some-tool | termtint strip > log.txt
    termtint codes 160+u:white"
)]
#[command(version = VERSION, styles = build_cli_styles())]
pub struct Cli {
    /// When to emit color
    #[arg(long, value_enum, global = true, help = "When to emit color [default: from config]")]
    pub color: Option<ColorMode>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print text with a style
    #[command(long_about = "Print TEXT styled with STYLE.

Without TEXT, standard input is styled line by line. Escape sequences are
only emitted when standard output is a terminal (see --color).

EXAMPLES:
    termtint paint green ok
    termtint paint yellow+h:blue 'bright yellow on blue'
    echo done | termtint paint --color always cyan")]
    Paint {
        /// Style string, e.g. red+b or #ff0088:black
        style: String,
        /// Text to print; read from stdin when omitted
        text: Vec<String>,
    },

    /// Copy stdin to stdout without CSI escape sequences
    #[command(long_about = "Copy standard input to standard output, removing CSI escape
sequences (colors, cursor movement, erase) along the way.

Incomplete or malformed sequences are kept as they are.

EXAMPLE:
    cargo build --color always 2>&1 | termtint strip > build.log")]
    Strip,

    /// Show the escape sequence a style compiles to
    #[command(long_about = "Print the escape sequence STYLE compiles to, with the escape
byte written as \\x1b.

EXAMPLE:
    termtint codes red+h:green+d     prints \\x1b[0;91;2;42m")]
    Codes {
        /// Style string to compile
        style: String,
    },

    /// List configured roles, each shown in its own style
    Roles,

    /// Generate a shell completion script
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}
