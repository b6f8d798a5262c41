//! Color schemes: cached style formatters bound to a terminal check
//!
//! A [`ColorScheme`] hands out [`ColorFunc`] formatters for style
//! descriptors. Compiled sequences are cached for the lifetime of the
//! scheme and shared with every scheme cloned from it, so one cache can
//! serve both a stdout-bound and a stderr-bound scheme.
//!
//! Formatters keep the compiled sequence and ask the terminal check each
//! time they are applied. Flipping the check changes the output of
//! formatters that were handed out earlier.

mod cache;

pub use cache::StyleCache;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::style::{CompiledCode, NamedColor};
use crate::terminal::{SharedCheck, Stream, TerminalCheck};

/// Construction options for [`ColorScheme`].
#[derive(Clone, Default)]
pub struct SchemeOptions {
    /// Terminal check; without one the scheme never emits sequences.
    pub terminal: Option<SharedCheck>,
    /// Cache to reuse instead of starting an empty one.
    pub cache: Option<StyleCache>,
    /// Role name to style descriptor, e.g. `error = "red+b"`.
    pub roles: Option<BTreeMap<String, String>>,
}

impl SchemeOptions {
    #[must_use]
    pub fn terminal(mut self, check: impl TerminalCheck + 'static) -> Self {
        self.terminal = Some(Arc::new(check));
        self
    }

    #[must_use]
    pub fn cache(mut self, cache: StyleCache) -> Self {
        self.cache = Some(cache);
        self
    }

    #[must_use]
    pub fn roles(mut self, roles: BTreeMap<String, String>) -> Self {
        self.roles = Some(roles);
        self
    }
}

impl fmt::Debug for SchemeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeOptions")
            .field("terminal", &self.terminal.is_some())
            .field("cache", &self.cache)
            .field("roles", &self.roles)
            .finish()
    }
}

/// Formats text with styles, if the destination is a terminal.
#[derive(Clone, Default)]
pub struct ColorScheme {
    cache: StyleCache,
    terminal: Option<SharedCheck>,
    roles: Arc<BTreeMap<String, String>>,
}

impl ColorScheme {
    pub fn new(options: SchemeOptions) -> Self {
        Self {
            cache: options.cache.unwrap_or_default(),
            terminal: options.terminal,
            roles: Arc::new(options.roles.unwrap_or_default()),
        }
    }

    /// Scheme for `stream` using the configured color mode and roles.
    pub fn from_config(config: &Config, stream: Stream) -> Self {
        Self::new(
            SchemeOptions::default()
                .terminal(config.color.check(stream))
                .roles(config.styles.clone()),
        )
    }

    /// A scheme sharing this one's cache and roles, with any option set in
    /// `options` taking precedence.
    ///
    /// Use this to derive a stderr scheme from a stdout scheme without
    /// compiling styles twice.
    pub fn clone_with(&self, options: SchemeOptions) -> Self {
        Self {
            cache: options.cache.unwrap_or_else(|| self.cache.clone()),
            terminal: options.terminal.or_else(|| self.terminal.clone()),
            roles: options
                .roles
                .map_or_else(|| Arc::clone(&self.roles), Arc::new),
        }
    }

    /// The compiled-style cache, shared with clones.
    pub fn cache(&self) -> &StyleCache {
        &self.cache
    }

    /// Whether output currently goes to a terminal.
    pub fn is_terminal(&self) -> bool {
        self.terminal
            .as_ref()
            .is_some_and(|check| check.is_terminal())
    }

    /// Formatter for `style`, compiled once and cached.
    ///
    /// The empty style is never cached and always formats as identity.
    pub fn color_func(&self, style: &str) -> ColorFunc {
        if style.is_empty() {
            return ColorFunc::identity();
        }
        ColorFunc {
            code: Some(self.cache.get_or_compile(style)),
            terminal: self.terminal.clone(),
        }
    }

    /// Format `text` with `style` in one go.
    pub fn paint(&self, style: &str, text: &str) -> String {
        self.color_func(style).apply(text)
    }

    /// Formatter for a configured role; unknown roles format as identity.
    pub fn role(&self, name: &str) -> ColorFunc {
        match self.roles.get(name) {
            Some(style) => self.color_func(style),
            None => ColorFunc::identity(),
        }
    }

    /// Configured roles and their styles, sorted by name.
    pub fn roles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.roles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn named(&self, color: NamedColor, bright: bool, text: &str) -> String {
        self.paint(&color.style(bright), text)
    }
}

macro_rules! scheme_color_methods {
    ($($color:ident => $normal:ident, $light:ident;)*) => {
        impl ColorScheme {
            $(
                #[doc = concat!("Format `text` ", stringify!($normal), " if output is a terminal.")]
                pub fn $normal(&self, text: &str) -> String {
                    self.named(NamedColor::$color, false, text)
                }

                #[doc = concat!("Format `text` bright ", stringify!($normal), " if output is a terminal.")]
                pub fn $light(&self, text: &str) -> String {
                    self.named(NamedColor::$color, true, text)
                }
            )*
        }
    };
}

scheme_color_methods! {
    Black => black, light_black;
    Red => red, light_red;
    Green => green, light_green;
    Yellow => yellow, light_yellow;
    Blue => blue, light_blue;
    Magenta => magenta, light_magenta;
    Cyan => cyan, light_cyan;
    White => white, light_white;
}

impl fmt::Debug for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorScheme")
            .field("cached_styles", &self.cache.len())
            .field("is_terminal", &self.is_terminal())
            .field("roles", &self.roles)
            .finish()
    }
}

/// A style formatter handed out by [`ColorScheme::color_func`].
#[derive(Clone, Default)]
pub struct ColorFunc {
    code: Option<Arc<CompiledCode>>,
    terminal: Option<SharedCheck>,
}

impl ColorFunc {
    /// Formatter that returns text unchanged.
    pub fn identity() -> Self {
        Self::default()
    }

    /// The compiled sequence, whether or not it would be applied right now.
    pub fn code(&self) -> Option<&CompiledCode> {
        self.code.as_deref()
    }

    /// Format `text`: sequence, text, reset when the destination is a
    /// terminal, else `text` unchanged.
    pub fn apply(&self, text: &str) -> String {
        match (&self.code, &self.terminal) {
            (Some(code), Some(check)) if check.is_terminal() => code.apply(text),
            _ => text.to_string(),
        }
    }
}

impl fmt::Debug for ColorFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorFunc")
            .field("code", &self.code)
            .field("has_terminal_check", &self.terminal.is_some())
            .finish()
    }
}
