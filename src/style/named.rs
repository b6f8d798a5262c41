//! The eight standard terminal colors
//!
//! The free functions at the bottom style text unconditionally. They do not
//! know where the text is going; use the methods on
//! [`ColorScheme`](crate::ColorScheme) when output may not be a terminal.

use std::fmt;

use super::codec::compile;

/// Standard ANSI colors in palette order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl NamedColor {
    /// All colors, ordered by palette index.
    pub const ALL: [NamedColor; 8] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
    ];

    /// Palette index, added to a layer's base code.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Name as used in style descriptors.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
        }
    }

    /// Look up a color by its descriptor name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.name() == name)
    }

    /// Style descriptor for this color, optionally the bright variant.
    pub fn style(self, bright: bool) -> String {
        if bright {
            format!("{}+h", self.name())
        } else {
            self.name().to_string()
        }
    }

    /// Style `text` with this color regardless of the destination.
    pub fn paint(self, text: &str, bright: bool) -> String {
        compile(&self.style(bright)).apply(text)
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! named_color_fns {
    ($($color:ident => $normal:ident, $light:ident;)*) => {
        $(
            #[doc = concat!("Style `text` ", stringify!($normal), ".")]
            pub fn $normal(text: &str) -> String {
                NamedColor::$color.paint(text, false)
            }

            #[doc = concat!("Style `text` bright ", stringify!($normal), ".")]
            pub fn $light(text: &str) -> String {
                NamedColor::$color.paint(text, true)
            }
        )*
    };
}

named_color_fns! {
    Black => black, light_black;
    Red => red, light_red;
    Green => green, light_green;
    Yellow => yellow, light_yellow;
    Blue => blue, light_blue;
    Magenta => magenta, light_magenta;
    Cyan => cyan, light_cyan;
    White => white, light_white;
}
