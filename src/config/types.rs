//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::terminal::ColorMode;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// When to emit color
    #[serde(default)]
    pub color: ColorMode,
    /// Role name to style descriptor
    #[serde(default = "default_styles")]
    pub styles: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            styles: default_styles(),
        }
    }
}

/// Built-in roles. A `[styles]` table in the config file replaces them all.
pub fn default_styles() -> BTreeMap<String, String> {
    [
        ("error", "red+b"),
        ("warning", "yellow"),
        ("success", "green"),
        ("info", "cyan"),
        ("muted", "black+h"),
        ("heading", "white+bu"),
    ]
    .into_iter()
    .map(|(role, style)| (role.to_string(), style.to_string()))
    .collect()
}
