//! Configuration management
//!
//! ```toml
//! color = "auto"      # auto | always | never
//!
//! [styles]
//! error = "red+b"
//! success = "#00d75f"
//! ```

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path (~/.config/termtint/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from the default path, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load_from(&io::config_path()?)
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        io::load_from(path.as_ref())
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &io::config_path()?)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        io::save_to(self, path.as_ref())
    }

    /// Style descriptor for a role, if configured
    pub fn style(&self, role: &str) -> Option<&str> {
        self.styles.get(role).map(String::as_str)
    }

    /// Set the style for a role, returning the previous one
    pub fn set_style(&mut self, role: &str, style: &str) -> Option<String> {
        self.styles.insert(role.to_string(), style.to_string())
    }
}
