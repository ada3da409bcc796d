//! Configuration loading and parsing.
//!
//! Parses `femto.toml`, looked up in the working directory first and then in
//! the platform config dir, overridable with `--config`. The two knobs are
//! the editor's historical compile-time constants promoted to runtime
//! settings: the tab stop and the quit confirmation count. Unknown fields
//! are ignored and a file that fails to parse degrades to defaults; a bad
//! config must never keep the editor from starting.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::info;

/// Widest tab stop the renderer will honor; raw values clamp into
/// `[1, MAX_TAB_STOP]`.
pub const MAX_TAB_STOP: usize = 16;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorSection {
    /// Columns per tab stop.
    #[serde(default = "EditorSection::default_tab_stop")]
    pub tab_stop: usize,
    /// Quit presses required to discard unsaved changes.
    #[serde(default = "EditorSection::default_quit_confirm")]
    pub quit_confirm: u32,
}

impl Default for EditorSection {
    fn default() -> Self {
        Self {
            tab_stop: Self::default_tab_stop(),
            quit_confirm: Self::default_quit_confirm(),
        }
    }
}

impl EditorSection {
    const fn default_tab_stop() -> usize {
        8
    }
    const fn default_quit_confirm() -> u32 {
        3
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorSection,
}

#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Original file contents, when a file was found.
    pub raw: Option<String>,
    pub file: ConfigFile,
}

impl Config {
    /// Tab stop clamped to a sane range; a zero tab stop would make render
    /// derivation diverge.
    pub fn effective_tab_stop(&self) -> usize {
        let raw = self.file.editor.tab_stop;
        let clamped = raw.clamp(1, MAX_TAB_STOP);
        if clamped != raw {
            info!(target: "config", raw, clamped, "tab_stop clamped");
        }
        clamped
    }

    pub fn effective_quit_confirm(&self) -> u32 {
        self.file.editor.quit_confirm
    }
}

/// Best-effort config path: working directory first, then the platform
/// config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("femto.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("femto").join("femto.toml");
    }
    PathBuf::from("femto.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    if let Ok(content) = fs::read_to_string(&path) {
        match toml::from_str::<ConfigFile>(&content) {
            Ok(file) => {
                info!(target: "config", path = %path.display(), "config loaded");
                Ok(Config {
                    raw: Some(content),
                    file,
                })
            }
            Err(e) => {
                info!(target: "config", path = %path.display(), %e, "config parse failed, using defaults");
                Ok(Config::default())
            }
        }
    } else {
        Ok(Config::default())
    }
}
