//! Light/dark theme selection
//!
//! The chosen theme is persisted under a single `theme` key in
//! `<config dir>/runboard/state.json` and read once at startup.

use comfy_table::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::StatusClass;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub(crate) fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(AppError::InvalidTheme {
                input: value.trim().to_string(),
            }),
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub(crate) fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Guess from the terminal's `COLORFGBG` ("fg;bg" or "fg;default;bg").
    ///
    /// Background colors 0-6 and 8 are the dark half of the ANSI palette.
    pub(crate) fn from_colorfgbg(value: Option<&str>) -> Option<Self> {
        let bg: u8 = value?.rsplit(';').next()?.trim().parse().ok()?;
        Some(if bg <= 6 || bg == 8 {
            Theme::Dark
        } else {
            Theme::Light
        })
    }

    /// Saved choice, then configured default, then terminal hint, then dark
    pub(crate) fn resolve(
        saved: Option<Theme>,
        configured: Option<Theme>,
        colorfgbg: Option<&str>,
    ) -> Self {
        saved
            .or(configured)
            .or_else(|| Theme::from_colorfgbg(colorfgbg))
            .unwrap_or(Theme::Dark)
    }

    pub(crate) fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                success: Color::Green,
                failed: Color::Red,
                other: Color::Yellow,
                accent: Color::Cyan,
                muted: Color::Grey,
            },
            Theme::Light => Palette {
                success: Color::DarkGreen,
                failed: Color::DarkRed,
                other: Color::DarkYellow,
                accent: Color::DarkBlue,
                muted: Color::DarkGrey,
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Table colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    pub(crate) success: Color,
    pub(crate) failed: Color,
    pub(crate) other: Color,
    pub(crate) accent: Color,
    pub(crate) muted: Color,
}

impl Palette {
    pub(crate) fn status(&self, class: StatusClass) -> Color {
        match class {
            StatusClass::Success => self.success,
            StatusClass::Failed => self.failed,
            StatusClass::Other => self.other,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct State {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<Theme>,
}

/// Location of the persisted client state
pub(crate) struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub(crate) fn default_location() -> Option<Self> {
        let dir = dirs::config_dir()?;
        Some(Self::new(dir.join("runboard").join("state.json")))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Saved theme; a missing or unreadable state file counts as unset
    pub(crate) fn load(&self) -> Option<Theme> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str::<State>(&content).ok()?.theme
    }

    pub(crate) fn save(&self, theme: Theme) -> Result<(), AppError> {
        let to_err = |source: std::io::Error| AppError::SaveState {
            path: self.path.display().to_string(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(to_err)?;
        }
        let state = State { theme: Some(theme) };
        let json = serde_json::to_string_pretty(&state)
            .map_err(|e| to_err(std::io::Error::other(e)))?;
        fs::write(&self.path, json).map_err(to_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Theme::parse("Dark").unwrap(), Theme::Dark);
        assert_eq!(Theme::parse(" light ").unwrap(), Theme::Light);
        assert!(Theme::parse("sepia").is_err());
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn colorfgbg_detection() {
        assert_eq!(Theme::from_colorfgbg(Some("15;0")), Some(Theme::Dark));
        assert_eq!(Theme::from_colorfgbg(Some("0;15")), Some(Theme::Light));
        assert_eq!(Theme::from_colorfgbg(Some("0;default;7")), Some(Theme::Light));
        assert_eq!(Theme::from_colorfgbg(Some("7;8")), Some(Theme::Dark));
        assert_eq!(Theme::from_colorfgbg(Some("garbage")), None);
        assert_eq!(Theme::from_colorfgbg(None), None);
    }

    #[test]
    fn resolve_priority() {
        assert_eq!(
            Theme::resolve(Some(Theme::Light), Some(Theme::Dark), Some("15;0")),
            Theme::Light
        );
        assert_eq!(Theme::resolve(None, Some(Theme::Light), Some("15;0")), Theme::Light);
        assert_eq!(Theme::resolve(None, None, Some("0;15")), Theme::Light);
        assert_eq!(Theme::resolve(None, None, None), Theme::Dark);
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(Theme::Dark.palette(), Theme::Light.palette());
        let dark = Theme::Dark.palette();
        assert_eq!(dark.status(StatusClass::Failed), Color::Red);
    }

    #[test]
    fn store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("nested").join("state.json"));
        assert_eq!(store.load(), None);

        store.save(Theme::Light).unwrap();
        assert_eq!(store.load(), Some(Theme::Light));

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains(r#""theme": "light""#));
    }

    #[test]
    fn corrupt_state_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(ThemeStore::new(path).load(), None);
    }
}
