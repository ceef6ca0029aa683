//! Default props of a responsive list, optionally loaded from RON files.
//!
//! ```ignore
//! use icy_responsive_list::Settings;
//!
//! let settings = Settings::load("toolbar.ron")?;
//! let list = ResponsiveList::new().with_settings(&settings);
//! ```
use crate::overflow::DEFAULT_PADDING_SIZE;
use crate::trigger::{self, ButtonSize, Icon};

use iced_core::time::Duration;

use std::path::Path;

/// The z-index of the menu when no other value is given.
pub const DEFAULT_Z_INDEX: f32 = 9999.0;

/// The shared props of a [`ResponsiveList`](crate::ResponsiveList).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// The horizontal room kept free for the menu button.
    pub padding_size: f32,
    /// The space between items of the row.
    pub spacing: f32,
    /// The size of the menu button.
    pub menu_button_size: ButtonSize,
    /// The glyph of the menu button.
    pub menu_button_icon: Icon,
    /// The accessible label of the menu button.
    pub menu_button_label: String,
    /// The z-index of the menu.
    pub dialog_z_index: f32,
    /// The padding inside the menu.
    pub menu_padding: f32,
    /// The space between items of the menu.
    pub menu_spacing: f32,
    /// How long the width must stay still before items are redistributed,
    /// in milliseconds.
    pub resize_debounce_ms: u64,
    /// Whether a press inside the menu closes it.
    pub close_on_content_click: bool,
}

impl Settings {
    /// The resize debounce as a [`Duration`].
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Loads [`Settings`] from a file path.
    ///
    /// Supports RON format (.ron extension).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LoadError::NotFound(path.display().to_string()));
        }

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "ron" => {
                let content = std::fs::read_to_string(path)?;
                let settings = Self::from_ron(&content)?;

                log::debug!("loaded responsive list settings from {}", path.display());

                Ok(settings)
            }
            _ => Err(LoadError::UnsupportedFormat(extension.to_owned())),
        }
    }

    /// Parses [`Settings`] from a RON string. Missing fields keep their
    /// default value.
    #[cfg(feature = "serde")]
    pub fn from_ron(content: &str) -> Result<Self, LoadError> {
        ron::from_str(content).map_err(|error| LoadError::Parse(error.to_string()))
    }

    /// Parses [`Settings`] from a RON string.
    ///
    /// Always fails without the `serde` feature.
    #[cfg(not(feature = "serde"))]
    pub fn from_ron(_content: &str) -> Result<Self, LoadError> {
        Err(LoadError::UnsupportedFormat(
            "RON loading requires 'serde' feature".to_owned(),
        ))
    }

    /// Serializes [`Settings`] to a pretty RON string.
    #[cfg(feature = "serde")]
    pub fn to_ron(&self) -> Result<String, LoadError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|error| LoadError::Parse(error.to_string()))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            padding_size: DEFAULT_PADDING_SIZE,
            spacing: 0.0,
            menu_button_size: ButtonSize::default(),
            menu_button_icon: Icon::default(),
            menu_button_label: trigger::DEFAULT_LABEL.to_owned(),
            dialog_z_index: DEFAULT_Z_INDEX,
            menu_padding: 8.0,
            menu_spacing: 4.0,
            resize_debounce_ms: 0,
            close_on_content_click: false,
        }
    }
}

/// An error produced while loading [`Settings`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File not found.
    #[error("settings file not found: {0}")]
    NotFound(String),
    /// Failed to read file.
    #[error("failed to read settings: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse settings.
    #[error("failed to parse settings: {0}")]
    Parse(String),
    /// Unsupported format.
    #[error("unsupported settings format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.padding_size, 32.0);
        assert_eq!(settings.menu_button_size, ButtonSize::Small);
        assert_eq!(settings.menu_button_label, "More Actions");
        assert_eq!(settings.dialog_z_index, 9999.0);
        assert!(settings.resize_debounce().is_zero());
    }

    #[test]
    fn test_missing_file() {
        let error = Settings::load("does/not/exist.ron").unwrap_err();
        assert!(matches!(error, LoadError::NotFound(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let path = std::env::temp_dir().join("icy_responsive_list_settings.toml");
        std::fs::write(&path, "padding_size = 1").unwrap();

        let error = Settings::load(&path).unwrap_err();
        assert!(matches!(error, LoadError::UnsupportedFormat(ext) if ext == "toml"));

        std::fs::remove_file(path).unwrap();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_ron() {
        let settings = Settings::from_ron(
            "(spacing: 6.0, menu_button_size: Large, resize_debounce_ms: 150)",
        )
        .unwrap();

        assert_eq!(settings.spacing, 6.0);
        assert_eq!(settings.menu_button_size, ButtonSize::Large);
        assert_eq!(settings.resize_debounce(), Duration::from_millis(150));
        assert_eq!(settings.padding_size, DEFAULT_PADDING_SIZE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_load_ron_file() {
        let settings = Settings {
            menu_button_label: "Overflow".to_owned(),
            close_on_content_click: true,
            ..Settings::default()
        };

        let path = std::env::temp_dir().join("icy_responsive_list_settings.ron");
        std::fs::write(&path, settings.to_ron().unwrap()).unwrap();

        assert_eq!(Settings::load(&path).unwrap(), settings);

        std::fs::remove_file(path).unwrap();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parse_error() {
        let error = Settings::from_ron("(spacing: \"wide\")").unwrap_err();
        assert!(matches!(error, LoadError::Parse(_)));
    }
}
