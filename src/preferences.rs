//! Preferences
//!
//! Small per-user UI state kept between sessions: where the floating cart button sits
//! and whether the delivery-time notice has been shown. Cart and availability logic
//! never read or write it.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Key holding the floating cart button position.
pub const FLOATING_BUTTON_KEY: &str = "floatingCartPos";

/// Key holding the delivery notice flag.
pub const INTRO_SEEN_KEY: &str = "pizzaria-delivery-alert";

/// Errors that can occur when persisting preferences.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// Failed to read or write the preference file.
    #[error("failed to access preference file {path}")]
    Io {
        /// Preference file
        path: PathBuf,

        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The preference file isn't a YAML map of strings.
    #[error("failed to parse preference file {path}")]
    Yaml {
        /// Preference file
        path: PathBuf,

        /// Underlying error
        #[source]
        source: serde_norway::Error,
    },

    /// A value couldn't be encoded.
    #[error(transparent)]
    Encode(#[from] serde_norway::Error),
}

/// String key/value storage for preferences.
pub trait PreferenceStore {
    /// Stored value for `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`PreferenceError`] if the value can't be persisted.
    fn set(&mut self, key: &str, value: String) -> Result<(), PreferenceError>;
}

/// Preferences that live for the process only.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value);

        Ok(())
    }
}

/// Preferences kept in a YAML map on disk, rewritten on every change.
#[derive(Clone, Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Open the store at `path`. A missing file starts empty.
    ///
    /// # Errors
    ///
    /// Returns a [`PreferenceError`] if the file exists but can't be read or parsed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PreferenceError> {
        let path = path.as_ref().to_path_buf();

        let values = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_norway::from_str(&contents).map_err(|source| {
                PreferenceError::Yaml {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(source) if source.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(PreferenceError::Io { path, source }),
        };

        Ok(Self { path, values })
    }

    fn persist(&self) -> Result<(), PreferenceError> {
        let contents = serde_norway::to_string(&self.values)?;

        fs::write(&self.path, contents).map_err(|source| PreferenceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value);

        debug!(key, path = %self.path.display(), "preference saved");

        self.persist()
    }
}

/// Fallback button size in pixels when the real one isn't known.
pub const BUTTON_SIZE: i64 = 60;

/// Top-left corner of the floating cart button, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FloatingButtonPosition {
    /// Distance from the viewport's left edge
    pub left: i64,

    /// Distance from the viewport's top edge
    pub top: i64,
}

impl FloatingButtonPosition {
    /// Bottom-right placement for a `width` × `height` viewport, never closer than 20px
    /// to the top-left corner.
    pub fn default_for_viewport(width: i64, height: i64) -> Self {
        Self {
            left: (width - 80).max(20),
            top: (height - 140).max(20),
        }
    }

    /// Keep a `button_size` square button fully inside the viewport.
    #[must_use]
    pub fn clamp(self, width: i64, height: i64, button_size: i64) -> Self {
        Self {
            left: keep_within(self.left, width - button_size),
            top: keep_within(self.top, height - button_size),
        }
    }

    /// Saved position, or the viewport default when none is stored or it's malformed.
    pub fn load(store: &impl PreferenceStore, width: i64, height: i64) -> Self {
        let Some(raw) = store.get(FLOATING_BUTTON_KEY) else {
            return Self::default_for_viewport(width, height);
        };

        serde_norway::from_str(&raw).unwrap_or_else(|err| {
            warn!(%err, "ignoring malformed floating button position");

            Self::default_for_viewport(width, height)
        })
    }

    /// Persist this position.
    ///
    /// # Errors
    ///
    /// Returns a [`PreferenceError`] if the store can't be written.
    pub fn save(self, store: &mut impl PreferenceStore) -> Result<(), PreferenceError> {
        store.set(FLOATING_BUTTON_KEY, serde_norway::to_string(&self)?)
    }
}

// Off-screen to the top or left snaps to 0 before the far edge is applied.
fn keep_within(value: i64, upper: i64) -> i64 {
    let value = value.max(0);

    if value > upper { upper } else { value }
}

/// Whether the delivery-time notice has already been shown.
pub fn has_seen_intro(store: &impl PreferenceStore) -> bool {
    store.get(INTRO_SEEN_KEY).is_some_and(|value| value == "true")
}

/// Record that the delivery-time notice has been shown.
///
/// # Errors
///
/// Returns a [`PreferenceError`] if the store can't be written.
pub fn mark_intro_seen(store: &mut impl PreferenceStore) -> Result<(), PreferenceError> {
    store.set(INTRO_SEEN_KEY, "true".to_string())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn default_position_sits_bottom_right() {
        assert_eq!(
            FloatingButtonPosition::default_for_viewport(1280, 800),
            FloatingButtonPosition { left: 1200, top: 660 }
        );
    }

    #[test]
    fn default_position_keeps_margin_on_tiny_viewports() {
        assert_eq!(
            FloatingButtonPosition::default_for_viewport(50, 100),
            FloatingButtonPosition { left: 20, top: 20 }
        );
    }

    #[test]
    fn clamp_keeps_button_inside_viewport() {
        let pos = FloatingButtonPosition { left: -15, top: 900 };

        assert_eq!(
            pos.clamp(400, 800, BUTTON_SIZE),
            FloatingButtonPosition { left: 0, top: 740 }
        );
    }

    #[test]
    fn position_round_trips_through_store() -> TestResult {
        let mut store = MemoryPreferences::new();
        let pos = FloatingButtonPosition { left: 42, top: 7 };

        pos.save(&mut store)?;

        assert_eq!(FloatingButtonPosition::load(&store, 1280, 800), pos);

        Ok(())
    }

    #[test]
    fn json_encoded_position_is_accepted() -> TestResult {
        let mut store = MemoryPreferences::new();

        store.set(FLOATING_BUTTON_KEY, r#"{"left": 10, "top": 30}"#.to_string())?;

        assert_eq!(
            FloatingButtonPosition::load(&store, 1280, 800),
            FloatingButtonPosition { left: 10, top: 30 }
        );

        Ok(())
    }

    #[test]
    fn malformed_position_falls_back_to_default() -> TestResult {
        let mut store = MemoryPreferences::new();

        store.set(FLOATING_BUTTON_KEY, "not a position".to_string())?;

        assert_eq!(
            FloatingButtonPosition::load(&store, 1280, 800),
            FloatingButtonPosition::default_for_viewport(1280, 800)
        );

        Ok(())
    }

    #[test]
    fn intro_flag() -> TestResult {
        let mut store = MemoryPreferences::new();

        assert!(!has_seen_intro(&store));

        mark_intro_seen(&mut store)?;

        assert!(has_seen_intro(&store));

        Ok(())
    }

    #[test]
    fn file_store_persists_between_opens() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("prefs.yml");

        let mut store = FilePreferences::open(&path)?;
        assert!(!has_seen_intro(&store));

        mark_intro_seen(&mut store)?;
        FloatingButtonPosition { left: 5, top: 6 }.save(&mut store)?;

        let reopened = FilePreferences::open(&path)?;

        assert!(has_seen_intro(&reopened));
        assert_eq!(
            FloatingButtonPosition::load(&reopened, 1280, 800),
            FloatingButtonPosition { left: 5, top: 6 }
        );

        Ok(())
    }

    #[test]
    fn unreadable_file_is_an_error() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;

        std::io::Write::write_all(&mut file, b"- just\n- a list\n")?;

        assert!(matches!(
            FilePreferences::open(file.path()),
            Err(PreferenceError::Yaml { .. })
        ));

        Ok(())
    }
}
