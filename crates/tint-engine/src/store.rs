//! The saved-theme store — named palettes, capacity-bounded, persisted.
//!
//! The store holds at most [`CAPACITY`] named themes in insertion order and
//! writes the whole list through its [`ThemeStorage`] port after every
//! mutation. Persistence is best-effort: a failing port never fails a
//! mutation, it only flips the store into a degraded in-memory mode until
//! a later write succeeds.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use tint_color::Rgb;

use crate::palette::Palette;
use crate::persist::ThemeStorage;

/// Maximum number of saved themes.
pub const CAPACITY: usize = 10;

/// Longest accepted theme name, in characters, after trimming.
pub const MAX_NAME_LEN: usize = 30;

// ---------------------------------------------------------------------------
// CustomTheme
// ---------------------------------------------------------------------------

/// A saved palette with its user-facing name.
///
/// Serialized flat, one object per theme, so an exported document stays
/// hand-editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTheme {
    pub name: String,
    pub bg: String,
    pub text: String,
    pub accent: String,
    pub secondary: String,
}

impl CustomTheme {
    #[must_use]
    pub fn new(name: impl Into<String>, palette: &Palette) -> Self {
        Self {
            name: name.into(),
            bg: palette.bg.clone(),
            text: palette.text.clone(),
            accent: palette.accent.clone(),
            secondary: palette.secondary.clone(),
        }
    }

    /// The color tokens without the name.
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::new(
            self.bg.as_str(),
            self.text.as_str(),
            self.accent.as_str(),
            self.secondary.as_str(),
        )
    }

    /// Check the naming and color rules every stored theme must satisfy.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidName`] when the trimmed name is empty or longer
    /// than [`MAX_NAME_LEN`]; [`StoreError::InvalidColor`] when a token is
    /// not a strict 6-digit hex color.
    pub fn validate(&self) -> Result<(), StoreError> {
        let name = self.name.trim();
        if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
            return Err(StoreError::InvalidName);
        }
        let tokens = [
            ("bg", &self.bg),
            ("text", &self.text),
            ("accent", &self.accent),
            ("secondary", &self.secondary),
        ];
        for (token, value) in tokens {
            if Rgb::parse(value).is_none() {
                return Err(StoreError::InvalidColor {
                    token,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong inside the store.
///
/// Persistence-port failures are deliberately absent: they degrade the
/// store (see [`PaletteStore::persistence_degraded`]) instead of failing
/// the operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("theme name must be 1 to {MAX_NAME_LEN} characters")]
    InvalidName,
    #[error("{token} color {value:?} is not a 6-digit hex color")]
    InvalidColor { token: &'static str, value: String },
    #[error("store is full ({capacity} themes); delete one first")]
    CapacityExceeded { capacity: usize },
    #[error("no theme at index {index} (store has {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("themes document is not a JSON list: {0}")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// PaletteStore
// ---------------------------------------------------------------------------

/// The capacity-bounded list of saved themes behind a storage port.
#[derive(Debug)]
pub struct PaletteStore<P: ThemeStorage> {
    themes: Vec<CustomTheme>,
    storage: P,
    degraded: bool,
}

impl<P: ThemeStorage> PaletteStore<P> {
    /// Load the store from its storage port.
    ///
    /// A missing or unparseable document starts the store empty. Entries
    /// that fail validation are dropped and anything past capacity is cut.
    /// A failing read also starts empty, and additionally marks the store
    /// degraded.
    pub fn load(storage: P) -> Self {
        let mut degraded = false;
        let themes = match storage.read() {
            Ok(Some(text)) => Self::parse_document(&text),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("theme storage unreadable, starting empty: {e}");
                degraded = true;
                Vec::new()
            }
        };
        debug!("loaded {} saved themes", themes.len());
        Self {
            themes,
            storage,
            degraded,
        }
    }

    fn parse_document(text: &str) -> Vec<CustomTheme> {
        match serde_json::from_str::<Vec<serde_json::Value>>(text) {
            Ok(entries) => {
                let mut themes: Vec<CustomTheme> = entries
                    .into_iter()
                    .filter_map(|value| serde_json::from_value::<CustomTheme>(value).ok())
                    .filter(|theme| theme.validate().is_ok())
                    .collect();
                themes.truncate(CAPACITY);
                themes
            }
            Err(e) => {
                warn!("ignoring malformed themes document: {e}");
                Vec::new()
            }
        }
    }

    /// Append a named palette and persist.
    ///
    /// # Errors
    ///
    /// The validation errors from [`CustomTheme::validate`], plus
    /// [`StoreError::CapacityExceeded`] when the store already holds
    /// [`CAPACITY`] themes. On error the store is unchanged.
    pub fn save(&mut self, name: &str, palette: &Palette) -> Result<(), StoreError> {
        let theme = CustomTheme::new(name.trim(), palette);
        theme.validate()?;
        if self.themes.len() >= CAPACITY {
            return Err(StoreError::CapacityExceeded { capacity: CAPACITY });
        }
        self.themes.push(theme);
        self.persist();
        Ok(())
    }

    /// Remove and return the theme at `index`, then persist.
    ///
    /// # Errors
    ///
    /// [`StoreError::OutOfRange`] when `index` is past the end.
    pub fn delete(&mut self, index: usize) -> Result<CustomTheme, StoreError> {
        if index >= self.themes.len() {
            return Err(StoreError::OutOfRange {
                index,
                len: self.themes.len(),
            });
        }
        let removed = self.themes.remove(index);
        self.persist();
        Ok(removed)
    }

    /// Serialize the full ordered list as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates serialization failures as [`StoreError::Parse`].
    pub fn export_all(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(&self.themes)?)
    }

    /// Append every valid entry of a JSON list, stopping at capacity.
    ///
    /// Entries that are not theme objects, or fail validation, are skipped.
    /// Once the store is full the remaining entries are dropped. Returns
    /// how many entries were actually added.
    ///
    /// # Errors
    ///
    /// [`StoreError::Parse`] when `text` is not a JSON list at all; the
    /// store is left untouched in that case.
    pub fn import_many(&mut self, text: &str) -> Result<usize, StoreError> {
        let entries: Vec<serde_json::Value> = serde_json::from_str(text)?;
        let before = self.themes.len();
        for value in entries {
            if self.themes.len() >= CAPACITY {
                break;
            }
            let Ok(theme) = serde_json::from_value::<CustomTheme>(value) else {
                continue;
            };
            if theme.validate().is_ok() {
                self.themes.push(theme);
            }
        }
        let added = self.themes.len() - before;
        if added > 0 {
            self.persist();
        }
        Ok(added)
    }

    /// Number of saved themes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// The saved themes in insertion order.
    #[must_use]
    pub fn themes(&self) -> &[CustomTheme] {
        &self.themes
    }

    /// The storage port this store writes through.
    #[must_use]
    pub fn storage(&self) -> &P {
        &self.storage
    }

    /// True while the store is running in-memory because the last
    /// persistence attempt failed. Clears on the next successful write.
    #[must_use]
    pub fn persistence_degraded(&self) -> bool {
        self.degraded
    }

    fn persist(&mut self) {
        let text = match serde_json::to_string_pretty(&self.themes) {
            Ok(text) => text,
            Err(e) => {
                warn!("could not serialize themes: {e}");
                self.degraded = true;
                return;
            }
        };
        match self.storage.write(&text) {
            Ok(()) => self.degraded = false,
            Err(e) => {
                warn!("could not persist themes, continuing in memory: {e}");
                self.degraded = true;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
