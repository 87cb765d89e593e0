//! Client settings and configuration

use crate::locale::Locale;
use crate::{Error, Result};
use crate::zone::ViewerZone;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

/// Client settings
///
/// Settings are stored in JSON format and can be loaded/saved from disk.
///
/// # Example
/// ```rust,no_run
/// use kigen::settings::Settings;
///
/// // Load settings (returns default if file doesn't exist)
/// let mut settings = Settings::load("settings.json").expect("Failed to load");
///
/// // Show times in JST regardless of the machine's zone
/// settings.update_utc_offset(Some(9 * 60), "settings.json").expect("Failed to update");
///
/// // A REST adapter resolves routes against the configured base URL
/// let url = kigen::tasks::Endpoint::Lists.url(&settings.api_url);
/// println!("Lists: {}", url);
/// println!("Zone: {}", settings.timezone());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the task API, joined with [`crate::tasks::Endpoint::url`]
    /// by whichever REST adapter implements [`crate::tasks::TaskRepository`]
    pub api_url: String,
    /// Display language
    #[serde(default)]
    pub locale: Locale,
    /// Viewer zone as minutes east of UTC; `None` follows the system zone
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
    /// How often the screen driver re-samples its clock and re-renders the
    /// remaining time, in seconds
    pub refresh_interval_secs: u64,
}

impl Settings {
    /// Load the client settings
    ///
    /// A missing or blank file yields [`Settings::default`] (local API, Japanese,
    /// system zone, one-minute countdown refresh). `locale` and
    /// `utc_offset_minutes` may be omitted from the file.
    ///
    /// # Errors
    /// Returns [`Error::Settings`] when the file cannot be read or parsed, when
    /// `utc_offset_minutes` is not a valid offset, or when
    /// `refresh_interval_secs` is zero.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let data = if path.exists() {
            std::fs::read_to_string(path)
                .map_err(|e| Error::Settings(format!("Failed to read settings: {}", e)))?
        } else {
            String::new()
        };

        if data.trim().is_empty() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let settings: Self = serde_json::from_str(&data)
            .map_err(|e| Error::Settings(format!("Failed to parse settings: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Write the client settings as pretty-printed JSON
    ///
    /// Missing parent directories are created. The viewer zone is stored as
    /// `utc_offset_minutes` (`null` for the system zone).
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Settings(format!("Failed to create settings directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Settings(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, json)
            .map_err(|e| Error::Settings(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }

    /// Update the viewer zone and auto-save
    ///
    /// # Arguments
    /// * `minutes` - Minutes east of UTC, or `None` for the system zone
    /// * `save_path` - Path to save the updated settings
    pub fn update_utc_offset<P: AsRef<std::path::Path>>(
        &mut self,
        minutes: Option<i32>,
        save_path: P,
    ) -> Result<()> {
        if let Some(minutes) = minutes {
            fixed_offset(minutes)?;
        }
        self.utc_offset_minutes = minutes;
        self.save(save_path)
    }

    /// The viewer's time zone
    ///
    /// A configured offset wins; otherwise the system zone, whose offset is
    /// looked up for each instant rendered.
    pub fn timezone(&self) -> ViewerZone {
        match self.utc_offset_minutes.map(fixed_offset) {
            Some(Ok(offset)) => ViewerZone::Fixed(offset),
            _ => ViewerZone::System,
        }
    }

    /// Countdown refresh cadence for the screen driver's timer
    pub fn refresh_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.refresh_interval_secs)
    }

    fn validate(&self) -> Result<()> {
        if let Some(minutes) = self.utc_offset_minutes {
            fixed_offset(minutes)?;
        }
        if self.refresh_interval_secs == 0 {
            return Err(Error::Settings(
                "refresh_interval_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn fixed_offset(minutes: i32) -> Result<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| Error::Settings(format!("UTC offset out of range: {} minutes", minutes)))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            locale: Locale::default(),
            utc_offset_minutes: None,
            refresh_interval_secs: 60,
        }
    }
}
