//! File-backed provider settings

use quill_core::{Error, ProviderConfig, ProviderKind, StreamRequest};
use quill_providers::constants::{GEMINI_DEFAULT_MODEL, OPENAI_DEFAULT_MODEL};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, trace, warn};

/// Errors that can occur while persisting settings
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<SettingsError> for Error {
    fn from(err: SettingsError) -> Self {
        Error::Settings(err.to_string())
    }
}

/// The persisted settings document
///
/// ```json
/// {
///   "active_provider": "openai",
///   "openai": {"api_key": "", "model": "gpt-4o-mini"},
///   "gemini": {"api_key": "", "model": "gemini-2.5-flash"}
/// }
/// ```
///
/// `active_provider` is kept as written so that an unknown name surfaces
/// when a stream is started rather than discarding the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name of the provider used for new streams
    pub active_provider: String,
    /// OpenAI credentials and model
    pub openai: ProviderConfig,
    /// Gemini credentials and model
    pub gemini: ProviderConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            active_provider: ProviderKind::OpenAI.to_string(),
            openai: ProviderConfig::new("", OPENAI_DEFAULT_MODEL),
            gemini: ProviderConfig::new("", GEMINI_DEFAULT_MODEL),
        }
    }
}

impl Settings {
    /// The active provider
    pub fn active_kind(&self) -> Result<ProviderKind, Error> {
        self.active_provider.parse()
    }

    /// Configuration for a given provider
    pub fn config(&self, kind: ProviderKind) -> &ProviderConfig {
        match kind {
            ProviderKind::OpenAI => &self.openai,
            ProviderKind::Gemini => &self.gemini,
        }
    }

    /// Mutable configuration for a given provider
    pub fn config_mut(&mut self, kind: ProviderKind) -> &mut ProviderConfig {
        match kind {
            ProviderKind::OpenAI => &mut self.openai,
            ProviderKind::Gemini => &mut self.gemini,
        }
    }

    /// Make `kind` the active provider
    pub fn set_active(&mut self, kind: ProviderKind) {
        self.active_provider = kind.to_string();
    }

    /// Build a request for the active provider
    ///
    /// The configuration is copied, so later edits to the settings never
    /// affect a stream already started.
    pub fn request(&self, prompt: impl Into<String>) -> Result<StreamRequest, Error> {
        let kind = self.active_kind()?;
        Ok(StreamRequest::new(kind, self.config(kind).clone(), prompt))
    }

    /// Fill in defaults for fields left empty in the file
    fn normalized(mut self) -> Self {
        self.active_provider = self.active_provider.trim().to_lowercase();
        if self.active_provider.is_empty() {
            self.active_provider = ProviderKind::OpenAI.to_string();
        }
        if self.openai.model.trim().is_empty() {
            self.openai.model = OPENAI_DEFAULT_MODEL.to_string();
        }
        if self.gemini.model.trim().is_empty() {
            self.gemini.model = GEMINI_DEFAULT_MODEL.to_string();
        }
        self
    }
}

/// JSON file holding [`Settings`]
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store for the file at `path`
    ///
    /// Nothing is read or created until [`load`](Self::load) or
    /// [`save`](Self::save) is called.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the settings file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings, falling back to defaults
    ///
    /// A missing, unreadable or malformed file yields [`Settings::default`].
    pub async fn load(&self) -> Settings {
        trace!("Loading settings from {:?}", self.path);

        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No settings file at {:?}, using defaults", self.path);
                return Settings::default();
            }
            Err(e) => {
                warn!("Failed to read settings {:?}: {}, using defaults", self.path, e);
                return Settings::default();
            }
        };

        match serde_json::from_str::<Settings>(&json) {
            Ok(settings) => settings.normalized(),
            Err(e) => {
                warn!("Malformed settings {:?}: {}, using defaults", self.path, e);
                Settings::default()
            }
        }
    }

    /// Save the settings as pretty JSON
    ///
    /// The file is replaced atomically by writing a temporary file first.
    pub async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        trace!("Saving settings to {:?}", self.path);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(settings)?;

        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&temp_path, &self.path).await?;

        debug!("Saved settings to {:?}", self.path);
        Ok(())
    }
}
