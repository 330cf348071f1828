//! Render configuration
//!
//! Presentation options for both list variants. Every option has a default,
//! so a configuration document only names what it overrides:
//!
//! ```toml
//! feed_source = "js/publications.js"
//!
//! [publications]
//! max_entries = 0
//! bold_name = "Alice Smith"
//!
//! [talks]
//! include_description = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default font stack for publication lists
pub const DEFAULT_PUBLICATION_FONT: &str = "Lucida Grande,helvetica, arial, verdana,sans-serif";

/// Default font stack for talk lists
pub const DEFAULT_TALK_FONT: &str = "Lucida Grande,helvetica,arial,verdana,sans-serif";

/// Complete render configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Path of the feed script to render
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_source: Option<PathBuf>,
    /// Publication list options
    pub publications: PublicationConfig,
    /// Talk list options
    pub talks: TalkConfig,
}

/// Publication list options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicationConfig {
    /// Kept so existing configurations still load; titles are always shown
    pub include_title: bool,
    /// Show the abstract under each entry
    pub include_summary: bool,
    /// Show the journal reference line for published entries
    pub include_journal_ref: bool,
    /// Number of feed entries to consider; 0 means all of them
    pub max_entries: usize,
    /// Author name to emphasize instead of linking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold_name: Option<String>,
    pub journal_color: String,
    pub arxiv_color: String,
    /// Text placed before each display index, e.g. `P` for `[P3]`
    pub list_prefix: String,
    pub separator_color: String,
    pub font_family: String,
}

impl Default for PublicationConfig {
    fn default() -> Self {
        Self {
            include_title: true,
            include_summary: false,
            include_journal_ref: true,
            max_entries: 10,
            bold_name: None,
            journal_color: "#6A994E".to_string(),
            arxiv_color: "#BC4749".to_string(),
            list_prefix: String::new(),
            separator_color: "#F2F2F3".to_string(),
            font_family: DEFAULT_PUBLICATION_FONT.to_string(),
        }
    }
}

impl PublicationConfig {
    /// Name to emphasize, if one is configured
    pub fn bold_name(&self) -> Option<&str> {
        self.bold_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Builder method to set the entry cutoff
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Builder method to set the emphasized author
    pub fn with_bold_name(mut self, name: impl Into<String>) -> Self {
        self.bold_name = Some(name.into());
        self
    }
}

/// Talk list options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TalkConfig {
    /// Show the event description under each entry
    pub include_description: bool,
    pub font_family: String,
    pub pdf_color: String,
    pub reference_color: String,
}

impl Default for TalkConfig {
    fn default() -> Self {
        Self {
            include_description: false,
            font_family: DEFAULT_TALK_FONT.to_string(),
            pdf_color: "#BC4749".to_string(),
            reference_color: "#05668D".to_string(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a file, choosing the format by extension
    /// (`.json` is JSON, anything else is TOML)
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content)?,
            _ => Self::from_toml(&content)?,
        };
        config.validate()?;
        tracing::debug!("Loaded render configuration from {}", path.display());
        Ok(config)
    }

    /// The feed script to render.
    ///
    /// Rendering cannot start without one, so a missing path is a setup
    /// error rather than an empty page.
    pub fn require_feed_source(&self) -> Result<&Path, ConfigError> {
        self.feed_source
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(ConfigError::MissingFeedSource)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let styles = [
            ("publications.journal_color", &self.publications.journal_color),
            ("publications.arxiv_color", &self.publications.arxiv_color),
            ("publications.separator_color", &self.publications.separator_color),
            ("publications.font_family", &self.publications.font_family),
            ("talks.font_family", &self.talks.font_family),
            ("talks.pdf_color", &self.talks.pdf_color),
            ("talks.reference_color", &self.talks.reference_color),
        ];

        for (field, value) in styles {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            if value.contains('"') {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: "must not contain double quotes".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Configuration error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No feed script path given anywhere
    #[error("no feed source: set `feed_source` to the path of your feed script")]
    MissingFeedSource,

    /// A value that would produce broken markup
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Configuration document could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(String),
}
