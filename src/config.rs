//! Configuration for the SQL formatter
//!
//! A [`FormatConfig`] can be built in code or read from a TOML file:
//!
//! ```toml
//! indent_width = 4
//! keyword_case = "preserve_original"
//! comma_style = "leading_on_new_line"
//! ```
//!
//! Missing keys fall back to their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Smallest indent width accepted by [`FormatConfig::validate`]
pub const MIN_INDENT_WIDTH: usize = 1;
/// Largest indent width accepted by [`FormatConfig::validate`]
pub const MAX_INDENT_WIDTH: usize = 8;

/// How keyword text is cased in the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCase {
    /// `select` becomes `SELECT`
    #[default]
    Uppercase,
    /// Keywords keep their source spelling
    PreserveOriginal,
}

/// Where list commas go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommaStyle {
    /// `a, b`
    #[default]
    TrailingOnSameLine,
    /// `a` then `, b` on the next line
    LeadingOnNewLine,
}

/// Formatter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,

    /// Keyword casing
    pub keyword_case: KeywordCase,

    /// Comma placement in lists
    pub comma_style: CommaStyle,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            keyword_case: KeywordCase::Uppercase,
            comma_style: CommaStyle::TrailingOnSameLine,
        }
    }
}

impl FormatConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Four-space indents with leading commas
    pub fn expanded() -> Self {
        Self {
            indent_width: 4,
            comma_style: CommaStyle::LeadingOnNewLine,
            ..Self::default()
        }
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn with_keyword_case(mut self, case: KeywordCase) -> Self {
        self.keyword_case = case;
        self
    }

    pub fn with_comma_style(mut self, style: CommaStyle) -> Self {
        self.comma_style = style;
        self
    }

    /// Get indentation at a specific level
    ///
    /// A zero width is treated as one space so the layout never collapses
    /// nesting entirely.
    pub fn indent_at(&self, level: usize) -> String {
        " ".repeat(self.indent_width.max(MIN_INDENT_WIDTH) * level)
    }

    /// Check the user-facing bounds on the configuration.
    ///
    /// The formatter itself accepts any width; this is for front ends that
    /// take the value from a user.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_INDENT_WIDTH..=MAX_INDENT_WIDTH).contains(&self.indent_width) {
            return Err(ConfigError::IndentOutOfRange(self.indent_width));
        }
        Ok(())
    }

    /// Parse and validate a TOML configuration document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded format config from {}", path.display());
        Self::from_toml_str(&source)
    }
}
