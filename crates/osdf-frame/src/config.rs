//! Print configuration for tables and views.

use thiserror::Error;

/// Errors detected by [`PrintConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Columns would run into each other.
    #[error("column_padding must be at least 1, got {configured}")]
    PaddingTooSmall {
        /// The configured padding.
        configured: usize,
    },
    /// The id column has no heading.
    #[error("id_label must not be empty")]
    EmptyIdLabel,
}

/// Controls how tables and views render through `Display`.
///
/// Views and sliced tables inherit the configuration of their source;
/// cross-layout conversion copies it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintConfig {
    /// Spaces between adjacent columns. Default: 2. Minimum: 1.
    pub column_padding: usize,
    /// Heading of the row-id column. Default: `"ID"`. Must not be empty.
    pub id_label: String,
    /// Print at most this many rows and summarise the rest.
    /// Default: `None` (print every row).
    pub max_rows: Option<usize>,
}

impl PrintConfig {
    /// Default spacing between columns.
    pub const DEFAULT_COLUMN_PADDING: usize = 2;

    /// Default heading of the id column.
    pub const DEFAULT_ID_LABEL: &'static str = "ID";

    /// Check every field against its documented bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.column_padding < 1 {
            return Err(ConfigError::PaddingTooSmall {
                configured: self.column_padding,
            });
        }
        if self.id_label.is_empty() {
            return Err(ConfigError::EmptyIdLabel);
        }
        Ok(())
    }

    /// Replace `max_rows`.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            column_padding: Self::DEFAULT_COLUMN_PADDING,
            id_label: Self::DEFAULT_ID_LABEL.to_owned(),
            max_rows: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = PrintConfig::default();
        assert_eq!(config.column_padding, 2);
        assert_eq!(config.id_label, "ID");
        assert_eq!(config.max_rows, None);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_padding_rejected() {
        let config = PrintConfig {
            column_padding: 0,
            ..PrintConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PaddingTooSmall { configured: 0 })
        );
    }

    #[test]
    fn empty_label_rejected() {
        let config = PrintConfig {
            id_label: String::new(),
            ..PrintConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyIdLabel));
    }
}
