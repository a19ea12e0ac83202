//! Pager configuration.

use serde::{Deserialize, Serialize};
use webnovels_model::{PageSize, validate_tag};

use crate::error::{PagerError, Result};

/// Button that resets the filter.
pub const ALL_TAG: &str = "all";

/// Button reserved for the "latest" shortcut.
pub const LATEST_TAG: &str = "latest";

/// Session-wide pager settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Articles per page.
    pub page_size: PageSize,

    /// Tag of the button that clears the selection.
    pub all_tag: String,

    /// Tag of the "latest" button. Toggled like any topic tag.
    pub latest_tag: String,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            all_tag: ALL_TAG.to_string(),
            latest_tag: LATEST_TAG.to_string(),
        }
    }
}

impl PagerConfig {
    /// Create a default config with a custom page size.
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            page_size,
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|source| PagerError::Config { source })?;
        config.validate()?;
        tracing::debug!(
            page_size = config.page_size.get(),
            all_tag = %config.all_tag,
            latest_tag = %config.latest_tag,
            "Loaded pager config"
        );
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|source| PagerError::Serialize { source })
    }

    /// Check that the reserved tags are usable and distinct.
    pub fn validate(&self) -> Result<()> {
        validate_tag(&self.all_tag)?;
        validate_tag(&self.latest_tag)?;
        if self.all_tag == self.latest_tag {
            return Err(PagerError::InvalidConfig {
                message: format!(
                    "all_tag and latest_tag must differ (both are {:?})",
                    self.all_tag
                ),
            });
        }
        Ok(())
    }

    pub fn is_reserved(&self, tag: &str) -> bool {
        tag == self.all_tag || tag == self.latest_tag
    }
}
