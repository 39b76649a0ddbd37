//! Options for a status line and the TOML overlay they can be loaded from.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::Result;
use crate::render::ContentBuilder;
use crate::truncate::{SectionKind, ThresholdConfig};

/// Options for a [`Statusline`](crate::Statusline).
#[derive(Clone)]
pub struct Options {
    /// Replaces the built-in active line layout.
    pub active_content: Option<ContentBuilder>,
    /// Replaces the built-in inactive line layout.
    pub inactive_content: Option<ContentBuilder>,
    /// Ask the host to always show the status line. Defaults to `true`.
    pub apply_host_display_settings: bool,
    /// Per-section truncation widths.
    pub thresholds: ThresholdConfig,
    /// Show icon glyphs. Defaults to `true`.
    pub use_icons: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            active_content: None,
            inactive_content: None,
            apply_host_display_settings: true,
            thresholds: ThresholdConfig::default(),
            use_icons: true,
        }
    }
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("active_content", &self.active_content.is_some())
            .field("inactive_content", &self.inactive_content.is_some())
            .field("apply_host_display_settings", &self.apply_host_display_settings)
            .field("thresholds", &self.thresholds)
            .field("use_icons", &self.use_icons)
            .finish()
    }
}

/// Partial options as written in a TOML file. Absent keys keep their defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionsFile {
    #[serde(default)]
    apply_host_display_settings: Option<bool>,
    #[serde(default)]
    use_icons: Option<bool>,
    #[serde(default)]
    thresholds: BTreeMap<String, u16>,
}

impl Options {
    /// Parse options from TOML, starting from the defaults.
    ///
    /// ```toml
    /// apply_host_display_settings = false
    /// [thresholds]
    /// filename = 100
    /// ```
    ///
    /// # Errors
    /// Returns an error for malformed TOML, unknown keys, unknown section
    /// names, or zero thresholds.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Self::default().merge_toml_str(contents)
    }

    /// Overlay the keys present in `contents` onto these options.
    ///
    /// # Errors
    /// Same as [`Options::from_toml_str`].
    pub fn merge_toml_str(mut self, contents: &str) -> Result<Self> {
        let file: OptionsFile = toml::from_str(contents)?;

        if let Some(apply) = file.apply_host_display_settings {
            self.apply_host_display_settings = apply;
        }
        if let Some(use_icons) = file.use_icons {
            self.use_icons = use_icons;
        }
        for (name, width) in file.thresholds {
            let kind: SectionKind = name.parse()?;
            self.thresholds.set(kind, width)?;
        }

        tracing::debug!("loaded options: {:?}", self);
        Ok(self)
    }

    /// Set the active line builder.
    #[must_use]
    pub fn active_content(mut self, builder: ContentBuilder) -> Self {
        self.active_content = Some(builder);
        self
    }

    /// Set the inactive line builder.
    #[must_use]
    pub fn inactive_content(mut self, builder: ContentBuilder) -> Self {
        self.inactive_content = Some(builder);
        self
    }
}
