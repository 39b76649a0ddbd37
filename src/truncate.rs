//! Truncation policy - per-section width thresholds.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Whether a section should render its abbreviated form.
///
/// Recomputed on every render; there is no hysteresis around the threshold.
#[must_use]
pub fn is_truncated(current_width: u16, threshold: u16) -> bool {
    current_width < threshold
}

/// The named sections of the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Current editor mode.
    Mode,
    /// Spell checking state.
    Spell,
    /// Soft wrap state.
    Wrap,
    /// Version control branch and changes.
    Vcs,
    /// Diagnostic counts.
    Diagnostics,
    /// File path and flags.
    Filename,
    /// File type, encoding and size.
    Fileinfo,
    /// Cursor location.
    Location,
}

impl SectionKind {
    /// Every section, in active-line order.
    pub const ALL: [Self; 8] = [
        Self::Mode,
        Self::Spell,
        Self::Wrap,
        Self::Vcs,
        Self::Diagnostics,
        Self::Filename,
        Self::Fileinfo,
        Self::Location,
    ];

    /// Name used in options files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Mode => "mode",
            Self::Spell => "spell",
            Self::Wrap => "wrap",
            Self::Vcs => "vcs",
            Self::Diagnostics => "diagnostics",
            Self::Filename => "filename",
            Self::Fileinfo => "fileinfo",
            Self::Location => "location",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SectionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}

/// Minimum window width per section below which it abbreviates itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThresholdConfig {
    mode: u16,
    spell: u16,
    wrap: u16,
    vcs: u16,
    diagnostics: u16,
    filename: u16,
    fileinfo: u16,
    location: u16,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            mode: 120,
            spell: 120,
            wrap: 120,
            vcs: 75,
            diagnostics: 75,
            filename: 140,
            fileinfo: 120,
            location: 75,
        }
    }
}

impl ThresholdConfig {
    /// Threshold for a section.
    #[must_use]
    pub fn get(&self, kind: SectionKind) -> u16 {
        *self.slot(kind)
    }

    /// Replace the threshold for a section.
    ///
    /// # Errors
    /// Returns an error if `width` is zero.
    pub fn set(&mut self, kind: SectionKind, width: u16) -> crate::Result<()> {
        if width == 0 {
            return Err(Error::ZeroThreshold(kind.name().to_string()));
        }
        *self.slot_mut(kind) = width;
        Ok(())
    }

    /// Builder-style variant of [`ThresholdConfig::set`].
    ///
    /// # Errors
    /// Returns an error if `width` is zero.
    pub fn with(mut self, kind: SectionKind, width: u16) -> crate::Result<Self> {
        self.set(kind, width)?;
        Ok(self)
    }

    /// Whether `kind` is truncated at `current_width`.
    #[must_use]
    pub fn truncates(&self, kind: SectionKind, current_width: u16) -> bool {
        is_truncated(current_width, self.get(kind))
    }

    fn slot(&self, kind: SectionKind) -> &u16 {
        match kind {
            SectionKind::Mode => &self.mode,
            SectionKind::Spell => &self.spell,
            SectionKind::Wrap => &self.wrap,
            SectionKind::Vcs => &self.vcs,
            SectionKind::Diagnostics => &self.diagnostics,
            SectionKind::Filename => &self.filename,
            SectionKind::Fileinfo => &self.fileinfo,
            SectionKind::Location => &self.location,
        }
    }

    fn slot_mut(&mut self, kind: SectionKind) -> &mut u16 {
        match kind {
            SectionKind::Mode => &mut self.mode,
            SectionKind::Spell => &mut self.spell,
            SectionKind::Wrap => &mut self.wrap,
            SectionKind::Vcs => &mut self.vcs,
            SectionKind::Diagnostics => &mut self.diagnostics,
            SectionKind::Filename => &mut self.filename,
            SectionKind::Fileinfo => &mut self.fileinfo,
            SectionKind::Location => &mut self.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_switch_point() {
        let threshold = 80;
        for width in 0..=200 {
            assert_eq!(is_truncated(width, threshold), width < threshold);
        }
        assert!(is_truncated(79, 80));
        assert!(!is_truncated(80, 80));
    }

    #[test]
    fn test_section_names_round_trip() {
        for kind in SectionKind::ALL {
            assert_eq!(kind.name().parse::<SectionKind>().unwrap(), kind);
        }
        assert!(matches!(
            "branch".parse::<SectionKind>(),
            Err(Error::UnknownSection(name)) if name == "branch"
        ));
    }

    #[test]
    fn test_set_threshold() {
        let config = ThresholdConfig::default()
            .with(SectionKind::Filename, 90)
            .unwrap();
        assert_eq!(config.get(SectionKind::Filename), 90);
        assert_eq!(config.get(SectionKind::Mode), 120);
        assert!(config.truncates(SectionKind::Filename, 89));
        assert!(!config.truncates(SectionKind::Filename, 90));
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let mut config = ThresholdConfig::default();
        assert!(matches!(
            config.set(SectionKind::Vcs, 0),
            Err(Error::ZeroThreshold(name)) if name == "vcs"
        ));
        assert_eq!(config.get(SectionKind::Vcs), 75);
    }
}
