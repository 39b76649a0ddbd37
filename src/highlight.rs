//! Highlight classes and the inline tag markup they are emitted as.

use std::borrow::Cow;
use std::fmt;

/// Marker where the surface cuts the line when it is too wide.
pub const TRUNCATION_POINT: &str = "%<";

/// Marker separating the left-aligned part from the right-aligned part.
pub const FLEX_GAP: &str = "%=";

/// Style classes the built-in sections are tagged with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HighlightClass {
    /// Normal mode.
    ModeNormal,
    /// Visual and select modes.
    ModeVisual,
    /// Insert mode.
    ModeInsert,
    /// Replace modes.
    ModeReplace,
    /// Command-line mode.
    ModeCommand,
    /// Prompt, shell, terminal and unrecognized modes.
    ModeOther,
    /// Version control and diagnostics.
    Devinfo,
    /// File name and the flexible gap after it.
    Filename,
    /// File type, encoding and size.
    Fileinfo,
    /// Line shown in unfocused windows.
    Inactive,
}

impl HighlightClass {
    /// Every class, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::ModeNormal,
        Self::ModeVisual,
        Self::ModeInsert,
        Self::ModeReplace,
        Self::ModeCommand,
        Self::ModeOther,
        Self::Devinfo,
        Self::Filename,
        Self::Fileinfo,
        Self::Inactive,
    ];

    /// Group name used in the tag markup.
    #[must_use]
    pub fn group(self) -> &'static str {
        match self {
            Self::ModeNormal => "StatuslineModeNormal",
            Self::ModeVisual => "StatuslineModeVisual",
            Self::ModeInsert => "StatuslineModeInsert",
            Self::ModeReplace => "StatuslineModeReplace",
            Self::ModeCommand => "StatuslineModeCommand",
            Self::ModeOther => "StatuslineModeOther",
            Self::Devinfo => "StatuslineDevinfo",
            Self::Filename => "StatuslineFilename",
            Self::Fileinfo => "StatuslineFileinfo",
            Self::Inactive => "StatuslineInactive",
        }
    }

    /// Markup tag switching the surface to this class.
    #[must_use]
    pub fn tag(self) -> String {
        tag(self.group())
    }
}

impl fmt::Display for HighlightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.group())
    }
}

/// How a section is highlighted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Highlight {
    /// Switch to a built-in class.
    Class(HighlightClass),
    /// Switch to a group by name (for custom content builders).
    Group(Cow<'static, str>),
    /// Keep whatever tag was emitted last.
    Inherit,
}

impl Highlight {
    /// Group name this highlight switches to, or `None` when it inherits.
    #[must_use]
    pub fn group(&self) -> Option<&str> {
        match self {
            Self::Class(class) => Some(class.group()),
            Self::Group(name) => Some(name.as_ref()),
            Self::Inherit => None,
        }
    }
}

impl From<HighlightClass> for Highlight {
    fn from(class: HighlightClass) -> Self {
        Self::Class(class)
    }
}

/// Markup tag for a group name.
#[must_use]
pub fn tag(group: &str) -> String {
    format!("%#{group}#")
}

/// Escape text so it cannot be read back as markup.
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    if text.contains('%') {
        Cow::Owned(text.replace('%', "%%"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_names_are_unique() {
        let mut groups: Vec<_> = HighlightClass::ALL.iter().map(|c| c.group()).collect();
        groups.sort_unstable();
        groups.dedup();
        assert_eq!(groups.len(), HighlightClass::ALL.len());
    }

    #[test]
    fn test_tag_markup() {
        assert_eq!(HighlightClass::Devinfo.tag(), "%#StatuslineDevinfo#");
        assert_eq!(tag("Custom"), "%#Custom#");
    }

    #[test]
    fn test_escape() {
        assert!(matches!(escape("plain"), Cow::Borrowed("plain")));
        assert_eq!(escape("100%.txt"), "100%%.txt");
    }

    #[test]
    fn test_inherit_has_no_group() {
        assert_eq!(Highlight::Inherit.group(), None);
        assert_eq!(
            Highlight::from(HighlightClass::Filename).group(),
            Some("StatuslineFilename")
        );
    }
}
