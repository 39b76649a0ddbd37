//! Section combiner - merges sections and markers into one tagged line.

use std::borrow::Cow;

use crate::highlight::{self, escape, Highlight, HighlightClass, FLEX_GAP, TRUNCATION_POINT};

/// One fragment of the status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Display text; empty or blank means the section is omitted entirely.
    pub text: String,
    /// Highlight for the text.
    pub highlight: Highlight,
}

impl Section {
    /// Create a section with an explicit highlight.
    #[must_use]
    pub fn new(text: impl Into<String>, highlight: impl Into<Highlight>) -> Self {
        Self {
            text: text.into(),
            highlight: highlight.into(),
        }
    }

    /// Create a section that keeps the previous highlight.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight: Highlight::Inherit,
        }
    }

    /// Check if the section is omitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// An entry in the list handed to [`combine`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    /// A section of text.
    Section(Section),
    /// Where the surface cuts the line when it does not fit.
    TruncationPoint,
    /// Gap that pushes everything after it to the right edge.
    FlexGap,
    /// Pre-formatted markup, passed through verbatim.
    Literal(Cow<'static, str>),
}

impl Entry {
    /// Markup tag switching to `class`, without any text.
    #[must_use]
    pub fn tag(class: HighlightClass) -> Self {
        Self::Literal(Cow::Owned(class.tag()))
    }
}

impl From<Section> for Entry {
    fn from(section: Section) -> Self {
        Self::Section(section)
    }
}

/// Merge entries into one line of tagged markup.
///
/// Empty or blank sections contribute nothing. A section with an explicit
/// highlight becomes `"<tag> <text> "`; an inheriting one becomes
/// `"<text> "`. Section text is trimmed and whitespace runs inside it shrink
/// to one space. Markers and literals are copied as they are.
#[must_use]
pub fn combine(entries: &[Entry]) -> String {
    let mut line = String::new();

    for entry in entries {
        match entry {
            Entry::Section(section) if section.is_empty() => {}
            Entry::Section(section) => {
                if let Some(group) = section.highlight.group() {
                    line.push_str(&highlight::tag(group));
                    line.push(' ');
                }
                let text = squeeze(&section.text);
                line.push_str(&escape(&text));
                line.push(' ');
            }
            Entry::TruncationPoint => line.push_str(TRUNCATION_POINT),
            Entry::FlexGap => line.push_str(FLEX_GAP),
            Entry::Literal(markup) => line.push_str(markup),
        }
    }

    line
}

/// Trim `text` and collapse every whitespace run to a single space.
fn squeeze(text: &str) -> Cow<'_, str> {
    let trimmed = text.trim();
    let mut previous_space = false;
    let clean = trimmed.chars().all(|ch| {
        let ok = (ch == ' ' && !previous_space) || !ch.is_whitespace();
        previous_space = ch.is_whitespace();
        ok
    });
    if clean {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(trimmed.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}
