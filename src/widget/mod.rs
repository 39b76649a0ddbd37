//! Ratatui surface for a rendered status line.

mod markup;

use std::collections::HashMap;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::highlight::HighlightClass;
use markup::Markup;

/// The height of the status line (always 1 row).
pub const STATUSLINE_HEIGHT: u16 = 1;

/// Styles for highlight groups.
#[derive(Clone, Debug)]
pub struct Theme {
    /// Style for text outside any group, and the base every group patches.
    pub base: Style,
    groups: HashMap<String, Style>,
}

impl Default for Theme {
    fn default() -> Self {
        let mode = |bg: Color| {
            Style::default()
                .bg(bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        };
        let info = Style::default().bg(Color::DarkGray).fg(Color::White);

        Self::new(Style::default().bg(Color::Black).fg(Color::Gray))
            .group(HighlightClass::ModeNormal.group(), mode(Color::Blue))
            .group(HighlightClass::ModeVisual.group(), mode(Color::Magenta))
            .group(HighlightClass::ModeInsert.group(), mode(Color::Green))
            .group(HighlightClass::ModeReplace.group(), mode(Color::Red))
            .group(HighlightClass::ModeCommand.group(), mode(Color::Yellow))
            .group(HighlightClass::ModeOther.group(), mode(Color::Cyan))
            .group(HighlightClass::Devinfo.group(), info)
            .group(HighlightClass::Filename.group(), Style::default().fg(Color::Gray))
            .group(HighlightClass::Fileinfo.group(), info)
            .group(HighlightClass::Inactive.group(), Style::default().fg(Color::DarkGray))
    }
}

impl Theme {
    /// Create a theme with no groups.
    #[must_use]
    pub fn new(base: Style) -> Self {
        Self {
            base,
            groups: HashMap::new(),
        }
    }

    /// Set the style for a group.
    #[must_use]
    pub fn group(mut self, name: impl Into<String>, style: Style) -> Self {
        self.groups.insert(name.into(), style);
        self
    }

    /// Style for a group; unknown groups get the base style.
    #[must_use]
    pub fn style(&self, group: Option<&str>) -> Style {
        group
            .and_then(|name| self.groups.get(name))
            .map_or(self.base, |style| self.base.patch(*style))
    }
}

/// Widget drawing one rendered status line.
pub struct StatuslineWidget<'a> {
    line: &'a str,
    theme: Theme,
}

impl<'a> StatuslineWidget<'a> {
    /// Create a widget for a line produced by [`Statusline::render`](crate::Statusline::render).
    #[must_use]
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            theme: Theme::default(),
        }
    }

    /// Set the theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl Widget for StatuslineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        // Fill background
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_char(' ').set_style(self.theme.base);
        }

        let glyphs = Markup::parse(self.line).fit(area.width);

        let mut x = area.x;
        for glyph in glyphs {
            if x + glyph.width > area.x + area.width {
                break;
            }
            let style = self.theme.style(glyph.group.as_deref());
            buf[(x, area.y)].set_char(glyph.ch).set_style(style);
            for pad in 1..glyph.width {
                buf[(x + pad, area.y)].set_skip(true);
            }
            x += glyph.width;
        }
    }
}
