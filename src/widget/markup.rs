//! Parsing and fitting of the tagged line markup.

use std::sync::Arc;

use unicode_width::UnicodeWidthChar;

/// One visible character and the group it is highlighted with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Glyph {
    pub(crate) ch: char,
    pub(crate) width: u16,
    pub(crate) group: Option<Arc<str>>,
}

/// A parsed line: visible glyphs plus the positions of its markers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Markup {
    pub(crate) glyphs: Vec<Glyph>,
    /// Glyph index of the first `%<`.
    pub(crate) truncation: Option<usize>,
    /// Glyph index of the first `%=` and the group active there.
    pub(crate) gap: Option<(usize, Option<Arc<str>>)>,
}

impl Markup {
    /// Parse `%#Group#` tags, `%<`, `%=` and `%%`.
    ///
    /// Only the first truncation point and the first gap are kept. A lone or
    /// unknown `%` item is shown as written.
    pub(crate) fn parse(line: &str) -> Self {
        let mut markup = Self::default();
        let mut group: Option<Arc<str>> = None;
        let mut chars = line.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch != '%' {
                markup.push(ch, &group);
                continue;
            }
            match chars.peek().copied() {
                Some('%') => {
                    chars.next();
                    markup.push('%', &group);
                }
                Some('<') => {
                    chars.next();
                    if markup.truncation.is_none() {
                        markup.truncation = Some(markup.glyphs.len());
                    }
                }
                Some('=') => {
                    chars.next();
                    if markup.gap.is_none() {
                        markup.gap = Some((markup.glyphs.len(), group.clone()));
                    }
                }
                Some('#') => {
                    chars.next();
                    let name: String = chars.by_ref().take_while(|&c| c != '#').collect();
                    group = if name.is_empty() {
                        None
                    } else {
                        Some(Arc::from(name))
                    };
                }
                _ => markup.push('%', &group),
            }
        }

        markup
    }

    fn push(&mut self, ch: char, group: &Option<Arc<str>>) {
        #[allow(clippy::cast_possible_truncation)]
        let width = ch.width().unwrap_or(0) as u16;
        if width == 0 {
            return;
        }
        self.glyphs.push(Glyph {
            ch,
            width,
            group: group.clone(),
        });
    }

    /// Total display width.
    pub(crate) fn width(&self) -> usize {
        self.glyphs.iter().map(|g| usize::from(g.width)).sum()
    }

    /// Lay the line out in exactly `width` columns where possible.
    ///
    /// Too wide: glyphs are removed starting at the truncation point (or the
    /// start) and the cut is marked with `<`. Too narrow: the gap is filled
    /// with spaces in the group active at the gap.
    pub(crate) fn fit(mut self, width: u16) -> Vec<Glyph> {
        let total = self.width();
        let width = usize::from(width);

        if total > width {
            let cut = self.truncation.unwrap_or(0).min(self.glyphs.len());
            let needed = total - width + 1;
            let mut removed = 0usize;
            let mut end = cut;
            while end < self.glyphs.len() && removed < needed {
                removed += usize::from(self.glyphs[end].width);
                end += 1;
            }
            let group = self.glyphs.get(cut).and_then(|g| g.group.clone());
            self.glyphs.splice(
                cut..end,
                [Glyph {
                    ch: '<',
                    width: 1,
                    group,
                }],
            );
            return self.glyphs;
        }

        if let Some((at, group)) = self.gap.take() {
            let fill = width - total;
            let filler = std::iter::repeat(Glyph {
                ch: ' ',
                width: 1,
                group,
            })
            .take(fill);
            self.glyphs.splice(at..at, filler);
        }

        self.glyphs
    }
}
