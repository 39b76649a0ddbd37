//! Render entry points - the active and inactive line layouts.

use std::borrow::Cow;
use std::sync::Arc;

use crate::combine::{combine, Entry, Section};
use crate::highlight::{escape, HighlightClass};
use crate::sections::{self, NO_NAME};
use crate::sources::RenderContext;
use crate::truncate::{SectionKind, ThresholdConfig};

/// Produces the entry list for one line.
///
/// The default builders are [`active_entries`] and [`inactive_entries`];
/// options may replace either.
pub type ContentBuilder = Arc<dyn Fn(&RenderContext, &ThresholdConfig) -> Vec<Entry> + Send + Sync>;

/// Entries of the focused window's line.
///
/// The order is fixed: mode, spell, wrap, version control, diagnostics, the
/// truncation point, file name, the flexible gap, file info, location. Spell
/// and wrap share the mode's highlight, diagnostics share version control's.
#[must_use]
pub fn active_entries(ctx: &RenderContext, thresholds: &ThresholdConfig) -> Vec<Entry> {
    let threshold = |kind| thresholds.get(kind);

    let mode = sections::mode(ctx, threshold(SectionKind::Mode));
    let mode_highlight = mode.highlight.clone();

    vec![
        mode.into(),
        Section::plain(sections::spell(ctx, threshold(SectionKind::Spell))).into(),
        Section::plain(sections::wrap(ctx, threshold(SectionKind::Wrap))).into(),
        Section::new(
            sections::vcs(ctx, threshold(SectionKind::Vcs)),
            HighlightClass::Devinfo,
        )
        .into(),
        Section::plain(sections::diagnostics(ctx, threshold(SectionKind::Diagnostics))).into(),
        Entry::TruncationPoint,
        Section::new(
            sections::filename(ctx, threshold(SectionKind::Filename)),
            HighlightClass::Filename,
        )
        .into(),
        Entry::FlexGap,
        Section::new(
            sections::fileinfo(ctx, threshold(SectionKind::Fileinfo)),
            HighlightClass::Fileinfo,
        )
        .into(),
        Section::new(
            sections::location(ctx, threshold(SectionKind::Location)),
            mode_highlight,
        )
        .into(),
    ]
}

/// Entries of an unfocused window's line: the absolute path, left-aligned.
#[must_use]
pub fn inactive_entries(ctx: &RenderContext, _thresholds: &ThresholdConfig) -> Vec<Entry> {
    let path = ctx.buffer.path.to_string_lossy();
    let path = if path.is_empty() { Cow::Borrowed(NO_NAME) } else { path };

    vec![
        Entry::tag(HighlightClass::Inactive),
        Entry::Literal(Cow::Owned(escape(&path).into_owned())),
        Entry::FlexGap,
    ]
}

/// Render the focused window's line.
#[must_use]
pub fn render_active(ctx: &RenderContext, thresholds: &ThresholdConfig) -> String {
    combine(&active_entries(ctx, thresholds))
}

/// Render an unfocused window's line.
#[must_use]
pub fn render_inactive(ctx: &RenderContext) -> String {
    combine(&inactive_entries(ctx, &ThresholdConfig::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::fixtures::{context, context_with_width};
    use crate::sections::{DIAGNOSTICS_ICON, VCS_ICON};
    use crate::sources::{DiagnosticCounts, VcsStatus};

    fn position(line: &str, needle: &str) -> usize {
        line.find(needle)
            .unwrap_or_else(|| panic!("{needle:?} not in {line:?}"))
    }

    #[test]
    fn test_active_end_to_end() {
        let mut ctx = context();
        ctx.buffer.filetype = "text".to_string();
        ctx.vcs = Some(VcsStatus {
            branch: "main".to_string(),
            summary: None,
        });
        ctx.diagnostics = Some(DiagnosticCounts::default());

        let line = render_active(&ctx, &ThresholdConfig::default());

        assert_eq!(
            line,
            format!(
                "%#StatuslineModeNormal# Normal \
                 %#StatuslineDevinfo# {VCS_ICON} main {DIAGNOSTICS_ICON} - \
                 %<%#StatuslineFilename# /home/me/project/src/main.rs \
                 %=%#StatuslineFileinfo# text utf-8[unix] 2.00KiB \
                 %#StatuslineModeNormal# 12|340│5|42 "
            )
        );
    }

    #[test]
    fn test_active_order_is_fixed() {
        let mut ctx = context();
        ctx.buffer.spell_language = Some("en".to_string());
        ctx.buffer.wrap = true;
        ctx.diagnostics = Some(DiagnosticCounts {
            error: 1,
            ..Default::default()
        });

        let line = render_active(&ctx, &ThresholdConfig::default());

        let order = [
            position(&line, "Normal"),
            position(&line, "SPELL(en)"),
            position(&line, "WRAP"),
            position(&line, VCS_ICON),
            position(&line, "E1"),
            position(&line, "%<"),
            position(&line, "main.rs"),
            position(&line, "%="),
            position(&line, "rust"),
            position(&line, "12|340"),
        ];
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]), "{line}");
    }

    #[test]
    fn test_active_narrow_window() {
        let mut ctx = context_with_width(60);
        ctx.diagnostics = Some(DiagnosticCounts {
            warning: 4,
            ..Default::default()
        });

        let line = render_active(&ctx, &ThresholdConfig::default());

        assert!(line.starts_with("%#StatuslineModeNormal# N "));
        assert!(!line.contains("W4"));
        assert!(line.contains("%#StatuslineFilename# src/main.rs "));
        assert!(line.contains("%#StatuslineFileinfo# rust "));
        assert!(line.ends_with("12|340│5|42 "));
    }

    #[test]
    fn test_active_never_double_spaces() {
        for width in [10, 74, 75, 119, 120, 139, 140, 250] {
            let line = render_active(&context_with_width(width), &ThresholdConfig::default());
            assert!(!line.contains("  "), "{width}: {line}");
        }
    }

    #[test]
    fn test_padded_collaborator_text() {
        let mut ctx = context();
        ctx.vcs = Some(VcsStatus {
            branch: "main".to_string(),
            summary: Some("+1 ".to_string()),
        });
        ctx.buffer.spell_language = Some(" ".to_string());

        let line = render_active(&ctx, &ThresholdConfig::default());

        assert!(line.contains(&format!("{VCS_ICON} main +1 %<")), "{line}");
        assert!(!line.contains("  "), "{line}");
    }

    #[test]
    fn test_location_follows_mode_highlight() {
        let mut ctx = context();
        ctx.window.mode = "i".to_string();
        let line = render_active(&ctx, &ThresholdConfig::default());
        assert!(line.ends_with("%#StatuslineModeInsert# 12|340│5|42 "));
    }

    #[test]
    fn test_inactive() {
        let ctx = context_with_width(30);
        assert_eq!(
            render_inactive(&ctx),
            "%#StatuslineInactive#/home/me/project/src/main.rs%="
        );
    }

    #[test]
    fn test_inactive_unnamed_and_escaped() {
        let mut ctx = context();
        ctx.buffer.path = std::path::PathBuf::new();
        assert_eq!(render_inactive(&ctx), "%#StatuslineInactive#[No Name]%=");

        ctx.buffer.path = std::path::PathBuf::from("/tmp/50%.txt");
        assert_eq!(render_inactive(&ctx), "%#StatuslineInactive#/tmp/50%%.txt%=");
    }
}
