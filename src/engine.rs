//! Status line engine - holds options and collaborators, renders on demand.

use crate::combine::combine;
use crate::config::Options;
use crate::error::{Error, Result};
use crate::render::{active_entries, inactive_entries};
use crate::sources::{RenderContext, Sources};

/// A configured status line.
///
/// Holds no render state: every call to [`Statusline::render`] captures a
/// fresh [`RenderContext`] and derives the line from it.
#[derive(Debug)]
pub struct Statusline {
    options: Options,
    sources: Sources,
}

impl Statusline {
    /// Create a status line.
    ///
    /// When `apply_host_display_settings` is set, the host is asked to always
    /// show the status line.
    ///
    /// # Errors
    /// Returns an error if the host refuses the display settings.
    pub fn new(options: Options, sources: Sources) -> Result<Self> {
        if options.apply_host_display_settings {
            sources
                .host()
                .show_statusline_always()
                .map_err(Error::HostSettings)?;
            tracing::debug!("host set to always show the status line");
        }

        Ok(Self { options, sources })
    }

    /// Create a status line with default options.
    ///
    /// # Errors
    /// Returns an error if the host refuses the display settings.
    pub fn with_sources(sources: Sources) -> Result<Self> {
        Self::new(Options::default(), sources)
    }

    /// The options this status line was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Capture the current state from the collaborators.
    #[must_use]
    pub fn capture(&self) -> RenderContext {
        RenderContext::capture(&self.sources, self.options.use_icons)
    }

    /// Render the line for a window, active if `focused`.
    #[must_use]
    pub fn render(&self, focused: bool) -> String {
        self.render_context(&self.capture(), focused)
    }

    /// Render the line for an already captured context.
    #[must_use]
    pub fn render_context(&self, ctx: &RenderContext, focused: bool) -> String {
        let thresholds = &self.options.thresholds;
        let builder = if focused {
            self.options.active_content.as_ref()
        } else {
            self.options.inactive_content.as_ref()
        };

        let entries = match builder {
            Some(build) => build(ctx, thresholds),
            None if focused => active_entries(ctx, thresholds),
            None => inactive_entries(ctx, thresholds),
        };

        let line = combine(&entries);
        tracing::trace!(
            focused,
            width = ctx.window.width,
            entries = entries.len(),
            "rendered status line"
        );
        line
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use super::*;
    use crate::combine::{Entry, Section};
    use crate::highlight::HighlightClass;
    use crate::render::render_active;
    use crate::sources::testing::{FakeHost, FailingHost, FixedDiagnostics, FixedIcons, FixedVcs};
    use crate::sources::{DiagnosticCounts, VcsStatus};
    use crate::truncate::{SectionKind, ThresholdConfig};

    #[test]
    fn test_applies_display_settings() {
        let host = FakeHost::default();
        let calls = Arc::clone(&host.display_calls);

        let _line = Statusline::with_sources(Sources::new(Box::new(host))).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_skips_display_settings() {
        let host = FakeHost::default();
        let calls = Arc::clone(&host.display_calls);
        let options = Options {
            apply_host_display_settings: false,
            ..Options::default()
        };

        let _line = Statusline::new(options, Sources::new(Box::new(host))).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_refused_display_settings() {
        let host = FakeHost {
            refuse_display: true,
            ..FakeHost::default()
        };
        let err = Statusline::with_sources(Sources::new(Box::new(host))).unwrap_err();
        assert!(matches!(err, Error::HostSettings(_)));
    }

    #[test]
    fn test_render_matches_entry_points() {
        let sources = Sources::new(Box::new(FakeHost::default()))
            .vcs(Box::new(FixedVcs::Status(VcsStatus {
                branch: "main".to_string(),
                summary: Some("+1".to_string()),
            })))
            .diagnostics(Box::new(FixedDiagnostics::attached(DiagnosticCounts {
                error: 2,
                ..Default::default()
            })))
            .icons(Box::new(FixedIcons("R")));
        let statusline = Statusline::with_sources(sources).unwrap();

        let ctx = statusline.capture();
        let active = statusline.render(true);

        assert_eq!(active, render_active(&ctx, &ThresholdConfig::default()));
        assert!(active.contains("main +1"));
        assert!(active.contains("E2"));
        assert!(active.contains("R rust"));
        assert_eq!(
            statusline.render(false),
            "%#StatuslineInactive#/home/me/project/src/main.rs%="
        );
    }

    #[test]
    fn test_render_is_repeatable() {
        let statusline =
            Statusline::with_sources(Sources::new(Box::new(FakeHost::default()))).unwrap();
        assert_eq!(statusline.render(true), statusline.render(true));
        assert_eq!(statusline.render(false), statusline.render(false));
    }

    #[test]
    fn test_render_survives_failing_collaborators() {
        let sources = Sources::new(Box::new(FailingHost))
            .vcs(Box::new(FixedVcs::Failing))
            .diagnostics(Box::new(FixedDiagnostics::Failing));
        let statusline = Statusline::with_sources(sources).unwrap();

        let line = statusline.render(true);

        assert!(line.starts_with("%#StatuslineModeOther# U "));
        assert!(line.contains("%#StatuslineFilename# [No Name] %="), "{line}");
        assert!(!line.contains("[-]"), "{line}");
        assert!(!line.contains("[+]"), "{line}");
        assert!(!line.contains("[RO]"), "{line}");
        assert!(line.ends_with("0|0│0|0 "));
    }

    #[test]
    fn test_untracked_and_detached() {
        let sources = Sources::new(Box::new(FakeHost::default()))
            .vcs(Box::new(FixedVcs::Untracked))
            .diagnostics(Box::new(FixedDiagnostics::Detached));
        let options = Options {
            use_icons: false,
            ..Options::default()
        };
        let statusline = Statusline::new(options, sources).unwrap();

        let line = statusline.render(true);

        assert!(line.contains("%#StatuslineDevinfo# - %<"));
    }

    #[test]
    fn test_custom_builders() {
        let active: crate::ContentBuilder =
            Arc::new(|ctx: &RenderContext, thresholds: &ThresholdConfig| {
                vec![
                    crate::sections::mode(ctx, thresholds.get(SectionKind::Mode)).into(),
                    Entry::FlexGap,
                    Section::new(ctx.buffer.filetype.clone(), HighlightClass::Fileinfo).into(),
                ]
            });
        let inactive: crate::ContentBuilder = Arc::new(|_: &RenderContext, _: &ThresholdConfig| {
            vec![Entry::tag(HighlightClass::Inactive), Entry::FlexGap]
        });
        let options = Options::default()
            .active_content(active)
            .inactive_content(inactive);

        let statusline =
            Statusline::new(options, Sources::new(Box::new(FakeHost::default()))).unwrap();

        assert_eq!(
            statusline.render(true),
            "%#StatuslineModeNormal# Normal %=%#StatuslineFileinfo# rust "
        );
        assert_eq!(statusline.render(false), "%#StatuslineInactive#%=");
    }

    #[test]
    fn test_thresholds_from_options() {
        let mut options = Options::default();
        options.thresholds.set(SectionKind::Mode, 500).unwrap();
        let statusline =
            Statusline::new(options, Sources::new(Box::new(FakeHost::default()))).unwrap();
        assert!(statusline.render(true).starts_with("%#StatuslineModeNormal# N "));
    }
}
