//! Version control and diagnostics sections.

use crate::sections::with_glyph;
use crate::sources::{RenderContext, Severity};
use crate::truncate::is_truncated;

/// Glyph in front of the branch name.
pub const VCS_ICON: &str = "\u{e725}";

/// Glyph in front of the diagnostic counts.
pub const DIAGNOSTICS_ICON: &str = "\u{f0f1}";

/// Placeholder for "nothing known" or "nothing to report".
const PLACEHOLDER: &str = "-";

/// Branch name, followed by the change summary when there is room.
///
/// Never empty for a normal buffer: an absent answer from the provider is
/// shown as `-` so it reads differently from "section not applicable".
#[must_use]
pub fn vcs(ctx: &RenderContext, threshold: u16) -> String {
    if !ctx.is_normal_buffer() {
        return String::new();
    }

    let body = match &ctx.vcs {
        None => PLACEHOLDER.to_string(),
        Some(status) => {
            let branch = if status.branch.is_empty() {
                PLACEHOLDER
            } else {
                status.branch.as_str()
            };
            let summary = status.summary.as_deref().filter(|s| !s.is_empty());
            match summary {
                Some(summary) if !is_truncated(ctx.window.width, threshold) => {
                    format!("{branch} {summary}")
                }
                _ => branch.to_string(),
            }
        }
    };

    with_glyph(ctx, VCS_ICON, &body)
}

/// Nonzero diagnostic counts as `E1 W2 I3 H4`, always in that order.
///
/// Hidden when the window is narrow, the buffer is special, or no diagnostic
/// client is attached. An attached client with nothing to report shows `-`.
#[must_use]
pub fn diagnostics(ctx: &RenderContext, threshold: u16) -> String {
    if is_truncated(ctx.window.width, threshold) || !ctx.is_normal_buffer() {
        return String::new();
    }
    let Some(counts) = ctx.diagnostics else {
        return String::new();
    };

    let body = if counts.is_clear() {
        PLACEHOLDER.to_string()
    } else {
        Severity::ALL
            .iter()
            .filter_map(|&severity| {
                let count = counts.get(severity);
                (count > 0).then(|| format!("{}{count}", severity.sign()))
            })
            .collect::<Vec<_>>()
            .join(" ")
    };

    with_glyph(ctx, DIAGNOSTICS_ICON, &body)
}
