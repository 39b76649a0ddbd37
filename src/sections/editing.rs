//! Mode, spell and wrap sections.

use crate::combine::Section;
use crate::mode::describe;
use crate::sources::RenderContext;
use crate::truncate::is_truncated;

/// Current mode, tagged with the mode's own highlight class.
#[must_use]
pub fn mode(ctx: &RenderContext, threshold: u16) -> Section {
    let descriptor = describe(&ctx.window.mode);
    let label = if is_truncated(ctx.window.width, threshold) {
        descriptor.short_label
    } else {
        descriptor.long_label
    };
    Section::new(label, descriptor.highlight)
}

/// `SPELL(<lang>)`, or `SPELL` when narrow; empty when spell checking is off.
#[must_use]
pub fn spell(ctx: &RenderContext, threshold: u16) -> String {
    let Some(language) = &ctx.buffer.spell_language else {
        return String::new();
    };
    if is_truncated(ctx.window.width, threshold) || language.is_empty() {
        "SPELL".to_string()
    } else {
        format!("SPELL({language})")
    }
}

/// `WRAP` when soft wrap is on.
#[must_use]
pub fn wrap(ctx: &RenderContext, _threshold: u16) -> String {
    if ctx.buffer.wrap {
        "WRAP".to_string()
    } else {
        String::new()
    }
}
