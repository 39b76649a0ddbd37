//! Section providers - one function per fact shown in the status line.
//!
//! Every provider takes the render snapshot and the width threshold for its
//! section. Providers are pure: they return an empty string when their fact
//! does not apply, an abbreviated form when the window is narrower than the
//! threshold, and the full form otherwise.

mod devinfo;
mod editing;
mod file;
mod location;

pub use devinfo::{diagnostics, vcs, DIAGNOSTICS_ICON, VCS_ICON};
pub use editing::{mode, spell, wrap};
pub use file::{filename, fileinfo, format_size, NO_NAME};
pub use location::location;

use crate::sources::RenderContext;

/// Prefix `body` with `glyph` when the context shows icons.
fn with_glyph(ctx: &RenderContext, glyph: &str, body: &str) -> String {
    if ctx.icons && !glyph.is_empty() {
        format!("{glyph} {body}")
    } else {
        body.to_string()
    }
}
