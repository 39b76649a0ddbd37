//! File name and file info sections.

use crate::sources::{BufferKind, RenderContext};
use crate::truncate::is_truncated;

/// Shown in place of a path for buffers without a name.
pub const NO_NAME: &str = "[No Name]";

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;

/// Path of the current file with modified and read-only flags.
///
/// Terminal buffers show only their title. Other buffers show the path
/// relative to the window's working directory when narrow and the absolute
/// path otherwise.
#[must_use]
pub fn filename(ctx: &RenderContext, threshold: u16) -> String {
    let buffer = &ctx.buffer;

    if buffer.kind == BufferKind::Terminal {
        return or_no_name(buffer.file_name().to_string());
    }

    let path = if is_truncated(ctx.window.width, threshold) {
        buffer.relative_path(&ctx.window.cwd)
    } else {
        buffer.path.as_path()
    };

    let mut text = or_no_name(path.to_string_lossy().into_owned());
    if buffer.modified {
        text.push_str("[+]");
    }
    if !buffer.modifiable {
        text.push_str("[-]");
    }
    if buffer.readonly {
        text.push_str("[RO]");
    }
    text
}

fn or_no_name(name: String) -> String {
    if name.is_empty() {
        NO_NAME.to_string()
    } else {
        name
    }
}

/// File type with icon, plus encoding, line endings and size when there is room.
#[must_use]
pub fn fileinfo(ctx: &RenderContext, threshold: u16) -> String {
    let buffer = &ctx.buffer;
    if buffer.filetype.is_empty() || !ctx.is_normal_buffer() {
        return String::new();
    }

    let mut text = match ctx.file_icon.as_deref().filter(|icon| ctx.icons && !icon.is_empty()) {
        Some(icon) => format!("{icon} {}", buffer.filetype),
        None => buffer.filetype.clone(),
    };

    if is_truncated(ctx.window.width, threshold) {
        return text;
    }

    text.push(' ');
    text.push_str(&buffer.encoding);
    text.push('[');
    text.push_str(&buffer.format);
    text.push(']');
    if let Some(size) = buffer.size {
        text.push(' ');
        text.push_str(&format_size(size));
    }
    text
}

/// Human-readable size: bytes below 1 KiB, then KiB and MiB with two decimals.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes}B")
    } else if bytes < MIB {
        format!("{:.2}KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2}MiB", bytes as f64 / MIB as f64)
    }
}
