//! Cursor location section.

use crate::sources::RenderContext;

/// `<line>|<total lines>│<virtual column>|<last column>`, never abbreviated.
#[must_use]
pub fn location(ctx: &RenderContext, _threshold: u16) -> String {
    let window = &ctx.window;
    format!(
        "{}|{}│{}|{}",
        window.line, window.line_count, window.virtual_column, window.last_column
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::fixtures::context_with_width;

    #[test]
    fn test_location_ignores_width() {
        assert_eq!(location(&context_with_width(200), 75), "12|340│5|42");
        assert_eq!(location(&context_with_width(10), 75), "12|340│5|42");
    }
}
