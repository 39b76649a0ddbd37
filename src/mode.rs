//! Mode registry - maps raw host mode codes to display descriptors.

use crate::highlight::HighlightClass;

/// Mode code prefix for block-wise visual mode (CTRL-V).
pub const CTRL_V: char = '\u{16}';

/// Mode code prefix for block-wise select mode (CTRL-S).
pub const CTRL_S: char = '\u{13}';

/// How a mode is labelled and styled in the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeDescriptor {
    /// Label shown when there is room.
    pub long_label: &'static str,
    /// Label shown in narrow windows.
    pub short_label: &'static str,
    /// Class the mode section is tagged with.
    pub highlight: HighlightClass,
}

impl ModeDescriptor {
    const fn new(long_label: &'static str, short_label: &'static str, highlight: HighlightClass) -> Self {
        Self {
            long_label,
            short_label,
            highlight,
        }
    }
}

/// Descriptor returned for codes the registry does not know.
pub const UNKNOWN: ModeDescriptor = ModeDescriptor::new("Unknown", "U", HighlightClass::ModeOther);

static NORMAL: ModeDescriptor = ModeDescriptor::new("Normal", "N", HighlightClass::ModeNormal);
static VISUAL: ModeDescriptor = ModeDescriptor::new("Visual", "V", HighlightClass::ModeVisual);
static V_LINE: ModeDescriptor = ModeDescriptor::new("V-Line", "V-L", HighlightClass::ModeVisual);
static V_BLOCK: ModeDescriptor = ModeDescriptor::new("V-Block", "V-B", HighlightClass::ModeVisual);
static SELECT: ModeDescriptor = ModeDescriptor::new("Select", "S", HighlightClass::ModeVisual);
static S_LINE: ModeDescriptor = ModeDescriptor::new("S-Line", "S-L", HighlightClass::ModeVisual);
static S_BLOCK: ModeDescriptor = ModeDescriptor::new("S-Block", "S-B", HighlightClass::ModeVisual);
static INSERT: ModeDescriptor = ModeDescriptor::new("Insert", "I", HighlightClass::ModeInsert);
static REPLACE: ModeDescriptor = ModeDescriptor::new("Replace", "R", HighlightClass::ModeReplace);
static COMMAND: ModeDescriptor = ModeDescriptor::new("Command", "C", HighlightClass::ModeCommand);
static PROMPT: ModeDescriptor = ModeDescriptor::new("Prompt", "P", HighlightClass::ModeOther);
static SHELL: ModeDescriptor = ModeDescriptor::new("Shell", "Sh", HighlightClass::ModeOther);
static TERMINAL: ModeDescriptor = ModeDescriptor::new("Terminal", "T", HighlightClass::ModeOther);

/// Look up the descriptor for a raw mode code.
///
/// Never fails: a code the registry does not recognize (for instance one
/// introduced by a newer host) yields [`UNKNOWN`].
#[must_use]
pub fn describe(code: &str) -> &'static ModeDescriptor {
    match code {
        "n" | "no" | "nov" | "noV" | "no\u{16}" | "niI" | "niR" | "niV" | "nt" | "ntT" => &NORMAL,
        "v" | "vs" => &VISUAL,
        "V" | "Vs" => &V_LINE,
        "\u{16}" | "\u{16}s" => &V_BLOCK,
        "s" => &SELECT,
        "S" => &S_LINE,
        "\u{13}" => &S_BLOCK,
        "i" | "ic" | "ix" => &INSERT,
        "R" | "Rc" | "Rx" | "Rv" | "Rvc" | "Rvx" => &REPLACE,
        "c" | "cv" | "ce" => &COMMAND,
        "r" | "rm" | "r?" => &PROMPT,
        "!" => &SHELL,
        "t" => &TERMINAL,
        _ => &UNKNOWN,
    }
}
