//! Render context - the per-render snapshot every section reads from.

use std::path::{Path, PathBuf};

use crate::sources::Sources;

/// Window introspection answered by the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowInfo {
    /// Window width in columns.
    pub width: u16,
    /// Raw mode code (`"n"`, `"i"`, `"\u{16}"`, ...).
    pub mode: String,
    /// Cursor line, 1-based.
    pub line: usize,
    /// Number of lines in the buffer.
    pub line_count: usize,
    /// Cursor virtual column, 1-based.
    pub virtual_column: usize,
    /// Virtual column of the last character on the cursor line.
    pub last_column: usize,
    /// Working directory of the window, used to relativize file paths.
    pub cwd: PathBuf,
}

/// What kind of surface a buffer is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// A regular file-backed, editable buffer.
    #[default]
    Normal,
    /// A terminal emulator.
    Terminal,
    /// A help page.
    Help,
    /// A quickfix or location list.
    Quickfix,
    /// A prompt buffer.
    Prompt,
    /// A floating popup.
    Popup,
    /// Any other special buffer (scratch, nofile, acwrite...).
    Scratch,
}

impl BufferKind {
    /// Map a Vim-style `'buftype'` value to a kind.
    #[must_use]
    pub fn from_buftype(buftype: &str) -> Self {
        match buftype {
            "" => Self::Normal,
            "terminal" => Self::Terminal,
            "help" => Self::Help,
            "quickfix" => Self::Quickfix,
            "prompt" => Self::Prompt,
            "popup" => Self::Popup,
            _ => Self::Scratch,
        }
    }

    /// Whether this is a normal editable buffer.
    #[must_use]
    pub fn is_normal(self) -> bool {
        self == Self::Normal
    }
}

/// Buffer introspection answered by the host.
///
/// The default is an unnamed, editable buffer with no flags set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferInfo {
    /// Kind of buffer.
    pub kind: BufferKind,
    /// Absolute path of the file, empty for unnamed buffers.
    pub path: PathBuf,
    /// Unsaved changes.
    pub modified: bool,
    /// Whether the buffer can be edited at all.
    pub modifiable: bool,
    /// Read-only flag.
    pub readonly: bool,
    /// Spell-check language when spell checking is on.
    pub spell_language: Option<String>,
    /// Soft wrap.
    pub wrap: bool,
    /// File type, empty when undetected.
    pub filetype: String,
    /// File encoding (`utf-8`, ...).
    pub encoding: String,
    /// Line-ending format (`unix`, `dos`, `mac`).
    pub format: String,
    /// Size in bytes, when known.
    pub size: Option<u64>,
}

impl Default for BufferInfo {
    fn default() -> Self {
        Self {
            kind: BufferKind::Normal,
            path: PathBuf::new(),
            modified: false,
            modifiable: true,
            readonly: false,
            spell_language: None,
            wrap: false,
            filetype: String::new(),
            encoding: String::new(),
            format: String::new(),
            size: None,
        }
    }
}

impl BufferInfo {
    /// Last path component, or an empty string for unnamed buffers.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    /// File extension without the dot, or an empty string.
    #[must_use]
    pub fn extension(&self) -> &str {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
    }

    /// Path relative to `cwd` when it lies below it, the absolute path otherwise.
    #[must_use]
    pub fn relative_path<'a>(&'a self, cwd: &Path) -> &'a Path {
        if cwd.as_os_str().is_empty() {
            return &self.path;
        }
        self.path.strip_prefix(cwd).unwrap_or(&self.path)
    }
}

/// Branch and change summary from the version control provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VcsStatus {
    /// Current branch, empty when detached or unknown.
    pub branch: String,
    /// Short change summary such as `+3 ~1 -2`.
    pub summary: Option<String>,
}

/// Diagnostic severities in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Errors.
    Error,
    /// Warnings.
    Warning,
    /// Informational messages.
    Information,
    /// Hints.
    Hint,
}

impl Severity {
    /// Every severity, most severe first.
    pub const ALL: [Self; 4] = [Self::Error, Self::Warning, Self::Information, Self::Hint];

    /// Sign shown before the count.
    #[must_use]
    pub fn sign(self) -> &'static str {
        match self {
            Self::Error => "E",
            Self::Warning => "W",
            Self::Information => "I",
            Self::Hint => "H",
        }
    }
}

/// Diagnostic counts for the current buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticCounts {
    /// Number of errors.
    pub error: usize,
    /// Number of warnings.
    pub warning: usize,
    /// Number of informational messages.
    pub information: usize,
    /// Number of hints.
    pub hint: usize,
}

impl DiagnosticCounts {
    /// Count for one severity.
    #[must_use]
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Information => self.information,
            Severity::Hint => self.hint,
        }
    }

    /// True when every count is zero.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        Severity::ALL.iter().all(|s| self.get(*s) == 0)
    }
}

/// Read-only snapshot of everything a render needs.
///
/// Built fresh for every render and never mutated afterwards. Facts a
/// collaborator could not answer are recorded as absent rather than failing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Window state.
    pub window: WindowInfo,
    /// Buffer state.
    pub buffer: BufferInfo,
    /// Version control status; `None` when the provider has no answer.
    pub vcs: Option<VcsStatus>,
    /// Diagnostic counts; `None` when no diagnostic client is attached.
    pub diagnostics: Option<DiagnosticCounts>,
    /// Icon for the file type, if an icon source knows one.
    pub file_icon: Option<String>,
    /// Whether glyphs should be shown at all.
    pub icons: bool,
}

impl RenderContext {
    /// Create a context from window and buffer state with no collaborator data.
    #[must_use]
    pub fn new(window: WindowInfo, buffer: BufferInfo) -> Self {
        Self {
            window,
            buffer,
            vcs: None,
            diagnostics: None,
            file_icon: None,
            icons: true,
        }
    }

    /// Query every collaborator once and freeze the answers.
    ///
    /// A failing collaborator degrades to the absent value for its fact.
    #[must_use]
    pub fn capture(sources: &Sources, icons: bool) -> Self {
        let window = sources.host.window().unwrap_or_else(|e| {
            tracing::debug!("window introspection failed: {e:#}");
            WindowInfo::default()
        });
        let buffer = sources.host.buffer().unwrap_or_else(|e| {
            tracing::debug!("buffer introspection failed: {e:#}");
            BufferInfo::default()
        });

        let vcs = sources.vcs.as_ref().and_then(|vcs| {
            vcs.status(&buffer).unwrap_or_else(|e| {
                tracing::debug!("vcs status failed: {e:#}");
                None
            })
        });
        let diagnostics = sources.diagnostics.as_ref().and_then(|diagnostics| {
            diagnostics.counts(&buffer).unwrap_or_else(|e| {
                tracing::debug!("diagnostics query failed: {e:#}");
                None
            })
        });
        let file_icon = if icons {
            sources
                .icons
                .as_ref()
                .and_then(|source| source.icon(buffer.file_name(), buffer.extension()))
        } else {
            None
        };

        Self {
            window,
            buffer,
            vcs,
            diagnostics,
            file_icon,
            icons,
        }
    }

    /// Whether the current buffer is a normal editable buffer.
    #[must_use]
    pub fn is_normal_buffer(&self) -> bool {
        self.buffer.kind.is_normal()
    }
}
