//! Collaborators the status line reads its facts from.
//!
//! The host editor, version control, diagnostics and icons are all external;
//! the engine only consumes them through these traits. Every read is a cheap
//! synchronous call made once per render while the [`RenderContext`] is
//! captured.

mod context;

pub use context::{
    BufferInfo, BufferKind, DiagnosticCounts, RenderContext, Severity, VcsStatus, WindowInfo,
};

/// Window and buffer introspection provided by the host editor.
pub trait Host: Send + Sync {
    /// State of the window being rendered.
    ///
    /// # Errors
    /// Returns an error if the host cannot answer.
    fn window(&self) -> anyhow::Result<WindowInfo>;

    /// State of the buffer shown in that window.
    ///
    /// # Errors
    /// Returns an error if the host cannot answer.
    fn buffer(&self) -> anyhow::Result<BufferInfo>;

    /// Make the host always display the status line, never hiding it.
    ///
    /// # Errors
    /// Returns an error if the host refuses the setting.
    fn show_statusline_always(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Version control status provider.
pub trait VcsSource: Send + Sync {
    /// Status for the file shown in `buffer`; `Ok(None)` when untracked or unknown.
    ///
    /// # Errors
    /// Returns an error if the provider fails; treated the same as `Ok(None)`.
    fn status(&self, buffer: &BufferInfo) -> anyhow::Result<Option<VcsStatus>>;
}

/// Diagnostics provider.
pub trait DiagnosticsSource: Send + Sync {
    /// Counts for `buffer`; `Ok(None)` when no diagnostic client is attached.
    ///
    /// # Errors
    /// Returns an error if the provider fails; treated the same as `Ok(None)`.
    fn counts(&self, buffer: &BufferInfo) -> anyhow::Result<Option<DiagnosticCounts>>;
}

/// File-type icon lookup.
pub trait IconSource: Send + Sync {
    /// Glyph for a file, if one is known.
    fn icon(&self, file_name: &str, extension: &str) -> Option<String>;
}

/// The set of collaborators a status line renders from.
pub struct Sources {
    pub(crate) host: Box<dyn Host>,
    pub(crate) vcs: Option<Box<dyn VcsSource>>,
    pub(crate) diagnostics: Option<Box<dyn DiagnosticsSource>>,
    pub(crate) icons: Option<Box<dyn IconSource>>,
}

impl Sources {
    /// Create a source set with only the host; other facts read as absent.
    #[must_use]
    pub fn new(host: Box<dyn Host>) -> Self {
        Self {
            host,
            vcs: None,
            diagnostics: None,
            icons: None,
        }
    }

    /// Set the version control provider.
    #[must_use]
    pub fn vcs(mut self, vcs: Box<dyn VcsSource>) -> Self {
        self.vcs = Some(vcs);
        self
    }

    /// Set the diagnostics provider.
    #[must_use]
    pub fn diagnostics(mut self, diagnostics: Box<dyn DiagnosticsSource>) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Set the icon lookup.
    #[must_use]
    pub fn icons(mut self, icons: Box<dyn IconSource>) -> Self {
        self.icons = Some(icons);
        self
    }

    /// The host editor.
    #[must_use]
    pub fn host(&self) -> &dyn Host {
        self.host.as_ref()
    }
}

impl std::fmt::Debug for Sources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sources")
            .field("vcs", &self.vcs.is_some())
            .field("diagnostics", &self.diagnostics.is_some())
            .field("icons", &self.icons.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Fake collaborators shared by the unit tests.

    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use anyhow::anyhow;

    use super::{
        BufferInfo, BufferKind, DiagnosticCounts, DiagnosticsSource, Host, IconSource, VcsSource,
        VcsStatus, WindowInfo,
    };

    pub(crate) fn window() -> WindowInfo {
        WindowInfo {
            width: 200,
            mode: "n".to_string(),
            line: 12,
            line_count: 340,
            virtual_column: 5,
            last_column: 42,
            cwd: PathBuf::from("/home/me/project"),
        }
    }

    pub(crate) fn buffer() -> BufferInfo {
        BufferInfo {
            kind: BufferKind::Normal,
            path: PathBuf::from("/home/me/project/src/main.rs"),
            modified: false,
            modifiable: true,
            readonly: false,
            spell_language: None,
            wrap: false,
            filetype: "rust".to_string(),
            encoding: "utf-8".to_string(),
            format: "unix".to_string(),
            size: Some(2048),
        }
    }

    pub(crate) struct FakeHost {
        pub(crate) window: WindowInfo,
        pub(crate) buffer: BufferInfo,
        pub(crate) refuse_display: bool,
        pub(crate) display_calls: Arc<AtomicUsize>,
    }

    impl Default for FakeHost {
        fn default() -> Self {
            Self {
                window: window(),
                buffer: buffer(),
                refuse_display: false,
                display_calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl Host for FakeHost {
        fn window(&self) -> anyhow::Result<WindowInfo> {
            Ok(self.window.clone())
        }

        fn buffer(&self) -> anyhow::Result<BufferInfo> {
            Ok(self.buffer.clone())
        }

        fn show_statusline_always(&self) -> anyhow::Result<()> {
            self.display_calls.fetch_add(1, Ordering::SeqCst);
            if self.refuse_display {
                Err(anyhow!("option is locked"))
            } else {
                Ok(())
            }
        }
    }

    pub(crate) struct FailingHost;

    impl Host for FailingHost {
        fn window(&self) -> anyhow::Result<WindowInfo> {
            Err(anyhow!("window is gone"))
        }

        fn buffer(&self) -> anyhow::Result<BufferInfo> {
            Err(anyhow!("buffer is gone"))
        }
    }

    pub(crate) enum FixedVcs {
        Status(VcsStatus),
        Untracked,
        Failing,
    }

    impl FixedVcs {
        pub(crate) fn branch(name: &str) -> Self {
            Self::Status(VcsStatus {
                branch: name.to_string(),
                summary: None,
            })
        }
    }

    impl VcsSource for FixedVcs {
        fn status(&self, _buffer: &BufferInfo) -> anyhow::Result<Option<VcsStatus>> {
            match self {
                Self::Status(status) => Ok(Some(status.clone())),
                Self::Untracked => Ok(None),
                Self::Failing => Err(anyhow!("git exited with status 128")),
            }
        }
    }

    pub(crate) enum FixedDiagnostics {
        Attached(DiagnosticCounts),
        Detached,
        Failing,
    }

    impl FixedDiagnostics {
        pub(crate) fn attached(counts: DiagnosticCounts) -> Self {
            Self::Attached(counts)
        }
    }

    impl DiagnosticsSource for FixedDiagnostics {
        fn counts(&self, _buffer: &BufferInfo) -> anyhow::Result<Option<DiagnosticCounts>> {
            match self {
                Self::Attached(counts) => Ok(Some(*counts)),
                Self::Detached => Ok(None),
                Self::Failing => Err(anyhow!("client crashed")),
            }
        }
    }

    pub(crate) struct FixedIcons(pub(crate) &'static str);

    impl IconSource for FixedIcons {
        fn icon(&self, _file_name: &str, _extension: &str) -> Option<String> {
            Some(self.0.to_string())
        }
    }
}
