//! # Modeline
//!
//! A status-line composition engine for modal editors.
//!
//! On every redraw the engine captures a snapshot of the editor (mode,
//! window width, diagnostics, version control, file metadata) and derives a
//! single line of text with inline highlight tags from it. Nothing is cached
//! between renders.
//!
//! ## Features
//!
//! - **Mode Registry**: total lookup from raw mode codes to labels and highlights
//! - **Section Providers**: mode, spell, wrap, version control, diagnostics,
//!   file name, file info and cursor location
//! - **Responsive Truncation**: per-section width thresholds
//! - **Section Combiner**: padding and highlight inheritance without stray tags
//! - **Ratatui Integration**: a widget drawing the tagged line
//!
//! ## Example
//!
//! ```no_run
//! use modeline::{BufferInfo, Host, Options, Sources, Statusline, WindowInfo};
//!
//! struct Editor;
//!
//! impl Host for Editor {
//!     fn window(&self) -> anyhow::Result<WindowInfo> {
//!         Ok(WindowInfo { width: 120, mode: "n".into(), ..Default::default() })
//!     }
//!
//!     fn buffer(&self) -> anyhow::Result<BufferInfo> {
//!         Ok(BufferInfo::default())
//!     }
//! }
//!
//! fn main() -> modeline::Result<()> {
//!     let options = Options::from_toml_str("[thresholds]\nfilename = 100")?;
//!     let statusline = Statusline::new(options, Sources::new(Box::new(Editor)))?;
//!
//!     // Once per redraw, for each window
//!     let active = statusline.render(true);
//!     let inactive = statusline.render(false);
//!     println!("{active}\n{inactive}");
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod combine;
mod config;
mod engine;
mod error;
mod highlight;
mod mode;
mod render;
pub mod sections;
mod sources;
mod truncate;
mod widget;

// Re-export public API
pub use combine::{combine, Entry, Section};
pub use config::Options;
pub use engine::Statusline;
pub use error::{Error, Result};
pub use highlight::{escape, tag, Highlight, HighlightClass, FLEX_GAP, TRUNCATION_POINT};
pub use mode::{describe, ModeDescriptor, CTRL_S, CTRL_V, UNKNOWN};
pub use render::{active_entries, inactive_entries, render_active, render_inactive, ContentBuilder};
pub use sources::{
    BufferInfo, BufferKind, DiagnosticCounts, DiagnosticsSource, Host, IconSource, RenderContext,
    Severity, Sources, VcsSource, VcsStatus, WindowInfo,
};
pub use truncate::{is_truncated, SectionKind, ThresholdConfig};
pub use widget::{StatuslineWidget, Theme, STATUSLINE_HEIGHT};
