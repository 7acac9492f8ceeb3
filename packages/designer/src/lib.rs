//! # Pagecraft Designer
//!
//! The editor screen around the component store: palette, canvas drop
//! target, page settings panel, device switcher and the preview page.
//! Views are produced as virtual nodes and serialized by the renderer.

pub mod canvas;
pub mod layout;
pub mod palette;
pub mod preview;
pub mod settings;
pub mod shell;

pub use canvas::Canvas;
pub use palette::{PaletteItem, PALETTE};
pub use preview::{preview_html, render_preview};
pub use settings::SettingsField;
pub use shell::{EditorShell, ShellError, ShellEvent, ShellUpdate};
