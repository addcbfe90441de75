//! Browser desktop runtime: the window manager, its reducer, and the Leptos shell that renders
//! project windows, desktop icons, and the taskbar.

pub mod clock;
pub mod components;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError};
