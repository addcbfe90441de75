//! Desktop, window, and taskbar primitives.

use leptos::ev::MouseEvent;
use leptos::*;

mod desktop;
mod taskbar;
mod window;

pub use desktop::{DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer};
pub use taskbar::{Taskbar, TaskbarButton, TaskbarSection, TrayClock};
pub use window::{
    WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Titlebar control kinds, in the order they are laid out.
pub enum WindowControlKind {
    /// Hide the window to the taskbar.
    Minimize,
    /// Toggle between maximized and restored bounds.
    Maximize,
    /// Close the window.
    Close,
}

impl WindowControlKind {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
            Self::Close => "close",
        }
    }

    pub(crate) fn default_label(self) -> &'static str {
        match self {
            Self::Minimize => "Minimize window",
            Self::Maximize => "Maximize window",
            Self::Close => "Close window",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn call_optional<T: 'static>(callback: Option<&Callback<T>>, value: T) {
    if let Some(callback) = callback {
        callback.call(value);
    }
}

pub(crate) fn stop_mouse_event(ev: &MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}
