//! Shared Leptos primitives for the portfolio desktop shell.
//!
//! The crate owns the structural markup of the desktop (root, icon grid, window frame, titlebar,
//! taskbar) and its stable `data-ui-*` DOM contract. The runtime crate composes these primitives
//! and supplies state and callbacks; no window-management logic lives here.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Taskbar, TaskbarButton,
    TaskbarSection, TrayClock, WindowBody, WindowControlButton, WindowControlKind, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};
