//! Desktop state model: window records, layout configuration, and pointer interaction state.

use std::fmt;
use std::rc::Rc;

use portfolio_content::ProjectDocument;

/// Taskbar height in CSS pixels.
pub const TASKBAR_HEIGHT_PX: i32 = 30;
/// Width of the window frame border on each axis.
pub const WINDOW_BORDER_PX: i32 = 4;

/// Window identifier derived from the project it shows, so each project has at most one window.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub String);

impl WindowId {
    /// Returns the window id for `project_id` (`project-<id>`).
    pub fn for_project(project_id: &str) -> Self {
        Self(format!("project-{project_id}"))
    }

    /// Borrows the id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Inline CSS for absolute placement.
    pub fn css(self) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;",
            self.x, self.y, self.w, self.h
        )
    }
}

/// Geometry and stacking constants for managed windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowLayoutConfig {
    /// Top-left offset of the first window on both axes.
    pub cascade_origin: i32,
    /// Additional offset per already-open window.
    pub cascade_step: i32,
    pub default_width: i32,
    pub default_height: i32,
    /// Bounds applied when leaving the maximized state. Pre-maximize bounds are not kept.
    pub restored_rect: WindowRect,
    pub frame_border_px: i32,
    pub taskbar_height_px: i32,
    /// Counter value before the first window is stacked.
    pub initial_z_index: u32,
}

impl Default for WindowLayoutConfig {
    fn default() -> Self {
        Self {
            cascade_origin: 50,
            cascade_step: 30,
            default_width: 900,
            default_height: 700,
            restored_rect: WindowRect {
                x: 100,
                y: 50,
                w: 600,
                h: 450,
            },
            frame_border_px: WINDOW_BORDER_PX,
            taskbar_height_px: TASKBAR_HEIGHT_PX,
            initial_z_index: 100,
        }
    }
}

impl WindowLayoutConfig {
    /// Staircase placement for a new window given how many are already open.
    pub fn cascade_rect(&self, open_count: usize) -> WindowRect {
        let offset = self.cascade_origin + open_count as i32 * self.cascade_step;
        WindowRect {
            x: offset,
            y: offset,
            w: self.default_width,
            h: self.default_height,
        }
    }

    /// Bounds that fill `viewport` minus the frame border and the taskbar.
    pub fn maximized_rect(&self, viewport: WindowRect) -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: (viewport.w - self.frame_border_px).max(0),
            h: (viewport.h - self.taskbar_height_px - self.frame_border_px).max(0),
        }
    }
}

/// Visible state of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    Normal,
    Minimized,
    Maximized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub project_id: String,
    pub title: String,
    /// Content rendered once when the window opened.
    pub document: Rc<ProjectDocument>,
    pub rect: WindowRect,
    pub z_index: u32,
    pub minimized: bool,
    /// Kept while minimized so the window comes back maximized.
    pub maximized: bool,
}

impl WindowRecord {
    pub fn mode(&self) -> WindowMode {
        if self.minimized {
            WindowMode::Minimized
        } else if self.maximized {
            WindowMode::Maximized
        } else {
            WindowMode::Normal
        }
    }
}

/// Taskbar button model, derived from a [`WindowRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub title: String,
    pub active: bool,
    pub minimized: bool,
}

/// Window-manager state: open windows in opening order, the stacking counter, and the focus
/// pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    /// Last z-index handed out. Only grows.
    pub z_counter: u32,
    pub focused: Option<WindowId>,
    pub layout: WindowLayoutConfig,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::with_layout(WindowLayoutConfig::default())
    }
}

impl DesktopState {
    pub fn with_layout(layout: WindowLayoutConfig) -> Self {
        Self {
            windows: Vec::new(),
            z_counter: layout.initial_z_index,
            focused: None,
            layout,
        }
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn focused_window_id(&self) -> Option<&WindowId> {
        self.focused.as_ref()
    }

    pub fn is_active(&self, window_id: &WindowId) -> bool {
        self.focused.as_ref() == Some(window_id)
    }

    /// One entry per open window, in opening order.
    pub fn taskbar_entries(&self) -> Vec<TaskbarEntry> {
        self.windows
            .iter()
            .map(|w| TaskbarEntry {
                window_id: w.id.clone(),
                title: w.title.clone(),
                active: self.is_active(&w.id),
                minimized: w.minimized,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

/// Titlebar drag state machine: `Idle -> Dragging -> Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub drag: DragState,
}
