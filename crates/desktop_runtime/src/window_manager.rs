//! Window-manager transition helpers used by the desktop reducer.

use crate::model::{DesktopState, WindowId, WindowRecord};

pub(crate) fn find_window_mut<'a>(
    state: &'a mut DesktopState,
    window_id: &WindowId,
) -> Option<&'a mut WindowRecord> {
    state.windows.iter_mut().find(|w| &w.id == window_id)
}

/// Shows, raises, and focuses `window_id`.
///
/// The window gets the next z-index, so it ends strictly above every other window. Returns
/// `false` when the window is not open.
pub fn focus_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let Some(window) = state.windows.iter_mut().find(|w| &w.id == window_id) else {
        return false;
    };
    state.z_counter = state.z_counter.saturating_add(1);
    window.minimized = false;
    window.z_index = state.z_counter;
    state.focused = Some(window_id.clone());
    true
}

/// Drops the focus pointer if it names `window_id`. Focus never moves to another window.
pub fn release_focus(state: &mut DesktopState, window_id: &WindowId) {
    if state.focused.as_ref() == Some(window_id) {
        state.focused = None;
    }
}

/// Removes `window_id` and returns its record.
pub fn remove_window(state: &mut DesktopState, window_id: &WindowId) -> Option<WindowRecord> {
    let index = state.windows.iter().position(|w| &w.id == window_id)?;
    let record = state.windows.remove(index);
    release_focus(state, window_id);
    Some(record)
}

/// Window currently drawn on top among visible windows.
pub fn topmost_visible_window(state: &DesktopState) -> Option<&WindowRecord> {
    state
        .windows
        .iter()
        .filter(|w| !w.minimized)
        .max_by_key(|w| w.z_index)
}
