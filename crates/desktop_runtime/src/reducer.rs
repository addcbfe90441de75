//! Reducer actions and transition logic for the desktop window manager.

use std::rc::Rc;

use portfolio_content::{render_project, Project};
use thiserror::Error;

use crate::model::{
    DesktopState, DragSession, DragState, InteractionState, PointerPosition, WindowId,
    WindowRecord, WindowRect,
};
use crate::window_manager::{find_window_mut, focus_window, release_focus, remove_window};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open the window for a project, or focus it if it is already open.
    OpenProject(Project),
    /// Raise and focus a window.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Close a window and drop its taskbar entry.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Hide a window, keeping its state and taskbar entry.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Show a minimized window again and focus it.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Toggle between maximized bounds and the fixed restored bounds.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
        /// Full browser viewport.
        viewport: WindowRect,
    },
    /// Taskbar click: restore a minimized window, otherwise focus it.
    ActivateTaskbarEntry {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Begin dragging a window by its titlebar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress drag. Ignored when no drag is active.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active drag.
    EndMove,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors. The state is left untouched whenever one is returned.
pub enum ReducerError {
    /// The target window is not open. Expected for stale or duplicated UI events.
    #[error("window `{0}` not found")]
    WindowNotFound(WindowId),
}

/// Applies a [`DesktopAction`] to the desktop state.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action targets a window that is not open.
/// No state is changed in that case, so callers can treat the error as a no-op.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<(), ReducerError> {
    match action {
        DesktopAction::OpenProject(project) => {
            let window_id = WindowId::for_project(&project.id);
            if state.window(&window_id).is_none() {
                let rect = state.layout.cascade_rect(state.windows.len());
                state.windows.push(WindowRecord {
                    id: window_id.clone(),
                    project_id: project.id.clone(),
                    title: project.name.clone(),
                    document: Rc::new(render_project(&project)),
                    rect,
                    z_index: 0,
                    minimized: false,
                    maximized: false,
                });
            }
            focus_window(state, &window_id);
        }
        DesktopAction::FocusWindow { window_id } => {
            if !focus_window(state, &window_id) {
                return Err(ReducerError::WindowNotFound(window_id));
            }
        }
        DesktopAction::CloseWindow { window_id } => {
            if remove_window(state, &window_id).is_none() {
                return Err(ReducerError::WindowNotFound(window_id));
            }
            if matches!(&interaction.drag, DragState::Dragging(session) if session.window_id == window_id)
            {
                interaction.drag = DragState::Idle;
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            let window = find_window_mut(state, &window_id)
                .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))?;
            window.minimized = true;
            release_focus(state, &window_id);
        }
        DesktopAction::RestoreWindow { window_id } => {
            if !focus_window(state, &window_id) {
                return Err(ReducerError::WindowNotFound(window_id));
            }
        }
        DesktopAction::ToggleMaximize {
            window_id,
            viewport,
        } => {
            let restored = state.layout.restored_rect;
            let maximized = state.layout.maximized_rect(viewport);
            let window = find_window_mut(state, &window_id)
                .ok_or(ReducerError::WindowNotFound(window_id))?;
            if window.maximized {
                window.rect = restored;
                window.maximized = false;
            } else {
                window.rect = maximized;
                window.maximized = true;
            }
        }
        DesktopAction::ActivateTaskbarEntry { window_id } => {
            let minimized = state
                .window(&window_id)
                .map(|w| w.minimized)
                .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))?;
            let next = if minimized {
                DesktopAction::RestoreWindow { window_id }
            } else {
                DesktopAction::FocusWindow { window_id }
            };
            reduce_desktop(state, interaction, next)?;
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let rect_start = state
                .window(&window_id)
                .map(|w| w.rect)
                .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))?;
            interaction.drag = DragState::Dragging(DragSession {
                window_id,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            let DragState::Dragging(session) = &interaction.drag else {
                return Ok(());
            };
            let dx = pointer.x - session.pointer_start.x;
            let dy = pointer.y - session.pointer_start.y;
            let rect = session.rect_start.offset(dx, dy);
            let window_id = session.window_id.clone();
            match find_window_mut(state, &window_id) {
                Some(window) => window.rect = rect,
                None => interaction.drag = DragState::Idle,
            }
        }
        DesktopAction::EndMove => {
            interaction.drag = DragState::Idle;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::window_manager::topmost_visible_window;

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1440,
        h: 900,
    };

    fn project(id: &str) -> Project {
        Project::new(id, &format!("Project {id}"), &format!("Title {id}"), "# Heading\nbody")
    }

    fn apply(state: &mut DesktopState, interaction: &mut InteractionState, action: DesktopAction) {
        reduce_desktop(state, interaction, action).expect("action applies");
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, id: &str) -> WindowId {
        apply(state, interaction, DesktopAction::OpenProject(project(id)));
        WindowId::for_project(id)
    }

    fn record<'a>(state: &'a DesktopState, window_id: &WindowId) -> &'a WindowRecord {
        state.window(window_id).expect("window open")
    }

    #[test]
    fn open_renders_content_and_focuses_new_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");

        let win = record(&state, &a);
        assert_eq!(a.as_str(), "project-a");
        assert_eq!(win.title, "Project a");
        assert_eq!(win.document.header.title, "Title a");
        assert_eq!(win.document.body_html, "<h1>Heading</h1><p>body</p>");
        assert_eq!(win.rect, WindowRect { x: 50, y: 50, w: 900, h: 700 });
        assert_eq!(state.focused_window_id(), Some(&a));
        assert_eq!(state.taskbar_entries().len(), 1);
    }

    #[test]
    fn new_windows_cascade() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, "a");
        let b = open(&mut state, &mut interaction, "b");
        let c = open(&mut state, &mut interaction, "c");

        assert_eq!((record(&state, &b).rect.x, record(&state, &b).rect.y), (80, 80));
        assert_eq!((record(&state, &c).rect.x, record(&state, &c).rect.y), (110, 110));
    }

    #[test]
    fn opening_same_project_twice_focuses_the_existing_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");
        open(&mut state, &mut interaction, "b");
        let again = open(&mut state, &mut interaction, "a");

        assert_eq!(again, a);
        assert_eq!(state.windows.iter().filter(|w| w.id == a).count(), 1);
        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.focused_window_id(), Some(&a));
        assert_eq!(topmost_visible_window(&state).map(|w| &w.id), Some(&a));
    }

    #[test]
    fn reopening_a_minimized_project_shows_it() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");
        apply(&mut state, &mut interaction, DesktopAction::MinimizeWindow { window_id: a.clone() });
        open(&mut state, &mut interaction, "a");

        assert!(!record(&state, &a).minimized);
        assert!(state.is_active(&a));
    }

    #[test]
    fn focus_raises_strictly_above_every_other_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");
        let b = open(&mut state, &mut interaction, "b");
        let c = open(&mut state, &mut interaction, "c");

        apply(&mut state, &mut interaction, DesktopAction::FocusWindow { window_id: a.clone() });

        let top = record(&state, &a).z_index;
        assert!(top > record(&state, &b).z_index);
        assert!(top > record(&state, &c).z_index);
        assert!(state.is_active(&a));
        assert!(!state.is_active(&b));
        let active: Vec<_> = state
            .taskbar_entries()
            .into_iter()
            .filter(|entry| entry.active)
            .map(|entry| entry.window_id)
            .collect();
        assert_eq!(active, vec![a]);
    }

    #[test]
    fn closing_unfocused_window_keeps_focus() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");
        let b = open(&mut state, &mut interaction, "b");
        apply(&mut state, &mut interaction, DesktopAction::FocusWindow { window_id: a.clone() });
        apply(&mut state, &mut interaction, DesktopAction::CloseWindow { window_id: b.clone() });

        assert_eq!(state.windows.len(), 1);
        assert!(state.window(&b).is_none());
        assert_eq!(state.focused_window_id(), Some(&a));
        assert_eq!(state.taskbar_entries().len(), 1);
    }

    #[test]
    fn closing_focused_window_clears_focus_without_refocusing() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");
        let b = open(&mut state, &mut interaction, "b");
        apply(&mut state, &mut interaction, DesktopAction::CloseWindow { window_id: b });

        assert_eq!(state.focused_window_id(), None);
        assert!(!state.is_active(&a));
        assert_eq!(state.windows.len(), 1);
    }

    #[test]
    fn minimize_clears_focus_and_restore_refocuses() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");
        let z_before = record(&state, &a).z_index;
        apply(&mut state, &mut interaction, DesktopAction::MinimizeWindow { window_id: a.clone() });

        assert!(record(&state, &a).minimized);
        assert_eq!(state.focused_window_id(), None);
        assert!(!state.taskbar_entries()[0].active);
        assert!(state.taskbar_entries()[0].minimized);

        apply(&mut state, &mut interaction, DesktopAction::RestoreWindow { window_id: a.clone() });

        assert!(!record(&state, &a).minimized);
        assert_eq!(state.focused_window_id(), Some(&a));
        assert!(record(&state, &a).z_index > z_before);
    }

    #[test]
    fn minimizing_an_unfocused_window_leaves_focus_alone() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");
        let b = open(&mut state, &mut interaction, "b");
        apply(&mut state, &mut interaction, DesktopAction::MinimizeWindow { window_id: a });

        assert_eq!(state.focused_window_id(), Some(&b));
    }

    #[test]
    fn taskbar_entry_restores_minimized_or_focuses_visible() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");
        let b = open(&mut state, &mut interaction, "b");
        apply(&mut state, &mut interaction, DesktopAction::MinimizeWindow { window_id: a.clone() });

        apply(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateTaskbarEntry { window_id: a.clone() },
        );
        assert!(!record(&state, &a).minimized);
        assert!(state.is_active(&a));

        apply(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateTaskbarEntry { window_id: b.clone() },
        );
        assert!(state.is_active(&b));
        assert!(record(&state, &b).z_index > record(&state, &a).z_index);
    }

    #[test]
    fn taskbar_entries_track_focus_and_minimize_flags() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");
        let b = open(&mut state, &mut interaction, "b");
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: a.clone() },
        );

        let flags: Vec<_> = state
            .taskbar_entries()
            .into_iter()
            .map(|entry| (entry.window_id, entry.active, entry.minimized))
            .collect();
        assert_eq!(flags, vec![(a, false, true), (b, true, false)]);
    }

    #[test]
    fn maximize_toggle_snaps_back_to_fixed_bounds() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");
        let opened_at = record(&state, &a).rect;
        let toggle = DesktopAction::ToggleMaximize {
            window_id: a.clone(),
            viewport: VIEWPORT,
        };

        apply(&mut state, &mut interaction, toggle.clone());
        assert!(record(&state, &a).maximized);
        assert_eq!(
            record(&state, &a).rect,
            WindowRect { x: 0, y: 0, w: 1436, h: 866 }
        );

        apply(&mut state, &mut interaction, toggle);
        assert!(!record(&state, &a).maximized);
        assert_eq!(
            record(&state, &a).rect,
            WindowRect { x: 100, y: 50, w: 600, h: 450 }
        );
        assert_ne!(record(&state, &a).rect, opened_at);
    }

    #[test]
    fn minimized_maximized_window_restores_maximized() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: a.clone(),
                viewport: VIEWPORT,
            },
        );
        apply(&mut state, &mut interaction, DesktopAction::MinimizeWindow { window_id: a.clone() });
        assert_eq!(record(&state, &a).mode(), crate::model::WindowMode::Minimized);

        apply(&mut state, &mut interaction, DesktopAction::RestoreWindow { window_id: a.clone() });
        assert_eq!(record(&state, &a).mode(), crate::model::WindowMode::Maximized);
        assert_eq!(record(&state, &a).rect.w, 1436);
    }

    #[test]
    fn unknown_window_actions_are_rejected_without_side_effects() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");
        apply(&mut state, &mut interaction, DesktopAction::CloseWindow { window_id: a.clone() });
        let before = state.clone();

        let ghost = WindowId::for_project("ghost");
        for action in [
            DesktopAction::FocusWindow { window_id: ghost.clone() },
            DesktopAction::CloseWindow { window_id: a.clone() },
            DesktopAction::MinimizeWindow { window_id: ghost.clone() },
            DesktopAction::RestoreWindow { window_id: ghost.clone() },
            DesktopAction::ToggleMaximize {
                window_id: ghost.clone(),
                viewport: VIEWPORT,
            },
            DesktopAction::ActivateTaskbarEntry { window_id: ghost.clone() },
            DesktopAction::BeginMove {
                window_id: ghost.clone(),
                pointer: PointerPosition { x: 0, y: 0 },
            },
        ] {
            let err = reduce_desktop(&mut state, &mut interaction, action).unwrap_err();
            assert!(matches!(err, ReducerError::WindowNotFound(_)));
            assert_eq!(state, before);
            assert_eq!(interaction, InteractionState::default());
        }
    }

    #[test]
    fn drag_moves_by_cumulative_delta_without_restacking() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");
        let b = open(&mut state, &mut interaction, "b");
        let z_a = record(&state, &a).z_index;
        let start = record(&state, &a).rect;

        apply(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: a.clone(),
                pointer: PointerPosition { x: 200, y: 60 },
            },
        );
        assert!(interaction.drag.is_dragging());
        for (x, y) in [(210, 70), (250, 20)] {
            apply(
                &mut state,
                &mut interaction,
                DesktopAction::UpdateMove {
                    pointer: PointerPosition { x, y },
                },
            );
        }

        let moved = record(&state, &a).rect;
        assert_eq!((moved.x, moved.y), (start.x + 50, start.y - 40));
        assert_eq!((moved.w, moved.h), (start.w, start.h));
        assert_eq!(record(&state, &a).z_index, z_a);
        assert_eq!(state.focused_window_id(), Some(&b));

        apply(&mut state, &mut interaction, DesktopAction::EndMove);
        assert_eq!(interaction.drag, DragState::Idle);
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");
        let before = state.clone();
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 999, y: 999 },
            },
        );

        assert_eq!(state, before);
        assert_eq!(record(&state, &a).rect, before.window(&a).unwrap().rect);
    }

    #[test]
    fn closing_the_dragged_window_ends_the_drag() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: a.clone(),
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        apply(&mut state, &mut interaction, DesktopAction::CloseWindow { window_id: a });

        assert_eq!(interaction.drag, DragState::Idle);
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 5, y: 5 },
            },
        );
        assert!(state.windows.is_empty());
    }
}
