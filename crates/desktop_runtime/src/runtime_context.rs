//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived window-manager state signal, the pointer interaction signal,
//! and the project catalog. UI composition stays in [`crate::components`].

use leptos::*;
use portfolio_content::{load_catalog, Project};

use crate::{
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive window-manager state.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state.
    pub interaction: RwSignal<InteractionState>,
    /// Projects shown as desktop icons, in catalog order.
    pub projects: StoredValue<Vec<Project>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Opens (or focuses) the window for `project_id`.
    ///
    /// Returns `false` when no catalog project has that id.
    pub fn open_project(&self, project_id: &str) -> bool {
        let project = self
            .projects
            .with_value(|projects| projects.iter().find(|p| p.id == project_id).cloned());
        match project {
            Some(project) => {
                self.dispatch_action(DesktopAction::OpenProject(project));
                true
            }
            None => false,
        }
    }
}

fn load_projects() -> Vec<Project> {
    logging::log!("loading project catalog");
    match load_catalog() {
        Ok(projects) => {
            logging::log!("loaded {} projects", projects.len());
            projects
        }
        Err(err) => {
            logging::warn!("project catalog load failed: {err}");
            Vec::new()
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and loads the project catalog.
pub fn DesktopProvider(
    /// Project to open once the desktop is ready (for `/projects/:id` links).
    #[prop(optional, into)]
    open_on_boot: Option<String>,
    children: Children,
) -> impl IntoView {
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let projects = store_value(load_projects());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(()) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
            }
            Err(err) => logging::debug_warn!("desktop action ignored: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        state,
        interaction,
        projects,
        dispatch,
    };

    provide_context(runtime);

    if let Some(project_id) = open_on_boot {
        if !runtime.open_project(&project_id) {
            logging::warn!("no project `{project_id}` to open");
        }
    }

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
