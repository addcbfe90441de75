use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio Desktop" />
        <Meta name="description" content="Project write-ups presented as a retro desktop." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/projects/:id" view=ProjectDesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}

/// Desktop with one project already open, for shareable project links.
#[component]
fn ProjectDesktopEntry() -> impl IntoView {
    let params = use_params_map();
    let project_id = params.with_untracked(|map| map.get("id").cloned());

    match project_id {
        Some(project_id) => view! {
            <DesktopProvider open_on_boot=project_id>
                <DesktopShell />
            </DesktopProvider>
        }
        .into_view(),
        None => view! { <DesktopEntry /> }.into_view(),
    }
}
