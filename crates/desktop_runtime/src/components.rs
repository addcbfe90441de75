//! Desktop shell UI composition and interaction surfaces.

mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;
use system_ui::{DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer};

use self::{taskbar::DesktopTaskbar, window::DesktopWindow};

use crate::{
    clock::{format_clock_time, ClockSnapshot},
    host,
    model::PointerPosition,
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const CLOCK_REFRESH: Duration = Duration::from_secs(1);

#[component]
/// Renders the desktop: project icons, open windows, and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let selected_icon = create_rw_signal(None::<String>);

    let on_pointer_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().drag.is_dragging() {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    });
    let on_pointer_end = Callback::new(move |_: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().drag.is_dragging() {
            runtime.dispatch_action(DesktopAction::EndMove);
        }
    });

    view! {
        <DesktopRoot
            id="desktop-shell-root"
            layout_class="winxp-desktop"
            on_click=Callback::new(move |ev: ev::MouseEvent| {
                if ev.target() == ev.current_target() {
                    selected_icon.set(None);
                }
            })
            on_pointermove=on_pointer_move
            on_pointerup=on_pointer_end
        >
            <DesktopIconGrid>
                <For
                    each=move || runtime.projects.get_value()
                    key=|project| project.id.clone()
                    let:project
                >
                    {{
                        let project_id = project.id.clone();
                        let selected_id = project.id.clone();
                        view! {
                            <DesktopIconButton
                                label=project.name.clone()
                                data_id=project.id.clone()
                                selected=Signal::derive(move || {
                                    selected_icon.get().as_deref() == Some(selected_id.as_str())
                                })
                                on_click=Callback::new(move |_| {
                                    selected_icon.set(Some(project_id.clone()));
                                    runtime.open_project(&project_id);
                                })
                            />
                        }
                    }}
                </For>
            </DesktopIconGrid>

            <DesktopWindowLayer>
                <For
                    each=move || state.get().windows
                    key=|win| win.id.clone()
                    let:win
                >
                    <DesktopWindow window_id=win.id />
                </For>
            </DesktopWindowLayer>

            <DesktopTaskbar />
        </DesktopRoot>
    }
}

/// Clock text that refreshes every second for as long as the calling component lives.
fn use_clock_text() -> Signal<String> {
    let now = create_rw_signal(ClockSnapshot::now());
    if let Ok(interval) = set_interval_with_handle(move || now.set(ClockSnapshot::now()), CLOCK_REFRESH)
    {
        on_cleanup(move || interval.clear());
    }
    Signal::derive(move || format_clock_time(now.get()))
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}
