use super::*;
use system_ui::{Taskbar, TaskbarButton, TaskbarSection, TrayClock};

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_text = use_clock_text();

    view! {
        <Taskbar>
            <TaskbarSection ui_slot="windows">
                <For
                    each=move || state.get().taskbar_entries()
                    key=|entry| entry.clone()
                    let:entry
                >
                    {{
                        let window_id = entry.window_id.clone();
                        view! {
                            <TaskbarButton
                                label=entry.title.clone()
                                window_id=window_id.to_string()
                                active=entry.active
                                minimized=entry.minimized
                                on_click=Callback::new(move |_: ev::MouseEvent| {
                                    runtime.dispatch_action(DesktopAction::ActivateTaskbarEntry {
                                        window_id: window_id.clone(),
                                    });
                                })
                            />
                        }
                    }}
                </For>
            </TaskbarSection>
            <TaskbarSection ui_slot="tray">
                <TrayClock text=clock_text />
            </TaskbarSection>
        </Taskbar>
    }
}
