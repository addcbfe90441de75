use super::*;

#[component]
/// Taskbar pinned to the bottom of the desktop.
pub fn Taskbar(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("taskbar", layout_class)
            role="toolbar"
            aria-label="Taskbar"
            data-ui-primitive="true"
            data-ui-kind="taskbar"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Named taskbar region (`windows`, `tray`).
pub fn TaskbarSection(
    ui_slot: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let base = match ui_slot {
        "windows" => "taskbar-windows",
        "tray" => "system-tray",
        _ => "taskbar-section",
    };
    view! {
        <div
            class=merge_layout_class(base, layout_class)
            data-ui-primitive="true"
            data-ui-kind="taskbar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Taskbar entry mirroring one open window.
pub fn TaskbarButton(
    #[prop(into)] label: MaybeSignal<String>,
    #[prop(optional, into)] window_id: Option<String>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] minimized: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || {
                if active.get() {
                    "taskbar-window active"
                } else {
                    "taskbar-window"
                }
            }
            data-window-id=window_id
            aria-pressed=move || bool_token(active.get())
            data-ui-primitive="true"
            data-ui-kind="taskbar-button"
            data-ui-minimized=move || bool_token(minimized.get())
            on:click=move |ev| {
                ev.stop_propagation();
                call_optional(on_click.as_ref(), ev);
            }
        >
            <span class="taskbar-icon" aria-hidden="true">"\u{1F4C1}"</span>
            <span class="taskbar-text">{move || label.get()}</span>
        </button>
    }
}

#[component]
/// Read-only clock readout in the tray.
pub fn TrayClock(#[prop(into)] text: Signal<String>) -> impl IntoView {
    view! {
        <div
            class="time"
            id="time-display"
            role="timer"
            data-ui-primitive="true"
            data-ui-kind="tray-clock"
        >
            {move || text.get()}
        </div>
    }
}
