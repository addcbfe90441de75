use super::*;
use system_ui::{
    WindowBody, WindowControlButton, WindowControlKind, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::model::WindowId;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let window = {
        let window_id = window_id.clone();
        Signal::derive(move || state.get().window(&window_id).cloned())
    };
    let active = {
        let window_id = window_id.clone();
        Signal::derive(move || state.get().is_active(&window_id))
    };
    let minimized = Signal::derive(move || window.get().map(|w| w.minimized).unwrap_or(false));
    let maximized = Signal::derive(move || window.get().map(|w| w.maximized).unwrap_or(false));
    let style = Signal::derive(move || {
        window
            .get()
            .map(|w| format!("{}z-index:{};", w.rect.css(), w.z_index))
            .unwrap_or_default()
    });
    let title = Signal::derive(move || window.get().map(|w| w.title).unwrap_or_default());

    let focus = {
        let window_id = window_id.clone();
        Callback::new(move |_: ev::MouseEvent| {
            if !active.get_untracked() {
                runtime.dispatch_action(DesktopAction::FocusWindow {
                    window_id: window_id.clone(),
                });
            }
        })
    };
    let minimize = {
        let window_id = window_id.clone();
        Callback::new(move |_: ev::MouseEvent| {
            runtime.dispatch_action(DesktopAction::MinimizeWindow {
                window_id: window_id.clone(),
            })
        })
    };
    let toggle_maximize = {
        let window_id = window_id.clone();
        Callback::new(move |_: ev::MouseEvent| {
            runtime.dispatch_action(DesktopAction::ToggleMaximize {
                window_id: window_id.clone(),
                viewport: host::desktop_viewport_rect(),
            })
        })
    };
    let close = {
        let window_id = window_id.clone();
        Callback::new(move |_: ev::MouseEvent| {
            runtime.dispatch_action(DesktopAction::CloseWindow {
                window_id: window_id.clone(),
            })
        })
    };
    let begin_move = {
        let window_id = window_id.clone();
        Callback::new(move |ev: web_sys::PointerEvent| {
            if ev.pointer_type() == "mouse" && ev.button() != 0 {
                return;
            }
            if ev.pointer_type() != "mouse" && !ev.is_primary() {
                return;
            }
            try_set_pointer_capture(&ev);
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::BeginMove {
                window_id: window_id.clone(),
                pointer: pointer_from_pointer_event(&ev),
            });
        })
    };

    // Rendered once; project content never changes while the window is open.
    let body_html = state
        .get_untracked()
        .window(&window_id)
        .map(|w| w.document.to_html())
        .unwrap_or_default();

    view! {
        <WindowFrame
            window_id=window_id.to_string()
            style=style
            aria_label=title
            active=active
            minimized=minimized
            maximized=maximized
            on_click=focus
        >
            <WindowTitleBar active=active on_pointerdown=begin_move on_dblclick=toggle_maximize>
                <WindowTitle text=title />
                <WindowControls>
                    <WindowControlButton kind=WindowControlKind::Minimize on_click=minimize />
                    <WindowControlButton
                        kind=WindowControlKind::Maximize
                        aria_label=Signal::derive(move || {
                            if maximized.get() {
                                "Restore window".to_string()
                            } else {
                                "Maximize window".to_string()
                            }
                        })
                        on_click=toggle_maximize
                    />
                    <WindowControlButton kind=WindowControlKind::Close on_click=close />
                </WindowControls>
            </WindowTitleBar>
            <WindowBody html=body_html />
        </WindowFrame>
    }
}
