use super::*;

#[component]
/// Outer window surface.
///
/// Visibility follows `minimized`; geometry and stacking come from the caller's `style`.
pub fn WindowFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] window_id: Option<String>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] minimized: MaybeSignal<bool>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let base = merge_layout_class("window", layout_class);
    view! {
        <section
            class=move || {
                let mut class = base.clone();
                if active.get() {
                    class.push_str(" active");
                }
                if maximized.get() {
                    class.push_str(" maximized");
                }
                class
            }
            style=move || {
                let display = if minimized.get() { "none" } else { "flex" };
                format!("{}display:{display};", style.get())
            }
            data-window-id=window_id
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-active=move || bool_token(active.get())
            data-ui-minimized=move || bool_token(minimized.get())
            data-ui-maximized=move || bool_token(maximized.get())
            on:click=move |ev| call_optional(on_click.as_ref(), ev)
        >
            {children()}
        </section>
    }
}

#[component]
/// Window header and drag handle.
pub fn WindowTitleBar(
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=move || {
                if active.get() {
                    "window-header active"
                } else {
                    "window-header inactive"
                }
            }
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| call_optional(on_pointerdown.as_ref(), ev)
            on:dblclick=move |ev| call_optional(on_dblclick.as_ref(), ev)
        >
            {children()}
        </header>
    }
}

#[component]
/// Title text inside the titlebar.
pub fn WindowTitle(#[prop(into)] text: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div class="window-title" data-ui-primitive="true" data-ui-kind="window-title">
            {move || text.get()}
        </div>
    }
}

#[component]
/// Row of titlebar controls.
pub fn WindowControls(children: Children) -> impl IntoView {
    view! {
        <div class="window-controls" data-ui-primitive="true" data-ui-kind="window-controls">
            {children()}
        </div>
    }
}

#[component]
/// Titlebar control button.
///
/// Pointer-down, mouse-down and double-click never reach the titlebar, so pressing a control
/// cannot start a drag or toggle maximize, and the click itself does not bubble into the frame's
/// focus handler.
pub fn WindowControlButton(
    kind: WindowControlKind,
    #[prop(optional, into)] aria_label: Option<MaybeSignal<String>>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let aria_label =
        aria_label.unwrap_or_else(|| MaybeSignal::Static(kind.default_label().to_string()));
    view! {
        <button
            type="button"
            class=format!("window-control {}", kind.token())
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-control"
            data-ui-slot=kind.token()
            on:pointerdown=move |ev: web_sys::PointerEvent| {
                ev.prevent_default();
                ev.stop_propagation();
            }
            on:mousedown=move |ev| stop_mouse_event(&ev)
            on:dblclick=move |ev| stop_mouse_event(&ev)
            on:click=move |ev| {
                stop_mouse_event(&ev);
                call_optional(on_click.as_ref(), ev);
            }
        ></button>
    }
}

#[component]
/// Scrollable window content area filled with prerendered markup.
pub fn WindowBody(#[prop(into)] html: String) -> impl IntoView {
    view! {
        <div
            class="window-content"
            data-ui-primitive="true"
            data-ui-kind="window-body"
            inner_html=html
        ></div>
    }
}
