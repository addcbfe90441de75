use super::*;

#[component]
/// Root desktop surface. Pointer moves and releases anywhere on the desktop are reported here so
/// drags keep tracking when the pointer leaves the titlebar.
pub fn DesktopRoot(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_pointermove: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_pointerup: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("desktop-shell", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            on:click=move |ev| call_optional(on_click.as_ref(), ev)
            on:pointermove=move |ev| call_optional(on_pointermove.as_ref(), ev)
            on:pointerup=move |ev| call_optional(on_pointerup.as_ref(), ev)
            on:pointercancel=move |ev| call_optional(on_pointerup.as_ref(), ev)
        >
            {children()}
        </div>
    }
}

#[component]
/// Column of desktop launcher icons.
pub fn DesktopIconGrid(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-icons", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop launcher icon: a glyph above a label.
///
/// Clicks do not bubble to the desktop root, so a background click handler only sees clicks on
/// empty desktop.
pub fn DesktopIconButton(
    #[prop(into)] label: String,
    #[prop(optional, into)] glyph: Option<String>,
    #[prop(optional, into)] data_id: Option<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let glyph = glyph.unwrap_or_else(|| "\u{1F4C1}".to_string());
    view! {
        <button
            type="button"
            class="desktop-icon"
            title=label.clone()
            data-project-id=data_id
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                ev.stop_propagation();
                call_optional(on_click.as_ref(), ev);
            }
        >
            <span class="icon" aria-hidden="true">{glyph}</span>
            <span class="icon-text">{label}</span>
        </button>
    }
}

#[component]
/// Host layer for open windows.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}
