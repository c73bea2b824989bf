use leptos::{ev::MouseEvent, *};

/// Tooltip anchor id shared by every dock button.
pub const DOCK_TOOLTIP_ID: &str = "dock-tooltip";
/// Delay before a dock tooltip appears.
pub const DOCK_TOOLTIP_DELAY_MS: u32 = 150;

fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

/// Resolves a dock icon file name to its public asset path.
pub fn dock_icon_src(icon: &str) -> String {
    format!("/images/{icon}")
}

#[component]
/// Window header strip holding controls and title content.
pub fn WindowHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("window-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-header"
        >
            {children()}
        </div>
    }
}

#[component]
/// Window title text.
pub fn WindowTitle(children: Children) -> impl IntoView {
    view! {
        <h2 data-ui-primitive="true" data-ui-kind="window-title">
            {children()}
        </h2>
    }
}

#[component]
/// Traffic-light window controls. Only the close control is interactive.
pub fn WindowControls(
    /// Runs when the close control is clicked.
    on_close: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <div
            class="window-controls"
            data-ui-primitive="true"
            data-ui-kind="window-controls"
        >
            <button
                type="button"
                class="close"
                aria-label="Close window"
                on:click=move |ev| on_close.call(ev)
            />
            <button type="button" class="minimize" aria-hidden="true" tabindex="-1" disabled=true />
            <button type="button" class="maximize" aria-hidden="true" tabindex="-1" disabled=true />
        </div>
    }
}

#[component]
/// Dock launcher button with tooltip metadata.
pub fn DockButton(
    #[prop(into)] label: String,
    #[prop(into)] icon: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    on_click: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="dock-icon"
            class:active=move || active.get()
            aria-label=label.clone()
            data-tooltip-id=DOCK_TOOLTIP_ID
            data-tooltip-content=label.clone()
            data-tooltip-delay-show=DOCK_TOOLTIP_DELAY_MS.to_string()
            data-ui-primitive="true"
            data-ui-kind="dock-button"
            disabled=move || disabled.get()
            on:click=move |ev| on_click.call(ev)
        >
            <img
                src=dock_icon_src(&icon)
                alt=label
                loading="lazy"
                class=move || if disabled.get() { "opacity-60" } else { "" }
            />
        </button>
    }
}

#[component]
/// Empty content placeholder.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {children()}
        </div>
    }
}
