//! Window bodies.
//!
//! Each body renders content only; [`crate::components::ManagedWindow`] owns visibility,
//! stacking and drag. Bodies that show a payload read it from the store.

mod contact;
mod finder;
mod image;
mod photos;
mod resume;
mod safari;
mod terminal;
mod text;

use leptos::{ev::MouseEvent, *};
use system_ui::{EmptyState, WindowControls, WindowHeader, WindowTitle};

pub use self::{
    contact::ContactWindow, finder::FinderWindow, image::ImageWindow, photos::PhotosWindow,
    resume::ResumeWindow, safari::SafariWindow, terminal::TerminalWindow, text::TextWindow,
};
use crate::{
    model::{WindowId, WindowPayload},
    registry::WindowRegistry,
    runtime_context::{use_window_store, WindowStore},
};

fn close_handler(store: WindowStore, window_id: WindowId) -> Callback<MouseEvent> {
    Callback::new(move |_| store.close_window(window_id))
}

/// Title shown in a window header: the payload name, or the registry title when there is none.
fn header_title(registry: &WindowRegistry, window_id: WindowId, name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => registry.title(window_id).to_string(),
    }
}

/// Header with a working close control over an empty body, for windows opened without a payload.
#[component]
fn EmptyWindow(window_id: WindowId) -> impl IntoView {
    let store = use_window_store();
    let title = header_title(&store.registry(), window_id, None);

    view! {
        <div class="flex flex-col h-full bg-white">
            <WindowHeader>
                <WindowControls on_close=close_handler(store, window_id) />
                <WindowTitle>{title}</WindowTitle>
            </WindowHeader>
            <EmptyState>"Nothing to show"</EmptyState>
        </div>
    }
}
