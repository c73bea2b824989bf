//! Desktop UI composition: nav bar, desktop home, dock and the managed windows.

mod dock;
mod home;
mod hover;
mod navbar;
mod window;

use leptos::*;

pub use self::window::{make_window_adapter, ManagedWindow, WindowedComponent};
use self::{dock::Dock, home::Home, navbar::NavBar};

pub use crate::runtime_context::{use_window_store, DesktopProvider, WindowStore};
use crate::{
    model::WindowId,
    windows::{
        ContactWindow, FinderWindow, ImageWindow, PhotosWindow, ResumeWindow, SafariWindow,
        TerminalWindow, TextWindow,
    },
};

#[component]
/// Full desktop: triggers, home folders and one managed window per openable window id.
pub fn DesktopShell() -> impl IntoView {
    view! {
        <main class="desktop-shell">
            <NavBar />
            <Home />
            <Dock />
            {make_window_adapter(TerminalWindow, WindowId::Terminal)}
            {make_window_adapter(SafariWindow, WindowId::Safari)}
            {make_window_adapter(ResumeWindow, WindowId::Resume)}
            {make_window_adapter(FinderWindow, WindowId::Finder)}
            {make_window_adapter(TextWindow, WindowId::TxtFile)}
            {make_window_adapter(ImageWindow, WindowId::ImgFile)}
            {make_window_adapter(ContactWindow, WindowId::Contact)}
            {make_window_adapter(PhotosWindow, WindowId::Photos)}
        </main>
    }
}
