//! Window store context.
//!
//! [`DesktopProvider`] creates exactly one [`WindowStore`] per app instance and provides it to
//! every trigger and managed window below it. All writes go through [`reduce_desktop`]; rejected
//! actions are logged here and never reach render paths.

use leptos::*;

use crate::{
    host::DesktopHostContext,
    model::{DesktopState, WindowDescriptor, WindowId, WindowPayload},
    reducer::{reduce_desktop, DesktopAction},
    registry::{RegistryError, WindowRegistry},
};

#[derive(Clone, Copy)]
/// Leptos context handle for reading window descriptors and dispatching [`DesktopAction`] values.
pub struct WindowStore {
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Registry the store validates against.
    pub registry: StoredValue<WindowRegistry>,
    /// Collaborators handed to window adapters.
    pub host: StoredValue<DesktopHostContext>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl WindowStore {
    /// Creates a store owned by the current reactive owner. Every window starts closed.
    pub fn new(registry: WindowRegistry, host: DesktopHostContext) -> Self {
        let state = create_rw_signal(DesktopState::default());
        let registry = store_value(registry);
        let host = store_value(host);

        let dispatch = Callback::new(move |action: DesktopAction| {
            let mut desktop = state.get_untracked();
            let previous = desktop.clone();

            let result =
                registry.with_value(|registry| reduce_desktop(&mut desktop, registry, action));
            match result {
                Ok(()) => {
                    if desktop != previous {
                        state.set(desktop);
                    }
                }
                Err(err) => logging::warn!("window store rejected action: {err}"),
            }
        });

        Self {
            state,
            registry,
            host,
            dispatch,
        }
    }

    /// Dispatches a reducer action through the store callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Opens and raises `window_id`, replacing its payload when one is given.
    pub fn open_window(&self, window_id: WindowId, payload: Option<WindowPayload>) {
        self.dispatch_action(DesktopAction::OpenWindow { window_id, payload });
    }

    /// Closes `window_id`, keeping its payload.
    pub fn close_window(&self, window_id: WindowId) {
        self.dispatch_action(DesktopAction::CloseWindow { window_id });
    }

    /// Raises `window_id` above every other window.
    pub fn focus_window(&self, window_id: WindowId) {
        self.dispatch_action(DesktopAction::FocusWindow { window_id });
    }

    /// Dock toggle for `window_id`.
    pub fn toggle_app(&self, window_id: WindowId) {
        self.dispatch_action(DesktopAction::ToggleApp { window_id });
    }

    /// Reactive view of one descriptor.
    pub fn window(&self, window_id: WindowId) -> Signal<WindowDescriptor> {
        let state = self.state;
        Signal::derive(move || state.with(|state| state.window(window_id).clone()))
    }

    /// Current descriptor for `window_id` without tracking.
    pub fn get_window(&self, window_id: WindowId) -> WindowDescriptor {
        self.state
            .with_untracked(|state| state.window(window_id).clone())
    }

    /// Validates an untyped window key against the registry, then opens it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownWindow`] when `key` names no registered window. The store
    /// is not touched in that case.
    pub fn open_window_by_key(
        &self,
        key: &str,
        payload: Option<WindowPayload>,
    ) -> Result<WindowId, RegistryError> {
        let window_id = self.registry.with_value(|registry| registry.resolve(key))?;
        self.open_window(window_id, payload);
        Ok(window_id)
    }

    /// Returns a copy of the registry backing this store.
    pub fn registry(&self) -> WindowRegistry {
        self.registry.get_value()
    }

    /// Returns the collaborator bundle for window adapters.
    pub fn host(&self) -> DesktopHostContext {
        self.host.get_value()
    }
}

/// Loads the compiled-in registry, falling back to the default catalog when it fails to parse.
pub fn load_registry() -> WindowRegistry {
    WindowRegistry::builtin().unwrap_or_else(|err| {
        logging::warn!("window manifest rejected, using defaults: {err}");
        WindowRegistry::default()
    })
}

#[component]
/// Provides [`WindowStore`] to descendant components.
pub fn DesktopProvider(
    /// Collaborators for window adapters. Defaults to the selected host strategy.
    #[prop(optional)]
    host: Option<DesktopHostContext>,
    children: Children,
) -> impl IntoView {
    let store = WindowStore::new(load_registry(), host.unwrap_or_default());
    logging::log!(
        "desktop runtime ready with {} host collaborators",
        store.host.with_value(|host| host.host_strategy_name())
    );
    provide_context(store);

    children().into_view()
}

/// Returns the current [`WindowStore`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_window_store() -> WindowStore {
    use_context::<WindowStore>().expect("WindowStore not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{ImagePayload, PayloadKind, TextPayload};

    fn with_store(test: impl FnOnce(WindowStore)) {
        let runtime = create_runtime();
        let store = WindowStore::new(load_registry(), DesktopHostContext::default());
        test(store);
        runtime.dispose();
    }

    #[test]
    fn store_starts_with_every_window_closed() {
        with_store(|store| {
            for id in WindowId::ALL {
                assert_eq!(store.get_window(id), WindowDescriptor::closed(id));
            }
        });
    }

    #[test]
    fn operations_flow_through_the_reducer() {
        with_store(|store| {
            store.open_window(WindowId::Finder, None);
            store.open_window(WindowId::Terminal, None);
            store.focus_window(WindowId::Finder);

            assert_eq!(store.get_window(WindowId::Finder).z_index, 3);
            assert_eq!(store.get_window(WindowId::Terminal).z_index, 2);

            store.toggle_app(WindowId::Terminal);
            assert!(!store.get_window(WindowId::Terminal).is_open);

            store.close_window(WindowId::Finder);
            assert_eq!(store.state.get_untracked().open_window_ids(), Vec::new());
        });
    }

    #[test]
    fn rejected_actions_leave_state_untouched() {
        with_store(|store| {
            store.open_window(WindowId::Trash, None);
            store.open_window(
                WindowId::ImgFile,
                Some(WindowPayload::Text(TextPayload {
                    name: "Notes".to_string(),
                    image: None,
                    subtitle: None,
                    description: Vec::new(),
                })),
            );

            assert_eq!(store.state.get_untracked(), DesktopState::default());
            assert_eq!(WindowId::ImgFile.payload_kind(), PayloadKind::Image);
        });
    }

    #[test]
    fn window_signal_tracks_its_descriptor() {
        with_store(|store| {
            let photos = store.window(WindowId::Photos);
            assert!(!photos.get_untracked().is_open);

            store.open_window(WindowId::Photos, None);
            assert!(photos.get_untracked().is_open);
            assert_eq!(photos.get_untracked().z_index, 1);
        });
    }

    #[test]
    fn keys_are_validated_before_reaching_the_store() {
        with_store(|store| {
            let payload = WindowPayload::Image(ImagePayload {
                name: "Gallery image".to_string(),
                image_url: "/images/gal1.png".to_string(),
            });

            assert_eq!(
                store.open_window_by_key(" imgfile ", Some(payload.clone())),
                Ok(WindowId::ImgFile)
            );
            assert_eq!(store.get_window(WindowId::ImgFile).data, Some(payload));

            assert_eq!(
                store.open_window_by_key("launchpad", None),
                Err(RegistryError::UnknownWindow("launchpad".to_string()))
            );
            assert_eq!(store.state.get_untracked().open_window_ids(), vec![WindowId::ImgFile]);
        });
    }
}
