//! Reducer actions and transition logic for the window store.

use thiserror::Error;

use crate::{
    model::{DesktopState, PayloadKind, WindowId, WindowPayload},
    registry::WindowRegistry,
    window_manager::raise_window,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open (and raise) a window, replacing its payload when one is supplied.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
        /// New content for the window. `None` keeps the previous payload.
        payload: Option<WindowPayload>,
    },
    /// Close a window, keeping its payload and stacking value.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Raise a window above every other window.
    FocusWindow {
        /// Window to raise.
        window_id: WindowId,
    },
    /// Dock toggle: open when closed, close when open.
    ToggleApp {
        /// Window associated with the dock entry.
        window_id: WindowId,
    },
}

impl DesktopAction {
    /// Window targeted by this action.
    pub fn window_id(&self) -> WindowId {
        match self {
            Self::OpenWindow { window_id, .. }
            | Self::CloseWindow { window_id }
            | Self::FocusWindow { window_id }
            | Self::ToggleApp { window_id } => *window_id,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for rejected actions. A rejected action leaves state untouched.
pub enum ReducerError {
    /// The registry marks the window as not openable.
    #[error("window `{0}` cannot be opened")]
    WindowDisabled(WindowId),
    /// The payload shape does not belong to the target window.
    #[error("window `{window_id}` expects a {expected} payload, got {found}")]
    PayloadMismatch {
        /// Target window.
        window_id: WindowId,
        /// Payload kind the window accepts.
        expected: PayloadKind,
        /// Payload kind that was supplied.
        found: PayloadKind,
    },
    /// The shared stacking counter cannot grow any further.
    #[error("window stacking counter exhausted")]
    StackExhausted,
}

/// Applies a [`DesktopAction`] to the window store state.
///
/// # Errors
///
/// Returns [`ReducerError`] when the action is rejected; `state` is unchanged in that case.
pub fn reduce_desktop(
    state: &mut DesktopState,
    registry: &WindowRegistry,
    action: DesktopAction,
) -> Result<(), ReducerError> {
    match action {
        DesktopAction::OpenWindow { window_id, payload } => {
            open_window_internal(state, registry, window_id, payload)
        }
        DesktopAction::CloseWindow { window_id } => {
            state.window_mut(window_id).is_open = false;
            Ok(())
        }
        DesktopAction::FocusWindow { window_id } => {
            if raise_window(state, window_id) {
                Ok(())
            } else {
                Err(ReducerError::StackExhausted)
            }
        }
        DesktopAction::ToggleApp { window_id } => {
            if state.window(window_id).is_open {
                state.window_mut(window_id).is_open = false;
                Ok(())
            } else {
                open_window_internal(state, registry, window_id, None)
            }
        }
    }
}

fn open_window_internal(
    state: &mut DesktopState,
    registry: &WindowRegistry,
    window_id: WindowId,
    payload: Option<WindowPayload>,
) -> Result<(), ReducerError> {
    if !registry.is_openable(window_id) {
        return Err(ReducerError::WindowDisabled(window_id));
    }
    if let Some(payload) = payload.as_ref() {
        let expected = window_id.payload_kind();
        if payload.kind() != expected {
            return Err(ReducerError::PayloadMismatch {
                window_id,
                expected,
                found: payload.kind(),
            });
        }
    }
    if !raise_window(state, window_id) {
        return Err(ReducerError::StackExhausted);
    }

    let window = state.window_mut(window_id);
    window.is_open = true;
    if payload.is_some() {
        window.data = payload;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{ImagePayload, TextPayload};

    fn registry() -> WindowRegistry {
        WindowRegistry::builtin().expect("builtin registry")
    }

    fn apply(state: &mut DesktopState, action: DesktopAction) {
        reduce_desktop(state, &registry(), action).expect("action applies");
    }

    fn open(window_id: WindowId) -> DesktopAction {
        DesktopAction::OpenWindow {
            window_id,
            payload: None,
        }
    }

    fn image(url: &str) -> WindowPayload {
        WindowPayload::Image(ImagePayload {
            name: "Gallery image".to_string(),
            image_url: url.to_string(),
        })
    }

    fn notes() -> WindowPayload {
        WindowPayload::Text(TextPayload {
            name: "Notes".to_string(),
            image: None,
            subtitle: None,
            description: vec!["line1".to_string(), "line2".to_string()],
        })
    }

    #[test]
    fn open_open_focus_scenario_stacks_with_shared_counter() {
        let mut state = DesktopState::default();

        apply(&mut state, open(WindowId::Finder));
        assert!(state.window(WindowId::Finder).is_open);
        assert_eq!(state.window(WindowId::Finder).z_index, 1);

        apply(&mut state, open(WindowId::Terminal));
        assert!(state.window(WindowId::Terminal).is_open);
        assert_eq!(state.window(WindowId::Terminal).z_index, 2);

        apply(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: WindowId::Finder,
            },
        );
        assert_eq!(state.window(WindowId::Finder).z_index, 3);
        assert_eq!(state.window(WindowId::Terminal).z_index, 2);
    }

    #[test]
    fn reopening_replaces_payload_wholesale() {
        let mut state = DesktopState::default();
        apply(
            &mut state,
            DesktopAction::OpenWindow {
                window_id: WindowId::ImgFile,
                payload: Some(image("a.png")),
            },
        );
        apply(
            &mut state,
            DesktopAction::OpenWindow {
                window_id: WindowId::ImgFile,
                payload: Some(image("b.png")),
            },
        );

        assert_eq!(state.window(WindowId::ImgFile).data, Some(image("b.png")));
        assert_eq!(state.window(WindowId::ImgFile).z_index, 2);
    }

    #[test]
    fn close_keeps_payload_for_reopen_without_payload() {
        let mut state = DesktopState::default();
        apply(
            &mut state,
            DesktopAction::OpenWindow {
                window_id: WindowId::TxtFile,
                payload: Some(notes()),
            },
        );
        apply(
            &mut state,
            DesktopAction::CloseWindow {
                window_id: WindowId::TxtFile,
            },
        );
        assert!(!state.window(WindowId::TxtFile).is_open);
        assert_eq!(state.window(WindowId::TxtFile).data, Some(notes()));

        apply(&mut state, open(WindowId::TxtFile));
        assert!(state.window(WindowId::TxtFile).is_open);
        assert_eq!(state.window(WindowId::TxtFile).data, Some(notes()));
    }

    #[test]
    fn closing_twice_matches_closing_once() {
        let mut state = DesktopState::default();
        apply(&mut state, open(WindowId::Contact));
        let close = DesktopAction::CloseWindow {
            window_id: WindowId::Contact,
        };

        apply(&mut state, close.clone());
        let once = state.clone();
        apply(&mut state, close);
        assert_eq!(state, once);
        assert_eq!(state.window(WindowId::Contact).z_index, 1);
    }

    #[test]
    fn disabled_window_never_opens() {
        let mut state = DesktopState::default();
        let registry = registry();

        for action in [
            open(WindowId::Trash),
            DesktopAction::ToggleApp {
                window_id: WindowId::Trash,
            },
        ] {
            assert_eq!(
                reduce_desktop(&mut state, &registry, action),
                Err(ReducerError::WindowDisabled(WindowId::Trash))
            );
        }
        assert_eq!(state, DesktopState::default());
    }

    #[test]
    fn mismatched_payload_is_rejected_without_side_effects() {
        let mut state = DesktopState::default();
        let result = reduce_desktop(
            &mut state,
            &registry(),
            DesktopAction::OpenWindow {
                window_id: WindowId::TxtFile,
                payload: Some(image("a.png")),
            },
        );

        assert_eq!(
            result,
            Err(ReducerError::PayloadMismatch {
                window_id: WindowId::TxtFile,
                expected: PayloadKind::Text,
                found: PayloadKind::Image,
            })
        );
        assert_eq!(state, DesktopState::default());
    }

    #[test]
    fn toggle_alternates_and_preserves_payload() {
        let mut state = DesktopState::default();
        let toggle = DesktopAction::ToggleApp {
            window_id: WindowId::ImgFile,
        };
        apply(
            &mut state,
            DesktopAction::OpenWindow {
                window_id: WindowId::ImgFile,
                payload: Some(image("a.png")),
            },
        );

        apply(&mut state, toggle.clone());
        assert!(!state.window(WindowId::ImgFile).is_open);

        apply(&mut state, toggle);
        let window = state.window(WindowId::ImgFile);
        assert!(window.is_open);
        assert_eq!(window.z_index, 2);
        assert_eq!(window.data, Some(image("a.png")));
    }

    #[test]
    fn focusing_a_closed_window_raises_without_opening() {
        let mut state = DesktopState::default();
        apply(&mut state, open(WindowId::Safari));
        apply(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: WindowId::Photos,
            },
        );

        let photos = state.window(WindowId::Photos);
        assert!(!photos.is_open);
        assert_eq!(photos.z_index, 2);
        assert!(photos.z_index > state.window(WindowId::Safari).z_index);
    }

    #[test]
    fn action_reports_its_target() {
        assert_eq!(
            DesktopAction::ToggleApp {
                window_id: WindowId::Photos,
            }
            .window_id(),
            WindowId::Photos
        );
    }
}
