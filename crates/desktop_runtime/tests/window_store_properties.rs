use desktop_runtime::{
    reduce_desktop, window_manager::top_window, DesktopAction, DesktopState, FolderPayload,
    ImagePayload, ReducerError, TextPayload, WindowId, WindowPayload, WindowRegistry,
};
use proptest::prelude::*;

fn payload_for(window_id: WindowId, n: usize) -> Option<WindowPayload> {
    match window_id {
        WindowId::TxtFile => Some(text_payload(n)),
        WindowId::ImgFile => Some(image_payload(n)),
        _ => None,
    }
}

fn text_payload(n: usize) -> WindowPayload {
    WindowPayload::Text(TextPayload {
        name: format!("note-{n}"),
        image: None,
        subtitle: None,
        description: vec![format!("line-{n}")],
    })
}

fn image_payload(n: usize) -> WindowPayload {
    WindowPayload::Image(ImagePayload {
        name: format!("image-{n}"),
        image_url: format!("/images/{n}.png"),
    })
}

fn folder_payload(n: usize) -> WindowPayload {
    WindowPayload::Folder(FolderPayload {
        id: n as u32,
        name: format!("folder-{n}"),
        icon: None,
        window_position: None,
        children: Vec::new(),
    })
}

fn window_id() -> impl Strategy<Value = WindowId> {
    prop::sample::select(WindowId::ALL.to_vec())
}

fn any_payload() -> impl Strategy<Value = WindowPayload> {
    prop_oneof![
        (0..100usize).prop_map(text_payload),
        (0..100usize).prop_map(image_payload),
        (0..100usize).prop_map(folder_payload),
    ]
}

fn action() -> impl Strategy<Value = DesktopAction> {
    prop_oneof![
        window_id().prop_map(|window_id| DesktopAction::OpenWindow {
            window_id,
            payload: None,
        }),
        (window_id(), 0..100usize).prop_map(|(window_id, n)| DesktopAction::OpenWindow {
            window_id,
            payload: payload_for(window_id, n),
        }),
        (window_id(), any_payload()).prop_map(|(window_id, payload)| {
            DesktopAction::OpenWindow {
                window_id,
                payload: Some(payload),
            }
        }),
        window_id().prop_map(|window_id| DesktopAction::CloseWindow { window_id }),
        window_id().prop_map(|window_id| DesktopAction::FocusWindow { window_id }),
        window_id().prop_map(|window_id| DesktopAction::ToggleApp { window_id }),
    ]
}

fn check_invariants(state: &DesktopState) -> Result<(), TestCaseError> {
    let open: Vec<_> = state.windows().filter(|w| w.is_open).collect();
    for (i, a) in open.iter().enumerate() {
        for b in &open[i + 1..] {
            prop_assert_ne!(a.z_index, b.z_index, "{} and {} share a z-index", a.id, b.id);
        }
    }
    prop_assert!(!state.window(WindowId::Trash).is_open);
    prop_assert!(state.windows().all(|w| w.z_index <= state.z_counter()));
    Ok(())
}

fn check_accepted(
    before: &DesktopState,
    after: &DesktopState,
    action: DesktopAction,
) -> Result<(), TestCaseError> {
    let target = action.window_id();
    match action {
        DesktopAction::OpenWindow { payload, .. } => {
            let window = after.window(target);
            prop_assert!(window.is_open);
            match payload {
                Some(payload) => prop_assert_eq!(window.data.as_ref(), Some(&payload)),
                None => prop_assert_eq!(&window.data, &before.window(target).data),
            }
            prop_assert_eq!(top_window(after), Some(target));
        }
        DesktopAction::CloseWindow { .. } => {
            let window = after.window(target);
            prop_assert!(!window.is_open);
            prop_assert_eq!(&window.data, &before.window(target).data);
            prop_assert_eq!(window.z_index, before.window(target).z_index);
        }
        DesktopAction::FocusWindow { .. } => {
            let raised = after.window(target).z_index;
            prop_assert!(after
                .windows()
                .filter(|w| w.id != target)
                .all(|w| w.z_index < raised));
        }
        DesktopAction::ToggleApp { .. } => {
            prop_assert_ne!(after.window(target).is_open, before.window(target).is_open);
            prop_assert_eq!(&after.window(target).data, &before.window(target).data);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn action_sequences_preserve_store_invariants(actions in prop::collection::vec(action(), 1..200)) {
        let registry = WindowRegistry::builtin().expect("builtin registry");
        let mut state = DesktopState::default();

        for action in actions {
            let before = state.clone();
            match reduce_desktop(&mut state, &registry, action.clone()) {
                Ok(()) => check_accepted(&before, &state, action)?,
                Err(_) => prop_assert_eq!(&state, &before),
            }
            check_invariants(&state)?;
        }
    }

    #[test]
    fn payloads_of_another_kind_are_rejected(window_id in window_id(), payload in any_payload()) {
        let registry = WindowRegistry::builtin().expect("builtin registry");
        let mut state = DesktopState::default();
        let accepts = registry.is_openable(window_id) && window_id.payload_kind() == payload.kind();

        let result = reduce_desktop(
            &mut state,
            &registry,
            DesktopAction::OpenWindow {
                window_id,
                payload: Some(payload),
            },
        );

        prop_assert_eq!(result.is_ok(), accepts);
        prop_assert_eq!(state.window(window_id).is_open, accepts);
    }
}

#[test]
fn closing_is_idempotent_for_every_window() {
    let registry = WindowRegistry::builtin().expect("builtin registry");

    for window_id in WindowId::ALL {
        let mut state = DesktopState::default();
        let opened = reduce_desktop(
            &mut state,
            &registry,
            DesktopAction::OpenWindow {
                window_id,
                payload: payload_for(window_id, 1),
            },
        );
        if registry.is_openable(window_id) {
            assert_eq!(opened, Ok(()));
        } else {
            assert_eq!(opened, Err(ReducerError::WindowDisabled(window_id)));
        }
        let close = DesktopAction::CloseWindow { window_id };

        reduce_desktop(&mut state, &registry, close.clone()).expect("close");
        let once = state.clone();
        reduce_desktop(&mut state, &registry, close).expect("close again");

        assert_eq!(state, once);
        assert!(!state.window(window_id).is_open);
    }
}

#[test]
fn every_openable_window_opens() {
    let registry = WindowRegistry::builtin().expect("builtin registry");
    let mut state = DesktopState::default();

    for window_id in registry.list_window_ids() {
        let result = reduce_desktop(
            &mut state,
            &registry,
            DesktopAction::OpenWindow {
                window_id,
                payload: None,
            },
        );
        assert_eq!(result.is_ok(), registry.is_openable(window_id));
        assert_eq!(state.window(window_id).is_open, registry.is_openable(window_id));
    }
}
