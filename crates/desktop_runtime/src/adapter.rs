//! Framework-independent window adapter.
//!
//! [`WindowAdapter`] binds one mounted element to one [`WindowId`]: it derives visibility and the
//! entry transition from the descriptor phase, and owns the drag registration that focuses the
//! window on press. Collaborator failures are logged and never reach the window store.

use std::rc::Rc;

use leptos::logging;
use platform_host::{AnimationEngine, DragHandle, DragProvider};

use crate::model::{WindowDescriptor, WindowId, WindowPhase};

/// Stacking value applied to a window element's `z-index` property.
pub fn stacking_value(z_index: u32) -> String {
    z_index.to_string()
}

/// Binds a mounted window element to its descriptor through injected collaborators.
pub struct WindowAdapter<E> {
    window_id: WindowId,
    animation: Rc<dyn AnimationEngine<Element = E>>,
    drag: Rc<dyn DragProvider<Element = E>>,
    element: Option<E>,
    phase: WindowPhase,
    drag_handle: Option<Box<dyn DragHandle>>,
}

impl<E> WindowAdapter<E> {
    /// Creates an unmounted adapter for `window_id`.
    pub fn new(
        window_id: WindowId,
        animation: Rc<dyn AnimationEngine<Element = E>>,
        drag: Rc<dyn DragProvider<Element = E>>,
    ) -> Self {
        Self {
            window_id,
            animation,
            drag,
            element: None,
            phase: WindowPhase::Closed,
            drag_handle: None,
        }
    }

    /// Window this adapter is bound to.
    pub fn window_id(&self) -> WindowId {
        self.window_id
    }

    /// Last phase applied to the element.
    pub fn phase(&self) -> WindowPhase {
        self.phase
    }

    /// Whether an element is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.element.is_some()
    }

    /// Mounts `element`, registers it as draggable and applies the descriptor's phase.
    ///
    /// A previously mounted element is unmounted first.
    pub fn mount(&mut self, element: E, on_press: Rc<dyn Fn()>, descriptor: &WindowDescriptor) {
        if self.element.is_some() {
            self.unmount();
        }
        self.attach_drag(&element, on_press);
        self.element = Some(element);
        self.apply(descriptor.phase(), true);
    }

    /// Applies a descriptor change. Only phase transitions touch the element.
    pub fn sync(&mut self, descriptor: &WindowDescriptor) {
        if descriptor.id != self.window_id {
            return;
        }
        let next = descriptor.phase();
        if next == self.phase {
            return;
        }
        self.apply(next, false);
    }

    /// Rebinds the adapter to another window id, replacing the drag registration.
    pub fn rebind(
        &mut self,
        window_id: WindowId,
        on_press: Rc<dyn Fn()>,
        descriptor: &WindowDescriptor,
    ) {
        self.release_drag();
        self.window_id = window_id;
        let Some(element) = self.element.take() else {
            self.phase = descriptor.phase();
            return;
        };
        self.attach_drag(&element, on_press);
        self.element = Some(element);
        self.apply(descriptor.phase(), true);
    }

    /// Releases the drag registration, cancels running animations and forgets the element.
    pub fn unmount(&mut self) {
        self.release_drag();
        if let Some(element) = self.element.take() {
            self.animation.cancel(&element);
        }
        self.phase = WindowPhase::Closed;
    }

    fn attach_drag(&mut self, element: &E, on_press: Rc<dyn Fn()>) {
        match self.drag.create_draggable(element, on_press) {
            Ok(handle) => self.drag_handle = Some(handle),
            Err(err) => logging::warn!("window `{}` drag setup failed: {err}", self.window_id),
        }
    }

    fn release_drag(&mut self) {
        if let Some(mut handle) = self.drag_handle.take() {
            handle.release();
        }
    }

    fn apply(&mut self, phase: WindowPhase, initial: bool) {
        self.phase = phase;
        let Some(element) = self.element.as_ref() else {
            return;
        };
        match phase {
            WindowPhase::Open => {
                if let Err(err) = self.animation.set_visibility(element, true) {
                    logging::warn!("window `{}` show failed: {err}", self.window_id);
                }
                if let Err(err) = self.animation.play_enter(element) {
                    logging::warn!("window `{}` enter transition failed: {err}", self.window_id);
                }
            }
            WindowPhase::Closed => {
                if !initial {
                    self.animation.cancel(element);
                }
                if let Err(err) = self.animation.set_visibility(element, false) {
                    logging::warn!("window `{}` hide failed: {err}", self.window_id);
                }
            }
        }
    }
}

impl<E> Drop for WindowAdapter<E> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use platform_host::{AnimationCall, MemoryAnimationEngine, MemoryDragProvider};
    use pretty_assertions::assert_eq;

    use super::*;

    struct Fixture {
        animation: Rc<MemoryAnimationEngine<u32>>,
        drag: Rc<MemoryDragProvider<u32>>,
        presses: Rc<Cell<usize>>,
    }

    impl Fixture {
        fn new() -> Self {
            Self::with_animation(MemoryAnimationEngine::default())
        }

        fn with_animation(animation: MemoryAnimationEngine<u32>) -> Self {
            Self {
                animation: Rc::new(animation),
                drag: Rc::new(MemoryDragProvider::default()),
                presses: Rc::new(Cell::new(0)),
            }
        }

        fn adapter(&self, window_id: WindowId) -> WindowAdapter<u32> {
            WindowAdapter::new(window_id, self.animation.clone(), self.drag.clone())
        }

        fn on_press(&self) -> Rc<dyn Fn()> {
            let presses = self.presses.clone();
            Rc::new(move || presses.set(presses.get() + 1))
        }
    }

    fn descriptor(id: WindowId, is_open: bool) -> WindowDescriptor {
        WindowDescriptor {
            is_open,
            ..WindowDescriptor::closed(id)
        }
    }

    #[test]
    fn mounting_a_closed_window_hides_it_without_animation() {
        let fixture = Fixture::new();
        let mut adapter = fixture.adapter(WindowId::Finder);

        adapter.mount(7, fixture.on_press(), &descriptor(WindowId::Finder, false));

        assert!(adapter.is_mounted());
        assert_eq!(adapter.phase(), WindowPhase::Closed);
        assert_eq!(
            fixture.animation.calls(),
            vec![AnimationCall::Visibility(7, false)]
        );
        assert_eq!(fixture.drag.live_elements(), vec![7]);
    }

    #[test]
    fn open_transition_shows_then_plays_enter() {
        let fixture = Fixture::new();
        let mut adapter = fixture.adapter(WindowId::Terminal);
        adapter.mount(1, fixture.on_press(), &descriptor(WindowId::Terminal, false));
        fixture.animation.clear();

        adapter.sync(&descriptor(WindowId::Terminal, true));
        assert_eq!(
            fixture.animation.calls(),
            vec![AnimationCall::Visibility(1, true), AnimationCall::Enter(1)]
        );

        fixture.animation.clear();
        adapter.sync(&descriptor(WindowId::Terminal, false));
        assert_eq!(
            fixture.animation.calls(),
            vec![AnimationCall::Cancel(1), AnimationCall::Visibility(1, false)]
        );
        assert_eq!(adapter.phase(), WindowPhase::Closed);
    }

    #[test]
    fn stacking_changes_do_not_replay_the_transition() {
        let fixture = Fixture::new();
        let mut adapter = fixture.adapter(WindowId::Safari);
        adapter.mount(3, fixture.on_press(), &descriptor(WindowId::Safari, true));
        fixture.animation.clear();

        let mut raised = descriptor(WindowId::Safari, true);
        raised.z_index = 9;
        adapter.sync(&raised);

        assert_eq!(fixture.animation.calls(), Vec::new());
    }

    #[test]
    fn descriptors_for_other_windows_are_ignored() {
        let fixture = Fixture::new();
        let mut adapter = fixture.adapter(WindowId::Safari);
        adapter.mount(3, fixture.on_press(), &descriptor(WindowId::Safari, false));
        fixture.animation.clear();

        adapter.sync(&descriptor(WindowId::Photos, true));

        assert_eq!(adapter.phase(), WindowPhase::Closed);
        assert_eq!(fixture.animation.calls(), Vec::new());
    }

    #[test]
    fn collaborator_failures_do_not_change_the_applied_phase() {
        let fixture = Fixture::with_animation(MemoryAnimationEngine::failing("no animations"));
        let mut adapter = fixture.adapter(WindowId::Contact);
        adapter.mount(2, fixture.on_press(), &descriptor(WindowId::Contact, false));

        adapter.sync(&descriptor(WindowId::Contact, true));

        assert_eq!(adapter.phase(), WindowPhase::Open);
    }

    #[test]
    fn press_on_mounted_element_runs_the_focus_callback() {
        let fixture = Fixture::new();
        let mut adapter = fixture.adapter(WindowId::Photos);
        adapter.mount(4, fixture.on_press(), &descriptor(WindowId::Photos, true));

        assert_eq!(fixture.drag.press(&4), 1);
        assert_eq!(fixture.presses.get(), 1);
    }

    #[test]
    fn rebind_replaces_the_drag_registration() {
        let fixture = Fixture::new();
        let mut adapter = fixture.adapter(WindowId::TxtFile);
        adapter.mount(5, fixture.on_press(), &descriptor(WindowId::TxtFile, false));

        adapter.rebind(
            WindowId::ImgFile,
            fixture.on_press(),
            &descriptor(WindowId::ImgFile, true),
        );

        assert_eq!(adapter.window_id(), WindowId::ImgFile);
        assert_eq!(adapter.phase(), WindowPhase::Open);
        assert_eq!(fixture.drag.created_count(), 2);
        assert_eq!(fixture.drag.live_elements(), vec![5]);
        assert_eq!(fixture.drag.press(&5), 1);
    }

    #[test]
    fn remounting_never_accumulates_drag_instances() {
        let fixture = Fixture::new();
        let mut adapter = fixture.adapter(WindowId::Finder);
        adapter.mount(1, fixture.on_press(), &descriptor(WindowId::Finder, true));
        adapter.mount(2, fixture.on_press(), &descriptor(WindowId::Finder, true));

        assert_eq!(fixture.drag.live_elements(), vec![2]);
    }

    #[test]
    fn unmount_and_drop_release_everything() {
        let fixture = Fixture::new();
        let mut adapter = fixture.adapter(WindowId::Resume);
        adapter.mount(6, fixture.on_press(), &descriptor(WindowId::Resume, true));
        adapter.unmount();

        assert!(!adapter.is_mounted());
        assert_eq!(fixture.drag.live_elements(), Vec::<u32>::new());
        assert_eq!(
            fixture.animation.calls().last(),
            Some(&AnimationCall::Cancel(6))
        );

        let mut dropped = fixture.adapter(WindowId::Resume);
        dropped.mount(8, fixture.on_press(), &descriptor(WindowId::Resume, false));
        drop(dropped);
        assert_eq!(fixture.drag.live_elements(), Vec::<u32>::new());
    }

    #[test]
    fn stacking_value_is_the_bare_z_index() {
        assert_eq!(stacking_value(12), "12");
        assert_eq!(stacking_value(0), "0");
    }
}
