//! Drag-gesture contracts and in-memory adapters.

use std::{cell::RefCell, marker::PhantomData, rc::Rc};

/// Scoped drag registration returned by [`DragProvider::create_draggable`].
///
/// After `release` no gesture handler registered by the provider may remain attached.
/// Releasing twice must be harmless.
pub trait DragHandle {
    /// Detaches every gesture handler owned by this registration.
    fn release(&mut self);
}

/// Host service that makes an element draggable.
pub trait DragProvider {
    /// Element handle type the provider operates on.
    type Element;

    /// Makes `element` draggable. `on_press` runs on every press, before any drag begins.
    fn create_draggable(
        &self,
        element: &Self::Element,
        on_press: Rc<dyn Fn()>,
    ) -> Result<Box<dyn DragHandle>, String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Drag handle that owns nothing.
pub struct NoopDragHandle;

impl DragHandle for NoopDragHandle {
    fn release(&mut self) {}
}

/// No-op drag provider for unsupported targets and headless tests.
pub struct NoopDragProvider<E> {
    _element: PhantomData<fn(&E)>,
}

impl<E> Default for NoopDragProvider<E> {
    fn default() -> Self {
        Self {
            _element: PhantomData,
        }
    }
}

impl<E> std::fmt::Debug for NoopDragProvider<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("NoopDragProvider")
    }
}

impl<E> DragProvider for NoopDragProvider<E> {
    type Element = E;

    fn create_draggable(
        &self,
        _element: &E,
        _on_press: Rc<dyn Fn()>,
    ) -> Result<Box<dyn DragHandle>, String> {
        Ok(Box::new(NoopDragHandle))
    }
}

struct DragRegistration<E> {
    element: E,
    on_press: Rc<dyn Fn()>,
    released: bool,
}

/// In-memory drag provider that tracks live registrations and can simulate presses.
pub struct MemoryDragProvider<E> {
    registrations: Rc<RefCell<Vec<DragRegistration<E>>>>,
}

impl<E> Default for MemoryDragProvider<E> {
    fn default() -> Self {
        Self {
            registrations: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<E> std::fmt::Debug for MemoryDragProvider<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryDragProvider")
            .field("registrations", &self.registrations.borrow().len())
            .finish()
    }
}

impl<E: Clone + PartialEq> MemoryDragProvider<E> {
    /// Number of registrations ever created.
    pub fn created_count(&self) -> usize {
        self.registrations.borrow().len()
    }

    /// Elements with a registration that has not been released yet.
    pub fn live_elements(&self) -> Vec<E> {
        self.registrations
            .borrow()
            .iter()
            .filter(|registration| !registration.released)
            .map(|registration| registration.element.clone())
            .collect()
    }

    /// Simulates a press on `element`, running every live `on_press` callback attached to it.
    ///
    /// Returns the number of callbacks that ran.
    pub fn press(&self, element: &E) -> usize {
        let callbacks: Vec<Rc<dyn Fn()>> = self
            .registrations
            .borrow()
            .iter()
            .filter(|registration| !registration.released && registration.element == *element)
            .map(|registration| registration.on_press.clone())
            .collect();
        for callback in &callbacks {
            callback();
        }
        callbacks.len()
    }
}

impl<E: Clone + 'static> DragProvider for MemoryDragProvider<E> {
    type Element = E;

    fn create_draggable(
        &self,
        element: &E,
        on_press: Rc<dyn Fn()>,
    ) -> Result<Box<dyn DragHandle>, String> {
        let mut registrations = self.registrations.borrow_mut();
        let index = registrations.len();
        registrations.push(DragRegistration {
            element: element.clone(),
            on_press,
            released: false,
        });
        Ok(Box::new(MemoryDragHandle {
            registrations: self.registrations.clone(),
            index,
        }))
    }
}

struct MemoryDragHandle<E> {
    registrations: Rc<RefCell<Vec<DragRegistration<E>>>>,
    index: usize,
}

impl<E> DragHandle for MemoryDragHandle<E> {
    fn release(&mut self) {
        if let Some(registration) = self.registrations.borrow_mut().get_mut(self.index) {
            registration.released = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_provider_press_runs_live_callbacks_only() {
        let provider = MemoryDragProvider::<&'static str>::default();
        let presses = Rc::new(Cell::new(0));
        let counter = presses.clone();
        let mut handle = provider
            .create_draggable(&"finder", Rc::new(move || counter.set(counter.get() + 1)))
            .expect("draggable");

        assert_eq!(provider.press(&"finder"), 1);
        assert_eq!(provider.press(&"terminal"), 0);
        assert_eq!(presses.get(), 1);

        handle.release();
        handle.release();
        assert_eq!(provider.press(&"finder"), 0);
        assert!(provider.live_elements().is_empty());
        assert_eq!(provider.created_count(), 1);
    }

    #[test]
    fn noop_provider_hands_out_inert_handles() {
        let provider = NoopDragProvider::<()>::default();
        let mut handle = provider
            .create_draggable(&(), Rc::new(|| {}))
            .expect("draggable");
        handle.release();
    }
}
