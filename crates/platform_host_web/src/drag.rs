//! Pointer-event drag adapter.
//!
//! Dragging writes the CSS `translate` property so it composes with the entry transition, which
//! animates `transform`.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use platform_host::{DragHandle, DragProvider};
use wasm_bindgen::{closure::Closure, JsCast};

/// Descendants matching this selector receive presses without starting a drag.
pub const CLICKABLE_SELECTOR: &str = "a, button, input, textarea, select";

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    pointer_id: i32,
    pointer_start: (f64, f64),
    origin: (f64, f64),
}

type PointerListener = Closure<dyn FnMut(web_sys::PointerEvent)>;

/// Browser drag provider built on pointer events and pointer capture.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerDragProvider;

impl DragProvider for PointerDragProvider {
    type Element = web_sys::HtmlElement;

    fn create_draggable(
        &self,
        element: &web_sys::HtmlElement,
        on_press: Rc<dyn Fn()>,
    ) -> Result<Box<dyn DragHandle>, String> {
        let session = Rc::new(Cell::new(None::<DragSession>));
        let handle = PointerDragHandle {
            element: element.clone(),
            session: session.clone(),
            listeners: RefCell::new(Vec::new()),
        };

        let pressed_element = element.clone();
        let press_session = session.clone();
        handle.listen(
            "pointerdown",
            PointerListener::wrap(Box::new(move |ev: web_sys::PointerEvent| {
                if !is_primary_press(&ev) {
                    return;
                }
                on_press();
                if pressed_clickable(&ev) {
                    return;
                }
                let _ = pressed_element.set_pointer_capture(ev.pointer_id());
                press_session.set(Some(DragSession {
                    pointer_id: ev.pointer_id(),
                    pointer_start: (f64::from(ev.client_x()), f64::from(ev.client_y())),
                    origin: parse_translate(&read_translate(&pressed_element)),
                }));
            })),
        )?;

        let moved_element = element.clone();
        let move_session = session.clone();
        handle.listen(
            "pointermove",
            PointerListener::wrap(Box::new(move |ev: web_sys::PointerEvent| {
                let Some(active) = move_session.get() else {
                    return;
                };
                if active.pointer_id != ev.pointer_id() {
                    return;
                }
                ev.prevent_default();
                let (x, y) = drag_offset(
                    active.origin,
                    active.pointer_start,
                    (f64::from(ev.client_x()), f64::from(ev.client_y())),
                );
                let _ = moved_element
                    .style()
                    .set_property("translate", &format_translate(x, y));
            })),
        )?;

        for event_name in ["pointerup", "pointercancel"] {
            let released_element = element.clone();
            let end_session = session.clone();
            handle.listen(
                event_name,
                PointerListener::wrap(Box::new(move |ev: web_sys::PointerEvent| {
                    if let Some(active) = end_session.take() {
                        if active.pointer_id == ev.pointer_id() {
                            let _ = released_element.release_pointer_capture(active.pointer_id);
                        } else {
                            end_session.set(Some(active));
                        }
                    }
                })),
            )?;
        }

        Ok(Box::new(handle))
    }
}

struct PointerDragHandle {
    element: web_sys::HtmlElement,
    session: Rc<Cell<Option<DragSession>>>,
    listeners: RefCell<Vec<(&'static str, PointerListener)>>,
}

impl PointerDragHandle {
    fn listen(&self, event_name: &'static str, listener: PointerListener) -> Result<(), String> {
        self.element
            .add_event_listener_with_callback(event_name, listener.as_ref().unchecked_ref())
            .map_err(|err| format!("failed to attach `{event_name}` drag listener: {err:?}"))?;
        self.listeners.borrow_mut().push((event_name, listener));
        Ok(())
    }
}

impl DragHandle for PointerDragHandle {
    fn release(&mut self) {
        if let Some(active) = self.session.take() {
            let _ = self.element.release_pointer_capture(active.pointer_id);
        }
        for (event_name, listener) in self.listeners.borrow_mut().drain(..) {
            let _ = self
                .element
                .remove_event_listener_with_callback(event_name, listener.as_ref().unchecked_ref());
        }
    }
}

impl Drop for PointerDragHandle {
    fn drop(&mut self) {
        self.release();
    }
}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn pressed_clickable(ev: &web_sys::PointerEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|target| target.closest(CLICKABLE_SELECTOR).ok().flatten())
        .is_some()
}

fn read_translate(element: &web_sys::HtmlElement) -> String {
    element
        .style()
        .get_property_value("translate")
        .unwrap_or_default()
}

/// Parses an inline CSS `translate` value written by [`format_translate`].
///
/// Missing, `none`, or malformed components read as `0`.
pub fn parse_translate(raw: &str) -> (f64, f64) {
    let mut parts = raw
        .split_whitespace()
        .map(|part| part.trim_end_matches("px").parse::<f64>().unwrap_or(0.0));
    let x = parts.next().unwrap_or(0.0);
    let y = parts.next().unwrap_or(0.0);
    (x, y)
}

/// Formats a pixel offset as a CSS `translate` value.
pub fn format_translate(x: f64, y: f64) -> String {
    format!("{x}px {y}px")
}

fn drag_offset(origin: (f64, f64), pointer_start: (f64, f64), pointer: (f64, f64)) -> (f64, f64) {
    (
        origin.0 + pointer.0 - pointer_start.0,
        origin.1 + pointer.1 - pointer_start.1,
    )
}
